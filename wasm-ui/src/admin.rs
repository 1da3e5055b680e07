//! Portfolio manager view: uploads, deletions, and sync to the assets file.
//!
//! Uploading reads the selected file into a `data:` URI and dispatches an
//! `Add` to the store; the success label self-clears after three seconds.
//! The Save button POSTs the full list to the local sync helper; when the
//! helper is unreachable or reports failure, a read-only textarea with the
//! ready-to-paste module source appears instead.

use gloo::console;
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use portfolio_site::sync::{SyncResponse, local_endpoint};
use portfolio_site::{Category, ImageRecord, assets_module_source};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::{PortfolioAction, PortfolioHandle};

const STATUS_CLEAR_MS: u32 = 3_000;

/// Lifecycle of the Save button.
#[derive(Clone, Copy, PartialEq)]
enum SyncStatus {
    Idle,
    Syncing,
    Synced,
    Offline,
}

impl SyncStatus {
    fn label(self) -> &'static str {
        match self {
            SyncStatus::Idle => "Save to Assets",
            SyncStatus::Syncing => "Syncing...",
            SyncStatus::Synced => "Portfolio Saved Successfully",
            SyncStatus::Offline => "Server Offline - Manual Sync Ready",
        }
    }

    fn class(self) -> &'static str {
        match self {
            SyncStatus::Idle | SyncStatus::Syncing => "sync-button",
            SyncStatus::Synced => "sync-button synced",
            SyncStatus::Offline => "sync-button offline",
        }
    }
}

async fn push_portfolio(images: &[ImageRecord]) -> Result<(), String> {
    let response = Request::post(&local_endpoint())
        .json(images)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let body: SyncResponse = response.json().await.map_err(|err| err.to_string())?;
    if body.success {
        Ok(())
    } else {
        Err(body
            .error
            .unwrap_or_else(|| "sync helper reported failure".to_string()))
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let store = use_context::<PortfolioHandle>().expect("portfolio context");

    let upload_status = use_state(|| None::<String>);
    let sync_status = use_state(|| SyncStatus::Idle);
    let fallback_source = use_state(|| None::<String>);
    // Pending status-reset timers; dropping them on unmount cancels them.
    let status_timer = use_mut_ref(|| None::<Timeout>);
    let sync_timer = use_mut_ref(|| None::<Timeout>);

    let file_input_ref = use_node_ref();
    let category_ref = use_node_ref();

    let on_zone_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let store = store.clone();
        let upload_status = upload_status.clone();
        let status_timer = status_timer.clone();
        let category_ref = category_ref.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                // No file selected: nothing to do.
                return;
            };

            let category = category_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| Category::parse(&select.value()))
                .unwrap_or(Category::Portrait);

            upload_status.set(Some("Uploading...".to_string()));

            let reader = web_sys::FileReader::new().unwrap();
            let reader_clone = reader.clone();
            let store = store.clone();
            let upload_status = upload_status.clone();
            let status_timer = status_timer.clone();

            let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(result) = reader_clone.result() {
                    if let Some(url) = result.as_string() {
                        let id = store.portfolio.allocate_id(js_sys::Date::now() as u64);
                        store.dispatch(PortfolioAction::Add(ImageRecord { id, url, category }));

                        upload_status.set(Some(format!(
                            "Success! Image added to {category} gallery."
                        )));
                        let upload_status = upload_status.clone();
                        *status_timer.borrow_mut() = Some(Timeout::new(STATUS_CLEAR_MS, move || {
                            upload_status.set(None);
                        }));
                    }
                }
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            let _ = reader.read_as_data_url(&file);
            // Clear the input so the same file can be uploaded again
            input.set_value("");
        })
    };

    let on_sync = {
        let store = store.clone();
        let sync_status = sync_status.clone();
        let sync_timer = sync_timer.clone();
        let fallback_source = fallback_source.clone();
        Callback::from(move |_: MouseEvent| {
            let images = store.portfolio.images().to_vec();
            let sync_status = sync_status.clone();
            let sync_timer = sync_timer.clone();
            let fallback_source = fallback_source.clone();

            sync_status.set(SyncStatus::Syncing);
            spawn_local(async move {
                match push_portfolio(&images).await {
                    Ok(()) => {
                        fallback_source.set(None);
                        sync_status.set(SyncStatus::Synced);
                        let sync_status = sync_status.clone();
                        *sync_timer.borrow_mut() = Some(Timeout::new(STATUS_CLEAR_MS, move || {
                            sync_status.set(SyncStatus::Idle);
                        }));
                    }
                    Err(message) => {
                        console::warn!(
                            "sync helper unavailable, falling back to manual copy:",
                            message
                        );
                        sync_status.set(SyncStatus::Offline);
                        match assets_module_source(&images) {
                            Ok(source) => fallback_source.set(Some(source)),
                            Err(err) => console::warn!(format!("cannot render snippet: {err}")),
                        }
                    }
                }
            });
        })
    };

    let on_delete = |id: String| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(PortfolioAction::Remove(id.clone()));
        })
    };

    html! {
        <section class="section container gallery-page admin-page">
            <div class="gallery-page-header">
                <span class="section-tagline">{ "Internal Use Only" }</span>
                <h1>{ "Portfolio Manager" }</h1>
                <p>{ "Update your public galleries and manage visual assets." }</p>
            </div>

            <div class="admin-grid">
                <div class="admin-form-card">
                    <h3>{ "Add New Image" }</h3>
                    <form class="booking-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="form-group">
                            <label>{ "Category" }</label>
                            <select ref={category_ref}>
                                { for Category::ALL.iter().map(|category| html! {
                                    <option value={category.as_str()}>{ category.label() }</option>
                                })}
                            </select>
                        </div>
                        <div class="upload-area" onclick={on_zone_click}>
                            <div class="upload-icon">{ "\u{2191}" }</div>
                            <p>{ "Click to upload image" }</p>
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden-input"
                                ref={file_input_ref}
                                onchange={on_file_change}
                            />
                        </div>
                        if let Some(status) = &*upload_status {
                            <div class="upload-status">{ status.clone() }</div>
                        }
                    </form>

                    <div class="sync-card">
                        <h4>{ "Portfolio Sync" }</h4>
                        <p class="muted">{ "Save all changes permanently to the assets module." }</p>
                        <button
                            class={classes!("btn-primary", sync_status.class())}
                            onclick={on_sync}
                            disabled={*sync_status == SyncStatus::Syncing}
                        >
                            { sync_status.label() }
                        </button>
                        if let Some(source) = &*fallback_source {
                            <textarea class="sync-output" readonly=true value={source.clone()} />
                        }
                    </div>
                </div>

                <div class="admin-assets-card">
                    <div class="flex-between">
                        <h3>{ "Current Assets" }</h3>
                        <span class="asset-category">
                            { format!("{} TOTAL ASSETS", store.portfolio.len()) }
                        </span>
                    </div>
                    <div class="admin-assets-list">
                        { for store.portfolio.images().iter().map(|img| html! {
                            <div class="admin-asset-item" key={img.id.clone()}>
                                <img src={img.url.clone()} alt="Preview" />
                                <div class="asset-info">
                                    <span class="asset-category">{ img.category.as_str() }</span>
                                    <button class="btn-delete" onclick={on_delete(img.id.clone())}>
                                        { "Remove" }
                                    </button>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
