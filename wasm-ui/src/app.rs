//! Main application component: routing, navigation, and store context.
//!
//! The current route lives in component state and is re-derived from
//! `location.pathname` on browser back/forward. Switching routes unmounts
//! the previous view, so view-local timers are cancelled by their effect
//! cleanups rather than by polling the document.

use gloo::events::EventListener;
use portfolio_site::{Category, Route, booking::CONTACT_EMAIL};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::admin::AdminPage;
use crate::booking::BookingPage;
use crate::gallery::GalleryPage;
use crate::home::HomePage;
use crate::nav::NavBar;
use crate::state::{PortfolioHandle, PortfolioState};

fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path)
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(current_route);
    let store = use_reducer(PortfolioState::hydrate);

    // Back/forward navigation: recompute the route from the visible path.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let listener = EventListener::new(&window, "popstate", move |_| {
                route.set(current_route());
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            let window = web_sys::window().unwrap();
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(
                    &JsValue::from_str(target.name()),
                    "",
                    Some(target.path()),
                );
            }
            route.set(target);

            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };

    let view = match *route {
        Route::Home => html! { <HomePage /> },
        Route::Portraits => html! {
            <GalleryPage
                category={Category::Portrait}
                heading="Portraits"
                intro="A collection of character studies and cinematic moments."
                cta="Book Portrait Session"
            />
        },
        Route::Events => html! {
            <GalleryPage
                category={Category::Event}
                heading="Events"
                intro="Capturing the energy and atmosphere of world-class occasions."
                cta="Inquire for Event Coverage"
            />
        },
        Route::Babies => html! {
            <GalleryPage
                category={Category::Baby}
                heading="Baby Pictures"
                intro="Precious beginnings and heartfelt stories, captured forever."
                cta="Book a Baby Session"
                empty_message="No baby pictures in the gallery yet. Check back soon!"
            />
        },
        Route::Booking => html! { <BookingPage /> },
        Route::Admin => html! { <AdminPage /> },
    };

    html! {
        <ContextProvider<PortfolioHandle> context={store}>
            <ContextProvider<Callback<Route>> context={on_navigate.clone()}>
                <div class="app">
                    <NavBar current={*route} on_navigate={on_navigate} />
                    <main id="app" class="main">
                        { view }
                    </main>
                    <footer class="footer">
                        <div class="footer-row">
                            <span>{ "9teen visuals | Bespoke photography" }</span>
                            <span class="footer-contact">{ CONTACT_EMAIL }</span>
                        </div>
                        <div class="footer-row">
                            <span>{ "\u{00A9} 2026 9teen visuals" }</span>
                        </div>
                    </footer>
                </div>
            </ContextProvider<Callback<Route>>>
        </ContextProvider<PortfolioHandle>>
    }
}
