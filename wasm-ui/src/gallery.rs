//! Shared gallery page for the portraits, events, and baby-pictures routes.

use portfolio_site::{Category, Route};
use yew::prelude::*;

use crate::state::PortfolioHandle;

#[derive(Properties, PartialEq)]
pub struct GalleryPageProps {
    pub category: Category,
    pub heading: AttrValue,
    pub intro: AttrValue,
    /// Label on the booking call-to-action button.
    pub cta: AttrValue,
    /// Shown instead of tiles when the category is empty. Pages without an
    /// empty message render an empty grid silently.
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

/// Renders exactly the subset of the store whose category matches, in
/// insertion order, one tile per record.
#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let store = use_context::<PortfolioHandle>().expect("portfolio context");
    let navigate = use_context::<Callback<Route>>().expect("navigate context");

    let images: Vec<_> = store.portfolio.by_category(props.category).cloned().collect();

    let on_book = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Booking))
    };

    let grid = if images.is_empty() {
        match &props.empty_message {
            Some(message) => html! { <p class="empty-state">{ message.clone() }</p> },
            None => Html::default(),
        }
    } else {
        html! {
            <>
                { for images.iter().map(|img| html! {
                    <div class="gallery-item" key={img.id.clone()}>
                        <img src={img.url.clone()} alt={props.heading.clone()} />
                    </div>
                })}
            </>
        }
    };

    html! {
        <section class="section container gallery-page">
            <div class="gallery-page-header">
                <span class="section-tagline">{ "The Gallery" }</span>
                <h1>{ props.heading.clone() }</h1>
                <p>{ props.intro.clone() }</p>
            </div>
            <div class="gallery-grid">
                { grid }
            </div>
            <div class="text-center gallery-cta">
                <button class="btn-primary" onclick={on_book}>{ props.cta.clone() }</button>
            </div>
        </section>
    }
}
