//! Landing view: hero slider, about, services, portrait preview, and a
//! booking call-to-action.
//!
//! The hero slider advances every five seconds, wrapping circularly. The
//! interval is owned by an effect and dropped when the view unmounts, so
//! navigating away cancels it deterministically.

use gloo::timers::callback::Interval;
use portfolio_site::{Category, Route};
use yew::prelude::*;

use crate::state::PortfolioHandle;

const SLIDE_INTERVAL_MS: u32 = 5_000;
const SLIDE_COUNT: usize = 3;

const PREVIEW_TITLES: [&str; 3] = ["Fine Art", "Editorial", "Cinema"];

struct ServiceCard {
    title: &'static str,
    blurb: &'static str,
    features: [&'static str; 3],
    highlighted: bool,
}

const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title: "Baby Pictures",
        blurb: "Capturing the earliest, most precious moments of your little one with tenderness and care.",
        features: ["Newborn Sessions", "Milestone Portraits", "Candid Family Moments"],
        highlighted: false,
    },
    ServiceCard {
        title: "Portraits",
        blurb: "Cinematic character studies and corporate portraits that capture the essence of the individual.",
        features: ["Studio & Location", "Creative Direction", "Artistic Retouching"],
        highlighted: true,
    },
    ServiceCard {
        title: "Events",
        blurb: "Comprehensive coverage for high-stakes corporate galas, launches, and private celebrations.",
        features: ["Full Event Narrative", "Rapid Delivery", "Discreet Presence"],
        highlighted: false,
    },
];

fn url_or<'a>(record: Option<&'a portfolio_site::ImageRecord>, fallback: &'a str) -> &'a str {
    record.map_or(fallback, |img| img.url.as_str())
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_context::<PortfolioHandle>().expect("portfolio context");
    let navigate = use_context::<Callback<Route>>().expect("navigate context");
    let slide = use_state(|| 0usize);

    {
        let slide = slide.clone();
        use_effect_with((), move |_| {
            // The closure keeps its own counter; the handle only pushes the
            // next index to the view.
            let mut current = 0usize;
            let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
                current = (current + 1) % SLIDE_COUNT;
                slide.set(current);
            });
            move || drop(interval)
        });
    }

    let portraits: Vec<_> = store
        .portfolio
        .by_category(Category::Portrait)
        .cloned()
        .collect();
    let events: Vec<_> = store
        .portfolio
        .by_category(Category::Event)
        .cloned()
        .collect();

    // Featured slots fall back to placeholder paths when a category is empty.
    let slides = [
        url_or(portraits.first(), "/hero_bg.png").to_string(),
        url_or(portraits.get(1), "/portrait_2.png").to_string(),
        url_or(events.first(), "/event_2.png").to_string(),
    ];
    let about_image = url_or(portraits.get(2), "/portrait_3.png").to_string();

    let go = |target: Route| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    html! {
        <>
            <section class="hero">
                <div class="hero-slider" id="hero-slider">
                    { for slides.iter().enumerate().map(|(idx, url)| {
                        let class = classes!("slide", (idx == *slide).then_some("active"));
                        let style = format!("background-image: url('{url}')");
                        html! { <div {class} {style}></div> }
                    })}
                </div>
                <div class="hero-overlay"></div>
                <div class="container hero-content">
                    <h1 class="reveal-text">
                        { "Elevating " }<br />
                        <span class="text-accent">{ "Visual Perspective" }</span>
                    </h1>
                    <p class="reveal-text-sub">
                        { "Bespoke photography for discerning clients and high-end brands." }
                    </p>
                    <div class="hero-btns">
                        <button class="btn-primary" onclick={go(Route::Booking)}>{ "Inquire Now" }</button>
                        <button class="btn-outline" onclick={go(Route::Portraits)}>{ "Explore Gallery" }</button>
                    </div>
                </div>
                <div class="scroll-indicator">
                    <span>{ "SCROLL" }</span>
                    <div class="line"></div>
                </div>
            </section>

            <section class="about-section container">
                <div class="about-grid">
                    <div class="about-text">
                        <span class="section-tagline">{ "Our Vision" }</span>
                        <h2 class="text-accent">{ "The Art of the Moment" }</h2>
                        <p>
                            { "At 9teen visuals, we don't just take pictures; we craft visual \
                               legacies. Our approach blends technical precision with a cinematic \
                               eye, ensuring every frame resonates with emotion and sophistication." }
                        </p>
                        <p>
                            { "From high-profile events to intimate studio sessions, we bring an \
                               uncompromising standard of excellence to every project." }
                        </p>
                        <button class="btn-text" onclick={go(Route::Portraits)}>
                            { "Learn About Our Process \u{2192}" }
                        </button>
                    </div>
                    <div class="about-image">
                        <div class="image-wrapper">
                            <img src={about_image} alt="Behind the lens" />
                        </div>
                    </div>
                </div>
            </section>

            <section class="services-section">
                <div class="container">
                    <div class="section-header text-center">
                        <span class="section-tagline">{ "Excellence in Everything" }</span>
                        <h2>{ "Bespoke Services" }</h2>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| {
                            let class = classes!("service-card", service.highlighted.then_some("active"));
                            html! {
                                <div {class}>
                                    <div class="service-icon">{ "\u{2726}" }</div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.blurb }</p>
                                    <ul class="service-features">
                                        { for service.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                                    </ul>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </section>

            <section class="preview-section container">
                <div class="preview-header">
                    <div>
                        <span class="section-tagline">{ "Portfolios" }</span>
                        <h2 class="text-accent">{ "Portraiture" }</h2>
                        <p class="muted">{ "Elegance and character, captured in every frame." }</p>
                    </div>
                    <button class="btn-outline" onclick={go(Route::Portraits)}>{ "Full Gallery" }</button>
                </div>
                <div class="gallery-grid">
                    { for portraits.iter().take(3).enumerate().map(|(i, img)| {
                        let title = PREVIEW_TITLES.get(i).copied().unwrap_or("Portrait");
                        html! {
                            <div class="gallery-item">
                                <img src={img.url.clone()} alt="Portrait" />
                                <div class="gallery-overlay"><h3>{ title }</h3></div>
                            </div>
                        }
                    })}
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <h2>{ "Ready to create " }<br />{ "your visual legacy?" }</h2>
                    <p>{ "Currently accepting bookings for Q2 2026." }</p>
                    <button class="btn-primary" onclick={go(Route::Booking)}>{ "Secure Your Date" }</button>
                </div>
            </section>
        </>
    }
}
