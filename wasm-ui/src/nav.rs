//! Navigation bar with active-link tracking, a mobile menu toggle, and a
//! condensed style once the page scrolls past the hero edge.

use gloo::events::EventListener;
use portfolio_site::Route;
use yew::prelude::*;

/// Scroll offset past which the bar switches to its condensed style.
const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

fn past_threshold() -> bool {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .is_some_and(|y| y > SCROLLED_THRESHOLD)
}

/// Top navigation bar. Exactly one link carries the `active` class: the one
/// whose route equals the current route.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(past_threshold);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let listener = EventListener::new(&window, "scroll", move |_| {
                let past = past_threshold();
                if past != *scrolled {
                    scrolled.set(past);
                }
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let links = Route::ALL.iter().map(|&route| {
        let on_click = {
            let on_navigate = props.on_navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                // Close the mobile menu on navigate.
                menu_open.set(false);
                on_navigate.emit(route);
            })
        };
        let class = classes!(
            "nav-link",
            (route == props.current).then_some("active"),
        );
        html! {
            <a href={route.path()} {class} onclick={on_click}>
                { route.label() }
            </a>
        }
    });

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-brand">
                <span class="brand-name">{ "9teen visuals" }</span>
            </div>
            <button
                id="menu-toggle"
                class={classes!("menu-toggle", (*menu_open).then_some("active"))}
                onclick={on_toggle}
            >
                <span class="bar" /><span class="bar" /><span class="bar" />
            </button>
            <div class={classes!("nav-links", (*menu_open).then_some("active"))}>
                { for links }
            </div>
        </nav>
    }
}
