//! Reducer-backed portfolio store wired to browser local storage.
//!
//! Views receive a [`PortfolioHandle`] through context and dispatch
//! [`PortfolioAction`]s instead of mutating shared state directly; every
//! reduction persists the new list synchronously, so storage always mirrors
//! what is on screen.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use portfolio_site::{
    ImageRecord, Portfolio, STORAGE_KEY, decode_persisted, encode_persisted, seed_catalog,
};
use std::rc::Rc;
use yew::prelude::*;

/// Mutations the admin view can apply to the portfolio.
pub enum PortfolioAction {
    Add(ImageRecord),
    Remove(String),
}

/// Store state held by the app-level reducer.
#[derive(PartialEq)]
pub struct PortfolioState {
    pub portfolio: Portfolio,
}

impl PortfolioState {
    /// Initial state: persisted storage if present and valid, else the seed
    /// catalog. A malformed stored value is discarded with a console
    /// warning.
    pub fn hydrate() -> Self {
        let raw = LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten();
        let portfolio = match raw {
            None => Portfolio::new(seed_catalog()),
            Some(raw) => match decode_persisted(&raw) {
                Ok(images) => Portfolio::new(images),
                Err(err) => {
                    console::warn!(format!(
                        "discarding stored portfolio, using catalog: {err}"
                    ));
                    Portfolio::new(seed_catalog())
                }
            },
        };
        Self { portfolio }
    }
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: PortfolioAction) -> Rc<Self> {
        let mut portfolio = self.portfolio.clone();
        match action {
            PortfolioAction::Add(record) => portfolio.add(record),
            PortfolioAction::Remove(id) => portfolio.remove(&id),
        }
        persist(&portfolio);
        Rc::new(Self { portfolio })
    }
}

pub type PortfolioHandle = UseReducerHandle<PortfolioState>;

fn persist(portfolio: &Portfolio) {
    match encode_persisted(portfolio.images()) {
        Ok(raw) => {
            if LocalStorage::raw().set_item(STORAGE_KEY, &raw).is_err() {
                console::warn!("failed to write portfolio to local storage");
            }
        }
        Err(err) => console::warn!(format!("failed to serialize portfolio: {err}")),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_site::Category;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear() {
        let _ = LocalStorage::raw().remove_item(STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn hydrate_starts_from_catalog_when_storage_is_empty() {
        clear();
        let state = PortfolioState::hydrate();
        assert_eq!(state.portfolio.images(), seed_catalog());
    }

    #[wasm_bindgen_test]
    fn persisted_portfolio_round_trips_through_storage() {
        clear();
        let mut portfolio = Portfolio::new(seed_catalog());
        let id = portfolio.allocate_id(1_700_000_000_000);
        portfolio.add(ImageRecord::new(id, "data:image/png;base64,AAAA", Category::Baby));
        persist(&portfolio);

        let state = PortfolioState::hydrate();
        assert_eq!(state.portfolio, portfolio);
        clear();
    }

    #[wasm_bindgen_test]
    fn malformed_storage_falls_back_to_catalog() {
        let _ = LocalStorage::raw().set_item(STORAGE_KEY, "{\"version\":\"zero\"}");
        let state = PortfolioState::hydrate();
        assert_eq!(state.portfolio.images(), seed_catalog());
        clear();
    }
}
