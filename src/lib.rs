//! # portfolio-site
//!
//! Domain library for the 9teen visuals photography portfolio site.
//!
//! The browser UI (`wasm-ui`) and the local sync helper (`sync-server`) both
//! build on this crate. Everything here is pure data and string work: image
//! records and their categories, the seed asset catalog, the portfolio store
//! with its persisted envelope, the route table for the single-page router,
//! booking-inquiry composition, and the generator for the `assets.js` source
//! module the sync helper writes.
//!
//! ## Example
//!
//! ```
//! use portfolio_site::{Category, ImageRecord, Portfolio};
//!
//! let mut portfolio = Portfolio::new(vec![
//!     ImageRecord {
//!         id: "1".to_string(),
//!         url: "a.png".to_string(),
//!         category: Category::Portrait,
//!     },
//!     ImageRecord {
//!         id: "2".to_string(),
//!         url: "b.png".to_string(),
//!         category: Category::Event,
//!     },
//! ]);
//!
//! assert_eq!(portfolio.by_category(Category::Event).count(), 1);
//! portfolio.remove("1");
//! assert_eq!(portfolio.len(), 1);
//! ```

pub mod asset;
pub mod booking;
pub mod error;
pub mod route;
pub mod store;
pub mod sync;

pub use asset::{Category, ImageRecord, seed_catalog};
pub use booking::BookingRequest;
pub use error::StateError;
pub use route::Route;
pub use store::{Portfolio, STORAGE_KEY, decode_persisted, encode_persisted};
pub use sync::{SyncResponse, assets_module_source};
