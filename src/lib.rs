//! Car Dealer Library
//!
//! Core of the car order configurator: the option catalog, the order engine
//! with its pricing rules, and the interactive menu session that drives them.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod order;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use catalog::{normalize, CarOption, Catalog, CatalogError};
pub use error::CarDealerError;
pub use order::{LineItem, Order, OrderRejection, OrderState, OrderSummary, MAX_OPTIONS};
pub use session::{write_option_listing, MenuChoice, Session};
pub use types::{Model, ModelSelection};
