pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{CookieShop, DemoReport, ItemCatalog};
pub use config::PlaygroundConfig;
pub use crate::core::{bakery::Bakery, delegate::DelegateSlot, item_list::ItemList};
pub use domain::model::{Cookie, CookieOverrides};
pub use domain::ports::{BakeryDelegate, ItemDataSource, ItemListDelegate};
pub use utils::error::{DelegationError, Result};
