pub mod bakery;
pub mod delegate;
pub mod item_list;

pub use crate::domain::model::{Cookie, CookieOverrides};
pub use crate::domain::ports::{BakeryDelegate, ItemDataSource, ItemListDelegate};
pub use crate::utils::error::Result;
