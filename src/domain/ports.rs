use crate::core::item_list::ItemList;
use crate::domain::model::Cookie;
use crate::utils::error::Result;

/// Receives a notification for every cookie a [`Bakery`](crate::core::bakery::Bakery) produces.
pub trait BakeryDelegate {
    fn cookie_was_baked(&self, cookie: &Cookie) -> Result<()>;

    /// Size the delegate would like the next cookie to have. Explicit overrides still win.
    fn preferred_cookie_size(&self) -> Option<u32> {
        None
    }
}

/// Supplies the rows an [`ItemList`] displays.
pub trait ItemDataSource {
    fn number_of_items(&self, list: &ItemList) -> usize;
    fn item_at(&self, list: &ItemList, index: usize) -> Option<String>;
}

pub trait ItemListDelegate {
    fn did_select_item(&self, list: &ItemList, index: usize) -> Result<()>;
}
