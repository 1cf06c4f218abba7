use std::cell::RefCell;

use crate::core::item_list::ItemList;
use crate::domain::ports::{ItemDataSource, ItemListDelegate};
use crate::utils::error::Result;

/// Owns a set of labeled items and serves them to an [`ItemList`], acting as
/// both its data source and its selection delegate.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: Vec<String>,
    selections: RefCell<Vec<usize>>,
}

impl ItemCatalog {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selections: RefCell::new(Vec::new()),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Indices selected so far, oldest first.
    pub fn selections(&self) -> Vec<usize> {
        self.selections.borrow().clone()
    }
}

impl ItemDataSource for ItemCatalog {
    fn number_of_items(&self, _list: &ItemList) -> usize {
        self.items.len()
    }

    fn item_at(&self, _list: &ItemList, index: usize) -> Option<String> {
        self.items.get(index).cloned()
    }
}

impl ItemListDelegate for ItemCatalog {
    fn did_select_item(&self, list: &ItemList, index: usize) -> Result<()> {
        match self.items.get(index) {
            Some(label) => tracing::info!("👉 {}: selected row {} ({})", list.title(), index, label),
            None => tracing::warn!("{}: selected row {} has no item", list.title(), index),
        }
        self.selections.borrow_mut().push(index);
        Ok(())
    }
}
