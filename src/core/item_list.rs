use std::cell::Cell;
use std::rc::Rc;

use crate::core::delegate::DelegateSlot;
use crate::core::{ItemDataSource, ItemListDelegate, Result};

/// A table-like list that owns no rows itself: it asks its data source for
/// them and reports selections to its delegate.
#[derive(Debug, Default)]
pub struct ItemList {
    title: String,
    selected: Cell<Option<usize>>,
    data_source: DelegateSlot<dyn ItemDataSource>,
    delegate: DelegateSlot<dyn ItemListDelegate>,
}

impl ItemList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_data_source(&mut self, data_source: Option<&Rc<dyn ItemDataSource>>) {
        self.data_source.set(data_source);
    }

    pub fn set_delegate(&mut self, delegate: Option<&Rc<dyn ItemListDelegate>>) {
        self.delegate.set(delegate);
    }

    pub fn has_data_source(&self) -> bool {
        self.data_source.is_set()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_set()
    }

    pub fn number_of_items(&self) -> usize {
        self.data_source
            .query(|source| source.number_of_items(self))
            .unwrap_or(0)
    }

    pub fn item_at(&self, index: usize) -> Option<String> {
        self.data_source
            .query(|source| source.item_at(self, index))
            .flatten()
    }

    /// Every row the data source currently reports, in order.
    pub fn items(&self) -> Vec<String> {
        (0..self.number_of_items())
            .filter_map(|index| self.item_at(index))
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn select_item(&self, index: usize) -> Result<()> {
        self.selected.set(Some(index));
        tracing::debug!(list = %self.title, index, "item selected");
        self.delegate.notify(|d| d.did_select_item(self, index))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedRows(Vec<&'static str>);

    impl ItemDataSource for FixedRows {
        fn number_of_items(&self, _list: &ItemList) -> usize {
            self.0.len()
        }

        fn item_at(&self, _list: &ItemList, index: usize) -> Option<String> {
            self.0.get(index).map(|s| s.to_string())
        }
    }

    #[derive(Default)]
    struct SelectionLog {
        selections: RefCell<Vec<(String, usize)>>,
    }

    impl ItemListDelegate for SelectionLog {
        fn did_select_item(&self, list: &ItemList, index: usize) -> Result<()> {
            self.selections
                .borrow_mut()
                .push((list.title().to_string(), index));
            Ok(())
        }
    }

    #[test]
    fn test_queries_without_data_source() {
        let list = ItemList::new("empty");
        assert_eq!(list.number_of_items(), 0);
        assert_eq!(list.item_at(0), None);
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_queries_reach_data_source() {
        let source: Rc<dyn ItemDataSource> = Rc::new(FixedRows(vec!["item1", "item2", "item3"]));
        let mut list = ItemList::new("rows");
        list.set_data_source(Some(&source));

        assert_eq!(list.number_of_items(), 3);
        assert_eq!(list.item_at(1).as_deref(), Some("item2"));
        assert_eq!(list.item_at(3), None);
        assert_eq!(list.items(), vec!["item1", "item2", "item3"]);
    }

    #[test]
    fn test_select_without_delegate_is_silent() {
        let list = ItemList::new("rows");
        assert!(list.select_item(2).is_ok());
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_select_passes_list_and_index() {
        let log = Rc::new(SelectionLog::default());
        let as_dyn: Rc<dyn ItemListDelegate> = log.clone();
        let mut list = ItemList::new("rows");
        list.set_delegate(Some(&as_dyn));

        list.select_item(1).unwrap();
        assert_eq!(*log.selections.borrow(), vec![("rows".to_string(), 1)]);
    }
}
