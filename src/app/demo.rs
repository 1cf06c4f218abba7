//! Walkthrough that wires both example holders to their delegates and drives them once.

use std::rc::Rc;

use serde::Serialize;

use crate::app::{CookieShop, ItemCatalog};
use crate::config::PlaygroundConfig;
use crate::core::bakery::Bakery;
use crate::core::item_list::ItemList;
use crate::domain::model::Cookie;
use crate::domain::ports::{BakeryDelegate, ItemDataSource, ItemListDelegate};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub cookie: Cookie,
    pub cookies_delivered: usize,
    /// Whether the bakery still saw a delegate after the shop was dropped.
    pub bakery_delegate_after_release: bool,
    pub list_title: String,
    pub items: Vec<String>,
    pub selected: Option<usize>,
    pub selections_delivered: usize,
}

pub fn run(config: &PlaygroundConfig) -> Result<DemoReport> {
    let (cookie, cookies_delivered, bakery_delegate_after_release) = run_bakery(config)?;
    let (items, selections_delivered) = run_catalog(config)?;

    Ok(DemoReport {
        cookie,
        cookies_delivered,
        bakery_delegate_after_release,
        list_title: config.catalog.title.clone(),
        items,
        selected: config.catalog.select,
        selections_delivered,
    })
}

fn run_bakery(config: &PlaygroundConfig) -> Result<(Cookie, usize, bool)> {
    let bakery_config = &config.bakery;
    let mut bakery = Bakery::new(bakery_config.recipe);

    let shop = Rc::new(
        CookieShop::new(bakery_config.shop_name.clone())
            .with_preferred_size(bakery_config.preferred_size),
    );
    if config.attach_delegates {
        let delegate: Rc<dyn BakeryDelegate> = shop.clone();
        bakery.set_delegate(Some(&delegate));
    }

    let cookie = bakery.make_cookie(&bakery_config.overrides)?;
    let delivered = shop.received().len();

    // The bakery only borrowed the shop; dropping our handle must empty its slot.
    drop(shop);
    let still_attached = bakery.has_delegate();
    tracing::debug!(still_attached, "shop released");

    Ok((cookie, delivered, still_attached))
}

fn run_catalog(config: &PlaygroundConfig) -> Result<(Vec<String>, usize)> {
    let catalog_config = &config.catalog;
    let mut list = ItemList::new(catalog_config.title.clone());
    let catalog = Rc::new(ItemCatalog::new(catalog_config.items.iter().cloned()));

    if config.attach_delegates {
        let data_source: Rc<dyn ItemDataSource> = catalog.clone();
        let delegate: Rc<dyn ItemListDelegate> = catalog.clone();
        list.set_data_source(Some(&data_source));
        list.set_delegate(Some(&delegate));
    }

    let items = list.items();
    tracing::info!("📋 {} shows {} item(s)", list.title(), items.len());

    if let Some(index) = catalog_config.select {
        list.select_item(index)?;
    }

    Ok((items, catalog.selections().len()))
}
