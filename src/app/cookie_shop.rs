use std::cell::RefCell;

use crate::domain::model::Cookie;
use crate::domain::ports::BakeryDelegate;
use crate::utils::error::{DelegationError, Result};

/// Sells whatever its bakery produces. Keeps every cookie it was told about.
#[derive(Debug, Default)]
pub struct CookieShop {
    name: String,
    preferred_size: Option<u32>,
    closed: bool,
    received: RefCell<Vec<Cookie>>,
}

impl CookieShop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_preferred_size(mut self, size: Option<u32>) -> Self {
        self.preferred_size = size;
        self
    }

    /// A shop that refuses every delivery.
    pub fn closed(name: impl Into<String>) -> Self {
        Self {
            closed: true,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn received(&self) -> Vec<Cookie> {
        self.received.borrow().clone()
    }
}

impl BakeryDelegate for CookieShop {
    fn cookie_was_baked(&self, cookie: &Cookie) -> Result<()> {
        if self.closed {
            return Err(DelegationError::delegate(format!(
                "{} is closed and cannot take a cookie",
                self.name
            )));
        }

        tracing::info!(
            "🍪 {} received a cookie (size {}, chocolate chips: {})",
            self.name,
            cookie.size,
            cookie.has_chocolate_chips
        );
        self.received.borrow_mut().push(*cookie);
        Ok(())
    }

    fn preferred_cookie_size(&self) -> Option<u32> {
        self.preferred_size
    }
}
