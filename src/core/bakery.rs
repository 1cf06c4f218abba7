use std::cell::Cell;
use std::rc::Rc;

use crate::core::delegate::DelegateSlot;
use crate::core::{BakeryDelegate, Cookie, CookieOverrides, Result};

/// Produces cookies from a fixed recipe and reports each one to its delegate.
#[derive(Debug, Default)]
pub struct Bakery {
    recipe: Cookie,
    baked: Cell<usize>,
    delegate: DelegateSlot<dyn BakeryDelegate>,
}

impl Bakery {
    pub fn new(recipe: Cookie) -> Self {
        Self {
            recipe,
            baked: Cell::new(0),
            delegate: DelegateSlot::new(),
        }
    }

    pub fn recipe(&self) -> Cookie {
        self.recipe
    }

    pub fn set_delegate(&mut self, delegate: Option<&Rc<dyn BakeryDelegate>>) {
        self.delegate.set(delegate);
    }

    pub fn delegate(&self) -> Option<Rc<dyn BakeryDelegate>> {
        self.delegate.get()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_set()
    }

    pub fn baked_count(&self) -> usize {
        self.baked.get()
    }

    /// Bake one cookie and tell the delegate about it.
    ///
    /// The delegate's preferred size is applied first, then `overrides`. The
    /// cookie counts as baked even when the delegate's callback fails.
    pub fn make_cookie(&self, overrides: &CookieOverrides) -> Result<Cookie> {
        let mut cookie = self.recipe;
        if let Some(size) = self.delegate.query(|d| d.preferred_cookie_size()).flatten() {
            cookie.size = size;
        }
        let cookie = overrides.apply(cookie);
        self.baked.set(self.baked.get() + 1);

        tracing::debug!(
            size = cookie.size,
            has_chocolate_chips = cookie.has_chocolate_chips,
            "cookie baked"
        );

        self.delegate.notify(|d| d.cookie_was_baked(&cookie))?;
        Ok(cookie)
    }
}
