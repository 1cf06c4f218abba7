use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cookie {
    pub size: u32,
    pub has_chocolate_chips: bool,
}

impl Default for Cookie {
    fn default() -> Self {
        Self {
            size: 5,
            has_chocolate_chips: false,
        }
    }
}

/// Per-batch adjustments to a bakery's recipe. Unset fields keep the recipe value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieOverrides {
    pub size: Option<u32>,
    pub has_chocolate_chips: Option<bool>,
}

impl CookieOverrides {
    pub fn new(size: u32, has_chocolate_chips: bool) -> Self {
        Self {
            size: Some(size),
            has_chocolate_chips: Some(has_chocolate_chips),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.has_chocolate_chips.is_none()
    }

    pub fn apply(&self, mut cookie: Cookie) -> Cookie {
        if let Some(size) = self.size {
            cookie.size = size;
        }
        if let Some(chips) = self.has_chocolate_chips {
            cookie.has_chocolate_chips = chips;
        }
        cookie
    }
}
