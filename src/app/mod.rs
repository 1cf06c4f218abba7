pub mod catalog;
pub mod cookie_shop;
pub mod demo;

pub use catalog::ItemCatalog;
pub use cookie_shop::CookieShop;
pub use demo::DemoReport;
