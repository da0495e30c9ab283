//! Shared UI crate for Basepath. Dataset handling, chart scenes, and views live here.

pub mod charts;
pub mod controls;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header with the language switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod tests;
