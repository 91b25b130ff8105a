//! Repository layer over the catalog entities.
//! - The only crate that issues queries; handlers call these functions.
//! - "No matching row" is returned as `Ok(None)`, never as an error.
//! - Derived counts are computed here on every read and never stored.

pub mod errors;
pub mod domain;
pub mod counts;
pub mod menu_service;
pub mod submenu_service;
pub mod dish_service;
#[cfg(test)]
pub mod test_support;
