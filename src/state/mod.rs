/// State management module
///
/// This module handles all application state, including:
/// - The image catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - Grid hover and load tracking (grid.rs)
/// - The detail overlay and the chrome it owns (overlay.rs, chrome.rs)

pub mod catalog;
pub mod chrome;
pub mod data;
pub mod grid;
pub mod overlay;
