/// View layer: pure functions from state to iced elements
pub mod grid;
pub mod overlay;
pub mod style;
