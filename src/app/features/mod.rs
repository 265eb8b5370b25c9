pub mod navigation;
pub mod search;
pub mod store;
pub mod ui;
