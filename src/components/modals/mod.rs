pub mod context_menu;
pub mod error;
pub mod help;
pub mod helpers;
pub mod manager;
pub mod open_file;
pub mod theme_selection;

pub use manager::ModalManager;
