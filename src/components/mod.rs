pub mod footer;
pub mod modals;
pub mod note_list;
pub mod search_bar;
