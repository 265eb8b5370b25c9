use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::CommandList;
use crate::domain::search::EntryView;
use crate::domain::store::MissingFilePolicy;
use crate::infrastructure::json_file::DEFAULT_COMMANDS_FILE;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub mod context_menu;
pub mod error;
pub mod input;
pub mod search;
pub mod theme;

// Re-exports
pub use context_menu::ContextMenuState;
pub use error::{ErrorSeverity, ErrorState};
pub use input::{AppTextArea, InputState};
pub use search::SearchState;
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Typing in the search bar, scrolling the note
    OpenFile,       // Path prompt for another commands file
    ContextMenu,    // Right-click menu
    Help,           // Key binding overlay
    ThemeSelection, // Choosing a palette
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub last_saved_at: Option<Instant>,

    // --- Note Data ---
    pub commands: CommandList,
    pub commands_path: PathBuf,
    pub missing_file_policy: MissingFilePolicy,

    // --- Search & Scroll ---
    pub search: SearchState<'a>,
    pub scroll: u16,

    // --- Window Chrome ---
    pub frameless: bool,

    // --- Path Prompt ---
    pub input: Option<InputState<'a>>,
    pub recent_files: Vec<String>,
    pub recent_files_path: Option<PathBuf>,
    pub selected_recent_index: Option<usize>,

    // --- Overlays ---
    pub context_menu: Option<ContextMenuState>,
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &crate::app::config::AppConfig) -> Self {
        let recent_files_path = super::persistence::get_recent_files_path();
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            frameless: config.frameless,
            recent_files: recent_files_path
                .as_deref()
                .map(super::persistence::load_recent_files_from)
                .unwrap_or_default(),
            recent_files_path,
            ..Default::default()
        }
    }

    /// Live search term, exactly as typed.
    #[must_use]
    pub fn search_term(&self) -> String {
        self.search.term()
    }

    /// Highlight/visibility for every entry, in list order.
    #[must_use]
    pub fn entry_views(&self) -> Vec<EntryView> {
        self.search.filter.classify(&self.commands, &self.search_term())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.search.filter.visible_count(&self.commands)
    }

    /// File name shown in titles; falls back to the full path.
    #[must_use]
    pub fn file_label(&self) -> String {
        self.commands_path
            .file_name()
            .map_or_else(
                || self.commands_path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_clear_time = Some(Instant::now());
    }

    /// Shows the error modal, with hints that name the current key bindings.
    pub fn report_error(&mut self, message: impl Into<String>, severity: ErrorSeverity) {
        self.last_error = Some(ErrorState::new(message, severity).with_suggestions(&self.keymap));
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            last_saved_at: None,
            commands: CommandList::default(),
            commands_path: PathBuf::from(DEFAULT_COMMANDS_FILE),
            missing_file_policy: MissingFilePolicy::default(),
            search: SearchState::default(),
            scroll: 0,
            frameless: false,
            input: None,
            recent_files: Vec::new(),
            recent_files_path: None,
            selected_recent_index: None,
            context_menu: None,
            theme_selection: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::default(),
            theme: crate::theme::Theme::default(),
        }
    }
}
