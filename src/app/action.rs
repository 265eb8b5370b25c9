use crate::app::command::Command;
use crate::domain::models::CommandList;
use crate::domain::store::MissingFilePolicy;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search ---
    SearchInput(crossterm::event::KeyEvent), // Edit the search term (live highlight)
    CommitSearch,                            // Enter: toggle the filter
    ClearSearch,                             // Esc with no modal open

    // --- Navigation ---
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollTop,
    ScrollBottom,

    // --- Persistence Intents ---
    SaveCommands,       // Write the list back to the current file
    LoadCommands,       // Re-read the current file
    OpenFileIntent,     // Open the path prompt
    OpenFile(String),   // Switch to another commands file
    RecentFileNext,     // Cycle recent files in the prompt
    RecentFilePrev,

    // --- Window Chrome ---
    ToggleFrameless,

    // --- UI Mode Transitions ---
    CancelMode,
    ToggleHelp,
    EnterThemeSelection,
    SelectThemeNext,
    SelectThemePrev,
    ConfirmTheme,
    SwitchTheme(crate::theme::PaletteType),
    TextAreaInput(crossterm::event::KeyEvent),
    OpenContextMenu((u16, u16)),
    SelectContextMenuAction(usize),
    SelectContextMenuNext,
    SelectContextMenuPrev,
    CloseContextMenu,

    // --- Store Results ---
    CommandsLoaded {
        path: PathBuf,
        policy: MissingFilePolicy,
        list: Box<CommandList>,
    },
    LoadFailed {
        path: PathBuf,
        policy: MissingFilePolicy,
        message: String,
        decode: bool,
    },
    CommandsSaved(PathBuf),
    SaveFailed(String),
    ExternalChangeDetected(PathBuf),
    ErrorOccurred(String),
}
