//! Input handling for the pathpick terminal UI.
//!
//! Keys map to [`Command`]s depending on the current [`InputMode`]: tree
//! navigation, search input, the exclusion candidates panel, confirmation
//! dialogs, and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The current input mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating and selecting in the tree.
    Normal,
    /// Typing a search term.
    Search,
    /// Cursor is in the exclusion candidates panel.
    Exclusions,
    /// Confirmation mode for actions that lose work.
    Confirm(ConfirmAction),
    /// Help overlay showing all keyboard shortcuts.
    Help,
}

/// Actions that require user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Quit without printing the selection.
    Quit,
}

/// File category used for icons and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileCategory {
    /// Anything not matched below.
    #[default]
    Other,
    Images,
    Audio,
    Video,
    Code,
    Documents,
    Archives,
    Database,
}

impl FileCategory {
    /// Get the category for a file extension.
    pub fn from_extension(ext: &str) -> FileCategory {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "bmp" | "webp" | "ico" => FileCategory::Images,
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => FileCategory::Audio,
            "mp4" | "avi" | "mov" | "mkv" | "webm" => FileCategory::Video,
            "js" | "ts" | "jsx" | "tsx" | "html" | "css" | "rs" | "py" | "go" | "c" | "h"
            | "cpp" | "java" | "rb" | "sh" | "json" | "toml" | "yaml" | "yml" => FileCategory::Code,
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" | "odt" => FileCategory::Documents,
            "zip" | "rar" | "tar" | "gz" | "7z" | "xz" | "bz2" => FileCategory::Archives,
            "sql" | "db" | "sqlite" => FileCategory::Database,
            _ => FileCategory::Other,
        }
    }

    /// Get the category for a file name.
    pub fn from_name(name: &str) -> FileCategory {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => FileCategory::Other,
        }
    }

    /// Icon drawn in front of file names.
    pub fn icon(&self) -> &'static str {
        match self {
            FileCategory::Images => "\u{1f5bc}",    // Framed picture
            FileCategory::Audio => "\u{1f3b5}",     // Musical note
            FileCategory::Video => "\u{1f3ac}",     // Clapper board
            FileCategory::Code => "\u{1f4dc}",      // Scroll
            FileCategory::Documents => "\u{1f4dd}", // Memo
            FileCategory::Archives => "\u{1f4e6}",  // Package
            FileCategory::Database => "\u{1f5c4}",  // File cabinet
            FileCategory::Other => "\u{1f4c4}",     // Page
        }
    }
}

/// Commands that can be issued by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor up.
    MoveUp,
    /// Move the cursor down.
    MoveDown,
    /// Expand the directory under the cursor.
    Expand,
    /// Collapse the directory, or jump to its parent.
    Collapse,
    /// Toggle selection of the row under the cursor.
    ToggleSelect,
    /// Select every non-excluded path.
    SelectAll,
    /// Clear the selection.
    ClearAll,
    /// Expand every directory in the current view.
    ExpandAll,
    /// Enter search mode.
    StartSearch,
    /// Add a character to the search term.
    SearchInput(char),
    /// Remove the last character from the search term.
    SearchBackspace,
    /// Keep the search term and return to the tree.
    ConfirmSearch,
    /// Clear the search term and return to the tree.
    ExitSearch,
    /// Open the exclusion candidates panel.
    OpenExclusions,
    /// Toggle the exclusion under the panel cursor.
    ToggleExclusion,
    /// Leave the exclusion candidates panel.
    CloseExclusions,
    /// Finish and print the selection.
    Finish,
    /// Quit the application.
    Quit,
    /// Jump to the first row.
    GotoTop,
    /// Jump to the last row.
    GotoBottom,
    /// Page up navigation.
    PageUp,
    /// Page down navigation.
    PageDown,
    /// Confirm the current action (in Confirm mode).
    Confirm,
    /// Cancel the current action (in Confirm mode).
    Cancel,
    /// Show help screen.
    ShowHelp,
    /// Hide help screen.
    HideHelp,
    /// No operation - key was not recognized or not applicable.
    Noop,
}

/// Handle a key event and return the corresponding command.
///
/// Returns `Command::Noop` if the key is not recognized in the current mode.
pub fn handle_key(key: KeyEvent, mode: &InputMode) -> Command {
    match mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Search => handle_search_mode(key),
        InputMode::Exclusions => handle_exclusions_mode(key),
        InputMode::Confirm(_) => handle_confirm_mode(key),
        InputMode::Help => Command::HideHelp,
    }
}

fn handle_normal_mode(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Command::Collapse,
        KeyCode::Char('j') | KeyCode::Down => Command::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Command::MoveUp,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => Command::Expand,

        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::PageUp,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::PageDown,
        KeyCode::Char('g') => Command::GotoTop,
        KeyCode::Char('G') => Command::GotoBottom,

        KeyCode::Char(' ') => Command::ToggleSelect,
        KeyCode::Char('a') => Command::SelectAll,
        KeyCode::Char('c') => Command::ClearAll,
        KeyCode::Char('e') => Command::ExpandAll,
        KeyCode::Char('/') => Command::StartSearch,
        KeyCode::Char('x') => Command::OpenExclusions,

        KeyCode::Char('w') => Command::Finish,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,

        _ => Command::Noop,
    }
}

fn handle_search_mode(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Esc => Command::ExitSearch,
        KeyCode::Enter => Command::ConfirmSearch,
        KeyCode::Backspace => Command::SearchBackspace,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Up => Command::MoveUp,

        // Only accept printable characters (not control characters)
        KeyCode::Char(c) if !c.is_control() => Command::SearchInput(c),

        _ => Command::Noop,
    }
}

fn handle_exclusions_mode(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Command::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Command::MoveUp,
        KeyCode::Char(' ') | KeyCode::Enter => Command::ToggleExclusion,
        KeyCode::Char('x') | KeyCode::Esc | KeyCode::Tab => Command::CloseExclusions,
        KeyCode::Char('?') => Command::ShowHelp,
        _ => Command::Noop,
    }
}

fn handle_confirm_mode(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Command::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Command::Cancel,
        _ => Command::Noop,
    }
}
