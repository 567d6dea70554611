use std::cell::RefCell;
use std::rc::Rc;

use pathpick::{FilePicker, TreeRow};

use crate::ui::{ColorScheme, Command, ConfirmAction, InputMode};

/// Rows moved by PageUp/PageDown when the viewport height is unknown.
const DEFAULT_PAGE: usize = 20;

/// Application state
pub struct App {
    pub picker: FilePicker,

    // View state
    pub rows: Vec<TreeRow>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Tree rows that fit on screen, updated on every draw.
    pub viewport_height: usize,
    /// Cursor inside the exclusion candidates panel.
    pub exclusion_index: usize,

    // UI state
    pub color_scheme: ColorScheme,
    pub input_mode: InputMode,
    /// One-shot notice shown in the status bar until the next key.
    pub message: Option<String>,

    /// Latest selection reported through the picker's change callback.
    reported_selection: Rc<RefCell<Vec<String>>>,

    // Flags
    pub should_quit: bool,
    /// Set when the user finished with `w`: the selection is printed on exit.
    pub finished: bool,
}

impl App {
    pub fn new(picker: FilePicker, color_scheme: ColorScheme) -> Self {
        let reported_selection = Rc::new(RefCell::new(picker.selected_paths()));
        let sink = Rc::clone(&reported_selection);
        let picker = picker.on_selection_change(move |paths| {
            *sink.borrow_mut() = paths.to_vec();
        });

        let mut app = Self {
            picker,
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            viewport_height: DEFAULT_PAGE,
            exclusion_index: 0,
            color_scheme,
            input_mode: InputMode::Normal,
            message: None,
            reported_selection,
            should_quit: false,
            finished: false,
        };
        app.refresh_rows();
        app
    }

    /// The selection as last delivered to the change callback.
    pub fn reported_selection(&self) -> Vec<String> {
        self.reported_selection.borrow().clone()
    }

    pub fn handle_command(&mut self, cmd: Command) {
        if cmd != Command::Noop {
            self.message = None;
        }

        match cmd {
            Command::Quit => {
                if self.picker.selection().is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_mode = InputMode::Confirm(ConfirmAction::Quit);
                }
            }
            Command::Finish => {
                self.finished = true;
                self.should_quit = true;
            }
            Command::Confirm => {
                if let InputMode::Confirm(ConfirmAction::Quit) = self.input_mode {
                    self.should_quit = true;
                }
                self.input_mode = InputMode::Normal;
            }
            Command::Cancel => {
                self.input_mode = InputMode::Normal;
            }
            Command::MoveUp => {
                if self.input_mode == InputMode::Exclusions {
                    self.exclusion_index = self.exclusion_index.saturating_sub(1);
                } else if self.selected_index > 0 {
                    self.selected_index -= 1;
                    self.ensure_visible();
                }
            }
            Command::MoveDown => {
                if self.input_mode == InputMode::Exclusions {
                    let last = self.picker.candidates().len().saturating_sub(1);
                    self.exclusion_index = (self.exclusion_index + 1).min(last);
                } else if self.selected_index < self.rows.len().saturating_sub(1) {
                    self.selected_index += 1;
                    self.ensure_visible();
                }
            }
            Command::PageUp => {
                self.selected_index = self.selected_index.saturating_sub(self.page_size());
                self.ensure_visible();
            }
            Command::PageDown => {
                let last = self.rows.len().saturating_sub(1);
                self.selected_index = (self.selected_index + self.page_size()).min(last);
                self.ensure_visible();
            }
            Command::GotoTop => {
                self.selected_index = 0;
                self.scroll_offset = 0;
            }
            Command::GotoBottom => {
                self.selected_index = self.rows.len().saturating_sub(1);
                self.ensure_visible();
            }
            Command::Expand => {
                if let Some(row) = self.current_row() {
                    if row.is_dir() && !row.expanded {
                        let path = row.path.clone();
                        self.picker.set_expanded(&path, true);
                        self.refresh_rows();
                    }
                }
            }
            Command::Collapse => self.collapse_or_parent(),
            Command::ToggleSelect => {
                if let Some(row) = self.current_row() {
                    let path = row.path.clone();
                    let select = !row.selected;
                    if !self.picker.toggle_selection(&path, select) {
                        self.message = Some(format!("{} is excluded", path));
                    }
                    self.refresh_rows();
                }
            }
            Command::SelectAll => {
                if self.picker.can_select_all() {
                    self.picker.select_all();
                    self.refresh_rows();
                } else {
                    self.message = Some("Everything is excluded".to_string());
                }
            }
            Command::ClearAll => {
                self.picker.clear_all();
                self.refresh_rows();
            }
            Command::ExpandAll => {
                self.picker.expand_visible();
                self.refresh_rows();
            }
            Command::StartSearch => {
                self.input_mode = InputMode::Search;
            }
            Command::SearchInput(c) => {
                let mut term = self.picker.search_term().to_string();
                term.push(c);
                self.update_search(term);
            }
            Command::SearchBackspace => {
                let mut term = self.picker.search_term().to_string();
                term.pop();
                self.update_search(term);
            }
            Command::ConfirmSearch => {
                self.input_mode = InputMode::Normal;
            }
            Command::ExitSearch => {
                self.input_mode = InputMode::Normal;
                self.update_search(String::new());
            }
            Command::OpenExclusions => {
                if self.picker.candidates().is_empty() {
                    self.message = Some("No exclusion suggestions found".to_string());
                } else {
                    let last = self.picker.candidates().len() - 1;
                    self.exclusion_index = self.exclusion_index.min(last);
                    self.input_mode = InputMode::Exclusions;
                }
            }
            Command::ToggleExclusion => {
                let path = self
                    .picker
                    .candidates()
                    .keys()
                    .nth(self.exclusion_index)
                    .cloned();
                if let Some(path) = path {
                    self.picker.toggle_exclusion(&path);
                    self.refresh_rows();
                }
            }
            Command::CloseExclusions => {
                self.input_mode = InputMode::Normal;
            }
            Command::ShowHelp => {
                self.input_mode = InputMode::Help;
            }
            Command::HideHelp => {
                self.input_mode = InputMode::Normal;
            }
            Command::Noop => {}
        }
    }

    /// Row under the cursor
    pub fn current_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected_index)
    }

    /// Rebuild rows from the picker, keeping the cursor on the same path when
    /// it is still shown.
    pub fn refresh_rows(&mut self) {
        let current = self.current_row().map(|row| row.path.clone());
        self.rows = self.picker.rows();

        if let Some(idx) = current.and_then(|path| self.rows.iter().position(|r| r.path == path)) {
            self.selected_index = idx;
        } else if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
        self.ensure_visible();
    }

    fn update_search(&mut self, term: String) {
        self.picker.set_search_term(term);
        self.refresh_rows();
    }

    fn collapse_or_parent(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };

        if row.expanded {
            let path = row.path.clone();
            self.picker.set_expanded(&path, false);
            self.refresh_rows();
        } else if let Some(parent) = pathpick::tree::path::parent(&row.path) {
            if let Some(idx) = self.rows.iter().position(|r| r.path == parent) {
                self.selected_index = idx;
                self.ensure_visible();
            }
        }
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    /// Ensure selected item is visible (scroll if needed)
    fn ensure_visible(&mut self) {
        let visible_height = self.page_size();
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index - visible_height + 1;
        }
    }
}
