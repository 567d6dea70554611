//! Main UI layout and rendering for the pathpick TUI.
//!
//! Splits the screen into header, tree, side panels, and status bar, and
//! draws the help and confirmation overlays on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::colors::ColorScheme;
use crate::ui::header::{render_exclusions_panel, render_header};
use crate::ui::input::{ConfirmAction, InputMode};
use crate::ui::summary::{render_summary_panel, PREVIEW_LIMIT};
use crate::ui::tree_view::{render_tree_view, TreeViewState};

/// Tallest the exclusions panel gets, borders included.
const MAX_EXCLUSION_PANEL: u16 = 10;

/// Help overlay sections: heading and (keys, description) pairs.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/\u{2193}", "Move down"),
            ("k/\u{2191}", "Move up"),
            ("l/\u{2192}/Enter", "Expand directory"),
            ("h/\u{2190}/Bksp", "Collapse / go to parent"),
            ("g/G", "Go to top/bottom"),
            ("PgUp/PgDn", "Page up/down"),
            ("e", "Expand everything shown"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Select/deselect with contents"),
            ("a", "Select all"),
            ("c", "Clear selection"),
            ("/", "Search paths"),
            ("x", "Suggested exclusions"),
        ],
    ),
    (
        "",
        &[("w", "Finish and print selection"), ("q/Esc", "Quit")],
    ),
];

/// Main render function that draws the entire UI.
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content area
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_header(frame, main_layout[0], app);

    let main_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Tree view
            Constraint::Percentage(35), // Exclusions and summary
        ])
        .split(main_layout[1]);

    // Keep paging in step with what is drawn
    app.viewport_height = main_area[0].height.saturating_sub(2).max(1) as usize;

    let tree_state = TreeViewState {
        selected_index: app.selected_index,
        scroll_offset: app.scroll_offset,
        search_term: app.picker.search_term(),
        focused: app.input_mode != InputMode::Exclusions,
    };
    render_tree_view(
        frame,
        main_area[0],
        &app.rows,
        &tree_state,
        &app.color_scheme,
    );

    let candidates = app.picker.candidates().len();
    let side = if candidates == 0 {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1)])
            .split(main_area[1])
    } else {
        let panel = (candidates as u16 + 2).min(MAX_EXCLUSION_PANEL);
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(panel), Constraint::Min(1)])
            .split(main_area[1])
    };
    if candidates > 0 {
        render_exclusions_panel(frame, side[0], app);
    }
    render_summary_panel(
        frame,
        side[side.len() - 1],
        &app.picker.stats(),
        &app.picker.selection_preview(PREVIEW_LIMIT),
        &app.color_scheme,
    );

    render_status_bar(frame, main_layout[2], app);

    match app.input_mode {
        InputMode::Help => render_help_overlay(frame, size, &app.color_scheme),
        InputMode::Confirm(action) => render_confirm_overlay(frame, size, action, app),
        _ => {}
    }
}

/// Key hints shown at the right of the status bar for each mode.
fn key_hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Normal => &[
            ("?", "help"),
            ("Space", "select"),
            ("/", "search"),
            ("x", "exclude"),
            ("w", "done"),
            ("q", "quit"),
        ],
        InputMode::Search => &[("Enter", "keep"), ("Esc", "clear")],
        InputMode::Exclusions => &[("Space", "toggle"), ("Esc", "back")],
        InputMode::Confirm(_) | InputMode::Help => &[],
    }
}

/// Render the status bar: visibility counts, exclusions, notices, and hints.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.color_scheme;
    let status_style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let count_style = Style::default()
        .fg(colors.size_fg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(colors.key_fg)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(colors.hint_fg);

    let summary = app.picker.status();
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(summary.visibility_label(), count_style),
    ];

    if let Some(hidden) = summary.exclusion_label() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("\u{2502}", status_style)); // Separator
        spans.push(Span::raw(" "));
        spans.push(Span::styled(hidden, Style::default().fg(colors.excluded)));
    }

    if let Some(message) = &app.message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("\u{2502}", status_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            message.clone(),
            Style::default()
                .fg(colors.warning_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hints = key_hints(app.input_mode);
    if !hints.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("\u{2502}", status_style));
        spans.push(Span::raw(" "));
        for (key, label) in hints {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(":{} ", label), hint_style));
        }
    }

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(status_style);

    let status = Paragraph::new(Line::from(spans))
        .block(status_block)
        .style(status_style);

    frame.render_widget(status, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

fn help_lines(color_scheme: &ColorScheme) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(color_scheme.accent)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(color_scheme.key_fg);
    let text = Style::default().fg(color_scheme.text);

    let mut lines = Vec::new();
    for (title, entries) in HELP_SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        if !title.is_empty() {
            lines.push(Line::from(Span::styled(*title, heading)));
        }
        for (keys, description) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", keys), key),
                Span::styled(*description, text),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(color_scheme.hint_fg),
    )));
    lines
}

/// Render help overlay with all keyboard shortcuts.
fn render_help_overlay(frame: &mut Frame, area: Rect, color_scheme: &ColorScheme) {
    let lines = help_lines(color_scheme);
    let overlay_area = centered_rect(area, 52, lines.len() as u16 + 2);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" pathpick Help ")
        .title_style(
            Style::default()
                .fg(color_scheme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color_scheme.accent))
        .style(Style::default().bg(color_scheme.overlay_bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(color_scheme.overlay_bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Render the y/n confirmation overlay.
fn render_confirm_overlay(frame: &mut Frame, area: Rect, action: ConfirmAction, app: &App) {
    let colors = &app.color_scheme;
    let overlay_area = centered_rect(area, 44, 5);

    frame.render_widget(Clear, overlay_area);

    let question = match action {
        ConfirmAction::Quit => format!(
            "Quit without printing {} selected?",
            app.picker.selection().len()
        ),
    };

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.warning_fg))
        .style(Style::default().bg(colors.overlay_bg));

    let text = vec![
        Line::from(Span::styled(
            question,
            Style::default()
                .fg(colors.warning_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(colors.key_fg)),
            Span::styled(":yes  ", Style::default().fg(colors.hint_fg)),
            Span::styled("n", Style::default().fg(colors.key_fg)),
            Span::styled(":no", Style::default().fg(colors.hint_fg)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().bg(colors.overlay_bg));
    frame.render_widget(paragraph, overlay_area);
}
