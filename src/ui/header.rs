//! Header bar and the exclusion candidates panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::input::InputMode;
use crate::ui::tree_view::truncate_to_width;

/// Application version string.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
const APP_NAME: &str = "pathpick";

/// Render the header: title, search field, and selection count.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.color_scheme;
    let header_style = Style::default().fg(colors.header_fg).bg(colors.header_bg);
    let title_style = Style::default()
        .fg(colors.accent)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(colors.hint_fg)
        .add_modifier(Modifier::DIM);

    let searching = app.input_mode == InputMode::Search;
    let term = app.picker.search_term();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("{} v{}", APP_NAME, VERSION), title_style),
        Span::raw(" "),
        Span::styled("\u{2502}", header_style),
        Span::raw(" "),
        Span::styled("Search: ", Style::default().fg(colors.hint_fg)),
    ];

    if term.is_empty() && !searching {
        spans.push(Span::styled("press / to filter", hint_style));
    } else {
        let max_term = area.width.saturating_sub(60) as usize;
        spans.push(Span::styled(
            truncate_to_width(term, max_term.max(8)),
            Style::default()
                .fg(colors.search_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if searching {
        spans.push(Span::styled("\u{2588}", Style::default().fg(colors.accent))); // Cursor
    }

    spans.extend([
        Span::raw(" "),
        Span::styled("\u{2502}", header_style),
        Span::raw(" "),
        Span::styled(
            format!("{} selected", app.picker.selection().len()),
            Style::default()
                .fg(colors.size_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("\u{2502}", header_style),
        Span::raw(" "),
        Span::styled("Press ? for help", hint_style),
    ]);

    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(header_style);

    let header = Paragraph::new(Line::from(spans))
        .block(header_block)
        .style(header_style);

    frame.render_widget(header, area);
}

/// Render the suggested exclusions with their on/off state.
pub fn render_exclusions_panel(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.color_scheme;
    let focused = app.input_mode == InputMode::Exclusions;
    let candidates = app.picker.candidates();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { colors.accent } else { colors.border }))
        .title(format!(" Suggested Exclusions ({}) ", candidates.len()));

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.exclusion_index.saturating_sub(inner_height.saturating_sub(1));

    let items: Vec<ListItem> = candidates
        .iter()
        .enumerate()
        .skip(scroll)
        .take(inner_height)
        .map(|(idx, (path, suggestion))| {
            let excluded = app.picker.exclusions().contains(path);
            let (mark, mark_style) = if excluded {
                ("[x] ", Style::default().fg(colors.excluded).add_modifier(Modifier::BOLD))
            } else {
                ("[ ] ", Style::default().fg(colors.text_dim))
            };

            let mut path_style = Style::default().fg(colors.path_fg);
            if excluded {
                path_style = path_style.add_modifier(Modifier::CROSSED_OUT);
            }
            if focused && idx == app.exclusion_index {
                path_style = path_style.add_modifier(Modifier::REVERSED);
            }

            let label = format!("{} ", suggestion);
            let path_width = inner_width.saturating_sub(4 + label.chars().count());
            ListItem::new(Line::from(vec![
                Span::styled(mark, mark_style),
                Span::styled(label, Style::default().fg(colors.warning_fg)),
                Span::styled(truncate_to_width(path, path_width), path_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
