//! Tree view widget for the pathpick terminal UI.
//!
//! Draws the picker's rows with expanders, checkboxes, icons, and sizes,
//! highlighting the part of each name that matches the search term.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use pathpick::picker::format_size;
use pathpick::TreeRow;

use crate::ui::colors::ColorScheme;
use crate::ui::input::FileCategory;

/// Width reserved for the right-aligned size column.
const SIZE_COLUMN: usize = 9;

/// Cursor and scroll position for the tree view.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeViewState<'a> {
    /// Index of the row under the cursor.
    pub selected_index: usize,
    /// First row drawn.
    pub scroll_offset: usize,
    /// Active search term, highlighted in names.
    pub search_term: &'a str,
    /// Whether the tree has keyboard focus.
    pub focused: bool,
}

/// Truncate `s` to at most `max_width` terminal columns, adding "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Icon for a row: open or closed folder, or the file's category icon.
fn get_icon(row: &TreeRow) -> &'static str {
    if row.is_dir() {
        if row.expanded {
            "\u{1f4c2}" // Open folder
        } else {
            "\u{1f4c1}" // Closed folder
        }
    } else {
        FileCategory::from_name(&row.name).icon()
    }
}

/// Render the tree view widget.
pub fn render_tree_view(
    frame: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    state: &TreeViewState,
    color_scheme: &ColorScheme,
) {
    let border_color = if state.focused {
        color_scheme.accent
    } else {
        color_scheme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Files ");

    if rows.is_empty() {
        let message = if state.search_term.is_empty() {
            "Nothing to show"
        } else {
            "No items match your search"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(color_scheme.text_dim),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;

    let start_index = state.scroll_offset.min(rows.len());
    let end_index = (start_index + inner_height).min(rows.len());

    let items: Vec<ListItem> = rows[start_index..end_index]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let is_cursor = start_index + offset == state.selected_index;
            ListItem::new(build_tree_line(
                row,
                inner_width,
                color_scheme,
                is_cursor,
                state.search_term,
            ))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Build a single line for the tree view.
fn build_tree_line(
    row: &TreeRow,
    max_width: usize,
    color_scheme: &ColorScheme,
    is_cursor: bool,
    search_term: &str,
) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    // Indent (2 spaces per depth level)
    let indent = "  ".repeat(row.depth);
    spans.push(Span::raw(indent));

    let expander = match (row.is_dir(), row.has_children, row.expanded) {
        (true, true, true) => "\u{25be} ",
        (true, true, false) => "\u{25b8} ",
        _ => "  ",
    };
    spans.push(Span::styled(expander, Style::default().fg(color_scheme.text_dim)));

    let (checkbox, checkbox_style) = if row.selected {
        ("[x] ", Style::default().fg(color_scheme.checked).add_modifier(Modifier::BOLD))
    } else {
        ("[ ] ", Style::default().fg(color_scheme.text_dim))
    };
    spans.push(Span::styled(checkbox, checkbox_style));

    let icon_color = if row.is_dir() {
        color_scheme.dirs
    } else {
        color_scheme.category_color(FileCategory::from_name(&row.name))
    };
    spans.push(Span::styled(
        format!("{} ", get_icon(row)),
        Style::default().fg(icon_color),
    ));

    // Name column: everything left after indent, expander, checkbox, icon, size
    let name_max = max_width
        .saturating_sub(row.depth * 2)
        .saturating_sub(2 + 4 + 3)
        .saturating_sub(SIZE_COLUMN + 1);
    let name = truncate_to_width(&row.display_name, name_max);

    let name_style = if is_cursor {
        Style::default()
            .fg(color_scheme.selected)
            .add_modifier(Modifier::REVERSED)
    } else if row.is_dir() {
        Style::default().fg(color_scheme.dirs)
    } else {
        Style::default().fg(color_scheme.text)
    };
    let highlight_style = name_style
        .fg(color_scheme.search_fg)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    spans.extend(highlight_match(&name, search_term, name_style, highlight_style));

    let padding = name_max.saturating_sub(name.width());
    spans.push(Span::raw(" ".repeat(padding + 1)));

    let size_text = row.size.map(format_size).unwrap_or_default();
    spans.push(Span::styled(
        format!("{:>width$}", size_text, width = SIZE_COLUMN),
        Style::default().fg(color_scheme.text_dim),
    ));

    Line::from(spans)
}

/// Split `name` around the first case-insensitive occurrence of `term`.
fn highlight_match(name: &str, term: &str, base: Style, highlight: Style) -> Vec<Span<'static>> {
    if term.is_empty() {
        return vec![Span::styled(name.to_string(), base)];
    }

    let lower = name.to_lowercase();
    let found = lower
        .find(&term.to_lowercase())
        .map(|start| (start, start + term.to_lowercase().len()))
        // Lowercasing can shift byte offsets for some scripts; skip those.
        .filter(|&(start, end)| {
            lower.len() == name.len() && name.is_char_boundary(start) && name.is_char_boundary(end)
        });

    match found {
        Some((start, end)) => {
            let mut spans = Vec::with_capacity(3);
            if start > 0 {
                spans.push(Span::styled(name[..start].to_string(), base));
            }
            spans.push(Span::styled(name[start..end].to_string(), highlight));
            if end < name.len() {
                spans.push(Span::styled(name[end..].to_string(), base));
            }
            spans
        }
        None => vec![Span::styled(name.to_string(), base)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathpick::NodeKind;

    fn row(name: &str, kind: NodeKind, size: Option<u64>) -> TreeRow {
        TreeRow {
            path: format!("/{}", name),
            name: name.to_string(),
            display_name: name.to_string(),
            kind,
            size,
            depth: 1,
            expanded: false,
            selected: false,
            has_children: kind == NodeKind::Directory,
            matches_search: false,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a_long_file_name.rs", 10), "a_long_...");
        assert_eq!(truncate_to_width("abcdef", 2), "ab");
        // Wide characters count as two columns.
        assert_eq!(truncate_to_width("日本語のファイル", 7), "日本...");
    }

    #[test]
    fn test_line_shows_checkbox_and_size() {
        let scheme = ColorScheme::default();
        let mut file = row("report.pdf", NodeKind::File, Some(1536));

        let text = line_text(&build_tree_line(&file, 60, &scheme, false, ""));
        assert!(text.contains("[ ] "));
        assert!(text.contains("report.pdf"));
        assert!(text.trim_end().ends_with("1.5 KB"));

        file.selected = true;
        let text = line_text(&build_tree_line(&file, 60, &scheme, false, ""));
        assert!(text.contains("[x] "));
    }

    #[test]
    fn test_directory_expander() {
        let scheme = ColorScheme::default();
        let mut dir = row("src", NodeKind::Directory, None);

        assert!(line_text(&build_tree_line(&dir, 60, &scheme, false, "")).contains('\u{25b8}'));
        dir.expanded = true;
        assert!(line_text(&build_tree_line(&dir, 60, &scheme, false, "")).contains('\u{25be}'));
    }

    #[test]
    fn test_highlight_match() {
        let base = Style::default();
        let hl = Style::default().add_modifier(Modifier::BOLD);

        let spans = highlight_match("ReadMe.md", "me", base, hl);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Read", "Me", ".md"]);
        assert_eq!(spans[1].style, hl);

        let spans = highlight_match("main.rs", "zzz", base, hl);
        assert_eq!(spans.len(), 1);
    }
}
