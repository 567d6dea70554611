//! Selection summary side panel: counts, total size, file types, and a
//! preview of the selected paths.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pathpick::picker::format_size;
use pathpick::{SelectionPreview, SelectionStats};

use crate::ui::colors::ColorScheme;
use crate::ui::input::FileCategory;
use crate::ui::tree_view::truncate_to_width;

/// Selected paths listed before "... and N more".
pub const PREVIEW_LIMIT: usize = 10;

/// Render the selection summary panel.
pub fn render_summary_panel(
    frame: &mut Frame,
    area: Rect,
    stats: &SelectionStats,
    preview: &SelectionPreview,
    color_scheme: &ColorScheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color_scheme.border))
        .title(" Selection Summary ");

    let width = area.width.saturating_sub(2) as usize;
    let lines = summary_lines(stats, preview, color_scheme, width);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn summary_lines(
    stats: &SelectionStats,
    preview: &SelectionPreview,
    colors: &ColorScheme,
    width: usize,
) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors.text_dim);
    let value = Style::default()
        .fg(colors.text)
        .add_modifier(Modifier::BOLD);
    let heading = Style::default()
        .fg(colors.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Files:       ", label),
            Span::styled(stats.file_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Directories: ", label),
            Span::styled(stats.dir_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Total Size:  ", label),
            Span::styled(format_size(stats.total_size), value),
        ]),
    ];

    if !stats.file_types.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("File Types", heading)));
        for (ext, count) in &stats.file_types {
            let color = colors.category_color(FileCategory::from_extension(ext));
            lines.push(Line::from(vec![
                Span::styled(format!("  .{:<10}", ext), Style::default().fg(color)),
                Span::styled(count.to_string(), value),
            ]));
        }
    }

    lines.push(Line::from(""));
    if preview.paths.is_empty() {
        lines.push(Line::from(Span::styled("No items selected.", label)));
        return lines;
    }

    let total = preview.paths.len() + preview.remaining;
    let title = if total > PREVIEW_LIMIT {
        format!("Selected Items (Top {})", PREVIEW_LIMIT)
    } else {
        format!("Selected Items ({})", total)
    };
    lines.push(Line::from(Span::styled(title, heading)));

    for path in &preview.paths {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(path, width.saturating_sub(2))),
            Style::default().fg(colors.path_fg),
        )));
    }
    if preview.remaining > 0 {
        lines.push(Line::from(Span::styled(
            format!("  ... and {} more", preview.remaining),
            label.add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}
