use crate::ui::app::App;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::sentiment::render_sentiment_panel;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = Header::new(app.endpoint(), app.trigger_mode().describe());
    frame.render_widget(header.widget(), regions.header);

    draw_input(frame, app, regions.input);
    render_sentiment_panel(frame, regions.results, &app.view_model());

    frame.render_widget(footer(regions.footer), regions.footer);
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let input = app.input();
    let block = Block::default()
        .title(" Enter your text below: ")
        .title_bottom(Line::from(Span::styled(
            format!(" {} characters ", input.char_count()),
            Style::default().fg(MUTED_TEXT),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    let width = usize::from(inner.width.max(1));
    let (cursor_row, cursor_col) = visual_cursor(input.as_str(), input.cursor_line_col(), width);
    let scroll = scroll_offset(cursor_row, inner.height);

    let body = if input.as_str().is_empty() {
        Paragraph::new(Span::styled(
            "Type your text here to analyze its sentiment...",
            Style::default().fg(MUTED_TEXT),
        ))
        .wrap(Wrap { trim: false })
    } else {
        let lines: Vec<Line> = wrap_lines(input.as_str(), width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(HEADER_TEXT))
            .scroll((scroll, 0))
    };
    frame.render_widget(body.block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + to_u16(cursor_col).min(inner.width - 1);
        let y = inner.y + to_u16(cursor_row).saturating_sub(scroll).min(inner.height - 1);
        frame.set_cursor_position((x, y));
    }
}

/// Hard-wrap `text` into rows of at most `width` chars. Empty logical lines
/// keep one row.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Row and column of the cursor after wrapping at `width`.
///
/// A cursor right after a full row lands at the start of the next row.
fn visual_cursor(text: &str, (line, col): (usize, usize), width: usize) -> (usize, usize) {
    let width = width.max(1);
    let rows_before: usize = text
        .split('\n')
        .take(line)
        .map(|l| l.chars().count().div_ceil(width).max(1))
        .sum();
    (rows_before + col / width, col % width)
}

/// First visible row so the cursor row stays inside `height` rows.
fn scroll_offset(cursor_row: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    to_u16(cursor_row.saturating_sub(height - 1))
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
