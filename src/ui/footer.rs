use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: [&str; 4] = [
    "Ctrl+R: Analyze",
    "Ctrl+U: Clear",
    "Esc: Dismiss error",
    "Ctrl+Q: Quit",
];

/// Indices into `HINTS`, dropped in this order when the line is too narrow.
/// The quit hint is never dropped.
const DROP_ORDER: [usize; 3] = [2, 1, 0];

const SEPARATOR: &str = " │ ";

pub fn footer(area: Rect) -> Paragraph<'static> {
    let content_width = area.width.saturating_sub(2) as usize; // minus borders
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    Paragraph::new(footer_text(content_width))
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// Footer line for `width` columns. The version goes first, then whole
/// hints, so nothing is cut mid-word.
pub fn footer_text(width: usize) -> String {
    let version = format!("v{} ", VERSION);
    let mut shown = [true; HINTS.len()];

    let hints = join_hints(&shown);
    let used = hints.chars().count() + version.chars().count();
    if used <= width {
        return format!("{}{}{}", hints, " ".repeat(width - used), version);
    }

    for index in DROP_ORDER {
        let hints = join_hints(&shown);
        if hints.chars().count() <= width {
            return hints;
        }
        shown[index] = false;
    }
    join_hints(&shown)
}

fn join_hints(shown: &[bool; HINTS.len()]) -> String {
    let visible: Vec<&str> = HINTS
        .iter()
        .zip(shown)
        .filter(|(_, shown)| **shown)
        .map(|(hint, _)| *hint)
        .collect();
    format!(" {}", visible.join(SEPARATOR))
}
