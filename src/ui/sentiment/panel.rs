//! Rendering of the sentiment panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{
    label_color, ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SCORE_BAR, STATUS_ERROR,
    TIME_TEXT,
};

use super::view::ViewModel;

/// Render whichever of the four panel states `model` selects.
pub fn render_sentiment_panel(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let block = Block::default()
        .title(" Analysis Results ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match model {
        ViewModel::EmptyPrompt { hint } => render_prompt(frame, inner, hint),
        ViewModel::Loading { spinner } => render_loading(frame, inner, spinner),
        ViewModel::Result {
            label,
            category,
            ratio,
            percent_text,
            time_text,
        } => {
            let badge = Style::default()
                .fg(label_color(*category))
                .add_modifier(Modifier::BOLD);
            render_result(frame, inner, label, badge, *ratio, percent_text, time_text);
        }
        ViewModel::Error { message, details } => render_error(frame, inner, message, details),
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(ACCENT)),
            Span::styled("Analyzing sentiment...", Style::default().fg(ACCENT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_result(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    badge: Style,
    ratio: f64,
    percent_text: &str,
    time_text: &str,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let text = Style::default().fg(HEADER_TEXT);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  Sentiment:        ", text),
            Span::styled(format!(" {} ", label), badge),
        ])),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  Confidence Score: ", text),
            Span::styled(percent_text.to_string(), Style::default().fg(ACCENT)),
        ])),
        rows[2],
    );

    let bar_area = Rect {
        x: rows[3].x.saturating_add(2),
        width: rows[3].width.saturating_sub(4),
        ..rows[3]
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(SCORE_BAR).bg(GLOBAL_BORDER))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(""),
        bar_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  Processing Time:  ", text),
            Span::styled(time_text.to_string(), Style::default().fg(TIME_TEXT)),
        ])),
        rows[5],
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, details: &str) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
        ]),
    ];
    if !details.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_details(details, 200)),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Ctrl+R: Retry   Esc: Dismiss",
        Style::default().fg(HEADER_TEXT),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Truncate diagnostic text on a char boundary.
fn truncate_details(details: &str, max_chars: usize) -> String {
    if details.chars().count() <= max_chars {
        details.to_string()
    } else {
        let kept: String = details.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
