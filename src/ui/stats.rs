use crate::feedback::FeedbackStats;
use crate::ui::theme::{BRAND_PINK, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_stats(frame: &mut Frame, area: Rect, stats: &FeedbackStats) {
    let label = Style::default().fg(HEADER_TEXT);
    let value = Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(format!(" {}", stats.count_label()), value)),
        Line::from(vec![
            Span::styled(" Average Rating: ", label),
            Span::styled(stats.average_label(), value),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}
