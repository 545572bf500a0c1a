use crate::ui::confirm::ConfirmDialogState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_PINK, BRAND_PURPLE, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const PREVIEW_CHARS: usize = 40;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible {
        preview,
        yes_selected,
        ..
    } = state
    else {
        return;
    };

    let area = centered_rect(50, 30, frame.area());
    let text_style = Style::default().fg(HEADER_TEXT);
    let button = |label: &'static str, selected: bool| {
        let style = if selected {
            Style::default()
                .fg(BRAND_PINK)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        Span::styled(label, style)
    };

    let lines = vec![
        Line::from(Span::styled("Are you sure you want to delete?", text_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", truncate(preview, PREVIEW_CHARS)),
            text_style.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            button("[ Yes ]", *yes_selected),
            Span::raw("   "),
            button("[ No ]", !*yes_selected),
        ]),
    ];

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER))
                .style(Style::default().bg(BRAND_PURPLE)),
        );
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
