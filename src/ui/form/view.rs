use crate::feedback::{MAX_RATING, MIN_RATING};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_PINK, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::state::{FormField, FormState};

const PROMPT: &str = "How would you rate your service with us?";

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    let title = if state.is_updating() {
        " Edit Feedback "
    } else {
        " New Feedback "
    };

    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let field_marker = |field: FormField| {
        if focused && state.focused == field {
            Span::styled("▶ ", Style::default().fg(BRAND_PINK))
        } else {
            Span::raw("  ")
        }
    };

    let mut rating_spans = vec![field_marker(FormField::Rating)];
    for value in MIN_RATING..=MAX_RATING {
        let style = if value == state.rating {
            Style::default()
                .fg(BRAND_PINK)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            muted
        };
        rating_spans.push(Span::styled(format!(" {} ", value), style));
    }

    let cursor = if focused && state.focused == FormField::Text {
        "▏"
    } else {
        ""
    };
    let text_line = if state.text.is_empty() && cursor.is_empty() {
        Span::styled("Write a review", muted)
    } else {
        Span::styled(format!("{}{}", state.text, cursor), text_style)
    };

    let button_label = if state.is_updating() { "[ Update ]" } else { "[ Send ]" };
    let button_style = if state.can_submit() {
        Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD)
    } else {
        muted.add_modifier(Modifier::DIM)
    };

    let mut lines = vec![
        Line::from(Span::styled(PROMPT, text_style.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(rating_spans),
        Line::from(""),
        Line::from(vec![field_marker(FormField::Text), text_line]),
        Line::from(""),
        Line::from(Span::styled(button_label, button_style)),
    ];
    if let Some(message) = &state.message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}
