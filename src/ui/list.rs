//! Record list, newest first.

use crate::store::FeedbackState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_PINK, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub const EMPTY_PLACEHOLDER: &str = "No Feedback Yet";
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Placeholder shown instead of the list, if any.
///
/// Loading wins over empty so the first fetch does not flash "No Feedback Yet".
pub fn placeholder(state: &FeedbackState) -> Option<&'static str> {
    if !state.is_empty() {
        None
    } else if state.is_loading {
        Some(LOADING_PLACEHOLDER)
    } else {
        Some(EMPTY_PLACEHOLDER)
    }
}

pub fn render_list(frame: &mut Frame, area: Rect, state: &FeedbackState, selected: usize, focused: bool) {
    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(" Feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if let Some(text) = placeholder(state) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .records
        .iter()
        .map(|record| {
            let mut spans = vec![
                Span::styled(
                    format!(" {:>2} ", record.rating.get()),
                    Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD),
                ),
                Span::styled(record.text.clone(), Style::default().fg(HEADER_TEXT)),
            ];
            if state.edit.targets(&record.id) {
                spans.push(Span::styled("  (editing)", Style::default().fg(MUTED_TEXT)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
