use crate::ui::theme::{BRAND_PINK, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    remote: &'a str,
}

impl<'a> Header<'a> {
    /// `remote` names the collection the store talks to.
    pub fn new(remote: &'a str) -> Self {
        Self { remote }
    }

    pub fn widget(&self, is_loading: bool) -> Paragraph<'a> {
        let title_style = Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(MUTED_TEXT);
        let mut spans = vec![
            Span::styled("  Feedback UI", title_style),
            Span::styled("  │  ", muted),
            Span::styled(self.remote, muted),
        ];
        if is_loading {
            spans.push(Span::styled("  │  ", muted));
            spans.push(Span::styled("syncing…", muted));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
