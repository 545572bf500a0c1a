use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::list::render_list;
use crate::ui::popup::render_confirm_dialog;
use crate::ui::stats::render_stats;
use crate::ui::theme::STATUS_ERROR;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.snapshot();
    let (header, banner, body, footer) = layout_regions(frame.area(), state.error.is_some());

    frame.render_widget(Header::new(app.remote_name()).widget(state.is_loading), header);

    if let Some(error) = &state.error {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", error),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("(x to dismiss)", Style::default().fg(STATUS_ERROR)),
        ]);
        frame.render_widget(Paragraph::new(line), banner);
    }

    let regions = body_regions(body);
    render_list(
        frame,
        regions.list,
        state,
        app.selected(),
        app.focus() == Focus::List,
    );
    render_stats(frame, regions.stats, &state.stats());
    render_form(frame, regions.form, app.form(), app.focus() == Focus::Form);

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    render_confirm_dialog(frame, app.confirm());
}
