use crate::store::FeedbackStore;
use crate::ui::app::App;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the board until the user quits.
///
/// Blocks the calling thread; store calls are spawned onto `runtime`.
pub fn run(store: FeedbackStore, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = App::new(store, runtime);
    app.reload();

    loop {
        app.sync();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }
    }

    app.shutdown();
    drop(guard);
    Ok(())
}
