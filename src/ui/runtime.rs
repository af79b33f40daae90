use crate::client::SentimentClient;
use crate::session::ClientDispatcher;
use crate::trigger::TriggerMode;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the interactive session until the user quits.
///
/// Classification calls are spawned on `runtime`; everything else happens
/// on the calling thread.
pub fn run(
    client: SentimentClient,
    mode: TriggerMode,
    runtime: tokio::runtime::Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let endpoint = client.endpoint().to_string();
    let dispatcher = ClientDispatcher::new(client, runtime, events.sender());
    let mut app = App::new(mode, endpoint, Box::new(dispatcher));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        let wait = app
            .time_until_deadline(now)
            .map_or(TICK_RATE, |until| until.min(TICK_RATE));

        match events.next(wait) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Classified {
                request_id,
                outcome,
            }) => {
                app.on_classified(request_id, outcome);
            }
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
