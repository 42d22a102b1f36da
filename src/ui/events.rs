use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::lookup::LookupError;
use crate::pokemon::Pokemon;
use crate::shutdown::ShutdownHandle;

/// Everything the UI loop reacts to, delivered one at a time.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A fetch finished. Tagged with the generation it was issued under so
    /// completions from superseded lookups can be told apart.
    LookupSettled {
        generation: u64,
        outcome: Result<Pokemon, LookupError>,
    },
    /// Ctrl-C signal or other external stop request.
    Shutdown,
}

pub type AppEventSender = mpsc::Sender<AppEvent>;

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: AppEventSender,
}

impl EventHandler {
    /// Spawns the input thread. It polls crossterm for terminal events and
    /// emits a `Tick` every `tick_rate`.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll so the shutdown flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            if let Some(app_event) = translate(event) {
                                if event_tx.send(app_event).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Paste(text) => Some(AppEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}
