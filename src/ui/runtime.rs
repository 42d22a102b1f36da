use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::lookup::LookupError;
use crate::pokemon::{PokemonClient, PokemonSource};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand, UiCommandSender};
use crate::ui::events::{AppEvent, AppEventSender, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_BUFFER: usize = 16;

/// Spawns the task that turns `UiCommand::Fetch` into calls on `source`.
///
/// Every fetch runs as its own task, so a slow lookup never holds up a newer
/// one. Outcomes are posted back to the UI loop tagged with their generation.
pub fn spawn_fetch_worker(
    handle: &Handle,
    source: Arc<dyn PokemonSource>,
    events: AppEventSender,
    shutdown: ShutdownHandle,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_BUFFER);
    let spawner = handle.clone();

    handle.spawn(async move {
        loop {
            let command = tokio::select! {
                _ = shutdown.wait() => break,
                command = rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                UiCommand::Fetch { name, generation } => {
                    let source = Arc::clone(&source);
                    let events = events.clone();
                    spawner.spawn(async move {
                        tracing::debug!(%name, generation, "Fetching pokemon");
                        let outcome = source.fetch(&name).await.map_err(|err| {
                            tracing::warn!(
                                %name,
                                generation,
                                kind = err.kind(),
                                error = %err,
                                "Lookup failed"
                            );
                            LookupError::from(err)
                        });
                        // UI loop gone means we are shutting down
                        let _ = events.send(AppEvent::LookupSettled {
                            generation,
                            outcome,
                        });
                    });
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    });

    tx
}

fn spawn_signal_watcher(runtime: &Runtime, events: AppEventSender, shutdown: ShutdownHandle) {
    runtime.spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "Failed to listen for ctrl-c");
                    return;
                }
                shutdown.signal();
                let _ = events.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

/// Runs the interactive UI until the user quits.
pub fn run(config: &Config, initial_name: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let endpoint = config.api.endpoint_url()?;
    let client =
        PokemonClient::new(endpoint, &config.api).context("failed to build HTTP client")?;
    tracing::info!(endpoint = %client.endpoint(), "Starting pokemon-info");

    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    spawn_signal_watcher(&runtime, events.sender(), shutdown.clone());
    let commands = spawn_fetch_worker(
        runtime.handle(),
        Arc::new(client),
        events.sender(),
        shutdown.clone(),
    );

    let mut app = App::new(config, initial_name);
    app.set_command_sender(commands);
    app.start();

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        let body = app.body();
        terminal.draw(|frame| draw(frame, &app, &body))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Next draw picks up the new size
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::LookupSettled {
                generation,
                outcome,
            }) => {
                app.on_lookup_settled(generation, outcome);
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Exited");
    Ok(())
}
