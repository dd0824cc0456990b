mod app;
mod config;
mod error;
mod events;
mod i18n;
mod log;
mod picker;
mod tui;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::{Instant, MissedTickBehavior};

use app::App;
use config::{Config, Overrides, USAGE};
use events::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }

    // Parse CLI arguments
    let overrides = Overrides::parse(std::env::args().skip(1))?;
    if overrides.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = load_config(&overrides)?;
    log::log(&format!("Config: {:?}", config));

    // Setup terminal
    log::install_panic_hook();
    let mut terminal = tui::init()?;

    let mut app = App::new(config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    tui::restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {}", e));
    }
    result
}

/// Config file (explicit path or the default location) merged with CLI overrides.
fn load_config(overrides: &Overrides) -> error::Result<Config> {
    let config = match &overrides.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    Ok(config.with_overrides(overrides))
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    let mut frames = tokio::time::interval(app.config.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            now = frames.tick() => {
                app.tick(now - last_frame);
                last_frame = now;
            }
        }
    }

    Ok(())
}
