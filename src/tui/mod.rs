//! Terminal setup and rendering.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

use std::io::{Stdout, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::{PickLabError, Result};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen with mouse capture.
pub fn init() -> Result<Tui> {
    enable_raw_mode().map_err(PickLabError::Terminal)?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(PickLabError::Terminal)?;
    Terminal::new(CrosstermBackend::new(stdout())).map_err(PickLabError::Terminal)
}

/// Undo everything `init` did.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(PickLabError::Terminal)?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)
        .map_err(PickLabError::Terminal)
}
