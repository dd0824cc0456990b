//! Actions produced by input handling and applied by `App::dispatch`.

/// A state change requested by a key press or mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// No action needed
    #[default]
    None,
    /// Quit the application
    Quit,

    // === Demo screen ===
    /// Show the sheet if hidden, hide it if shown
    ToggleSheet,
    /// Close the sheet without tapping a row
    DismissSheet,

    // === Picker ===
    /// Tap the row at this index
    TapOption(usize),
    /// Move the keyboard cursor up
    CursorUp,
    /// Move the keyboard cursor down
    CursorDown,
    /// Tap the row under the keyboard cursor
    ActivateCursor,
}
