//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `name_button` - Demo screen button showing the current selection
//! - `sheet` - Modal sheet with backdrop, panel and key hints
//! - `value_picker` - Generic checkmark list used inside the sheet

mod name_button;
mod sheet;
mod value_picker;

// Re-export all render functions for use in ui.rs
pub use name_button::render_name_button;
pub use sheet::render_sheet;
pub use value_picker::PickerStyle;
#[cfg(test)]
pub use value_picker::CHECKMARK;
