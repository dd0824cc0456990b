//! Generic value picker
//!
//! A single-selection list whose options are tagged with values of any
//! comparable type. The picker reads and writes the selection through a
//! [`Binding`] and reports when its host should dismiss it.

mod binding;
mod tag;
mod transition;
mod value_picker;

pub use binding::Binding;
pub use tag::PickerTag;
pub use transition::DEFAULT_ANIMATION;
pub use value_picker::{PickerRow, TapOutcome, ValuePicker};
