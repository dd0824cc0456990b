use std::time::Duration;

use crate::config::Config;
use crate::events::Action;
use crate::i18n::{Key, Locale};
use crate::log;
use crate::picker::{Binding, PickerTag, TapOutcome, ValuePicker};
use crate::tui::components::PickerStyle;
use crate::tui::interaction::InteractionRegistry;

/// Names offered by the demo sheet, in display order.
pub const NAMES: [&str; 11] = [
    "bill", "john", "doe", "jim", "ludd-wig", "calvin", "talbot", "siri", "wayne", "garth",
    "mayo",
];

pub const DEFAULT_NAME: &str = "bill";

/// Demo screen state: a button showing `name` and the sheet that edits it.
pub struct App {
    pub name: String,
    pub showing_sheet: bool,
    /// Present exactly while `showing_sheet` is set; rebuilt on every open.
    pub sheet: Option<ValuePicker<String>>,
    pub interactions: InteractionRegistry,
    pub config: Config,
    pub locale: Locale,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            showing_sheet: false,
            sheet: None,
            interactions: InteractionRegistry::new(),
            locale: Locale::new(config.language()),
            config,
            should_quit: false,
        }
    }

    pub fn picker_style(&self) -> PickerStyle {
        PickerStyle {
            row_height: self.config.row_height(),
            trailing_spacer: self.config.trailing_spacer(),
        }
    }

    fn build_sheet(&self) -> ValuePicker<String> {
        let mut picker = ValuePicker::new(
            self.locale.get(Key::PickerTitle),
            NAMES
                .into_iter()
                .map(|name| name.picker_tag(name.to_string())),
        )
        .with_animation(self.config.animation());
        picker.focus(&self.name);
        picker
    }

    /// The button as one accessible element: its label and current value.
    pub fn button_description(&self) -> String {
        format!("{}, {}", self.locale.get(Key::NameButtonLabel), self.name)
    }

    /// Show the sheet if hidden, hide it if shown.
    pub fn toggle_sheet(&mut self) {
        log::log_event(&format!("activate \"{}\"", self.button_description()));
        self.set_showing_sheet(!self.showing_sheet);
    }

    pub fn dismiss_sheet(&mut self) {
        self.set_showing_sheet(false);
    }

    fn set_showing_sheet(&mut self, showing: bool) {
        self.showing_sheet = showing;
        self.sheet = showing.then(|| self.build_sheet());
        log::log_event(&format!(
            "sheet {} (name = {})",
            if showing { "presented" } else { "dismissed" },
            self.name
        ));
    }

    /// Tap row `index` of the sheet's picker.
    pub fn tap_option(&mut self, index: usize) {
        let Some(sheet) = self.sheet.as_mut() else {
            return;
        };
        let row = sheet
            .rows(&self.name)
            .nth(index)
            .map(|row| row.accessibility().to_string())
            .unwrap_or_default();

        let outcome = sheet.tap(index, Binding::new(&mut self.name));
        if outcome != TapOutcome::Ignored {
            log::log_event(&format!("tap \"{}\" -> {:?}, name = {}", row, outcome, self.name));
        }
    }

    /// Tap the row under the keyboard cursor.
    pub fn activate_cursor(&mut self) {
        if let Some(index) = self.sheet.as_ref().map(|sheet| sheet.cursor()) {
            self.tap_option(index);
        }
    }

    /// Advance animations by `dt`; dismisses the sheet once its transition ends.
    pub fn tick(&mut self, dt: Duration) {
        let finished = self
            .sheet
            .as_mut()
            .is_some_and(|sheet| sheet.advance(dt));
        if finished {
            self.dismiss_sheet();
        }
    }

    /// Apply an action produced by input handling.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleSheet => self.toggle_sheet(),
            Action::DismissSheet => self.dismiss_sheet(),
            Action::TapOption(index) => self.tap_option(index),
            Action::CursorUp => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.move_prev();
                }
            }
            Action::CursorDown => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.move_next();
                }
            }
            Action::ActivateCursor => self.activate_cursor(),
        }
    }
}
