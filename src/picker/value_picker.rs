//! Generic single-selection list.
//!
//! `ValuePicker` holds the ordered options and the tap/dismiss state machine.
//! It does not own the selected value: callers pass the current value to every
//! query and a [`Binding`] to [`ValuePicker::tap`].

use std::fmt;
use std::time::Duration;

use super::binding::Binding;
use super::tag::PickerOption;
use super::transition::{DEFAULT_ANIMATION, Transition};

/// Where the picker is in its tap → dismiss sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for a tap.
    Idle,
    /// A row was tapped; the host dismisses once the transition ends.
    ///
    /// `to` is the newly selected row and `from` the row it replaced. Both are
    /// `None` when the tap left the selection unchanged.
    Dismissing {
        from: Option<usize>,
        to: Option<usize>,
        transition: Transition,
    },
    /// The transition finished and dismissal was requested.
    Dismissed,
}

/// Result of [`ValuePicker::tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Out of range, or a dismissal is already under way.
    Ignored,
    /// The row's tag was written to the binding.
    Assigned,
    /// The row is untagged; the binding was left alone.
    Untouched,
}

/// A row as seen by the renderer.
#[derive(Debug, Clone)]
pub struct PickerRow<'a, V> {
    pub index: usize,
    pub option: &'a PickerOption<V>,
    pub selected: bool,
    /// Strength of the checkmark and accent tint, `0.0..=1.0`.
    pub emphasis: f32,
}

impl<V> PickerRow<'_, V> {
    /// The row as one combined accessible element.
    pub fn accessibility(&self) -> AccessibleRow {
        AccessibleRow {
            label: self.option.label(),
            selected: self.selected,
        }
    }
}

/// Combined label and selected trait of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleRow {
    pub label: String,
    pub selected: bool,
}

impl fmt::Display for AccessibleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selected {
            write!(f, "{}, selected", self.label)
        } else {
            f.write_str(&self.label)
        }
    }
}

/// Single-selection list over options tagged with values of type `V`.
#[derive(Debug, Clone)]
pub struct ValuePicker<V> {
    title: String,
    options: Vec<PickerOption<V>>,
    cursor: usize,
    /// First row shown by the renderer.
    scroll: usize,
    phase: Phase,
    animation: Duration,
}

impl<V: PartialEq> ValuePicker<V> {
    pub fn new(
        title: impl Into<String>,
        options: impl IntoIterator<Item = PickerOption<V>>,
    ) -> Self {
        Self {
            title: title.into(),
            options: options.into_iter().collect(),
            cursor: 0,
            scroll: 0,
            phase: Phase::Idle,
            animation: DEFAULT_ANIMATION,
        }
    }

    /// Set the length of the selection transition.
    pub fn with_animation(mut self, animation: Duration) -> Self {
        self.animation = animation;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[PickerOption<V>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Row that keyboard activation applies to. Independent of the selection.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor down, wrapping to the top.
    pub fn move_next(&mut self) {
        if !self.is_empty() {
            self.cursor = (self.cursor + 1) % self.len();
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn move_prev(&mut self) {
        if !self.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.len() - 1);
        }
    }

    /// First row of a `visible`-row window that contains the cursor.
    ///
    /// The window only moves when the cursor leaves it.
    pub fn scroll_into_view(&mut self, visible: usize) -> usize {
        if visible == 0 {
            return self.scroll;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
        self.scroll = self.scroll.min(self.len().saturating_sub(visible));
        self.scroll
    }

    /// True iff option `index` is tagged with a value equal to `selection`.
    pub fn is_selected(&self, index: usize, selection: &V) -> bool {
        self.options
            .get(index)
            .and_then(|option| option.tag().value())
            .is_some_and(|tag| tag == selection)
    }

    /// First row whose tag equals `selection`.
    pub fn position_of(&self, selection: &V) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.is_selected(i, selection))
    }

    /// Put the keyboard cursor on the selected row, if there is one.
    pub fn focus(&mut self, selection: &V) {
        if let Some(index) = self.position_of(selection) {
            self.cursor = index;
        }
    }

    pub fn rows<'a>(&'a self, selection: &'a V) -> impl Iterator<Item = PickerRow<'a, V>> + 'a {
        self.options.iter().enumerate().map(move |(index, option)| {
            let selected = self.is_selected(index, selection);
            PickerRow {
                index,
                option,
                selected,
                emphasis: self.emphasis(index, selected),
            }
        })
    }

    fn emphasis(&self, index: usize, selected: bool) -> f32 {
        if let Phase::Dismissing {
            from,
            to,
            transition,
        } = &self.phase
        {
            let progress = transition.progress();
            if selected && *to == Some(index) {
                return progress;
            }
            if !selected && *from == Some(index) {
                return 1.0 - progress;
            }
        }
        if selected { 1.0 } else { 0.0 }
    }

    /// Handle a tap on row `index`.
    ///
    /// A tagged row writes its tag into `selection` immediately. Either way the
    /// transition starts, and [`advance`](Self::advance) reports when the host
    /// should dismiss.
    pub fn tap(&mut self, index: usize, mut selection: Binding<'_, V>) -> TapOutcome
    where
        V: Clone,
    {
        if self.phase != Phase::Idle {
            return TapOutcome::Ignored;
        }
        let from = self.position_of(selection.get());
        let Some(option) = self.options.get(index) else {
            return TapOutcome::Ignored;
        };

        let outcome = match option.tag().value() {
            Some(tag) => {
                selection.set(tag.clone());
                TapOutcome::Assigned
            }
            None => TapOutcome::Untouched,
        };

        let to = (outcome == TapOutcome::Assigned && from != Some(index)).then_some(index);
        self.cursor = index;
        self.phase = Phase::Dismissing {
            from: to.and(from),
            to,
            transition: Transition::ease_in(self.animation),
        };
        outcome
    }

    /// Advance the running transition by `dt`.
    ///
    /// Returns true exactly once, when the transition completes and the host
    /// must dismiss the picker.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Phase::Dismissing { transition, .. } = &mut self.phase else {
            return false;
        };
        if transition.advance(dt) {
            self.phase = Phase::Dismissed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerTag;

    const NAMES: [&str; 4] = ["bill", "john", "doe", "siri"];

    fn name_picker() -> ValuePicker<String> {
        ValuePicker::new(
            "Name",
            NAMES.into_iter().map(|n| n.picker_tag(n.to_string())),
        )
        .with_animation(Duration::from_millis(100))
    }

    fn selected_rows(picker: &ValuePicker<String>, selection: &String) -> Vec<usize> {
        picker
            .rows(selection)
            .filter(|row| row.selected)
            .map(|row| row.index)
            .collect()
    }

    #[test]
    fn test_exactly_matching_row_is_selected() {
        let picker = name_picker();
        for (i, name) in NAMES.iter().enumerate() {
            assert_eq!(selected_rows(&picker, &name.to_string()), vec![i]);
        }
    }

    #[test]
    fn test_unknown_value_selects_nothing() {
        let picker = name_picker();
        assert!(selected_rows(&picker, &"mayo".to_string()).is_empty());
        assert_eq!(picker.position_of(&"mayo".to_string()), None);
    }

    #[test]
    fn test_rows_keep_declaration_order() {
        let picker = name_picker();
        let selection = "bill".to_string();
        let labels: Vec<String> = picker
            .rows(&selection)
            .map(|row| row.accessibility().label)
            .collect();
        assert_eq!(labels, NAMES);
    }

    #[test]
    fn test_untagged_row_never_selected() {
        let picker: ValuePicker<i32> =
            ValuePicker::new("Numbers", vec!["one".picker_tag(1), PickerOption::new("none")]);
        assert!(picker.is_selected(0, &1));
        assert!(!picker.is_selected(1, &1));
        assert!(!picker.is_selected(1, &0));
    }

    #[test]
    fn test_tap_assigns_before_dismiss() {
        let mut picker = name_picker();
        let mut name = "bill".to_string();

        let outcome = picker.tap(3, Binding::new(&mut name));
        assert_eq!(outcome, TapOutcome::Assigned);
        assert_eq!(name, "siri");
        assert!(matches!(picker.phase, Phase::Dismissing { .. }));

        assert!(!picker.advance(Duration::from_millis(40)));
        assert_eq!(name, "siri");
        assert!(picker.advance(Duration::from_millis(60)));
        assert_eq!(picker.phase, Phase::Dismissed);
        assert!(!picker.advance(Duration::from_millis(10)));
    }

    #[test]
    fn test_untagged_tap_keeps_value_and_dismisses() {
        let mut picker: ValuePicker<i32> =
            ValuePicker::new("Numbers", vec!["one".picker_tag(1), PickerOption::new("none")])
                .with_animation(Duration::ZERO);
        let mut value = 1;

        assert_eq!(picker.tap(1, Binding::new(&mut value)), TapOutcome::Untouched);
        assert_eq!(value, 1);
        assert!(picker.advance(Duration::ZERO));
    }

    #[test]
    fn test_taps_ignored_while_dismissing() {
        let mut picker = name_picker();
        let mut name = "bill".to_string();
        picker.tap(1, Binding::new(&mut name));
        assert_eq!(picker.tap(2, Binding::new(&mut name)), TapOutcome::Ignored);
        assert_eq!(name, "john");
    }

    #[test]
    fn test_out_of_range_tap_ignored() {
        let mut picker = name_picker();
        let mut name = "bill".to_string();
        assert_eq!(picker.tap(99, Binding::new(&mut name)), TapOutcome::Ignored);
        assert_eq!(picker.phase, Phase::Idle);
    }

    #[test]
    fn test_emphasis_crossfades_during_transition() {
        let mut picker = name_picker();
        let mut name = "bill".to_string();
        picker.tap(3, Binding::new(&mut name));

        let rows: Vec<f32> = picker.rows(&name).map(|row| row.emphasis).collect();
        assert_eq!(rows[0], 1.0);
        assert_eq!(rows[3], 0.0);

        picker.advance(Duration::from_millis(100));
        let rows: Vec<f32> = picker.rows(&name).map(|row| row.emphasis).collect();
        assert_eq!(rows, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_retapping_selection_keeps_full_emphasis() {
        let mut picker = name_picker();
        let mut name = "doe".to_string();
        assert_eq!(picker.tap(2, Binding::new(&mut name)), TapOutcome::Assigned);
        let row = picker.rows(&name).nth(2).map(|row| row.emphasis);
        assert_eq!(row, Some(1.0));
    }

    #[test]
    fn test_duplicate_tags_all_selected() {
        let picker = ValuePicker::new("Dup", vec!["a".picker_tag(1), "b".picker_tag(1)]);
        assert!(picker.is_selected(0, &1));
        assert!(picker.is_selected(1, &1));
        assert_eq!(picker.position_of(&1), Some(0));
    }

    #[test]
    fn test_focus_moves_cursor_to_selection() {
        let mut picker = name_picker();
        picker.focus(&"doe".to_string());
        assert_eq!(picker.cursor(), 2);
        picker.focus(&"nobody".to_string());
        assert_eq!(picker.cursor(), 2);
        picker.move_next();
        assert_eq!(picker.cursor(), 3);
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut picker = name_picker();
        picker.move_prev();
        assert_eq!(picker.cursor(), 3);
        picker.move_next();
        assert_eq!(picker.cursor(), 0);

        let mut empty: ValuePicker<i32> = ValuePicker::new("Empty", Vec::new());
        empty.move_next();
        empty.move_prev();
        assert_eq!(empty.cursor(), 0);
    }

    #[test]
    fn test_scroll_moves_only_when_cursor_leaves_window() {
        let mut picker = name_picker();
        assert_eq!(picker.scroll_into_view(2), 0);
        picker.move_next();
        assert_eq!(picker.scroll_into_view(2), 0);
        picker.move_next();
        picker.move_next();
        assert_eq!(picker.scroll_into_view(2), 2);

        // Moving back up inside the window keeps it still
        picker.move_prev();
        assert_eq!(picker.scroll_into_view(2), 2);
        picker.move_prev();
        assert_eq!(picker.scroll_into_view(2), 1);

        // A window taller than the list always starts at the top
        assert_eq!(picker.scroll_into_view(10), 0);
    }

    #[test]
    fn test_accessibility_description() {
        let picker = name_picker();
        let selection = "john".to_string();
        let described: Vec<String> = picker
            .rows(&selection)
            .map(|row| row.accessibility().to_string())
            .collect();
        assert_eq!(described[1], "john, selected");
        assert_eq!(described[0], "bill");
    }
}
