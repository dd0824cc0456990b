//! Value picker list component.
//!
//! Draws a `ValuePicker` as uniform rows: a leading checkmark column, the
//! option content, and an optional trailing spacer as wide as the checkmark.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::events::Action;
use crate::picker::{PickerRow, ValuePicker};
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion, ROW_PRIORITY};
use crate::tui::theme::*;

pub const CHECKMARK: &str = "✓";

/// Layout knobs for the picker rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerStyle {
    pub row_height: u16,
    pub trailing_spacer: bool,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            row_height: 1,
            trailing_spacer: true,
        }
    }
}

impl PickerStyle {
    /// Cells taken by the checkmark column and the gap after it.
    fn leading_width(&self) -> u16 {
        2
    }

    fn trailing_width(&self) -> u16 {
        if self.trailing_spacer { 2 } else { 0 }
    }
}

/// Width shared by every row: widest content plus the checkmark columns.
pub fn row_width<V: PartialEq>(picker: &ValuePicker<V>, style: &PickerStyle) -> u16 {
    let content = picker
        .options()
        .iter()
        .map(|option| option.content().width())
        .max()
        .unwrap_or(0);
    let content = u16::try_from(content).unwrap_or(u16::MAX);
    content
        .saturating_add(style.leading_width())
        .saturating_add(style.trailing_width())
}

/// Render the picker centered in `area` and register a click region per row.
pub fn render_value_picker<V: PartialEq>(
    frame: &mut Frame,
    area: Rect,
    picker: &mut ValuePicker<V>,
    selection: &V,
    style: &PickerStyle,
    interactions: &mut InteractionRegistry,
) {
    let row_height = style.row_height.max(1);
    let visible = (area.height / row_height) as usize;
    if picker.is_empty() || visible == 0 || area.width == 0 {
        return;
    }

    let shown = picker.len().min(visible);
    let first = picker.scroll_into_view(visible);

    let width = row_width(picker, style).min(area.width);
    let height = shown as u16 * row_height;
    let list_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    interactions.register(
        InteractiveRegion::scrollable(
            "picker",
            list_area.into(),
            Action::CursorUp,
            Action::CursorDown,
        )
        .with_priority(ROW_PRIORITY),
    );

    for (slot, row) in picker.rows(selection).skip(first).take(shown).enumerate() {
        let row_area = Rect::new(
            list_area.x,
            list_area.y + slot as u16 * row_height,
            list_area.width,
            row_height,
        );
        let background = if row.index == picker.cursor() {
            FOCUS_BG
        } else {
            PANEL
        };

        frame.render_widget(
            Paragraph::new(row_line(&row, style)).style(Style::new().bg(background)),
            row_area,
        );
        interactions.register(
            InteractiveRegion::clickable(
                "picker_row",
                row_area.into(),
                Action::TapOption(row.index),
            )
            .with_priority(ROW_PRIORITY),
        );
    }
}

fn row_line<'a, V>(row: &PickerRow<'a, V>, style: &PickerStyle) -> Line<'a> {
    // Blank but space-reserving when the row is not selected
    let check = if row.emphasis > 0.0 { CHECKMARK } else { " " };
    let check_style = Style::new()
        .fg(blend(PANEL, ACCENT, row.emphasis))
        .add_modifier(Modifier::BOLD);
    let tint = Style::new().fg(blend(TEXT_PRIMARY, ACCENT, row.emphasis));

    let mut spans = vec![Span::styled(check, check_style), Span::raw(" ")];
    // Content styles win over the tint, so only uncolored content is tinted
    spans.extend(
        row.option
            .content()
            .spans
            .iter()
            .map(|span| Span::styled(span.content.clone(), tint.patch(span.style))),
    );
    if style.trailing_spacer {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
