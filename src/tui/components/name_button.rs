//! Demo screen button component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::events::Action;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion, SCREEN_PRIORITY};
use crate::tui::theme::*;

/// Render a centered button showing `label`; clicking it toggles the sheet.
///
/// `accessibility_label` names the click region.
pub fn render_name_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    accessibility_label: &'static str,
    interactions: &mut InteractionRegistry,
) {
    let line = Line::styled(format!("[ {} ]", label), Style::new().fg(ACCENT).add_modifier(Modifier::BOLD));
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }

    let button_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    );

    frame.render_widget(Paragraph::new(line), button_area);
    interactions.register(
        InteractiveRegion::clickable(accessibility_label, button_area.into(), Action::ToggleSheet)
            .with_priority(SCREEN_PRIORITY),
    );
}
