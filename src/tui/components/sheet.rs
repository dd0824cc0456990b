//! Modal sheet hosting the name picker.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::i18n::Key;
use crate::tui::interaction::{InteractiveRegion, SHEET_PRIORITY};
use crate::tui::theme::*;

use super::value_picker::render_value_picker;

/// Render the sheet over the whole `area`: green backdrop, white panel, picker.
pub fn render_sheet(frame: &mut Frame, area: Rect, app: &mut App) {
    let style = app.picker_style();
    let locale = app.locale;
    let Some(picker) = app.sheet.as_mut() else {
        return;
    };

    frame.render_widget(Clear, area);
    frame.render_widget(Block::new().style(Style::new().bg(SHEET_BACKDROP)), area);

    // Swallow clicks meant for the screen underneath
    app.interactions.register(
        InteractiveRegion::clickable("sheet", area.into(), Action::None)
            .with_priority(SHEET_PRIORITY),
    );

    let panel_area = Rect::new(
        area.x + 2u16.min(area.width / 2),
        area.y + 1u16.min(area.height),
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(PANEL_BORDER))
        .title(
            Line::styled(
                format!(" {} ", picker.title()),
                Style::new().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )
            .centered(),
        )
        .style(Style::new().bg(PANEL).fg(TEXT_PRIMARY));
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let [list_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    render_value_picker(
        frame,
        list_area.inner(Margin::new(1, 1)),
        picker,
        &app.name,
        &style,
        &mut app.interactions,
    );

    let hints = Line::from(vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_PRIMARY)),
        Span::styled(locale.get(Key::HintNavigate), Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_PRIMARY)),
        Span::styled(locale.get(Key::HintSelect), Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_PRIMARY)),
        Span::styled(locale.get(Key::HintClose), Style::new().fg(TEXT_DIM)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hints), hint_area);
}
