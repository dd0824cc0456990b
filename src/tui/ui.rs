use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::i18n::Key;
use super::components::{render_name_button, render_sheet};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt from scratch every frame
    app.interactions.clear();

    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Min(0),     // Content
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    let button_label = app.locale.get(Key::NameButtonLabel);
    render_name_button(
        frame,
        main_layout[0],
        &app.name,
        button_label,
        &mut app.interactions,
    );
    render_hotkeys(frame, main_layout[1], app);

    if app.showing_sheet {
        render_sheet(frame, area, app);
    }
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = Line::from(vec![
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(app.locale.get(Key::HintOpen), Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(app.locale.get(Key::HintQuit), Style::new().fg(TEXT_DIM)),
    ])
    .centered();

    frame.render_widget(Paragraph::new(hotkeys), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use crate::config::Config;
    use crate::i18n::Language;
    use crate::tui::components::CHECKMARK;

    fn english_app() -> App {
        App::new(Config {
            language: Some(Language::English),
            ..Config::default()
        })
    }

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_button_shows_current_name() {
        let mut app = english_app();
        let lines = screen_text(&draw(&mut app));
        assert!(lines.iter().any(|l| l.contains("[ bill ]")));
        assert!(!lines.iter().any(|l| l.contains(CHECKMARK)));
    }

    #[test]
    fn test_sheet_checks_current_name() {
        let mut app = english_app();
        app.toggle_sheet();
        let lines = screen_text(&draw(&mut app));

        let checked: Vec<&String> = lines.iter().filter(|l| l.contains(CHECKMARK)).collect();
        assert_eq!(checked.len(), 1);
        assert!(checked[0].contains("bill"));
        assert!(lines.iter().any(|l| l.contains(" Name ")));
        // Button is covered by the sheet
        assert!(!lines.iter().any(|l| l.contains("[ bill ]")));
    }

    #[test]
    fn test_button_shows_tapped_name_after_dismissal() {
        let mut app = english_app();
        app.toggle_sheet();
        draw(&mut app);
        let siri = crate::app::NAMES.iter().position(|n| *n == "siri").unwrap();
        app.tap_option(siri);

        // Still presented while the transition runs
        let lines = screen_text(&draw(&mut app));
        assert!(lines.iter().any(|l| l.contains(" Name ")));
        assert!(!lines.iter().any(|l| l.contains("[ siri ]")));

        app.tick(std::time::Duration::from_secs(1));
        let lines = screen_text(&draw(&mut app));
        assert!(lines.iter().any(|l| l.contains("[ siri ]")));
        assert!(!lines.iter().any(|l| l.contains(CHECKMARK)));
    }

    #[test]
    fn test_sheet_backdrop_is_green() {
        let mut app = english_app();
        app.toggle_sheet();
        let buffer = draw(&mut app);
        assert_eq!(buffer[(0, 0)].bg, SHEET_BACKDROP);
        assert_eq!(buffer[(20, 8)].bg, PANEL);
    }
}
