use ratatui::style::Color;

// Accent (tint) and sheet colors
pub const ACCENT: Color = Color::Rgb(10, 132, 255);          // #0A84FF
pub const SHEET_BACKDROP: Color = Color::Rgb(52, 199, 89);   // #34C759
pub const PANEL: Color = Color::Rgb(255, 255, 255);          // #FFFFFF
pub const PANEL_BORDER: Color = Color::Rgb(199, 199, 204);   // #C7C7CC
pub const FOCUS_BG: Color = Color::Rgb(229, 229, 234);       // #E5E5EA

// Text colors
pub const TEXT_PRIMARY: Color = Color::Rgb(0, 0, 0);         // #000000
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);       // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);     // #FFFFFF

/// Mix `from` toward `to` by `t` in `0.0..=1.0`.
///
/// Non-RGB colors cannot be mixed and switch over at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}
