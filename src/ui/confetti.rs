//! Confetti layer painted over the current screen

use ratatui::{Frame, layout::Position, style::Color};

use crate::app::effects::{Confetti, FIELD_SIZE, Particle};
use crate::theme::Theme;

/// Glyphs cycled through to make pieces look like they spin
const GLYPHS: [&str; 4] = ["▬", "▮", "◆", "▪"];

/// Frames per glyph change
const SPIN_FRAMES: u64 = 8;

/// Paint every visible particle into the frame buffer
///
/// Only the symbol and foreground are changed, so the screen underneath keeps
/// its background colors.
pub fn draw(frame: &mut Frame, confetti: &Confetti, theme: &Theme, frame_count: u64) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    for particle in confetti.particles() {
        let in_field = (0.0..FIELD_SIZE).contains(&particle.x)
            && (0.0..FIELD_SIZE).contains(&particle.y);
        if !in_field {
            continue;
        }
        let column = area.x + (particle.x / FIELD_SIZE * f64::from(area.width)) as u16;
        let row = area.y + (particle.y / FIELD_SIZE * f64::from(area.height)) as u16;

        if let Some(cell) = buf.cell_mut(Position::new(column, row)) {
            let base = theme.confetti[particle.color % theme.confetti.len()];
            cell.set_symbol(glyph(particle, frame_count));
            cell.set_fg(fade(base, theme.bg_primary, particle.opacity()));
        }
    }
}

fn glyph(particle: &Particle, frame_count: u64) -> &'static str {
    let step = frame_count / SPIN_FRAMES + u64::from(particle.spin);
    GLYPHS[(step % GLYPHS.len() as u64) as usize]
}

/// Blend `color` toward `background` as opacity drops
fn fade(color: Color, background: Color, opacity: f32) -> Color {
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, back: u8| {
                (f32::from(back) + (f32::from(c) - f32::from(back)) * opacity).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ => color,
    }
}
