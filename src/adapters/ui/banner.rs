//! Startup ASCII banner with a vertical gradient (COPD SCALE).
//! Uses figlet's built-in standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};
use tracing::warn;

/// Teal (#14b8a6).
const TEAL: (u8, u8, u8) = (0x14, 0xb8, 0xa6);
/// Clinical blue (#3b82f6).
const CLINICAL_BLUE: (u8, u8, u8) = (0x3b, 0x82, 0xf6);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert("COPD SCALE")?;
    Some(figure.to_string())
}

/// Prints "COPD SCALE" in figlet ASCII, shaded from teal to blue when `color` is set,
/// followed by the version line.
pub fn print_welcome(color: bool) {
    let Some(art) = banner_art() else {
        warn!("figlet banner unavailable");
        return;
    };
    let mut out = stdout();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        if color {
            let t = if total <= 1 {
                1.0
            } else {
                i as f64 / (total - 1) as f64
            };
            let (r, g, b) = lerp_rgb(TEAL, CLINICAL_BLUE, t);
            let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        }
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        if color {
            let _ = out.execute(ResetColor);
        }
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(Print(format!(
        "v{version}  GOLD ABCD assessment. Not a substitute for clinical judgement.\r\n\r\n"
    )));
    let _ = out.flush();
}
