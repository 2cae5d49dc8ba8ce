//! Terminal panel. Implements ViewPort by printing the derived form view.
//!
//! Layout is built as tagged lines first so the text can be tested without a terminal;
//! colors are applied only when writing.

use crate::domain::{DomainError, GlossaryEntry, SeverityGroup};
use crate::ports::ViewPort;
use crate::shared::config::AppConfig;
use crate::usecases::FormView;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write, stdout};

pub const EXPLANATION: [&str; 6] = [
    "The GOLD classification of COPD rests on three factors:",
    "  - Exacerbations: frequency and severity of flare-ups",
    "  - mMRC: dyspnea scale (0-4)",
    "  - CAT: impact on quality of life (0-40)",
    "The resulting group guides the choice of treatment. Know how each factor",
    "moves the group and which medication classes each group calls for.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Heading,
    Plain,
    Muted,
    Group(SeverityGroup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(Tone::Plain, "")
    }
}

fn group_color(group: SeverityGroup) -> Color {
    match group {
        SeverityGroup::A => Color::Green,
        SeverityGroup::B => Color::Yellow,
        SeverityGroup::C => Color::Rgb {
            r: 0xf9,
            g: 0x73,
            b: 0x16,
        },
        SeverityGroup::D => Color::Red,
    }
}

pub fn glossary_lines(entries: &[GlossaryEntry]) -> Vec<Line> {
    let mut lines = vec![Line::new(Tone::Heading, "Medication glossary")];
    for entry in entries {
        lines.push(Line::new(
            Tone::Plain,
            format!("  {}: {}", entry.term, entry.definition),
        ));
        lines.push(Line::new(Tone::Muted, format!("    {}", entry.examples)));
    }
    lines
}

/// Inputs, result, recommendation, glossary (when visible) and explanation, top to bottom.
pub fn panel_lines(view: &FormView) -> Vec<Line> {
    let a = &view.assessment;
    let c = &view.classification;
    let mut lines = vec![
        Line::new(Tone::Title, "GOLD COPD Severity Scale"),
        Line::blank(),
        Line::new(
            Tone::Plain,
            format!("Exacerbations per year: {}", a.exacerbations),
        ),
        Line::new(
            Tone::Plain,
            format!("mMRC (dyspnea):         {} ({})", a.mmrc, a.mmrc.description()),
        ),
        Line::new(Tone::Plain, format!("CAT (impact):           {}", a.cat)),
        Line::blank(),
        Line::new(Tone::Group(c.group), format!("COPD group: {}", c.group)),
        Line::new(Tone::Plain, format!("Risk: {}", c.risk.label())),
        Line::new(Tone::Plain, format!("Symptoms: {}", c.symptoms.label())),
        Line::blank(),
        Line::new(Tone::Heading, "Treatment recommendation:"),
        Line::new(Tone::Plain, format!("  {}", view.recommendation)),
        Line::blank(),
    ];
    if let Some(entries) = view.glossary {
        lines.extend(glossary_lines(entries));
        lines.push(Line::blank());
    }
    lines.push(Line::new(Tone::Heading, "Explanation:"));
    lines.extend(EXPLANATION.iter().map(|t| Line::new(Tone::Muted, *t)));
    lines
}

pub fn to_plain(lines: &[Line]) -> String {
    let mut s = String::new();
    for line in lines {
        s.push_str(&line.text);
        s.push('\n');
    }
    s
}

pub fn write_lines(out: &mut impl Write, lines: &[Line], color: bool) -> io::Result<()> {
    for line in lines {
        if color {
            match line.tone {
                Tone::Title => queue!(
                    out,
                    SetForegroundColor(Color::Cyan),
                    SetAttribute(Attribute::Bold)
                )?,
                Tone::Heading => queue!(out, SetAttribute(Attribute::Bold))?,
                Tone::Muted => queue!(out, SetForegroundColor(Color::DarkGrey))?,
                Tone::Group(g) => queue!(
                    out,
                    SetForegroundColor(group_color(g)),
                    SetAttribute(Attribute::Bold)
                )?,
                Tone::Plain => {}
            }
        }
        queue!(out, Print(&line.text))?;
        if color && line.tone != Tone::Plain {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Prints the panel to stdout.
pub struct PanelView {
    color: bool,
    clear_screen: bool,
}

impl PanelView {
    pub fn new(color: bool, clear_screen: bool) -> Self {
        Self {
            color,
            clear_screen,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.color_or_default(), cfg.clear_screen_or_default())
    }

    pub fn print_lines(&self, lines: &[Line]) -> Result<(), DomainError> {
        write_lines(&mut stdout().lock(), lines, self.color)
            .map_err(|e| DomainError::Render(e.to_string()))
    }
}

impl ViewPort for PanelView {
    fn show(&self, view: &FormView) -> Result<(), DomainError> {
        let mut out = stdout().lock();
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))
                .map_err(|e| DomainError::Render(e.to_string()))?;
        } else {
            queue!(out, Print("\n")).map_err(|e| DomainError::Render(e.to_string()))?;
        }
        write_lines(&mut out, &panel_lines(view), self.color)
            .map_err(|e| DomainError::Render(e.to_string()))
    }
}
