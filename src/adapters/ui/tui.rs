//! Implements InputPort. Inquire-based interactive form.
//!
//! Each menu pick edits one input; the panel is re-rendered from the form after every edit.

use crate::domain::{CatScore, DomainError, ExacerbationLevel, MmrcScore};
use crate::ports::{InputPort, ViewPort};
use crate::usecases::{AssessmentForm, FormView};
use inquire::error::{CustomUserError, InquireResult};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select};
use std::fmt;
use tracing::{debug, info};

const TEAL: Color = Color::Rgb {
    r: 0x14,
    g: 0xb8,
    b: 0xa6,
};

/// Sets the global inquire theme. Plain rendering when `color` is off.
pub fn apply_theme(color: bool) {
    if !color {
        inquire::set_global_render_config(RenderConfig::empty());
        return;
    }
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(TEAL))
        .with_answered_prompt_prefix(Styled::new("*").with_fg(TEAL))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(TEAL))
        .with_selected_option(Some(
            StyleSheet::new().with_fg(TEAL).with_attr(Attributes::BOLD),
        ))
        .with_help_message(StyleSheet::new().with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Exacerbations,
    Mmrc,
    Cat,
    ToggleGlossary,
    Quit,
}

#[derive(Debug, Clone)]
struct MenuItem {
    action: MenuAction,
    label: String,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn menu_items(view: &FormView) -> Vec<MenuItem> {
    let a = &view.assessment;
    let item = |action, label: String| MenuItem { action, label };
    vec![
        item(
            MenuAction::Exacerbations,
            format!("Exacerbations per year: {}", a.exacerbations),
        ),
        item(MenuAction::Mmrc, format!("mMRC (dyspnea): {}", a.mmrc)),
        item(MenuAction::Cat, format!("CAT (impact): {}", a.cat)),
        item(
            MenuAction::ToggleGlossary,
            view.glossary_toggle_label.to_string(),
        ),
        item(MenuAction::Quit, "Quit".to_string()),
    ]
}

/// mMRC picker row: "2 - Walks slower than peers...".
#[derive(Debug, Clone, Copy)]
struct MmrcOption(MmrcScore);

impl fmt::Display for MmrcOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0, self.0.description())
    }
}

/// How a prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Prompted<T> {
    Picked(T),
    /// Esc: leave this prompt, keep the session.
    Back,
    /// Ctrl-C: end the session.
    Quit,
}

impl<T> Prompted<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Prompted::Picked(v) => Prompted::Picked(f(v)),
            Prompted::Back => Prompted::Back,
            Prompted::Quit => Prompted::Quit,
        }
    }
}

/// Cancel and interrupt are user choices, not errors.
fn prompted<T>(res: InquireResult<T>) -> Result<Prompted<T>, DomainError> {
    match res {
        Ok(v) => Ok(Prompted::Picked(v)),
        Err(InquireError::OperationCanceled) => Ok(Prompted::Back),
        Err(InquireError::OperationInterrupted) => Ok(Prompted::Quit),
        Err(e) => Err(DomainError::Prompt(e.to_string())),
    }
}

/// TUI adapter. Owns the form for the lifetime of the session.
pub struct TuiInputPort {
    form: AssessmentForm,
    view: Box<dyn ViewPort>,
}

impl TuiInputPort {
    pub fn new(form: AssessmentForm, view: Box<dyn ViewPort>) -> Self {
        Self { form, view }
    }

    fn ask_exacerbations(&self) -> Result<Prompted<ExacerbationLevel>, DomainError> {
        let current = self.form.assessment().exacerbations;
        let cursor = ExacerbationLevel::ALL
            .iter()
            .position(|l| *l == current)
            .unwrap_or(0);
        prompted(
            Select::new("Exacerbations per year:", ExacerbationLevel::ALL.to_vec())
                .with_starting_cursor(cursor)
                .prompt(),
        )
    }

    fn ask_mmrc(&self) -> Result<Prompted<u8>, DomainError> {
        let options: Vec<MmrcOption> = MmrcScore::all().map(MmrcOption).collect();
        let cursor = usize::from(self.form.assessment().mmrc.value());
        let picked = prompted(
            Select::new("mMRC (dyspnea):", options)
                .with_starting_cursor(cursor)
                .prompt(),
        )?;
        Ok(picked.map(|o| o.0.value()))
    }

    fn ask_cat(&self) -> Result<Prompted<u8>, DomainError> {
        let range_msg = format!("Enter a whole number from 0 to {}", CatScore::MAX);
        let invalid_msg = range_msg.clone();
        prompted(
            CustomType::<u8>::new("CAT (impact):")
                .with_default(self.form.assessment().cat.value())
                .with_help_message(&range_msg)
                .with_error_message(&range_msg)
                .with_validator(move |v: &u8| -> Result<Validation, CustomUserError> {
                    if *v <= CatScore::MAX {
                        Ok(Validation::Valid)
                    } else {
                        Ok(Validation::Invalid(invalid_msg.clone().into()))
                    }
                })
                .prompt(),
        )
    }
}

impl InputPort for TuiInputPort {
    fn run(&mut self) -> Result<(), DomainError> {
        info!("assessment form opened");
        loop {
            let view = self.form.view();
            self.view.show(&view)?;

            let items = menu_items(&view);
            let picked = match prompted(Select::new("Change:", items).prompt())? {
                Prompted::Picked(item) => item,
                Prompted::Back | Prompted::Quit => break,
            };
            debug!(action = ?picked.action, "menu action");

            let outcome = match picked.action {
                MenuAction::Exacerbations => self
                    .ask_exacerbations()?
                    .map(|level| self.form.set_exacerbations(level)),
                MenuAction::Mmrc => match self.ask_mmrc()? {
                    Prompted::Picked(v) => Prompted::Picked(self.form.set_mmrc(v)?),
                    other => other.map(|_| ()),
                },
                MenuAction::Cat => match self.ask_cat()? {
                    Prompted::Picked(v) => Prompted::Picked(self.form.set_cat(v)?),
                    other => other.map(|_| ()),
                },
                MenuAction::ToggleGlossary => {
                    self.form.toggle_glossary();
                    Prompted::Picked(())
                }
                MenuAction::Quit => Prompted::Quit,
            };
            if outcome == Prompted::Quit {
                break;
            }
        }
        info!("assessment form closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{HIDE_GLOSSARY_LABEL, SHOW_GLOSSARY_LABEL};

    #[test]
    fn test_menu_reflects_current_inputs() {
        let mut form = AssessmentForm::new();
        form.set_cat(22).unwrap();
        let items = menu_items(&form.view());
        let actions: Vec<MenuAction> = items.iter().map(|i| i.action).collect();
        assert_eq!(
            actions,
            [
                MenuAction::Exacerbations,
                MenuAction::Mmrc,
                MenuAction::Cat,
                MenuAction::ToggleGlossary,
                MenuAction::Quit
            ]
        );
        assert_eq!(items[2].to_string(), "CAT (impact): 22");
        assert_eq!(items[3].to_string(), SHOW_GLOSSARY_LABEL);

        form.toggle_glossary();
        assert_eq!(menu_items(&form.view())[3].to_string(), HIDE_GLOSSARY_LABEL);
    }

    #[test]
    fn test_mmrc_option_label() {
        let opt = MmrcOption(MmrcScore::new(4).unwrap());
        assert!(opt.to_string().starts_with("4 - Too breathless"));
    }

    #[test]
    fn test_cancel_goes_back_and_interrupt_quits() {
        assert_eq!(
            prompted::<u8>(Err(InquireError::OperationCanceled)),
            Ok(Prompted::Back)
        );
        assert_eq!(
            prompted::<u8>(Err(InquireError::OperationInterrupted)),
            Ok(Prompted::Quit)
        );
        assert_eq!(prompted(Ok(3u8)), Ok(Prompted::Picked(3)));
        assert!(matches!(
            prompted::<u8>(Err(InquireError::NotTTY)),
            Err(DomainError::Prompt(_))
        ));
    }

    #[test]
    fn test_interrupt_survives_mapping() {
        let quit: Prompted<u8> = Prompted::Quit;
        assert_eq!(quit.map(|_| ()), Prompted::Quit);
        assert_eq!(Prompted::Picked(2u8).map(u32::from), Prompted::Picked(2u32));
    }
}
