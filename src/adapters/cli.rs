//! Command line. Parses arguments with clap and dispatches to the form, a one-shot
//! assessment, or the glossary. Routes only; the clinical rules stay in the domain.

use crate::adapters::ui::json_view::JsonView;
use crate::adapters::ui::panel::{PanelView, glossary_lines};
use crate::adapters::ui::{init_ui, tui::TuiInputPort};
use crate::domain::{Assessment, CatScore, ExacerbationLevel, MmrcScore, glossary};
use crate::ports::{InputPort, ViewPort};
use crate::shared::config::AppConfig;
use crate::usecases::AssessmentForm;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, stdout};
use std::str::FromStr;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "copd-scale",
    version,
    about = "GOLD COPD severity scale: classify groups A-D and show treatment guidance."
)]
pub struct Cli {
    /// Subcommand to run; the interactive form when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive assessment form.
    Interactive,
    /// Classify one assessment and print the result.
    Assess(AssessArgs),
    /// Print the medication glossary.
    Glossary {
        /// Medication classes to show (e.g. LABA ICS); all when omitted.
        terms: Vec<String>,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Exacerbations per year: none-or-one, one-hospitalized, two-or-more (or 0, 1, 2).
    #[arg(short, long, default_value = "none-or-one", value_parser = ExacerbationLevel::from_str)]
    pub exacerbations: ExacerbationLevel,

    /// mMRC dyspnea grade (0-4).
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub mmrc: u8,

    /// CAT impact score (0-40).
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=40))]
    pub cat: u8,

    /// Include the medication glossary in the output.
    #[arg(long)]
    pub glossary: bool,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AssessArgs {
    /// Builds the prefilled form. Ranges are checked again by the domain.
    pub fn into_form(self) -> Result<AssessmentForm> {
        let assessment = Assessment::new(
            self.exacerbations,
            MmrcScore::new(self.mmrc)?,
            CatScore::new(self.cat)?,
        );
        let mut form = AssessmentForm::with_assessment(assessment);
        if self.glossary {
            form.toggle_glossary();
        }
        Ok(form)
    }
}

impl Cli {
    pub fn run(self, cfg: &AppConfig) -> Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => run_interactive(cfg),
            Command::Assess(args) => run_assess(args, cfg),
            Command::Glossary { terms, json } => run_glossary(&terms, json, cfg),
        }
    }
}

fn run_interactive(cfg: &AppConfig) -> Result<()> {
    init_ui(cfg);
    let mut input: Box<dyn InputPort> = Box::new(TuiInputPort::new(
        AssessmentForm::new(),
        Box::new(PanelView::from_config(cfg)),
    ));
    input.run()?;
    Ok(())
}

fn run_assess(args: AssessArgs, cfg: &AppConfig) -> Result<()> {
    let json = args.json;
    let form = args.into_form()?;
    let view = form.view();
    info!(
        exacerbations = view.assessment.exacerbations.token(),
        mmrc = view.assessment.mmrc.value(),
        cat = view.assessment.cat.value(),
        group = %view.classification.group,
        "one-shot assessment"
    );
    let port: Box<dyn ViewPort> = if json {
        Box::new(JsonView::new(true))
    } else {
        Box::new(PanelView::new(stdout_color(cfg), false))
    };
    port.show(&view)?;
    Ok(())
}

fn run_glossary(terms: &[String], json: bool, cfg: &AppConfig) -> Result<()> {
    let entries = glossary::select(terms)?;
    if json {
        JsonView::new(true).print(&entries[..])?;
    } else {
        PanelView::new(stdout_color(cfg), false).print_lines(&glossary_lines(&entries))?;
    }
    Ok(())
}

/// Colors only when configured and stdout is a terminal, so pipes get plain text.
fn color_enabled(configured: bool, is_terminal: bool) -> bool {
    configured && is_terminal
}

fn stdout_color(cfg: &AppConfig) -> bool {
    color_enabled(cfg.color_or_default(), stdout().is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeverityGroup;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("copd-scale").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        assert!(parse(&[]).unwrap().command.is_none());
    }

    #[test]
    fn test_assess_args() {
        let cli = parse(&[
            "assess",
            "--exacerbations",
            "two-or-more",
            "--mmrc",
            "3",
            "--cat",
            "15",
        ])
        .unwrap();
        let Some(Command::Assess(args)) = cli.command else {
            panic!("expected assess");
        };
        let view = args.into_form().unwrap().view();
        assert_eq!(view.classification.group, SeverityGroup::D);
        assert!(view.glossary.is_none());
    }

    #[test]
    fn test_assess_legacy_selector_value_and_glossary_flag() {
        let cli = parse(&["assess", "-e", "1", "--glossary"]).unwrap();
        let Some(Command::Assess(args)) = cli.command else {
            panic!("expected assess");
        };
        let view = args.into_form().unwrap().view();
        assert_eq!(view.classification.group, SeverityGroup::C);
        assert_eq!(view.glossary.map(<[_]>::len), Some(5));
    }

    #[test]
    fn test_assess_rejects_out_of_range() {
        assert!(parse(&["assess", "--mmrc", "5"]).is_err());
        assert!(parse(&["assess", "--cat", "41"]).is_err());
        assert!(parse(&["assess", "--exacerbations", "hosp"]).is_err());
    }

    #[test]
    fn test_glossary_json_flag() {
        let cli = parse(&["glossary", "--json"]).unwrap();
        let Some(Command::Glossary { terms, json }) = cli.command else {
            panic!("expected glossary");
        };
        assert!(json);
        assert!(terms.is_empty());
    }

    #[test]
    fn test_glossary_terms_filter() {
        let cli = parse(&["glossary", "ics", "LAMA"]).unwrap();
        let Some(Command::Glossary { terms, json }) = cli.command else {
            panic!("expected glossary");
        };
        assert!(!json);
        let entries = glossary::select(&terms).unwrap();
        let picked: Vec<&str> = entries.iter().map(|e| e.term).collect();
        assert_eq!(picked, ["ICS", "LAMA"]);
        assert!(glossary::select(&["LTRA".to_string()]).is_err());
    }

    #[test]
    fn test_color_needs_terminal() {
        assert!(color_enabled(true, true));
        assert!(!color_enabled(true, false));
        assert!(!color_enabled(false, true));
    }
}
