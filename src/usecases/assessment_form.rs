//! Assessment form use case. Owns the three inputs and the glossary toggle.
//!
//! The displayed result is never stored: `view()` derives it from the current
//! inputs, so the group cannot drift from what the user entered.

use crate::domain::{
    Assessment, CatScore, Classification, DomainError, ExacerbationLevel, GlossaryEntry,
    MEDICATION_GLOSSARY, MmrcScore,
};
use serde::Serialize;
use tracing::debug;

pub const SHOW_GLOSSARY_LABEL: &str = "Show medication glossary";
pub const HIDE_GLOSSARY_LABEL: &str = "Hide glossary";

/// Everything a renderer needs, computed from the form in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub assessment: Assessment,
    pub classification: Classification,
    pub recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary: Option<&'static [GlossaryEntry]>,
    #[serde(skip)]
    pub glossary_toggle_label: &'static str,
}

/// Form state for a single, unsaved assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessmentForm {
    assessment: Assessment,
    glossary_visible: bool,
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from prefilled inputs; the glossary still starts hidden.
    pub fn with_assessment(assessment: Assessment) -> Self {
        Self {
            assessment,
            glossary_visible: false,
        }
    }

    pub fn assessment(&self) -> Assessment {
        self.assessment
    }

    pub fn set_exacerbations(&mut self, level: ExacerbationLevel) {
        self.assessment.exacerbations = level;
        debug!(exacerbations = level.token(), "exacerbations updated");
    }

    /// Rejects values outside 0-4 and leaves the form untouched.
    pub fn set_mmrc(&mut self, value: u8) -> Result<(), DomainError> {
        self.assessment.mmrc = MmrcScore::new(value)?;
        debug!(mmrc = value, "mMRC updated");
        Ok(())
    }

    /// Rejects values outside 0-40 and leaves the form untouched.
    pub fn set_cat(&mut self, value: u8) -> Result<(), DomainError> {
        self.assessment.cat = CatScore::new(value)?;
        debug!(cat = value, "CAT updated");
        Ok(())
    }

    pub fn toggle_glossary(&mut self) {
        self.glossary_visible = !self.glossary_visible;
        debug!(visible = self.glossary_visible, "glossary toggled");
    }

    pub fn glossary_visible(&self) -> bool {
        self.glossary_visible
    }

    pub fn view(&self) -> FormView {
        let classification = self.assessment.classify();
        debug!(group = %classification.group, "group derived");
        FormView {
            assessment: self.assessment,
            classification,
            recommendation: classification.group.recommendation(),
            glossary: self
                .glossary_visible
                .then_some(&MEDICATION_GLOSSARY[..]),
            glossary_toggle_label: if self.glossary_visible {
                HIDE_GLOSSARY_LABEL
            } else {
                SHOW_GLOSSARY_LABEL
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLevel, SeverityGroup, SymptomLevel};

    #[test]
    fn test_initial_view_is_group_a_with_glossary_hidden() {
        let form = AssessmentForm::new();
        let view = form.view();
        assert_eq!(view.classification.group, SeverityGroup::A);
        assert_eq!(view.recommendation, SeverityGroup::A.recommendation());
        assert!(view.glossary.is_none());
        assert_eq!(view.glossary_toggle_label, SHOW_GLOSSARY_LABEL);
    }

    #[test]
    fn test_view_follows_every_input_change() {
        let mut form = AssessmentForm::new();

        form.set_mmrc(2).unwrap();
        assert_eq!(form.view().classification.group, SeverityGroup::B);

        form.set_exacerbations(ExacerbationLevel::TwoOrMore);
        let view = form.view();
        assert_eq!(view.classification.group, SeverityGroup::D);
        assert_eq!(view.classification.risk, RiskLevel::High);
        assert_eq!(view.classification.symptoms, SymptomLevel::More);

        form.set_mmrc(0).unwrap();
        form.set_cat(9).unwrap();
        assert_eq!(form.view().classification.group, SeverityGroup::C);

        form.set_cat(10).unwrap();
        assert_eq!(form.view().classification.group, SeverityGroup::D);
    }

    #[test]
    fn test_out_of_range_input_keeps_previous_value() {
        let mut form = AssessmentForm::new();
        form.set_cat(12).unwrap();
        assert!(matches!(
            form.set_cat(41),
            Err(DomainError::ScoreOutOfRange { scale: "CAT", .. })
        ));
        assert!(form.set_mmrc(5).is_err());
        assert_eq!(form.assessment().cat.value(), 12);
        assert_eq!(form.assessment().mmrc.value(), 0);
    }

    #[test]
    fn test_glossary_toggle() {
        let mut form = AssessmentForm::new();
        assert!(!form.glossary_visible());

        form.toggle_glossary();
        let shown = form.view();
        let entries = shown.glossary.expect("glossary visible after first toggle");
        assert_eq!(entries.len(), 5);
        assert_eq!(entries, &MEDICATION_GLOSSARY[..]);
        assert_eq!(shown.glossary_toggle_label, HIDE_GLOSSARY_LABEL);

        form.toggle_glossary();
        assert!(form.view().glossary.is_none());

        // Toggling never touches the classification.
        assert_eq!(shown.classification, form.view().classification);
    }

    #[test]
    fn test_view_json() {
        let mut form = AssessmentForm::with_assessment(Assessment::new(
            ExacerbationLevel::OneWithHospitalization,
            MmrcScore::new(0).unwrap(),
            CatScore::new(0).unwrap(),
        ));
        let value = serde_json::to_value(form.view()).unwrap();
        assert_eq!(value["classification"]["group"], "C");
        assert_eq!(value["classification"]["risk"], "high");
        assert_eq!(value["assessment"]["exacerbations"], "one-hospitalized");
        assert!(value.get("glossary").is_none());

        form.toggle_glossary();
        let value = serde_json::to_value(form.view()).unwrap();
        assert_eq!(value["glossary"][4]["term"], "ICS");
    }
}
