//! Application use cases. Orchestrate domain logic via ports.

pub mod assessment_form;

pub use assessment_form::{AssessmentForm, FormView, HIDE_GLOSSARY_LABEL, SHOW_GLOSSARY_LABEL};
