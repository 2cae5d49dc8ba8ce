//! Core domain layer. No external I/O dependencies.
//!
//! Entities and clinical rules live here. Dependencies flow inward.

pub mod classifier;
pub mod entities;
pub mod errors;
pub mod glossary;
pub mod recommendation;

pub use classifier::classify;
pub use entities::{
    Assessment, CatScore, Classification, ExacerbationLevel, GlossaryEntry, MmrcScore, RiskLevel,
    SeverityGroup, SymptomLevel,
};
pub use errors::DomainError;
pub use glossary::MEDICATION_GLOSSARY;
pub use recommendation::{DEFAULT_RECOMMENDATION, recommendation_for};
