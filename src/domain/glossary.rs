//! Medication glossary. Read-only reference table; never part of form state.

use crate::domain::{DomainError, GlossaryEntry};

pub static MEDICATION_GLOSSARY: [GlossaryEntry; 5] = [
    GlossaryEntry {
        term: "LABA",
        definition: "Long-Acting Beta Agonists",
        examples: "Examples: formoterol, salmeterol, indacaterol",
    },
    GlossaryEntry {
        term: "LAMA",
        definition: "Long-Acting Muscarinic Antagonists",
        examples: "Examples: tiotropium, aclidinium, glycopyrronium",
    },
    GlossaryEntry {
        term: "SABA",
        definition: "Short-Acting Beta Agonists",
        examples: "Examples: salbutamol, terbutaline",
    },
    GlossaryEntry {
        term: "SAMA",
        definition: "Short-Acting Muscarinic Antagonists",
        examples: "Examples: ipratropium",
    },
    GlossaryEntry {
        term: "ICS",
        definition: "Inhaled Corticosteroids",
        examples: "Examples: fluticasone, budesonide",
    },
];

/// Case-insensitive lookup by abbreviation.
pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    let term = term.trim();
    MEDICATION_GLOSSARY
        .iter()
        .find(|e| e.term.eq_ignore_ascii_case(term))
}

/// Entries for the given abbreviations, in the order asked; the whole table when none are given.
pub fn select<S: AsRef<str>>(terms: &[S]) -> Result<Vec<GlossaryEntry>, DomainError> {
    if terms.is_empty() {
        return Ok(MEDICATION_GLOSSARY.to_vec());
    }
    terms
        .iter()
        .map(|t| {
            lookup(t.as_ref())
                .copied()
                .ok_or_else(|| DomainError::UnknownGlossaryTerm(t.as_ref().to_string()))
        })
        .collect()
}
