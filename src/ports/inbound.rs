//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the assessment form.
pub trait InputPort {
    /// Run the interactive form until the user quits.
    fn run(&mut self) -> Result<(), DomainError>;
}
