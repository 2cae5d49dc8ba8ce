//! Outbound port. Application hands derived views to a renderer.
//!
//! Implemented by adapters (terminal panel, JSON).

use crate::domain::DomainError;
use crate::usecases::FormView;

/// Presents a derived form view. Rendering must not feed back into form state.
pub trait ViewPort {
    fn show(&self, view: &FormView) -> Result<(), DomainError>;
}
