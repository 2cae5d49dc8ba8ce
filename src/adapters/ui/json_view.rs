//! Implements ViewPort as JSON on stdout, for scripting the one-shot command.

use crate::domain::DomainError;
use crate::ports::ViewPort;
use crate::usecases::FormView;
use serde::Serialize;
use std::io::{Write, stdout};

pub struct JsonView {
    pretty: bool,
}

impl JsonView {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, DomainError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| DomainError::Render(e.to_string()))
    }

    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), DomainError> {
        let json = self.to_json(value)?;
        let mut out = stdout().lock();
        writeln!(out, "{json}").map_err(|e| DomainError::Render(e.to_string()))
    }
}

impl ViewPort for JsonView {
    fn show(&self, view: &FormView) -> Result<(), DomainError> {
        self.print(view)
    }
}
