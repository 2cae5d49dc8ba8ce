//! Presentation adapters. Implement ports for the terminal and the command line.
//!
//! Map terminal/serialization errors to DomainError.

pub mod cli;
pub mod ui;
