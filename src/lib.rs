//! copd-scale: Interactive GOLD COPD severity scale with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
