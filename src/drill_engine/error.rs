//! Error types for the drill engine.
//!
//! `SessionError` covers expected user-input conditions: the action is
//! rejected, the session is left untouched, and no observer is notified.
//! Caller bugs (asking the generator for a question with nothing selected)
//! panic instead.

use thiserror::Error;

use crate::drill_engine::models::SessionPhase;

/// An action the session refused to perform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// `start_session` with no table selected.
    #[error("select at least one table before starting")]
    EmptySelection,

    /// The table has no button in the configured range.
    #[error("table {table} is outside the available range {min}..={max}")]
    TableOutOfRange { table: u32, min: u32, max: u32 },

    /// An answer arrived while feedback is still on screen.
    #[error("answer input is locked while feedback is shown")]
    InputLocked,

    /// Selection actions are only valid before the session starts.
    #[error("only allowed while selecting tables (current phase: {phase})")]
    NotSelecting { phase: SessionPhase },

    /// Practice actions need a running session.
    #[error("no practice session is running")]
    NotPracticing,

    /// The feedback timer was cancelled or superseded.
    #[error("feedback timer is no longer pending")]
    StaleTimer,
}

/// Failures loading or validating a [`DrillConfig`](crate::DrillConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
