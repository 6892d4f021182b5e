// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, LmstError>;

/// Everything that can stop an LMST computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LmstError {
    /// The longitude is not a finite decimal number of degrees.
    #[error("invalid longitude '{input}': expected decimal degrees, East positive")]
    InvalidLongitude { input: String },

    /// The observation time does not match `YYYY-MM-DDTHH:MM`.
    #[error("invalid observation time '{input}': expected YYYY-MM-DDTHH:MM")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The local date-time falls in a gap of the time zone (e.g. a DST jump).
    #[error("local time {0} does not exist in the host time zone")]
    NonexistentLocalTime(NaiveDateTime),
}
