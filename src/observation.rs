// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer inputs: the longitude and the optional local observation time.

use crate::error::{LmstError, Result};
use chrono::NaiveDateTime;
use qtty::Seconds;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed layout accepted for observation times.
pub const OBSERVATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Degrees of Earth rotation per hour of sidereal time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Geographic longitude in decimal degrees, East positive.
///
/// No range check is applied: `190.0` and `-200.0` are accepted as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Longitude(f64);

impl Longitude {
    /// Longitude of the Greenwich meridian.
    pub const GREENWICH: Self = Self(0.0);

    /// Wrap a value in degrees. Non-finite input is rejected.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if degrees.is_finite() {
            Ok(Self(degrees))
        } else {
            Err(LmstError::InvalidLongitude {
                input: degrees.to_string(),
            })
        }
    }

    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// The sidereal time offset of this meridian from Greenwich.
    #[inline]
    pub fn time_offset(&self) -> Seconds {
        Seconds::new(3600.0 * self.0 / DEGREES_PER_HOUR)
    }
}

impl FromStr for Longitude {
    type Err = LmstError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LmstError::InvalidLongitude {
            input: s.to_string(),
        };
        let degrees: f64 = s.trim().parse().map_err(|_| invalid())?;
        if !degrees.is_finite() {
            return Err(invalid());
        }
        Ok(Self(degrees))
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Parse a `YYYY-MM-DDTHH:MM` wall-clock time. Seconds are zero.
pub fn parse_local_datetime(input: &str) -> Result<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(input, OBSERVATION_TIME_FORMAT).map_err(|source| {
        LmstError::InvalidTimestamp {
            input: input.to_string(),
            source,
        }
    })?;
    tracing::trace!(%input, %parsed, "parsed observation time");
    Ok(parsed)
}
