// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00 | 2 440 587.5 |

use super::instant::{Time, TimeScale, SECONDS_PER_DAY};
use qtty::Days;

/// Julian Date — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Unix / POSIX time, counted in days since 1970-01-01T00:00.
///
/// Leap seconds are not modelled: a POSIX day is always 86 400 s long.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

impl Time<UnixTime> {
    /// Build an instant from whole seconds since the Unix epoch.
    ///
    /// The division happens in `f64` before the epoch offset is added, so a
    /// later `.to::<JD>()` evaluates `secs/86400 + 2440587.5` in that order.
    #[inline]
    pub fn from_unix_seconds(secs: i64) -> Self {
        Self::new(secs as f64 / SECONDS_PER_DAY)
    }
}
