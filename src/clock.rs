// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Process-global time inputs behind injectable seams.
//!
//! - [`Clock`] answers "what time is it now".
//! - [`LocalZone`] turns a wall-clock date-time into an absolute instant.
//!
//! [`SystemClock`] and [`HostZone`] read the host; [`FixedClock`] and
//! [`FixedZone`] make the calculator deterministic under test.

use crate::error::{LmstError, Result};
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Resolves a local wall-clock date-time to an absolute instant.
pub trait LocalZone {
    fn resolve(&self, local: NaiveDateTime) -> Result<DateTime<Utc>>;
}

/// The zone the process runs in (`TZ` or the system default).
#[derive(Debug, Clone, Copy, Default)]
pub struct HostZone;

impl LocalZone for HostZone {
    fn resolve(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        resolve_in(&Local, local)
    }
}

/// A constant UTC offset with no daylight-saving rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedZone(pub FixedOffset);

impl FixedZone {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }
}

impl LocalZone for FixedZone {
    fn resolve(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        resolve_in(&self.0, local)
    }
}

/// Ambiguous wall-clock times (a repeated hour) resolve to the earlier
/// instant; times inside a gap are an error.
fn resolve_in<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => {
            // chrono does not promise which of the two comes first.
            let (a, b) = (a.with_timezone(&Utc), b.with_timezone(&Utc));
            let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
            tracing::debug!(
                %local,
                %earlier,
                %later,
                "ambiguous local time, using the earlier instant"
            );
            Ok(earlier)
        }
        LocalResult::None => Err(LmstError::NonexistentLocalTime(local)),
    }
}
