// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local Mean Sidereal Time
//!
//! Converts a civil timestamp and an observer's longitude into Local Mean
//! Sidereal Time (LMST):
//!
//! ```text
//! Unix seconds → JD → days since J2000.0 → GMST polynomial → + longitude → HH:MM:SS
//! ```
//!
//! # Core types
//!
//! - [`Time<S>`] — instant parameterised by a [`TimeScale`] marker
//!   ([`JD`], [`UnixTime`]).
//! - [`SiderealTime`] — a sidereal time of day; [`Hms`] is its display form.
//! - [`Longitude`] — decimal degrees, East positive.
//! - [`LmstCalculator`] — the pipeline, with the [`Clock`] and [`LocalZone`]
//!   seams for the current time and the host time zone.
//!
//! # Example
//!
//! ```rust
//! use chrono::DateTime;
//! use lmst::{FixedClock, FixedZone, LmstCalculator};
//!
//! let now = DateTime::from_timestamp(946_728_000, 0).unwrap();
//! let calc = LmstCalculator::new(FixedClock(now), FixedZone::utc());
//! let hms = calc.compute_str("0.0", None).unwrap();
//! assert_eq!(hms.to_string(), "18:41:50");
//! ```

mod calculator;
mod clock;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod observation;
pub(crate) mod scales;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::LmstCalculator;
pub use clock::{Clock, FixedClock, FixedZone, HostZone, LocalZone, SystemClock};
pub use error::{LmstError, Result};
pub use instant::{Time, TimeScale};
pub use observation::{parse_local_datetime, Longitude, OBSERVATION_TIME_FORMAT};
pub use scales::{UnixTime, JD};
pub use sidereal::{gmst_polynomial, Hms, SiderealTime};

/// Julian Date — continuous count of days since the Julian Period.
pub type JulianDate = Time<JD>;
