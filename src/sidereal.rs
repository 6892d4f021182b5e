// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mean sidereal time
//!
//! Greenwich Mean Sidereal Time from the IAU 1982 polynomial
//!
//! ```text
//! GMST = 24110.54841 + 8640184.812866·T + 0.093104·T² − 0.0000062·T³   [s]
//! ```
//!
//! with `T` in Julian centuries from J2000.0, and Local Mean Sidereal Time
//! obtained by shifting GMST by the observer's longitude at 15°/h.
//!
//! ## Timestamp term
//!
//! The polynomial is defined for `T` at 0h UT1, and the canonical recipe adds
//! the UT1 time of day scaled by the sidereal rate.  The NRAO recipe used here
//! adds the **full** Unix timestamp in seconds instead, then folds into one
//! day.  This is not the textbook GMST: check results against
//! [`gmst_polynomial`] plus that step, not against an external ephemeris.
//!
//! ## References
//! * Aoki et al. (1982), A&A 105, 359
//! * NRAO, "Times" ephemeris notes (R. Fisher)

use crate::instant::{Time, SECONDS_PER_DAY};
use crate::observation::Longitude;
use crate::scales::{UnixTime, JD};
use qtty::{Centuries, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// IAU 1982 GMST polynomial coefficients, in seconds.
const GMST_COEFFS: [f64; 4] = [24_110.548_41, 8_640_184.812_866, 0.093_104, -0.000_006_2];

/// GMST at 0h UT1 for `t` Julian centuries since J2000.0, not yet folded
/// into one day.
#[inline]
pub fn gmst_polynomial(t: Centuries) -> Seconds {
    let t = t.value();
    Seconds::new(
        GMST_COEFFS[0] + GMST_COEFFS[1] * t + GMST_COEFFS[2] * t.powi(2) + GMST_COEFFS[3] * t.powi(3),
    )
}

/// A sidereal time of day, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealTime {
    seconds: f64,
}

impl SiderealTime {
    /// Greenwich Mean Sidereal Time at a Unix timestamp.
    pub fn greenwich(unix_seconds: i64) -> Self {
        let jd = Time::<UnixTime>::from_unix_seconds(unix_seconds).to::<JD>();
        let d = jd.days_since_j2000();
        let t = jd.julian_centuries();

        let mut gmst = gmst_polynomial(t).value();
        // Whole timestamp, not the UT1 fraction of the day.
        gmst += unix_seconds as f64;
        let folded = gmst - SECONDS_PER_DAY * (gmst / SECONDS_PER_DAY).floor();

        tracing::debug!(
            unix_seconds,
            d = d.value(),
            t = t.value(),
            gmst_raw = gmst,
            gmst = folded,
            "greenwich mean sidereal time"
        );
        Self { seconds: folded }
    }

    /// Shift a Greenwich sidereal time to the meridian at `longitude`.
    ///
    /// The result is wrapped at most once in each direction, so any longitude
    /// within ±180° lands in `[0, 86400)`.  A value of exactly `0` goes up to
    /// 86400 and back to 0.
    pub fn local(gmst: Self, longitude: Longitude) -> Self {
        let mut lmst = gmst.seconds + longitude.time_offset().value();
        if lmst <= 0.0 {
            lmst += SECONDS_PER_DAY;
        }
        if lmst >= SECONDS_PER_DAY {
            lmst -= SECONDS_PER_DAY;
        }
        tracing::debug!(longitude = longitude.degrees(), lmst, "local mean sidereal time");
        Self { seconds: lmst }
    }

    /// Local Mean Sidereal Time at a Unix timestamp and longitude.
    #[inline]
    pub fn local_mean(unix_seconds: i64, longitude: Longitude) -> Self {
        Self::local(Self::greenwich(unix_seconds), longitude)
    }

    /// Seconds of sidereal day.
    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Sidereal hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Split into whole hours, minutes and seconds, truncating the fraction.
    ///
    /// Minutes and seconds are always non-negative.  The hour is negative
    /// only when a longitude far beyond ±180° left the time below zero.
    pub fn hms(&self) -> Hms {
        let hour = (self.seconds / SECONDS_PER_HOUR).floor();
        let rem = self.seconds - SECONDS_PER_HOUR * hour;
        let minute = (rem / SECONDS_PER_MINUTE).floor();
        let second = (rem - SECONDS_PER_MINUTE * minute).trunc();
        Hms {
            hour: hour as i32,
            minute: minute as i32,
            second: second as i32,
        }
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hms())
    }
}

/// Hours, minutes and whole seconds of a sidereal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hms {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Hms {
    /// Whole seconds represented by the three fields.
    pub const fn total_seconds(&self) -> i64 {
        self.hour as i64 * 3_600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2000-01-01T12:00:00Z
    const J2000_UNIX: i64 = 946_728_000;

    fn lon(deg: f64) -> Longitude {
        Longitude::from_degrees(deg).unwrap()
    }

    #[test]
    fn polynomial_at_j2000_is_the_constant_term() {
        assert_eq!(gmst_polynomial(Centuries::new(0.0)), Seconds::new(24_110.548_41));
    }

    #[test]
    fn polynomial_one_century_out() {
        let s = gmst_polynomial(Centuries::new(1.0)).value();
        let expected = 24_110.548_41 + 8_640_184.812_866 + 0.093_104 - 0.000_006_2;
        assert!((s - expected).abs() < 1e-6);
    }

    #[test]
    fn greenwich_follows_literal_formula_at_j2000() {
        let gmst = SiderealTime::greenwich(J2000_UNIX);
        let raw = 24_110.548_41 + J2000_UNIX as f64;
        let expected = raw - 86_400.0 * (raw / 86_400.0).floor();
        assert_eq!(gmst.seconds(), expected);
        // 946728000 is 10957.5 days: the half-day shifts the constant by 12h.
        assert!((gmst.seconds() - 67_310.548_41).abs() < 1e-6);
        assert_eq!(gmst.hms().to_string(), "18:41:50");
    }

    #[test]
    fn greenwich_is_folded_into_one_day() {
        for secs in [0, 1, 86_399, 946_728_000, 1_700_000_000, -1_000_000_000] {
            let s = SiderealTime::greenwich(secs).seconds();
            assert!((0.0..86_400.0).contains(&s), "{secs}: {s}");
        }
    }

    #[test]
    fn greenwich_meridian_equals_gmst() {
        let gmst = SiderealTime::greenwich(1_700_000_000);
        let lmst = SiderealTime::local(gmst, Longitude::GREENWICH);
        assert_eq!(lmst, gmst);
    }

    #[test]
    fn west_longitude_wraps_once() {
        let gmst = SiderealTime { seconds: 100.0 };
        let lmst = SiderealTime::local(gmst, lon(-180.0));
        assert_eq!(lmst.seconds(), 100.0 - 43_200.0 + 86_400.0);
        assert_eq!(lmst.hms().to_string(), "12:01:40");
    }

    #[test]
    fn east_longitude_wraps_below_one_day() {
        let gmst = SiderealTime { seconds: 80_000.0 };
        let lmst = SiderealTime::local(gmst, lon(90.0));
        assert_eq!(lmst.seconds(), 80_000.0 + 21_600.0 - 86_400.0);
        assert!(lmst.hms().hour <= 23);
    }

    #[test]
    fn exact_zero_stays_at_midnight() {
        let gmst = SiderealTime { seconds: 3_600.0 };
        let lmst = SiderealTime::local(gmst, lon(-15.0));
        assert_eq!(lmst.seconds(), 0.0);
        assert_eq!(lmst.to_string(), "00:00:00");
    }

    #[test]
    fn fifteen_degrees_shifts_one_hour() {
        for secs in [0_i64, 946_728_000, 1_234_567_890, 1_700_000_000] {
            for base in [-170.0, -45.5, 0.0, 33.3, 150.0] {
                let a = SiderealTime::local_mean(secs, lon(base));
                let b = SiderealTime::local_mean(secs, lon(base + 15.0));
                let diff = (b.seconds() - a.seconds()).rem_euclid(86_400.0);
                assert!((diff - 3_600.0).abs() < 1e-6, "{secs} {base}: {diff}");
            }
        }
    }

    #[test]
    fn hms_truncates_and_reconstructs() {
        let st = SiderealTime { seconds: 45_296.999 };
        let hms = st.hms();
        assert_eq!(hms, Hms { hour: 12, minute: 34, second: 56 });
        assert_eq!(hms.total_seconds(), 45_296);
    }

    #[test]
    fn hms_fields_stay_in_range() {
        let mut secs = 0_i64;
        while secs < 2_000_000_000 {
            for deg in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let st = SiderealTime::local_mean(secs, lon(deg));
                let hms = st.hms();
                assert!((0..=23).contains(&hms.hour) && hms.minute <= 59 && hms.second <= 59, "{hms:?}");
                assert_eq!(hms.total_seconds() as f64, st.seconds().floor());
            }
            secs += 7_777_777;
        }
    }

    #[test]
    fn hms_display_is_zero_padded() {
        let hms = Hms { hour: 3, minute: 4, second: 5 };
        assert_eq!(hms.to_string(), "03:04:05");
    }

    #[test]
    fn far_west_longitude_keeps_a_negative_hour() {
        // One wrap is not enough for -1000°: the hour stays negative.
        let lmst = SiderealTime::local_mean(J2000_UNIX, lon(-1000.0));
        assert!(lmst.seconds() < -86_000.0);
        let hms = lmst.hms();
        assert_eq!(hms, Hms { hour: -24, minute: 1, second: 50 });
        assert_eq!(hms.total_seconds() as f64, lmst.seconds().floor());
        assert_eq!(hms.to_string(), "-24:01:50");
    }

    #[test]
    fn hours_matches_seconds() {
        let st = SiderealTime { seconds: 5_400.0 };
        assert_eq!(st.hours(), 1.5);
    }
}
