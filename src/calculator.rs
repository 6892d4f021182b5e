// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The LMST pipeline: resolve the observation instant, then run the sidereal
//! computation for the observer's meridian.

use crate::clock::{Clock, HostZone, LocalZone, SystemClock};
use crate::error::Result;
use crate::observation::{parse_local_datetime, Longitude};
use crate::sidereal::{Hms, SiderealTime};

/// Computes Local Mean Sidereal Time against an injected clock and zone.
#[derive(Debug, Clone, Copy)]
pub struct LmstCalculator<C: Clock, Z: LocalZone> {
    clock: C,
    zone: Z,
}

impl LmstCalculator<SystemClock, HostZone> {
    /// Calculator bound to the system clock and the process time zone.
    pub fn system() -> Self {
        Self::new(SystemClock, HostZone)
    }
}

impl<C: Clock, Z: LocalZone> LmstCalculator<C, Z> {
    pub fn new(clock: C, zone: Z) -> Self {
        Self { clock, zone }
    }

    /// Whole Unix seconds of the observation.
    ///
    /// `None` reads the clock, dropping any sub-second part.  `Some` is parsed
    /// as `YYYY-MM-DDTHH:MM` in the calculator's zone.
    pub fn observation_seconds(&self, when: Option<&str>) -> Result<i64> {
        let instant = match when {
            None => self.clock.now(),
            Some(text) => self.zone.resolve(parse_local_datetime(text)?)?,
        };
        tracing::debug!(%instant, "observation instant");
        Ok(instant.timestamp())
    }

    /// LMST at `longitude` for the given (or current) observation time.
    pub fn compute(&self, longitude: Longitude, when: Option<&str>) -> Result<SiderealTime> {
        let obstime = self.observation_seconds(when)?;
        Ok(SiderealTime::local_mean(obstime, longitude))
    }

    /// Like [`compute`](Self::compute), starting from the raw longitude text.
    pub fn compute_str(&self, longitude: &str, when: Option<&str>) -> Result<Hms> {
        let longitude: Longitude = longitude.parse()?;
        Ok(self.compute(longitude, when)?.hms())
    }
}
