use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EnergyConfig;
use crate::errors::{ActionError, ActionResult};

/// Tap budget of the energy dashboard. Regeneration is derived from elapsed
/// wall time whenever the meter is touched, so a dropped session leaves no
/// timer behind.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EnergyMeter {
    pub energy: u32,
    pub last_regen: DateTime<Utc>,
}

impl EnergyMeter {
    pub fn full(config: &EnergyConfig, now: DateTime<Utc>) -> Self {
        Self {
            energy: config.max,
            last_regen: now,
        }
    }

    /// Applies one regeneration step per whole elapsed second, clamped at `max`.
    /// Returns the number of points gained.
    pub fn regenerate(&mut self, config: &EnergyConfig, now: DateTime<Utc>) -> u32 {
        let elapsed = now.signed_duration_since(self.last_regen).num_seconds();
        if elapsed <= 0 {
            return 0;
        }

        if self.energy >= config.max {
            self.energy = config.max;
            self.last_regen = now;
            return 0;
        }

        let gained = (elapsed as u64)
            .saturating_mul(config.per_second as u64)
            .min((config.max - self.energy) as u64) as u32;
        self.energy += gained;

        if self.energy >= config.max {
            self.last_regen = now;
        } else {
            // keep the fractional second for the next call
            self.last_regen += chrono::Duration::seconds(elapsed);
        }
        gained
    }

    pub fn tap(&mut self) -> ActionResult<u32> {
        if self.energy == 0 {
            return Err(ActionError::NoEnergy);
        }
        self.energy -= 1;
        Ok(self.energy)
    }

    pub fn percent(&self, config: &EnergyConfig) -> u32 {
        if config.max == 0 {
            return 0;
        }
        (u64::from(self.energy) * 100 / u64::from(config.max)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn tap_drains_one_point() {
        let config = EnergyConfig::default();
        let mut meter = EnergyMeter::full(&config, start());
        assert_eq!(meter.tap(), Ok(99));
        assert_eq!(meter.energy, 99);
    }

    #[test]
    fn tap_at_zero_is_rejected() {
        let mut meter = EnergyMeter { energy: 0, last_regen: start() };
        assert_eq!(meter.tap(), Err(ActionError::NoEnergy));
        assert_eq!(meter.energy, 0);
    }

    #[test]
    fn regenerates_one_per_second_up_to_max() {
        let config = EnergyConfig::default();
        let mut meter = EnergyMeter { energy: 90, last_regen: start() };

        assert_eq!(meter.regenerate(&config, start() + Duration::seconds(3)), 3);
        assert_eq!(meter.energy, 93);

        assert_eq!(meter.regenerate(&config, start() + Duration::hours(1)), 7);
        assert_eq!(meter.energy, 100);
    }

    #[test]
    fn partial_seconds_carry_over() {
        let config = EnergyConfig::default();
        let mut meter = EnergyMeter { energy: 10, last_regen: start() };

        meter.regenerate(&config, start() + Duration::milliseconds(1500));
        assert_eq!(meter.energy, 11);
        meter.regenerate(&config, start() + Duration::milliseconds(2000));
        assert_eq!(meter.energy, 12);
    }

    #[test]
    fn percent_of_a_large_meter() {
        let config = EnergyConfig { max: 4_000_000_000, ..EnergyConfig::default() };
        let meter = EnergyMeter { energy: 3_000_000_000, last_regen: start() };
        assert_eq!(meter.percent(&config), 75);
        assert_eq!(EnergyMeter::full(&config, start()).percent(&config), 100);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let config = EnergyConfig::default();
        let mut meter = EnergyMeter { energy: 5, last_regen: start() };
        assert_eq!(meter.regenerate(&config, start() - Duration::seconds(30)), 0);
        assert_eq!(meter.energy, 5);
    }
}
