use super::calculator_errors::CalculatorErrors;
use crate::constants::{DAYS_PER_YEAR, HOURS_PER_DAY};
use crate::format::group_thousands;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    Hours,
    Days,
    Years,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeUnit::Hours => write!(f, "hours"),
            TimeUnit::Days => write!(f, "days"),
            TimeUnit::Years => write!(f, "years"),
        }
    }
}

/// The same duration expressed in hours, days and Julian years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTime {
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

impl TravelTime {
    /// Largest unit whose value exceeds one, falling back to hours.
    pub fn dominant(&self) -> (f64, TimeUnit) {
        if self.years > 1.0 {
            (self.years, TimeUnit::Years)
        } else if self.days > 1.0 {
            (self.days, TimeUnit::Days)
        } else {
            (self.hours, TimeUnit::Hours)
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (value, unit) = self.dominant();
        write!(f, "{} {}", group_thousands(value, 1), unit)
    }
}

/// Time needed to cover `distance_km` at a constant `speed_kmh`.
///
/// A zero, negative or non-finite speed is rejected rather than producing an
/// infinite or negative duration; so is a negative or non-finite distance.
pub fn travel_time(distance_km: f64, speed_kmh: f64) -> Result<TravelTime, CalculatorErrors> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(CalculatorErrors::InvalidSpeed(speed_kmh));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(CalculatorErrors::InvalidDistance(distance_km));
    }

    let hours = distance_km / speed_kmh;
    let days = hours / HOURS_PER_DAY;
    let years = days / DAYS_PER_YEAR;

    Ok(TravelTime { hours, days, years })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(54.6e6, 5.0; "walking to mars")]
    #[test_case(384_400.0, 28_000.0; "shuttle to the moon")]
    #[test_case(1.0, 1.08e9; "light across a kilometre")]
    fn components_are_exact(distance: f64, speed: f64) {
        let t = travel_time(distance, speed).unwrap();
        assert_eq!(t.hours, distance / speed);
        assert_eq!(t.days, t.hours / 24.0);
        assert_eq!(t.years, t.days / 365.25);
    }

    #[test_case(54.6e6, 5.0 => TimeUnit::Years; "walking is years")]
    #[test_case(54.6e6, 200_000.0 => TimeUnit::Days; "parker probe is days")]
    #[test_case(54.6e6, 1.08e9 => TimeUnit::Hours; "light is hours")]
    #[test_case(0.0, 5.0 => TimeUnit::Hours; "already there")]
    fn test_dominant_unit(distance: f64, speed: f64) -> TimeUnit {
        travel_time(distance, speed).unwrap().dominant().1
    }

    #[test]
    fn exactly_one_year_reports_days() {
        let t = travel_time(365.25 * 24.0, 1.0).unwrap();
        assert_eq!(t.dominant(), (365.25, TimeUnit::Days));
    }

    #[test_case(0.0; "zero")]
    #[test_case(-5.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn rejects_bad_speed(speed: f64) {
        assert!(matches!(
            travel_time(100.0, speed),
            Err(CalculatorErrors::InvalidSpeed(_))
        ));
    }

    #[test]
    fn rejects_negative_distance() {
        assert_eq!(
            travel_time(-1.0, 5.0),
            Err(CalculatorErrors::InvalidDistance(-1.0))
        );
    }

    #[test]
    fn display_uses_dominant_unit() {
        let t = travel_time(54.6e6, 5.0).unwrap();
        assert_eq!(t.to_string(), "1,245.7 years");
    }
}
