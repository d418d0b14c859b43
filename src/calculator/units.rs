use crate::constants::{AU_SCALE_LIMIT_KM, KM_PER_AU, KM_PER_LIGHT_YEAR};
use crate::format::group_thousands;
use std::fmt;

pub fn light_years_to_km(light_years: f64) -> f64 {
    light_years * KM_PER_LIGHT_YEAR
}

pub fn km_to_light_years(km: f64) -> f64 {
    km / KM_PER_LIGHT_YEAR
}

pub fn au_to_km(au: f64) -> f64 {
    au * KM_PER_AU
}

pub fn km_to_au(km: f64) -> f64 {
    km / KM_PER_AU
}

/// The secondary unit a distance is reported in, next to kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceScale {
    AstronomicalUnits(f64),
    LightYears(f64),
}

impl DistanceScale {
    /// AU below one billion km, light years from there on.
    pub fn for_distance(km: f64) -> Self {
        if km < AU_SCALE_LIMIT_KM {
            DistanceScale::AstronomicalUnits(km_to_au(km))
        } else {
            DistanceScale::LightYears(km_to_light_years(km))
        }
    }
}

impl fmt::Display for DistanceScale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DistanceScale::AstronomicalUnits(au) => write!(f, "{:.3} AU", au),
            DistanceScale::LightYears(ly) if ly < 1.0 => write!(f, "{:.6} light years", ly),
            DistanceScale::LightYears(ly) => write!(f, "{} light years", group_thousands(ly, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(1e-6; "tiny")]
    #[test_case(1.0; "one")]
    #[test_case(4.24; "proxima")]
    #[test_case(2.537e6; "andromeda")]
    #[test_case(1e12; "huge")]
    fn conversions_invert(x: f64) {
        assert_relative_eq!(km_to_au(au_to_km(x)), x, max_relative = 1e-12);
        assert_relative_eq!(km_to_light_years(light_years_to_km(x)), x, max_relative = 1e-12);
    }

    #[test]
    fn one_au_is_the_sun() {
        assert_relative_eq!(au_to_km(1.0), 149_597_870.7);
        assert_relative_eq!(light_years_to_km(1.0), 9.461e12);
    }

    #[test]
    fn moon_uses_astronomical_units() {
        let scale = DistanceScale::for_distance(384_400.0);
        match scale {
            DistanceScale::AstronomicalUnits(au) => assert_relative_eq!(au, 0.00257, epsilon = 1e-5),
            other => panic!("expected AU, got {:?}", other),
        }
        assert_eq!(scale.to_string(), "0.003 AU");
    }

    #[test]
    fn andromeda_uses_grouped_light_years() {
        let scale = DistanceScale::for_distance(2.537e6 * 9.461e12);
        match scale {
            DistanceScale::LightYears(ly) => assert_relative_eq!(ly, 2.537e6, max_relative = 1e-12),
            other => panic!("expected light years, got {:?}", other),
        }
        assert_eq!(scale.to_string(), "2,537,000.00 light years");
    }

    #[test]
    fn sub_light_year_distances_keep_six_decimals() {
        let scale = DistanceScale::for_distance(2e9);
        assert_eq!(scale.to_string(), "0.000211 light years");
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(matches!(
            DistanceScale::for_distance(AU_SCALE_LIMIT_KM - 1.0),
            DistanceScale::AstronomicalUnits(_)
        ));
        assert!(matches!(
            DistanceScale::for_distance(AU_SCALE_LIMIT_KM),
            DistanceScale::LightYears(_)
        ));
    }
}
