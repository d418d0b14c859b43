use super::catalog::{distance_to, landmarks, Landmark, Vehicle, TRAVEL_TARGET, VEHICLES};
use super::travel::travel_time;
use super::units::DistanceScale;
use crate::format::{group_thousands, rule};
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

pub fn write_distances<W: Write>(out: &mut W, landmarks: &[Landmark]) -> io::Result<()> {
    writeln!(out, "\n📏 Distances from Earth:")?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;

    for landmark in landmarks {
        writeln!(out, "\n🪐 {}:", landmark.name)?;
        writeln!(out, "  Distance: {} km", group_thousands(landmark.distance_km, 0))?;
        writeln!(out, "  Distance: {}", DistanceScale::for_distance(landmark.distance_km))?;
    }
    Ok(())
}

/// One line per vehicle. A vehicle that cannot make the trip (non-positive
/// speed) is listed as unreachable instead of aborting the report.
pub fn write_travel_times<W: Write>(
    out: &mut W,
    target: &str,
    distance_km: f64,
    vehicles: &[Vehicle],
) -> io::Result<()> {
    writeln!(out, "\n🚀 Travel Times (at different speeds):")?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    writeln!(
        out,
        "\nTime to reach {} ({} km):",
        target,
        group_thousands(distance_km, 0)
    )?;

    for vehicle in vehicles {
        match travel_time(distance_km, vehicle.speed_kmh) {
            Ok(time) => writeln!(out, "  {}: {}", vehicle.name, time)?,
            Err(e) => {
                tracing::warn!(vehicle = vehicle.name, error = %e, "skipping travel time");
                writeln!(out, "  {}: unreachable ({})", vehicle.name, e)?
            }
        }
    }
    Ok(())
}

/// The full calculator report over the built-in tables.
pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    let landmarks = landmarks();

    writeln!(out, "🌌 Astronomical Distance Calculator")?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    write_distances(out, &landmarks)?;

    let distance_km = distance_to(TRAVEL_TARGET).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} missing from distance table", TRAVEL_TARGET),
        )
    })?;
    write_travel_times(out, TRAVEL_TARGET, distance_km, &VEHICLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn distance_entry_layout() {
        let moon = Landmark {
            name: "Moon",
            distance_km: 384_400.0,
        };
        let text = render(|out| write_distances(out, &[moon]));

        assert_eq!(
            text,
            format!(
                "\n📏 Distances from Earth:\n{}\n\n🪐 Moon:\n  Distance: 384,400 km\n  Distance: 0.003 AU\n",
                "-".repeat(40)
            )
        );
    }

    #[test]
    fn stalled_vehicle_is_unreachable() {
        let parked = Vehicle {
            name: "Parked",
            speed_kmh: 0.0,
        };
        let text = render(|out| write_travel_times(out, "Moon", 384_400.0, &[parked]));

        assert!(text.contains("\nTime to reach Moon (384,400 km):\n"));
        assert!(text.contains("  Parked: unreachable (Speed must be positive"));
    }

    #[test]
    fn report_travels_to_catalog_target() {
        let text = render(|out| write_report(out));
        let distance = distance_to(TRAVEL_TARGET).unwrap();

        assert!(text.contains(&format!(
            "\nTime to reach {} ({} km):\n",
            TRAVEL_TARGET,
            group_thousands(distance, 0)
        )));
        assert_eq!(text.matches("Time to reach").count(), 1);
    }
}
