use super::units::light_years_to_km;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub name: &'static str,
    pub distance_km: f64, // from Earth
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub name: &'static str,
    pub speed_kmh: f64,
}

pub const TRAVEL_TARGET: &str = "Mars (closest)";

/// Distances from Earth, in report order.
pub fn landmarks() -> [Landmark; 7] {
    [
        Landmark { name: "Moon", distance_km: 384_400.0 },
        Landmark { name: "Sun", distance_km: 149_597_870.7 }, // 1 AU
        Landmark { name: "Mars (closest)", distance_km: 54.6e6 },
        Landmark { name: "Mars (farthest)", distance_km: 401e6 },
        Landmark { name: "Jupiter", distance_km: 628.7e6 },
        Landmark { name: "Proxima Centauri", distance_km: light_years_to_km(4.24) },
        Landmark { name: "Andromeda Galaxy", distance_km: light_years_to_km(2.537e6) },
    ]
}

/// Reference speeds, slowest first.
pub const VEHICLES: [Vehicle; 6] = [
    Vehicle { name: "Walking", speed_kmh: 5.0 },
    Vehicle { name: "Car", speed_kmh: 100.0 },
    Vehicle { name: "Commercial Aircraft", speed_kmh: 900.0 },
    Vehicle { name: "Space Shuttle", speed_kmh: 28_000.0 },
    Vehicle { name: "Parker Solar Probe", speed_kmh: 200_000.0 }, // fastest human-made object
    Vehicle { name: "Light", speed_kmh: 1.08e9 },
];

pub fn distance_to(name: &str) -> Option<f64> {
    landmarks()
        .iter()
        .find(|landmark| landmark.name == name)
        .map(|landmark| landmark.distance_km)
}
