// Distance units
pub const KM_PER_LIGHT_YEAR: f64 = 9.461e12; // Light year approximation used throughout (km)
pub const KM_PER_AU: f64 = 149_597_870.7; // Astronomical Unit (km)

// Time
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.25; // Julian year

// Distances below this are reported in AU, everything else in light years (km)
pub const AU_SCALE_LIMIT_KM: f64 = 1e9;

// Open Notify API
pub const OPEN_NOTIFY_URL: &str = "http://api.open-notify.org";
pub const ISS_NOW_PATH: &str = "/iss-now.json";
pub const ASTROS_PATH: &str = "/astros.json";
pub const SUCCESS_MESSAGE: &str = "success";
