//! Application-wide constants.
//!
//! Grouped by the subsystem that owns them. Anything a user can tune lives in
//! the configuration file; the defaults and bounds for those settings are here.

// # Solar model

/// Earth's axial tilt used by the sinusoidal declination approximation (degrees).
pub const AXIAL_TILT_DEGREES: f64 = 23.45;

/// Day of year (1-based) around the March equinox; the declination sine is zero here.
pub const EQUINOX_DAY_OFFSET: f64 = 81.0;

/// Days per year used by the simplified solar model.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Equation-of-time harmonic coefficients (minutes): 9.87·sin 2B − 7.53·cos B − 1.5·sin B.
pub const EOT_SIN_2B: f64 = 9.87;
pub const EOT_COS_B: f64 = 7.53;
pub const EOT_SIN_B: f64 = 1.5;

/// Degrees of longitude the sun crosses per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Angular radius of the night cap (degrees). Zero solar elevation on a sphere.
pub const NIGHT_RADIUS_DEGREES: f64 = 90.0;

// # Night region polygon

pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 128;
pub const MINIMUM_CIRCLE_SEGMENTS: u32 = 64;
pub const MAXIMUM_CIRCLE_SEGMENTS: u32 = 4096;

// # ASCII map

pub const DEFAULT_MAP_WIDTH: u32 = 72;
pub const DEFAULT_MAP_HEIGHT: u32 = 24;
pub const MINIMUM_MAP_WIDTH: u32 = 20;
pub const MAXIMUM_MAP_WIDTH: u32 = 400;
pub const MINIMUM_MAP_HEIGHT: u32 = 10;
pub const MAXIMUM_MAP_HEIGHT: u32 = 200;

// # Local-hour heuristics

/// Daylight window for card iconography: `[start, end)` local hours.
pub const DAYLIGHT_START_HOUR: u32 = 6;
pub const DAYLIGHT_END_HOUR: u32 = 18;

/// Business hours: `[start, end)`.
pub const BUSINESS_START_HOUR: u32 = 9;
pub const BUSINESS_END_HOUR: u32 = 17;

/// Extended hours either side of business hours.
pub const EXTENDED_MORNING_START_HOUR: u32 = 7;
pub const EXTENDED_EVENING_END_HOUR: u32 = 20;

/// Hours in a planner day.
pub const PLANNER_COLUMNS: usize = 24;

// # Time travel

/// The shift control spans twelve hours either way in quarter-hour steps.
pub const MAXIMUM_SHIFT_MINUTES: i64 = 720;
pub const SHIFT_STEP_MINUTES: i64 = 15;

// # Defaults

pub const DEFAULT_USE_24_HOUR: bool = true;
pub const DEFAULT_SHOW_SECONDS: bool = true;
pub const FALLBACK_TIMEZONE: &str = "UTC";

// # Configuration

pub const CONFIG_DIR_NAME: &str = "offset";
pub const CONFIG_FILE_NAME: &str = "offset.toml";

// # Exit code

pub const EXIT_FAILURE: i32 = 1;
