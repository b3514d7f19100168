//! Survey input types

use serde::{Deserialize, Deserializer, Serialize};

/// One station of a directional survey.
///
/// A trajectory is an ordered slice of these in drilling order. Nothing
/// downstream sorts by measured depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    /// Measured depth along the wellbore
    pub md: f64,
    /// True vertical depth
    pub tvd: f64,
    /// Inclination from vertical (degrees, 0-180)
    pub inc: f64,
    /// Azimuth clockwise from north (degrees, 0-360)
    pub azi: f64,
    /// Northing from the wellhead; absent or null reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub north: f64,
    /// Easting from the wellhead; absent or null reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub east: f64,
}

impl SurveyPoint {
    /// Station with no horizontal offset.
    pub const fn new(md: f64, tvd: f64, inc: f64, azi: f64) -> Self {
        Self {
            md,
            tvd,
            inc,
            azi,
            north: 0.0,
            east: 0.0,
        }
    }

    #[must_use]
    pub const fn with_offsets(mut self, north: f64, east: f64) -> Self {
        self.north = north;
        self.east = east;
        self
    }

    /// Horizontal distance from the wellhead.
    pub fn horizontal_offset(&self) -> f64 {
        self.north.hypot(self.east)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

// ============================================================================
// Unit System
// ============================================================================

/// Length unit family the survey was recorded in.
///
/// The analysis itself is unit-agnostic; this only labels results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Field,
}

impl UnitSystem {
    /// Length unit abbreviation
    pub const fn length_unit(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Field => "ft",
        }
    }

    /// Label for dogleg severity values (degrees per 100 length units)
    pub const fn dls_unit(self) -> &'static str {
        match self {
            Self::Metric => "deg/100m",
            Self::Field => "deg/100ft",
        }
    }
}

// ============================================================================
// Well Trajectory
// ============================================================================

/// A named trajectory as exchanged with the web frontend.
///
/// Only `points` is required. A bare JSON array of points is also accepted
/// wherever a trajectory is expected and becomes an unnamed metric trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellTrajectory {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub points: Vec<SurveyPoint>,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl WellTrajectory {
    /// Unnamed trajectory in the default unit system.
    pub fn from_points(points: Vec<SurveyPoint>) -> Self {
        Self {
            id: None,
            name: None,
            points,
            unit_system: UnitSystem::default(),
        }
    }
}
