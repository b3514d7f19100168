//! Survey input parsing and validation.
//!
//! Incoming JSON is either a bare array of stations or a trajectory object
//! with a `points` array. Stations are decoded one at a time so errors can
//! name the offending index. A survey that fails here is never analyzed.

use serde_json::Value;
use thiserror::Error;

use crate::types::{SurveyPoint, WellTrajectory};

/// Rejected survey input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not a point array or a trajectory object.
    #[error("malformed trajectory: {0}")]
    Malformed(String),

    /// A station is missing a required field or has a non-numeric value.
    #[error("survey point {index}: {reason}")]
    InvalidPoint { index: usize, reason: String },

    /// A station value is NaN or infinite.
    #[error("survey point {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },
}

/// Parse a trajectory from raw JSON text.
pub fn parse_trajectory_json(text: &str) -> Result<WellTrajectory, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    parse_trajectory(value)
}

/// Decode a trajectory from a JSON value and validate every station.
pub fn parse_trajectory(value: Value) -> Result<WellTrajectory, ValidationError> {
    let trajectory = match value {
        Value::Array(items) => WellTrajectory::from_points(parse_points(items)?),
        Value::Object(mut map) => {
            let points = match map.remove("points") {
                Some(Value::Array(items)) => parse_points(items)?,
                Some(other) => {
                    return Err(ValidationError::Malformed(format!(
                        "`points` must be an array, got {}",
                        json_kind(&other)
                    )))
                }
                None => {
                    return Err(ValidationError::Malformed(
                        "missing field `points`".to_string(),
                    ))
                }
            };
            // Stations are already decoded; only the header is checked here.
            map.insert("points".to_string(), Value::Array(Vec::new()));
            let mut trajectory: WellTrajectory = serde_json::from_value(Value::Object(map))
                .map_err(|e| {
                    ValidationError::Malformed(format!("invalid trajectory header: {e}"))
                })?;
            trajectory.points = points;
            trajectory
        }
        other => {
            return Err(ValidationError::Malformed(format!(
                "expected an array of survey points or a trajectory object, got {}",
                json_kind(&other)
            )))
        }
    };

    validate_points(&trajectory.points)?;
    Ok(trajectory)
}

fn parse_points(items: Vec<Value>) -> Result<Vec<SurveyPoint>, ValidationError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<SurveyPoint>(item).map_err(|e| {
                ValidationError::InvalidPoint {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Reject stations carrying NaN or infinite values.
///
/// JSON cannot encode these, but library callers can construct them directly.
pub fn validate_points(points: &[SurveyPoint]) -> Result<(), ValidationError> {
    for (index, p) in points.iter().enumerate() {
        let fields = [
            ("md", p.md),
            ("tvd", p.tvd),
            ("inc", p.inc),
            ("azi", p.azi),
            ("north", p.north),
            ("east", p.east),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NonFinite { index, field });
        }
    }
    Ok(())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
