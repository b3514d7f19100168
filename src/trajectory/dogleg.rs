//! Dogleg geometry between adjacent survey stations
//!
//! - Azimuth delta wrapping (shortest turn)
//! - Dogleg angle from inclination / azimuth pairs
//! - Normalization to degrees per 100 units of MD
//! - Closure direction of a north/east offset

/// Course length that dogleg severity is normalized to.
pub const DLS_COURSE_LENGTH: f64 = 100.0;

/// Wrap an azimuth difference onto the shortest turn.
///
/// Inputs are differences of two azimuths in [0, 360), so a single
/// correction is enough: `350 -> 10` is a turn of +20, not -340.
pub fn wrap_azimuth_delta(delta_azi: f64) -> f64 {
    let mut delta = delta_azi;
    if delta > 180.0 {
        delta -= 360.0;
    }
    if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Calculate the dogleg angle between two stations (degrees)
///
/// Formula: DL = acos( cos(ΔI) + sin(I1) × sin(I2) × (1 − cos(ΔA)) )
///
/// Where:
/// - I1, I2 = inclination at the upper and lower station
/// - ΔI = I2 − I1
/// - ΔA = wrapped azimuth change
///
/// The acos argument is clamped to [-1, 1] so rounding can never produce NaN;
/// identical stations give exactly 0.
pub fn dogleg_angle(prev_inc: f64, prev_azi: f64, inc: f64, azi: f64) -> f64 {
    let delta_inc = (inc - prev_inc).to_radians();
    let delta_azi = wrap_azimuth_delta(azi - prev_azi).to_radians();

    let cos_dogleg = delta_inc.cos()
        + prev_inc.to_radians().sin() * inc.to_radians().sin() * (1.0 - delta_azi.cos());

    cos_dogleg.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Dogleg severity in degrees per [`DLS_COURSE_LENGTH`] units of MD.
///
/// Returns `None` when the MD step is zero or negative, or so small that the
/// normalized value overflows; such intervals carry no usable curvature.
pub fn dogleg_severity(dogleg_deg: f64, delta_md: f64) -> Option<f64> {
    if delta_md <= 0.0 {
        return None;
    }
    let dls = dogleg_deg / delta_md * DLS_COURSE_LENGTH;
    dls.is_finite().then_some(dls)
}

/// Direction of a north/east offset, clockwise from north, in [0, 360).
pub fn closure_azimuth(north: f64, east: f64) -> f64 {
    let wrapped = east.atan2(north).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        // atan2 of a signed zero yields -0.0
        wrapped.abs()
    }
}
