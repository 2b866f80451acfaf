//! Angle helpers for yaw smoothing.
//!
//! All yaw values in the controller live in (-π, π]. Anything that compares
//! or interpolates angles goes through [`normalize_angle`] first.

use std::f32::consts::{PI, TAU};

/// Wrap an angle into (-π, π].
///
/// In-range values come back unchanged. Non-finite input yields NaN.
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }

    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Interpolate between two angles along the shortest arc.
///
/// When the endpoints are more than π apart the smaller one is shifted by a
/// full turn, so the result never travels across the long way round.
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    let mut start = normalize_angle(start);
    let mut end = normalize_angle(end);

    if (end - start).abs() > PI {
        if end > start {
            start += TAU;
        } else {
            end += TAU;
        }
    }

    normalize_angle(start + (end - start) * t)
}

/// Plain linear interpolation, no wrapping.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
