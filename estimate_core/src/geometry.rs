//! # Geometry Resolver
//!
//! Turns spacing-pattern strings and eave/slope inputs into the resolved
//! dimensions every generator works from: span lists, building length and
//! width, rafter length, and wall/roof/endwall surface areas.
//!
//! ## Spacing patterns
//!
//! Bay and span layouts are written as `"count@distance"` segments joined
//! with `+`, e.g. `"2@9+1@6"` means two 9 m bays followed by one 6 m bay.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::geometry::{resolve_spacing, total_length};
//!
//! let spans = resolve_spacing("2@9+1@6").unwrap();
//! assert_eq!(spans, vec![9.0, 9.0, 6.0]);
//! assert_eq!(total_length(&spans), 24.0);
//! ```
//!
//! All functions here are pure: same input, bit-identical output.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Parse a spacing pattern (`N@D[+N@D]*`) into an ordered span list.
///
/// `N` must be a positive integer, `D` a positive number. Fails with
/// [`EstimateError::SpacingParse`] on anything else; the error reason
/// names the offending segment.
pub fn resolve_spacing(pattern: &str) -> EstimateResult<Vec<f64>> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::spacing_parse(pattern, "pattern is empty"));
    }

    let mut spans = Vec::new();
    for segment in trimmed.split('+') {
        let segment = segment.trim();
        let mut parts = segment.splitn(2, '@');
        let count_str = parts.next().unwrap_or("");
        let dist_str = parts.next().ok_or_else(|| {
            EstimateError::spacing_parse(pattern, format!("segment '{}' has no '@'", segment))
        })?;

        let count: u32 = count_str.trim().parse().map_err(|_| {
            EstimateError::spacing_parse(
                pattern,
                format!("'{}' is not a positive integer count", count_str.trim()),
            )
        })?;
        if count == 0 {
            return Err(EstimateError::spacing_parse(pattern, "count must be >= 1"));
        }

        let distance: f64 = dist_str.trim().parse().map_err(|_| {
            EstimateError::spacing_parse(
                pattern,
                format!("'{}' is not a number", dist_str.trim()),
            )
        })?;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(EstimateError::spacing_parse(
                pattern,
                "distance must be a positive number",
            ));
        }

        for _ in 0..count {
            spans.push(distance);
        }
    }

    Ok(spans)
}

/// Sum of a resolved span list.
pub fn total_length(spans: &[f64]) -> f64 {
    spans.iter().sum()
}

/// Sloped rafter length across one frame, by right-triangle geometry on
/// half-spans.
///
/// Slopes are rise/run ratios (0.1 = 1:10). When the two eaves differ, the
/// height difference is carried by the rising side, so a mono-slope frame
/// (`slope_right = 0`, unequal eaves) still resolves correctly.
pub fn rafter_length(
    span: f64,
    slope_left: f64,
    slope_right: f64,
    eave_front: f64,
    eave_back: f64,
) -> f64 {
    let half = span / 2.0;
    let delta = eave_back - eave_front;
    let rise_left = half * slope_left + delta.max(0.0);
    let rise_right = half * slope_right + (-delta).max(0.0);
    (half * half + rise_left * rise_left).sqrt() + (half * half + rise_right * rise_right).sqrt()
}

/// Combined area of both side walls (front and back eave walls).
pub fn wall_area(length: f64, eave_front: f64, eave_back: f64) -> f64 {
    length * (eave_front + eave_back)
}

/// Roof surface area over the full building length.
pub fn roof_area(length: f64, rafter: f64) -> f64 {
    length * rafter
}

/// Area of one endwall: eave-height trapezoid plus the gable triangles.
pub fn endwall_area(
    width: f64,
    eave_front: f64,
    eave_back: f64,
    slope_left: f64,
    slope_right: f64,
) -> f64 {
    let half = width / 2.0;
    let trapezoid = width * (eave_front + eave_back) / 2.0;
    let gable = 0.5 * half * (half * slope_left) + 0.5 * half * (half * slope_right);
    trapezoid + gable
}

/// Fully resolved building geometry, derived once per calculation and
/// shared by every component generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingGeometry {
    /// Bay lengths along the building (from the bay spacing pattern)
    pub bays: Vec<f64>,
    /// Frame span widths across the building (from the span pattern)
    pub spans: Vec<f64>,
    /// Building length = sum of bays (m)
    pub length: f64,
    /// Building width = sum of spans (m)
    pub width: f64,
    /// Sloped rafter length across one frame (m)
    pub rafter: f64,
    /// Combined side wall area, both eave walls (m²)
    pub side_wall_area: f64,
    /// Roof surface area (m²)
    pub roof_area: f64,
    /// Area of one endwall (m²)
    pub endwall_area: f64,
}

impl BuildingGeometry {
    /// Resolve both spacing patterns and derive all dependent dimensions.
    pub fn resolve(
        bay_pattern: &str,
        span_pattern: &str,
        eave_front: f64,
        eave_back: f64,
        slope_left: f64,
        slope_right: f64,
    ) -> EstimateResult<Self> {
        let bays = resolve_spacing(bay_pattern)?;
        let spans = resolve_spacing(span_pattern)?;
        let length = total_length(&bays);
        let width = total_length(&spans);
        let rafter = rafter_length(width, slope_left, slope_right, eave_front, eave_back);

        Ok(BuildingGeometry {
            length,
            width,
            rafter,
            side_wall_area: wall_area(length, eave_front, eave_back),
            roof_area: roof_area(length, rafter),
            endwall_area: endwall_area(width, eave_front, eave_back, slope_left, slope_right),
            bays,
            spans,
        })
    }
}
