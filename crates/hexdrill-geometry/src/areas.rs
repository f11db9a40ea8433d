//! Area accounting for drilled hex patterns.
//!
//! Classifies material as over-drilled (removed by primary holes outside
//! the hexagon boundary), under-drilled (corner material left in place),
//! or removed by relief holes. All segment formulas work in radians on the
//! circle inscribed at the flats ("flat circle").

use std::f64::consts::PI;

use crate::pattern::HexPattern;

impl HexPattern {
    /// Length of one hexagon flat.
    ///
    /// Numerically equal to [`center_to_corner`](Self::center_to_corner)
    /// for a regular hexagon.
    pub fn flat_length(&self) -> f64 {
        self.flat_length
    }

    /// Length of flat not consumed by the chords of the two primary holes
    /// adjacent to it. Negative when those holes overlap along the flat.
    pub fn flat_available(&self) -> f64 {
        let half_angle = (Self::SIDE_ANGLE_DEG / 2.0).to_radians();
        self.flat_length - 2.0 * self.drill_diameter * half_angle.sin()
    }

    /// Total area removed by the primary holes outside the hexagon
    /// boundary.
    ///
    /// Each hole's excess is a circular segment cut off by an adjacent
    /// flat, one per adjacent edge, summed over all six holes.
    pub fn overdrill_area(&self) -> f64 {
        let side_angle = Self::SIDE_ANGLE_DEG.to_radians();
        let segment =
            (self.drill_radius * self.drill_radius / 2.0) * (side_angle - side_angle.sin()) * 2.0;
        segment * Self::CORNERS as f64
    }

    /// Total hexagon corner area left un-removed after primary and relief
    /// drilling.
    ///
    /// Derived per corner by subtracting the flat-circle sector and the
    /// segment residual between the flat circle and the drill circle from
    /// the corner triangle. Known-approximate: the residual treats the two
    /// segments as spanning the same chord.
    pub fn underdrill_area(&self) -> f64 {
        let corner_residual = self.segment_difference(self.center_to_drill, self.drill_radius)
            - self.overdrill_area() / Self::CORNERS as f64;

        let triangle = (self.flat_length / 2.0) * self.center_to_flat;
        let sector = self.center_to_flat * self.center_to_flat * PI / Self::CORNERS as f64;

        (triangle - sector - corner_residual - self.relief_area()) * Self::CORNERS as f64
    }

    /// Area removed by one corner's relief hole pair.
    ///
    /// Zero when relief holes are disabled. When a relief hole's footprint
    /// lies entirely outside the flat circle the full circular area counts;
    /// otherwise only the lens between the relief circle and the flat
    /// circle does.
    pub fn relief_area(&self) -> f64 {
        let Some(placement) = self.relief else {
            return 0.0;
        };
        if placement.distance - self.relief_radius > self.center_to_flat {
            PI * self.relief_radius * self.relief_radius * 2.0
        } else {
            self.segment_difference(placement.distance, self.relief_radius) * 2.0
        }
    }

    /// Segment-subtraction identity shared by the under-drill and relief
    /// metrics: the lens between the flat circle and a hole circle of
    /// `radius` centered `distance` from the hexagon center, expressed as
    /// hole-circle segment minus flat-circle segment.
    fn segment_difference(&self, distance: f64, radius: f64) -> f64 {
        let flat_radius = self.center_to_flat;

        // Law of cosines for the angle at the hexagon center, then the
        // common chord and the two circular segments it subtends.
        let angle_large = ((flat_radius * flat_radius + distance * distance - radius * radius)
            / (2.0 * flat_radius * distance))
            .acos();
        let chord = 2.0 * flat_radius * angle_large.sin();
        let large_segment = ((2.0 * angle_large - (2.0 * angle_large).sin())
            * (flat_radius * flat_radius))
            / 2.0;

        let angle_small = ((chord / 2.0) / radius).asin();
        let small_segment =
            ((2.0 * angle_small - (2.0 * angle_small).sin()) * (radius * radius)) / 2.0;

        small_segment - large_segment
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::{HexPattern, HexPatternParams};

    fn pattern(hex_size: f64, drill: f64) -> HexPattern {
        HexPattern::new(HexPatternParams::new(hex_size, drill))
    }

    #[test]
    fn test_reference_areas() {
        // hex 1.0, drill 1/4: oracle values computed from the segment
        // formulas independently of this implementation.
        let p = pattern(1.0, 0.25);
        assert!((p.overdrill_area() - 0.016984889).abs() < 1e-6);
        assert!((p.underdrill_area() - 0.013391196).abs() < 1e-6);
        let ratio = p.overdrill_area() / p.underdrill_area();
        assert!((ratio - 1.268362).abs() < 1e-5);
    }

    #[test]
    fn test_flat_lengths() {
        let p = pattern(1.0, 0.25);
        assert!((p.flat_length() - 0.577350).abs() < 1e-6);
        assert!((p.flat_available() - 0.327350).abs() < 1e-6);
        // The two primary holes consume one chord each.
        assert!(p.flat_available() < p.flat_length());
    }

    #[test]
    fn test_areas_non_negative_across_feasible_range() {
        let p0 = pattern(1.0, 0.0);
        let min = p0.drill_diameter();
        let max = p0.center_to_corner();
        let mut drill = min;
        while drill < max {
            let p = pattern(1.0, drill);
            assert!(p.overdrill_area() >= 0.0, "drill {drill}");
            assert!(p.underdrill_area() >= 0.0, "drill {drill}");
            drill += 0.01;
        }
    }

    #[test]
    fn test_monotonicity_in_drill_size() {
        // Larger primary drills remove strictly more outside material and
        // leave strictly less corner material.
        let mut previous: Option<(f64, f64)> = None;
        let mut drill = 0.08;
        while drill < 0.577 {
            let p = pattern(1.0, drill);
            if p.status().is_none() {
                let current = (p.overdrill_area(), p.underdrill_area());
                if let Some((over, under)) = previous {
                    assert!(current.0 > over, "overdrill not increasing at {drill}");
                    assert!(current.1 < under, "underdrill not decreasing at {drill}");
                }
                previous = Some(current);
            }
            drill += 0.002;
        }
    }

    #[test]
    fn test_relief_area_zero_without_relief() {
        assert_eq!(pattern(1.0, 0.25).relief_area(), 0.0);
        assert_eq!(pattern(0.5, 0.125).relief_area(), 0.0);
    }

    #[test]
    fn test_relief_area_lens_case() {
        let p = HexPattern::new(HexPatternParams::new(1.0, 0.25).with_relief(1.0 / 16.0));
        assert!((p.relief_area() - 0.000523193).abs() < 1e-8);
        // Relief drilling reduces the under-drill residual.
        let without = pattern(1.0, 0.25);
        assert!(p.underdrill_area() < without.underdrill_area());
        assert!((without.underdrill_area() - p.underdrill_area()
            - p.relief_area() * HexPattern::CORNERS as f64)
            .abs()
            < 1e-9);
    }

    #[test]
    fn test_relief_area_detached_footprint() {
        // A large wall pushes the relief pair past the flat circle, so the
        // full circular area counts.
        let p = HexPattern::new(
            HexPatternParams::new(1.0, 0.5)
                .with_relief(0.01)
                .with_min_wall(0.3),
        );
        let distance = p.relief_distance().unwrap();
        assert!(distance - p.relief_radius() > p.center_to_flat());
        let full = std::f64::consts::PI * p.relief_radius() * p.relief_radius() * 2.0;
        assert!((p.relief_area() - full).abs() < 1e-12);
    }

    #[test]
    fn test_overdrill_scales_with_square_of_size() {
        // Doubling every linear dimension quadruples areas.
        let small = pattern(1.0, 0.25);
        let large = pattern(2.0, 0.5);
        assert!((large.overdrill_area() - 4.0 * small.overdrill_area()).abs() < 1e-9);
        assert!((large.underdrill_area() - 4.0 * small.underdrill_area()).abs() < 1e-9);
    }
}
