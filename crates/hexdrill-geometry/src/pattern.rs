//! Hexagonal hole pattern model.
//!
//! A [`HexPattern`] is built once from a [`HexPatternParams`] and is
//! immutable afterwards: any parameter change constructs a brand-new value
//! through the same validation path, so clamping and status reporting behave
//! identically at startup and on live edits.

use hexdrill_core::Point;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Input parameters for a hex hole pattern.
///
/// All values are in the same linear unit (conventionally inches). The
/// requested drill diameter is clamped to the feasible range on
/// construction; the relief diameter is only floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexPatternParams {
    /// Flat-to-flat width of the hexagon.
    pub hex_size: f64,
    /// Requested diameter of the primary corner holes.
    pub drill_diameter: f64,
    /// Diameter of the relief hole pairs; 0 disables relief holes.
    #[serde(default)]
    pub relief_diameter: f64,
    /// Minimum material separation between adjacent drilled features.
    #[serde(default)]
    pub min_wall: f64,
}

impl HexPatternParams {
    /// Creates parameters with no relief holes and zero minimum wall.
    pub fn new(hex_size: f64, drill_diameter: f64) -> Self {
        Self {
            hex_size,
            drill_diameter,
            relief_diameter: 0.0,
            min_wall: 0.0,
        }
    }

    /// Sets the relief hole diameter.
    pub fn with_relief(mut self, relief_diameter: f64) -> Self {
        self.relief_diameter = relief_diameter;
        self
    }

    /// Sets the minimum wall thickness.
    pub fn with_min_wall(mut self, min_wall: f64) -> Self {
        self.min_wall = min_wall;
        self
    }
}

/// Placement of the relief hole pair relative to a corner's radial line,
/// solved once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ReliefPlacement {
    /// Angular offset from the corner's radial line, degrees.
    pub(crate) angle_deg: f64,
    /// Distance of each relief hole center from the hexagon center.
    pub(crate) distance: f64,
}

/// A validated, immutable hexagonal hole pattern.
///
/// Owns the hexagon and drill parameters, the clamped drill size, and all
/// derived linear dimensions. Hole coordinates and area metrics are pure
/// functions of this state.
#[derive(Debug, Clone, PartialEq)]
pub struct HexPattern {
    pub(crate) hex_size: f64,
    pub(crate) drill_diameter: f64,
    pub(crate) relief_diameter: f64,
    pub(crate) min_wall: f64,
    pub(crate) center_to_flat: f64,
    pub(crate) center_to_corner: f64,
    pub(crate) corner_to_corner: f64,
    pub(crate) flat_length: f64,
    pub(crate) drill_radius: f64,
    pub(crate) relief_radius: f64,
    pub(crate) center_to_drill: f64,
    pub(crate) relief: Option<ReliefPlacement>,
    pub(crate) status: Option<String>,
}

impl HexPattern {
    /// Number of hexagon corners (and primary holes).
    pub const CORNERS: usize = 6;
    /// Angular step between adjacent corners, degrees.
    pub const SIDE_ANGLE_DEG: f64 = 60.0;
    /// Standard drill size increment (1/64").
    pub const DRILL_INCREMENT: f64 = 1.0 / 64.0;
    /// Offset applied when clamping an infeasible drill size.
    pub const CLAMP_EPSILON: f64 = 0.0001;

    /// Builds a pattern, clamping the drill diameter to its feasible range.
    ///
    /// The feasible range is `(center_to_corner - center_to_flat,
    /// center_to_corner)`: a smaller hole never reaches the flats, a larger
    /// one swallows the hexagon center. Requests outside it are clamped by
    /// [`Self::CLAMP_EPSILON`] inside the bound and reported through
    /// [`status`](Self::status), except that a requested diameter of exactly
    /// zero clamps silently (it is the conventional starting point for the
    /// best-fit sweep).
    pub fn new(params: HexPatternParams) -> Self {
        debug_assert!(
            params.hex_size.is_finite() && params.hex_size > 0.0,
            "hex_size must be positive and finite, got {}",
            params.hex_size
        );

        let half_angle = (Self::SIDE_ANGLE_DEG / 2.0).to_radians();
        let center_to_flat = params.hex_size / 2.0;
        let center_to_corner = center_to_flat / half_angle.cos();
        let corner_to_corner = 2.0 * center_to_corner;
        let flat_length = 2.0 * center_to_flat * half_angle.tan();

        let min_feasible = center_to_corner - center_to_flat;
        let max_feasible = center_to_corner;

        let mut drill_diameter = params.drill_diameter;
        let mut status = None;
        if drill_diameter <= min_feasible {
            let clamped = min_feasible + Self::CLAMP_EPSILON;
            if drill_diameter > 0.0 {
                let message = format!(
                    "Drill size {:.4} is too small and will be set to the minimum allowed: {:.4}",
                    drill_diameter, clamped
                );
                warn!("{message}");
                status = Some(message);
            }
            drill_diameter = clamped;
        } else if drill_diameter >= max_feasible {
            let clamped = max_feasible - Self::CLAMP_EPSILON;
            let message = format!(
                "Drill size {:.4} is too large and will be set to the maximum allowed: {:.4}",
                drill_diameter, clamped
            );
            warn!("{message}");
            status = Some(message);
            drill_diameter = clamped;
        }

        let relief_diameter = params.relief_diameter.max(0.0);
        let drill_radius = drill_diameter / 2.0;
        let relief_radius = relief_diameter / 2.0;
        let center_to_drill = center_to_corner - drill_radius;

        let relief = (relief_radius > 0.0).then(|| {
            Self::solve_relief(
                drill_radius,
                relief_radius,
                params.min_wall,
                center_to_flat,
                flat_length,
            )
        });

        Self {
            hex_size: params.hex_size,
            drill_diameter,
            relief_diameter,
            min_wall: params.min_wall,
            center_to_flat,
            center_to_corner,
            corner_to_corner,
            flat_length,
            drill_radius,
            relief_radius,
            center_to_drill,
            relief,
            status,
        }
    }

    /// Solves the relief hole placement: tangent to (or separated by
    /// `min_wall` from) both the adjacent primary hole and the hexagon flat.
    ///
    /// The construction projects the primary radius onto lines at the side
    /// angle, then solves the required center-to-center separation for the
    /// chord position along the flat. It is only defined while
    /// `relief_radius` is smaller than the 60-degree projection of the
    /// primary radius.
    fn solve_relief(
        drill_radius: f64,
        relief_radius: f64,
        min_wall: f64,
        center_to_flat: f64,
        flat_length: f64,
    ) -> ReliefPlacement {
        let side_angle = Self::SIDE_ANGLE_DEG.to_radians();
        let h_proj = drill_radius * side_angle.sin();
        let b_proj = drill_radius * side_angle.cos();
        debug_assert!(
            relief_radius < h_proj,
            "relief radius {} must be below the drill radius projection {}",
            relief_radius,
            h_proj
        );

        let h = h_proj - relief_radius;
        let separation = drill_radius + relief_radius + min_wall;
        let chord = (separation * separation - h * h).sqrt() + (h / h_proj) * b_proj;

        let x = center_to_flat - relief_radius;
        let z = (x / center_to_flat) * (flat_length / 2.0) - chord;

        ReliefPlacement {
            angle_deg: Self::SIDE_ANGLE_DEG / 2.0 - z.atan2(x).to_degrees(),
            distance: (z * z + x * x).sqrt(),
        }
    }

    /// Flat-to-flat width of the hexagon.
    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    /// Primary drill diameter after clamping.
    pub fn drill_diameter(&self) -> f64 {
        self.drill_diameter
    }

    /// Relief hole diameter (0 when relief holes are disabled).
    pub fn relief_diameter(&self) -> f64 {
        self.relief_diameter
    }

    /// Minimum wall thickness between adjacent drilled features.
    pub fn min_wall(&self) -> f64 {
        self.min_wall
    }

    /// Distance from the hexagon center to the middle of a flat.
    pub fn center_to_flat(&self) -> f64 {
        self.center_to_flat
    }

    /// Distance from the hexagon center to a corner.
    pub fn center_to_corner(&self) -> f64 {
        self.center_to_corner
    }

    /// Distance between two opposite corners.
    pub fn corner_to_corner(&self) -> f64 {
        self.corner_to_corner
    }

    /// Primary drill radius.
    pub fn drill_radius(&self) -> f64 {
        self.drill_radius
    }

    /// Relief drill radius.
    pub fn relief_radius(&self) -> f64 {
        self.relief_radius
    }

    /// Distance from the hexagon center to each primary hole center.
    pub fn center_to_drill(&self) -> f64 {
        self.center_to_drill
    }

    /// Clamp warning produced at construction, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Center of the primary hole at the given corner (1-based).
    pub fn drill_location(&self, corner: usize) -> Point {
        debug_assert!(
            (1..=Self::CORNERS).contains(&corner),
            "corner must be 1..={}, got {}",
            Self::CORNERS,
            corner
        );
        let angle = ((corner - 1) as f64 * Self::SIDE_ANGLE_DEG).to_radians();
        Point::new(
            self.center_to_drill * angle.cos(),
            self.center_to_drill * angle.sin(),
        )
    }

    /// Centers of all six primary holes, corner 1 first.
    pub fn drill_locations(&self) -> Vec<Point> {
        (1..=Self::CORNERS)
            .map(|corner| self.drill_location(corner))
            .collect()
    }

    /// The six hexagon corner coordinates, starting at angle 0.
    pub fn corner_locations(&self) -> Vec<Point> {
        (0..Self::CORNERS)
            .map(|corner| {
                let angle = (corner as f64 * Self::SIDE_ANGLE_DEG).to_radians();
                Point::new(
                    self.center_to_corner * angle.cos(),
                    self.center_to_corner * angle.sin(),
                )
            })
            .collect()
    }

    /// Angular offset of each relief hole from its corner's radial line,
    /// degrees. `None` when relief holes are disabled.
    pub fn relief_angle(&self) -> Option<f64> {
        self.relief.map(|placement| placement.angle_deg)
    }

    /// Distance of each relief hole center from the hexagon center.
    /// `None` when relief holes are disabled.
    pub fn relief_distance(&self) -> Option<f64> {
        self.relief.map(|placement| placement.distance)
    }

    /// The relief hole pair flanking the given corner (1-based), leading
    /// hole (positive angular offset) first.
    pub fn relief_location(&self, corner: usize) -> Option<(Point, Point)> {
        debug_assert!(
            (1..=Self::CORNERS).contains(&corner),
            "corner must be 1..={}, got {}",
            Self::CORNERS,
            corner
        );
        let placement = self.relief?;
        let base = (corner - 1) as f64 * Self::SIDE_ANGLE_DEG;
        let at = |angle_deg: f64| {
            let angle = angle_deg.to_radians();
            Point::new(
                placement.distance * angle.cos(),
                placement.distance * angle.sin(),
            )
        };
        Some((
            at(base + placement.angle_deg),
            at(base - placement.angle_deg),
        ))
    }

    /// Centers of all twelve relief holes in corner-major order, each
    /// corner's pair adjacent. Empty when relief holes are disabled.
    pub fn relief_locations(&self) -> Vec<Point> {
        let mut locations = Vec::with_capacity(2 * Self::CORNERS);
        for corner in 1..=Self::CORNERS {
            if let Some((lead, trail)) = self.relief_location(corner) {
                locations.push(lead);
                locations.push(trail);
            }
        }
        locations
    }
}
