//! Hex hole pattern drilling program generator.
//!
//! Emits a complete drilling program for a computed hex pattern: a rapid to
//! each hole center at safe height followed by a simple or peck drilling
//! cycle, first for the six primary corner holes, then for the relief hole
//! pairs when a relief diameter is set.

use hexdrill_core::Point;
use hexdrill_geometry::{HexPattern, HexPatternParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CamToolResult, ParameterError, ParameterResult};

/// Parameters for a hex pattern drilling program.
///
/// Pattern dimensions are in millimeters, matching the G21 program header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexDrillParameters {
    /// Flat-to-flat width of the hexagon (mm).
    pub hex_size: f64,
    /// Primary drill diameter (mm); clamped by the pattern model.
    pub drill_diameter: f64,
    /// Relief drill diameter (mm); 0 disables relief holes.
    pub relief_diameter: f64,
    /// Z coordinate of the material surface (mm).
    pub top_z: f64,
    /// Final depth of the holes (mm).
    pub bottom_z: f64,
    /// Maximum depth of each plunge (mm). Set to 0 for no pecking.
    pub peck_depth: f64,
    /// Feed rate for vertical movement (mm/min).
    pub plunge_rate: f64,
    /// Spindle speed (RPM).
    pub spindle_speed: f64,
    /// Height for safe travel between holes (mm).
    pub safe_z: f64,
    /// X coordinate of the hexagon center (mm).
    pub x: f64,
    /// Y coordinate of the hexagon center (mm).
    pub y: f64,
}

impl HexDrillParameters {
    /// Creates parameters for the given pattern sizes with default
    /// machining values: 5 mm deep, no pecking, centered at the origin.
    pub fn new(hex_size: f64, drill_diameter: f64, relief_diameter: f64) -> Self {
        Self {
            hex_size,
            drill_diameter,
            relief_diameter,
            top_z: 0.0,
            bottom_z: -5.0,
            peck_depth: 0.0,
            plunge_rate: 60.0,
            spindle_speed: 8000.0,
            safe_z: 5.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Generator for hex pattern drilling G-code.
pub struct HexDrillGenerator {
    params: HexDrillParameters,
}

impl HexDrillGenerator {
    /// Creates a new generator with the given parameters.
    pub fn new(params: HexDrillParameters) -> Self {
        Self { params }
    }

    /// Validates the machining parameters.
    pub fn validate(&self) -> ParameterResult<()> {
        let p = &self.params;
        if !(p.hex_size.is_finite() && p.hex_size > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "hex_size".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if p.drill_diameter < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "drill_diameter".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        if p.relief_diameter < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "relief_diameter".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        if p.bottom_z >= p.top_z {
            return Err(ParameterError::InvalidValue {
                name: "bottom_z".to_string(),
                reason: "must be below top_z".to_string(),
            });
        }
        if p.plunge_rate <= 0.0 || p.plunge_rate > 10000.0 {
            return Err(ParameterError::OutOfRange {
                name: "plunge_rate".to_string(),
                value: p.plunge_rate,
                min: 0.0,
                max: 10000.0,
            });
        }
        if p.peck_depth < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "peck_depth".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Generates the drilling program.
    pub fn generate(&self) -> CamToolResult<String> {
        self.validate()?;
        let p = &self.params;

        let pattern = HexPattern::new(
            HexPatternParams::new(p.hex_size, p.drill_diameter).with_relief(p.relief_diameter),
        );
        let primary = pattern.drill_locations();
        let relief = pattern.relief_locations();
        debug!(
            primary = primary.len(),
            relief = relief.len(),
            "generating hex drill program"
        );

        let mut gcode = String::new();

        // Header
        gcode.push_str("; Hex Hole Drilling Pattern\n");
        gcode.push_str(&format!("; Hex Size: {:.3} mm\n", pattern.hex_size()));
        gcode.push_str(&format!(
            "; Corner Drill: {:.3} mm\n",
            pattern.drill_diameter()
        ));
        if pattern.relief_diameter() > 0.0 {
            gcode.push_str(&format!(
                "; Relief Drill: {:.3} mm\n",
                pattern.relief_diameter()
            ));
        }
        gcode.push_str(&format!("; Holes: {}\n", primary.len() + relief.len()));
        gcode.push_str(&format!("; Depth: {:.3} to {:.3} mm\n", p.top_z, p.bottom_z));
        gcode.push_str(&format!("; Center: X{:.3} Y{:.3}\n", p.x, p.y));

        // Initialization
        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str(&format!("M3 S{:.0} ; Start spindle\n", p.spindle_speed));
        gcode.push_str(&format!("G0 Z{:.3} ; Move to safe height\n", p.safe_z));

        for (index, hole) in primary.iter().enumerate() {
            gcode.push_str(&format!("; Corner {}\n", index + 1));
            self.drill_hole(&mut gcode, *hole);
        }
        for (index, hole) in relief.iter().enumerate() {
            gcode.push_str(&format!("; Relief {}\n", index + 1));
            self.drill_hole(&mut gcode, *hole);
        }

        // End
        gcode.push_str("M5 ; Stop spindle\n");
        gcode.push_str("M30 ; End program\n");

        Ok(gcode)
    }

    /// Emits the positioning move and drill cycle for one hole.
    fn drill_hole(&self, gcode: &mut String, hole: Point) {
        let p = &self.params;
        gcode.push_str(&format!(
            "G0 X{:.3} Y{:.3}\n",
            p.x + hole.x,
            p.y + hole.y
        ));

        if p.peck_depth <= 0.0 {
            gcode.push_str(&format!("G1 Z{:.3} F{:.1}\n", p.bottom_z, p.plunge_rate));
        } else {
            let mut current_z = p.top_z;
            while current_z > p.bottom_z {
                current_z -= p.peck_depth;
                if current_z < p.bottom_z {
                    current_z = p.bottom_z;
                }
                gcode.push_str(&format!("G1 Z{:.3} F{:.1}\n", current_z, p.plunge_rate));
                gcode.push_str(&format!("G0 Z{:.3} ; Retract to clear chips\n", p.top_z));
            }
        }
        gcode.push_str(&format!("G0 Z{:.3} ; Retract to safe height\n", p.safe_z));
    }
}
