//! Fixed-precision reporting for computed hex patterns.
//!
//! Renders the textual report block the CLI logs (coordinates to 4
//! decimals, areas to 6, ratios to 3) and serializes the same data for
//! machine consumption.

use hexdrill_core::units::format_fraction;
use hexdrill_geometry::HexPattern;
use serde::Serialize;

/// A single hole center in the report.
#[derive(Debug, Clone, Serialize)]
pub struct HoleReport {
    pub corner: usize,
    pub x: f64,
    pub y: f64,
}

/// Snapshot of a computed pattern for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub hex_size: f64,
    pub drill_diameter: f64,
    pub drill_fraction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief_diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief_fraction: Option<String>,
    pub corners: Vec<HoleReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relief_holes: Vec<HoleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief_area: Option<f64>,
    pub overdrill_area: f64,
    pub underdrill_area: f64,
    pub ratio: f64,
    pub flat_length: f64,
    pub flat_available: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PatternReport {
    /// Builds a report from a computed pattern.
    pub fn from_pattern(pattern: &HexPattern) -> Self {
        let denominator = (1.0 / HexPattern::DRILL_INCREMENT) as u32;
        let overdrill_area = pattern.overdrill_area();
        let underdrill_area = pattern.underdrill_area();

        let corners = pattern
            .drill_locations()
            .iter()
            .enumerate()
            .map(|(index, location)| HoleReport {
                corner: index + 1,
                x: location.x,
                y: location.y,
            })
            .collect();
        let relief_holes = pattern
            .relief_locations()
            .iter()
            .enumerate()
            .map(|(index, location)| HoleReport {
                corner: index / 2 + 1,
                x: location.x,
                y: location.y,
            })
            .collect();

        let has_relief = pattern.relief_diameter() > 0.0;
        Self {
            hex_size: pattern.hex_size(),
            drill_diameter: pattern.drill_diameter(),
            drill_fraction: format_fraction(pattern.drill_diameter(), denominator),
            relief_diameter: has_relief.then(|| pattern.relief_diameter()),
            relief_fraction: has_relief
                .then(|| format_fraction(pattern.relief_diameter(), denominator)),
            corners,
            relief_holes,
            relief_area: has_relief.then(|| pattern.relief_area()),
            overdrill_area,
            underdrill_area,
            ratio: overdrill_area / underdrill_area,
            flat_length: pattern.flat_length(),
            flat_available: pattern.flat_available(),
            status: pattern.status().map(str::to_string),
        }
    }

    /// Renders the fixed-precision report lines.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!("Hex Size: {:.4}", self.hex_size));
        lines.push(format!(
            "Corner Hole Size: {:.4}  ({})",
            self.drill_diameter, self.drill_fraction
        ));
        if let (Some(diameter), Some(fraction)) = (self.relief_diameter, &self.relief_fraction) {
            lines.push(format!("Relief Hole Size: {:.4}  ({})", diameter, fraction));
        }
        for hole in &self.corners {
            lines.push(format!(
                "Corner {}: X={:.4}  Y={:.4}",
                hole.corner, hole.x, hole.y
            ));
        }
        if let Some(relief_area) = self.relief_area {
            lines.push(format!("Relief drill area: {:.6}", relief_area));
        }
        lines.push(format!("Over drill area: {:.6}", self.overdrill_area));
        lines.push(format!("Under drill area: {:.6}", self.underdrill_area));
        lines.push(format!("Ratio: {:.3}", self.ratio));
        lines.push(format!(
            "Flat Length: {:.3}   ({:.1}%)",
            self.flat_available,
            100.0 * self.flat_available / self.flat_length
        ));
        if let Some(status) = &self.status {
            lines.push(status.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexdrill_geometry::HexPatternParams;

    fn report(hex_size: f64, drill: f64) -> PatternReport {
        PatternReport::from_pattern(&HexPattern::new(HexPatternParams::new(hex_size, drill)))
    }

    #[test]
    fn test_render_precision() {
        let lines = report(1.0, 0.25).render_lines();
        assert!(lines.contains(&"Hex Size: 1.0000".to_string()));
        assert!(lines.contains(&"Corner Hole Size: 0.2500  (1/4)".to_string()));
        assert!(lines.contains(&"Corner 1: X=0.4524  Y=0.0000".to_string()));
        assert!(lines.contains(&"Over drill area: 0.016985".to_string()));
        assert!(lines.contains(&"Under drill area: 0.013391".to_string()));
        assert!(lines.contains(&"Ratio: 1.268".to_string()));
        assert!(lines.contains(&"Flat Length: 0.327   (56.7%)".to_string()));
    }

    #[test]
    fn test_relief_lines_present_only_with_relief() {
        let without = report(1.0, 0.25);
        assert!(without.relief_holes.is_empty());
        assert!(!without
            .render_lines()
            .iter()
            .any(|line| line.starts_with("Relief")));

        let with = PatternReport::from_pattern(&HexPattern::new(
            HexPatternParams::new(1.0, 0.25).with_relief(1.0 / 16.0),
        ));
        assert_eq!(with.relief_holes.len(), 12);
        assert!(with
            .render_lines()
            .contains(&"Relief Hole Size: 0.0625  (1/16)".to_string()));
    }

    #[test]
    fn test_status_appears_in_report() {
        let clamped = report(1.0, 10.0);
        assert!(clamped.status.is_some());
        let lines = clamped.render_lines();
        assert!(lines.iter().any(|line| line.contains("too large")));
    }

    #[test]
    fn test_json_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&report(1.0, 0.25)).unwrap();
        assert!(json.contains("\"drill_fraction\":\"1/4\""));
        assert!(!json.contains("relief_diameter"));
        assert!(!json.contains("relief_holes"));
        assert!(!json.contains("status"));
    }
}
