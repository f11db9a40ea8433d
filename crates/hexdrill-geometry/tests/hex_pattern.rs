use hexdrill_geometry::{FitSearch, HexPattern, HexPatternParams};
use proptest::prelude::*;

#[test]
fn test_quarter_inch_drill_in_one_inch_hex() {
    // End-to-end reference scenario: hex 1.0, drill 1/4.
    let pattern = HexPattern::new(HexPatternParams::new(1.0, 0.25));

    let expected = [
        (0.4524, 0.0000),
        (0.2262, 0.3917),
        (-0.2262, 0.3917),
        (-0.4524, 0.0000),
        (-0.2262, -0.3917),
        (0.2262, -0.3917),
    ];
    let locations = pattern.drill_locations();
    assert_eq!(locations.len(), expected.len());
    for (location, (x, y)) in locations.iter().zip(expected) {
        assert!((location.x - x).abs() < 1e-4, "{location} vs ({x}, {y})");
        assert!((location.y - y).abs() < 1e-4, "{location} vs ({x}, {y})");
    }

    assert!((pattern.overdrill_area() - 0.016985).abs() < 1e-6);
    assert!((pattern.underdrill_area() - 0.013391).abs() < 1e-6);
}

#[test]
fn test_best_fit_then_relief() {
    // Sweep the primary size first, then rebuild with a relief pair the
    // way the CLI does; the sweep result is unchanged by the rebuild.
    let fit = FitSearch::new(1.0).run();
    let with_relief = HexPattern::new(
        HexPatternParams::new(1.0, fit.pattern.drill_diameter()).with_relief(1.0 / 16.0),
    );
    assert_eq!(with_relief.drill_diameter(), fit.pattern.drill_diameter());
    assert!(with_relief.status().is_none());
    assert_eq!(with_relief.relief_locations().len(), 12);
    assert!(with_relief.underdrill_area() < fit.underdrill);
}

proptest! {
    #[test]
    fn prop_flat_length_matches_center_to_corner(hex_size in 0.01f64..1000.0) {
        let pattern = HexPattern::new(HexPatternParams::new(hex_size, 0.0));
        let relative = (pattern.flat_length() - pattern.center_to_corner()).abs()
            / pattern.center_to_corner();
        prop_assert!(relative < 1e-9);
    }

    #[test]
    fn prop_primary_holes_form_regular_hexagon(
        hex_size in 0.1f64..100.0,
        fraction in 0.05f64..0.95,
    ) {
        let pattern = HexPattern::new(HexPatternParams::new(hex_size, 0.0));
        let min = pattern.drill_diameter();
        let max = pattern.center_to_corner();
        let drill = min + (max - min) * fraction;

        let pattern = HexPattern::new(HexPatternParams::new(hex_size, drill));
        let locations = pattern.drill_locations();
        prop_assert_eq!(locations.len(), 6);
        for window in locations.windows(2) {
            let delta = window[1].angle_deg() - window[0].angle_deg();
            let delta = if delta < 0.0 { delta + 360.0 } else { delta };
            prop_assert!((delta - 60.0).abs() < 1e-9);
        }
        for location in &locations {
            prop_assert!((location.radius() - pattern.center_to_drill()).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_areas_non_negative(
        hex_size in 0.1f64..100.0,
        fraction in 0.01f64..0.99,
    ) {
        let bounds = HexPattern::new(HexPatternParams::new(hex_size, 0.0));
        let drill = bounds.drill_diameter()
            + (bounds.center_to_corner() - bounds.drill_diameter()) * fraction;
        let pattern = HexPattern::new(HexPatternParams::new(hex_size, drill));
        prop_assert!(pattern.overdrill_area() >= 0.0);
        prop_assert!(pattern.underdrill_area() >= 0.0);
    }

    #[test]
    fn prop_clamping_is_idempotent(
        hex_size in 0.1f64..100.0,
        requested in 0.0f64..500.0,
    ) {
        let first = HexPattern::new(HexPatternParams::new(hex_size, requested));
        let second = HexPattern::new(HexPatternParams::new(hex_size, first.drill_diameter()));
        prop_assert_eq!(first.drill_diameter(), second.drill_diameter());
        prop_assert!(second.status().is_none());
    }
}
