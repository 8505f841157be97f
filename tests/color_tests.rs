use routeboard::shared::color::{
    Bounds, NEUTRAL_DARK, PunctualityStyle, Range, amount_color, price_color, price_hue,
    punctuality_style, range_color,
};

#[test]
fn price_hue_break_points() {
    assert_eq!(price_hue(100.0), 0.0);
    assert_eq!(price_hue(500.0), 0.0);
    assert_eq!(price_hue(650.0), 60.0);
    assert_eq!(price_hue(800.0), 120.0);
    assert_eq!(price_hue(950.0), 210.0);
}

#[test]
fn price_hue_interpolates_inside_bands() {
    assert_eq!(price_hue(575.0), 30.0);
    assert_eq!(price_hue(725.0), 90.0);
    assert_eq!(price_hue(875.0), 165.0);
}

#[test]
fn price_hue_clamps_outliers() {
    assert_eq!(price_hue(951.0), 210.0);
    assert_eq!(price_hue(5000.0), 210.0);
}

#[test]
fn price_color_is_css() {
    assert_eq!(price_color(800.0), "hsl(120, 75%, 45%)");
}

#[test]
fn punctuality_buckets() {
    assert_eq!(punctuality_style(Some(91)), PunctualityStyle::Severe);
    assert_eq!(punctuality_style(Some(90)), PunctualityStyle::Moderate);
    assert_eq!(punctuality_style(Some(46)), PunctualityStyle::Moderate);
    assert_eq!(punctuality_style(Some(45)), PunctualityStyle::Fine);
    assert_eq!(punctuality_style(Some(-30)), PunctualityStyle::Fine);
    assert_eq!(punctuality_style(None), PunctualityStyle::Missing);
    assert!(PunctualityStyle::Severe.bold());
    assert!(!PunctualityStyle::Moderate.bold());
}

#[test]
fn range_ratio_handles_flat_range() {
    let range = Range::new(5.0, 5.0);
    assert_eq!(range.ratio(5.0), 0.0);
    assert_eq!(range_color(5.0, range), "hsl(120, 70%, 35%)");
}

#[test]
fn range_color_segments() {
    let range = Range::new(0.0, 100.0);
    assert_eq!(range_color(0.0, range), "hsl(120, 70%, 35%)");
    assert_eq!(range_color(25.0, range), "hsl(90, 70%, 40%)");
    assert_eq!(range_color(50.0, range), "hsl(60, 70%, 45%)");
    assert_eq!(range_color(75.0, range), "hsl(40, 70%, 45%)");
    assert_eq!(range_color(100.0, range), "hsl(25, 70%, 40%)");
    // Out of range values clamp to the ends.
    assert_eq!(range_color(250.0, range), "hsl(25, 70%, 40%)");
}

#[test]
fn range_from_values() {
    assert_eq!(Range::from_values([]), None);
    assert_eq!(
        Range::from_values([3.0, -1.0, 7.0]),
        Some(Range::new(-1.0, 7.0))
    );
}

#[test]
fn amount_outside_bounds_is_neutral() {
    let range = Range::new(0.0, 100.0);
    let bounds = Bounds {
        lower: 10.0,
        upper: 90.0,
    };
    assert_eq!(amount_color(5.0, range, bounds), NEUTRAL_DARK);
    assert_eq!(amount_color(95.0, range, bounds), NEUTRAL_DARK);
    assert_eq!(amount_color(50.0, range, bounds), range_color(50.0, range));
}
