use serde::{Deserialize, Serialize};

/// Price break points and the hue each one maps to.
const PRICE_STOPS: [(f64, f64); 4] = [(500.0, 0.0), (650.0, 60.0), (800.0, 120.0), (950.0, 210.0)];
const PRICE_TOO_HIGH_HUE: f64 = 210.0;

/// (ratio start, ratio end, hue start, hue end, lightness start, lightness end)
const RANGE_SEGMENTS: [(f64, f64, f64, f64, f64, f64); 4] = [
    (0.0, 0.25, 120.0, 90.0, 35.0, 40.0),
    (0.25, 0.5, 90.0, 60.0, 40.0, 45.0),
    (0.5, 0.75, 60.0, 40.0, 45.0, 45.0),
    (0.75, 1.0, 40.0, 25.0, 45.0, 40.0),
];
const RANGE_SATURATION: f64 = 70.0;

pub const NEUTRAL_DARK: &str = "hsl(0, 0%, 20%)";

/// Observed span of a metric across the displayed rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering every value, `None` when there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |range, value| match range {
            None => Some(Self::new(value, value)),
            Some(range) => Some(Self::new(range.min.min(value), range.max.max(value))),
        })
    }

    pub fn ratio(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Soft limits outside of which a value is treated as anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctualityStyle {
    Severe,
    Moderate,
    Fine,
    Missing,
}

impl PunctualityStyle {
    pub fn color(&self) -> &'static str {
        match self {
            PunctualityStyle::Severe => "hsl(0, 75%, 45%)",
            PunctualityStyle::Moderate => "hsl(38, 92%, 45%)",
            PunctualityStyle::Fine => "hsl(140, 60%, 35%)",
            PunctualityStyle::Missing => "hsl(0, 0%, 60%)",
        }
    }

    pub fn bold(&self) -> bool {
        matches!(self, PunctualityStyle::Severe)
    }
}

pub fn punctuality_style(minutes: Option<i32>) -> PunctualityStyle {
    match minutes {
        None => PunctualityStyle::Missing,
        Some(minutes) if minutes > 90 => PunctualityStyle::Severe,
        Some(minutes) if minutes > 45 => PunctualityStyle::Moderate,
        Some(_) => PunctualityStyle::Fine,
    }
}

/// Hue for an order value. Anything above the top break point is pushed to
/// blue so outliers stand apart from the good range.
pub fn price_hue(value: f64) -> f64 {
    let (first_value, first_hue) = PRICE_STOPS[0];
    if value <= first_value {
        return first_hue;
    }
    for window in PRICE_STOPS.windows(2) {
        let (low, low_hue) = window[0];
        let (high, high_hue) = window[1];
        if value <= high {
            return lerp(low_hue, high_hue, (value - low) / (high - low));
        }
    }
    PRICE_TOO_HIGH_HUE
}

pub fn price_color(value: f64) -> String {
    hsl(price_hue(value), 75.0, 45.0)
}

/// Green to yellow to orange across the range, one linear piece per quarter.
pub fn range_color(value: f64, range: Range) -> String {
    let ratio = range.ratio(value);
    let (start, end, hue_start, hue_end, light_start, light_end) = RANGE_SEGMENTS
        .iter()
        .copied()
        .find(|(_, end, ..)| ratio <= *end)
        .unwrap_or(RANGE_SEGMENTS[RANGE_SEGMENTS.len() - 1]);
    let t = (ratio - start) / (end - start);
    hsl(
        lerp(hue_start, hue_end, t),
        RANGE_SATURATION,
        lerp(light_start, light_end, t),
    )
}

/// Like [`range_color`] but values outside `bounds` render dark.
pub fn amount_color(value: f64, range: Range, bounds: Bounds) -> String {
    if !bounds.contains(value) {
        return NEUTRAL_DARK.to_string();
    }
    range_color(value, range)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn hsl(hue: f64, saturation: f64, lightness: f64) -> String {
    format!("hsl({:.0}, {:.0}%, {:.0}%)", hue, saturation, lightness)
}
