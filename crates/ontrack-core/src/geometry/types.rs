use serde::{Deserialize, Serialize};

/// Whether the user is ahead of or behind their budget pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationColor {
    Positive,
    Negative,
}

/// A ring segment expressed as fractions of a full circle.
///
/// Fractions are not clamped. Values outside `[0, 1]` overshoot or wrap
/// when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub start_fraction: f64,
    pub sweep_fraction: f64,
}

impl ArcSpec {
    pub const FULL: ArcSpec = ArcSpec {
        start_fraction: 0.0,
        sweep_fraction: 1.0,
    };

    pub fn new(start_fraction: f64, sweep_fraction: f64) -> Self {
        Self {
            start_fraction,
            sweep_fraction,
        }
    }

    /// Start angle in degrees, 0 at three o'clock, shifted so fraction 0 sits at the top.
    pub fn start_degrees(&self) -> f64 {
        360.0 * self.start_fraction - 90.0
    }

    /// Clockwise sweep in degrees.
    pub fn sweep_degrees(&self) -> f64 {
        360.0 * self.sweep_fraction
    }
}

/// Everything the rendering layer needs for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// `(budget_amount - total_balance) / budget_amount`
    pub spent_fraction: f64,
    /// `|balance_deviation| / budget_amount`, never negative
    pub deviation_fraction: f64,
    pub deviation_arc_start: f64,
    pub deviation_color: DeviationColor,
    pub total_balance_label: String,
    pub deviation_label: String,
    pub days_left_label: String,
}

impl DisplaySnapshot {
    /// The snapshot shown when no usable statistics exist: an empty circle,
    /// zero labels and "0.0 days left".
    pub fn placeholder() -> Self {
        Self {
            spent_fraction: 0.0,
            deviation_fraction: 0.0,
            deviation_arc_start: 0.0,
            deviation_color: DeviationColor::Negative,
            total_balance_label: "0".to_string(),
            deviation_label: "0".to_string(),
            days_left_label: "0.0".to_string(),
        }
    }

    pub fn budget_arc(&self) -> ArcSpec {
        ArcSpec::FULL
    }

    pub fn spent_arc(&self) -> ArcSpec {
        ArcSpec::new(0.0, self.spent_fraction)
    }

    pub fn deviation_arc(&self) -> ArcSpec {
        ArcSpec::new(self.deviation_arc_start, self.deviation_fraction)
    }

    /// Caption text under the ring.
    pub fn days_left_caption(&self) -> String {
        format!("{} days left", self.days_left_label)
    }
}
