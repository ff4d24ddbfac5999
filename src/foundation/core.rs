use crate::foundation::error::{FacepipeError, FacepipeResult};

pub use kurbo::Point;

/// One CSV line split into string fields. The first row of a table is the header.
pub type Row = Vec<String>;

/// Frame index assigned to the first data row.
pub const FIRST_FRAME: u64 = 1;

/// Frames-per-second value, guaranteed positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rate(f64);

impl Rate {
    pub fn new(fps: f64) -> FacepipeResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(FacepipeError::invalid_rate(format!(
                "rate must be a positive finite number, got {fps}"
            )));
        }
        Ok(Self(fps))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Factor that maps frame coordinates recorded at `self` onto `target`.
    pub fn scale_to(self, target: Rate) -> f64 {
        target.0 / self.0
    }

    /// Integer form for whole rates ("30"), two decimals otherwise ("29.97").
    pub fn label(self) -> String {
        format_rate(self.0)
    }
}

impl TryFrom<f64> for Rate {
    type Error = FacepipeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for f64 {
    fn from(value: Rate) -> Self {
        value.0
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Format a frame rate for display: `30.0 -> "30"`, `29.97 -> "29.97"`, `23.976 -> "23.98"`.
pub fn format_rate(fps: f64) -> String {
    if fps.fract() == 0.0 {
        format!("{fps:.0}")
    } else {
        format!("{fps:.2}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
