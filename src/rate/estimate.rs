use crate::foundation::core::Row;

/// Summary of the trailing-column rate hints that parsed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RateEstimate {
    pub mean: f64,
    pub samples: usize,
    pub min: f64,
    pub max: f64,
}

/// Running mean over trailing-column rate hints.
///
/// Fields that do not parse as a finite float are skipped without error. The
/// header row goes through the same path, so a non-numeric header label is
/// simply ignored.
#[derive(Clone, Debug, Default)]
pub struct RateAccumulator {
    sum: f64,
    samples: usize,
    min: f64,
    max: f64,
    skipped: usize,
}

impl RateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the last field of `row`. Empty rows count as skipped.
    pub fn push_row(&mut self, row: &[String]) {
        match row.last() {
            Some(field) => self.push_field(field),
            None => self.skipped += 1,
        }
    }

    pub fn push_field(&mut self, field: &str) {
        let Some(v) = parse_rate_hint(field) else {
            self.skipped += 1;
            return;
        };
        if self.samples == 0 {
            self.min = v;
            self.max = v;
        } else {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
        self.sum += v;
        self.samples += 1;
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// `None` when no field parsed.
    pub fn finish(&self) -> Option<RateEstimate> {
        if self.samples == 0 {
            return None;
        }
        Some(RateEstimate {
            mean: self.sum / self.samples as f64,
            samples: self.samples,
            min: self.min,
            max: self.max,
        })
    }
}

/// Mean of the parseable last fields of `rows`, header included.
pub fn estimate_rate(rows: &[Row]) -> Option<f64> {
    estimate_rate_stats(rows).map(|e| e.mean)
}

/// Like [`estimate_rate`], with sample count and spread.
pub fn estimate_rate_stats(rows: &[Row]) -> Option<RateEstimate> {
    let mut acc = RateAccumulator::new();
    for row in rows {
        acc.push_row(row);
    }
    let est = acc.finish();
    match &est {
        Some(e) => tracing::debug!(
            mean = e.mean,
            samples = e.samples,
            skipped = acc.skipped(),
            "estimated source rate"
        ),
        None => tracing::debug!(skipped = acc.skipped(), "no usable rate hints"),
    }
    est
}

/// Smallest mean a trailing column may have to count as frame-rate hints.
/// Blend-shape weights stay in `[0, 1]`.
pub const MIN_RATE_HINT_MEAN: f64 = 1.0;

/// Decide whether the last column of `rows` (header first) holds rate hints.
///
/// The column qualifies when its header label is not itself a number and the
/// parseable values average above [`MIN_RATE_HINT_MEAN`]. Returns the estimate
/// when it does.
pub fn detect_rate_column(rows: &[Row]) -> Option<RateEstimate> {
    let label = rows.first()?.last()?;
    if label.trim().is_empty() || parse_rate_hint(label).is_some() {
        tracing::debug!(
            column = label.as_str(),
            "trailing header label is not a name, no rate column"
        );
        return None;
    }
    let est = estimate_rate_stats(rows)?;
    if est.mean <= MIN_RATE_HINT_MEAN {
        tracing::warn!(
            column = label.as_str(),
            mean = est.mean,
            "trailing column looks like weights, keeping it as a channel"
        );
        return None;
    }
    tracing::info!(
        column = label.as_str(),
        mean = est.mean,
        samples = est.samples,
        "using trailing column as rate hints"
    );
    Some(est)
}

fn parse_rate_hint(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/rate/estimate.rs"]
mod tests;
