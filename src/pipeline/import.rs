use std::{fs::File, io::Read, path::Path};

use crate::{
    config::{ImportConfig, RateColumn},
    foundation::{
        core::{Rate, Row},
        error::{FacepipeError, FacepipeResult},
    },
    naming::label::display_name_from_path,
    rate::estimate::{RateEstimate, detect_rate_column, estimate_rate_stats},
    table::reader::{ReaderOptions, read_rows},
    track::{
        builder::{BuildOptions, build_track},
        model::Track,
        rescale::rescale,
    },
};

/// Result of one import run, handed to a [`crate::sink::TrackSink`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImportOutcome {
    /// Rate the keys were recorded at (estimated or fallback).
    pub source_rate: Rate,
    /// Trailing-column statistics, `None` when no rate column was used.
    pub rate_estimate: Option<RateEstimate>,
    /// Track at the recorded rate: key `j` sits on frame `j + 1`.
    pub track: Track,
    /// `track` retimed to the target rate, when baking was requested.
    pub baked: Option<Track>,
}

impl ImportOutcome {
    /// The track a host should materialize: the baked one when present.
    pub fn active_track(&self) -> &Track {
        self.baked.as_ref().unwrap_or(&self.track)
    }
}

/// Run the whole pipeline over a CSV byte source.
pub fn import_csv<R: Read>(src: R, cfg: &ImportConfig) -> FacepipeResult<ImportOutcome> {
    let opts = ReaderOptions::with_delimiter(cfg.delimiter)?;
    let rows = read_rows(src, opts)?;
    import_rows(&rows, cfg)
}

/// Open `path` and run the pipeline. The track is named after the file stem
/// unless `cfg.display_name` is set.
pub fn import_csv_path(path: &Path, cfg: &ImportConfig) -> FacepipeResult<ImportOutcome> {
    let file = File::open(path)
        .map_err(|e| FacepipeError::io(format!("open csv '{}': {e}", path.display())))?;
    let mut cfg = cfg.clone();
    if cfg.display_name.is_none() {
        cfg.display_name = Some(display_name_from_path(path));
    }
    import_csv(file, &cfg)
}

/// Run the pipeline over rows that are already split.
#[tracing::instrument(skip(rows, cfg), fields(rows = rows.len()))]
pub fn import_rows(rows: &[Row], cfg: &ImportConfig) -> FacepipeResult<ImportOutcome> {
    let Some((header, data)) = rows.split_first() else {
        return Err(FacepipeError::io("csv has no header row"));
    };

    let (rate_estimate, has_rate_column) = match cfg.rate_column {
        RateColumn::Absent => (None, false),
        RateColumn::Present => (estimate_rate_stats(rows), true),
        RateColumn::Auto => {
            let est = detect_rate_column(rows);
            let claimed = est.is_some();
            (est, claimed)
        }
    };

    let source_rate = resolve_source_rate(rate_estimate.as_ref(), cfg.fallback_rate)?;

    let track = build_track(
        header,
        data,
        source_rate,
        BuildOptions {
            display_name: cfg.display_name.clone(),
            duplicate_policy: cfg.duplicate_policy,
            has_rate_column,
        },
    )?;

    let baked = match (cfg.bake, cfg.target_rate) {
        (true, Some(target)) => Some(rescale(&track, source_rate.as_f64(), target)?),
        _ => None,
    };

    tracing::info!(
        track = track.name.as_str(),
        channels = track.shape_channels().count(),
        frames = track.frame_count(),
        source_rate = source_rate.as_f64(),
        baked = baked.as_ref().map(|t| t.name.as_str()),
        "imported csv"
    );

    Ok(ImportOutcome {
        source_rate,
        rate_estimate,
        track,
        baked,
    })
}

fn resolve_source_rate(
    estimate: Option<&RateEstimate>,
    fallback: Option<f64>,
) -> FacepipeResult<Rate> {
    if let Some(est) = estimate {
        return Rate::new(est.mean).map_err(|_| {
            FacepipeError::rate_unavailable(format!(
                "estimated rate {} is not positive",
                est.mean
            ))
        });
    }
    match fallback {
        Some(fps) => {
            tracing::warn!(fallback = fps, "no rate hints in csv, using fallback rate");
            Rate::new(fps)
        }
        None => Err(FacepipeError::rate_unavailable(
            "no valid rate values found in csv and no fallback rate configured",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/import.rs"]
mod tests;
