//! facepipe turns a per-frame CSV export of facial-tracking blend-shape weights
//! into a shape-key animation track, and retimes that track from its recording
//! frame rate to a target playback rate.
//!
//! # Pipeline overview
//!
//! 1. **Read**: delimited text -> rows of string fields ([`read_rows`])
//! 2. **Estimate**: mean of the parseable trailing-column rate hints ([`estimate_rate`])
//! 3. **Normalize**: raw header names -> `_L`/`_R` channel names ([`normalize_channel_name`])
//! 4. **Build**: `Basis` + one channel per column, key `j` at frame `j + 1` ([`build_track`])
//! 5. **Rescale**: frame and handle x-coordinates times `target / source` ([`rescale`])
//!
//! [`import_csv`] runs all five steps; the result goes to a host through
//! [`TrackSink`]. Nothing here depends on scene or UI types.
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;

mod foundation;
mod naming;
mod pipeline;
mod rate;
mod sink;
mod table;
mod track;

pub use config::{ImportConfig, LoggingConfig, RateColumn};
pub use foundation::core::{FIRST_FRAME, Point, Rate, Row, format_rate};
pub use foundation::error::{FacepipeError, FacepipeResult, ROW_TOO_SHORT, VALUE_NOT_NUMERIC};
pub use naming::label::{DEFAULT_DISPLAY_NAME, display_name_from_path, track_label};
pub use naming::normalize::{SIDE_SUFFIX_EXCEPTIONS, normalize_channel_name, normalize_header};
pub use pipeline::import::{ImportOutcome, import_csv, import_csv_path, import_rows};
pub use rate::estimate::{
    MIN_RATE_HINT_MEAN, RateAccumulator, RateEstimate, detect_rate_column, estimate_rate,
    estimate_rate_stats,
};
pub use sink::{JsonSink, MemorySink, TrackSink};
pub use table::reader::{ReaderOptions, TableReader, read_rows, read_rows_from_path};
pub use track::builder::{BuildOptions, DuplicatePolicy, TrackBuilder, build_track};
pub use track::handles::recalc_auto_clamped;
pub use track::model::{
    BASIS_CHANNEL, Channel, HandleType, Interpolation, Keyframe, Track, WeightSample,
};
pub use track::rescale::{rescale, rescale_to};
