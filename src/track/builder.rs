use std::collections::HashMap;

use crate::{
    foundation::{
        core::{FIRST_FRAME, Rate, Row},
        error::{FacepipeError, FacepipeResult},
    },
    naming::{
        label::{DEFAULT_DISPLAY_NAME, track_label},
        normalize::normalize_channel_name,
    },
    track::{
        handles::recalc_auto_clamped,
        model::{BASIS_CHANNEL, Channel, Keyframe, Track},
    },
};

/// What to do when two header columns normalize to the same channel name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep one channel; the right-most column wins for every frame.
    #[default]
    Overwrite,
    /// Fail with [`FacepipeError::DuplicateChannel`].
    Reject,
}

#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Base for the track name; [`DEFAULT_DISPLAY_NAME`] when `None`.
    pub display_name: Option<String>,
    pub duplicate_policy: DuplicatePolicy,
    /// The last column carries rate hints and is not a channel.
    pub has_rate_column: bool,
}

/// Row-at-a-time track construction.
///
/// ```text
/// header ─ normalize ─▶ [Basis, ch0, ch1, ...]
/// row j  ─ parse f64 ─▶ key at frame j + 1 on every channel
/// ```
#[derive(Debug)]
pub struct TrackBuilder {
    channels: Vec<Channel>,
    // header column -> index into `channels`
    column_channel: Vec<usize>,
    rows: usize,
    opts: BuildOptions,
}

impl TrackBuilder {
    pub fn new(header: &[String], opts: BuildOptions) -> FacepipeResult<Self> {
        let columns = if opts.has_rate_column {
            header.len().saturating_sub(1)
        } else {
            header.len()
        };

        let mut channels = Vec::with_capacity(columns + 1);
        channels.push(Channel::new(BASIS_CHANNEL));
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut column_channel = Vec::with_capacity(columns);

        for (col, raw) in header[..columns].iter().enumerate() {
            let name = normalize_channel_name(raw);
            if let Some(&existing) = by_name.get(&name) {
                match opts.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(FacepipeError::duplicate_channel(format!(
                            "column {col} ({raw:?}) normalizes to {name:?}, already used by an earlier column"
                        )));
                    }
                    DuplicatePolicy::Overwrite => {
                        tracing::warn!(
                            column = col,
                            raw = raw.as_str(),
                            channel = name.as_str(),
                            "duplicate channel name, later column overwrites earlier samples"
                        );
                        column_channel.push(existing);
                    }
                }
                continue;
            }
            by_name.insert(name.clone(), channels.len());
            column_channel.push(channels.len());
            channels.push(Channel::new(name));
        }

        tracing::debug!(
            columns,
            channels = channels.len() - 1,
            "created track channels"
        );

        Ok(Self {
            channels,
            column_channel,
            rows: 0,
            opts,
        })
    }

    /// Number of data rows consumed so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Add one data row as the next frame. Nothing is recorded if any field fails.
    pub fn push_row(&mut self, row: &[String]) -> FacepipeResult<()> {
        let row_idx = self.rows;
        let mut values = Vec::with_capacity(self.column_channel.len());
        for col in 0..self.column_channel.len() {
            let field = row
                .get(col)
                .ok_or_else(|| FacepipeError::row_too_short(row_idx, col))?;
            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|_| FacepipeError::not_numeric(row_idx, col, field.as_str()))?;
            values.push(value);
        }

        let frame = (row_idx as u64 + FIRST_FRAME) as f64;
        for (&ch, value) in self.column_channel.iter().zip(values) {
            let keys = &mut self.channels[ch].keys;
            // A repeated channel already holds this frame from an earlier column.
            if let Some(last) = keys.last_mut().filter(|k| k.frame() == frame) {
                last.co.y = value;
            } else {
                keys.push(Keyframe::new(frame, value));
            }
        }
        self.rows += 1;
        Ok(())
    }

    /// Finish the track, naming it `"<display name>_<rate>"`.
    pub fn finish(mut self, rate: Rate) -> Track {
        for ch in &mut self.channels {
            recalc_auto_clamped(&mut ch.keys);
        }
        let base_name = self
            .opts
            .display_name
            .take()
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_owned());
        Track {
            name: track_label(&base_name, rate.as_f64()),
            base_name,
            rate,
            channels: self.channels,
        }
    }
}

/// Build a track from a header row and its data rows in one call.
pub fn build_track(
    header: &[String],
    data: &[Row],
    rate: Rate,
    opts: BuildOptions,
) -> FacepipeResult<Track> {
    let mut builder = TrackBuilder::new(header, opts)?;
    for row in data {
        builder.push_row(row)?;
    }
    Ok(builder.finish(rate))
}

#[cfg(test)]
#[path = "../../tests/unit/track/builder.rs"]
mod tests;
