use crate::foundation::core::{Point, Rate};

/// Name of the reference-pose channel every track starts with.
pub const BASIS_CHANNEL: &str = "Basis";

/// Interpolation used from a keyframe toward the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    Constant,
    Linear,
    Bezier,
}

/// How a Bezier handle is positioned relative to its keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleType {
    Free,
    Aligned,
    Vector,
    Auto,
    AutoClamped,
}

/// One weight sample with its interpolation handles.
///
/// `co.x` is the frame coordinate and `co.y` the weight. Handles live in the
/// same (frame, weight) space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    pub co: Point,
    pub handle_left: Point,
    pub handle_right: Point,
    pub handle_left_type: HandleType,
    pub handle_right_type: HandleType,
    pub interpolation: Interpolation,
}

impl Keyframe {
    /// Bezier key with auto-clamped handles collapsed onto the key; see
    /// [`crate::track::handles::recalc_auto_clamped`].
    pub fn new(frame: f64, value: f64) -> Self {
        let co = Point::new(frame, value);
        Self {
            co,
            handle_left: co,
            handle_right: co,
            handle_left_type: HandleType::AutoClamped,
            handle_right_type: HandleType::AutoClamped,
            interpolation: Interpolation::Bezier,
        }
    }

    pub fn frame(&self) -> f64 {
        self.co.x
    }

    pub fn value(&self) -> f64 {
        self.co.y
    }
}

/// One blend-shape weight curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    pub name: String,
    pub keys: Vec<Keyframe>, // sorted by frame
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    pub fn is_basis(&self) -> bool {
        self.name == BASIS_CHANNEL
    }
}

/// (channel, frame, value) view of a keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightSample<'a> {
    pub channel: &'a str,
    pub frame: f64,
    pub value: f64,
}

/// A named set of channels produced by one import.
///
/// `channels[0]` is always the empty [`BASIS_CHANNEL`]; the rest follow
/// header order and hold one key per data row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    pub name: String,
    pub base_name: String,
    pub rate: Rate,
    pub channels: Vec<Channel>,
}

impl Track {
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn basis(&self) -> Option<&Channel> {
        self.channels.first().filter(|c| c.is_basis())
    }

    /// Channels after the leading basis, in header order.
    pub fn shape_channels(&self) -> impl Iterator<Item = &Channel> {
        let skip = usize::from(self.basis().is_some());
        self.channels.iter().skip(skip)
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.shape_channels().map(|c| c.name.as_str()).collect()
    }

    /// Keys per shape channel (all shape channels hold the same count).
    pub fn frame_count(&self) -> usize {
        self.shape_channels().map(|c| c.keys.len()).max().unwrap_or(0)
    }

    /// First and last key frame coordinates, `None` for a track with no keys.
    pub fn frame_range(&self) -> Option<(f64, f64)> {
        let mut frames = self
            .shape_channels()
            .flat_map(|c| c.keys.iter().map(Keyframe::frame));
        let first = frames.next()?;
        Some(frames.fold((first, first), |(lo, hi), f| (lo.min(f), hi.max(f))))
    }

    pub fn samples(&self) -> impl Iterator<Item = WeightSample<'_>> {
        self.shape_channels().flat_map(|c| {
            c.keys.iter().map(move |k| WeightSample {
                channel: c.name.as_str(),
                frame: k.frame(),
                value: k.value(),
            })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/model.rs"]
mod tests;
