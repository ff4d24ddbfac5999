use crate::{
    foundation::{
        core::{Point, Rate},
        error::FacepipeResult,
    },
    naming::label::track_label,
    track::model::{Keyframe, Track},
};

/// Retime `track` from `source_fps` to `target_fps`.
///
/// Every key's frame coordinate and both handle x-coordinates are multiplied
/// by `target_fps / source_fps`. Weights, handle y-coordinates and handle
/// types are copied as-is, and frames are not snapped to integers. The input
/// is left untouched; the copy is named after the target rate.
#[tracing::instrument(skip(track), fields(track = %track.name))]
pub fn rescale(track: &Track, source_fps: f64, target_fps: f64) -> FacepipeResult<Track> {
    let source = Rate::new(source_fps)?;
    let target = Rate::new(target_fps)?;
    let scale = source.scale_to(target);
    tracing::debug!(scale, "rescaling track");

    let mut out = track.clone();
    for ch in &mut out.channels {
        for key in &mut ch.keys {
            scale_key(key, scale);
        }
    }
    out.name = track_label(&out.base_name, target.as_f64());
    out.rate = target;
    Ok(out)
}

/// [`rescale`] from the track's own recorded rate.
pub fn rescale_to(track: &Track, target_fps: f64) -> FacepipeResult<Track> {
    rescale(track, track.rate.as_f64(), target_fps)
}

fn scale_key(key: &mut Keyframe, scale: f64) {
    key.co = scale_x(key.co, scale);
    key.handle_left = scale_x(key.handle_left, scale);
    key.handle_right = scale_x(key.handle_right, scale);
}

fn scale_x(p: Point, scale: f64) -> Point {
    Point::new(p.x * scale, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/track/rescale.rs"]
mod tests;
