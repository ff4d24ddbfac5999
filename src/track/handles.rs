use crate::{
    foundation::core::Point,
    track::model::{HandleType, Keyframe},
};

/// Place auto-clamped Bezier handles for a sorted key sequence.
///
/// Each handle reaches one third of the way toward the neighbouring key (the
/// opposite gap is mirrored at the ends, one third of a frame for a lone key).
/// Handle slope follows the line through both neighbours and is flattened at
/// the ends and at local extrema. Handle weights never pass the neighbour's
/// weight.
pub fn recalc_auto_clamped(keys: &mut [Keyframe]) {
    let n = keys.len();
    for i in 0..n {
        let cur = keys[i].co;
        let prev = (i > 0).then(|| keys[i - 1].co);
        let next = (i + 1 < n).then(|| keys[i + 1].co);

        let (dl, dr) = match (prev, next) {
            (Some(p), Some(q)) => (cur.x - p.x, q.x - cur.x),
            (Some(p), None) => (cur.x - p.x, cur.x - p.x),
            (None, Some(q)) => (q.x - cur.x, q.x - cur.x),
            (None, None) => (1.0, 1.0),
        };

        let slope = match (prev, next) {
            (Some(p), Some(q)) if (cur.y - p.y) * (q.y - cur.y) > 0.0 && q.x > p.x => {
                (q.y - p.y) / (q.x - p.x)
            }
            _ => 0.0,
        };

        let mut left_y = cur.y - slope * dl / 3.0;
        let mut right_y = cur.y + slope * dr / 3.0;
        if let Some(p) = prev {
            left_y = clamp_between(left_y, cur.y, p.y);
        }
        if let Some(q) = next {
            right_y = clamp_between(right_y, cur.y, q.y);
        }

        let key = &mut keys[i];
        key.handle_left = Point::new(cur.x - dl / 3.0, left_y);
        key.handle_right = Point::new(cur.x + dr / 3.0, right_y);
        key.handle_left_type = HandleType::AutoClamped;
        key.handle_right_type = HandleType::AutoClamped;
    }
}

fn clamp_between(v: f64, a: f64, b: f64) -> f64 {
    v.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
#[path = "../../tests/unit/track/handles.rs"]
mod tests;
