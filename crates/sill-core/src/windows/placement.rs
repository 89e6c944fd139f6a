//! Spawn placement for windows opened without an explicit position.

use tracing::warn;

use super::types::Position;

/// Lower bound of the cascade band, in pixels.
const CASCADE_MIN: f64 = 50.0;

/// Width of the cascade band; offsets land in `[CASCADE_MIN, CASCADE_MIN + CASCADE_RANGE)`.
const CASCADE_RANGE: f64 = 100.0;

/// Pick a spawn position with both coordinates in `[50, 150)`.
///
/// New windows cascade into a small offset band near the top-left corner
/// instead of stacking exactly on top of each other. Entropy comes from the
/// OS; if that fails, the midpoint of the band is used instead.
pub fn cascade_position() -> Position {
    let mut buf = [0u8; 8];
    if let Err(e) = getrandom::getrandom(&mut buf) {
        warn!(
            event = "core.windows.cascade_entropy_failed",
            error = %e,
            "OS entropy unavailable - using fixed spawn position"
        );
        let mid = CASCADE_MIN + CASCADE_RANGE / 2.0;
        return Position { x: mid, y: mid };
    }

    let x = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    Position {
        x: CASCADE_MIN + unit(x) * CASCADE_RANGE,
        y: CASCADE_MIN + unit(y) * CASCADE_RANGE,
    }
}

/// Map a `u32` to `[0, 1)`.
fn unit(v: u32) -> f64 {
    f64::from(v) / (f64::from(u32::MAX) + 1.0)
}
