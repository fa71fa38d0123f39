//! Relative stitch stream shared by the encoders.
//!
//! Machine formats store each stitch as a move relative to the previous
//! needle position. Moves larger than a format's range are clamped, not
//! split, and the running position follows the clamped move so later
//! deltas stay consistent with what the machine actually did.

use stitchkit_core::{StitchPoint, StitchType};

/// One encoded move in machine units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchDelta {
    pub dx: i32,
    pub dy: i32,
    pub stitch_type: StitchType,
    /// Needle position after this move
    pub position: (i32, i32),
}

/// Running needle position in machine units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StitchCursor {
    pub last_x: i32,
    pub last_y: i32,
}

impl StitchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta from the current position to `point`, clamped to `±limit`.
    ///
    /// The cursor moves by the clamped delta only when `advance` is set.
    pub fn step(&mut self, point: &StitchPoint, limit: i32, advance: bool) -> StitchDelta {
        let (x, y) = point.machine_position();
        let dx = x.saturating_sub(self.last_x).clamp(-limit, limit);
        let dy = y.saturating_sub(self.last_y).clamp(-limit, limit);

        if advance {
            self.last_x += dx;
            self.last_y += dy;
        }

        StitchDelta {
            dx,
            dy,
            stitch_type: point.stitch_type,
            position: (self.last_x, self.last_y),
        }
    }
}

/// Fold `points` into clamped relative moves, starting at the origin.
///
/// `advances` decides, per stitch type, whether the format writes
/// coordinates for that record and therefore moves the needle.
pub fn delta_stream<'a, F>(
    points: &'a [StitchPoint],
    limit: i32,
    advances: F,
) -> impl Iterator<Item = StitchDelta> + 'a
where
    F: Fn(StitchType) -> bool + 'a,
{
    points
        .iter()
        .scan(StitchCursor::new(), move |cursor, point| {
            Some(cursor.step(point, limit, advances(point.stitch_type)))
        })
}

/// Stitch types that carry coordinates in PES and JEF
pub fn carries_coordinates(stitch_type: StitchType) -> bool {
    matches!(stitch_type, StitchType::Normal | StitchType::Jump)
}
