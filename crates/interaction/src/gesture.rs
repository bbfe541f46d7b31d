//! Per-phase gesture engines. Each engine is a pure mutation of the box from
//! two consecutive hand samples plus the current zone membership; the session
//! owns the previous-sample state and resets it on every phase entry.
//!
//! Engagement latches: once a flag is set it stays set until the phase
//! controller clears it on phase exit. The engagement frame itself applies no
//! geometry change; deltas start on the following frame.

use shared::protocol::TrackingFrame;

use crate::{
    box_model::{BoxModel, MIN_HEIGHT, MIN_WIDTH},
    zones::ZoneSet,
};

/// Hands on opposing edges, in either left/right assignment for the vertical
/// pairings. Shared by stretch and scale.
fn opposite_pair(left_hand: ZoneSet, right_hand: ZoneSet) -> bool {
    (left_hand.left && right_hand.right)
        || (left_hand.top && right_hand.bottom)
        || (left_hand.bottom && right_hand.top)
}

/// Transport: engages on (left-hand left zone, right-hand right zone); while
/// engaged, re-centers the box on the hands' midpoint each frame.
pub fn transport_frame(
    bx: &mut BoxModel,
    frame: &TrackingFrame,
    left_hand: ZoneSet,
    right_hand: ZoneSet,
) {
    if !bx.is_moving {
        if left_hand.left && right_hand.right {
            bx.is_moving = true;
        }
    } else {
        let center = frame.left.midpoint(frame.right);
        bx.left = center.x - bx.width / 2.0;
        bx.top = center.y - bx.height / 2.0;
    }
}

/// Stretch: freeform resize, width and height move independently. The pairing
/// is re-chosen from current zone membership every frame.
pub fn stretch_frame(
    bx: &mut BoxModel,
    frame: &TrackingFrame,
    prev: Option<&TrackingFrame>,
    left_hand: ZoneSet,
    right_hand: ZoneSet,
) {
    if !bx.is_stretching {
        if opposite_pair(left_hand, right_hand) {
            bx.is_stretching = true;
        }
        return;
    }
    // No previous sample right after phase entry: zero-delta frame.
    let Some(prev) = prev else {
        return;
    };

    if left_hand.left && right_hand.right {
        let delta = (prev.left.x - frame.left.x) + (frame.right.x - prev.right.x);
        bx.left = frame.left.x;
        bx.width = (bx.width + delta).max(MIN_WIDTH);
    } else if left_hand.bottom && right_hand.top {
        let delta = (prev.right.y - frame.right.y) + (frame.left.y - prev.left.y);
        bx.top = frame.right.y;
        bx.height = (bx.height + delta).max(MIN_HEIGHT);
    } else if left_hand.top && right_hand.bottom {
        let delta = (prev.left.y - frame.left.y) + (frame.right.y - prev.right.y);
        bx.top = frame.left.y;
        bx.height = (bx.height + delta).max(MIN_HEIGHT);
    }
}

/// Scale: aspect-locked resize. The primary-axis delta is coupled through the
/// aspect ratio into the orthogonal axis, keeping the far corner anchored.
pub fn scale_frame(
    bx: &mut BoxModel,
    frame: &TrackingFrame,
    prev: Option<&TrackingFrame>,
    left_hand: ZoneSet,
    right_hand: ZoneSet,
) {
    if !bx.is_scaling {
        if opposite_pair(left_hand, right_hand) {
            bx.is_scaling = true;
        }
        return;
    }
    let Some(prev) = prev else {
        return;
    };
    let Some(aspect) = bx.aspect_ratio() else {
        // Undefined ratio cannot occur while the min-height invariant holds;
        // if it does, skip the frame rather than divide by zero.
        return;
    };

    if left_hand.left && right_hand.right {
        let raw = (prev.left.x - frame.left.x) + (frame.right.x - prev.right.x);
        let applied = clamp_scale_delta(raw, bx.width, MIN_WIDTH, bx.height, MIN_HEIGHT, 1.0 / aspect);
        bx.left = frame.left.x;
        bx.width += applied;
        // Bottom edge stays anchored: top gives back what height gains.
        bx.top -= applied / aspect;
        bx.height += applied / aspect;
    } else if left_hand.bottom && right_hand.top {
        let raw = (prev.right.y - frame.right.y) + (frame.left.y - prev.left.y);
        let applied = clamp_scale_delta(raw, bx.height, MIN_HEIGHT, bx.width, MIN_WIDTH, aspect);
        bx.top = frame.right.y;
        bx.height += applied;
        // Right edge stays anchored.
        bx.left -= applied * aspect;
        bx.width += applied * aspect;
    } else if left_hand.top && right_hand.bottom {
        let raw = (prev.left.y - frame.left.y) + (frame.right.y - prev.right.y);
        let applied = clamp_scale_delta(raw, bx.height, MIN_HEIGHT, bx.width, MIN_WIDTH, aspect);
        bx.top = frame.left.y;
        bx.height += applied;
        bx.left -= applied * aspect;
        bx.width += applied * aspect;
    }
}

/// Floors a shrink delta so both the primary axis and the coupled axis stay
/// at or above their minimums. The orthogonal compensation is then computed
/// from the clamped delta, so left/top never overshoot past a clamped edge.
fn clamp_scale_delta(
    raw: f64,
    primary: f64,
    primary_min: f64,
    coupled: f64,
    coupled_min: f64,
    coupling: f64,
) -> f64 {
    let floor = (primary_min - primary).max((coupled_min - coupled) / coupling);
    raw.max(floor)
}
