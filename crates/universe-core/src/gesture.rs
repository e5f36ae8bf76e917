//! Pointer samples and the click-versus-drag classification.

use crate::constants::*;
use crate::state::InteractionState;
use glam::Vec2;

/// A pointer position in CSS pixels plus the session time it was seen at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub t_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, t_ms: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            t_ms,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GestureParams {
    pub click_time_ms: f64,
    pub click_distance_px: f32,
    pub drag_arm_px: f32,
    pub drag_commit_px: f32,
    pub drag_commit_ms: f64,
    pub rotate_sensitivity: f32,
    pub momentum_sensitivity: f32,
    pub control_grace_ms: f64,
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            click_time_ms: CLICK_TIME_THRESHOLD_MS,
            click_distance_px: CLICK_DISTANCE_THRESHOLD_PX,
            drag_arm_px: DRAG_ARM_DISTANCE_PX,
            drag_commit_px: DRAG_COMMIT_DISTANCE_PX,
            drag_commit_ms: DRAG_COMMIT_TIME_MS,
            rotate_sensitivity: ROTATE_SENSITIVITY,
            momentum_sensitivity: MOMENTUM_SENSITIVITY,
            control_grace_ms: CONTROL_GRACE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Click,
    /// Pointer travelled too far; part of a drag.
    Moved,
    /// Held too long, regardless of distance.
    TooSlow,
}

/// Euclidean pixel distance; a degenerate (non-finite) result counts as
/// "very far" so it can never classify as a click.
#[inline]
pub fn pointer_distance(a: Vec2, b: Vec2) -> f32 {
    let d = a.distance(b);
    if d.is_finite() {
        d
    } else {
        f32::MAX
    }
}

#[inline]
fn elapsed_ms(from: &PointerSample, to: &PointerSample) -> f64 {
    let dt = to.t_ms - from.t_ms;
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        f64::MAX
    }
}

pub fn classify_click(
    down: &PointerSample,
    up: &PointerSample,
    params: &GestureParams,
) -> ClickOutcome {
    if elapsed_ms(down, up) >= params.click_time_ms {
        return ClickOutcome::TooSlow;
    }
    if pointer_distance(down.pos, up.pos) >= params.click_distance_px {
        return ClickOutcome::Moved;
    }
    ClickOutcome::Click
}

/// Whether an armed press has turned into a drag: it must have left the arm
/// radius and then either moved a lot or been held a little while.
pub fn drag_should_start(
    origin: &PointerSample,
    now: &PointerSample,
    params: &GestureParams,
) -> bool {
    let dist = pointer_distance(origin.pos, now.pos);
    dist > params.drag_arm_px
        && (dist > params.drag_commit_px || elapsed_ms(origin, now) > params.drag_commit_ms)
}

/// Per-entity press bookkeeping for click detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickTracker {
    pending: Option<PointerSample>,
}

impl ClickTracker {
    /// Record a press. Ignored while the camera owns the pointer.
    pub fn press(&mut self, at: PointerSample, interaction: &InteractionState) -> bool {
        if interaction.pointer_captured() {
            self.pending = None;
            return false;
        }
        self.pending = Some(at);
        true
    }

    /// Resolve the gesture. Always clears the pending press.
    pub fn release(
        &mut self,
        at: PointerSample,
        interaction: &InteractionState,
        params: &GestureParams,
    ) -> bool {
        let Some(origin) = self.pending.take() else {
            return false;
        };
        if interaction.pointer_captured() {
            return false;
        }
        classify_click(&origin, &at, params) == ClickOutcome::Click
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<PointerSample> {
        self.pending
    }
}
