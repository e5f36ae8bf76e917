//! Camera / interaction controller.
//!
//! Single authority that turns raw pointer and wheel input into either a
//! pass-through click (entities resolve it) or a camera drag, and that owns
//! the switch between automatic and user-driven camera control.
//!
//! ```text
//! Idle --down--> Armed --moved far enough--> Dragging
//!   ^              |                            |
//!   +------up------+ (click passes through)     +--up--> Idle (grace window)
//! ```

use crate::camera::OrbitCamera;
use crate::constants::{MOMENTUM_DAMPING, MOMENTUM_EPSILON};
use crate::gesture::{drag_should_start, GestureParams, PointerSample};
use crate::state::InteractionState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlState {
    Idle,
    Armed { origin: PointerSample },
    Dragging { origin: PointerSample, gesture: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not a drag (yet); entities may see the move (hover).
    PassThrough,
    /// This move crossed the drag threshold.
    DragStarted,
    /// Part of an ongoing drag; must not reach entities.
    Captured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No press was in progress.
    Ignored,
    /// The gesture never became a drag; entity click handlers may run.
    PassThrough,
    /// A drag ended; control is released after the grace window.
    DragEnded { gesture: u64 },
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    state: ControlState,
    last: Vec2,
    // x: pitch (polar), y: yaw (azimuth); consumed each frame
    rotation_delta: Vec2,
    velocity: Vec2,
    next_gesture: u64,
    latest_drag: Option<u64>,
    params: GestureParams,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(GestureParams::default())
    }
}

impl InteractionController {
    pub fn new(params: GestureParams) -> Self {
        Self {
            state: ControlState::Idle,
            last: Vec2::ZERO,
            rotation_delta: Vec2::ZERO,
            velocity: Vec2::ZERO,
            next_gesture: 1,
            latest_drag: None,
            params,
        }
    }

    pub fn params(&self) -> &GestureParams {
        &self.params
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ControlState::Dragging { .. })
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn pending_rotation(&self) -> Vec2 {
        self.rotation_delta
    }

    /// Arm a new gesture. A press during a drag (second touch, lost
    /// pointerup) is ignored so the drag still ends through its own release.
    pub fn pointer_down(&mut self, at: PointerSample) -> bool {
        if self.is_dragging() {
            log::debug!("[drag] press ignored while dragging");
            return false;
        }
        self.state = ControlState::Armed { origin: at };
        self.last = at.pos;
        true
    }

    pub fn pointer_move(
        &mut self,
        at: PointerSample,
        interaction: &mut InteractionState,
    ) -> MoveOutcome {
        match self.state {
            ControlState::Idle => MoveOutcome::PassThrough,
            ControlState::Armed { origin } => {
                if !drag_should_start(&origin, &at, &self.params) {
                    return MoveOutcome::PassThrough;
                }
                let gesture = self.next_gesture;
                self.next_gesture += 1;
                self.latest_drag = Some(gesture);
                self.state = ControlState::Dragging { origin, gesture };
                interaction.set_user_controlling(true);
                interaction.set_user_interacting(true);
                log::info!("[drag] start #{}", gesture);
                self.drag_step(at, interaction);
                MoveOutcome::DragStarted
            }
            ControlState::Dragging { .. } => {
                self.drag_step(at, interaction);
                MoveOutcome::Captured
            }
        }
    }

    fn drag_step(&mut self, at: PointerSample, interaction: &mut InteractionState) {
        let mut d = at.pos - self.last;
        if !d.is_finite() {
            d = Vec2::ZERO;
        }
        self.rotation_delta.x -= d.y * self.params.rotate_sensitivity;
        self.rotation_delta.y -= d.x * self.params.rotate_sensitivity;
        self.velocity = Vec2::new(-d.y, -d.x) * self.params.momentum_sensitivity;
        interaction.set_orbit_speed_multiplier(InteractionState::multiplier_for_drag(d.length()));
        self.last = at.pos;
    }

    pub fn pointer_up(&mut self, interaction: &mut InteractionState) -> ReleaseOutcome {
        match std::mem::replace(&mut self.state, ControlState::Idle) {
            ControlState::Idle => ReleaseOutcome::Ignored,
            ControlState::Armed { .. } => ReleaseOutcome::PassThrough,
            ControlState::Dragging { gesture, .. } => {
                interaction.set_user_interacting(false);
                log::info!("[drag] end #{}", gesture);
                ReleaseOutcome::DragEnded { gesture }
            }
        }
    }

    /// Pointer lost (cancel, capture lost): ends a drag like a release but
    /// never yields a click.
    pub fn pointer_cancel(&mut self, interaction: &mut InteractionState) -> ReleaseOutcome {
        match self.pointer_up(interaction) {
            ReleaseOutcome::PassThrough => ReleaseOutcome::Ignored,
            other => other,
        }
    }

    /// End of the grace window after drag `gesture`. Hands the camera back
    /// unless a newer drag has started since.
    pub fn release_control(&mut self, gesture: u64, interaction: &mut InteractionState) -> bool {
        if self.is_dragging() || self.latest_drag != Some(gesture) {
            return false;
        }
        interaction.set_user_controlling(false);
        interaction.set_orbit_speed_multiplier(1.0);
        self.rotation_delta = Vec2::ZERO;
        log::info!("[drag] control released after #{}", gesture);
        true
    }

    pub fn wheel(&mut self, delta_y: f32, camera: &mut OrbitCamera) {
        camera.zoom(delta_y);
    }

    /// Per-frame camera step: consume the drag rotation, then coast on
    /// momentum whenever no drag is in progress.
    pub fn update_camera(&mut self, camera: &mut OrbitCamera, interaction: &InteractionState) {
        if interaction.is_user_controlling() && self.rotation_delta != Vec2::ZERO {
            camera.rotate(self.rotation_delta.x, self.rotation_delta.y);
            self.rotation_delta = Vec2::ZERO;
        }
        if self.is_dragging() {
            return;
        }
        if self.velocity.length() > MOMENTUM_EPSILON {
            camera.rotate(self.velocity.x, self.velocity.y);
            self.velocity *= MOMENTUM_DAMPING;
        } else {
            self.velocity = Vec2::ZERO;
        }
    }
}
