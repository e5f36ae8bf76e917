// Shared animation/interaction tuning constants used by the scene core.
//
// Times are milliseconds unless the name says otherwise; distances on screen
// are CSS pixels; world distances are scene units.

// Entrance sequence timing
pub const WALK_START_DELAY_MS: f64 = 1000.0; // loaded -> walking
pub const WELCOME_DELAY_MS: f64 = 3000.0; // arrived -> welcome shown
pub const SCATTER_DELAY_MS: f64 = 2000.0; // welcome shown -> scattering
pub const IDLE_DELAY_MS: f64 = 3000.0; // scattering -> idle

// Navigation timing
pub const CLICK_NAVIGATE_DELAY_MS: f64 = 200.0; // lets the hit cue play first
pub const SECTION_TRANSITION_MS: f64 = 300.0; // top-level navigation cross-fade

// Click vs drag
pub const CLICK_TIME_THRESHOLD_MS: f64 = 300.0;
pub const CLICK_DISTANCE_THRESHOLD_PX: f32 = 8.0;
pub const DRAG_ARM_DISTANCE_PX: f32 = 8.0; // movement needed before a drag is considered
pub const DRAG_COMMIT_DISTANCE_PX: f32 = 15.0; // ...then either this much movement
pub const DRAG_COMMIT_TIME_MS: f64 = 100.0; // ...or this much time

// Camera control
pub const ROTATE_SENSITIVITY: f32 = 0.01; // radians per pixel of drag
pub const MOMENTUM_SENSITIVITY: f32 = 0.001; // radians per frame per pixel of last move
pub const MOMENTUM_DAMPING: f32 = 0.95; // per frame
pub const MOMENTUM_EPSILON: f32 = 0.001;
pub const CONTROL_GRACE_MS: f64 = 2000.0; // control kept after release
pub const DRAG_SLOWDOWN_PER_PX: f32 = 0.01; // orbit multiplier drop per pixel of move
pub const MIN_ORBIT_MULTIPLIER: f32 = 0.1;
pub const POLAR_MARGIN: f32 = 0.1; // keeps the camera off the poles
pub const ZOOM_PER_DELTA: f32 = 0.001;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;
pub const CAMERA_START: [f32; 3] = [0.0, 5.0, 15.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbiting bodies
pub const ORBIT_SPEED_SCALE: f32 = 0.3; // slows every body's base angular speed
pub const BODY_SPIN_RATE: f32 = 0.6; // self-rotation, radians per second
pub const HOVER_SCALE: f32 = 1.1;
pub const RING_MIN_BODY_SIZE: f32 = 1.0;
pub const SUN_RADIUS: f32 = 0.5;

// Character
pub const CHARACTER_START_X: f32 = -12.0;
pub const WALK_SPEED: f32 = 2.0; // units per second
pub const WALK_CYCLE_RATE: f32 = 5.0;
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const BOB_FREQUENCY: f32 = 2.0;
pub const FLOAT_AMPLITUDE: f32 = 0.2;
pub const FLOAT_FREQUENCY: f32 = 0.5;
pub const LIMB_SWING: f32 = 0.3;
pub const BODY_TILT: f32 = 0.1;
pub const CHARACTER_PICK_RADIUS: f32 = 1.2;

// Flock
pub const FLOCK_SIZE: usize = 12;
pub const FLOCK_SENTINEL: [f32; 3] = [1000.0, 1000.0, 1000.0];
pub const FLOCK_WANDER: f32 = 0.1;
pub const FLOCK_HOP: f32 = 0.05;

// Starfield
pub const STAR_COUNT: usize = 2000;
pub const STAR_FIELD_HALF_EXTENT: f32 = 100.0;

// Interaction instructions overlay
pub const INSTRUCTIONS_HIDE_DELAY_MS: f64 = 3000.0;
