//! Bird Shooter - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring)
//! - `session`: Run/reset/game-over state machine driving the sim
//! - `audio`: Fire-and-forget sound cue boundary
//! - `render`: Read-only drawing boundary
//! - `platform`: Wall clock and frame pacing for the native runner

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, Cue};
pub use highscores::HighScores;
pub use session::{EndChoice, Session, SessionPhase};
pub use settings::AudioSettings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (matches the original 120 fps frame cap)
    pub const TICK_HZ: u32 = 120;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    /// Vertical band at the top and bottom the player cannot enter
    pub const PADDING_Y: f32 = 50.0;

    /// Player defaults - fixed start position at the left edge
    pub const PLAYER_START_X: f32 = 30.0;
    pub const PLAYER_WIDTH: f32 = 70.0;
    pub const PLAYER_HEIGHT: f32 = 45.0;
    /// Vertical movement per tick while a direction key is held
    pub const PLAYER_CLIMB_SPEED: f32 = 2.0;
    /// Visual tilt while climbing/diving (degrees)
    pub const PLAYER_TILT_DEG: f32 = 15.0;
    pub const PLAYER_FRAMES: u32 = 2;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 20.0;
    pub const BULLET_SPEED: f32 = 4.0;
    pub const BULLET_COOLDOWN_MS: u64 = 500;
    pub const BULLET_FRAMES: u32 = 4;

    /// Bird defaults
    pub const BIRD_WIDTH: f32 = 50.0;
    pub const BIRD_HEIGHT: f32 = 35.0;
    pub const BIRD_FRAMES: u32 = 4;

    /// Cloud hazard defaults
    pub const CLOUD_WIDTH: f32 = 100.0;
    pub const CLOUD_HEIGHT: f32 = 60.0;
    /// Clouds always drift at least this fast
    pub const CLOUD_MIN_SPEED: f32 = 1.0;

    /// Heart pickup defaults
    pub const HEART_SIZE: f32 = 30.0;
    pub const HEART_SPEED: f32 = 2.0;
    pub const MAX_LIVES: u8 = 3;

    /// Short-lived visual entities
    pub const EXPLOSION_LIFETIME_MS: u64 = 300;
    pub const PICKUP_EFFECT_ALPHA: f32 = 255.0;
    pub const PICKUP_EFFECT_FADE: f32 = 5.0;
    pub const PICKUP_EFFECT_RISE: f32 = 1.0;
}

/// Convert a tick counter to monotonic simulation time in milliseconds
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_HZ as u64
}
