//! Game state and core simulation types
//!
//! Entities are passive simulation records. Rendering attributes (sprite
//! frame, tilt, alpha) are derived from them, never authoritative.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::difficulty::Difficulty;
use crate::consts::*;
use crate::ticks_to_ms;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, presentation-layer modal is up
    Paused,
    /// Run ended, awaiting restart/menu/quit
    GameOver,
}

/// Bird plumage variants - cosmetic only, never affects behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdColor {
    Blue,
    Grey,
    Red,
    Yellow,
}

impl BirdColor {
    pub const ALL: [BirdColor; 4] = [
        BirdColor::Blue,
        BirdColor::Grey,
        BirdColor::Red,
        BirdColor::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BirdColor::Blue => "blue",
            BirdColor::Grey => "grey",
            BirdColor::Red => "red",
            BirdColor::Yellow => "yellow",
        }
    }
}

/// Something notable that happened during a tick
///
/// The session layer maps these to audio cues; the sim itself never
/// touches audio or rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BulletFired,
    BirdShot { at: Vec2 },
    PlayerHitBird { at: Vec2 },
    CloudHit { at: Vec2 },
    HeartCollected { at: Vec2 },
    LevelUp { level: u32 },
    GameOver { score: u32 },
}

/// The player's aircraft
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Remaining lives, always in 0..=3
    pub lives: u8,
    /// Only ever increases within a run
    pub score: u32,
    /// Visual tilt in degrees (+15 climbing, -15 diving, 0 level)
    pub tilt: f32,
    pub anim_phase: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, FIELD_HEIGHT / 2.0),
            lives: MAX_LIVES,
            score: 0,
            tilt: 0.0,
            anim_phase: 0.0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    /// Where bullets leave the aircraft
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + PLAYER_WIDTH, self.pos.y + PLAYER_HEIGHT / 2.0)
    }

    /// Current sprite frame (2-frame flap cycle)
    pub fn frame(&self) -> usize {
        self.anim_phase as usize % PLAYER_FRAMES as usize
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player bullet, travelling rightward at fixed speed
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub anim_phase: f32,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            anim_phase: 0.0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(BULLET_SIZE))
    }

    pub fn frame(&self) -> usize {
        self.anim_phase as usize % BULLET_FRAMES as usize
    }
}

/// An incoming bird, travelling leftward
#[derive(Debug, Clone)]
pub struct Bird {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub color: BirdColor,
    /// Leftward speed in px/tick, fixed at spawn from the difficulty state
    pub speed: f32,
    pub anim_phase: f32,
}

impl Bird {
    pub fn new(id: u32, pos: Vec2, color: BirdColor, speed: f32) -> Self {
        Self {
            id,
            pos,
            color,
            speed,
            anim_phase: 0.0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BIRD_WIDTH, BIRD_HEIGHT))
    }

    pub fn frame(&self) -> usize {
        self.anim_phase as usize % BIRD_FRAMES as usize
    }
}

/// A cloud hazard, travelling leftward slightly slower than birds
#[derive(Debug, Clone)]
pub struct Cloud {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
}

impl Cloud {
    pub fn new(id: u32, pos: Vec2, speed: f32) -> Self {
        Self { id, pos, speed }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT))
    }
}

/// A collectable extra life, only spawned while the player is hurt
#[derive(Debug, Clone)]
pub struct HeartPickup {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
}

impl HeartPickup {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self { id, pos }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(HEART_SIZE))
    }
}

/// Short-lived blast marker left behind by a collision. Visual only.
#[derive(Debug, Clone)]
pub struct Explosion {
    /// Center of the blast
    pub pos: Vec2,
    /// Simulation time when spawned; expires after EXPLOSION_LIFETIME_MS
    pub spawned_ms: u64,
}

impl Explosion {
    pub fn new(pos: Vec2, spawned_ms: u64) -> Self {
        Self { pos, spawned_ms }
    }
}

/// Fading sparkle left behind by a collected heart. Visual only.
#[derive(Debug, Clone)]
pub struct PickupEffect {
    /// Center of the effect; drifts upward while fading
    pub pos: Vec2,
    pub alpha: f32,
}

impl PickupEffect {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            alpha: PICKUP_EFFECT_ALPHA,
        }
    }

    /// Opacity in 0..=1 for renderers
    pub fn alpha_norm(&self) -> f32 {
        (self.alpha / PICKUP_EFFECT_ALPHA).clamp(0.0, 1.0)
    }
}

/// Complete game state for one run (deterministic given seed + inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single source of all randomness (spawn jitter, rows, colors)
    pub(crate) rng: Pcg32,
    /// Simulation tick counter; wall time is derived, never read
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub birds: Vec<Bird>,
    pub clouds: Vec<Cloud>,
    pub hearts: Vec<HeartPickup>,
    pub explosions: Vec<Explosion>,
    pub pickup_effects: Vec<PickupEffect>,
    pub difficulty: Difficulty,
    /// Spawn schedule deadlines, in derived simulation milliseconds
    pub next_bird_ms: u64,
    pub next_heart_ms: u64,
    pub next_cloud_ms: u64,
    /// Last successful fire time; gates the bullet cooldown
    pub last_fire_ms: u64,
    /// Next entity ID; never reused within a run
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let difficulty = Difficulty::default();
        // First cloud burst window opens somewhere in the initial interval
        let next_cloud_ms = rng.random_range(500..=difficulty.cloud_spawn_interval_ms);
        Self {
            seed,
            rng,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(),
            bullets: Vec::new(),
            birds: Vec::new(),
            clouds: Vec::new(),
            hearts: Vec::new(),
            explosions: Vec::new(),
            pickup_effects: Vec::new(),
            difficulty,
            next_bird_ms: 0,
            next_heart_ms: 0,
            next_cloud_ms,
            last_fire_ms: 0,
            next_id: 1,
        }
    }

    /// Monotonic simulation time in milliseconds
    pub fn now_ms(&self) -> u64 {
        ticks_to_ms(self.time_ticks)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the level-up banner is showing.
    ///
    /// Only the first three thresholds show the banner; the difficulty
    /// ratchet itself keeps firing at every later multiple of 20.
    pub fn level_banner_visible(&self) -> bool {
        matches!(self.player.score, 20 | 40 | 60)
    }
}
