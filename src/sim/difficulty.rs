//! Difficulty progression
//!
//! A single monotonic level counter drives every pacing parameter. All four
//! derived parameters are one-way ratchets: they only move toward "harder"
//! until a full session reset restores the initial constants.

/// Level counter plus the pacing parameters derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Monotonic within a run; advances only via the level-up rule
    pub level: u32,
    /// Gap between bird spawns, floored at 500 ms
    pub bird_spawn_interval_ms: u64,
    /// Leftward bird speed in px/tick
    pub bird_speed: f32,
    /// Cloud population cap, 0 until level 1, then grows to at most 10
    pub max_clouds: u32,
    /// Gap between cloud bursts, floored at 1500 ms
    pub cloud_spawn_interval_ms: u64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            level: 0,
            bird_spawn_interval_ms: 1000,
            bird_speed: 2.0,
            max_clouds: 0,
            cloud_spawn_interval_ms: 3000,
        }
    }
}

impl Difficulty {
    /// The level-up rule: fires once per 20-point threshold the score has
    /// crossed, never twice for the same threshold.
    pub fn should_level_up(&self, score: u32) -> bool {
        score > 0 && score % 20 == 0 && self.level < score / 20
    }

    /// Ratchet every pacing parameter one step harder
    pub fn advance(&mut self) {
        self.level += 1;
        self.bird_spawn_interval_ms = self.bird_spawn_interval_ms.saturating_sub(50).max(500);
        self.bird_speed += 1.0;
        self.max_clouds = (self.max_clouds + 1).min(10);
        self.cloud_spawn_interval_ms = self.cloud_spawn_interval_ms.saturating_sub(200).max(1500);
    }
}
