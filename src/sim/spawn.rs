//! Time-gated entity spawning
//!
//! Each kind keeps a deadline in simulation milliseconds; when the clock
//! passes it, the spawner emits the entity and reschedules with jitter from
//! the run's RNG. The spawner only mutates entity collections - audio and
//! rendering never happen here.

use glam::Vec2;
use rand::Rng;

use super::state::{Bird, BirdColor, Cloud, GameState, HeartPickup};
use crate::consts::*;

/// Run every spawn rule that is due this tick
pub(crate) fn spawn_due(state: &mut GameState) {
    spawn_birds(state);
    spawn_hearts(state);
    spawn_clouds(state);
}

/// Random row inside the playable band
fn spawn_row(state: &mut GameState) -> f32 {
    state
        .rng
        .random_range(PADDING_Y..=(FIELD_HEIGHT - PADDING_Y * 2.0))
}

fn spawn_birds(state: &mut GameState) {
    let now = state.now_ms();
    if now <= state.next_bird_ms {
        return;
    }

    let y = spawn_row(state);
    let color = BirdColor::ALL[state.rng.random_range(0..BirdColor::ALL.len())];
    let speed = state.difficulty.bird_speed;
    let id = state.next_entity_id();
    state
        .birds
        .push(Bird::new(id, Vec2::new(FIELD_WIDTH, y), color, speed));

    let jitter: i64 = state.rng.random_range(-200..=200);
    state.next_bird_ms =
        (now + state.difficulty.bird_spawn_interval_ms).saturating_add_signed(jitter);
}

fn spawn_hearts(state: &mut GameState) {
    // Hearts only appear while the player is hurt
    if state.player.lives >= MAX_LIVES {
        return;
    }
    let now = state.now_ms();
    if now <= state.next_heart_ms {
        return;
    }

    let y = spawn_row(state);
    let id = state.next_entity_id();
    state
        .hearts
        .push(HeartPickup::new(id, Vec2::new(FIELD_WIDTH, y)));

    state.next_heart_ms = now + state.rng.random_range(4000..=7000);
}

fn spawn_clouds(state: &mut GameState) {
    // Clouds are held back entirely until the first level-up
    if state.difficulty.level < 1 {
        return;
    }
    let cap = state.difficulty.max_clouds as usize;
    if state.clouds.len() >= cap {
        return;
    }
    let now = state.now_ms();
    if now <= state.next_cloud_ms {
        return;
    }

    // Burst of 3-5, clamped so the population never exceeds the cap
    let burst: usize = state.rng.random_range(3..=5);
    let burst = burst.min(cap - state.clouds.len());
    let speed = (state.difficulty.bird_speed - 1.0).max(CLOUD_MIN_SPEED);

    for i in 0..burst {
        // Stagger each cloud of the burst so they never stack exactly
        let offset = i as f32 * state.rng.random_range(50.0..=100.0);
        let y = spawn_row(state);
        let id = state.next_entity_id();
        state
            .clouds
            .push(Cloud::new(id, Vec2::new(FIELD_WIDTH + offset, y), speed));
    }

    state.next_cloud_ms =
        now + state
            .rng
            .random_range(1500..=state.difficulty.cloud_spawn_interval_ms);
}
