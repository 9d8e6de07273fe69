//! Fixed timestep simulation tick
//!
//! One call advances the whole run by a single step, in a fixed order:
//! input, fire control, spawning, movement, collisions, difficulty,
//! terminal check. Destruction is exclusive within a tick - an entity
//! consumed by one collision can never register a second one.

use glam::Vec2;

use super::spawn;
use super::state::{Bullet, Explosion, GameEvent, GamePhase, GameState, PickupEffect};
use crate::consts::*;

/// Input snapshot for a single tick, polled once by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
///
/// Returns the notable events of the tick, in the order they happened.
/// A paused or finished run advances nothing and reports nothing.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Paused | GamePhase::GameOver => return events,
    }

    state.time_ticks += 1;
    let now = state.now_ms();

    // 1. Vertical movement, clamped to the padding band. Up wins when both
    //    directions are held; tilt is only set while actually moving.
    let player = &mut state.player;
    if input.up && player.pos.y > PADDING_Y {
        player.pos.y = (player.pos.y - PLAYER_CLIMB_SPEED).max(PADDING_Y);
        player.tilt = PLAYER_TILT_DEG;
    } else if input.down && player.pos.y + PLAYER_HEIGHT < FIELD_HEIGHT - PADDING_Y {
        player.pos.y =
            (player.pos.y + PLAYER_CLIMB_SPEED).min(FIELD_HEIGHT - PADDING_Y - PLAYER_HEIGHT);
        player.tilt = -PLAYER_TILT_DEG;
    } else {
        player.tilt = 0.0;
    }

    // 2. Fire control, rate-limited by the cooldown window
    if input.fire && now.saturating_sub(state.last_fire_ms) >= BULLET_COOLDOWN_MS {
        let muzzle = state.player.muzzle();
        let id = state.next_entity_id();
        state.bullets.push(Bullet::new(id, muzzle));
        state.last_fire_ms = now;
        events.push(GameEvent::BulletFired);
    }

    // 3. Spawner pass
    spawn::spawn_due(state);

    // 4. Advance every active entity; off-field entities self-destroy
    advance_entities(state, now);

    // 5. Collision resolution, fixed order
    resolve_collisions(state, now, &mut events);

    // 6. Difficulty check
    if state.difficulty.should_level_up(state.player.score) {
        state.difficulty.advance();
        events.push(GameEvent::LevelUp {
            level: state.difficulty.level,
        });
    }

    // 7. Terminal check
    if state.player.lives == 0 {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver {
            score: state.player.score,
        });
    }

    events
}

fn advance_entities(state: &mut GameState, now: u64) {
    let player = &mut state.player;
    player.anim_phase = (player.anim_phase + 1.0) % PLAYER_FRAMES as f32;

    for bullet in &mut state.bullets {
        bullet.pos.x += BULLET_SPEED;
        bullet.anim_phase = (bullet.anim_phase + 0.2) % BULLET_FRAMES as f32;
    }
    state.bullets.retain(|b| b.pos.x <= FIELD_WIDTH);

    for bird in &mut state.birds {
        bird.pos.x -= bird.speed;
        bird.anim_phase = (bird.anim_phase + 0.25) % BIRD_FRAMES as f32;
    }
    state.birds.retain(|b| b.pos.x + BIRD_WIDTH > 0.0);

    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud.speed;
    }
    state.clouds.retain(|c| c.pos.x + CLOUD_WIDTH > 0.0);

    for heart in &mut state.hearts {
        heart.pos.x -= HEART_SPEED;
    }
    state.hearts.retain(|h| h.pos.x + HEART_SIZE > 0.0);

    state
        .explosions
        .retain(|e| now.saturating_sub(e.spawned_ms) <= EXPLOSION_LIFETIME_MS);

    for effect in &mut state.pickup_effects {
        effect.alpha -= PICKUP_EFFECT_FADE;
        effect.pos.y -= PICKUP_EFFECT_RISE;
    }
    state.pickup_effects.retain(|e| e.alpha > 0.0);
}

fn resolve_collisions(state: &mut GameState, now: u64, events: &mut Vec<GameEvent>) {
    let player_rect = state.player.rect();

    // a. Player x Bird: the bird is consumed, one life lost per bird
    let mut rammed: Vec<Vec2> = Vec::new();
    state.birds.retain(|bird| {
        if bird.rect().overlaps(&player_rect) {
            rammed.push(bird.rect().center());
            false
        } else {
            true
        }
    });
    for at in rammed {
        state.player.lives = state.player.lives.saturating_sub(1);
        state.explosions.push(Explosion::new(at, now));
        events.push(GameEvent::PlayerHitBird { at });
    }

    // b. Bullet x Bird: both consumed; every bird overlapping one bullet
    //    pass is scored independently
    let mut shot: Vec<Vec2> = Vec::new();
    let birds = &mut state.birds;
    state.bullets.retain(|bullet| {
        let bullet_rect = bullet.rect();
        let before = birds.len();
        birds.retain(|bird| {
            if bird.rect().overlaps(&bullet_rect) {
                shot.push(bird.rect().center());
                false
            } else {
                true
            }
        });
        birds.len() == before
    });
    for at in shot {
        state.player.score += 1;
        state.explosions.push(Explosion::new(at, now));
        events.push(GameEvent::BirdShot { at });
    }

    // c. Player x HeartPickup: capped heal plus a fading sparkle
    let mut collected: Vec<Vec2> = Vec::new();
    state.hearts.retain(|heart| {
        if heart.rect().overlaps(&player_rect) {
            collected.push(heart.rect().center());
            false
        } else {
            true
        }
    });
    for at in collected {
        state.player.lives = (state.player.lives + 1).min(MAX_LIVES);
        state.pickup_effects.push(PickupEffect::new(at));
        events.push(GameEvent::HeartCollected { at });
    }

    // d. Player x Cloud: the cloud is consumed, one life lost per cloud
    let mut clipped: Vec<Vec2> = Vec::new();
    state.clouds.retain(|cloud| {
        if cloud.rect().overlaps(&player_rect) {
            clipped.push(cloud.rect().center());
            false
        } else {
            true
        }
    });
    for at in clipped {
        state.player.lives = state.player.lives.saturating_sub(1);
        state.explosions.push(Explosion::new(at, now));
        events.push(GameEvent::CloudHit { at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bird, BirdColor, Cloud, HeartPickup};
    use proptest::prelude::*;

    /// A state with all timed spawning pushed out of the way, so tests
    /// control exactly which entities exist.
    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.next_bird_ms = u64::MAX;
        state.next_heart_ms = u64::MAX;
        state.next_cloud_ms = u64::MAX;
        state
    }

    fn run_ticks(state: &mut GameState, input: &TickInput, n: u32) -> Vec<GameEvent> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(tick(state, input));
        }
        all
    }

    /// Enough ticks for the initial fire cooldown window to expire
    fn warm_up(state: &mut GameState) {
        run_ticks(state, &TickInput::default(), 61);
        assert!(state.now_ms() > BULLET_COOLDOWN_MS);
    }

    fn add_bird(state: &mut GameState, pos: Vec2, speed: f32) {
        let id = state.next_entity_id();
        state
            .birds
            .push(Bird::new(id, pos, BirdColor::Blue, speed));
    }

    #[test]
    fn up_wins_over_down() {
        let mut state = quiet_state();
        let start_y = state.player.pos.y;
        let input = TickInput {
            up: true,
            down: true,
            fire: false,
        };
        tick(&mut state, &input);
        assert_eq!(state.player.pos.y, start_y - PLAYER_CLIMB_SPEED);
        assert_eq!(state.player.tilt, PLAYER_TILT_DEG);
    }

    #[test]
    fn movement_clamps_to_padding_band() {
        let mut state = quiet_state();
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        run_ticks(&mut state, &up, 500);
        assert!(state.player.pos.y >= PADDING_Y);

        let down = TickInput {
            down: true,
            ..Default::default()
        };
        run_ticks(&mut state, &down, 1000);
        assert!(state.player.pos.y + PLAYER_HEIGHT <= FIELD_HEIGHT - PADDING_Y);
    }

    #[test]
    fn tilt_resets_when_pinned_at_the_boundary() {
        let mut state = quiet_state();
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        run_ticks(&mut state, &up, 500);
        // Held against the top edge: no movement, so no tilt
        tick(&mut state, &up);
        assert_eq!(state.player.tilt, 0.0);
    }

    #[test]
    fn fire_within_cooldown_yields_one_bullet() {
        let mut state = quiet_state();
        warm_up(&mut state);

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        // Hold fire across many ticks well inside one cooldown window
        let events = run_ticks(&mut state, &fire, 30);
        let fired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BulletFired))
            .count();
        assert_eq!(fired, 1);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn fire_resumes_after_cooldown() {
        let mut state = quiet_state();
        warm_up(&mut state);

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        // Held trigger across one full cooldown window
        let events = run_ticks(&mut state, &fire, 65);
        let fired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BulletFired))
            .count();
        assert_eq!(fired, 2);
    }

    #[test]
    fn bullet_spawns_at_the_muzzle() {
        let mut state = quiet_state();
        warm_up(&mut state);
        let muzzle = state.player.muzzle();

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);
        assert_eq!(state.bullets.len(), 1);
        // One tick of travel after spawning
        assert_eq!(state.bullets[0].pos.x, muzzle.x + BULLET_SPEED);
    }

    #[test]
    fn bullet_hit_scores_and_removes_bird() {
        let mut state = quiet_state();
        add_bird(&mut state, Vec2::new(300.0, 200.0), 2.0);
        let id = state.next_entity_id();
        state
            .bullets
            .push(Bullet::new(id, Vec2::new(300.0, 200.0)));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.score, 1);
        assert!(state.birds.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert!(events.iter().any(|e| matches!(e, GameEvent::BirdShot { .. })));
    }

    #[test]
    fn one_bullet_scores_every_overlapping_bird() {
        let mut state = quiet_state();
        add_bird(&mut state, Vec2::new(300.0, 195.0), 2.0);
        add_bird(&mut state, Vec2::new(305.0, 205.0), 2.0);
        let id = state.next_entity_id();
        state
            .bullets
            .push(Bullet::new(id, Vec2::new(300.0, 200.0)));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.score, 2);
        assert!(state.birds.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn player_collision_costs_a_life_and_removes_bird() {
        let mut state = quiet_state();
        let player_center = state.player.rect().center();
        add_bird(&mut state, player_center, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, MAX_LIVES - 1);
        assert!(state.birds.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerHitBird { .. })));
        // Score untouched by a ram
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn rammed_bird_is_not_also_shot() {
        // A bird overlapping both the player and a bullet is consumed by
        // the player collision alone.
        let mut state = quiet_state();
        let player_center = state.player.rect().center();
        add_bird(&mut state, player_center, 0.0);
        let id = state.next_entity_id();
        state.bullets.push(Bullet::new(id, player_center));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, MAX_LIVES - 1);
        assert_eq!(state.player.score, 0);
        // The bullet flies on, having hit nothing
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn heart_heals_capped_at_three() {
        let mut state = quiet_state();
        state.player.lives = 2;
        let player_center = state.player.rect().center();
        let id = state.next_entity_id();
        state.hearts.push(HeartPickup::new(id, player_center));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, 3);
        assert!(state.hearts.is_empty());
        assert_eq!(state.pickup_effects.len(), 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::HeartCollected { .. })));

        // Already full: a second heart still caps at three
        let id = state.next_entity_id();
        state.hearts.push(HeartPickup::new(id, player_center));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, 3);
    }

    #[test]
    fn cloud_collision_costs_a_life() {
        let mut state = quiet_state();
        let player_center = state.player.rect().center();
        let id = state.next_entity_id();
        state.clouds.push(Cloud::new(id, player_center, 0.0));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, MAX_LIVES - 1);
        assert!(state.clouds.is_empty());
        assert!(events.iter().any(|e| matches!(e, GameEvent::CloudHit { .. })));
    }

    #[test]
    fn level_up_fires_exactly_at_new_thresholds() {
        let mut state = quiet_state();
        state.player.score = 19;
        add_bird(&mut state, Vec2::new(300.0, 200.0), 2.0);
        let id = state.next_entity_id();
        state
            .bullets
            .push(Bullet::new(id, Vec2::new(300.0, 200.0)));

        // 19 -> 20: exactly one level-up
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.score, 20);
        assert_eq!(state.difficulty.level, 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { level: 1 })));

        // 20 -> 21: none
        add_bird(&mut state, Vec2::new(300.0, 200.0), 2.0);
        let id = state.next_entity_id();
        state
            .bullets
            .push(Bullet::new(id, Vec2::new(300.0, 200.0)));
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.player.score, 21);
        assert_eq!(state.difficulty.level, 1);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::LevelUp { .. })));
    }

    #[test]
    fn zero_lives_ends_the_run() {
        let mut state = quiet_state();
        state.player.lives = 1;
        let player_center = state.player.rect().center();
        add_bird(&mut state, player_center, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { score: 0 })));

        // Finished runs ignore further input entirely
        let ticks_before = state.time_ticks;
        let events = tick(
            &mut state,
            &TickInput {
                up: true,
                fire: true,
                ..Default::default()
            },
        );
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, ticks_before);
    }

    #[test]
    fn paused_run_advances_nothing() {
        let mut state = quiet_state();
        state.phase = GamePhase::Paused;
        let events = tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 0);
        state.phase = GamePhase::Playing;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn entities_despawn_off_field() {
        let mut state = quiet_state();
        add_bird(&mut state, Vec2::new(-BIRD_WIDTH + 1.0, 200.0), 2.0);
        let id = state.next_entity_id();
        state
            .bullets
            .push(Bullet::new(id, Vec2::new(FIELD_WIDTH - 1.0, 200.0)));

        tick(&mut state, &TickInput::default());
        assert!(state.birds.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn explosions_age_out() {
        let mut state = quiet_state();
        let player_center = state.player.rect().center();
        add_bird(&mut state, player_center, 0.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.explosions.len(), 1);

        // 300 ms at 120 Hz is 36 ticks; go comfortably past
        run_ticks(&mut state, &TickInput::default(), 40);
        assert!(state.explosions.is_empty());
    }

    #[test]
    fn pickup_effect_fades_and_rises() {
        let mut state = quiet_state();
        state.player.lives = 2;
        let player_center = state.player.rect().center();
        let id = state.next_entity_id();
        state.hearts.push(HeartPickup::new(id, player_center));
        tick(&mut state, &TickInput::default());

        let y0 = state.pickup_effects[0].pos.y;
        tick(&mut state, &TickInput::default());
        assert!(state.pickup_effects[0].pos.y < y0);
        assert!(state.pickup_effects[0].alpha < PICKUP_EFFECT_ALPHA);

        // 255 / 5 per tick: gone within 52 more ticks
        run_ticks(&mut state, &TickInput::default(), 52);
        assert!(state.pickup_effects.is_empty());
    }

    #[test]
    fn same_seed_same_script_is_deterministic() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        let script = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..300 {
            for input in &script {
                let ea = tick(&mut a, input);
                let eb = tick(&mut b, input);
                assert_eq!(ea, eb);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.birds.len(), b.birds.len());
        assert_eq!(a.next_bird_ms, b.next_bird_ms);
        assert_eq!(a.next_cloud_ms, b.next_cloud_ms);
    }

    proptest! {
        /// Core invariants hold for arbitrary seeds and input scripts:
        /// lives stay in 0..=3, score never decreases, the cloud population
        /// never exceeds its cap, and the difficulty level never regresses.
        #[test]
        fn invariants_hold_for_random_scripts(
            seed in any::<u64>(),
            script in proptest::collection::vec(
                (any::<bool>(), any::<bool>(), any::<bool>()),
                1..600,
            ),
        ) {
            let mut state = GameState::new(seed);
            let mut last_score = 0u32;
            let mut last_level = 0u32;

            for (up, down, fire) in script {
                tick(&mut state, &TickInput { up, down, fire });

                prop_assert!(state.player.lives <= MAX_LIVES);
                prop_assert!(state.player.score >= last_score);
                prop_assert!(
                    state.clouds.len() <= state.difficulty.max_clouds as usize
                );
                prop_assert!(state.difficulty.level >= last_level);
                prop_assert!(state.player.pos.y >= PADDING_Y);
                prop_assert!(
                    state.player.pos.y + PLAYER_HEIGHT <= FIELD_HEIGHT - PADDING_Y
                );

                last_score = state.player.score;
                last_level = state.difficulty.level;
            }
        }
    }
}
