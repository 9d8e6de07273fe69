//! Bird Shooter entry point
//!
//! Headless demo loop: a tiny autopilot flies the aircraft at the fixed
//! simulation rate until the run ends, logging cues and the final score.
//! Frontends embed the library and replace the autopilot with real input.

use std::time::{SystemTime, UNIX_EPOCH};

use bird_shooter::audio::LogAudio;
use bird_shooter::consts::TICK_HZ;
use bird_shooter::platform::FramePacer;
use bird_shooter::render::{NullRenderer, Renderer};
use bird_shooter::sim::{GameState, TickInput};
use bird_shooter::{EndChoice, Session, SessionPhase};

/// Chase the nearest bird's row, trigger held the whole time
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .birds
        .iter()
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|bird| bird.rect().center().y);

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    if let Some(target_y) = target {
        let dy = target_y - state.player.rect().center().y;
        if dy < -2.0 {
            input.up = true;
        } else if dy > 2.0 {
            input.down = true;
        }
    }
    input
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Bird Shooter starting with seed {seed}");

    let mut session = Session::new(seed, LogAudio::default());
    let mut renderer = NullRenderer;
    let mut pacer = FramePacer::new(TICK_HZ);

    session.start();

    // Two minutes of simulated time, in case the autopilot never dies
    let max_ticks = TICK_HZ as u64 * 120;
    let mut ticks = 0u64;

    while ticks < max_ticks {
        let input = session.state().map(autopilot).unwrap_or_default();
        session.update(&input);

        if let Some(state) = session.state() {
            renderer.draw(state);
        }

        if session.phase() == SessionPhase::Ended {
            let hud = session.hud();
            log::info!(
                "final score {} at level {}, session best {}",
                hud.score,
                hud.level,
                hud.high_score
            );
            session.resolve(EndChoice::Quit);
            break;
        }

        pacer.wait();
        ticks += 1;
    }

    if ticks == max_ticks {
        log::info!("time limit reached, shutting down");
    }
}
