//! Session lifecycle around the simulation
//!
//! Owns the run state machine (menu, running, game over), routes sim
//! events to audio cues, and keeps the leaderboard. Frontends drive it
//! with one `update` per fixed timestep and read state back for drawing.

use crate::audio::{AudioSink, Cue};
use crate::highscores::HighScores;
use crate::settings::AudioSettings;
use crate::sim::{tick, GameEvent, GamePhase, GameState, TickInput};

/// Seed increment between successive runs of one session
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where the session is in its outer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Main menu, no run in progress
    Idle,
    /// A run is live (possibly paused inside the sim)
    Running,
    /// Run finished, waiting on the player's choice
    Ended,
}

/// What the player picked on the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndChoice {
    Restart,
    MainMenu,
    Quit,
}

/// Everything a HUD needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub high_score: u32,
    pub banner_visible: bool,
}

/// One player session: a sequence of runs against a shared leaderboard
pub struct Session<A: AudioSink> {
    phase: SessionPhase,
    state: Option<GameState>,
    audio: A,
    audio_settings: AudioSettings,
    scores: HighScores,
    /// Seed for the next run; stepped after every start
    next_seed: u64,
}

impl<A: AudioSink> Session<A> {
    pub fn new(seed: u64, audio: A) -> Self {
        Self {
            phase: SessionPhase::Idle,
            state: None,
            audio,
            audio_settings: AudioSettings::default(),
            scores: HighScores::new(),
            next_seed: seed,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn audio_settings(&self) -> &AudioSettings {
        &self.audio_settings
    }

    /// Begin a fresh run
    ///
    /// No-op while a run is already live; call [`Session::end`] or resolve
    /// the game over screen first.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Running {
            return;
        }
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(SEED_STEP);

        log::info!("starting run with seed {seed}");
        self.state = Some(GameState::new(seed));
        self.phase = SessionPhase::Running;

        self.cue(Cue::GameStart);
        self.cue(Cue::HelicopterContinuous);
    }

    /// Advance the live run by one fixed timestep
    ///
    /// Returns the tick's events so frontends can react beyond audio.
    /// Outside of a live run this does nothing.
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.phase != SessionPhase::Running {
            return Vec::new();
        }
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };

        let events = tick(state, input);
        for event in &events {
            match event {
                GameEvent::BulletFired => self.cue(Cue::Bullet),
                GameEvent::BirdShot { .. } => self.cue(Cue::HitBird),
                GameEvent::PlayerHitBird { .. } | GameEvent::CloudHit { .. } => {
                    self.cue(Cue::Collision)
                }
                GameEvent::HeartCollected { .. } => self.cue(Cue::PickupHeart),
                GameEvent::LevelUp { level } => {
                    log::info!("difficulty level {level}");
                }
                GameEvent::GameOver { score } => {
                    log::info!("run over at score {score}");
                    self.finish_run();
                }
            }
        }
        events
    }

    /// Freeze the live run
    pub fn pause(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if state.phase == GamePhase::Playing {
                state.phase = GamePhase::Paused;
            }
        }
    }

    /// Unfreeze a paused run
    pub fn resume(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if state.phase == GamePhase::Paused {
                state.phase = GamePhase::Playing;
            }
        }
    }

    /// Flip the sound effect switch, returning the new state
    pub fn toggle_audio(&mut self) -> bool {
        let enabled = self.audio_settings.toggle_sound();
        if !enabled {
            self.audio.stop_all();
        }
        enabled
    }

    /// Throw away the current run and begin a fresh one
    ///
    /// Unlike [`Session::end`], the abandoned run is not recorded on the
    /// leaderboard.
    pub fn reset(&mut self) {
        self.audio.stop_all();
        self.state = None;
        self.phase = SessionPhase::Idle;
        self.start();
    }

    /// Abort the live run as if the player had lost
    pub fn end(&mut self) {
        if self.phase == SessionPhase::Running {
            if let Some(state) = self.state.as_mut() {
                state.phase = GamePhase::GameOver;
            }
            self.finish_run();
        }
    }

    /// Resolve the game over screen
    ///
    /// Restart begins a fresh run immediately; the other two choices drop
    /// back to the menu and leave quitting to the caller.
    pub fn resolve(&mut self, choice: EndChoice) {
        if self.phase != SessionPhase::Ended {
            return;
        }
        self.state = None;
        self.phase = SessionPhase::Idle;
        match choice {
            EndChoice::Restart => self.start(),
            EndChoice::MainMenu | EndChoice::Quit => {}
        }
    }

    /// HUD values for the current frame
    pub fn hud(&self) -> HudSnapshot {
        let high_score = self.scores.top_score().unwrap_or(0);
        match &self.state {
            Some(state) => HudSnapshot {
                score: state.player.score,
                lives: state.player.lives,
                level: state.difficulty.level,
                high_score: high_score.max(state.player.score),
                banner_visible: state.level_banner_visible(),
            },
            None => HudSnapshot {
                score: 0,
                lives: 0,
                level: 0,
                high_score,
                banner_visible: false,
            },
        }
    }

    fn finish_run(&mut self) {
        self.phase = SessionPhase::Ended;
        self.audio.stop_all();
        self.cue(Cue::GameOver);

        if let Some(state) = &self.state {
            let score = state.player.score;
            if let Some(rank) =
                self.scores
                    .add_score(score, state.difficulty.level, state.time_ticks)
            {
                log::info!("score {score} entered the leaderboard at rank {rank}");
            }
        }
    }

    fn cue(&mut self, cue: Cue) {
        if !self.audio_settings.sound_enabled {
            return;
        }
        let volume = if cue.is_continuous() {
            self.audio_settings.effective_music_volume()
        } else {
            self.audio_settings.effective_sfx_volume()
        };
        if volume <= 0.0 {
            return;
        }
        self.audio.play(cue, cue.base_volume() * volume);
    }
}
