//! Audio cue routing
//!
//! The simulation emits events; the session layer maps them to cues and
//! hands them to whatever [`AudioSink`] the frontend installed. Sinks
//! never see game state, only cue names.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Bullet leaves the muzzle
    Bullet,
    /// A new run starts
    GameStart,
    /// Engine drone, looped for the whole run
    HelicopterContinuous,
    /// Player rams a bird or a cloud
    Collision,
    /// Bullet destroys a bird
    HitBird,
    /// Run ends
    GameOver,
    /// Heart collected
    PickupHeart,
}

impl Cue {
    /// Stable name for asset lookup and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Bullet => "bullet",
            Cue::GameStart => "game_start",
            Cue::HelicopterContinuous => "helicopter_continuous",
            Cue::Collision => "collision",
            Cue::HitBird => "hit_bird",
            Cue::GameOver => "game_over",
            Cue::PickupHeart => "pickup_heart",
        }
    }

    /// Per-cue volume before the settings multipliers are applied.
    /// The heart pickup is deliberately louder than everything else.
    pub fn base_volume(&self) -> f32 {
        match self {
            Cue::PickupHeart => 1.0,
            _ => 0.7,
        }
    }

    /// Whether the cue loops until explicitly stopped
    pub fn is_continuous(&self) -> bool {
        matches!(self, Cue::HelicopterContinuous)
    }
}

/// Playback backend installed by the frontend
pub trait AudioSink {
    /// Play a one-shot cue, or start a looping one
    fn play(&mut self, cue: Cue, volume: f32);

    /// Stop everything, including looping cues. Safe to call repeatedly.
    fn stop_all(&mut self);
}

/// Sink that discards every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue, _volume: f32) {}
    fn stop_all(&mut self) {}
}

/// Sink that logs cues instead of playing them
///
/// Useful for the headless binary and for eyeballing cue traffic during
/// development.
#[derive(Debug, Default)]
pub struct LogAudio {
    continuous: Option<Cue>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue, volume: f32) {
        if cue.is_continuous() {
            if self.continuous == Some(cue) {
                return;
            }
            self.continuous = Some(cue);
        }
        log::debug!("cue {} at volume {:.2}", cue.as_str(), volume);
    }

    fn stop_all(&mut self) {
        if self.continuous.take().is_some() {
            log::debug!("audio stopped");
        }
    }
}

/// Sink that records every play call, for tests
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<(Cue, f32)>,
    pub continuous: Option<Cue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue, volume: f32) {
        if cue.is_continuous() {
            self.continuous = Some(cue);
        }
        self.played.push((cue, volume));
    }

    fn stop_all(&mut self) {
        self.continuous = None;
    }
}
