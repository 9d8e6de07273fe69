//! Audio settings

use serde::{Deserialize, Serialize};

/// User-facing audio configuration
///
/// Serializable so a frontend can persist it between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master switch for sound effects
    pub sound_enabled: bool,
    /// Master switch for the looping engine drone
    pub music_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effect volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music/loop volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            master_volume: 0.8,
            sfx_volume: 0.7,
            music_volume: 0.5,
        }
    }
}

impl AudioSettings {
    /// Effective volume for one-shot cues, 0.0 when sound is off
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.sound_enabled {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Effective volume for looping cues, 0.0 when music is off
    pub fn effective_music_volume(&self) -> f32 {
        if self.music_enabled {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Flip the sound switch, returning the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
