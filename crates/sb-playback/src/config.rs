//! Pacing and fade configuration.

/// Author-set pacing for a [`crate::Sequencer`].
///
/// All durations are in seconds and non-negative; the builders clamp
/// negative inputs to zero.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Panel fade rate in alpha units per second.
    pub fade_speed: f32,
    /// Pause after revealing an ordinary character.
    pub char_pause: f32,
    /// Pause after revealing an ASCII punctuation character.
    pub punctuation_pause: f32,
    /// Pause before the first character of each line, so the panel has a
    /// moment to settle on screen.
    pub start_pause: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            fade_speed: 3.0,
            char_pause: 0.04,
            punctuation_pause: 0.25,
            start_pause: 0.35,
        }
    }
}

impl SequencerConfig {
    /// Set the panel fade rate (alpha units per second).
    pub fn with_fade_speed(mut self, speed: f32) -> Self {
        self.fade_speed = speed.max(0.0);
        self
    }

    /// Set the pause after an ordinary character.
    pub fn with_char_pause(mut self, seconds: f32) -> Self {
        self.char_pause = seconds.max(0.0);
        self
    }

    /// Set the pause after a punctuation character.
    pub fn with_punctuation_pause(mut self, seconds: f32) -> Self {
        self.punctuation_pause = seconds.max(0.0);
        self
    }

    /// Set the pause before the first character of a line.
    pub fn with_start_pause(mut self, seconds: f32) -> Self {
        self.start_pause = seconds.max(0.0);
        self
    }
}
