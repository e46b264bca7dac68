//! Typewriter text-reveal state machine.
//!
//! A [`TypeTask`] reveals one dialogue line as a resumable sequence of
//! steps: it waits out any running panel fade, pauses briefly before the
//! first character, then emits the line one character per pause interval,
//! pausing longer after punctuation.

use crate::config::SequencerConfig;
use crate::stage::Stage;

/// Resumable typing task. At most one is logically active per sequencer;
/// beginning a new one replaces (cancels) the previous one.
#[derive(Debug, Clone)]
pub(crate) enum TypeTask {
    /// No line is being typed.
    Idle,
    /// Holding until the panel fade finishes. The text surface was already
    /// cleared when the task began.
    AwaitFade {
        /// Characters still to reveal.
        chars: Vec<char>,
    },
    /// Waiting out the configured pause before the first character.
    StartPause {
        /// Characters still to reveal.
        chars: Vec<char>,
        /// Seconds left in the pause.
        remaining: f32,
    },
    /// Revealing characters, one per elapsed pause interval.
    Reveal {
        /// The full line being revealed.
        chars: Vec<char>,
        /// Index of the next character to reveal.
        next: usize,
        /// Seconds left before the next character appears.
        wait: f32,
    },
}

impl TypeTask {
    /// Begin typing the given line text.
    pub(crate) fn begin(text: &str) -> Self {
        TypeTask::AwaitFade {
            chars: text.chars().collect(),
        }
    }

    /// Stop the task where it stands. Any partially revealed text is left
    /// on the stage; cancellation runs no cleanup.
    pub(crate) fn cancel(&mut self) {
        *self = TypeTask::Idle;
    }

    /// Whether the task still has work to do.
    pub(crate) fn is_active(&self) -> bool {
        !matches!(self, TypeTask::Idle)
    }

    /// Advance the task by `dt` seconds, revealing characters onto the
    /// stage as their pause intervals elapse.
    ///
    /// Leftover time carries across phase boundaries within one call, so a
    /// single large `dt` can finish the start pause and reveal several
    /// characters without losing the sub-interval remainder.
    pub(crate) fn tick<P>(
        &mut self,
        mut dt: f32,
        fading: bool,
        config: &SequencerConfig,
        stage: &mut impl Stage<P>,
    ) {
        loop {
            match self {
                TypeTask::Idle => return,
                TypeTask::AwaitFade { chars } => {
                    if fading {
                        return;
                    }
                    let chars = std::mem::take(chars);
                    *self = TypeTask::StartPause {
                        chars,
                        remaining: config.start_pause,
                    };
                }
                TypeTask::StartPause { chars, remaining } => {
                    if dt < *remaining {
                        *remaining -= dt;
                        return;
                    }
                    dt -= *remaining;
                    let chars = std::mem::take(chars);
                    *self = TypeTask::Reveal {
                        chars,
                        next: 0,
                        wait: 0.0,
                    };
                }
                TypeTask::Reveal { chars, next, wait } => {
                    while *next < chars.len() {
                        if dt < *wait {
                            *wait -= dt;
                            return;
                        }
                        dt -= *wait;
                        let ch = chars[*next];
                        stage.push_char(ch);
                        *next += 1;
                        *wait = if ch.is_ascii_punctuation() {
                            config.punctuation_pause
                        } else {
                            config.char_pause
                        };
                    }
                    // Trailing pause after the final character, then done.
                    if dt < *wait {
                        *wait -= dt;
                        return;
                    }
                    *self = TypeTask::Idle;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::stage::testing::RecordingStage;

    fn fast_config() -> SequencerConfig {
        SequencerConfig::default()
            .with_start_pause(0.0)
            .with_char_pause(0.01)
            .with_punctuation_pause(0.05)
    }

    fn run_to_completion(task: &mut TypeTask, config: &SequencerConfig, stage: &mut RecordingStage) {
        for _ in 0..1_000_000 {
            if !task.is_active() {
                return;
            }
            task.tick(0.01, false, config, stage);
        }
        panic!("typing task did not finish");
    }

    #[test]
    fn reveals_every_character_in_order() {
        let config = fast_config();
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("Hello, world!");
        run_to_completion(&mut task, &config, &mut stage);
        assert_eq!(stage.text, "Hello, world!");
        assert_eq!(stage.typed.iter().collect::<String>(), "Hello, world!");
    }

    #[test]
    fn defers_reveal_while_fading() {
        let config = fast_config();
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("Hi");

        for _ in 0..100 {
            task.tick(0.05, true, &config, &mut stage);
        }
        assert!(stage.typed.is_empty());
        assert!(task.is_active());

        run_to_completion(&mut task, &config, &mut stage);
        assert_eq!(stage.text, "Hi");
    }

    #[test]
    fn start_pause_delays_first_character() {
        let config = fast_config().with_start_pause(1.0);
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("Hi");

        task.tick(0.5, false, &config, &mut stage);
        assert!(stage.typed.is_empty());

        // Crosses the pause boundary; the first character appears with the
        // remainder carried into its interval.
        task.tick(0.5, false, &config, &mut stage);
        assert_eq!(stage.text, "H");
    }

    #[test]
    fn punctuation_waits_longer() {
        // char_pause 1s, punctuation_pause 3s. "a." emits 'a' immediately,
        // then '.' one second later, then idles three seconds after that.
        let config = SequencerConfig::default()
            .with_start_pause(0.0)
            .with_char_pause(1.0)
            .with_punctuation_pause(3.0);
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("a.");

        task.tick(0.0, false, &config, &mut stage);
        assert_eq!(stage.text, "a");

        task.tick(1.0, false, &config, &mut stage);
        assert_eq!(stage.text, "a.");

        task.tick(2.9, false, &config, &mut stage);
        assert!(task.is_active());
        task.tick(0.1, false, &config, &mut stage);
        assert!(!task.is_active());
    }

    #[test]
    fn large_tick_reveals_multiple_characters() {
        let config = SequencerConfig::default()
            .with_start_pause(0.0)
            .with_char_pause(0.1)
            .with_punctuation_pause(0.1);
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("abcdef");

        // 0.35s covers the instant first character plus three intervals.
        task.tick(0.35, false, &config, &mut stage);
        assert_eq!(stage.text, "abcd");
    }

    #[test]
    fn cancel_leaves_partial_text() {
        let config = fast_config();
        let mut stage = RecordingStage::default();
        let mut task = TypeTask::begin("abcdef");

        task.tick(0.015, false, &config, &mut stage);
        assert!(!stage.text.is_empty());
        assert!(stage.text.len() < 6);

        let shown = stage.text.clone();
        task.cancel();
        assert!(!task.is_active());
        assert_eq!(stage.text, shown);
    }

    proptest! {
        #[test]
        fn reveal_matches_input_for_any_text_and_frame_times(
            text in ".{0,60}",
            dts in prop::collection::vec(0.001f32..0.1, 1..20),
        ) {
            let config = fast_config();
            let mut stage = RecordingStage::default();
            let mut task = TypeTask::begin(&text);

            let mut i = 0;
            for _ in 0..1_000_000 {
                if !task.is_active() {
                    break;
                }
                task.tick(dts[i % dts.len()], false, &config, &mut stage);
                i += 1;
            }

            prop_assert!(!task.is_active());
            prop_assert_eq!(stage.typed.iter().collect::<String>(), text);
        }
    }
}
