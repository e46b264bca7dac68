//! The playback controller.

use std::collections::VecDeque;
use std::sync::Arc;

use sb_script::{Line, Script};

use crate::config::SequencerConfig;
use crate::fade::FadeTask;
use crate::stage::Stage;
use crate::typing::TypeTask;

/// Plays a [`Script`] onto a [`Stage`], one line at a time.
///
/// The sequencer holds a shared handle to the active script (the portrait
/// palette is loaded once and never copied per line) and a pending queue
/// rebuilt on every load. Two task slots drive the per-frame animation: a
/// typing task revealing the current line and a fade task ramping the panel
/// opacity. At most one task of each kind runs at a time; starting a new
/// one cancels its predecessor. Both are advanced by [`Sequencer::tick`].
///
/// There are no fallible operations: a missing script, an out-of-range
/// portrait index, and advancing past the last line are all quiet,
/// tolerated states rather than errors.
#[derive(Debug)]
pub struct Sequencer<P> {
    config: SequencerConfig,
    script: Option<Arc<Script<P>>>,
    pending: VecDeque<Line>,
    typing: TypeTask,
    fade: FadeTask,
    panel_alpha: f32,
    panel_active: bool,
    is_fading: bool,
}

impl<P> Default for Sequencer<P> {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl<P> Sequencer<P> {
    /// Create a sequencer with the given pacing config. The panel starts
    /// inactive and fully transparent, with no script loaded.
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            script: None,
            pending: VecDeque::new(),
            typing: TypeTask::Idle,
            fade: FadeTask::Idle,
            panel_alpha: 0.0,
            panel_active: false,
            is_fading: false,
        }
    }

    /// Replace the active script and rebuild the pending queue from its
    /// lines, in order. Passing `None` is a silent no-op, mirroring an
    /// unassigned script slot; the current script and queue are untouched.
    /// Visual state is not changed either way.
    pub fn load(&mut self, script: Option<Arc<Script<P>>>) {
        if let Some(script) = script {
            self.pending = script.lines.iter().cloned().collect();
            self.script = Some(script);
        }
    }

    /// Begin playback: fade the panel in if it is inactive and, if a
    /// script is loaded, advance to its first line.
    ///
    /// The fade-in and the first line's typing run concurrently; the
    /// typing task defers its character reveal until the fade settles.
    pub fn start(&mut self, stage: &mut impl Stage<P>) {
        // Stop any in-flight fade, resetting the fading flag with it;
        // leaving the flag set would stall every future typing task
        // behind a fade that no longer exists.
        self.cancel_fade();

        if !self.panel_active {
            self.panel_active = true;
            stage.set_panel_active(true);
            self.is_fading = true;
            self.fade = FadeTask::In;
        }

        if self.script.is_some() {
            self.advance(stage);
        }
    }

    /// Advance to the next line, or end the conversation.
    ///
    /// A non-empty queue dequeues its front line: the portrait swaps if
    /// the line's index is within the palette (out-of-range indices keep
    /// the previous portrait), the text surface clears, and a typing task
    /// begins. An empty queue means the conversation is over: any running
    /// fade is cancelled and the panel fades out.
    pub fn advance(&mut self, stage: &mut impl Stage<P>) {
        self.typing.cancel();

        match self.pending.pop_front() {
            Some(line) => {
                if let Some(script) = &self.script
                    && let Some(portrait) = script.portraits.get(line.portrait)
                {
                    stage.show_portrait(portrait);
                }
                stage.clear_text();
                self.typing = TypeTask::begin(&line.text);
            }
            None => {
                self.cancel_fade();
                self.is_fading = true;
                self.fade = FadeTask::Out;
            }
        }
    }

    /// Advance both animation tasks by `dt` seconds.
    ///
    /// The fade steps first so a fade finishing this tick frees the typing
    /// task to start revealing in the same frame. A completed fade-out
    /// deactivates the panel surface.
    pub fn tick(&mut self, dt: f32, stage: &mut impl Stage<P>) {
        let was_out = self.fade == FadeTask::Out;
        if self
            .fade
            .tick(dt, self.config.fade_speed, &mut self.panel_alpha, stage)
        {
            self.is_fading = false;
            if was_out {
                self.panel_active = false;
                stage.set_panel_active(false);
            }
        }

        self.typing.tick(dt, self.is_fading, &self.config, stage);
    }

    /// Number of lines still queued.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether a script is loaded.
    pub fn has_script(&self) -> bool {
        self.script.is_some()
    }

    /// Whether a line is currently being typed (including the deferred and
    /// start-pause phases).
    pub fn is_typing(&self) -> bool {
        self.typing.is_active()
    }

    /// Whether a panel fade is currently running.
    pub fn is_fading(&self) -> bool {
        self.is_fading
    }

    /// Current panel opacity in `[0, 1]`.
    pub fn panel_alpha(&self) -> f32 {
        self.panel_alpha
    }

    /// Whether the panel surface is active.
    pub fn panel_active(&self) -> bool {
        self.panel_active
    }

    /// The pacing config.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    fn cancel_fade(&mut self) {
        self.fade = FadeTask::Idle;
        self.is_fading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::testing::RecordingStage;

    fn test_config() -> SequencerConfig {
        SequencerConfig::default()
            .with_fade_speed(2.0)
            .with_char_pause(0.1)
            .with_punctuation_pause(0.3)
            .with_start_pause(0.2)
    }

    fn two_line_script() -> Arc<Script<u32>> {
        // Second line's portrait index is out of range on purpose.
        Arc::new(
            Script::new()
                .with_portrait(7)
                .with_line(Line::new(0, "Hi."))
                .with_line(Line::new(1, "Bye!")),
        )
    }

    /// Tick until both animation tasks settle.
    fn settle(seq: &mut Sequencer<u32>, stage: &mut RecordingStage) {
        for _ in 0..10_000 {
            if !seq.is_typing() && !seq.is_fading() {
                return;
            }
            seq.tick(0.05, stage);
        }
        panic!("sequencer did not settle");
    }

    #[test]
    fn load_queues_all_lines_in_order() {
        let mut seq = Sequencer::new(test_config());
        seq.load(Some(two_line_script()));
        assert_eq!(seq.pending_len(), 2);
        assert!(seq.has_script());
    }

    #[test]
    fn load_none_is_ignored() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(None);
        assert_eq!(seq.pending_len(), 0);
        assert!(!seq.has_script());

        // Mid-conversation, a null load must not disturb the queue either.
        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        assert_eq!(seq.pending_len(), 1);
        seq.load(None);
        assert_eq!(seq.pending_len(), 1);
    }

    #[test]
    fn reload_rebuilds_queue_from_scratch() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        assert_eq!(seq.pending_len(), 1);

        // Partial progress is not preserved across reload.
        seq.load(Some(two_line_script()));
        assert_eq!(seq.pending_len(), 2);
    }

    #[test]
    fn advancing_past_last_line_fades_out() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        settle(&mut seq, &mut stage);
        seq.advance(&mut stage);
        settle(&mut seq, &mut stage);
        assert_eq!(seq.pending_len(), 0);
        assert!(seq.panel_active());

        // Queue exhausted: the next advance ends the conversation.
        seq.advance(&mut stage);
        assert!(seq.is_fading());
        settle(&mut seq, &mut stage);
        assert!(!seq.panel_active());
        assert!(!stage.active);
        assert_eq!(seq.panel_alpha(), 0.0);
    }

    #[test]
    fn out_of_range_portrait_keeps_previous() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        assert_eq!(stage.portrait, Some(7));

        settle(&mut seq, &mut stage);
        seq.advance(&mut stage);
        // Line 2 asks for palette slot 1, which does not exist.
        assert_eq!(stage.portrait, Some(7));
    }

    #[test]
    fn start_without_script_only_fades_in() {
        let mut seq: Sequencer<u32> = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.start(&mut stage);
        assert!(stage.active);
        assert!(seq.is_fading());
        assert!(!seq.is_typing());

        settle(&mut seq, &mut stage);
        assert_eq!(seq.panel_alpha(), 1.0);
        assert!(stage.typed.is_empty());
    }

    #[test]
    fn typing_clears_immediately_but_defers_reveal_during_fade() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        // The clear happens when the line is taken, before the fade ends.
        assert_eq!(stage.clears, 1);
        assert!(stage.typed.is_empty());

        // Fade-in takes 0.5s at speed 2; nothing types during it.
        seq.tick(0.1, &mut stage);
        assert!(seq.is_fading());
        assert!(stage.typed.is_empty());
    }

    #[test]
    fn advance_mid_line_cancels_and_retypes() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        settle(&mut seq, &mut stage);
        assert_eq!(stage.text, "Hi.");

        seq.advance(&mut stage);
        // A few frames into "Bye!", cut it off with another advance.
        seq.tick(0.25, &mut stage);
        seq.tick(0.1, &mut stage);
        assert!(!stage.text.is_empty());
        assert!(stage.text.len() < 4);

        seq.advance(&mut stage);
        // Queue is now empty, so this began the fade-out; the partial
        // text stays on the stage untouched.
        assert!(stage.text.starts_with('B'));
        assert!(seq.is_fading());
    }

    #[test]
    fn restart_during_fade_does_not_wedge_typing() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        seq.tick(0.1, &mut stage);
        assert!(seq.is_fading());

        // A second start cancels the fade-in; the panel is already active
        // so no new fade begins. The fading flag must reset or the typing
        // task would wait forever.
        seq.start(&mut stage);
        assert!(!seq.is_fading());

        settle(&mut seq, &mut stage);
        assert_eq!(stage.text, "Hi.");
    }

    #[test]
    fn full_two_line_scenario() {
        let mut seq = Sequencer::new(test_config());
        let mut stage = RecordingStage::default();

        seq.load(Some(two_line_script()));
        seq.start(&mut stage);
        assert!(stage.active);
        assert_eq!(stage.portrait, Some(7));

        // Fade-in rises monotonically to 1 while the first line waits.
        settle(&mut seq, &mut stage);
        assert!(
            stage
                .alpha_history
                .windows(2)
                .all(|pair| pair[0] <= pair[1])
        );
        assert_eq!(seq.panel_alpha(), 1.0);
        assert_eq!(stage.text, "Hi.");

        // Second line: out-of-range portrait, text retypes from clear.
        seq.advance(&mut stage);
        settle(&mut seq, &mut stage);
        assert_eq!(stage.portrait, Some(7));
        assert_eq!(stage.text, "Bye!");
        assert_eq!(stage.typed.iter().collect::<String>(), "Hi.Bye!");

        // Third advance: conversation over, panel fades out and turns off.
        let fade_out_from = stage.alpha_history.len();
        seq.advance(&mut stage);
        settle(&mut seq, &mut stage);
        assert!(
            stage.alpha_history[fade_out_from..]
                .windows(2)
                .all(|pair| pair[0] >= pair[1])
        );
        assert_eq!(seq.panel_alpha(), 0.0);
        assert!(!stage.active);
        assert!(!seq.panel_active());
    }
}
