//! Panel fade state machine.

use crate::stage::Stage;

/// Resumable panel fade task. The sequencer owns the alpha value itself so
/// that a cancelled fade leaves the panel at whatever opacity it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeTask {
    /// No fade running.
    Idle,
    /// Ramping alpha up toward fully opaque.
    In,
    /// Ramping alpha down toward fully transparent.
    Out,
}

impl FadeTask {
    /// Advance the fade by `dt` seconds, pushing the new alpha to the
    /// stage. Returns `true` when the fade completed on this tick.
    pub(crate) fn tick<P>(
        &mut self,
        dt: f32,
        speed: f32,
        alpha: &mut f32,
        stage: &mut impl Stage<P>,
    ) -> bool {
        match self {
            FadeTask::Idle => false,
            FadeTask::In => {
                *alpha = (*alpha + speed * dt).clamp(0.0, 1.0);
                stage.set_panel_alpha(*alpha);
                if *alpha >= 1.0 {
                    *self = FadeTask::Idle;
                    true
                } else {
                    false
                }
            }
            FadeTask::Out => {
                *alpha = (*alpha - speed * dt).clamp(0.0, 1.0);
                stage.set_panel_alpha(*alpha);
                if *alpha <= 0.0 {
                    *self = FadeTask::Idle;
                    true
                } else {
                    false
                }
            }
        }
    }
}
