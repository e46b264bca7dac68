//! The visual surface collaborator trait.

/// The visual surface a [`crate::Sequencer`] drives.
///
/// `P` is the portrait handle type from the script's palette. The trait
/// collapses the three display collaborators (text box, portrait image,
/// panel canvas) into one seam a front end implements.
pub trait Stage<P> {
    /// Remove all displayed text.
    fn clear_text(&mut self);
    /// Append one revealed character to the displayed text.
    fn push_char(&mut self, ch: char);
    /// Swap the displayed portrait.
    fn show_portrait(&mut self, portrait: &P);
    /// Set the panel opacity, in `[0, 1]`.
    fn set_panel_alpha(&mut self, alpha: f32);
    /// Toggle the panel surface on or off.
    fn set_panel_active(&mut self, active: bool);
}
