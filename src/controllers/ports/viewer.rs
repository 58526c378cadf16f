use crate::core::data::framebuffer::Framebuffer;

/// Where frames go while the render is still running.
///
/// Implementations poll their event source when asked: `cancel_requested`
/// pumps pending events and reports whether the user asked to abandon the
/// render, `wait` blocks for one event-poll interval during the close-wait
/// phase. A headless viewer reports itself closed from the start, so
/// callers skip the close-wait entirely.
pub trait ViewerPort {
    fn publish(&mut self, framebuffer: &Framebuffer);

    fn set_status(&mut self, status: &str);

    fn cancel_requested(&mut self) -> bool;

    fn is_closed(&self) -> bool;

    fn wait(&mut self);
}
