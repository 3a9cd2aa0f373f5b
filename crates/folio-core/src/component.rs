use crate::context::FrameContext;

/// A page component driven by simulated time.
///
/// Components are ticked in registration order. A tick fires every timer due
/// at or before the clock's current time and moves the component's buffered
/// UI events into the shared log.
pub trait Component: std::fmt::Debug {
    /// Human-readable name for this component.
    fn name(&self) -> &str;

    /// Fire due timers and publish buffered events.
    fn tick(&mut self, ctx: &mut FrameContext<'_>);

    /// Due time of the component's earliest pending timer.
    fn next_due(&self) -> Option<u64> {
        None
    }

    /// Whether any deferred action is still waiting to fire.
    fn has_pending(&self) -> bool {
        self.next_due().is_some()
    }
}
