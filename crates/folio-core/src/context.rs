use crate::clock::UiClock;
use crate::event::{EventLog, UiEvent};

/// Mutable context passed to each component during a tick.
pub struct FrameContext<'a> {
    /// The page clock, already advanced to the tick's target time.
    pub clock: &'a UiClock,
    /// The shared UI event log.
    pub events: &'a mut EventLog,
}

impl FrameContext<'_> {
    /// Move buffered events into the shared log, keeping their timestamps.
    pub fn publish(&mut self, buffered: &mut Vec<UiEvent>) {
        for event in buffered.drain(..) {
            self.events.push(event);
        }
    }

    /// Current simulated time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::UiEventKind;

    #[test]
    fn publish_keeps_original_timestamps() {
        let mut clock = UiClock::new();
        clock.advance(250);
        let mut log = EventLog::default();
        let mut buffered = vec![UiEvent::new(40, UiEventKind::TypingStarted, "typing")];
        let mut ctx = FrameContext {
            clock: &clock,
            events: &mut log,
        };
        ctx.publish(&mut buffered);
        assert_eq!(ctx.now_ms(), 250);
        assert!(buffered.is_empty());
        assert_eq!(log.events()[0].at_ms, 40);
    }
}
