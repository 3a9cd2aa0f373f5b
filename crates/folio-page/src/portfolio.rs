//! The page orchestrator.
//!
//! Owns the clock, the event log, and the three page components. Time only
//! moves when the front-end says so, which makes every animation and delayed
//! reply reproducible.

use folio_chat::{ChatWidget, DialogueGraph, portfolio_graph};
use folio_core::{Component, EventLog, FolioConfig, FrameContext, TimerHandle, UiClock};
use tracing::{debug, info};

use crate::backdrop::Backdrop;
use crate::error::PageResult;
use crate::layout::PageLayout;
use crate::router::SectionRouter;

/// The whole interactive page driven by one simulated clock.
pub struct Portfolio {
    clock: UiClock,
    events: EventLog,
    router: SectionRouter,
    chat: ChatWidget,
    backdrop: Backdrop,
}

impl std::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("now_ms", &self.clock.now_ms())
            .field("frames", &self.clock.frames())
            .field("section", &self.router.current())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Portfolio {
    /// Assemble a page from its parts and a validated configuration.
    pub fn new(
        config: FolioConfig,
        layout: PageLayout,
        graph: DialogueGraph,
        width: f64,
        height: f64,
    ) -> PageResult<Self> {
        config.validate()?;

        let router = SectionRouter::new(layout, &config.timing, &config.default_section)?;
        let chat = ChatWidget::new(graph, &config.timing);
        let backdrop = Backdrop::new(config.backdrop, width, height);

        let mut page = Self {
            clock: UiClock::new(),
            events: EventLog::new(config.max_events),
            router,
            chat,
            backdrop,
        };
        page.flush();
        info!(
            section = page.router.current().unwrap_or("-"),
            particles = page.backdrop.particles().len(),
            "page loaded"
        );
        Ok(page)
    }

    /// The portfolio page with its built-in layout and dialogue.
    pub fn with_defaults(config: FolioConfig, width: f64, height: f64) -> PageResult<Self> {
        Self::new(config, PageLayout::portfolio(), portfolio_graph()?, width, height)
    }

    /// Move time forward by `ms`, firing every timer that falls due.
    ///
    /// Timers fire in due order across all components, and chains scheduled
    /// from a firing timer complete within the same call if they fit.
    /// Returns the new time.
    pub fn advance(&mut self, ms: u64) -> u64 {
        let until = self.clock.now_ms().saturating_add(ms);
        while let Some(due) = self.next_due().filter(|&due| due <= until) {
            let step = due.saturating_sub(self.clock.now_ms());
            self.clock.advance(step);
            self.tick_all();
        }
        let step = until - self.clock.now_ms();
        self.clock.advance(step);
        self.tick_all();
        until
    }

    /// One display frame: advance time, then move the particles.
    pub fn frame(&mut self, ms: u64) -> u64 {
        let now = self.advance(ms);
        self.backdrop.step();
        self.clock.mark_frame();
        now
    }

    /// Run until nothing is left pending. Returns the time reached.
    pub fn settle(&mut self) -> u64 {
        while let Some(due) = self.next_due() {
            let step = due.saturating_sub(self.clock.now_ms());
            self.advance(step);
        }
        self.clock.now_ms()
    }

    /// Publish events produced by input handlers at the current time.
    pub fn flush(&mut self) {
        self.tick_all();
    }

    /// Whether any component still has a deferred action waiting.
    pub fn has_pending(&self) -> bool {
        self.router.has_pending() || self.chat.has_pending() || self.backdrop.has_pending()
    }

    /// Due time of the earliest pending timer on the page.
    pub fn next_due(&self) -> Option<u64> {
        [
            self.router.next_due(),
            self.chat.next_due(),
            self.backdrop.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn tick_all(&mut self) {
        let mut ctx = FrameContext {
            clock: &self.clock,
            events: &mut self.events,
        };
        let components: [&mut dyn Component; 3] =
            [&mut self.router, &mut self.chat, &mut self.backdrop];
        for component in components {
            component.tick(&mut ctx);
        }
    }

    // Input surface

    /// Navigate to a section by id.
    pub fn navigate(&mut self, section: &str) -> PageResult<bool> {
        let started = self.router.navigate(section)?;
        self.flush();
        Ok(started)
    }

    /// Click the nav link at `index`.
    pub fn click_link(&mut self, index: usize) -> PageResult<bool> {
        let started = self.router.click_link(index)?;
        self.flush();
        Ok(started)
    }

    /// Click the header logo.
    pub fn click_logo(&mut self) -> PageResult<bool> {
        let started = self.router.click_logo()?;
        self.flush();
        Ok(started)
    }

    /// Follow an in-page link to an anchor inside `section`.
    pub fn follow_deep_link(&mut self, section: &str, anchor: &str) -> PageResult<bool> {
        let started = self.router.follow_deep_link(section, anchor)?;
        self.flush();
        Ok(started)
    }

    /// Press the hamburger button.
    pub fn toggle_menu(&mut self) {
        self.router.toggle_menu();
        self.flush();
    }

    /// Press the chat toggle button.
    pub fn toggle_chat(&mut self) {
        self.chat.toggle();
        self.flush();
    }

    /// Press the chat window's close button.
    pub fn close_chat(&mut self) {
        self.chat.close();
        self.flush();
    }

    /// Click an option button.
    pub fn select_option(&mut self, label: &str, target: &str) -> PageResult<TimerHandle> {
        let handle = self.chat.select_option(label, target)?;
        self.flush();
        Ok(handle)
    }

    /// Click the option button at `index`.
    pub fn select_index(&mut self, index: usize) -> PageResult<TimerHandle> {
        let handle = self.chat.select_index(index)?;
        self.flush();
        Ok(handle)
    }

    /// Pick an option from typed input.
    pub fn select_input(&mut self, input: &str) -> PageResult<TimerHandle> {
        let handle = self.chat.select_input(input)?;
        self.flush();
        Ok(handle)
    }

    /// The viewport changed size.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "viewport resized");
        self.backdrop.resize(width, height);
        self.flush();
    }

    // Output surface

    /// The page clock.
    pub fn clock(&self) -> &UiClock {
        &self.clock
    }

    /// Current simulated time.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Everything that happened on the page so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The section router.
    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    /// The chat widget.
    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    /// The particle backdrop.
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use folio_chat::{ChatError, Sender};
    use folio_core::{CoreError, TimingConfig, UiEventKind};

    fn page() -> Portfolio {
        Portfolio::with_defaults(FolioConfig::default(), 800.0, 600.0).unwrap()
    }

    #[test]
    fn loads_on_home_with_backdrop() {
        let p = page();
        assert_eq!(p.router().current(), Some("home"));
        assert_eq!(p.backdrop().particles().len(), 80);
        assert!(!p.chat().is_open());
        assert!(!p.has_pending());
        assert!(
            p.events()
                .events()
                .iter()
                .any(|e| matches!(e.kind, UiEventKind::BackdropReset { .. }))
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let config = FolioConfig::default()
            .with_timing(TimingConfig::default().with_reply_delay(120_000));
        let err = Portfolio::with_defaults(config, 800.0, 600.0).unwrap_err();
        assert!(matches!(
            err,
            PageError::Config(CoreError::InvalidTiming { field: "reply_delay_ms", .. })
        ));
    }

    #[test]
    fn chat_scenario_through_page() {
        let mut p = page();
        p.toggle_chat();
        p.advance(500);
        assert_eq!(p.chat().options().len(), 3);

        p.select_option("View Technical Skills", "skills_overview")
            .unwrap();
        assert!(p.chat().is_typing());
        assert_eq!(
            p.select_index(0),
            Err(PageError::Chat(ChatError::AwaitingResponse))
        );

        p.advance(1500);
        let last = p.chat().messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.starts_with("Core Skills"));
        assert_eq!(p.chat().options().len(), 3);
    }

    #[test]
    fn events_interleave_in_due_order() {
        let mut p = page();
        p.toggle_chat();
        p.navigate("about").unwrap();
        // Greeting at 500 falls between the swap at 400 and enter end at 900.
        p.advance(2000);

        let times: Vec<u64> = p.events().events().iter().map(|e| e.at_ms).collect();
        let mut sorted = times.clone();
        sorted.sort_unstable();
        assert_eq!(times, sorted);
        assert_eq!(p.now_ms(), 2000);
    }

    #[test]
    fn settle_drains_everything() {
        let mut p = page();
        p.toggle_chat();
        p.navigate("projects").unwrap();
        let reached = p.settle();
        assert_eq!(reached, 900);
        assert!(!p.has_pending());
        assert!(p.router().section("projects").unwrap().is_at_rest());
        assert_eq!(p.chat().current_node(), Some("greeting"));
    }

    #[test]
    fn frame_steps_backdrop() {
        let mut p = page();
        let before = p.backdrop().particles().to_vec();
        p.frame(16);
        p.frame(16);
        assert_eq!(p.clock().frames(), 2);
        assert_eq!(p.backdrop().frames(), 2);
        assert_eq!(p.now_ms(), 32);
        assert_ne!(p.backdrop().particles(), before.as_slice());
    }

    #[test]
    fn menu_then_link() {
        let mut p = page();
        p.toggle_menu();
        assert!(p.router().menu_shown());
        p.click_link(3).unwrap();
        assert!(!p.router().menu_shown());
        p.advance(900);
        assert_eq!(p.router().current(), Some("contact"));
    }

    #[test]
    fn capped_event_log() {
        let config = FolioConfig::default().with_max_events(3);
        let mut p = Portfolio::with_defaults(config, 800.0, 600.0).unwrap();
        p.navigate("about").unwrap();
        p.settle();
        assert_eq!(p.events().len(), 3);
    }

    #[test]
    fn resize_regenerates() {
        let mut p = page();
        let resets = |p: &Portfolio| {
            p.events()
                .events()
                .iter()
                .filter(|e| matches!(e.kind, UiEventKind::BackdropReset { .. }))
                .count()
        };
        assert_eq!(resets(&p), 1);
        p.resize(1280.0, 720.0);
        assert_eq!(resets(&p), 2);
        assert_eq!(p.backdrop().width(), 1280.0);
    }
}
