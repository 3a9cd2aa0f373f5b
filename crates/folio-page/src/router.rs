//! Section navigation with timed exit and enter transitions.

use folio_core::{Component, FrameContext, TimingConfig, Timers, UiEvent, UiEventKind};
use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::layout::{MobileMenu, NavLink, PageLayout, Section};

/// A deferred router action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteAction {
    /// The exit animation ended: hide `from`, show `to`.
    Swap { from: usize, to: usize },
    /// The enter animation ended.
    FinishEnter { section: usize },
}

/// Shows exactly one section at a time and animates between them.
///
/// A navigation marks the matching nav link active, plays the current
/// section's exit animation, swaps visibility, then plays the target's enter
/// animation. Navigation requests that arrive mid-transition are dropped.
#[derive(Debug)]
pub struct SectionRouter {
    sections: Vec<Section>,
    links: Vec<NavLink>,
    logo: Option<NavLink>,
    menu: Option<MobileMenu>,
    exit_ms: u64,
    enter_ms: u64,
    visible: Option<usize>,
    in_flight: bool,
    pending_scroll: Option<String>,
    timers: Timers<RouteAction>,
    outbox: Vec<UiEvent>,
}

impl SectionRouter {
    /// Build a router over the given layout and show `default_section`.
    ///
    /// A missing default section leaves the page blank until the first
    /// navigation.
    pub fn new(layout: PageLayout, timing: &TimingConfig, default_section: &str) -> PageResult<Self> {
        if layout.sections.is_empty() {
            return Err(PageError::NoSections);
        }
        let mut router = Self {
            sections: layout.sections,
            links: layout.links,
            logo: layout.logo,
            menu: layout.menu,
            exit_ms: timing.section_exit_ms,
            enter_ms: timing.section_enter_ms,
            visible: None,
            in_flight: false,
            pending_scroll: None,
            timers: Timers::new(),
            outbox: Vec::new(),
        };

        if let Some(index) = router.index_of(default_section) {
            router.activate_link(default_section);
            router.sections[index].visible = true;
            router.visible = Some(index);
            router.record(
                UiEventKind::SectionShown {
                    section: default_section.to_string(),
                },
                format!("{default_section} shown at load"),
            );
        } else {
            debug!(section = default_section, "default section missing; page starts blank");
        }
        Ok(router)
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Nav links in menu order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// The link currently highlighted.
    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    /// The displayed section (during a transition, whichever is on screen).
    pub fn visible_section(&self) -> Option<&Section> {
        self.visible.map(|i| &self.sections[i])
    }

    /// Id of the displayed section.
    pub fn current(&self) -> Option<&str> {
        self.visible_section().map(|s| s.id.as_str())
    }

    /// Whether an exit or enter animation is running.
    pub fn is_transitioning(&self) -> bool {
        self.in_flight
    }

    /// Whether the mobile menu is expanded.
    pub fn menu_shown(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.is_shown())
    }

    /// Show the section with this id.
    ///
    /// Returns `Ok(false)` when nothing happens: the section is already shown
    /// or a transition is still running.
    pub fn navigate(&mut self, target: &str) -> PageResult<bool> {
        let to = self
            .index_of(target)
            .ok_or_else(|| PageError::UnknownSection(target.to_string()))?;

        if self.in_flight {
            debug!(section = target, "navigation ignored during transition");
            return Ok(false);
        }
        if self.visible == Some(to) {
            return Ok(false);
        }

        self.activate_link(target);

        match self.visible {
            Some(from) => {
                self.sections[from].exiting = true;
                self.in_flight = true;
                let leaving = self.sections[from].id.clone();
                self.record(
                    UiEventKind::SectionExitStarted {
                        section: leaving.clone(),
                    },
                    format!("{leaving} exiting"),
                );
                let handle = self.timers.schedule(self.exit_ms, RouteAction::Swap { from, to });
                debug!(%handle, from = %leaving, to = target, "section swap scheduled");
            }
            None => {
                self.sections[to].visible = true;
                self.visible = Some(to);
                self.record(
                    UiEventKind::SectionShown {
                        section: target.to_string(),
                    },
                    format!("{target} shown"),
                );
                self.flush_scroll();
            }
        }
        Ok(true)
    }

    /// Activate the nav link at `index`: hide the mobile menu and navigate.
    pub fn click_link(&mut self, index: usize) -> PageResult<bool> {
        let target = self
            .links
            .get(index)
            .map(|l| l.target.clone())
            .ok_or(PageError::UnknownLink(index))?;
        self.close_menu();
        self.navigate(&target)
    }

    /// Activate the logo link. Inert if the layout has no logo.
    pub fn click_logo(&mut self) -> PageResult<bool> {
        match self.logo.as_ref().map(|l| l.target.clone()) {
            Some(target) => {
                self.close_menu();
                self.navigate(&target)
            }
            None => Ok(false),
        }
    }

    /// Navigate to `section` and scroll to `anchor` once it is displayed.
    pub fn follow_deep_link(&mut self, section: &str, anchor: &str) -> PageResult<bool> {
        let index = self
            .index_of(section)
            .ok_or_else(|| PageError::UnknownSection(section.to_string()))?;

        if self.in_flight {
            debug!(section, anchor, "deep link ignored during transition");
            return Ok(false);
        }

        self.pending_scroll = Some(anchor.to_string());
        if self.visible == Some(index) {
            self.flush_scroll();
            return Ok(true);
        }
        self.navigate(section)
    }

    /// The hamburger button. Inert if the layout has no mobile menu.
    pub fn toggle_menu(&mut self) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        let shown = menu.toggle();
        self.record(
            UiEventKind::MenuToggled { shown },
            if shown { "menu shown" } else { "menu hidden" },
        );
    }

    /// Fire every timer due at or before `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some((handle, action)) = self.timers.pop_due(now_ms) {
            debug!(%handle, ?action, "router timer fired");
            self.fire(action);
        }
        self.timers.settle(now_ms);
    }

    fn fire(&mut self, action: RouteAction) {
        match action {
            RouteAction::Swap { from, to } => {
                let leaving = &mut self.sections[from];
                leaving.visible = false;
                leaving.exiting = false;

                let arriving = &mut self.sections[to];
                arriving.visible = true;
                arriving.entering = true;
                let id = arriving.id.clone();
                self.visible = Some(to);

                self.record(
                    UiEventKind::SectionShown { section: id.clone() },
                    format!("{id} shown"),
                );
                self.flush_scroll();
                self.timers
                    .schedule(self.enter_ms, RouteAction::FinishEnter { section: to });
            }
            RouteAction::FinishEnter { section } => {
                self.sections[section].entering = false;
                self.in_flight = false;
                let id = self.sections[section].id.clone();
                self.record(
                    UiEventKind::SectionEnterFinished { section: id.clone() },
                    format!("{id} settled"),
                );
            }
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn activate_link(&mut self, target: &str) {
        let mut marked = false;
        for link in &mut self.links {
            link.active = !marked && link.target == target;
            marked |= link.active;
        }
        if marked {
            self.record(
                UiEventKind::NavActivated {
                    section: target.to_string(),
                },
                format!("nav link for {target} active"),
            );
        }
    }

    fn close_menu(&mut self) {
        let was_shown = self.menu.as_mut().is_some_and(|m| m.close());
        if was_shown {
            self.record(UiEventKind::MenuToggled { shown: false }, "menu hidden");
        }
    }

    fn flush_scroll(&mut self) {
        if let Some(anchor) = self.pending_scroll.take() {
            self.record(
                UiEventKind::ScrollRequested {
                    anchor: anchor.clone(),
                },
                format!("scroll to #{anchor}"),
            );
        }
    }

    fn record(&mut self, kind: UiEventKind, description: impl Into<String>) {
        self.outbox
            .push(UiEvent::new(self.timers.now_ms(), kind, description));
    }
}

impl Component for SectionRouter {
    fn name(&self) -> &str {
        "router"
    }

    fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        self.advance_to(ctx.now_ms());
        ctx.publish(&mut self.outbox);
    }

    fn next_due(&self) -> Option<u64> {
        self.timers.next_due()
    }
}
