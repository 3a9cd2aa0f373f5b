//! Core runtime pieces shared by the Folio page components.
//!
//! Folio models a portfolio page's interactivity headlessly: every deferred
//! UI action (a chat "thinking" pause, a section fade) is a one-shot timer on
//! a simulated clock, so the whole page can be driven deterministically by
//! tests or by a real frame loop.

/// Simulated UI clock measured in milliseconds.
pub mod clock;
/// The trait that every time-driven page component implements.
pub mod component;
/// Timing and backdrop configuration.
pub mod config;
/// Per-advance context handed to components.
pub mod context;
/// Error types for the core crate.
pub mod error;
/// UI event types and the event log.
pub mod event;
/// One-shot timer queue with cancellable handles.
pub mod schedule;

/// Re-export of [`clock::UiClock`].
pub use clock::UiClock;
/// Re-export of [`component::Component`].
pub use component::Component;
/// Re-exports of the configuration types.
pub use config::{BackdropConfig, FolioConfig, TimingConfig};
/// Re-export of [`context::FrameContext`].
pub use context::FrameContext;
/// Re-exports of [`error::CoreError`] and [`error::CoreResult`].
pub use error::{CoreError, CoreResult};
/// Re-exports of [`event::EventLog`], [`event::UiEvent`], and [`event::UiEventKind`].
pub use event::{EventLog, UiEvent, UiEventKind};
/// Re-exports of [`schedule::TimerHandle`] and [`schedule::Timers`].
pub use schedule::{TimerHandle, Timers};
