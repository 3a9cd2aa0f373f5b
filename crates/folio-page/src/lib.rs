//! Page-level interactivity for Folio.
//!
//! The [`SectionRouter`] fades one page section out and the next one in, the
//! [`Backdrop`] animates the decorative particle field, and [`Portfolio`]
//! wires both together with the chat widget on a single simulated clock.

/// Particle backdrop simulation.
pub mod backdrop;
/// Error types for page components.
pub mod error;
/// Static page structure: sections, nav links, mobile menu.
pub mod layout;
/// The top-level page orchestrator.
pub mod portfolio;
/// Section navigation state machine.
pub mod router;

pub use backdrop::{Backdrop, Particle};
pub use error::{PageError, PageResult};
pub use layout::{MobileMenu, NavLink, PageLayout, Section};
pub use portfolio::Portfolio;
pub use router::SectionRouter;
