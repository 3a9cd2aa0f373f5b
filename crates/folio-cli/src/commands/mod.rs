pub mod backdrop;
pub mod chat;
pub mod check;
pub mod graph;
pub mod navigate;

use colored::Colorize;

use folio_core::{FolioConfig, UiEvent, UiEventKind};
use folio_page::Portfolio;

/// Viewport assumed by commands that never draw anything.
const HEADLESS_VIEWPORT: (f64, f64) = (1280.0, 720.0);

/// Build the portfolio page for a headless command.
fn load_page(config: FolioConfig) -> Result<Portfolio, String> {
    let (width, height) = HEADLESS_VIEWPORT;
    Portfolio::with_defaults(config, width, height)
        .map_err(|e| format!("failed to load page: {e}"))
}

/// One line of an event trace: timestamp and coloured description.
fn format_event(event: &UiEvent) -> String {
    let at = format!("[{:>6} ms]", event.at_ms).dimmed();
    format!("  {at} {}", colorize_event(&event.kind, &event.description))
}

fn colorize_event(kind: &UiEventKind, description: &str) -> colored::ColoredString {
    match kind {
        UiEventKind::NavActivated { .. } => description.yellow(),
        UiEventKind::SectionExitStarted { .. } => description.red(),
        UiEventKind::SectionShown { .. } => description.green().bold(),
        UiEventKind::SectionEnterFinished { .. } => description.green(),
        UiEventKind::ScrollRequested { .. } => description.blue(),
        UiEventKind::MenuToggled { .. } => description.magenta(),
        UiEventKind::ChatOpened | UiEventKind::ChatClosed => description.cyan(),
        UiEventKind::MessageAdded { .. } | UiEventKind::OptionsShown { .. } => description.normal(),
        UiEventKind::TypingStarted | UiEventKind::TypingStopped => description.dimmed(),
        UiEventKind::ResponseUnresolved { .. } => description.red().bold(),
        UiEventKind::BackdropReset { .. } => description.dimmed(),
    }
}
