use colored::Colorize;

use folio_core::{FolioConfig, TimingConfig, UiEventKind};
use folio_page::Portfolio;

pub fn run(sections: &[String], exit_ms: u64, enter_ms: u64) -> Result<(), String> {
    let timing = TimingConfig::default().with_section_transition(exit_ms, enter_ms);
    let mut page = super::load_page(FolioConfig::default().with_timing(timing))?;

    println!(
        "  {} {}",
        "Page".bold(),
        format!("(exit {exit_ms} ms, enter {enter_ms} ms)").dimmed()
    );
    let mut printed = print_trace(&page, 0);

    for request in sections {
        let started = match request.split_once('#') {
            Some((section, anchor)) => page.follow_deep_link(section, anchor),
            None => page.navigate(request),
        }
        .map_err(|e| e.to_string())?;

        if !started {
            println!("  {}", format!("(already on {request})").dimmed());
        }
        page.settle();
        printed = print_trace(&page, printed);
    }

    println!();
    println!(
        "  Showing '{}' after {} ms",
        page.router().current().unwrap_or("-"),
        page.now_ms()
    );
    Ok(())
}

/// Print router events logged after the first `from`. Returns the log length.
fn print_trace(page: &Portfolio, from: usize) -> usize {
    let events = page.events().events();
    for event in &events[from.min(events.len())..] {
        if matches!(event.kind, UiEventKind::BackdropReset { .. }) {
            continue;
        }
        println!("{}", super::format_event(event));
    }
    events.len()
}
