use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use folio_chat::{BOT_NAME, Sender};
use folio_core::FolioConfig;
use folio_page::Portfolio;

pub fn run(picks: &[String], realtime: bool, transcript: Option<&Path>) -> Result<(), String> {
    let mut page = super::load_page(FolioConfig::default())?;
    let mut shown = 0;

    page.toggle_chat();
    wait_for_reply(&mut page, realtime);
    shown = print_new(&page, shown);

    if picks.is_empty() {
        interactive(&mut page, realtime, shown)?;
    } else {
        for pick in picks {
            if page.chat().is_finished() {
                return Err(format!("conversation has ended; cannot pick \"{pick}\""));
            }
            page.select_input(pick)
                .map_err(|e| format!("cannot pick \"{pick}\": {e}{}", hint(&page, pick)))?;
            wait_for_reply(&mut page, realtime);
            shown = print_new(&page, shown);
        }
    }

    if let Some(path) = transcript {
        write_transcript(&page, path)?;
    }
    Ok(())
}

fn interactive(page: &mut Portfolio, realtime: bool, mut shown: usize) -> Result<(), String> {
    println!("  {}", "Type a number or an option, 'quit' to exit.".dimmed());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !page.chat().is_finished() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match page.select_input(input) {
            Ok(_) => {
                wait_for_reply(page, realtime);
                shown = print_new(page, shown);
            }
            Err(e) => println!("  {}{}", e.to_string().yellow(), hint(page, input)),
        }
    }
    Ok(())
}

/// A "did you mean" suffix listing options that resemble `input`.
pub fn hint(page: &Portfolio, input: &str) -> String {
    let suggestions = page.chat().suggestions(input, 3);
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {})", suggestions.join(", "))
    }
}

/// Let pending timers fire, sleeping through them when `realtime` is set.
fn wait_for_reply(page: &mut Portfolio, realtime: bool) {
    if !realtime {
        page.settle();
        return;
    }
    while let Some(due) = page.next_due() {
        let delay = due.saturating_sub(page.now_ms());
        if page.chat().is_typing() {
            print!("  {}\r", format!("{BOT_NAME} is typing...").dimmed());
            io::stdout().flush().ok();
        }
        thread::sleep(Duration::from_millis(delay));
        page.advance(delay);
    }
}

/// Print messages after the first `shown`, then the current options.
/// Returns the new number of printed messages.
fn print_new(page: &Portfolio, shown: usize) -> usize {
    let chat = page.chat();
    let messages = chat.messages().messages();

    for message in &messages[shown.min(messages.len())..] {
        match message.sender {
            Sender::Bot => {
                println!("  {}", format!("{BOT_NAME}:").cyan().bold());
                for line in message.text.lines() {
                    println!("    {line}");
                }
            }
            Sender::User => println!("  {} {}", "You:".green().bold(), message.text),
        }
        println!();
    }

    if chat.is_finished() {
        println!("  {}", "(conversation ended)".dimmed());
    } else {
        for (i, option) in chat.options().iter().enumerate() {
            println!("  {} {}", format!("[{}]", i + 1).yellow(), option.label);
        }
        if !chat.options().is_empty() {
            println!();
        }
    }
    messages.len()
}

fn write_transcript(page: &Portfolio, path: &Path) -> Result<(), String> {
    let log = page.chat().messages();
    let content = if path.extension().is_some_and(|ext| ext == "json") {
        log.export_json()
            .map_err(|e| format!("JSON serialization error: {e}"))?
    } else {
        log.export_markdown(BOT_NAME)
    };
    std::fs::write(path, content)
        .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!("  Transcript written to {}", path.display());
    Ok(())
}
