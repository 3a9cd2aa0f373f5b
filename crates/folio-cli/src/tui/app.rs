//! Terminal application state wrapped around a live [`Portfolio`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use folio_core::{BackdropConfig, FolioConfig};
use folio_page::Portfolio;

use crate::commands::chat::hint;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Single-key page shortcuts.
    Page,
    /// Text entry for the chat window.
    Chat,
}

/// Main application state for the page TUI.
pub struct App {
    /// The simulated page.
    pub page: Portfolio,
    /// Who receives key presses.
    pub focus: Focus,
    /// Pending chat input.
    pub input: String,
    /// Last chat error, shown until the next keystroke.
    pub notice: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Load the portfolio page with the backdrop seeded from `seed`.
    pub fn new(seed: u64, width: f64, height: f64) -> Result<Self, String> {
        let config =
            FolioConfig::default().with_backdrop(BackdropConfig::default().with_seed(seed));
        let page = Portfolio::with_defaults(config, width, height)
            .map_err(|e| format!("failed to load page: {e}"))?;
        Ok(Self {
            page,
            focus: Focus::Page,
            input: String::new(),
            notice: None,
            show_help: false,
            should_quit: false,
        })
    }

    /// Advance the page by one display frame of `elapsed_ms`.
    pub fn frame(&mut self, elapsed_ms: u64) {
        self.page.frame(elapsed_ms);
    }

    /// Regenerate the backdrop if the canvas changed size.
    pub fn fit_backdrop(&mut self, width: f64, height: f64) {
        let backdrop = self.page.backdrop();
        if backdrop.width() != width || backdrop.height() != height {
            self.page.resize(width, height);
        }
    }

    /// Route a key press. Ctrl+C always quits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.notice = None;

        match self.focus {
            Focus::Page => self.handle_page_key(key.code),
            Focus::Chat => self.handle_chat_key(key.code),
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('m') => self.page.toggle_menu(),
            KeyCode::Char('h') => {
                let result = self.page.click_logo().map(|_| ());
                self.report(result);
            }
            KeyCode::Char('c') => {
                self.page.toggle_chat();
                if self.page.chat().is_open() {
                    self.focus = Focus::Chat;
                }
            }
            KeyCode::Tab if self.page.chat().is_open() => self.focus = Focus::Chat,
            KeyCode::Char(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    let result = self.page.click_link(index).map(|_| ());
                    self.report(result);
                }
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.page.close_chat();
                self.input.clear();
                self.focus = Focus::Page;
            }
            KeyCode::Tab => self.focus = Focus::Page,
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                let input = input.trim();
                if !input.is_empty() {
                    let result = self.page.select_input(input).map(|_| ());
                    self.report(result);
                    if let Some(notice) = self.notice.as_mut() {
                        notice.push_str(&hint(&self.page, input));
                    }
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn report(&mut self, result: folio_page::PageResult<()>) {
        if let Err(e) = result {
            debug!(error = %e, "input rejected");
            self.notice = Some(e.to_string());
        }
    }
}

/// Body text for each portfolio section.
pub fn section_body(id: &str) -> &'static str {
    match id {
        "home" => {
            "Andrea Berra\n\nRobotics software engineer building autonomy for aerial \
             systems.\n\nOpen the chat with 'c' to ask And-droid about skills, projects, \
             or contact details."
        }
        "about" => {
            "Full-stack development for autonomous aerial systems: control, estimation, \
             simulation, and perception.\n\nCore tools: C++, Python, ROS/ROS2, PX4, Gazebo."
        }
        "projects" => {
            "Omniquad\n  A full framework for omnidirectional drones (C++, ROS2, PX4, Gazebo).\n\n\
             GIN\n  A lightweight AI target tracker (Python/YOLO) for resource-constrained \
             hardware."
        }
        "contact" => "Email: andrea.berra@outlook.com\nLinkedIn: linkedin.com/in/andrea-berra/",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(42, 200.0, 100.0).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn digit_clicks_nav_link() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        app.frame(1000);
        assert_eq!(app.page.router().current(), Some("about"));
    }

    #[test]
    fn out_of_range_link_sets_notice() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        assert!(app.notice.is_some());
        press(&mut app, KeyCode::Char('m'));
        assert!(app.notice.is_none());
        assert!(app.page.router().menu_shown());
    }

    #[test]
    fn chat_focus_and_typed_choice() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.focus, Focus::Chat);
        app.frame(500);

        for c in "2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.input.is_empty());
        app.frame(1500);
        assert_eq!(app.page.chat().current_node(), Some("projects_overview"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Page);
        assert!(!app.page.chat().is_open());
    }

    #[test]
    fn unmatched_chat_input_suggests_options() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        app.frame(500);
        for c in "info".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        let notice = app.notice.clone().unwrap();
        assert!(notice.contains("no option matches"));
        assert!(notice.contains("did you mean: View Contact Info"));
    }

    #[test]
    fn ctrl_c_quits_from_chat() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn every_section_has_body() {
        for id in ["home", "about", "projects", "contact"] {
            assert!(!section_body(id).is_empty());
        }
    }
}
