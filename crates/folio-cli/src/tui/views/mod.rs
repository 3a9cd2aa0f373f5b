//! Rendering: nav bar, backdrop canvas, section card, chat panel, popups.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};

use folio_chat::{BOT_NAME, Sender};
use folio_page::Section;

use super::app::{App, Focus, section_body};

/// Colour for link lines; the configured CSS `rgba()` has no terminal equivalent.
const LINE_COLOR: Color = Color::Rgb(0, 100, 75);

/// Draw the whole page.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_nav_bar(frame, app, chunks[0]);

    let (width, height) = dots(chunks[1]);
    app.fit_backdrop(width, height);
    draw_backdrop(frame, app, chunks[1]);
    draw_section(frame, app, chunks[1]);

    if app.page.chat().is_open() {
        draw_chat(frame, app, chat_rect(chunks[1]));
    }
    if app.page.router().menu_shown() {
        draw_menu_popup(frame, app, chunks[1]);
    }

    draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Backdrop size in braille dots for a terminal of the given size.
pub fn canvas_extent(terminal: Rect) -> (f64, f64) {
    dots(Rect::new(0, 0, terminal.width, terminal.height.saturating_sub(2)))
}

fn dots(area: Rect) -> (f64, f64) {
    (f64::from(area.width) * 2.0, f64::from(area.height) * 4.0)
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let router = app.page.router();
    let titles: Vec<String> = router
        .links()
        .iter()
        .enumerate()
        .map(|(i, link)| format!("[{}] {}", i + 1, link.label))
        .collect();
    let selected = router.links().iter().position(|l| l.is_active());

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Rgb(0, 200, 150)).bold())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn draw_backdrop(frame: &mut Frame, app: &App, area: Rect) {
    let backdrop = app.page.backdrop();
    let (width, height) = (backdrop.width(), backdrop.height());
    let particle_color = backdrop
        .config()
        .particle_color
        .parse::<Color>()
        .unwrap_or(Color::Green);

    let coords: Vec<(f64, f64)> = backdrop
        .particles()
        .iter()
        .map(|p| (p.x, height - p.y))
        .collect();
    let links = backdrop.links();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for &(a, b) in &links {
                let (x1, y1) = coords[a];
                let (x2, y2) = coords[b];
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, LINE_COLOR));
            }
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: particle_color,
            });
        });

    frame.render_widget(canvas, area);
}

fn draw_section(frame: &mut Frame, app: &App, area: Rect) {
    let Some(section) = app.page.router().visible_section() else {
        return;
    };
    let card = centered_rect(60, 50, area);

    let paragraph = Paragraph::new(section_body(&section.id))
        .block(
            Block::default()
                .title(format!(" {} ", section.title))
                .borders(Borders::ALL)
                .border_style(section_style(section)),
        )
        .style(section_style(section))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, card);
    frame.render_widget(paragraph, card);
}

/// Exit fades to grey, enter is highlighted, rest is plain.
fn section_style(section: &Section) -> Style {
    if section.is_exiting() {
        Style::default().fg(Color::DarkGray)
    } else if section.is_entering() {
        Style::default().fg(Color::Rgb(0, 200, 150)).bold()
    } else {
        Style::default().fg(Color::White)
    }
}

fn chat_rect(area: Rect) -> Rect {
    let width = (area.width / 5 * 2).max(30).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height)
}

fn draw_chat(frame: &mut Frame, app: &App, area: Rect) {
    let chat = app.page.chat();
    let mut lines: Vec<Line<'static>> = Vec::new();

    for message in chat.messages().messages() {
        match message.sender {
            Sender::Bot => {
                lines.push(Line::from(Span::styled(
                    format!("{BOT_NAME}:"),
                    Style::default().fg(Color::Cyan).bold(),
                )));
                for text in message.text.lines() {
                    lines.push(Line::from(format!("  {text}")));
                }
            }
            Sender::User => lines.push(Line::from(vec![
                Span::styled("You: ", Style::default().fg(Color::Green).bold()),
                Span::raw(message.text.clone()),
            ])),
        }
        lines.push(Line::from(""));
    }

    if chat.is_typing() {
        lines.push(Line::from(Span::styled(
            format!("{BOT_NAME} is typing..."),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }
    for (i, option) in chat.options().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(option.label.clone()),
        ]));
    }

    let inner_height = area.height.saturating_sub(3);
    let overflow = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let border = if app.focus == Focus::Chat {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let log = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {BOT_NAME} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((overflow, 0));

    let prompt = Paragraph::new(format!("> {}", app.input))
        .style(Style::default().fg(Color::Yellow).bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(log, chunks[0]);
    frame.render_widget(prompt, chunks[1]);
}

fn draw_menu_popup(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .page
        .router()
        .links()
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if link.is_active() {
                Style::default().fg(Color::Rgb(0, 200, 150)).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!("{}  {}", i + 1, link.label)).style(style)
        })
        .collect();

    let height = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = Rect::new(area.x, area.y, 20.min(area.width), height.min(area.height));

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(notice) = &app.notice {
        notice.clone()
    } else {
        let hints = match app.focus {
            Focus::Page => "1-4:nav h:home m:menu c:chat ?:help q:quit",
            Focus::Chat => "type + Enter:choose Tab:page Esc:close chat",
        };
        let last = app
            .page
            .events()
            .events()
            .last()
            .map(|e| e.description.as_str())
            .unwrap_or("");
        format!("{:>7} ms | {last} | {hints}", app.page.now_ms())
    };

    let style = if app.notice.is_some() {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    frame.render_widget(Paragraph::new(status).style(style), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Page:"),
        Line::from("  1-4         Open section"),
        Line::from("  h           Logo (home)"),
        Line::from("  m           Toggle mobile menu"),
        Line::from("  c           Toggle chat"),
        Line::from("  Tab         Focus chat"),
        Line::from(""),
        Line::from("Chat:"),
        Line::from("  Enter       Choose option (number or label)"),
        Line::from("  Tab         Back to page"),
        Line::from("  Esc         Close chat"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
