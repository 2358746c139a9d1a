//! Countries TUI - actor-based country browser
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async fetch execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use countries_tui::app::AppActor;
use countries_tui::constants::APP_NAME;
use countries_tui::messages::ui_events::key_to_ui_event;
use countries_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use countries_tui::models::{Country, FetchState};
use countries_tui::network::NetworkActor;
use countries_tui::ui::{country_item, spinner_glyph};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "countries.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (fires the one-shot startup fetch)
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    // Content branches on the fetch lifecycle
    match &state.fetch {
        FetchState::Start => {
            // Nothing fetched yet: blank
        }
        FetchState::Loading => draw_loading(f, state, main_chunks[1]),
        FetchState::Success(countries) => draw_country_list(f, state, countries, main_chunks[1]),
        FetchState::Failure(_) => {
            // Failure surfaces only through the toast below
        }
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.toast {
        draw_toast(f, message, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let count = match &state.fetch {
        FetchState::Success(countries) => format!(" ({})", countries.len()),
        _ => String::new(),
    };

    let title = Line::from(Span::styled(
        format!(" {}{} ", APP_NAME, count),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    ));
    f.render_widget(Paragraph::new(title), area);
}

fn draw_loading(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let indicator = Paragraph::new(format!(
        "{} Loading countries...",
        spinner_glyph(state.spinner_frame)
    ))
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center);

    f.render_widget(indicator, chunks[1]);
}

fn draw_country_list(f: &mut Frame, state: &RenderState, countries: &[Country], area: Rect) {
    let items: Vec<ListItem> = countries
        .iter()
        .enumerate()
        .map(|(i, country)| country_item(country, i, state.selected))
        .collect();

    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Countries (↑/↓ navigate, Enter select) "))
        .highlight_style(Style::default().fg(Color::Yellow).bold());

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.fetch.is_loading() {
        String::from(" Fetching country list... ")
    } else {
        let mut status = String::from(" ↑/↓:navigate | Enter:select | r:refresh | ?:help | q:quit ");
        if let Some(updated) = state.last_updated {
            status.push_str(&format!(
                "| {}ms, updated {} ",
                state.last_fetch_ms,
                updated.format("%H:%M:%S UTC")
            ));
        }
        status
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

/// Transient failure notification anchored to the bottom of the screen
fn draw_toast(f: &mut Frame, message: &str, area: Rect) {
    let width = (message.chars().count().min(120) as u16 + 4)
        .min(area.width.saturating_sub(4))
        .max(12);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: (area.y + area.height).saturating_sub(4),
        width,
        height: 3,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ");

    let toast = Paragraph::new(message.to_string())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, toast_area);
    f.render_widget(toast, toast_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 50, area);

    let help_text = r#"
 COUNTRIES TUI - Keyboard Shortcuts

 NAVIGATION
   ↑ / ↓ (or k / j)   Move through the list
   Enter              Select the highlighted country

 DATA
   r                  Refresh the country list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
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
