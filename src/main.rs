mod app;
mod components;
mod planner;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode};
use chrono::Local;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut app = App::new();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content + status bar
            let layout = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

            // Status badges depend on the clock, so take a fresh `now` on
            // every draw.
            components::EventList::render(
                frame,
                layout[0],
                app.store.list(),
                app.selected,
                app.scroll,
                Local::now(),
                app.pending_delete_id(),
            );

            // Event form overlay
            if let Some(ref form) = app.form_state {
                components::EventForm::render(frame, area, form);
            }

            // Delete confirmation overlay
            if let Some(name) = app.confirmed_event_name() {
                let name = name.to_string();
                components::ConfirmDialog::render(frame, area, &name);
            }

            if app.show_help {
                render_help(frame, area);
            }

            render_status_bar(frame, layout[1], app, area.width);
        })?;

        if let Some(key) = tui::next_key_event(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Form => handle_form_input(app, key.code, key.modifiers),
                InputMode::Confirm => handle_confirm_input(app, key.code),
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('n'), _) => app.open_event_form(),
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => app.request_delete_selected(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Esc, _) => app.close_event_form(),
        (KeyCode::Enter, _) => app.submit_event_form(),
        (KeyCode::Tab, _) => app.form_tab(),
        (KeyCode::BackTab, _) => app.form_backtab(),
        (KeyCode::Backspace, _) => app.form_backspace(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => app.form_attach_image(),
        (KeyCode::Char(c), _) => app.form_input_char(c),
        _ => {}
    }
}

fn handle_confirm_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn render_status_bar(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App, w: u16) {
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let w = w as usize;

    let mode_str = match app.input_mode {
        InputMode::Normal => "[Events]",
        InputMode::Form => "[New Event]",
        InputMode::Confirm => "[Delete?]",
    };

    // Show status message if present, otherwise show context-aware hints
    let right_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        match app.input_mode {
            InputMode::Normal if w >= 70 => {
                " jk:Select n:New d:Delete ?:Help q:Quit".to_string()
            }
            InputMode::Normal => " n:New d:Del q:Quit".to_string(),
            InputMode::Form => " Tab:Next ^A:Attach Enter:Save Esc:Cancel".to_string(),
            InputMode::Confirm => " y:Delete n:Cancel".to_string(),
        }
    };

    let left = format!(" {} ", mode_str);
    let padding_len = w.saturating_sub(left.len() + right_text.len());
    let padding = " ".repeat(padding_len);

    let status_style = theme::current().status;
    let line = Line::from(vec![
        Span::styled(left, status_style),
        Span::styled(padding, status_style),
        Span::styled(right_text, status_style),
    ]);

    let bar = Paragraph::new(line).style(status_style);
    frame.render_widget(bar, area);
}

fn render_help(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    use ratatui::layout::Rect;
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.min(46).max(28);
    let popup_h = area.height.min(16).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Events", section_style)),
        Line::from(vec![
            Span::styled("  j/k ", key_style),
            Span::styled("or ", theme::current().dim),
            Span::styled("\u{2191}/\u{2193}  ", key_style),
            Span::styled("Select event", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  n         ", key_style),
            Span::styled("Create new event", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  d         ", key_style),
            Span::styled("Delete selected event", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Form", section_style)),
        Line::from(vec![
            Span::styled("  Tab       ", key_style),
            Span::styled("Next field", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl-A    ", key_style),
            Span::styled("Attach image at typed path", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::styled("Save event", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::current().dim),
            Span::styled("Esc     ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
