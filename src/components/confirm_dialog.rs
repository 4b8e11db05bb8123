use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// Delete confirmation popup. The event is only removed after an explicit
    /// confirm; declining leaves it untouched.
    pub fn render(frame: &mut Frame, area: Rect, event_name: &str) {
        let popup_w = area.width.min(50).max(30);
        let popup_h = area.height.min(7).max(5);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Delete Event ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines = vec![
            Line::from(format!(
                "Are you sure you want to delete \"{}\"?",
                event_name
            )),
            Line::from(Span::styled(
                "This action cannot be undone.",
                theme::current().dim,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Delete  ", theme::current().dim),
                Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Cancel", theme::current().dim),
            ]),
        ];

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
