use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::planner::{classify, Event};
use crate::theme;

pub struct EventList;

impl EventList {
    /// Project the store contents into cards. `now` is passed in fresh on
    /// every draw so the status badges roll over as time advances;
    /// `pending_delete` dims the card that is animating out.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        events: &[Event],
        selected: usize,
        scroll: usize,
        now: DateTime<Local>,
        pending_delete: Option<&str>,
    ) {
        let title = format!(" Your Events ({}) ", events.len());
        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new(
                "No events yet\n\nPress 'n' to create your first event and get started with planning.",
            )
            .style(theme::current().dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = events
            .iter()
            .enumerate()
            .map(|(idx, ev)| {
                let is_selected = idx == selected;
                let is_deleting = pending_delete == Some(ev.id.as_str());
                format_card(ev, inner_w, is_selected, is_deleting, now)
            })
            .skip(scroll)
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn format_card(
    ev: &Event,
    max_width: usize,
    selected: bool,
    deleting: bool,
    now: DateTime<Local>,
) -> ListItem<'static> {
    let status = classify(ev.date, now);

    let base = if deleting {
        Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let marker = if selected { "\u{25b8} " } else { "  " };
    let name_style = if selected {
        theme::current().highlight.patch(base)
    } else {
        base.add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), name_style),
        Span::styled(ev.name.clone(), name_style),
        Span::raw(" "),
        Span::styled(format!(" {} ", status.label), theme::current().badge(status.tier)),
    ])];

    if let Some(ref image) = ev.image {
        let kb = data_url_source_kb(image);
        lines.push(Line::from(Span::styled(
            format!("    image attached ({} KB)", kb),
            theme::current().dim.patch(base),
        )));
    }

    if let Some(ref desc) = ev.description {
        lines.push(Line::from(Span::styled(
            format!("    {}", truncate(desc, max_width.saturating_sub(4))),
            base,
        )));
    }

    let mut schedule = format!("    {}  {}", ev.date_display(), ev.time);
    let used = schedule.len() + 3;
    if used + ev.location.len() <= max_width {
        schedule.push_str(&format!("  @ {}", ev.location));
    } else {
        let room = max_width.saturating_sub(used);
        schedule.push_str(&format!("  @ {}", truncate(&ev.location, room)));
    }
    lines.push(Line::from(Span::styled(
        schedule,
        theme::current().dim.patch(base),
    )));

    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

/// Approximate decoded size of a data URL's base64 body, in KB.
fn data_url_source_kb(data_url: &str) -> usize {
    let body = data_url.split_once(',').map(|(_, b)| b.len()).unwrap_or(0);
    body * 3 / 4 / 1024
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}\u{2026}", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Rooftop", 20), "Rooftop");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("A very long location name", 10), "A very lo\u{2026}");
    }

    #[test]
    fn data_url_size_reflects_the_source_bytes() {
        // 12 source bytes -> 16 base64 chars
        let url = format!("data:image/png;base64,{}", "A".repeat(16 * 1024));
        assert_eq!(data_url_source_kb(&url), 12);
    }
}
