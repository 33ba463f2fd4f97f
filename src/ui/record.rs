use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::audio::Transport;
use crate::config::UiSettings;
use crate::record::Record;

use super::layout;
use super::widgets::{PictureView, progress_gauge, time_text};

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

pub fn draw<T: Transport>(frame: &mut Frame, record: &Record<T>, content: Rect, ui: &UiSettings) {
    let areas = layout::split_record(content);

    if let Some(picture) = record.slideshow().visible_picture() {
        frame.render_widget(PictureView::new(picture), areas.background);
    }
    if record.is_ui_hidden() {
        return;
    }

    frame.render_widget(Clear, areas.panel);

    // Track info
    let state = if record.is_playing() { "Playing" } else if record.current().is_some() { "Paused" } else { "Stopped" };
    let mut info = vec![
        Line::from(Span::styled(
            record.title_label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(record.composer_label()),
        Line::from(format!(
            "{state} • LOOP: {} • SHUFFLE: {} • VOL: {}",
            on_off(record.is_looping()),
            on_off(record.is_shuffling()),
            record.volume()
        )),
    ];
    if let Some(err) = record.error() {
        info.push(Line::from(Span::styled(err, Style::default().fg(Color::Red))));
    }
    let info = Paragraph::new(info).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" record "),
    );
    frame.render_widget(info, areas.info);

    let gauge = progress_gauge(
        record.fill_ratio(),
        time_text(record.position(), record.duration(), ui),
    );
    frame.render_widget(gauge, areas.progress);

    // Rows of the current page
    let tracks = record.tracks();
    let rows = record.visible_rows();
    let window = row_window(record, areas.list);
    let items: Vec<ListItem> = window
        .clone()
        .map(|i| {
            let marker = if record.current() == Some(i) { "\u{266a} " } else { "  " };
            ListItem::new(format!("{marker}{:>2}. {}", i + 1, tracks[i].title))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if rows.contains(&record.cursor()) && window.contains(&record.cursor()) {
        state.select(Some(record.cursor() - window.start));
    }
    frame.render_stateful_widget(list, areas.list, &mut state);

    // Page buttons
    let count = record.page_count();
    for (i, rect) in layout::page_button_rects(areas.pages, count).into_iter().enumerate() {
        let style = if i + 1 == record.page() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(format!(" {} ", i + 1)).style(style), rect);
    }
}

/// Track indices drawn in the list area: the current page, windowed around
/// the cursor when the page is taller than the area.
pub fn row_window<T: Transport>(record: &Record<T>, list: Rect) -> std::ops::Range<usize> {
    let rows = record.visible_rows();
    let height = list.height.saturating_sub(2) as usize;
    let cursor = record.cursor().clamp(rows.start, rows.end.max(rows.start + 1) - 1);
    let w = layout::list_window(rows.len(), height, cursor - rows.start);
    rows.start + w.start..rows.start + w.end
}
