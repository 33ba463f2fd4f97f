use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::audio::Transport;
use crate::config::UiSettings;
use crate::listen::Listen;

use super::layout;
use super::widgets::{progress_gauge, time_text};

pub fn draw<T: Transport>(frame: &mut Frame, listen: &Listen<T>, content: Rect, ui: &UiSettings) {
    let areas = layout::split_listen(content);

    // Now playing
    let state = if listen.is_playing() { "\u{25b6}" } else { "\u{23f8}" };
    let mut status = match listen.loaded_track() {
        Some(track) => format!("{state} {}", track.title),
        None => "--".to_string(),
    };
    if let Some(err) = listen.error() {
        status.push_str(&format!(" • {err}"));
    }
    let now_playing = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, areas.now_playing);

    let gauge = progress_gauge(
        listen.fill_ratio(),
        time_text(listen.position(), listen.duration(), ui),
    );
    frame.render_widget(gauge, areas.progress);

    // Track list
    let tracks = listen.tracks();
    let window = row_window(listen, areas.list);
    let items: Vec<ListItem> = window
        .clone()
        .map(|i| {
            let marker = if listen.loaded() == Some(i) { "\u{266a} " } else { "  " };
            ListItem::new(format!("{marker}{}", tracks[i].title))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !tracks.is_empty() {
        state.select(Some(listen.cursor() - window.start));
    }
    frame.render_stateful_widget(list, areas.list, &mut state);

    if let Some(alert) = listen.alert() {
        draw_alert(frame, alert, content);
    }
}

/// Track indices drawn in the list area.
pub fn row_window<T: Transport>(listen: &Listen<T>, list: Rect) -> std::ops::Range<usize> {
    layout::list_window(
        listen.tracks().len(),
        list.height.saturating_sub(2) as usize,
        listen.cursor(),
    )
}

/// Modal message; any key or click dismisses it.
fn draw_alert(frame: &mut Frame, text: &str, area: Rect) {
    let popup = layout::centered_rect_sized(40, 5, area);
    frame.render_widget(Clear, popup);
    let body = Paragraph::new(format!("{text}\n\n(press any key)"))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" alert "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(body, popup);
}
