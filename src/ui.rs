//! UI rendering for the terminal user interface.
//!
//! `draw` lays out the header tabs, the active page and the controls footer.
//! The geometry lives in `layout` so the event loop can hit-test clicks
//! against exactly what was drawn.

pub mod album;
pub mod layout;
pub mod listen;
pub mod record;
pub mod widgets;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Page};
use crate::audio::Transport;
use crate::config::{ControlsSettings, Settings};

/// Render the controls help text for `page`, incorporating scrub seconds.
fn controls_text(page: Page, controls: &ControlsSettings) -> String {
    let scrub = format!("scrub -/+{}s", controls.scrub_seconds);
    let keys: Vec<(&str, &str)> = match page {
        Page::Album => vec![
            ("arrows/hjkl", "move"),
            ("[/]", "category"),
            ("enter", "open"),
            ("esc/\u{2190}/\u{2192}", "lightbox"),
        ],
        Page::Listen => vec![
            ("j/k", "up/down"),
            ("enter", "play selected"),
            ("space", "play/pause"),
            ("H/L", scrub.as_str()),
        ],
        Page::Record => vec![
            ("j/k", "up/down"),
            ("enter", "play selected"),
            ("space", "play/pause"),
            ("s", "stop"),
            ("h/l", "prev/next"),
            ("r", "loop"),
            ("z", "shuffle"),
            ("-/+", "volume"),
            ("pgup/pgdn", "page"),
            ("H/L", scrub.as_str()),
        ],
    };
    keys.iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .chain(["[1/2/3/tab] page".to_string(), "[q] quit".to_string()])
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw<T: Transport>(frame: &mut Frame, app: &App<T>, settings: &Settings) {
    let main = layout::split_main(frame.area());

    // Header with page tabs
    let header = Block::default()
        .borders(Borders::ALL)
        .title(settings.ui.header_text.as_str())
        .title_alignment(Alignment::Center);
    frame.render_widget(header, main.header);
    for (i, (page, rect)) in Page::ALL
        .iter()
        .zip(layout::tab_rects(main.header))
        .enumerate()
    {
        let label = format!(" {} {} ", i + 1, page.title());
        let style = if *page == app.page() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(label).style(style), rect);
    }

    match app.page() {
        Page::Album => album::draw(frame, &app.album, main.content),
        Page::Listen => listen::draw(frame, &app.listen, main.content, &settings.ui),
        Page::Record => record::draw(frame, &app.record, main.content, &settings.ui),
    }

    let footer = Paragraph::new(controls_text(app.page(), &settings.controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, main.footer);
}
