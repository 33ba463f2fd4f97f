use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::album::{Album, TileImage};

use super::layout;
use super::widgets::PictureView;

pub fn draw(frame: &mut Frame, album: &Album, content: Rect) {
    if album.is_lightbox_open() {
        draw_lightbox(frame, album, content);
        return;
    }

    let areas = layout::split_album(content);

    // Category sidebar
    let items: Vec<ListItem> = album
        .catalog()
        .categories()
        .iter()
        .map(|c| ListItem::new(c.name.as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" categories "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(album.active_category()));
    frame.render_stateful_widget(list, areas.sidebar, &mut state);

    // Photo grid
    let visible = album.visible_tiles();
    let title = format!(" photos ({}) ", visible.len());
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(title),
        areas.grid,
    );
    let geom = layout::grid_geometry(areas.grid, album.cursor());
    for (pos, &photo) in visible.iter().enumerate() {
        let Some(rect) = layout::tile_rect(areas.grid, geom, pos) else {
            continue;
        };
        draw_tile(frame, album, photo, pos == album.cursor(), rect);
    }

    // Hover preview of the tile under the cursor
    let text = match album.cursor_tile() {
        Some(photo) => format!(
            "{}: {}",
            album.catalog().master()[photo],
            album.description_text(photo)
        ),
        None => String::new(),
    };
    let description = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" description "))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, areas.description);
}

fn draw_tile(frame: &mut Frame, album: &Album, photo: usize, selected: bool, rect: Rect) {
    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(album.catalog().master()[photo].as_str());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    match album.image(photo) {
        TileImage::Ready(picture) => frame.render_widget(PictureView::new(picture), inner),
        TileImage::Loading => frame.render_widget(
            Paragraph::new(album.loading_text()).alignment(Alignment::Center),
            inner,
        ),
        TileImage::Failed => {}
    }
}

fn draw_lightbox(frame: &mut Frame, album: &Album, content: Rect) {
    let (Some(lightbox), Some(photo)) = (album.lightbox(), album.lightbox_photo()) else {
        return;
    };
    let areas = layout::split_lightbox(content);
    frame.render_widget(Clear, content);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        content,
    );

    let arrow = |s: &'static str| {
        Paragraph::new(Line::from(s))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    };
    let mid = |r: Rect| Rect::new(r.x, r.y + r.height / 2, r.width, r.height.min(1));
    frame.render_widget(arrow("\u{25c0}"), mid(areas.prev_button));
    frame.render_widget(arrow("\u{25b6}"), mid(areas.next_button));

    match album.image(photo) {
        TileImage::Ready(picture) => frame.render_widget(PictureView::new(picture), areas.photo),
        TileImage::Loading => frame.render_widget(
            Paragraph::new(album.loading_text()).alignment(Alignment::Center),
            mid(areas.photo),
        ),
        TileImage::Failed => {}
    }

    let caption = format!(
        "{}  {}\n{}",
        lightbox.counter(),
        album.catalog().master()[photo],
        album.description_text(photo)
    );
    frame.render_widget(
        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        areas.caption,
    );
}
