//! Key and mouse dispatch for the three pages.
//!
//! Hit-testing recomputes the rects from `ui::layout` for the area of the last
//! drawn frame, so a click maps to exactly what is on screen.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::album::{Album, LightboxKey, TileImage};
use crate::app::{App, Page};
use crate::audio::Transport;
use crate::config::ControlsSettings;
use crate::listen::Listen;
use crate::record::Record;
use crate::ui::{self, layout};

/// Handle one key press. Returns `true` when the user asked to quit.
pub fn handle_key<T: Transport>(
    app: &mut App<T>,
    key: KeyEvent,
    area: Rect,
    controls: &ControlsSettings,
    now: Instant,
) -> bool {
    // Any key dismisses the alert and does nothing else.
    if app.page() == Page::Listen && app.listen.alert().is_some() {
        app.listen.dismiss_alert();
        return false;
    }
    if app.page() == Page::Record {
        app.record.on_activity(now);
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('1') => app.switch_to(Page::Album),
        KeyCode::Char('2') => app.switch_to(Page::Listen),
        KeyCode::Char('3') => app.switch_to(Page::Record),
        KeyCode::Tab => app.cycle_page(),
        _ => {
            let content = layout::split_main(area).content;
            let scrub = controls.scrub_seconds as i64;
            match app.page() {
                Page::Album => album_key(&mut app.album, key.code, content),
                Page::Listen => listen_key(&mut app.listen, key.code, scrub),
                Page::Record => record_key(&mut app.record, key.code, scrub, now),
            }
        }
    }
    false
}

fn album_key(album: &mut Album, code: KeyCode, content: Rect) {
    if album.is_lightbox_open() {
        let key = match code {
            KeyCode::Esc => LightboxKey::Escape,
            KeyCode::Left | KeyCode::Char('h') => LightboxKey::Left,
            KeyCode::Right | KeyCode::Char('l') => LightboxKey::Right,
            _ => return,
        };
        album.handle_key(key);
        return;
    }

    let cols = layout::grid_geometry(layout::split_album(content).grid, album.cursor()).cols as isize;
    match code {
        KeyCode::Left | KeyCode::Char('h') => album.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => album.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => album.move_cursor(-cols),
        KeyCode::Down | KeyCode::Char('j') => album.move_cursor(cols),
        KeyCode::Char('[') => album.prev_category(),
        KeyCode::Char(']') => album.next_category(),
        KeyCode::Enter => {
            if let Some(photo) = album.cursor_tile() {
                album.open_tile(photo);
            }
        }
        _ => {}
    }
}

fn listen_key<T: Transport>(listen: &mut Listen<T>, code: KeyCode, scrub: i64) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => listen.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => listen.move_cursor(-1),
        KeyCode::Enter => listen.activate_cursor(),
        KeyCode::Char(' ') => listen.press_play_pause(),
        KeyCode::Char('H') => listen.seek_by(-scrub),
        KeyCode::Char('L') => listen.seek_by(scrub),
        _ => {}
    }
}

fn record_key<T: Transport>(record: &mut Record<T>, code: KeyCode, scrub: i64, now: Instant) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => record.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => record.move_cursor(-1),
        KeyCode::Enter => record.activate_cursor(now),
        KeyCode::Char(' ') => record.toggle_play(),
        KeyCode::Char('s') => record.stop(),
        KeyCode::Char('h') => record.prev(now),
        KeyCode::Char('l') => record.next(now),
        KeyCode::Char('r') => record.toggle_loop(),
        KeyCode::Char('z') => record.toggle_shuffle(),
        KeyCode::Char('-') => record.volume_down(),
        KeyCode::Char('+') | KeyCode::Char('=') => record.volume_up(),
        KeyCode::PageUp => record.prev_page(),
        KeyCode::PageDown => record.next_page(),
        KeyCode::Char('H') => record.seek_by(-scrub),
        KeyCode::Char('L') => record.seek_by(scrub),
        _ => {}
    }
}

/// Handle one mouse event against the layout of `area`.
pub fn handle_mouse<T: Transport>(app: &mut App<T>, mouse: MouseEvent, area: Rect, now: Instant) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if app.page() == Page::Record {
                app.record.on_activity(now);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => click(app, area, x, y, now),
        MouseEventKind::ScrollDown => scroll(app, 1, now),
        MouseEventKind::ScrollUp => scroll(app, -1, now),
        _ => {}
    }
}

fn scroll<T: Transport>(app: &mut App<T>, delta: isize, now: Instant) {
    match app.page() {
        Page::Album if !app.album.is_lightbox_open() => app.album.move_cursor(delta),
        Page::Album => {}
        Page::Listen => app.listen.move_cursor(delta),
        Page::Record => {
            app.record.on_activity(now);
            app.record.move_cursor(delta);
        }
    }
}

fn click<T: Transport>(app: &mut App<T>, area: Rect, x: u16, y: u16, now: Instant) {
    let main = layout::split_main(area);

    if app.page() == Page::Listen && app.listen.alert().is_some() {
        app.listen.dismiss_alert();
        return;
    }
    if let Some(tab) = layout::tab_at(main.header, x, y) {
        app.switch_to(Page::ALL[tab]);
        return;
    }
    if !layout::hit(main.content, x, y) {
        return;
    }

    match app.page() {
        Page::Album => click_album(&mut app.album, main.content, x, y),
        Page::Listen => click_listen(&mut app.listen, main.content, x, y),
        Page::Record => {
            // A click on hidden UI only brings it back.
            let hidden = app.record.is_ui_hidden();
            app.record.on_activity(now);
            if !hidden {
                click_record(&mut app.record, main.content, x, y, now);
            }
        }
    }
}

fn click_album(album: &mut Album, content: Rect, x: u16, y: u16) {
    if album.is_lightbox_open() {
        let areas = layout::split_lightbox(content);
        if layout::hit(areas.prev_button, x, y) {
            album.lightbox_prev();
        } else if layout::hit(areas.next_button, x, y) {
            album.lightbox_next();
        } else if !on_lightbox_photo(album, areas.photo, x, y) && !layout::hit(areas.caption, x, y) {
            album.click_lightbox_background();
        }
        return;
    }

    let areas = layout::split_album(content);
    let count = album.catalog().categories().len();
    if let Some(category) = layout::category_at(areas.sidebar, count, x, y) {
        album.select_category(category);
        return;
    }
    let visible = album.visible_tiles();
    if let Some(pos) = layout::tile_at(areas.grid, visible.len(), album.cursor(), x, y) {
        album.set_cursor(pos);
        album.open_tile(visible[pos]);
    }
}

/// Whether `(x, y)` lands on the drawn picture rather than the letterbox.
fn on_lightbox_photo(album: &Album, photo_area: Rect, x: u16, y: u16) -> bool {
    let Some(photo) = album.lightbox_photo() else {
        return false;
    };
    match album.image(photo) {
        TileImage::Ready(picture) => {
            layout::fit_picture(photo_area, picture.width(), picture.height())
                .is_some_and(|fit| layout::hit(fit.rect, x, y))
        }
        TileImage::Loading | TileImage::Failed => false,
    }
}

fn click_listen<T: Transport>(listen: &mut Listen<T>, content: Rect, x: u16, y: u16) {
    let areas = layout::split_listen(content);
    if let Some(p) = layout::progress_fraction(areas.progress, x, y) {
        listen.seek_fraction(p);
        return;
    }
    let window = ui::listen::row_window(listen, areas.list);
    if let Some(i) = layout::list_row_at(areas.list, window, x, y) {
        listen.select_track(i);
    }
}

fn click_record<T: Transport>(record: &mut Record<T>, content: Rect, x: u16, y: u16, now: Instant) {
    let areas = layout::split_record(content);
    if let Some(p) = layout::progress_fraction(areas.progress, x, y) {
        record.seek_fraction(p);
        return;
    }
    let window = ui::record::row_window(record, areas.list);
    if let Some(i) = layout::list_row_at(areas.list, window, x, y) {
        record.play_track(i, now);
        return;
    }
    if let Some(page) = layout::page_button_at(areas.pages, record.page_count(), x, y) {
        record.switch_page(page);
    }
}
