//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Every function here is pure: the event loop recomputes the same rects from
//! the last frame area to find out what a click landed on.

use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

// ── Main vertical layout ────────────────────────────────────────────────────

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const TAB_WIDTH: u16 = 12;

pub struct MainLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn split_main(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    MainLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Page tabs inside the header border, left to right.
pub fn tab_rects(header: Rect) -> [Rect; 3] {
    let inner = inner(header);
    std::array::from_fn(|i| {
        let x = inner.x + i as u16 * TAB_WIDTH;
        let width = TAB_WIDTH.min(inner.right().saturating_sub(x));
        Rect::new(x, inner.y, width, inner.height.min(1))
    })
}

pub fn tab_at(header: Rect, x: u16, y: u16) -> Option<usize> {
    tab_rects(header).iter().position(|r| hit(*r, x, y))
}

// ── Helpers ─────────────────────────────────────────────────────────────────

pub fn hit(r: Rect, x: u16, y: u16) -> bool {
    r.contains(Position { x, y })
}

/// The area inside a one-cell border.
pub fn inner(r: Rect) -> Rect {
    Rect::new(
        r.x.saturating_add(1),
        r.y.saturating_add(1),
        r.width.saturating_sub(2),
        r.height.saturating_sub(2),
    )
}

/// Where a picture lands when scaled to fit `area` at two pixels per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureFit {
    pub rect: Rect,
    /// Scaled pixel rows; the last cell row is half empty when odd.
    pub pixel_rows: u16,
}

pub fn fit_picture(area: Rect, width: u32, height: u32) -> Option<PictureFit> {
    let (pw, ph) = (width as f32, height as f32);
    if area.is_empty() || width == 0 || height == 0 {
        return None;
    }
    let scale = (area.width as f32 / pw).min(area.height as f32 * 2.0 / ph);
    let cols = ((pw * scale) as u16).clamp(1, area.width);
    let pixel_rows = ((ph * scale) as u16).clamp(1, area.height.saturating_mul(2));
    let rows = pixel_rows.div_ceil(2);
    Some(PictureFit {
        rect: Rect::new(
            area.x + (area.width - cols) / 2,
            area.y + (area.height - rows) / 2,
            cols,
            rows,
        ),
        pixel_rows,
    })
}

/// Compute a centered rectangle with given size constrained to `r`.
pub fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10u16.min(r.width));
    height = height.min(r.height.saturating_sub(2)).max(5u16.min(r.height));

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Rows of a list to draw so that `selected` stays visible, centered when
/// the list is longer than `height`.
pub fn list_window(total: usize, height: usize, selected: usize) -> Range<usize> {
    if total <= height || height == 0 {
        return 0..total;
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    start..start + height
}

/// Which list row a click landed on, given the rows currently drawn.
pub fn list_row_at(list: Rect, window: Range<usize>, x: u16, y: u16) -> Option<usize> {
    let inner = inner(list);
    if !hit(inner, x, y) {
        return None;
    }
    let row = window.start + (y - inner.y) as usize;
    window.contains(&row).then_some(row)
}

/// Horizontal click position inside a bordered progress bar, as `0.0..=1.0`.
pub fn progress_fraction(bar: Rect, x: u16, y: u16) -> Option<f64> {
    let inner = inner(bar);
    if !hit(bar, x, y) || inner.width == 0 {
        return None;
    }
    let offset = x.saturating_sub(inner.x).min(inner.width) as f64;
    Some((offset / inner.width as f64).clamp(0.0, 1.0))
}

// ── Album ───────────────────────────────────────────────────────────────────

pub const SIDEBAR_WIDTH: u16 = 18;
pub const DESCRIPTION_HEIGHT: u16 = 4;
pub const TILE_WIDTH: u16 = 16;
pub const TILE_HEIGHT: u16 = 7;

pub struct AlbumLayout {
    pub sidebar: Rect,
    pub grid: Rect,
    pub description: Rect,
}

pub fn split_album(content: Rect) -> AlbumLayout {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(TILE_WIDTH)])
        .split(content);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(TILE_HEIGHT), Constraint::Length(DESCRIPTION_HEIGHT)])
        .split(cols[1]);
    AlbumLayout {
        sidebar: cols[0],
        grid: right[0],
        description: right[1],
    }
}

pub fn category_at(sidebar: Rect, count: usize, x: u16, y: u16) -> Option<usize> {
    list_row_at(sidebar, 0..count, x, y)
}

/// How the visible tiles are laid out in the grid at the moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub cols: usize,
    pub rows: usize,
    /// Position (in the visible list) of the first tile drawn.
    pub first: usize,
}

/// Tile columns and rows that fit, scrolled so `cursor` is on screen.
pub fn grid_geometry(grid: Rect, cursor: usize) -> GridGeometry {
    let inner = inner(grid);
    let cols = (inner.width / TILE_WIDTH).max(1) as usize;
    let rows = (inner.height / TILE_HEIGHT).max(1) as usize;
    let cursor_row = cursor / cols;
    let first_row = (cursor_row + 1).saturating_sub(rows);
    GridGeometry {
        cols,
        rows,
        first: first_row * cols,
    }
}

/// Screen rect of tile `pos` (position in the visible list), if drawn.
pub fn tile_rect(grid: Rect, geom: GridGeometry, pos: usize) -> Option<Rect> {
    if pos < geom.first || pos >= geom.first + geom.cols * geom.rows {
        return None;
    }
    let inner = inner(grid);
    let rel = pos - geom.first;
    let x = inner.x + (rel % geom.cols) as u16 * TILE_WIDTH;
    let y = inner.y + (rel / geom.cols) as u16 * TILE_HEIGHT;
    Some(Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(inner))
}

pub fn tile_at(grid: Rect, count: usize, cursor: usize, x: u16, y: u16) -> Option<usize> {
    let geom = grid_geometry(grid, cursor);
    (geom.first..count.min(geom.first + geom.cols * geom.rows))
        .find(|&pos| tile_rect(grid, geom, pos).is_some_and(|r| hit(r, x, y)))
}

pub const LIGHTBOX_BUTTON_WIDTH: u16 = 3;
pub const CAPTION_HEIGHT: u16 = 3;

pub struct LightboxLayout {
    pub photo: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub caption: Rect,
}

/// The lightbox covers the whole content area; the photo sits between two
/// arrow buttons above a caption.
pub fn split_lightbox(content: Rect) -> LightboxLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(CAPTION_HEIGHT)])
        .split(content);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LIGHTBOX_BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(LIGHTBOX_BUTTON_WIDTH),
        ])
        .split(rows[0]);
    LightboxLayout {
        prev_button: cols[0],
        photo: cols[1],
        next_button: cols[2],
        caption: rows[1],
    }
}

// ── Listen ──────────────────────────────────────────────────────────────────

pub const NOW_PLAYING_HEIGHT: u16 = 3;
pub const PROGRESS_HEIGHT: u16 = 3;

pub struct ListenLayout {
    pub now_playing: Rect,
    pub progress: Rect,
    pub list: Rect,
}

pub fn split_listen(content: Rect) -> ListenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NOW_PLAYING_HEIGHT),
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Min(1),
        ])
        .split(content);
    ListenLayout {
        now_playing: chunks[0],
        progress: chunks[1],
        list: chunks[2],
    }
}

// ── Record ──────────────────────────────────────────────────────────────────

pub const PANEL_WIDTH: u16 = 46;
pub const INFO_HEIGHT: u16 = 5;
pub const PAGES_HEIGHT: u16 = 1;
pub const PAGE_BUTTON_WIDTH: u16 = 4;

pub struct RecordLayout {
    /// The slideshow fills the whole content area behind the panel.
    pub background: Rect,
    pub panel: Rect,
    pub info: Rect,
    pub progress: Rect,
    pub list: Rect,
    pub pages: Rect,
}

pub fn split_record(content: Rect) -> RecordLayout {
    let panel = Rect::new(
        content.x,
        content.y,
        PANEL_WIDTH.min(content.width),
        content.height,
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INFO_HEIGHT),
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(PAGES_HEIGHT),
        ])
        .split(panel);
    RecordLayout {
        background: content,
        panel,
        info: chunks[0],
        progress: chunks[1],
        list: chunks[2],
        pages: chunks[3],
    }
}

/// Page buttons, one per page, left to right.
pub fn page_button_rects(pages: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect::new(pages.x + i as u16 * PAGE_BUTTON_WIDTH, pages.y, PAGE_BUTTON_WIDTH, 1))
        .filter(|r| r.right() <= pages.right())
        .collect()
}

/// 1-based page of the button under the click.
pub fn page_button_at(pages: Rect, count: usize, x: u16, y: u16) -> Option<usize> {
    page_button_rects(pages, count)
        .iter()
        .position(|r| hit(*r, x, y))
        .map(|i| i + 1)
}
