use std::path::{Path, PathBuf};

use crate::assets::{self, AssetError, AssetLoader, Picture};
use crate::config::AlbumSettings;

use super::catalog::{Catalog, PhotoSet};
use super::lightbox::Lightbox;

/// State of a tile's description sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Loading,
    Text(String),
    /// Missing, unreadable or empty sidecar.
    Placeholder,
}

/// State of a tile's photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileImage {
    Loading,
    Ready(Picture),
    /// The tile is hidden from the grid.
    Failed,
}

/// Keys the lightbox reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Left,
    Right,
}

/// `<folder>/<filename without its last extension>.txt`
pub fn description_path(folder: &Path, filename: &str) -> PathBuf {
    let stem = match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    };
    folder.join(format!("{stem}.txt"))
}

pub struct Album {
    catalog: Catalog,
    photo_folder: PathBuf,
    description_folder: PathBuf,
    placeholder: String,
    loading_text: String,

    active_category: usize,
    /// Master indices the lightbox walks through.
    active: Vec<usize>,
    descriptions: Vec<Description>,
    images: Vec<TileImage>,
    lightbox: Option<Lightbox>,
    /// Position in `visible_tiles()`.
    cursor: usize,
    /// Grid scrolling is frozen while the lightbox is open.
    pub scroll_locked: bool,
}

impl Album {
    pub fn new(settings: &AlbumSettings) -> Self {
        let catalog = Catalog::from_settings(&settings.categories);
        let n = catalog.master().len();
        let mut album = Self {
            catalog,
            photo_folder: settings.photo_folder.clone(),
            description_folder: settings.description_folder.clone(),
            placeholder: settings.description_placeholder.clone(),
            loading_text: settings.loading_text.clone(),
            active_category: 0,
            active: Vec::new(),
            descriptions: vec![Description::Loading; n],
            images: vec![TileImage::Loading; n],
            lightbox: None,
            cursor: 0,
            scroll_locked: false,
        };
        album.select_category(0);
        album
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> usize {
        self.active_category
    }

    /// Master indices of the lightbox list for the active category.
    pub fn active_photos(&self) -> &[usize] {
        &self.active
    }

    /// Number of photos in the active list.
    pub fn total(&self) -> usize {
        self.active.len()
    }

    pub fn photo_path(&self, photo: usize) -> PathBuf {
        self.photo_folder.join(&self.catalog.master()[photo])
    }

    pub fn description_path(&self, photo: usize) -> PathBuf {
        description_path(&self.description_folder, &self.catalog.master()[photo])
    }

    /// Queue every photo and description sidecar on the loaders.
    pub fn request_assets(
        &self,
        photos: &AssetLoader<usize, Picture>,
        texts: &AssetLoader<usize, String>,
    ) {
        for i in 0..self.catalog.master().len() {
            let photo = self.photo_path(i);
            photos.request(i, move || Picture::decode(&photo));
            let text = self.description_path(i);
            texts.request(i, move || assets::read_text(&text));
        }
    }

    /// Switch the grid to category `index`. Out-of-range indices are ignored.
    pub fn select_category(&mut self, index: usize) {
        let Some(category) = self.catalog.categories().get(index) else {
            return;
        };
        self.active_category = index;
        self.active = match category.photos {
            PhotoSet::All => (0..self.catalog.master().len()).collect(),
            PhotoSet::Only(_) => self.catalog.members(index).to_vec(),
        };
        self.cursor = 0;
        tracing::debug!(
            "album category {:?}: {} photos",
            category.name,
            self.active.len()
        );
    }

    pub fn next_category(&mut self) {
        let n = self.catalog.categories().len();
        if n > 0 {
            self.select_category((self.active_category + 1) % n);
        }
    }

    pub fn prev_category(&mut self) {
        let n = self.catalog.categories().len();
        if n > 0 {
            self.select_category((self.active_category + n - 1) % n);
        }
    }

    /// True if the tile for `photo` belongs to the active category.
    pub fn is_selected_by_category(&self, photo: usize) -> bool {
        self.catalog.is_member(self.active_category, photo)
    }

    /// Master indices of the tiles shown in the grid, in master order.
    ///
    /// Tiles whose photo failed to load stay hidden whatever the category.
    pub fn visible_tiles(&self) -> Vec<usize> {
        (0..self.catalog.master().len())
            .filter(|&i| self.is_selected_by_category(i))
            .filter(|&i| self.images[i] != TileImage::Failed)
            .collect()
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_text
    }

    pub fn image(&self, photo: usize) -> &TileImage {
        &self.images[photo]
    }

    pub fn description(&self, photo: usize) -> &Description {
        &self.descriptions[photo]
    }

    /// Text to show for a tile's description right now.
    pub fn description_text(&self, photo: usize) -> &str {
        match &self.descriptions[photo] {
            Description::Loading => &self.loading_text,
            Description::Text(t) => t,
            Description::Placeholder => &self.placeholder,
        }
    }

    pub fn on_description_loaded(&mut self, photo: usize, result: Result<String, AssetError>) {
        let Some(slot) = self.descriptions.get_mut(photo) else {
            return;
        };
        *slot = match result {
            Ok(text) if !text.trim().is_empty() => Description::Text(text.trim().to_string()),
            Ok(_) => Description::Placeholder,
            Err(e) => {
                tracing::warn!("description unavailable: {e}");
                Description::Placeholder
            }
        };
    }

    pub fn on_photo_loaded(&mut self, photo: usize, result: Result<Picture, AssetError>) {
        let Some(slot) = self.images.get_mut(photo) else {
            return;
        };
        *slot = match result {
            Ok(pic) => TileImage::Ready(pic),
            Err(e) => {
                tracing::warn!("photo hidden: {e}");
                TileImage::Failed
            }
        };
        self.clamp_cursor();
    }

    // ---- grid cursor ----

    /// Master index of the tile under the cursor.
    pub fn cursor_tile(&self) -> Option<usize> {
        self.visible_tiles().get(self.cursor).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by `delta` tiles, clamped to the grid.
    pub fn move_cursor(&mut self, delta: isize) {
        let n = self.visible_tiles().len();
        if n == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, n as isize - 1) as usize;
    }

    /// Put the cursor on the `pos`-th visible tile (mouse hover/click).
    pub fn set_cursor(&mut self, pos: usize) {
        if pos < self.visible_tiles().len() {
            self.cursor = pos;
        }
    }

    fn clamp_cursor(&mut self) {
        let n = self.visible_tiles().len();
        self.cursor = self.cursor.min(n.saturating_sub(1));
    }

    // ---- lightbox ----

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Master index of the photo the lightbox shows.
    pub fn lightbox_photo(&self) -> Option<usize> {
        self.lightbox.map(|lb| self.active[lb.index()])
    }

    /// Open the lightbox at position `index` of the active list.
    pub fn open_lightbox(&mut self, index: usize) {
        self.lightbox = Lightbox::open(index, self.active.len());
        self.scroll_locked = self.lightbox.is_some();
    }

    /// Open the lightbox on a grid tile.
    pub fn open_tile(&mut self, photo: usize) {
        if let Some(pos) = self.active.iter().position(|&p| p == photo) {
            self.open_lightbox(pos);
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
        self.scroll_locked = false;
    }

    pub fn lightbox_next(&mut self) {
        if let Some(lb) = self.lightbox.as_mut() {
            lb.next();
        }
    }

    pub fn lightbox_prev(&mut self) {
        if let Some(lb) = self.lightbox.as_mut() {
            lb.prev();
        }
    }

    /// Clicking the dark area around the photo closes the viewer.
    pub fn click_lightbox_background(&mut self) {
        self.close_lightbox();
    }

    /// Lightbox keyboard handling. Returns `false` (key not consumed) while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_lightbox_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close_lightbox(),
            LightboxKey::Left => self.lightbox_prev(),
            LightboxKey::Right => self.lightbox_next(),
        }
        true
    }

    /// Leaving the page: close the viewer and go back to the first category.
    pub fn unload(&mut self) {
        self.close_lightbox();
        self.select_category(0);
    }
}
