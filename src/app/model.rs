//! Application model types: `App` and `Page`.

use crate::album::Album;
use crate::audio::Transport;
use crate::listen::Listen;
use crate::record::Record;

/// The page on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Page {
    #[default]
    Album,
    Listen,
    Record,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Album, Page::Listen, Page::Record];

    pub fn title(self) -> &'static str {
        match self {
            Page::Album => "album",
            Page::Listen => "listen",
            Page::Record => "record",
        }
    }

    /// The page after this one, wrapping around.
    pub fn next(self) -> Page {
        match self {
            Page::Album => Page::Listen,
            Page::Listen => Page::Record,
            Page::Record => Page::Album,
        }
    }
}

/// The main application model.
pub struct App<T> {
    page: Page,
    pub album: Album,
    pub listen: Listen<T>,
    pub record: Record<T>,
}

impl<T: Transport> App<T> {
    pub fn new(album: Album, listen: Listen<T>, record: Record<T>, page: Page) -> Self {
        Self {
            page,
            album,
            listen,
            record,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Show `page`. The page being left is unloaded: its playback stops and
    /// its timers are cancelled.
    pub fn switch_to(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        tracing::debug!("page {} -> {}", self.page.title(), page.title());
        match self.page {
            Page::Album => self.album.unload(),
            Page::Listen => self.listen.unload(),
            Page::Record => self.record.unload(),
        }
        self.page = page;
    }

    pub fn cycle_page(&mut self) {
        self.switch_to(self.page.next());
    }
}
