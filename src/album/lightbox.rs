/// Full-screen viewer over the active photo list.
///
/// Navigation is circular in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
    len: usize,
}

impl Lightbox {
    /// `None` when there is nothing to show. Out-of-range indices clamp to the last photo.
    pub fn open(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: index.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// `"3 / 10"`, one-based.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}
