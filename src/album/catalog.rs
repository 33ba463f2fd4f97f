use std::collections::HashSet;

use crate::config::{CategorySettings, PhotoSetting};

/// Which photos a category shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSet {
    /// Every photo any category mentions.
    All,
    /// An explicit list of filenames, in display order, without repeats.
    Only(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub photos: PhotoSet,
}

/// The static category table plus the de-duplicated master photo list.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    master: Vec<String>,
    // Per category: master indices in the category's own order.
    members: Vec<Vec<usize>>,
}

fn dedup_in_order(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect()
}

impl Catalog {
    pub fn from_settings(settings: &[CategorySettings]) -> Self {
        let categories = settings
            .iter()
            .map(|c| Category {
                name: c.name.clone(),
                photos: match &c.photos {
                    p if p.is_all() => PhotoSet::All,
                    PhotoSetting::List(list) => PhotoSet::Only(list.clone()),
                    PhotoSetting::Keyword(k) => {
                        tracing::warn!("category {:?}: unknown photo keyword {k:?}", c.name);
                        PhotoSet::Only(Vec::new())
                    }
                },
            })
            .collect();
        Self::new(categories)
    }

    pub fn new(categories: Vec<Category>) -> Self {
        let categories: Vec<Category> = categories
            .into_iter()
            .map(|c| Category {
                photos: match c.photos {
                    PhotoSet::Only(list) => PhotoSet::Only(dedup_in_order(&list)),
                    PhotoSet::All => PhotoSet::All,
                },
                ..c
            })
            .collect();

        let union: Vec<String> = categories
            .iter()
            .filter_map(|c| match &c.photos {
                PhotoSet::Only(list) => Some(list.iter().cloned()),
                PhotoSet::All => None,
            })
            .flatten()
            .collect();
        let master = dedup_in_order(&union);

        let members = categories
            .iter()
            .map(|c| match &c.photos {
                PhotoSet::All => (0..master.len()).collect(),
                PhotoSet::Only(list) => list
                    .iter()
                    .filter_map(|name| master.iter().position(|m| m == name))
                    .collect(),
            })
            .collect();

        Self {
            categories,
            master,
            members,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every photo exactly once, in first-mentioned order.
    pub fn master(&self) -> &[String] {
        &self.master
    }

    /// Master indices shown by category `cat`, in the category's order.
    pub fn members(&self, cat: usize) -> &[usize] {
        self.members.get(cat).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_member(&self, cat: usize, photo: usize) -> bool {
        self.members(cat).contains(&photo)
    }
}
