use super::*;
use crate::assets::{AssetError, Picture};
use crate::config::{AlbumSettings, CategorySettings, PhotoSetting};
use image::{Rgb, RgbImage};
use proptest::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

const FRANCE: usize = 3;

fn album() -> Album {
    Album::new(&AlbumSettings::default())
}

fn picture() -> Picture {
    Picture::from_rgb(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])))
}

fn read_error() -> AssetError {
    AssetError::Read {
        path: PathBuf::from("missing"),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    }
}

fn names(album: &Album, photos: &[usize]) -> Vec<String> {
    photos
        .iter()
        .map(|&i| album.catalog().master()[i].clone())
        .collect()
}

#[test]
fn master_list_is_deduplicated_in_first_seen_order() {
    let a = album();
    let master = a.catalog().master();
    assert_eq!(master.len(), 10);
    assert_eq!(master[0], "1.jpg");
    assert_eq!(master[9], "10.jpg");
}

#[test]
fn all_category_shows_every_photo() {
    let a = album();
    assert_eq!(a.active_category(), 0);
    assert_eq!(a.visible_tiles().len(), 10);
    assert_eq!(a.total(), 10);
}

#[test]
fn selecting_a_category_filters_tiles_and_lightbox_list() {
    let mut a = album();
    a.select_category(FRANCE);

    let visible = a.visible_tiles();
    assert_eq!(names(&a, &visible), vec!["7.jpg", "8.jpg"]);
    assert_eq!(a.total(), 2);

    a.open_tile(visible[1]);
    assert_eq!(a.lightbox().map(|lb| lb.index()), Some(1));
    assert_eq!(a.lightbox().map(|lb| lb.counter()), Some("2 / 2".to_string()));

    // Wraps within the category, never reaching photos outside it.
    a.lightbox_next();
    assert_eq!(a.lightbox_photo(), Some(visible[0]));
    a.lightbox_prev();
    a.lightbox_prev();
    assert_eq!(a.lightbox_photo(), Some(visible[0]));
}

#[test]
fn overlapping_categories_share_master_entries() {
    let mut a = album();
    a.select_category(5);
    assert_eq!(names(&a, a.active_photos()), vec!["1.jpg", "10.jpg"]);
    assert!(a.is_selected_by_category(0));
    assert!(!a.is_selected_by_category(1));
}

#[test]
fn out_of_range_category_is_ignored() {
    let mut a = album();
    a.select_category(FRANCE);
    a.select_category(99);
    assert_eq!(a.active_category(), FRANCE);
}

#[test]
fn category_cycling_wraps() {
    let mut a = album();
    a.prev_category();
    assert_eq!(a.active_category(), 5);
    a.next_category();
    assert_eq!(a.active_category(), 0);
}

#[test]
fn open_lightbox_clamps_and_locks_scrolling() {
    let mut a = album();
    a.open_lightbox(42);
    assert_eq!(a.lightbox().map(|lb| lb.index()), Some(9));
    assert!(a.scroll_locked);

    a.close_lightbox();
    assert!(!a.is_lightbox_open());
    assert!(!a.scroll_locked);
}

#[test]
fn empty_category_never_opens_the_lightbox() {
    let mut settings = AlbumSettings::default();
    settings.categories.push(crate::config::CategorySettings {
        name: "空".into(),
        photos: crate::config::PhotoSetting::List(Vec::new()),
    });
    let mut a = Album::new(&settings);
    a.select_category(6);
    a.open_lightbox(0);
    assert!(!a.is_lightbox_open());
    assert!(a.visible_tiles().is_empty());
}

#[test]
fn keys_are_only_consumed_while_the_lightbox_is_open() {
    let mut a = album();
    assert!(!a.handle_key(LightboxKey::Right));
    assert!(!a.handle_key(LightboxKey::Escape));

    a.open_lightbox(9);
    assert!(a.handle_key(LightboxKey::Right));
    assert_eq!(a.lightbox().map(|lb| lb.index()), Some(0));
    assert!(a.handle_key(LightboxKey::Left));
    assert_eq!(a.lightbox().map(|lb| lb.index()), Some(9));
    assert!(a.handle_key(LightboxKey::Escape));
    assert!(!a.is_lightbox_open());
}

#[test]
fn background_click_closes_the_lightbox() {
    let mut a = album();
    a.open_lightbox(3);
    a.click_lightbox_background();
    assert!(!a.is_lightbox_open());
}

#[test]
fn failed_photo_is_hidden_from_every_category() {
    let mut a = album();
    a.on_photo_loaded(0, Err(read_error()));
    a.on_photo_loaded(1, Ok(picture()));

    assert_eq!(a.visible_tiles().len(), 9);
    assert!(matches!(a.image(0), TileImage::Failed));
    assert!(matches!(a.image(1), TileImage::Ready(_)));

    a.select_category(5);
    assert_eq!(names(&a, &a.visible_tiles()), vec!["10.jpg"]);
}

#[test]
fn description_falls_back_to_placeholder() {
    let mut a = album();
    assert_eq!(a.description_text(0), "加载中...");

    a.on_description_loaded(0, Ok("Brandenburger Tor".into()));
    a.on_description_loaded(1, Ok("   ".into()));
    a.on_description_loaded(2, Err(read_error()));

    assert_eq!(a.description_text(0), "Brandenburger Tor");
    assert_eq!(*a.description(1), Description::Placeholder);
    assert_eq!(a.description_text(1), "暂无描述");
    assert_eq!(a.description_text(2), "暂无描述");
}

#[test]
fn description_path_strips_only_the_last_extension() {
    let folder = Path::new("descriptions");
    assert_eq!(
        description_path(folder, "1.jpg"),
        folder.join("1.txt")
    );
    assert_eq!(
        description_path(folder, "paris.night.png"),
        folder.join("paris.night.txt")
    );
    assert_eq!(description_path(folder, "noext"), folder.join("noext.txt"));
    assert_eq!(description_path(folder, ".hidden"), folder.join(".hidden.txt"));
}

#[test]
fn assets_are_requested_for_every_master_photo() {
    let dir = tempfile::tempdir().unwrap();
    let photos = dir.path().join("photos");
    let texts = dir.path().join("descriptions");
    std::fs::create_dir_all(&photos).unwrap();
    std::fs::create_dir_all(&texts).unwrap();
    RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]))
        .save(photos.join("a.png"))
        .unwrap();
    std::fs::write(texts.join("a.txt"), "hello\n").unwrap();

    let settings = AlbumSettings {
        photo_folder: photos,
        description_folder: texts,
        categories: vec![crate::config::CategorySettings {
            name: "one".into(),
            photos: crate::config::PhotoSetting::List(vec!["a.png".into(), "b.png".into()]),
        }],
        ..AlbumSettings::default()
    };
    let mut a = Album::new(&settings);
    let photo_loader = crate::assets::AssetLoader::new();
    let text_loader = crate::assets::AssetLoader::new();
    a.request_assets(&photo_loader, &text_loader);

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let (mut got_photos, mut got_texts) = (0, 0);
    while (got_photos < 2 || got_texts < 2) && std::time::Instant::now() < deadline {
        for item in photo_loader.drain() {
            a.on_photo_loaded(item.key, item.result);
            got_photos += 1;
        }
        for item in text_loader.drain() {
            a.on_description_loaded(item.key, item.result);
            got_texts += 1;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert_eq!(a.visible_tiles(), vec![0]);
    assert_eq!(a.description_text(0), "hello");
    assert_eq!(a.description_text(1), "暂无描述");
}

#[test]
fn cursor_is_clamped_to_visible_tiles() {
    let mut a = album();
    a.move_cursor(100);
    assert_eq!(a.cursor(), 9);
    a.select_category(FRANCE);
    assert_eq!(a.cursor(), 0);
    a.move_cursor(5);
    assert_eq!(a.cursor_tile().map(|i| a.catalog().master()[i].clone()), Some("8.jpg".into()));
    a.move_cursor(-9);
    assert_eq!(a.cursor(), 0);
}

#[test]
fn unload_resets_the_page() {
    let mut a = album();
    a.select_category(FRANCE);
    a.open_lightbox(1);
    a.unload();
    assert!(!a.is_lightbox_open());
    assert_eq!(a.active_category(), 0);
}

fn lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-e]\\.jpg", 0..6),
        1..5,
    )
}

proptest! {
    #[test]
    fn lightbox_wraps_after_len_steps(len in 1usize..50, start in 0usize..50, steps in 0usize..120) {
        let mut lb = Lightbox::open(start, len).unwrap();
        let first = lb.index();
        for _ in 0..steps {
            lb.next();
        }
        prop_assert_eq!(lb.index(), (first + steps) % len);
        for _ in 0..steps {
            lb.prev();
        }
        prop_assert_eq!(lb.index(), first);
    }

    #[test]
    fn master_holds_each_name_exactly_once(lists in lists()) {
        let categories = lists
            .iter()
            .enumerate()
            .map(|(i, l)| Category { name: format!("c{i}"), photos: PhotoSet::Only(l.clone()) })
            .collect();
        let catalog = Catalog::new(categories);
        let master = catalog.master();

        for name in lists.iter().flatten() {
            prop_assert_eq!(master.iter().filter(|m| *m == name).count(), 1);
        }
        prop_assert_eq!(master.len(), lists.iter().flatten().collect::<std::collections::HashSet<_>>().len());
        for (cat, list) in lists.iter().enumerate() {
            for &photo in catalog.members(cat) {
                prop_assert!(list.contains(&master[photo]));
            }
        }
    }

    #[test]
    fn visible_tiles_are_exactly_the_category_members(lists in lists()) {
        let settings = AlbumSettings {
            categories: lists
                .iter()
                .enumerate()
                .map(|(i, l)| CategorySettings {
                    name: format!("c{i}"),
                    photos: PhotoSetting::List(l.clone()),
                })
                .collect(),
            ..AlbumSettings::default()
        };
        let mut a = Album::new(&settings);

        for (cat, list) in lists.iter().enumerate() {
            a.select_category(cat);
            let master = a.catalog().master();
            let expected: Vec<usize> = (0..master.len())
                .filter(|&i| list.contains(&master[i]))
                .collect();
            prop_assert_eq!(a.visible_tiles(), expected);
        }
    }
}
