use super::*;
use image::{Rgb, RgbImage};
use std::time::{Duration, Instant};

fn wait_for<K: Send + 'static, T: Send + 'static>(loader: &AssetLoader<K, T>) -> Loaded<K, T> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(item) = loader.drain().into_iter().next() {
            return item;
        }
        assert!(Instant::now() < deadline, "loader never answered");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn decode_shrinks_large_images_and_keeps_colours() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.png");
    let mut img = RgbImage::from_pixel(640, 320, Rgb([200, 10, 10]));
    for x in 320..640 {
        for y in 0..320 {
            img.put_pixel(x, y, Rgb([10, 10, 200]));
        }
    }
    img.save(&path).unwrap();

    let pic = Picture::decode(&path).unwrap();
    assert!(pic.width() <= Picture::MAX_SIDE && pic.height() <= Picture::MAX_SIDE);
    assert_eq!(pic.width(), 160);
    assert_eq!(pic.height(), 80);
    let left = pic.sample(0.1, 0.5);
    let right = pic.sample(0.9, 0.5);
    assert!(left[0] > 150 && left[2] < 60);
    assert!(right[2] > 150 && right[0] < 60);
}

#[test]
fn decode_reports_read_and_decode_failures() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jpg");
    assert!(matches!(Picture::decode(&missing), Err(AssetError::Read { .. })));

    let junk = dir.path().join("junk.jpg");
    std::fs::write(&junk, b"definitely not a jpeg").unwrap();
    assert!(matches!(Picture::decode(&junk), Err(AssetError::Decode { .. })));
}

#[test]
fn sample_clamps_out_of_range_coordinates() {
    let pic = Picture::from_rgb(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
    assert_eq!(pic.sample(-1.0, 5.0), [1, 2, 3]);
}

#[test]
fn read_text_trims_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("1.txt");
    std::fs::write(&path, "  Berlin at dusk \n").unwrap();
    assert_eq!(read_text(&path).unwrap(), "Berlin at dusk");
    assert!(read_text(&dir.path().join("2.txt")).is_err());
}

#[test]
fn loader_delivers_results_tagged_with_their_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, "hello").unwrap();

    let loader: AssetLoader<usize, String> = AssetLoader::new();
    loader.request(7, move || read_text(&path));
    let loaded = wait_for(&loader);
    assert_eq!(loaded.key, 7);
    assert_eq!(loaded.result.unwrap(), "hello");
}
