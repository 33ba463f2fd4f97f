use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::AssetError;

/// Result of one background load.
#[derive(Debug)]
pub struct Loaded<K, T> {
    pub key: K,
    pub result: Result<T, AssetError>,
}

/// Runs load jobs on worker threads and collects their results.
pub struct AssetLoader<K, T> {
    tx: Sender<Loaded<K, T>>,
    rx: Receiver<Loaded<K, T>>,
}

impl<K, T> AssetLoader<K, T>
where
    K: Send + 'static,
    T: Send + 'static,
{
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Run `job` off the UI thread; its result shows up in `drain` tagged with `key`.
    pub fn request<F>(&self, key: K, job: F)
    where
        F: FnOnce() -> Result<T, AssetError> + Send + 'static,
    {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = job();
            // The receiver only goes away on shutdown.
            let _ = tx.send(Loaded { key, result });
        });
    }

    /// Every result that has arrived since the last call.
    pub fn drain(&self) -> Vec<Loaded<K, T>> {
        self.rx.try_iter().collect()
    }
}

impl<K, T> Default for AssetLoader<K, T>
where
    K: Send + 'static,
    T: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
