mod album;
mod app;
mod assets;
mod audio;
mod config;
mod library;
mod listen;
mod record;
mod runtime;
mod timer;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
