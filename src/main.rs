use gallery::{GalleryApp, GalleryConfig};
use mimalloc::MiMalloc;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GalleryConfig::from_env();
    log::debug!("config: {config:?}");
    let frame_interval = config.frame_interval;

    match platform::run(GalleryApp::new(config), frame_interval) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("fieldbook: {err}");
            ExitCode::FAILURE
        }
    }
}
