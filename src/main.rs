//! Command-line entry point: loads a preset and reports the resulting camera.

use std::path::{Path, PathBuf};

use geocam::camera::Camera;
use geocam::navigator::Navigator;
use geocam::options::Options;

const PRESETS_DIR: &str = "presets";

fn resolve_preset_path(input: &str) -> Result<PathBuf, String> {
    let path = Path::new(input);
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    let preset = Path::new(PRESETS_DIR).join(format!("{input}.toml"));
    if preset.exists() {
        return Ok(preset);
    }

    let available = Options::list_presets(Path::new(PRESETS_DIR));
    Err(format!(
        "File not found and not a known preset: {input} (available: {})",
        available.join(", ")
    ))
}

fn load_options(input: Option<&str>) -> Result<Options, String> {
    let Some(input) = input else {
        log::info!("No preset given, using defaults");
        return Ok(Options::default());
    };
    let path = resolve_preset_path(input)?;
    Options::load(&path).map_err(|e| format!("{}: {e}", path.display()))
}

fn report(navigator: &mut Navigator) {
    log::info!("Active camera: {}", navigator.camera());

    let view = navigator.create_view_matrix();
    for i in 0..4 {
        let row = view.row(i);
        log::info!(
            "view[{i}] = [{:>16.6} {:>16.6} {:>16.6} {:>16.6}]",
            row.x,
            row.y,
            row.z,
            row.w
        );
    }

    match navigator.camera() {
        Camera::LookAt(_) => {
            log::info!("As free camera: {}", navigator.as_free_camera(None));
        }
        Camera::Free(_) => {
            log::info!(
                "As look-at camera: {}",
                navigator.as_look_at_camera(None)
            );
        }
    }
    log::info!("Look-at location: {}", navigator.look_at_location());
}

fn main() {
    env_logger::init();

    let input = std::env::args().nth(1);
    let options = match load_options(input.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut navigator = match options.build_navigator() {
        Ok(navigator) => navigator,
        Err(e) => {
            log::error!("Failed to build navigator: {e}");
            std::process::exit(1);
        }
    };

    report(&mut navigator);
}
