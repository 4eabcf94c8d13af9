use libpreview::classifier;
use libpreview::config::PreviewConfig;
use libpreview::control::PreviewControl;
use std::time::{Duration, Instant};

fn main() -> std::process::ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: svgpreview <file.svg>");
        return std::process::ExitCode::FAILURE;
    };

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("svgpreview: cannot read {path}: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    if !classifier::looks_like_svg(&bytes) {
        log::warn!("{path} does not look like an SVG document");
    }

    let mut control = PreviewControl::with_config(800, 600, PreviewConfig::load());
    control.do_preview(std::io::Cursor::new(bytes));

    // Stand-in for the host message loop: pump until the surface lands.
    let deadline = Instant::now() + Duration::from_secs(3);
    while control.surface().region_count() == 0 && Instant::now() < deadline {
        control.pump();
        std::thread::sleep(Duration::from_millis(5));
    }

    match serde_json::to_string_pretty(control.surface()) {
        Ok(json) => {
            println!("{json}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("svgpreview: failed to serialize surface: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
