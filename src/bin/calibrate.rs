//! Calibrate the reference table from captured face images
//!
//! Takes images in calibration color order (white, red, blue, green,
//! orange, yellow), one image per color per round. Extra rounds add more
//! captures per color. Writes the derived table as JSON.

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

use cube_scan::{
    CalibrationSession, FaceScanner, FrameSource, ImageFileSource, ScanConfig, ScanError,
    CALIBRATION_COLOR_ORDER,
};

#[derive(Parser)]
#[command(about = "Calibrate sticker color references from face images")]
struct Args {
    /// Output path for the reference table
    #[arg(long, default_value = "calibrated.json")]
    table: PathBuf,

    /// Optional config file (overrides --table and the range multiplier)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Images in calibration color order, in rounds of six
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn run(args: Args) -> Result<(), ScanError> {
    let config = match &args.config {
        Some(path) => ScanConfig::from_json_file(path)?,
        None => ScanConfig {
            table_path: args.table.clone(),
            ..ScanConfig::default()
        },
    };

    let colors = CALIBRATION_COLOR_ORDER.len();
    if args.images.len() % colors != 0 {
        return Err(ScanError::incomplete(format!(
            "expected a multiple of {} images, got {}",
            colors,
            args.images.len()
        )));
    }

    let mut session = CalibrationSession::with_multiplier(config.std_multiplier);
    let mut source = ImageFileSource::new(args.images);
    let mut index = 0usize;

    while let Some(frame) = source.next_frame()? {
        let color = CALIBRATION_COLOR_ORDER[index % colors];
        let samples = FaceScanner::sample_facelets(&frame)?;
        info!("capture {}: {} samples for {}", index + 1, samples.len(), color);
        if session.is_complete() {
            session.record_capture_for(color, samples);
        } else {
            session.record_capture(samples);
        }
        index += 1;
    }

    let table = session.finalize()?;
    for color in table.missing_colors() {
        warn!("color {} has no reference entry", color);
    }

    table.to_json_file(&config.table_path)?;
    info!(
        "calibration complete: {} colors written to {}",
        table.len(),
        config.table_path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("calibration failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
