//! Scan six face images into the solver's 54-character state string
//!
//! Images are given in scan face order (F, L, B, R, U, D). Prints the
//! assembled state on stdout; feed it to an external solver.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use cube_scan::{
    assemble, FaceScanner, FrameSource, ImageFileSource, ReferenceTable, ScanError,
    FACE_ORDER_SCAN,
};

#[derive(Parser)]
#[command(about = "Scan six face images into a solver state string")]
struct Args {
    /// Path of the calibrated reference table
    #[arg(long, default_value = "calibrated.json")]
    table: PathBuf,

    /// Six face images in scan order: F L B R U D
    #[arg(required = true, num_args = 6)]
    images: Vec<PathBuf>,
}

fn run(args: Args) -> Result<(), ScanError> {
    let table = ReferenceTable::from_json_file(&args.table)?;
    let scanner = FaceScanner::new(table)?;

    let mut source = ImageFileSource::new(args.images);
    let mut scans = Vec::with_capacity(FACE_ORDER_SCAN.len());

    for face in FACE_ORDER_SCAN {
        let frame = source.next_frame()?.ok_or_else(|| {
            ScanError::incomplete(format!("no frame available for face {}", face))
        })?;
        info!("scanning face {}", face);
        scans.push(scanner.scan_face(&frame, face)?);
    }

    let state = assemble(&scans)?;
    println!("{}", state);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scan failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
