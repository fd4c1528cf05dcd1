use std::process::ExitCode;
use clap::Parser;
use log::{error, warn};
use fontface::cli::{collect_font_files, read_input_list, Args};
use fontface::utils::{copy_into, init_logging};
use fontface::{Error, FontFaceExt, FontFaceGenerator, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut inputs = args.inputs.clone();
    if let Some(list) = &args.list {
        inputs.extend(read_input_list(list)?);
    }
    if inputs.is_empty() {
        return Err(Error::Config("no font files or directories given".to_string()));
    }

    let files = collect_font_files(&inputs)?;

    let mut generator = match FontFaceGenerator::new(args.config()) {
        Ok(generator) => generator,
        Err(e @ Error::OutputExists(_)) => {
            warn!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for file in files.iter().font_faces(&mut generator) {
        if let Some(dest) = &args.dest {
            copy_into(&file.path, dest)?;
        }
    }

    let report = generator.finish();
    println!(
        "{} @font-face rules written ({} files, {} duplicates, {} failed)",
        report.written, report.forwarded, report.duplicates, report.failed
    );
    Ok(())
}
