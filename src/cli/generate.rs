//! Sheet generation commands (redraw, tinted)

use std::path::Path;
use std::process::ExitCode;

use crate::config::Config;
use crate::output::SheetPaths;
use crate::pipeline::{run, RedrawGenerator, TintedGenerator};

use super::{load_or_report, GenerateArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Apply the command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(dir) = &args.out_dir {
        config.output.dir = dir.clone();
    }
    if args.no_atlas {
        config.output.atlas = false;
    }
}

fn print_saved(paths: &SheetPaths) {
    println!("Saved: {}", paths.idle.display());
    println!("Saved: {}", paths.action.display());
    for atlas in [&paths.idle_atlas, &paths.action_atlas].into_iter().flatten() {
        println!("Saved: {}", atlas.display());
    }
}

/// Execute the redraw command
pub fn run_redraw(args: &GenerateArgs) -> ExitCode {
    let mut config = match load_or_report(args.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    apply_overrides(&mut config, args);

    let generator = RedrawGenerator::new(&config);
    match run(&generator, &config, &config.output.dir) {
        Ok(paths) => {
            print_saved(&paths);
            println!("wrote sprite sheets");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the tinted command
pub fn run_tinted(source: Option<&Path>, args: &GenerateArgs) -> ExitCode {
    let mut config = match load_or_report(args.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    apply_overrides(&mut config, args);
    if let Some(source) = source {
        config.tinted.source = source.to_path_buf();
    }

    let result = TintedGenerator::from_source(&config.tinted.source, &config)
        .and_then(|generator| run(&generator, &config, &config.output.dir));

    match result {
        Ok(paths) => {
            println!("Generated {} and {}", paths.idle.display(), paths.action.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
