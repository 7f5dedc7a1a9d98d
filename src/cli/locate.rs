//! Locate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::atlas::{locate, sprite_key};
use crate::cast::{Character, Pose};
use crate::output::SheetPaths;

use super::{load_or_report, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the locate command
pub fn run_locate(agent_id: &str, pose: &str, config_path: Option<&Path>) -> ExitCode {
    let pose: Pose = match pose.parse() {
        Ok(pose) => pose,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let config = match load_or_report(config_path) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let character = Character::from_agent_id(agent_id);
    let (kind, rect) = locate(character, pose, &config.sheet.layout());
    let paths = SheetPaths::in_dir(&config.output.dir, &config.output);

    println!(
        "{} -> {} in {} at x={} y={} w={} h={}",
        agent_id,
        sprite_key(character, pose),
        paths.sheet(kind).display(),
        rect.x,
        rect.y,
        rect.w,
        rect.h
    );
    ExitCode::from(EXIT_SUCCESS)
}
