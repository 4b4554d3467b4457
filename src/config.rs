// src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use log::LevelFilter;
use textutils_domain::Transform;
use textutils_infra::InputSource;
use textutils_shared_kernel::{PresentationError, PresentationResult};
use textutils_usecase::ExportKind;

use crate::{
    args::{Args, CommandArgs, InputOptions},
    logging,
    options::OutputFormat,
};

/// Where an export ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Directory(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze { format: OutputFormat, top: usize },
    Export { kind: ExportKind, destination: Destination },
    Transform(Transform),
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub command: Command,
    pub input: InputSource,
    #[builder(default)]
    pub log_level: Option<LevelFilter>,
}

/// Resolve CLI arguments into a [`Config`].
///
/// # Errors
///
/// [`PresentationError::InvalidValue`] when `--out-dir` names an existing
/// file, [`PresentationError::ConfigBuildFailed`] if the builder rejects
/// the result.
pub fn build_config(args: &Args) -> PresentationResult<Config> {
    let command = match &args.command {
        CommandArgs::Analyze(a) => Command::Analyze { format: a.format, top: a.top },
        CommandArgs::Export(e) => Command::Export {
            kind: e.kind.into(),
            destination: if e.stdout {
                Destination::Stdout
            } else {
                Destination::Directory(validate_out_dir(&e.out_dir)?)
            },
        },
        CommandArgs::Transform(t) => Command::Transform(t.op.into()),
    };

    ConfigBuilder::default()
        .command(command)
        .input(input_source(args.command.source()))
        .log_level(logging::level_from_flags(&args.log))
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}

fn input_source(opts: &InputOptions) -> InputSource {
    match &opts.text {
        Some(text) => InputSource::Inline(text.clone()),
        None => InputSource::from_arg(opts.input.clone()),
    }
}

fn validate_out_dir(dir: &Path) -> PresentationResult<PathBuf> {
    if dir.is_file() {
        return Err(PresentationError::InvalidValue {
            flag: "--out-dir".to_string(),
            value: dir.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(dir.to_path_buf())
}
