// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::config::options::{AppOptions, OutputOptions};
use crate::log::{self, Level};
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run { options: AppOptions, console: bool },
    Help,
}

/// Parse arguments (without the program name) on top of `base`.
pub fn parse_args<I>(args: I, base: AppOptions) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = base;
    let mut console = true;
    let mut extension: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                options.paths.input = Some(PathBuf::from(v));
            }
            "--json-out" => {
                let v = args.next().ok_or("Missing value for --json-out")?;
                options.output.json_out = PathBuf::from(v);
            }
            "--templates" => {
                let v = args.next().ok_or("Missing value for --templates")?;
                options.output.templates_dir = PathBuf::from(&v);
                options.paths.templates_dir = PathBuf::from(v);
            }
            "--log-level" => {
                let v = args.next().ok_or("Missing value for --log-level")?;
                options.log_level = v.parse::<Level>()?;
            }
            "--validate" => options.validate_only = true,
            "--strict" => options.strict = true,
            "--no-console" => console = false,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", flag).into());
            }
            folder => {
                if extension.is_some() {
                    return Err(format!("Unexpected extra argument: {}", folder).into());
                }
                extension = Some(PathBuf::from(folder));
            }
        }
    }

    if let Some(dir) = extension {
        options.output = OutputOptions { extension_dir: dir, ..options.output };
    }
    Ok(Command::Run { options, console })
}

/// Entry point for the `cli` binary. Returns the exit code.
pub fn run() -> Result<i32, Box<dyn Error>> {
    let cmd = parse_args(std::env::args().skip(1), AppOptions::from_env())?;
    let (options, console) = match cmd {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(0);
        }
        Command::Run { options, console } => (options, console),
    };

    log::init(options.log_level, options.paths.log_file(), console);
    let summary = runner::run(&options, None).inspect_err(|e| loge!("{}", e))?;
    print_summary(&options, &summary);

    let failed = options.validate_only && !summary.validation.passed;
    Ok(if failed { 1 } else { 0 })
}

fn print_summary(options: &AppOptions, summary: &RunSummary) {
    let v = &summary.validation;
    println!(
        "Validation {}: {} errors, {} warnings",
        if v.passed { "passed" } else { "FAILED" },
        v.error_count,
        v.warning_count
    );
    if options.validate_only {
        return;
    }
    println!(
        "Analyzed {} of {} courses",
        summary.courses_analyzed, summary.courses_loaded
    );
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Command, Box<dyn Error>> {
        parse_args(args.iter().map(|s| s.to_string()), AppOptions::default())
    }

    #[test]
    fn no_args_uses_defaults() {
        let Command::Run { options, console } = parse(&[]).unwrap() else { panic!("expected run") };
        assert_eq!(options, AppOptions::default());
        assert!(console);
    }

    #[test]
    fn positional_sets_extension_folder() {
        let Command::Run { options, .. } = parse(&["ext", "-i", "in.json", "--strict"]).unwrap() else {
            panic!("expected run")
        };
        assert_eq!(options.output.data_js(), Path::new("ext").join("db/data.js"));
        assert_eq!(options.paths.course_data_file(), Path::new("in.json"));
        assert!(options.strict);
    }

    #[test]
    fn log_level_and_validate_flags() {
        let Command::Run { options, console } =
            parse(&["--validate", "--log-level", "debug", "--no-console"]).unwrap()
        else {
            panic!("expected run")
        };
        assert!(options.validate_only);
        assert_eq!(options.log_level, Level::Debug);
        assert!(!console);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["-i"]).is_err());
        assert!(parse(&["a", "b"]).is_err());
        assert!(parse(&["--log-level", "loud"]).is_err());
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
    }
}
