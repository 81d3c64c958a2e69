// src/bin/cli.rs
use color_eyre::eyre::eyre;
use course_analyzer::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let code = cli::run().map_err(|e| eyre!("{e}"))?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
