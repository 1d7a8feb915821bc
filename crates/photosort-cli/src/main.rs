use std::path::PathBuf;

use clap::Parser;
use photosort_core::{Config, Report};

#[derive(Parser)]
#[command(name = "photosort", version, about = "Copy JPEG photos into <target>/<year>/<year>-<month>-<day> by their EXIF dates")]
struct Cli {
    /// Source dir for your JPG images
    #[arg(short, long, value_name = "src-dir")]
    source: PathBuf,

    /// Target dir for your JPG images
    #[arg(short, long, value_name = "target-dir")]
    target: PathBuf,

    /// More diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let t_total = std::time::Instant::now();

    let config = Config {
        source: cli.source,
        target: cli.target,
    };

    let summary = photosort_core::run(&config, &|report| match report {
        Report::Copied { name, dest } => println!("copied {} to {}", name, dest.display()),
        Report::Skipped { .. } => {}
        Report::Failed(e) => eprintln!("{}", e),
        Report::Done => println!("Done."),
    });

    log::info!(
        "{} files seen, {} copied, {} already present, {} not sortable, {} copy errors, {} unreadable entries ({:.2}s)",
        summary.files_seen,
        summary.copied,
        summary.skipped,
        summary.extraction_failed,
        summary.copy_failed,
        summary.traversal_errors,
        t_total.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_source_and_target_required() {
        assert!(Cli::try_parse_from(["photosort"]).is_err());
        assert!(Cli::try_parse_from(["photosort", "-s", "in"]).is_err());
        assert!(Cli::try_parse_from(["photosort", "--target", "out"]).is_err());

        let cli = Cli::try_parse_from(["photosort", "-s", "in", "--target", "out", "-vv"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("in"));
        assert_eq!(cli.target, PathBuf::from("out"));
        assert_eq!(cli.verbose, 2);
    }
}
