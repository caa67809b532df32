//! tablesift CLI entry point.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use sift_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use sift_cli::logging::{LogConfig, LogFormat, init_logging};
use sift_cli::pipeline::{RunOptions, run};
use sift_cli::summary::print_summary;
use sift_core::{ExtractConfig, FilterSpec};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let columns = cli
        .columns
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        config: ExtractConfig::new(columns, FilterSpec::new(cli.field, cli.value)),
    };

    let exit_code = match run(&options) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Translates the logging flags into a [`LogConfig`]. An explicit
/// `--log-level` wins over `-v`/`-q`, and either of them turns `RUST_LOG`
/// off so the command line is authoritative.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !cli.verbosity.is_present() && cli.log_level.is_none(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        with_ansi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Cli {
        let mut args = vec![
            "tablesift",
            "in.xlsx",
            "--field",
            "Должность",
            "--value",
            "Инженер",
            "--columns",
            "ФИО",
        ];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[test]
    fn test_explicit_log_level_beats_verbosity() {
        let config = log_config_from_cli(&parse(&["-v", "--log-level", "trace"]));
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_verbosity_sets_level_and_disables_env_filter() {
        let config = log_config_from_cli(&parse(&["-vv"]));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_defaults_leave_env_filter_enabled() {
        let config = log_config_from_cli(&parse(&[]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }
}
