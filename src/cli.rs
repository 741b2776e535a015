use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use crate::config::{ServerConfig, PAGE};
use crate::display::print_selection;
use crate::error::LoadError;
use crate::form::{export_selection_to_csv, handle_submission, FormSubmissionRequest, Outcome};
use crate::parser::load_schedule;
use crate::schedule::select_schedule;

/// Picks the largest set of non-overlapping activities and shows them on a timeline.
///
/// Without input lists or `--csv`, the default example is used.
#[derive(Debug, Parser)]
#[command(name = "activity-selection", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Comma-separated start times, e.g. 1,3,0,5,8,5 (put `--` before a list starting with '-')
    #[arg(requires = "ends", conflicts_with = "csv")]
    pub starts: Option<String>,

    /// Comma-separated end times, e.g. 2,4,6,7,9,9
    pub ends: Option<String>,

    /// Load the schedule from a CSV file with `start` and `end` columns
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write every interval and whether it was selected to a CSV file
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the form page and the JSON API
    Web {
        /// Port to listen on (falls back to $PORT, then 8080)
        port: Option<u16>,
    },
}

impl Cli {
    /// Server settings when the `web` subcommand was given
    pub fn server_config(&self) -> Option<ServerConfig> {
        match self.command {
            Some(Command::Web { port }) => Some(ServerConfig::from_env(port)),
            None => None,
        }
    }

    /// Builds the schedule from `--csv` or the two lists and runs the selector
    pub fn outcome(&self) -> Result<Outcome, LoadError> {
        if let Some(csv_path) = &self.csv {
            info!("Loading schedule from {}", csv_path.display());
            let schedule = load_schedule(csv_path)?;
            info!("Loaded {} intervals", schedule.len());
            let selection = select_schedule(&schedule);
            return Ok(Outcome { schedule, selection });
        }

        let request = match (&self.starts, &self.ends) {
            (Some(starts), Some(ends)) => FormSubmissionRequest {
                start_input: starts.clone(),
                end_input: ends.clone(),
            },
            _ => {
                info!("No input given, running the default example");
                FormSubmissionRequest {
                    start_input: PAGE.default_starts.to_string(),
                    end_input: PAGE.default_ends.to_string(),
                }
            }
        };

        Ok(handle_submission(&request)?)
    }

    /// Selects, prints the report and writes `--out` if requested
    pub fn run_selection(&self) -> Result<Outcome, LoadError> {
        let outcome = self.outcome()?;
        print_selection(&outcome.schedule, &outcome.selection);

        if let Some(out_path) = &self.out {
            export_selection_to_csv(&outcome, out_path)?;
            println!("\nSelection saved to {}", out_path.display());
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use clap::CommandFactory;
    use std::fs;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("activity-selection").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lists_then_out() {
        let cli = parse(&["1,2,3", "4,5,6", "--out", "a.csv"]).unwrap();
        assert_eq!(cli.starts.as_deref(), Some("1,2,3"));
        assert_eq!(cli.ends.as_deref(), Some("4,5,6"));
        assert_eq!(cli.out.as_deref(), Some(Path::new("a.csv")));
    }

    #[test]
    fn out_before_lists() {
        let cli = parse(&["--out", "b.csv", "1,2,3", "4,5,6"]).unwrap();
        assert_eq!(cli.starts.as_deref(), Some("1,2,3"));
        assert_eq!(cli.ends.as_deref(), Some("4,5,6"));
        assert_eq!(cli.out.as_deref(), Some(Path::new("b.csv")));
        assert_eq!(cli.outcome().unwrap().selection.pairs(), vec![(1, 4)]);
    }

    #[test]
    fn flag_without_value_is_rejected() {
        assert!(parse(&["--csv"]).is_err());
        assert!(parse(&["1,2", "3,4", "--out"]).is_err());
    }

    #[test]
    fn start_list_alone_is_rejected() {
        assert!(parse(&["1,2,3"]).is_err());
    }

    #[test]
    fn csv_conflicts_with_lists() {
        assert!(parse(&["--csv", "in.csv", "1,2", "3,4"]).is_err());
    }

    #[test]
    fn negative_list_after_separator() {
        let cli = parse(&["--", "-1,2", "3,4"]).unwrap();
        assert_eq!(cli.starts.as_deref(), Some("-1,2"));
        assert_eq!(cli.outcome().unwrap().selection.pairs(), vec![(2, 4)]);
    }

    #[test]
    fn web_subcommand_with_port() {
        let cli = parse(&["web", "9000"]).unwrap();
        assert_eq!(cli.command, Some(Command::Web { port: Some(9000) }));
        assert_eq!(cli.server_config().map(|c| c.port), Some(9000));
    }

    #[test]
    fn web_subcommand_rejects_bad_port() {
        assert!(parse(&["web", "http"]).is_err());
        assert!(parse(&["web"]).unwrap().server_config().is_some());
    }

    #[test]
    fn no_arguments_runs_default_example() {
        let cli = parse(&[]).unwrap();
        assert!(cli.server_config().is_none());
        assert_eq!(cli.outcome().unwrap().count(), 4);
    }

    #[test]
    fn bad_input_is_returned_as_error() {
        let err = parse(&["1,a,3", "2,4,6"]).unwrap().outcome().unwrap_err();
        assert!(matches!(err, LoadError::Input(InputError::Parse { .. })));

        let err = parse(&["1,2", "1"]).unwrap().outcome().unwrap_err();
        assert!(matches!(err, LoadError::Input(InputError::LengthMismatch { .. })));
    }

    #[test]
    fn csv_in_and_out() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schedule.csv");
        let output = dir.path().join("selection.csv");
        fs::write(&input, "start,end\n1,2\n3,4\n0,6\n5,7\n").unwrap();

        let cli = parse(&[
            "--csv",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
        ])
        .unwrap();
        let outcome = cli.run_selection().unwrap();
        assert_eq!(outcome.selection.pairs(), vec![(1, 2), (3, 4), (5, 7)]);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "label,start,end,selected\nA1,1,2,yes\nA2,3,4,yes\nA3,0,6,no\nA4,5,7,yes\n"
        );
        assert_eq!(load_schedule(&output).unwrap(), outcome.schedule);
    }

    #[test]
    fn missing_csv_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&["--csv", dir.path().join("nope.csv").to_str().unwrap()]).unwrap();
        assert!(cli.outcome().is_err());
    }
}
