use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::parser::parse_schedule;
use crate::schedule::{select_schedule, Schedule, Selection};

/// The two text fields of the form, as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmissionRequest {
    pub start_input: String,
    pub end_input: String,
}

/// A computed result for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub schedule: Schedule,
    pub selection: Selection,
}

impl Outcome {
    pub fn count(&self) -> usize {
        self.selection.len()
    }
}

/// Validates a form submission and returns the parsed schedule
pub fn validate_submission(req: &FormSubmissionRequest) -> Result<Schedule, InputError> {
    parse_schedule(&req.start_input, &req.end_input)
}

/// Parses, validates and runs the selector for one submission. Input errors
/// are returned to the caller for display; nothing is kept between calls.
pub fn handle_submission(req: &FormSubmissionRequest) -> Result<Outcome, InputError> {
    let schedule = validate_submission(req).map_err(|e| {
        warn!("rejected submission: {}", e.detail());
        e
    })?;

    let selection = select_schedule(&schedule);
    info!(
        "selected {} of {} activities",
        selection.len(),
        schedule.len()
    );

    Ok(Outcome { schedule, selection })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_input: &str, end_input: &str) -> FormSubmissionRequest {
        FormSubmissionRequest {
            start_input: start_input.to_string(),
            end_input: end_input.to_string(),
        }
    }

    #[test]
    fn default_example_outcome() {
        let outcome = handle_submission(&request("1,3,0,5,8,5", "2,4,6,7,9,9")).unwrap();
        assert_eq!(outcome.count(), 4);
        assert_eq!(outcome.schedule.len(), 6);
        assert_eq!(outcome.selection.indices(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn length_mismatch_stops_before_selection() {
        let err = handle_submission(&request("1,2", "1")).unwrap_err();
        assert!(matches!(err, InputError::LengthMismatch { .. }));
    }

    #[test]
    fn parse_error_stops_before_selection() {
        let err = handle_submission(&request("1,a,3", "2,4,6")).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn each_submission_is_independent() {
        assert!(handle_submission(&request("x", "1")).is_err());
        let outcome = handle_submission(&request("1,2,3", "4,5,6")).unwrap();
        assert_eq!(outcome.selection.pairs(), vec![(1, 4)]);
    }
}
