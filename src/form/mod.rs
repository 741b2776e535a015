pub mod submission;
pub mod export;

pub use submission::{handle_submission, validate_submission, FormSubmissionRequest, Outcome};
pub use export::{export_selection_to_csv, selection_to_csv};
