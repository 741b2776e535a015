use std::fmt;
use thiserror::Error;

/// Which of the two form fields a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Start => write!(f, "start times"),
            Field::End => write!(f, "end times"),
        }
    }
}

/// Problems with user-supplied start/end lists. The display text is what the
/// user sees; the fields carry the details for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Start and End time lists must be the same length.")]
    LengthMismatch { starts: usize, ends: usize },

    #[error("Please enter only integers, separated by commas.")]
    Parse { field: Field, token: String },
}

impl InputError {
    pub fn detail(&self) -> String {
        match self {
            InputError::LengthMismatch { starts, ends } => {
                format!("{} start times but {} end times", starts, ends)
            }
            InputError::Parse { field, token } => {
                format!("'{}' in {} is not an integer", token, field)
            }
        }
    }
}

/// Errors from loading a schedule file or writing an export
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("row {row}: '{value}' in column '{column}' is not an integer")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Input(#[from] InputError),
}
