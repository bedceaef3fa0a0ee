use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Validation(String),
    Format(String),
    Persistence(std::io::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Format(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Format(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Format(msg) => {
                write!(f, "Invalid contacts file format: {}", msg)
            }
            AppError::Persistence(e) => {
                write!(f, "Failed to persist contacts: {}", e)
            }
        }
    }
}
