use std::fmt;

/// Errors raised while loading the navigation seed data.
#[derive(Debug)]
pub enum DataError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    DuplicateNumber(u32),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::IoError(e) => write!(f, "I/O Error: {}", e),
            DataError::CsvError(e) => write!(f, "Malformed seed data: {}", e),
            DataError::DuplicateNumber(number) => {
                write!(f, "Duplicate cottage number in seed data: {}", number)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::IoError(e) => Some(e),
            DataError::CsvError(e) => Some(e),
            DataError::DuplicateNumber(_) => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::IoError(err)
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::CsvError(err)
    }
}
