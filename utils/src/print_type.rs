//! selects how the driver reports the run on stdout.
use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintType {
    /// human readable status line per printed step.
    #[default]
    Status,
    /// one comma separated row per printed step, preceded by a header.
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown print type '{0}', expected 'status' or 'csv'")]
pub struct UnknownPrintType(pub String);

impl FromStr for PrintType {
    type Err = UnknownPrintType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "csv" => Ok(Self::Csv),
            _ => Err(UnknownPrintType(s.to_owned())),
        }
    }
}

impl Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
