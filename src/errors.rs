use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyTable,
    ExtraCell(String),
    InvalidAction(String),
    NoStartRule,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTable => write!(f, "parsing table contains no rows"),
            Error::ExtraCell(s) => {
                write!(f, "row '{}' has more cells than the table header", s)
            }
            Error::InvalidAction(s) => {
                write!(f, "unrecognized action '{}' in LR(1) parsing table", s)
            }
            Error::NoStartRule => write!(f, "no start rule found in LL(1) parsing table"),
        }
    }
}
