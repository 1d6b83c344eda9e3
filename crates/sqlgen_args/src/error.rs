#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownOption(String),
    MissingOptionValue(String),
    UnknownPositional(String),
    MissingPositional(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption(token) => write!(f, "unknown option {}", token),
            Self::MissingOptionValue(long) => write!(f, "option {} requires an argument", long),
            Self::UnknownPositional(token) => write!(f, "unknown argument {}", token),
            Self::MissingPositional(name) => write!(f, "missing required argument {}", name),
        }
    }
}

impl std::error::Error for Error {}
