#[derive(Debug)]
pub enum Error {
    /// the command line didn't match the definitions
    Invocation(sqlgen_args::Error),
    /// an option was given a value it can't use
    InvalidValue { option: &'static str, value: String },
    Database(mysql_async::Error),
    Runtime(std::io::Error),
    EmptySchema(String),
    Template(sqlgen_template::Error),
    Io(std::io::Error),
}

impl Error {
    /// Whether this was caused by a bad command line, rather than a bad environment
    pub const fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation(..) | Self::InvalidValue { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invocation(err) => write!(f, "{}", err),
            Self::InvalidValue { option, value } => {
                write!(f, "invalid value for option {}: {}", option, value)
            }
            Self::Database(err) => write!(f, "database error: {}", err),
            Self::Runtime(err) => write!(f, "cannot start the runtime: {}", err),
            Self::EmptySchema(database) => write!(f, "no tables found in database {}", database),
            Self::Template(err) => write!(f, "cannot render statement: {}", err),
            Self::Io(err) => write!(f, "cannot write output: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invocation(err) => Some(err),
            Self::Database(err) => Some(err),
            Self::Runtime(err) | Self::Io(err) => Some(err),
            Self::Template(err) => Some(err),
            Self::InvalidValue { .. } | Self::EmptySchema(..) => None,
        }
    }
}

impl From<sqlgen_args::Error> for Error {
    fn from(err: sqlgen_args::Error) -> Self {
        Self::Invocation(err)
    }
}

impl From<mysql_async::Error> for Error {
    fn from(err: mysql_async::Error) -> Self {
        Self::Database(err)
    }
}

impl From<sqlgen_template::Error> for Error {
    fn from(err: sqlgen_template::Error) -> Self {
        Self::Template(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
