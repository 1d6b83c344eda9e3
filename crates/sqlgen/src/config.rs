use sqlgen_args::{Parsed, Parser};
use sqlgen_template::InsertOptions;

use crate::{cli, Error};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub insert: InsertOptions,
    pub verbose: bool,
    pub help: bool,
}

impl Config {
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 3306;

    pub fn from_args<I, S>(parser: &Parser, args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = parser.parse(args)?;
        Self::from_parsed(&parsed)
    }

    pub fn from_parsed(parsed: &Parsed) -> Result<Self, Error> {
        let database = parsed
            .positional(cli::DATABASE)
            .ok_or_else(|| sqlgen_args::Error::MissingPositional(cli::DATABASE.to_string()))?;

        let port = match parsed.option(cli::PORT) {
            Some(value) => value.parse().map_err(|_| Error::InvalidValue {
                option: cli::PORT,
                value: value.to_string(),
            })?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self {
            database: database.to_string(),
            host: parsed
                .option(cli::HOST)
                .unwrap_or(Self::DEFAULT_HOST)
                .to_string(),
            port,
            user: parsed.option(cli::USER).map(ToString::to_string),
            password: parsed.option(cli::PASSWORD).map(ToString::to_string),
            insert: InsertOptions {
                columns: parsed.is_present(cli::COLUMNS),
                update_on_duplicate: parsed.is_present(cli::UPDATE_ON_DUPLICATE),
                quotes: parsed.is_present(cli::QUOTES),
            },
            verbose: parsed.is_present(cli::VERBOSE),
            help: parsed.is_present(cli::HELP),
        })
    }
}
