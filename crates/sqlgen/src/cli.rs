use sqlgen_args::{Opt, Parser, Positional};

pub const PROGRAM: &str = "mysqlgen";

pub const DATABASE: &str = "database";

pub const USER: &str = "user";
pub const PASSWORD: &str = "password";
pub const HOST: &str = "host";
pub const PORT: &str = "port";
pub const COLUMNS: &str = "columns";
pub const UPDATE_ON_DUPLICATE: &str = "update-on-duplicate";
pub const QUOTES: &str = "quotes";
pub const VERBOSE: &str = "verbose";
pub const HELP: &str = "help";

/// The command line accepted by `mysqlgen`
pub fn parser() -> Parser {
    Parser::new(
        vec![Positional::new(
            DATABASE,
            "The database to generate statements from.",
        )],
        vec![
            Opt::value("u", USER, "The user to access mysql with."),
            Opt::value("p", PASSWORD, "The password for the mysql user."),
            Opt::value("H", HOST, "The host mysql is running on. Defaults to localhost."),
            Opt::value("P", PORT, "The port mysql is listening on. Defaults to 3306."),
            Opt::flag(
                "c",
                COLUMNS,
                "Explicitly declare columns for INSERT statements.",
            ),
            Opt::flag(
                "dup",
                UPDATE_ON_DUPLICATE,
                "Add an ON DUPLICATE KEY UPDATE clause to INSERT statements.",
            ),
            Opt::flag("q", QUOTES, "Add quotes to column and table names."),
            Opt::flag("v", VERBOSE, "Log progress to the terminal."),
            Opt::flag("h", HELP, "Prints help."),
        ],
    )
}
