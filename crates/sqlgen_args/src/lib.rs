//! A small positional/option argument parser.
//!
//! ```
//! use sqlgen_args::{Opt, Parser, Positional};
//!
//! let parser = Parser::new(
//!     vec![Positional::new("database", "the database")],
//!     vec![Opt::value("u", "user", "the user"), Opt::flag("q", "quotes", "quote names")],
//! );
//!
//! let parsed = parser.parse(&["mydb", "-u", "root", "--quotes"]).unwrap();
//! assert_eq!(parsed.positional("database"), Some("mydb"));
//! assert_eq!(parsed.option("user"), Some("root"));
//! assert!(parsed.is_present("quotes"));
//! ```

mod definition;
pub use definition::{Opt, Positional};

mod parser;
pub use parser::{Parsed, Parser};

mod usage;
pub use usage::Usage;

mod error;
pub use error::Error;
