use super::*;

fn config(args: &[&str]) -> Config {
    Config::from_args(&cli::parser(), args).unwrap()
}

fn rows() -> Vec<Column> {
    vec![
        Column::new("users", "id"),
        Column::new("users", "name"),
        Column::new("posts", "id"),
        Column::new("posts", "user_id"),
        Column::new("posts", "body"),
    ]
}

fn render(config: &Config, rows: Vec<Column>) -> Result<(usize, String), Error> {
    let source = move || -> Result<Vec<Column>, Error> { Ok(rows.clone()) };
    let mut out = vec![];
    let count = generate(config, &source, &mut out)?;
    Ok((count, String::from_utf8(out).unwrap()))
}

#[test]
fn config_defaults() {
    let config = config(&["mydb"]);
    assert_eq!(config.database, "mydb");
    assert_eq!(config.host, Config::DEFAULT_HOST);
    assert_eq!(config.port, Config::DEFAULT_PORT);
    assert_eq!(config.user, None);
    assert_eq!(config.password, None);
    assert_eq!(config.insert, InsertOptions::default());
    assert!(!config.verbose);
    assert!(!config.help);
}

#[test]
fn config_everything() {
    let config = config(&[
        "-u", "root", "-p", "secret", "-H", "db.local", "-P", "3307", "-c", "-dup", "-q", "-v",
        "mydb",
    ]);

    let expected = Config {
        database: "mydb".into(),
        host: "db.local".into(),
        port: 3307,
        user: Some("root".into()),
        password: Some("secret".into()),
        insert: InsertOptions {
            columns: true,
            update_on_duplicate: true,
            quotes: true,
        },
        verbose: true,
        help: false,
    };
    assert_eq!(config, expected);
}

#[test]
fn config_help_needs_a_database() {
    assert!(config(&["mydb", "--help"]).help);

    let err = Config::from_args(&cli::parser(), &["--help"]).unwrap_err();
    assert!(err.is_invocation());
    assert!(matches!(
        err,
        Error::Invocation(sqlgen_args::Error::MissingPositional(ref name)) if name == cli::DATABASE
    ));
}

#[test]
fn config_invalid_port() {
    for port in &["abc", "70000", ""] {
        let err = Config::from_args(&cli::parser(), &["mydb", "--port", *port]).unwrap_err();
        assert!(err.is_invocation(), "{}", port);
        assert!(
            matches!(err, Error::InvalidValue { option: "port", ref value } if value == port),
            "{}",
            port
        );
    }
}

#[test]
fn config_invocation_errors() {
    let parser = cli::parser();
    let tests: &[(&[&str], sqlgen_args::Error)] = &[
        (&["mydb", "-u"], sqlgen_args::Error::MissingOptionValue("user".into())),
        (&["mydb", "-u", "-q"], sqlgen_args::Error::MissingOptionValue("user".into())),
        (&["mydb", "other"], sqlgen_args::Error::UnknownPositional("other".into())),
        (&["mydb", "--bogus"], sqlgen_args::Error::UnknownOption("--bogus".into())),
        (&["-q"], sqlgen_args::Error::MissingPositional("database".into())),
    ];

    for (input, expected) in tests {
        match Config::from_args(&parser, *input) {
            Err(Error::Invocation(err)) => assert_eq!(&err, expected, "{:?}", input),
            other => panic!("{:?}: {:?}", input, other),
        }
    }
}

#[test]
fn usage_lists_every_option() {
    let parser = cli::parser();
    let usage = parser.usage(cli::PROGRAM).to_string();
    assert!(usage.starts_with("mysqlgen DATABASE [-u|--user] [-p|--password]"));
    for opt in parser.options() {
        assert!(usage.contains(&opt.help_format()), "{}", opt.long());
    }
    assert!(usage.contains("    database: The database to generate statements from."));
}

#[test]
fn schema_keeps_first_seen_order() {
    let schema: Schema = rows().into_iter().collect();
    assert_eq!(schema.len(), 2);

    let tables = schema.tables().map(|(t, _)| t).collect::<Vec<_>>();
    assert_eq!(tables, vec!["users", "posts"]);

    assert_eq!(schema.columns("posts").unwrap(), &["id", "user_id", "body"]);
    assert!(schema.columns("missing").is_none());

    // interleaved rows still group under the first position of their table
    let schema: Schema = vec![
        Column::new("b", "1"),
        Column::new("a", "1"),
        Column::new("b", "2"),
    ]
    .into_iter()
    .collect();
    let tables = schema.tables().collect::<Vec<_>>();
    assert_eq!(tables[0].0, "b");
    assert_eq!(tables[0].1, &["1", "2"]);
    assert_eq!(tables[1].0, "a");
}

#[test]
fn generate_plain() {
    let (count, out) = render(&config(&["mydb"]), rows()).unwrap();
    assert_eq!(count, 2);

    let expected = "\
INSERT INTO users
VALUES (
    :id,
    :name
)

INSERT INTO posts
VALUES (
    :id,
    :user_id,
    :body
)

";
    assert_eq!(out, expected);
}

#[test]
fn generate_with_flags() {
    let rows = vec![Column::new("users", "id"), Column::new("users", "name")];
    let (count, out) = render(&config(&["mydb", "-c", "-dup", "-q"]), rows).unwrap();
    assert_eq!(count, 1);

    let expected = "\
INSERT INTO `users` (
    `id`,
    `name`
)
VALUES (
    :id,
    :name
)
ON DUPLICATE KEY UPDATE
    `id` = :id,
    `name` = :name

";
    assert_eq!(out, expected);
}

#[test]
fn generate_empty_schema() {
    let err = render(&config(&["mydb"]), vec![]).unwrap_err();
    assert!(!err.is_invocation());
    assert!(matches!(err, Error::EmptySchema(ref db) if db == "mydb"));
    assert_eq!(err.to_string(), "no tables found in database mydb");
}

#[test]
fn generate_source_error() {
    let source = || -> Result<Vec<Column>, Error> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        )))
    };

    let mut out = vec![];
    let err = generate(&config(&["mydb"]), &source, &mut out).unwrap_err();
    assert!(!err.is_invocation());
    assert!(matches!(err, Error::Io(..)));
    assert!(std::error::Error::source(&err).is_some());
    assert!(out.is_empty());
}

#[test]
fn mysql_source_does_not_connect_eagerly() {
    let _source = mysql::MySqlSource::new(&config(&["mydb", "-H", "unreachable.invalid"]));
}
