use sqlgen::{cli, mysql::MySqlSource, Config};

fn init_logger() -> anyhow::Result<()> {
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_style(alto_logger::StyleConfig::SingleLine)
            .with_time(alto_logger::TimeConfig::unix_timestamp()),
    )?
    .init()
    .map_err(Into::into)
}

fn main() -> anyhow::Result<()> {
    let parser = cli::parser();
    let usage = parser.usage(cli::PROGRAM);

    let config = match Config::from_args(&parser, std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) if err.is_invocation() => {
            println!("{}", err);
            println!();
            println!("{}", usage);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if config.help {
        println!("{}", usage);
        return Ok(());
    }

    if config.verbose {
        init_logger()?;
    }

    let source = MySqlSource::new(&config);
    let stdout = std::io::stdout();
    sqlgen::generate(&config, &source, &mut stdout.lock())?;
    Ok(())
}
