pub mod cli;

mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod schema;
pub use schema::{Column, ColumnSource, Schema};

pub mod mysql;

pub use sqlgen_template::InsertOptions;
use sqlgen_template::Insert;

/// Writes one `INSERT` block per table found in `source`, returning the number of tables.
pub fn generate<S, W>(config: &Config, source: &S, out: &mut W) -> Result<usize, Error>
where
    S: ColumnSource + ?Sized,
    W: std::io::Write + ?Sized,
{
    let schema: Schema = source.columns()?.into_iter().collect();
    if schema.is_empty() {
        return Err(Error::EmptySchema(config.database.clone()));
    }

    for (table, columns) in schema.tables() {
        log::trace!("rendering {} ({} columns)", table, columns.len());
        let sql = Insert::new(table, columns, config.insert).render()?;
        writeln!(out, "{}", sql)?;
    }
    out.flush()?;

    log::info!("generated {} statements for {}", schema.len(), config.database);
    Ok(schema.len())
}

#[cfg(test)]
mod tests;
