use mysql_async::{prelude::*, Conn, Opts, OptsBuilder};

use crate::{Column, ColumnSource, Config, Error};

/// Reads columns from a live MySQL server
pub struct MySqlSource {
    opts: Opts,
    address: String,
    database: String,
}

impl MySqlSource {
    const QUERY: &'static str = "
        SELECT TABLE_NAME, COLUMN_NAME
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_SCHEMA = DATABASE()
        ORDER BY TABLE_NAME, ORDINAL_POSITION";

    pub fn new(config: &Config) -> Self {
        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(config.user.clone())
            .pass(config.password.clone())
            .db_name(Some(config.database.clone()));

        Self {
            opts: opts.into(),
            address: format!("{}:{}", config.host, config.port),
            database: config.database.clone(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Column>, Error> {
        log::debug!("connecting to {}/{}", self.address, self.database);

        let mut conn = Conn::new(self.opts.clone()).await?;
        let rows: Vec<(String, String)> = conn.query(Self::QUERY).await?;
        conn.disconnect().await?;

        log::debug!("read {} columns from {}", rows.len(), self.database);
        Ok(rows
            .into_iter()
            .map(|(table, name)| Column { table, name })
            .collect())
    }
}

impl ColumnSource for MySqlSource {
    fn columns(&self) -> Result<Vec<Column>, Error> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?
            .block_on(self.fetch())
    }
}
