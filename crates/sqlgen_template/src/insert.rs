use crate::{Environment, ParsedTemplate, Result};

/// Flags that shape a generated `INSERT` statement
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InsertOptions {
    /// list the columns explicitly after the table name
    pub columns: bool,
    /// append an `ON DUPLICATE KEY UPDATE` clause
    pub update_on_duplicate: bool,
    /// wrap table and column names in backticks
    pub quotes: bool,
}

/// An `INSERT` statement for one table, with a named placeholder per column
#[derive(Clone, Debug)]
pub struct Insert<'a> {
    table: &'a str,
    columns: &'a [String],
    options: InsertOptions,
}

impl<'a> Insert<'a> {
    const TEMPLATE: &'static str =
        "INSERT INTO ${table}${column_list}\nVALUES (\n${values}\n)\n${on_duplicate}";

    const INDENT: &'static str = "    ";

    pub const fn new(table: &'a str, columns: &'a [String], options: InsertOptions) -> Self {
        Self {
            table,
            columns,
            options,
        }
    }

    pub fn render(&self) -> Result<String> {
        let env = Environment::default()
            .insert("table", self.quote(self.table))
            .insert("column_list", self.column_list())
            .insert("values", self.lines(|col| format!(":{}", col)))
            .insert("on_duplicate", self.on_duplicate());

        ParsedTemplate::parse(Self::TEMPLATE)?.apply(&env)
    }

    fn column_list(&self) -> String {
        if !self.options.columns {
            return String::new();
        }
        format!(" (\n{}\n)", self.lines(|col| self.quote(col)))
    }

    fn on_duplicate(&self) -> String {
        if !self.options.update_on_duplicate {
            return String::new();
        }
        let assignments = self.lines(|col| format!("{} = :{}", self.quote(col), col));
        format!("ON DUPLICATE KEY UPDATE\n{}\n", assignments)
    }

    fn lines<F>(&self, line: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.columns
            .iter()
            .map(|col| format!("{}{}", Self::INDENT, line(col)))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    fn quote(&self, name: &str) -> String {
        if self.options.quotes {
            format!("`{}`", name)
        } else {
            name.to_string()
        }
    }
}
