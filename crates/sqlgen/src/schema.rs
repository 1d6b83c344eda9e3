use indexmap::IndexMap;

use crate::Error;

/// One row of schema metadata
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column {
    pub table: String,
    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }
}

/// Something that can list the columns of a database
pub trait ColumnSource {
    fn columns(&self) -> Result<Vec<Column>, Error>;
}

impl<F> ColumnSource for F
where
    F: Fn() -> Result<Vec<Column>, Error>,
{
    fn columns(&self) -> Result<Vec<Column>, Error> {
        (self)()
    }
}

/// Columns grouped by table. Tables keep the order they were first seen in,
/// columns keep the order of their rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    tables: IndexMap<String, Vec<String>>,
}

impl Schema {
    pub fn tables(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.tables.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.tables.get(table).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl std::iter::FromIterator<Column> for Schema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        let tables = iter.into_iter().fold(
            IndexMap::<String, Vec<String>>::new(),
            |mut map, Column { table, name }| {
                map.entry(table).or_default().push(name);
                map
            },
        );
        Self { tables }
    }
}
