use std::collections::HashMap;

mod insert;
pub use insert::{Insert, InsertOptions};


#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    NestedTemplates,
    NonTerminated,
    EmptyTemplate,
    MissingKey(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NestedTemplates => f.write_str("nested templates are not allowed"),
            Self::NonTerminated => f.write_str("non-terminated template found"),
            Self::EmptyTemplate => f.write_str("empty templates are not allowed"),
            Self::MissingKey(key) => write!(f, "no value for template key: {}", key),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Default, Debug, Clone)]
pub struct Environment<'k> {
    env: HashMap<&'k str, String>,
}

impl<'k> Environment<'k> {
    pub fn insert(mut self, key: &'k str, value: impl Into<String>) -> Self {
        self.env.insert(key, value.into());
        self
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(|s| &**s)
    }
}

// byte range of a `${key}`, braces included
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn key<'a>(&self, data: &'a str) -> &'a str {
        &data[self.start + 2..self.end - 1]
    }
}

#[derive(Clone, Debug)]
pub struct ParsedTemplate<'a> {
    data: &'a str,
    spans: Vec<Span>,
}

impl<'a> ParsedTemplate<'a> {
    pub fn parse(input: &'a str) -> Result<Self> {
        Self::find_spans(input).map(|spans| Self { data: input, spans })
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        let data = self.data;
        self.spans.iter().map(move |span| span.key(data))
    }

    /// Substitutes every key. Substituted values are copied verbatim and never re-scanned.
    pub fn apply(&self, env: &Environment<'_>) -> Result<String> {
        let mut out = String::with_capacity(self.data.len());
        let mut last = 0;
        for span in &self.spans {
            out.push_str(&self.data[last..span.start]);
            let key = span.key(self.data);
            let val = env
                .resolve(key)
                .ok_or_else(|| Error::MissingKey(key.to_string()))?;
            out.push_str(val);
            last = span.end;
        }
        out.push_str(&self.data[last..]);
        Ok(out)
    }

    fn find_spans(input: &str) -> Result<Vec<Span>> {
        let mut spans = vec![];
        let mut head = None;

        let mut iter = input.char_indices().peekable();
        while let Some((pos, ch)) = iter.next() {
            match (ch, iter.peek(), head) {
                ('$', Some((_, '{')), None) => {
                    head.replace(pos);
                    iter.next();
                }

                ('$', Some((_, '{')), Some(..)) | ('{', .., Some(..)) => {
                    return Err(Error::NestedTemplates)
                }

                ('}', .., Some(start)) => {
                    if pos == start + 2 {
                        return Err(Error::EmptyTemplate);
                    }
                    spans.push(Span {
                        start,
                        end: pos + 1,
                    });
                    head.take();
                }

                _ => {}
            }
        }

        if head.is_some() {
            return Err(Error::NonTerminated);
        }
        Ok(spans)
    }
}
