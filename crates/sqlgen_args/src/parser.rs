use std::collections::HashMap;

use crate::{Error, Opt, Positional, Usage};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token<'a> {
    Long(&'a str),
    Short(&'a str),
    Positional(&'a str),
}

impl<'a> Token<'a> {
    // classification only looks at the token itself, never at its neighbors
    fn classify(input: &'a str) -> Self {
        let name = input.trim_start_matches('-');
        match () {
            _ if input.starts_with("--") => Self::Long(name),
            _ if input.starts_with('-') => Self::Short(name),
            _ => Self::Positional(input),
        }
    }

    const fn is_positional(&self) -> bool {
        matches!(self, Self::Positional(..))
    }
}

/// The result of a successful parse.
///
/// Options are keyed by their long flag, regardless of how they were given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    positionals: HashMap<String, String>,
    options: HashMap<String, String>,
}

impl Parsed {
    pub fn positional(&self, name: &str) -> Option<&str> {
        self.positionals.get(name).map(|s| &**s)
    }

    /// The value of an option. Options that don't take a value map to an empty string.
    pub fn option(&self, long: &str) -> Option<&str> {
        self.options.get(long).map(|s| &**s)
    }

    pub fn is_present(&self, long: &str) -> bool {
        self.options.contains_key(long)
    }

    pub fn positionals(&self) -> &HashMap<String, String> {
        &self.positionals
    }

    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }
}

#[derive(Clone, Debug)]
pub struct Parser {
    positionals: Box<[Positional]>,
    options: Box<[Opt]>,
    long: HashMap<Box<str>, usize>,
    short: HashMap<Box<str>, usize>,
}

impl Parser {
    /// Flags are assumed to be unique. A duplicate short or long flag shadows the earlier one.
    pub fn new(positionals: Vec<Positional>, options: Vec<Opt>) -> Self {
        let long = options
            .iter()
            .enumerate()
            .map(|(i, opt)| (opt.long().into(), i))
            .collect();

        let short = options
            .iter()
            .enumerate()
            .map(|(i, opt)| (opt.short().into(), i))
            .collect();

        Self {
            positionals: positionals.into_boxed_slice(),
            options: options.into_boxed_slice(),
            long,
            short,
        }
    }

    pub fn positionals(&self) -> &[Positional] {
        &self.positionals
    }

    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    pub fn usage<'a>(&'a self, program: &'a str) -> Usage<'a> {
        Usage::new(program, self)
    }

    /// Parses `tokens` in a single forward pass.
    ///
    /// Options and positionals may be freely interleaved. An option that takes a value
    /// consumes the next token, but only if that token doesn't itself look like an option.
    ///
    /// The first error found during the scan is returned. Missing positionals are only
    /// checked once every token has been consumed.
    pub fn parse<I, S>(&self, tokens: I) -> Result<Parsed, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Parsed::default();
        let mut bound = 0;

        let mut tokens = tokens.into_iter().peekable();
        while let Some(token) = tokens.next() {
            let raw = token.as_ref();

            let opt = match Token::classify(raw) {
                Token::Long(name) => self.lookup(&self.long, name, raw)?,
                Token::Short(name) => self.lookup(&self.short, name, raw)?,
                Token::Positional(value) => {
                    let slot = self
                        .positionals
                        .get(bound)
                        .ok_or_else(|| Error::UnknownPositional(value.to_string()))?;
                    parsed
                        .positionals
                        .insert(slot.name().to_string(), value.to_string());
                    bound += 1;
                    continue;
                }
            };

            let value = if opt.takes_value() {
                tokens
                    .next_if(|next| Token::classify(next.as_ref()).is_positional())
                    .map(|next| next.as_ref().to_string())
                    .ok_or_else(|| Error::MissingOptionValue(opt.long().to_string()))?
            } else {
                String::new()
            };

            // last one wins
            parsed.options.insert(opt.long().to_string(), value);
        }

        match self.positionals.get(bound) {
            Some(missing) => Err(Error::MissingPositional(missing.name().to_string())),
            None => Ok(parsed),
        }
    }

    fn lookup(
        &self,
        index: &HashMap<Box<str>, usize>,
        name: &str,
        raw: &str,
    ) -> Result<&Opt, Error> {
        index
            .get(name)
            .map(|&i| &self.options[i])
            .ok_or_else(|| Error::UnknownOption(raw.to_string()))
    }
}
