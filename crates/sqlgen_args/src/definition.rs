/// A required argument bound by its position
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Positional {
    name: Box<str>,
    description: Box<str>,
}

impl Positional {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &*self.name
    }

    pub fn description(&self) -> &str {
        &*self.description
    }
}

/// A named option, invoked as `-short` or `--long`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Opt {
    short: Box<str>,
    long: Box<str>,
    description: Box<str>,
    takes_value: bool,
}

impl Opt {
    /// An option whose presence is the signal
    pub fn flag(short: &str, long: &str, description: &str) -> Self {
        Self::new(short, long, description, false)
    }

    /// An option that consumes the following token as its value
    pub fn value(short: &str, long: &str, description: &str) -> Self {
        Self::new(short, long, description, true)
    }

    fn new(short: &str, long: &str, description: &str, takes_value: bool) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
            description: description.into(),
            takes_value,
        }
    }

    pub fn short(&self) -> &str {
        &*self.short
    }

    pub fn long(&self) -> &str {
        &*self.long
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub const fn takes_value(&self) -> bool {
        self.takes_value
    }

    /// `[-s|--long]`
    pub fn help_format(&self) -> String {
        format!("[-{}|--{}]", self.short, self.long)
    }
}
