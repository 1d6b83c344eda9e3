use crate::Parser;

/// Help text derived from a [`Parser`]'s definitions
pub struct Usage<'a> {
    program: &'a str,
    parser: &'a Parser,
}

impl<'a> Usage<'a> {
    pub(crate) const fn new(program: &'a str, parser: &'a Parser) -> Self {
        Self { program, parser }
    }
}

impl<'a> std::fmt::Display for Usage<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program)?;
        for arg in self.parser.positionals() {
            write!(f, " {}", arg.name().to_uppercase())?;
        }
        for opt in self.parser.options() {
            write!(f, " {}", opt.help_format())?;
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "Arguments")?;
        for arg in self.parser.positionals() {
            writeln!(f, "    {}: {}", arg.name(), arg.description())?;
        }

        writeln!(f)?;
        writeln!(f, "Options")?;
        for opt in self.parser.options() {
            writeln!(f, "    {} {}", opt.help_format(), opt.description())?;
        }
        Ok(())
    }
}
