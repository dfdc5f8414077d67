//! The message data model and its parser.
//!
//! A [`Message`] borrows every field from the raw line it was parsed from,
//! so parsing allocates nothing beyond the parameter vector. The line is the
//! arena; the message dies with it at the end of each loop iteration.

use std::fmt;

mod parser;

pub use self::parser::parse;

/// The sender half of a line, taken from the leading `:origin` field.
///
/// Servers usually fill it with `nick!user@host`, but everything past the
/// nick is optional on the wire, and the nick itself may be empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin<'a> {
    /// The span up to the first `!`, `@`, or space.
    pub nick: &'a str,
    /// The span between `!` and the next `@` or space, if `!` was present.
    pub user: Option<&'a str>,
    /// The span between `@` and the next space, if `@` was present.
    pub host: Option<&'a str>,
}

/// One parsed protocol line.
///
/// The command is not a separate field: it is `params[0]` when present, see
/// [`Message::command`]. Absent and empty are distinct: a line ending in
/// ` :` carries `Some("")` as trailing, while a line with no trailing marker
/// carries `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message<'a> {
    /// The sender, when the line opened with `:`.
    pub origin: Option<Origin<'a>>,
    /// Space-separated arguments; the first one is the command.
    pub params: Vec<&'a str>,
    /// The free-text part after a token-initial `:`, spaces and all.
    pub trailing: Option<&'a str>,
}

impl<'a> Message<'a> {
    /// The command, i.e. the first parameter.
    ///
    /// `None` means there is nothing to dispatch on and the line is ignored.
    pub fn command(&self) -> Option<&'a str> {
        self.params.first().copied()
    }

    /// The parameter at `index`, counting the command as parameter 0.
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied()
    }
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick)?;
        if let Some(user) = self.user {
            write!(f, "!{user}")?;
        }
        if let Some(host) = self.host {
            write!(f, "@{host}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Message<'_> {
    /// Renders the message so that parsing it again yields an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(origin) = &self.origin {
            write!(f, ":{origin}")?;
            sep = " ";
        }
        for param in &self.params {
            f.write_str(sep)?;
            f.write_str(param)?;
            sep = " ";
        }
        if let Some(trailing) = self.trailing {
            // The space is written even at line start: a line-initial `:`
            // would read back as an origin marker, not a trailing marker.
            f.write_str(" :")?;
            f.write_str(trailing)?;
        }
        Ok(())
    }
}
