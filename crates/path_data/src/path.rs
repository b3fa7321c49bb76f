use std::fmt;
use std::iter::FromIterator;
use std::slice::Iter;

use anyhow::Result;

use crate::command::Command;
use crate::encoder;

/// An ordered list of drawing commands.
///
/// Commands can only be appended. Nothing is merged, reordered or checked
/// for geometric sense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Path { commands: vec![] }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Like [`Path::push`], but refuses commands with the wrong number of parameters.
    pub fn try_push(&mut self, command: Command) -> Result<()> {
        command.validate()?;
        self.commands.push(command);
        Ok(())
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Path {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<Command> for Path {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Command;
    type IntoIter = Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Renders the legacy encoding, see [`encoder::encode`].
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode(self))
    }
}
