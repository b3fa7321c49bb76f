use thiserror::Error;

use crate::command::CommandKind;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("{kind} takes {want} parameters but was given {got}")]
    Arity {
        kind: CommandKind,
        got: usize,
        want: usize,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("command {index} ({kind}) is malformed: expected {want} parameters, got {got}")]
    MalformedCommand {
        index: usize,
        kind: CommandKind,
        got: usize,
        want: usize,
    },
}
