//! Builds the path data strings used by the `d` attribute of SVG `<path>`
//! elements out of typed drawing commands.

mod command;
mod encoder;
mod error;
mod path;

#[cfg(test)]
mod test_utils;

pub use crate::command::{arc_flag, Command, CommandKind};
pub use crate::encoder::{
    encode, encode_command, try_encode, EncodeOptions, Encoder, Malformed, Separators,
};
pub use crate::error::{CommandError, EncodeError};
pub use crate::path::Path;
pub use shared::{Circle, Radius};
