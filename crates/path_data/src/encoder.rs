use log::{debug, warn};

use crate::command::Command;
use crate::error::EncodeError;
use crate::path::Path;

/// How encoded commands are separated from each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Separators {
    /// Every command is followed by a space, including dropped ones, and the
    /// close path token carries a trailing space of its own. Existing
    /// snapshots depend on this exact spacing.
    Legacy,
    /// Dropped commands leave nothing behind and commands are joined by a
    /// single space, with no trailing space.
    Compact,
}

/// What to do with a command whose parameter count does not match its kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Emit an empty token and carry on.
    Skip,
    /// Stop and report the command.
    Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    pub separators: Separators,
    pub on_malformed: Malformed,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            separators: Separators::Legacy,
            on_malformed: Malformed::Skip,
        }
    }
}

impl EncodeOptions {
    /// Compact output that fails on the first malformed command.
    pub fn strict() -> Self {
        EncodeOptions {
            separators: Separators::Compact,
            on_malformed: Malformed::Error,
        }
    }

    pub fn with_separators(self, separators: Separators) -> Self {
        EncodeOptions { separators, ..self }
    }

    pub fn with_on_malformed(self, on_malformed: Malformed) -> Self {
        EncodeOptions {
            on_malformed,
            ..self
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Encodes every command of `path` in order.
    ///
    /// Only fails when the options ask for [`Malformed::Error`].
    pub fn encode(&self, path: &Path) -> Result<String, EncodeError> {
        let mut tokens = Vec::with_capacity(path.len());
        for (index, command) in path.iter().enumerate() {
            let token = match (encode_command(command), self.options.on_malformed) {
                (Some(token), _) => Some(token),
                (None, Malformed::Skip) => {
                    warn_dropped(index, command);
                    None
                }
                (None, Malformed::Error) => {
                    return Err(EncodeError::MalformedCommand {
                        index,
                        kind: command.kind(),
                        got: command.parameters().len(),
                        want: command.kind().arity(),
                    })
                }
            };
            tokens.push(token);
        }
        Ok(join(self.options.separators, tokens))
    }
}

/// Encodes a single command as `<symbol> <p0> <p1> ...`.
///
/// Returns `None` when the parameter count does not match the command's kind.
/// A close path command encodes to `"z "`.
pub fn encode_command(command: &Command) -> Option<String> {
    if !command.is_well_formed() {
        return None;
    }
    let mut token = String::with_capacity(2 + command.parameters().len() * 4);
    token.push(command.kind().symbol());
    token.push(' ');
    let parameters: Vec<String> = command.parameters().iter().map(f64::to_string).collect();
    token.push_str(&parameters.join(" "));
    Some(token)
}

/// Legacy encoding of `path`. Malformed commands become empty tokens.
pub fn encode(path: &Path) -> String {
    match Encoder::default().encode(path) {
        Ok(encoded) => encoded,
        // the default options skip malformed commands and never fail
        Err(_) => String::new(),
    }
}

/// Compact encoding of `path` that fails on the first malformed command.
pub fn try_encode(path: &Path) -> Result<String, EncodeError> {
    Encoder::new(EncodeOptions::strict()).encode(path)
}

fn join<I>(separators: Separators, tokens: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut out = String::new();
    let mut count = 0;
    match separators {
        Separators::Legacy => {
            for token in tokens {
                if let Some(token) = token {
                    out.push_str(&token);
                }
                out.push(' ');
                count += 1;
            }
        }
        Separators::Compact => {
            for token in tokens.into_iter().flatten() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(token.trim_end());
                count += 1;
            }
        }
    }
    debug!("encoded {} commands into {} bytes of path data", count, out.len());
    out
}

fn warn_dropped(index: usize, command: &Command) {
    warn!(
        "dropping command {} ({}): expected {} parameters, got {}",
        index,
        command.kind(),
        command.kind().arity(),
        command.parameters().len()
    );
}
