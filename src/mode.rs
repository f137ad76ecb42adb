use std::fmt;

use crate::error::{Error, Result};

/// Operating mode of the [generator](crate::generator).
///
/// Validation happens once, at the setter boundary (see
/// [`Engine::set_mode`](crate::engine::Engine::set_mode)); the tick path reads
/// this tag directly and never re-parses a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Saw-tooth ramp in `[44000, 46010]`, wrapping at the top.
    #[default]
    Normal,
    /// Uniform jitter in `[-100, +100]`, clamped to `[44000, 46000]`.
    Noisy,
    /// Triangular wave in `[44000, 46000]`.
    Ramp,
}

impl Mode {
    /// The literal token this mode round-trips to/from on the text config surface.
    pub fn as_token(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Noisy => "noisy",
            Mode::Ramp => "ramp",
        }
    }

    /// Parses the exact tokens `"normal"`, `"noisy"`, `"ramp"`, case-sensitive,
    /// with at most one trailing `\n` stripped. Any other input
    /// is [`Error::Invalid`].
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.strip_suffix('\n').unwrap_or(s);
        match s {
            "normal" => Ok(Mode::Normal),
            "noisy" => Ok(Mode::Noisy),
            "ramp" => Ok(Mode::Ramp),
            _ => Err(Error::Invalid),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
