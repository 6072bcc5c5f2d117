// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LoggingColor {
    Always,
    #[default]
    Auto,
    Never,
}

impl LoggingColor {
    /// Logs are written to stderr, so that is the stream checked for a terminal.
    pub fn coloring_enabled(&self) -> bool {
        match self {
            LoggingColor::Auto => std::io::stderr().is_terminal(),
            LoggingColor::Always => true,
            LoggingColor::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_logging_color() {
        assert_eq!("always".parse::<LoggingColor>().unwrap(), LoggingColor::Always);
        assert_eq!("never".parse::<LoggingColor>().unwrap(), LoggingColor::Never);
        assert!("sometimes".parse::<LoggingColor>().is_err());
        assert_eq!(LoggingColor::Auto.to_string(), "auto");
    }
}
