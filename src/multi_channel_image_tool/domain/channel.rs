use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Byte offset of this channel inside a BGRA pixel.
    pub fn byte_offset(self) -> usize {
        match self {
            Channel::B => 0,
            Channel::G => 1,
            Channel::R => 2,
            Channel::A => 3,
        }
    }

    /// Position in R, G, B, A order, used to index per-slot tables.
    pub fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::A => "A",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" | "RED" => Ok(Channel::R),
            "G" | "GREEN" => Ok(Channel::G),
            "B" | "BLUE" => Ok(Channel::B),
            "A" | "ALPHA" => Ok(Channel::A),
            _ => Err(DomainError::UnknownChannel(s.to_string())),
        }
    }
}
