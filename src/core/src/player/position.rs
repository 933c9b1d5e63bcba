use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Closed set of fantasy positions. All variant spellings coming in over
/// the wire ("FW", "ST", "GKP", "GOALKEEPER", ...) are normalized here,
/// once, before any rule runs against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn short_code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position '{0}'")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "D" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "M" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FW" | "F" | "ST" | "ATT" | "FORWARD" => Ok(Position::Forward),
            other => Err(PositionParseError(other.to_string())),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_code())
    }
}

// Wire format is the short code in both directions, so deserializing a
// request body runs the same alias normalization as everything else.
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_code())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_variant_spellings() {
        for alias in ["FWD", "FW", "F", "ST", "att", " forward "] {
            assert_eq!(alias.parse::<Position>().unwrap(), Position::Forward);
        }
        for alias in ["GK", "gkp", "Goalkeeper"] {
            assert_eq!(alias.parse::<Position>().unwrap(), Position::Goalkeeper);
        }
        assert_eq!("def".parse::<Position>().unwrap(), Position::Defender);
        assert_eq!("MID".parse::<Position>().unwrap(), Position::Midfielder);
    }

    #[test]
    fn test_rejects_unknown_spellings() {
        assert!("SWEEPER".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_short_codes_round_trip() {
        for position in [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
        ] {
            assert_eq!(
                position.short_code().parse::<Position>().unwrap(),
                position
            );
        }
    }
}
