use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a shape, door or sort name cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Lowercase a user-supplied name and unify `-`/`_` separators to spaces,
/// so `top-left`, `Top_Left` and `Top Left` all parse the same way.
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Unique identifier for a layout in the expanded catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub u32);

impl LayoutId {
    /// Offset added to an authored id to obtain its mirrored twin's id
    pub const MIRROR_OFFSET: u32 = 1000;

    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id of the mirrored twin of an authored layout
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self(self.0 + Self::MIRROR_OFFSET)
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LayoutId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Aspect-ratio class of a room, as seen from the entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Square,
    /// Wider than deep
    Horizontal,
    /// Deeper than wide
    Vertical,
}

impl Shape {
    pub const ALL: [Self; 3] = [Self::Square, Self::Horizontal, Self::Vertical];

    /// Width / depth ratio used when a record omits explicit dimensions
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        match self {
            Self::Square => 1.0,
            Self::Horizontal => 1.5,
            Self::Vertical => 1.0 / 1.5,
        }
    }

    /// `(width, depth)` of a room of this shape with the given area:
    /// `depth = sqrt(area / ratio)`, `width = depth * ratio`
    #[must_use]
    pub fn dimensions_for(self, area: f64) -> (f64, f64) {
        let ratio = self.aspect_ratio();
        let depth = (area / ratio).sqrt();
        (depth * ratio, depth)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "Square"),
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "square" => Ok(Self::Square),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseError::new("shape", s, "square, horizontal, vertical")),
        }
    }
}

/// Position of the client door on the bottom (facade) wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryPosition {
    Left,
    Center,
    Right,
}

impl EntryPosition {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

impl std::fmt::Display for EntryPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Center => write!(f, "Center"),
            Self::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for EntryPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseError::new("entry", s, "left, center, right")),
        }
    }
}

/// Wall carrying the storage door; the bottom wall is reserved for the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageWall {
    Top,
    Left,
    Right,
}

impl std::fmt::Display for StorageWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "Top"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Storage door position: a wall plus a spot along that wall.
///
/// The top wall is divided left/center/right, the side walls top/center/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoragePosition {
    #[serde(rename = "Top Left")]
    TopLeft,
    #[serde(rename = "Top Center")]
    TopCenter,
    #[serde(rename = "Top Right")]
    TopRight,
    #[serde(rename = "Left Top")]
    LeftTop,
    #[serde(rename = "Left Center")]
    LeftCenter,
    #[serde(rename = "Left Bottom")]
    LeftBottom,
    #[serde(rename = "Right Top")]
    RightTop,
    #[serde(rename = "Right Center")]
    RightCenter,
    #[serde(rename = "Right Bottom")]
    RightBottom,
}

impl StoragePosition {
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::LeftTop,
        Self::LeftCenter,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightCenter,
        Self::RightBottom,
    ];

    /// The wall this position sits on
    #[must_use]
    pub fn wall(self) -> StorageWall {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => StorageWall::Top,
            Self::LeftTop | Self::LeftCenter | Self::LeftBottom => StorageWall::Left,
            Self::RightTop | Self::RightCenter | Self::RightBottom => StorageWall::Right,
        }
    }

    /// Catalog spelling, e.g. `"Top Left"`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "Top Left",
            Self::TopCenter => "Top Center",
            Self::TopRight => "Top Right",
            Self::LeftTop => "Left Top",
            Self::LeftCenter => "Left Center",
            Self::LeftBottom => "Left Bottom",
            Self::RightTop => "Right Top",
            Self::RightCenter => "Right Center",
            Self::RightBottom => "Right Bottom",
        }
    }
}

impl std::fmt::Display for StoragePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoragePosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                ParseError::new(
                    "storage position",
                    s,
                    "top-left, top-center, top-right, left-top, left-center, left-bottom, \
                     right-top, right-center, right-bottom",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_wall_is_first_token() {
        for position in StoragePosition::ALL {
            let first = position.as_str().split(' ').next().unwrap();
            assert_eq!(position.wall().to_string(), first);
        }
    }

    #[test]
    fn test_parse_accepts_cli_spellings() {
        assert_eq!(
            "top-left".parse::<StoragePosition>().unwrap(),
            StoragePosition::TopLeft
        );
        assert_eq!(
            "Right_Bottom".parse::<StoragePosition>().unwrap(),
            StoragePosition::RightBottom
        );
        assert_eq!(
            "Left Center".parse::<StoragePosition>().unwrap(),
            StoragePosition::LeftCenter
        );
        assert_eq!("SQUARE".parse::<Shape>().unwrap(), Shape::Square);
        assert_eq!("centre".parse::<EntryPosition>().unwrap(), EntryPosition::Center);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "bottom-left".parse::<StoragePosition>().unwrap_err();
        assert_eq!(err.kind, "storage position");
        assert!("round".parse::<Shape>().is_err());
        assert!("middle".parse::<EntryPosition>().is_err());
    }

    #[test]
    fn test_storage_serde_uses_catalog_spelling() {
        let json = serde_json::to_string(&StoragePosition::LeftBottom).unwrap();
        assert_eq!(json, "\"Left Bottom\"");
        let parsed: StoragePosition = serde_json::from_str("\"Top Center\"").unwrap();
        assert_eq!(parsed, StoragePosition::TopCenter);
    }

    #[test]
    fn test_mirrored_id_offset() {
        assert_eq!(LayoutId::new(22).mirrored(), LayoutId::new(1022));
    }
}
