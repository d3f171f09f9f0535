//! Layout kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;

/// Page layouts, in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutKind {
    #[default]
    CollapsibleSide,
    StackedSide,
    TopBarClassic,
    FramelessSide,
    ContentOverlay,
    Blank,
}

impl LayoutKind {
    /// Every kind in declaration order.
    pub const ALL: [LayoutKind; 6] = [
        Self::CollapsibleSide,
        Self::StackedSide,
        Self::TopBarClassic,
        Self::FramelessSide,
        Self::ContentOverlay,
        Self::Blank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollapsibleSide => "collapsibleSide",
            Self::StackedSide => "stackedSide",
            Self::TopBarClassic => "topBarClassic",
            Self::FramelessSide => "framelessSide",
            Self::ContentOverlay => "contentOverlay",
            Self::Blank => "blank",
        }
    }
}

impl FromStr for LayoutKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LayoutError::unknown_kind(s))
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_kind() {
        assert_eq!("topBarClassic".parse::<LayoutKind>().unwrap(), LayoutKind::TopBarClassic);
        assert_eq!("BLANK".parse::<LayoutKind>().unwrap(), LayoutKind::Blank);
        assert_eq!(
            "sidebar".parse::<LayoutKind>(),
            Err(LayoutError::UnknownKind("sidebar".into()))
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in LayoutKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
