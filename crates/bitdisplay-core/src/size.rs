//! # Avatar Sizes
//!
//! Named square output sizes for layered avatars. Unknown or missing sizes
//! fall back to [`AvatarSize::Md`].

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// A named avatar edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// 50 px.
    Xxs,
    /// 100 px.
    Xs,
    /// 200 px.
    Sm,
    /// 300 px.
    #[default]
    Md,
    /// 500 px.
    Lg,
    /// 800 px.
    Xl,
    /// 1000 px.
    Xxl,
}

impl AvatarSize {
    /// Edge length in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Xxs => 50,
            Self::Xs => 100,
            Self::Sm => 200,
            Self::Md => 300,
            Self::Lg => 500,
            Self::Xl => 800,
            Self::Xxl => 1000,
        }
    }

    /// Returns the size name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xxs => "xxs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

impl std::fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AvatarSize {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xxs" => Ok(Self::Xxs),
            "xs" => Ok(Self::Xs),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "xxl" => Ok(Self::Xxl),
            other => Err(DisplayError::InvalidInput(format!(
                "unknown avatar size: {other}"
            ))),
        }
    }
}
