use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered color palette, indexed cyclically.
///
/// Entries are passed through to the renderer untouched, so any color syntax
/// the target library accepts is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: [
                "rgba(54, 162, 235, 0.6)",
                "rgba(255, 99, 132, 0.6)",
                "rgba(255, 206, 86, 0.6)",
                "rgba(75, 192, 192, 0.6)",
                "rgba(153, 102, 255, 0.6)",
                "rgba(255, 159, 64, 0.6)",
                "rgba(46, 204, 113, 0.6)",
                "rgba(231, 76, 60, 0.6)",
                "rgba(127, 140, 141, 0.6)",
                "rgba(52, 73, 94, 0.6)",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl ColorPalette {
    /// Builds a palette from explicit entries. An empty list is rejected.
    pub fn new<I, S>(colors: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette = Self {
            colors: colors.into_iter().map(Into::into).collect(),
        };
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "color palette must contain at least one color".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for series `index`, wrapping around the palette.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return "";
        }
        &self.colors[index % self.colors.len()]
    }

    /// One color per slice for the first `count` indices.
    #[must_use]
    pub fn first_n(&self, count: usize) -> ColorSpec {
        ColorSpec::Many((0..count).map(|i| self.color(i).to_owned()).collect())
    }

    /// Color of series `index` repeated `count` times.
    #[must_use]
    pub fn repeat(&self, index: usize, count: usize) -> ColorSpec {
        ColorSpec::Many(vec![self.color(index).to_owned(); count])
    }

    #[must_use]
    pub fn single(&self, index: usize) -> ColorSpec {
        ColorSpec::Single(self.color(index).to_owned())
    }
}

/// A dataset color: either one color for the whole series or one per value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Many(Vec<String>),
}

impl ColorSpec {
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color),
            Self::Many(_) => None,
        }
    }

    #[must_use]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(colors) => Some(colors),
        }
    }
}
