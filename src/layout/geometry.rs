//! Tile shapes and effective grid-cell geometry
//!
//! A tile occupies a rectangular footprint of grid cells. The effective
//! aspect ratio of each footprint depends on the rendered cell size and the
//! gap between cells, so a measured geometry is preferred; before layout
//! metrics exist a theoretical fallback keeps classification well defined.

use crate::math::cost::normalize_aspect_ratio;
use serde::{Deserialize, Serialize};

/// Grid footprint of a rendered tile, in column/row units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSpan {
    /// 1×1 cell
    Normal,
    /// 2 columns × 1 row
    Wide,
    /// 1 column × 2 rows
    Tall,
    /// 2 columns × 2 rows
    Big,
}

impl TileSpan {
    /// Number of grid columns the span occupies
    pub const fn columns(self) -> usize {
        match self {
            Self::Normal | Self::Tall => 1,
            Self::Wide | Self::Big => 2,
        }
    }

    /// Number of grid rows the span occupies
    pub const fn rows(self) -> usize {
        match self {
            Self::Normal | Self::Wide => 1,
            Self::Tall | Self::Big => 2,
        }
    }

    /// Canonical lowercase name used in manifests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Wide => "wide",
            Self::Tall => "tall",
            Self::Big => "big",
        }
    }

    /// Parse a manifest span name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "wide" => Some(Self::Wide),
            "tall" => Some(Self::Tall),
            "big" => Some(Self::Big),
            _ => None,
        }
    }
}

/// Effective aspect ratio of each tile footprint
///
/// Ratios are width over height of the rendered footprint, gaps included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGeometry {
    /// Effective ratio of a 1×1 tile
    pub normal: f64,
    /// Effective ratio of a 2×1 tile
    pub wide: f64,
    /// Effective ratio of a 1×2 tile
    pub tall: f64,
    /// Effective ratio of a 2×2 tile
    pub big: f64,
}

impl TileGeometry {
    /// Theoretical ratios used before layout metrics are measurable
    pub const FALLBACK: Self = Self {
        normal: 1.0,
        wide: 2.0,
        tall: 0.5,
        big: 1.0,
    };

    /// Derive effective ratios from measured cell dimensions and gap
    ///
    /// A spanning tile absorbs the gap between the cells it covers, so the
    /// wide footprint is `2w + gap` pixels across, and similarly for rows.
    /// Degenerate measurements fall back to the theoretical ratios.
    pub fn measured(cell_width: f64, cell_height: f64, gap: f64) -> Self {
        let usable = cell_width.is_finite()
            && cell_height.is_finite()
            && cell_width > 0.0
            && cell_height > 0.0;
        if !usable {
            return Self::FALLBACK;
        }
        let gap = if gap.is_finite() && gap > 0.0 { gap } else { 0.0 };

        let double_width = 2.0_f64.mul_add(cell_width, gap);
        let double_height = 2.0_f64.mul_add(cell_height, gap);

        Self {
            normal: normalize_aspect_ratio(cell_width / cell_height),
            wide: normalize_aspect_ratio(double_width / cell_height),
            tall: normalize_aspect_ratio(cell_width / double_height),
            big: normalize_aspect_ratio(double_width / double_height),
        }
    }

    /// Effective ratio for the given span
    pub const fn ratio_for(&self, span: TileSpan) -> f64 {
        match span {
            TileSpan::Normal => self.normal,
            TileSpan::Wide => self.wide,
            TileSpan::Tall => self.tall,
            TileSpan::Big => self.big,
        }
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self::FALLBACK
    }
}
