//! Decorative feature-grid placement.
//!
//! The grid is a fixed 10x6 cell matrix with a reserved 4x4 center block.
//! Large features span 2x2 cells and occupy the four quadrants of the
//! center block in declaration order; small features fill every
//! non-center cell in row-major order. Oversupply of either kind is
//! silently truncated and undersupply leaves cells empty; feature counts
//! are a styling concern, never an error.

use crate::catalog::FeatureAssets;

/// Grid width in cells.
pub const GRID_COLS: u8 = 10;
/// Grid height in cells.
pub const GRID_ROWS: u8 = 6;
/// Leftmost column of the reserved center block.
pub const CENTER_COL: u8 = 3;
/// Topmost row of the reserved center block.
pub const CENTER_ROW: u8 = 1;
/// Center block edge length, in cells.
pub const CENTER_SIZE: u8 = 4;
/// Cells spanned by a large feature along each axis.
pub const LARGE_SPAN: u8 = 2;

/// Which source list a placed cell draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSlot {
    /// Index into [`FeatureAssets::small_features`].
    Small(usize),
    /// Index into [`FeatureAssets::large_features`].
    Large(usize),
}

/// One placed feature, in grid coordinates (column, row, zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedFeature {
    /// Leftmost column of the feature.
    pub col: u8,
    /// Topmost row of the feature.
    pub row: u8,
    /// Cells spanned along each axis (1 for small, 2 for large).
    pub span: u8,
    /// Source slot.
    pub slot: FeatureSlot,
}

/// The computed placement for one render of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureGrid {
    placements: Vec<PlacedFeature>,
}

impl FeatureGrid {
    /// All placements, large features first, then small in row-major order.
    #[must_use]
    pub fn placements(&self) -> &[PlacedFeature] {
        &self.placements
    }

    /// Number of placed features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed (empty or missing asset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Whether a cell lies inside the reserved center block.
#[must_use]
pub fn in_center(col: u8, row: u8) -> bool {
    (CENTER_COL..CENTER_COL + CENTER_SIZE).contains(&col)
        && (CENTER_ROW..CENTER_ROW + CENTER_SIZE).contains(&row)
}

/// Compute the grid placement for the given assets.
#[must_use]
pub fn layout(assets: &FeatureAssets) -> FeatureGrid {
    let mut placements = Vec::new();

    // Center quadrants, row-major: top-left, top-right, bottom-left,
    // bottom-right. At most four large features fit.
    let quadrants = [
        (CENTER_COL, CENTER_ROW),
        (CENTER_COL + LARGE_SPAN, CENTER_ROW),
        (CENTER_COL, CENTER_ROW + LARGE_SPAN),
        (CENTER_COL + LARGE_SPAN, CENTER_ROW + LARGE_SPAN),
    ];
    for (ix, (col, row)) in quadrants
        .into_iter()
        .take(assets.large_features.len())
        .enumerate()
    {
        placements.push(PlacedFeature {
            col,
            row,
            span: LARGE_SPAN,
            slot: FeatureSlot::Large(ix),
        });
    }

    let mut next_small = 0;
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            if in_center(col, row) {
                continue;
            }
            if next_small >= assets.small_features.len() {
                return FeatureGrid { placements };
            }
            placements.push(PlacedFeature {
                col,
                row,
                span: 1,
                slot: FeatureSlot::Small(next_small),
            });
            next_small += 1;
        }
    }

    FeatureGrid { placements }
}
