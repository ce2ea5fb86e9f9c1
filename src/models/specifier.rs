//! Key position specifiers.

/// Position of a key on a fixed grid, in grid cells.
///
/// Width and height default to 1. The in-memory value keeps whatever sign
/// it was constructed with; decoding always yields non-negative sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridFitSpecifier {
    /// Column of the top-left cell
    pub x: i64,
    /// Row of the top-left cell
    pub y: i64,
    /// Number of columns spanned
    pub width: i64,
    /// Number of rows spanned
    pub height: i64,
}

impl GridFitSpecifier {
    /// Creates a 1×1 specifier at the given cell.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
        }
    }

    /// Sets the width.
    #[must_use]
    pub const fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    /// Sets the height.
    #[must_use]
    pub const fn with_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Returns a copy with width and height replaced by their absolute values.
    ///
    /// `None` when a size is `i64::MIN`, whose magnitude does not fit.
    #[must_use]
    pub const fn normalized(self) -> Option<Self> {
        match (self.width.checked_abs(), self.height.checked_abs()) {
            (Some(width), Some(height)) => Some(Self {
                x: self.x,
                y: self.y,
                width,
                height,
            }),
            _ => None,
        }
    }
}

/// Position of a key inside a scrollable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridScrollSpecifier {
    /// Ordinal index in scroll order
    pub index: i64,
}

impl GridScrollSpecifier {
    /// Creates a specifier for the given ordinal.
    #[must_use]
    pub const fn new(index: i64) -> Self {
        Self { index }
    }
}

/// Where a key sits in its interface's layout.
///
/// A specifier whose variant does not match the interface's layout is kept
/// as-is; consumers are expected to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Specifier {
    /// Fixed-grid coordinate
    GridFit(GridFitSpecifier),
    /// Scrollable-grid ordinal
    GridScroll(GridScrollSpecifier),
}

impl Specifier {
    /// Shorthand for a 1×1 fixed-grid specifier.
    #[must_use]
    pub const fn grid_fit(x: i64, y: i64) -> Self {
        Self::GridFit(GridFitSpecifier::new(x, y))
    }

    /// Shorthand for a scroll specifier.
    #[must_use]
    pub const fn grid_scroll(index: i64) -> Self {
        Self::GridScroll(GridScrollSpecifier::new(index))
    }
}

impl From<GridFitSpecifier> for Specifier {
    fn from(value: GridFitSpecifier) -> Self {
        Self::GridFit(value)
    }
}

impl From<GridScrollSpecifier> for Specifier {
    fn from(value: GridScrollSpecifier) -> Self {
        Self::GridScroll(value)
    }
}
