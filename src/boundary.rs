//! Fixed-value boundary conditions

use std::ops::Range;

use itertools::Itertools;

use crate::grid::Grid2;
use crate::types::RealScalar;

/// A set of grid cells held at a single fixed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryRegion {
    /// Every cell of one row.
    Row(usize),
    /// Every cell of one column.
    Column(usize),
    /// A contiguous span of cells within one row.
    RowSegment {
        /// The row containing the segment.
        row: usize,
        /// Half-open column range covered by the segment.
        cols: Range<usize>,
    },
    /// A contiguous span of cells within one column.
    ColumnSegment {
        /// The column containing the segment.
        col: usize,
        /// Half-open row range covered by the segment.
        rows: Range<usize>,
    },
}

impl BoundaryRegion {
    /// Whether the region contains the cell `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            BoundaryRegion::Row(r) => *r == row,
            BoundaryRegion::Column(c) => *c == col,
            BoundaryRegion::RowSegment { row: r, cols } => *r == row && cols.contains(&col),
            BoundaryRegion::ColumnSegment { col: c, rows } => *c == col && rows.contains(&row),
        }
    }

    /// The cells covered by the region on a grid of shape `(rows, cols)`,
    /// in row-major order.
    pub fn cells(&self, shape: (usize, usize)) -> Vec<(usize, usize)> {
        let (nrows, ncols) = shape;
        match self {
            BoundaryRegion::Row(r) => (0..ncols).map(|j| (*r, j)).collect(),
            BoundaryRegion::Column(c) => (0..nrows).map(|i| (i, *c)).collect(),
            BoundaryRegion::RowSegment { row, cols } => cols.clone().map(|j| (*row, j)).collect(),
            BoundaryRegion::ColumnSegment { col, rows } => {
                rows.clone().map(|i| (i, *col)).collect()
            }
        }
    }
}

/// A Dirichlet condition: one region stamped with one fixed value.
#[derive(Clone, Debug)]
pub struct DirichletCondition<T> {
    /// The cells held fixed.
    pub region: BoundaryRegion,
    /// The value they are held at.
    pub value: T,
}

/// The boundary model of a relaxation problem.
///
/// Conditions are applied in order, so later conditions overwrite earlier
/// ones where regions overlap. Cells covered by no condition are free cells;
/// they start at the interior seed value and are the only cells a relaxation
/// sweep may write.
#[derive(Clone, Debug)]
pub struct BoundaryConditions<T> {
    conditions: Vec<DirichletCondition<T>>,
    interior: T,
}

impl<T: RealScalar> BoundaryConditions<T> {
    /// Create a boundary model from an ordered condition list and an interior
    /// seed value.
    pub fn new(conditions: Vec<DirichletCondition<T>>, interior: T) -> Self {
        Self {
            conditions,
            interior,
        }
    }

    /// The grounded-frame-and-two-plates problem.
    ///
    /// The top row is held at 100, the rest of the frame at 0, and two
    /// interior plate segments at rows `rows/3` and `(2*rows)/3` are held at
    /// +75 and -75 over the half-open column range
    /// `[cols/4, cols/4 + cols/2)`. Free cells are seeded with 1.
    pub fn parallel_plates(rows: usize, cols: usize) -> Self {
        let plate_cols = cols / 4..cols / 4 + cols / 2;
        Self::new(
            vec![
                DirichletCondition {
                    region: BoundaryRegion::Row(0),
                    value: T::from(100.0).unwrap(),
                },
                DirichletCondition {
                    region: BoundaryRegion::Row(rows - 1),
                    value: T::zero(),
                },
                DirichletCondition {
                    region: BoundaryRegion::ColumnSegment {
                        col: 0,
                        rows: 1..rows - 1,
                    },
                    value: T::zero(),
                },
                DirichletCondition {
                    region: BoundaryRegion::ColumnSegment {
                        col: cols - 1,
                        rows: 1..rows - 1,
                    },
                    value: T::zero(),
                },
                DirichletCondition {
                    region: BoundaryRegion::RowSegment {
                        row: rows / 3,
                        cols: plate_cols.clone(),
                    },
                    value: T::from(75.0).unwrap(),
                },
                DirichletCondition {
                    region: BoundaryRegion::RowSegment {
                        row: (2 * rows) / 3,
                        cols: plate_cols,
                    },
                    value: T::from(-75.0).unwrap(),
                },
            ],
            T::one(),
        )
    }

    /// The ordered condition list.
    pub fn conditions(&self) -> &[DirichletCondition<T>] {
        &self.conditions
    }

    /// The value free cells are seeded with before the first sweep.
    pub fn interior(&self) -> T {
        self.interior
    }

    /// Whether the cell `(row, col)` is held fixed by any condition.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.region.contains(row, col))
    }

    /// Every cell fixed by some condition, in condition order.
    ///
    /// Cells covered by more than one condition appear once per condition.
    pub fn cells(&self, shape: (usize, usize)) -> Vec<(usize, usize)> {
        self.conditions
            .iter()
            .flat_map(|condition| condition.region.cells(shape))
            .collect()
    }

    /// Stamp a grid: the interior seed everywhere, then each condition in
    /// order.
    ///
    /// Idempotent, so re-applying to an already initialized grid leaves it
    /// unchanged.
    pub fn initialize(&self, grid: &mut Grid2<T>) {
        let (nrows, ncols) = grid.shape();
        for (i, j) in (0..nrows).cartesian_product(0..ncols) {
            grid.set(i, j, self.interior);
        }
        for condition in &self.conditions {
            for (i, j) in condition.region.cells((nrows, ncols)) {
                grid.set(i, j, condition.value);
            }
        }
    }
}
