//! Relaxation of the 2D Laplace equation on a rectangular grid

use std::fmt;
use std::io::Write;

use log::{debug, info};

use crate::boundary::BoundaryConditions;
use crate::grid::Grid2;
use crate::io;
use crate::types::{Error, RealScalar, Result};

/// Problem geometry and iteration budget.
///
/// Constructed once at startup and threaded through the solver. The grid
/// dimensions derive from the two physical side lengths and the mesh
/// spacing: rows span `ly`, columns span `lx`.
#[derive(Clone, Copy, Debug)]
pub struct RelaxationParameters<T> {
    /// Physical length along the column axis.
    pub lx: T,
    /// Physical length along the row axis.
    pub ly: T,
    /// Mesh spacing.
    pub delta: T,
    /// Number of relaxation sweeps to run.
    pub steps: usize,
}

impl<T: RealScalar> Default for RelaxationParameters<T> {
    fn default() -> Self {
        let lx = T::from(1.479).unwrap();
        Self {
            lx,
            ly: T::from(1.4).unwrap() * lx,
            delta: T::from(0.05).unwrap(),
            steps: 200,
        }
    }
}

impl<T: RealScalar> RelaxationParameters<T> {
    /// Number of grid rows, `floor(ly / delta) + 1`.
    pub fn rows(&self) -> usize {
        (self.ly / self.delta).floor().to_usize().unwrap() + 1
    }

    /// Number of grid columns, `floor(lx / delta) + 1`.
    pub fn cols(&self) -> usize {
        (self.lx / self.delta).floor().to_usize().unwrap() + 1
    }

    /// Check that the parameters describe a solvable problem.
    ///
    /// Rejects non-finite or non-positive lengths and spacing, and grids
    /// with fewer than three rows or columns, before anything is allocated.
    pub fn validate(&self) -> Result<()> {
        if !self.delta.is_finite() || self.delta <= T::zero() {
            return Err(Error::InvalidConfiguration(
                "mesh spacing must be positive".to_string(),
            ));
        }
        if !self.lx.is_finite()
            || !self.ly.is_finite()
            || self.lx <= T::zero()
            || self.ly <= T::zero()
        {
            return Err(Error::InvalidConfiguration(
                "side lengths must be positive".to_string(),
            ));
        }
        if self.rows() < 3 || self.cols() < 3 {
            return Err(Error::InvalidConfiguration(format!(
                "a {} by {} grid has no interior",
                self.rows(),
                self.cols()
            )));
        }
        Ok(())
    }
}

/// Neighbor-averaging update order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateScheme {
    /// In-place sweep in increasing row-major order, so the neighbors above
    /// and to the left of a cell are read already updated within the
    /// current sweep.
    #[default]
    GaussSeidel,
    /// Double-buffered sweep; every neighbor read sees the previous sweep.
    Jacobi,
}

/// One in-place relaxation sweep over all free cells in row-major order.
///
/// Each free cell is replaced by the average of its four axis neighbors as
/// they are at the moment of the update. Cells fixed by `boundary` are
/// never written.
pub fn gauss_seidel_sweep<T: RealScalar>(grid: &mut Grid2<T>, boundary: &BoundaryConditions<T>) {
    let (nrows, ncols) = grid.shape();
    let four = T::from(4.0).unwrap();
    for i in 1..nrows - 1 {
        for j in 1..ncols - 1 {
            if boundary.contains(i, j) {
                continue;
            }
            let sum = grid.value(i + 1, j)
                + grid.value(i - 1, j)
                + grid.value(i, j + 1)
                + grid.value(i, j - 1);
            grid.set(i, j, sum / four);
        }
    }
}

/// One double-buffered relaxation sweep.
///
/// Every neighbor read sees the grid as it was before the sweep, so the
/// result is independent of update order. Converges more slowly than
/// [`gauss_seidel_sweep`] and follows a different numeric trajectory.
pub fn jacobi_sweep<T: RealScalar>(grid: &mut Grid2<T>, boundary: &BoundaryConditions<T>) {
    let (nrows, ncols) = grid.shape();
    let four = T::from(4.0).unwrap();
    let previous = grid.clone();
    for i in 1..nrows - 1 {
        for j in 1..ncols - 1 {
            if boundary.contains(i, j) {
                continue;
            }
            let sum = previous.value(i + 1, j)
                + previous.value(i - 1, j)
                + previous.value(i, j + 1)
                + previous.value(i, j - 1);
            grid.set(i, j, sum / four);
        }
    }
}

/// Fixed-step relaxation driver.
///
/// Owns the grid for the life of the run: validates the parameters, applies
/// the initial and boundary conditions once, then sweeps a fixed number of
/// times, emitting one frame per sweep.
pub struct RelaxationSolver<T> {
    parameters: RelaxationParameters<T>,
    boundary: BoundaryConditions<T>,
    grid: Grid2<T>,
    scheme: UpdateScheme,
}

impl<T: RealScalar> RelaxationSolver<T> {
    /// Set up the parallel-plate problem for the given parameters.
    ///
    /// Fails with [`Error::InvalidConfiguration`] before any allocation if
    /// the parameters do not describe a solvable problem.
    pub fn new(parameters: RelaxationParameters<T>, scheme: UpdateScheme) -> Result<Self> {
        parameters.validate()?;
        let shape = (parameters.rows(), parameters.cols());
        let boundary = BoundaryConditions::parallel_plates(shape.0, shape.1);
        let mut grid = Grid2::new(shape, boundary.interior());
        boundary.initialize(&mut grid);
        Ok(Self {
            parameters,
            boundary,
            grid,
            scheme,
        })
    }

    /// The current grid state.
    pub fn grid(&self) -> &Grid2<T> {
        &self.grid
    }

    /// The solver configuration.
    pub fn parameters(&self) -> &RelaxationParameters<T> {
        &self.parameters
    }

    /// The boundary model.
    pub fn boundary(&self) -> &BoundaryConditions<T> {
        &self.boundary
    }

    /// Run one sweep with the configured scheme.
    pub fn step(&mut self) {
        match self.scheme {
            UpdateScheme::GaussSeidel => gauss_seidel_sweep(&mut self.grid, &self.boundary),
            UpdateScheme::Jacobi => jacobi_sweep(&mut self.grid, &self.boundary),
        }
    }

    /// Run the full fixed-step iteration, emitting one frame per sweep.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()>
    where
        T: fmt::Display,
    {
        let (nrows, ncols) = self.grid.shape();
        info!(
            "relaxing a {} by {} grid for {} sweeps",
            nrows, ncols, self.parameters.steps
        );
        io::write_gnuplot_preamble(out)?;
        for step in 0..self.parameters.steps {
            self.step();
            io::write_gnuplot_frame(out, &self.grid, self.parameters.delta)?;
            debug!("completed sweep {}", step + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::*;

    #[test]
    fn test_default_dimensions() {
        let parameters = RelaxationParameters::<f64>::default();
        assert_eq!(parameters.rows(), 42);
        assert_eq!(parameters.cols(), 30);
        assert_eq!(parameters.steps, 200);
        parameters.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_degenerate_setups() {
        let mut parameters = RelaxationParameters::<f64>::default();
        parameters.delta = 0.0;
        assert!(matches!(
            parameters.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let mut parameters = RelaxationParameters::<f64>::default();
        parameters.lx = -1.0;
        assert!(matches!(
            parameters.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        // Spacing wider than the domain leaves fewer than three columns.
        let mut parameters = RelaxationParameters::<f64>::default();
        parameters.delta = 1.0;
        assert!(matches!(
            parameters.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    fn plate_problem_5x5() -> (Grid2<f64>, BoundaryConditions<f64>) {
        let boundary = BoundaryConditions::parallel_plates(5, 5);
        let mut grid = Grid2::new((5, 5), 0.0);
        boundary.initialize(&mut grid);
        (grid, boundary)
    }

    #[test]
    fn test_gauss_seidel_update_order() {
        // The five free cells of the 5x5 plate problem, updated in row-major
        // order with in-place reads. Worked by hand from the seed state.
        let (mut grid, boundary) = plate_problem_5x5();
        gauss_seidel_sweep(&mut grid, &boundary);

        assert_relative_eq!(grid.value(1, 3), 44.0, max_relative = 1e-14);
        assert_relative_eq!(grid.value(2, 1), 0.25, max_relative = 1e-14);
        assert_relative_eq!(grid.value(2, 2), 0.3125, max_relative = 1e-14);
        assert_relative_eq!(grid.value(2, 3), 11.328125, max_relative = 1e-14);
        assert_relative_eq!(grid.value(3, 3), -15.91796875, max_relative = 1e-14);
    }

    #[test]
    fn test_free_cells_average_their_neighbors() {
        // Replay the sweep on a copy, reading neighbor values at the moment
        // each cell is updated, and compare cell by cell.
        let (mut grid, boundary) = plate_problem_5x5();
        let mut replay = grid.clone();
        gauss_seidel_sweep(&mut grid, &boundary);

        for i in 1..4 {
            for j in 1..4 {
                if boundary.contains(i, j) {
                    continue;
                }
                let average = (replay.value(i + 1, j)
                    + replay.value(i - 1, j)
                    + replay.value(i, j + 1)
                    + replay.value(i, j - 1))
                    / 4.0;
                replay.set(i, j, average);
                assert_relative_eq!(grid.value(i, j), average, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn test_jacobi_reads_previous_sweep_only() {
        let (mut grid, boundary) = plate_problem_5x5();
        jacobi_sweep(&mut grid, &boundary);

        // (2, 2) averages the untouched seed at (2, 1) rather than its
        // freshly updated value, unlike the in-place sweep.
        assert_relative_eq!(grid.value(2, 1), 0.25, max_relative = 1e-14);
        assert_relative_eq!(grid.value(2, 2), 0.5, max_relative = 1e-14);
    }

    #[test]
    fn test_boundary_cells_are_invariant() {
        let (mut grid, boundary) = plate_problem_5x5();
        let initial = grid.clone();
        for _ in 0..3 {
            gauss_seidel_sweep(&mut grid, &boundary);
        }
        for (i, j) in boundary.cells((5, 5)) {
            assert_eq!(grid.value(i, j), initial.value(i, j));
        }
    }

    #[test]
    fn test_solver_initial_state() {
        let solver =
            RelaxationSolver::new(RelaxationParameters::<f64>::default(), UpdateScheme::default())
                .unwrap();
        assert_eq!(solver.grid().shape(), (42, 30));
        // Top row at 100, interior seeded with 1.
        assert_eq!(solver.grid().value(0, 15), 100.0);
        assert_eq!(solver.grid().value(20, 15), 1.0);
    }
}
