//! The bounded life world: a sparse set of live cells over a fixed grid.

use std::collections::HashSet;

use metrohash::MetroBuildHasher;
use rand::Rng;

use crate::{pos, Pos, WorldError};

/// Dense row-major snapshot of a world, 1 for live and 0 for dead.
pub type Matrix = Vec<Vec<u8>>;

type LiveSet = HashSet<Pos, MetroBuildHasher>;

/// A bounded game of life board.
///
/// State is the set of live coordinates; every member satisfies
/// `0 <= row < rows` and `0 <= col < cols`. Each [`World::step`] builds the
/// next generation aside and swaps it in whole, so rules are always applied
/// against the previous generation only.
#[derive(Debug, Clone)]
pub struct World {
    rows: usize,
    cols: usize,
    live: LiveSet,
    include_focal: bool,
}

impl World {
    /// Seeds a board with independent Bernoulli draws per cell.
    ///
    /// `alive` is the probability that each cell starts live. Fails with
    /// [`WorldError::InvalidDimension`] on a degenerate grid and
    /// [`WorldError::InvalidProbability`] when `alive` is outside [0, 1].
    pub fn random(
        rows: usize,
        cols: usize,
        alive: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, WorldError> {
        check_dimensions(rows, cols)?;
        if !(0.0..=1.0).contains(&alive) {
            return Err(WorldError::InvalidProbability(alive));
        }

        let mut live = LiveSet::default();
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                if rng.gen_bool(alive) {
                    live.insert(pos!(row, col));
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            live,
            include_focal: false,
        })
    }

    /// Builds a board from a dense matrix.
    ///
    /// The matrix shape is authoritative: it overrides whatever dimensions
    /// the caller had in mind. Any nonzero cell is treated as live.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, WorldError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        check_dimensions(rows, cols)?;

        let mut live = LiveSet::default();
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &cell) in cells.iter().take(cols).enumerate() {
                if cell != 0 {
                    live.insert(pos!(row as i32, col as i32));
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            live,
            include_focal: false,
        })
    }

    /// Replaces state and dimensions wholesale from a dense matrix.
    ///
    /// The focal mode is the only thing that survives the swap.
    pub fn set_matrix(&mut self, matrix: &[Vec<u8>]) -> Result<(), WorldError> {
        let mut next = Self::from_matrix(matrix)?;
        next.include_focal = self.include_focal;
        *self = next;
        Ok(())
    }

    /// Counts the focal cell among its own neighbors (non-standard variant).
    pub fn with_focal_included(mut self) -> Self {
        self.include_focal = true;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn include_focal(&self) -> bool {
        self.include_focal
    }

    pub fn is_live(&self, pos: Pos) -> bool {
        self.live.contains(&pos)
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Flips one cell and returns its new liveness.
    pub fn toggle(&mut self, pos: Pos) -> Result<bool, WorldError> {
        if !self.in_bounds(pos) {
            return Err(WorldError::OutOfBounds(pos));
        }
        if self.live.remove(&pos) {
            Ok(false)
        } else {
            self.live.insert(pos);
            Ok(true)
        }
    }

    /// Neighbors of `pos` in row-major order, clipped to the grid.
    ///
    /// No wraparound: an interior cell has 8 neighbors, an edge cell 5 and a
    /// corner cell 3, each one more under focal inclusion.
    pub fn neighbors(&self, pos: Pos) -> Result<Vec<Pos>, WorldError> {
        if !self.in_bounds(pos) {
            return Err(WorldError::OutOfBounds(pos));
        }
        Ok(self.neighbors_unchecked(pos))
    }

    fn neighbors_unchecked(&self, pos: Pos) -> Vec<Pos> {
        let mut result = Vec::with_capacity(9);
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 && !self.include_focal {
                    continue;
                }
                let neighbor = pos + pos!(d_row, d_col);
                if self.in_bounds(neighbor) {
                    result.push(neighbor);
                }
            }
        }
        result
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    fn live_neighbor_count(&self, pos: Pos) -> usize {
        self.neighbors_unchecked(pos)
            .into_iter()
            .filter(|neighbor| self.live.contains(neighbor))
            .count()
    }

    /// Advances the board by one generation.
    ///
    /// Scans the full grid (dead cells can become live), counting against
    /// the current generation only, then swaps the next live set in.
    pub fn step(&mut self) {
        let mut next = LiveSet::default();
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = pos!(row, col);
                let count = self.live_neighbor_count(cell);
                if count == 3 || (count == 2 && self.live.contains(&cell)) {
                    next.insert(cell);
                }
            }
        }
        self.live = next;
    }

    /// Advances the board by `generations` steps.
    ///
    /// Zero is a no-op; negative counts fail with
    /// [`WorldError::InvalidGenerationCount`].
    pub fn run(&mut self, generations: i64) -> Result<(), WorldError> {
        if generations < 0 {
            return Err(WorldError::InvalidGenerationCount(generations));
        }
        for _ in 0..generations {
            self.step();
        }
        Ok(())
    }

    /// Dense snapshot of the current generation.
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = vec![vec![0; self.cols]; self.rows];
        for pos in &self.live {
            matrix[pos.row as usize][pos.col as usize] = 1;
        }
        matrix
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), WorldError> {
    // Coordinates are i32, so dimensions must fit one.
    let limit = i32::MAX as usize;
    if rows == 0 || cols == 0 || rows > limit || cols > limit {
        return Err(WorldError::InvalidDimension { rows, cols });
    }
    Ok(())
}
