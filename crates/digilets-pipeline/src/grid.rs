//! Symbol/instance grouping for visualization
//!
//! Corpus files interleave nothing: trajectories arrive as consecutive
//! instance blocks, one block per symbol. The grid assigns each
//! trajectory a `(symbol, instance)` cell from its encounter index and
//! keeps the pre-resampling points for rendering.

use digilets_format::RawTrajectory;

use crate::error::*;

/// Grid dimensions and truncation limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of symbol rows
    pub num_symbols: usize,
    /// Instances recorded per symbol
    pub instances_per_symbol: usize,
    /// Maximum points kept per stored trajectory
    pub max_points: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            num_symbols: 62,         // digits, upper case, lower case
            instances_per_symbol: 5, // recordings per symbol
            max_points: 250,         // longer traces are cut off
        }
    }
}

impl GridLayout {
    /// Create a new layout with validation
    pub fn new(num_symbols: usize, instances_per_symbol: usize, max_points: usize) -> Result<Self> {
        if num_symbols == 0 {
            return Err(PipelineError::invalid_parameter(
                "num_symbols",
                num_symbols.to_string(),
                ">= 1",
            ));
        }
        if instances_per_symbol == 0 {
            return Err(PipelineError::invalid_parameter(
                "instances_per_symbol",
                instances_per_symbol.to_string(),
                ">= 1",
            ));
        }
        if max_points == 0 {
            return Err(PipelineError::invalid_parameter(
                "max_points",
                max_points.to_string(),
                ">= 1",
            ));
        }

        Ok(Self {
            num_symbols,
            instances_per_symbol,
            max_points,
        })
    }

    /// Set the number of symbol rows
    pub fn with_num_symbols(mut self, num_symbols: usize) -> Self {
        self.num_symbols = num_symbols;
        self
    }

    /// Set the instances per symbol
    pub fn with_instances_per_symbol(mut self, instances_per_symbol: usize) -> Self {
        self.instances_per_symbol = instances_per_symbol;
        self
    }

    /// Set the per-trajectory point cap
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.num_symbols * self.instances_per_symbol
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<()> {
        Self::new(self.num_symbols, self.instances_per_symbol, self.max_points)?;
        Ok(())
    }
}

/// Trajectories grouped into `(symbol, instance)` cells
#[derive(Debug, Clone)]
pub struct InstanceGrid {
    layout: GridLayout,
    cells: Vec<Option<RawTrajectory>>,
}

impl InstanceGrid {
    /// Fill a grid from trajectories in encounter order
    ///
    /// Trajectory `i` lands in cell `(i / instances_per_symbol,
    /// i % instances_per_symbol)`; filling stops once every cell is
    /// taken. Stored trajectories are truncated to `max_points` rows.
    pub fn from_trajectories(trajectories: &[RawTrajectory], layout: GridLayout) -> Result<Self> {
        layout.validate()?;

        let mut cells = vec![None; layout.capacity()];
        for (index, trajectory) in trajectories.iter().enumerate() {
            if index >= layout.capacity() {
                log::debug!(
                    "grid full after {} trajectories, {} left over",
                    layout.capacity(),
                    trajectories.len() - layout.capacity()
                );
                break;
            }
            cells[index] = Some(trajectory.truncated(layout.max_points));
        }

        Ok(Self { layout, cells })
    }

    /// Grid dimensions
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Trajectory stored at `(symbol, instance)`, if any
    pub fn get(&self, symbol: usize, instance: usize) -> Option<&RawTrajectory> {
        if symbol >= self.layout.num_symbols || instance >= self.layout.instances_per_symbol {
            return None;
        }
        self.cells[symbol * self.layout.instances_per_symbol + instance].as_ref()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate the occupied instances of one symbol row
    pub fn symbol_instances(
        &self,
        symbol: usize,
    ) -> impl Iterator<Item = (usize, &RawTrajectory)> {
        (0..self.layout.instances_per_symbol)
            .filter_map(move |instance| self.get(symbol, instance).map(|t| (instance, t)))
    }

    /// Stored lengths of one symbol row, zero for empty cells
    pub fn instance_lengths(&self, symbol: usize) -> Vec<usize> {
        (0..self.layout.instances_per_symbol)
            .map(|instance| self.get(symbol, instance).map(|t| t.len()).unwrap_or(0))
            .collect()
    }
}
