//! Grid construction and sample reference counting, wired from config.

use lut_grid::{count_references, CellRoot, LutError, LutGrid, Rgb16};

use crate::models::{GridSize, SampleConfig};

/// A sample and the grid cell it landed in
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMapping {
    pub name: String,
    pub color: Rgb16,
    pub root: CellRoot,
}

/// A built grid with every sample recorded into it
#[derive(Debug, Clone)]
pub struct LutAnalysis {
    pub grid: LutGrid,
    pub mappings: Vec<SampleMapping>,
}

impl LutAnalysis {
    /// Build an identity grid of `size` and record each sample into it
    pub fn run(size: GridSize, samples: &[SampleConfig]) -> Result<Self, LutError> {
        let mut grid = LutGrid::identity(size.x, size.y, size.z)?;
        tracing::debug!(grid = %size, points = grid.len(), "Built identity grid");

        let roots = count_references(&mut grid, samples.iter().map(SampleConfig::color));
        let mappings: Vec<SampleMapping> = samples
            .iter()
            .zip(roots)
            .map(|(sample, root)| SampleMapping {
                name: sample.name.clone(),
                color: sample.color(),
                root,
            })
            .collect();

        for m in &mappings {
            tracing::trace!(sample = %m.name, color = %m.color, root = %m.root.base, "Mapped sample");
        }

        let referenced = grid.iter().filter(|(_, p)| p.visits > 0).count();
        tracing::info!(
            samples = mappings.len(),
            referenced,
            unreferenced = grid.len() - referenced,
            "Counted references"
        );

        Ok(Self { grid, mappings })
    }

    /// Largest vertex counter, 0 for an empty sample set
    pub fn max_visits(&self) -> u32 {
        self.grid
            .iter()
            .map(|(_, p)| p.visits)
            .max()
            .unwrap_or(0)
    }
}
