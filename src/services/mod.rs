pub mod analysis;

pub use analysis::{LutAnalysis, SampleMapping};
