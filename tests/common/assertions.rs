//! Assertion helpers for tests.

use lutviz::services::LutAnalysis;
use pretty_assertions::assert_eq;

/// Assert the reference counters sum to 8 per sample
pub fn assert_eight_per_sample(analysis: &LutAnalysis) {
    assert_eq!(
        analysis.grid.total_visits(),
        8 * analysis.mappings.len() as u64,
        "Expected 8 references per sample for grid {:?}",
        analysis.grid.dims()
    );
}

/// Assert every sample's cell root leaves room for the far corner
pub fn assert_roots_in_bounds(analysis: &LutAnalysis) {
    let (nx, ny, nz) = analysis.grid.dims();
    for m in &analysis.mappings {
        let b = m.root.base;
        assert!(
            b.x + 1 < nx && b.y + 1 < ny && b.z + 1 < nz,
            "Sample {} root {} escapes grid {}x{}x{}",
            m.name,
            b,
            nx,
            ny,
            nz
        );
    }
}

/// Assert a JSON report table has the expected shape
pub fn assert_json_table(value: &serde_json::Value, index: usize, headers: &[&str], rows: usize) {
    let table = &value["tables"][index];
    let actual: Vec<&str> = table["headers"]
        .as_array()
        .expect("headers array")
        .iter()
        .map(|h| h.as_str().expect("header string"))
        .collect();
    assert_eq!(actual, headers.to_vec());
    assert_eq!(
        table["rows"].as_array().expect("rows array").len(),
        rows,
        "Unexpected row count in table {}",
        table["title"]
    );
}
