//! Test fixtures and constants.

use std::io::Write;

use lutviz::models::{GridSize, LutConfig, SampleConfig};
use lutviz::report::{present, HtmlReporter, JsonReporter, TextReporter};
use lutviz::services::LutAnalysis;

/// Grid shapes exercised by property tests
pub const SHAPES: [(usize, usize, usize); 6] = [
    (2, 2, 2),
    (4, 3, 3),
    (3, 4, 5),
    (7, 2, 9),
    (5, 5, 5),
    (17, 3, 2),
];

/// YAML with a small custom grid and two samples
pub const CUSTOM_CONFIG: &str = r#"
grid:
  x: 3
  y: 2
  z: 2
samples:
  - name: near black
    rgb: [256, 512, 768]
  - name: near white
    rgb: [65000, 65100, 65200]
"#;

/// Write `content` to a temporary YAML file
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

/// Analysis of the default 4x3x3 grid with the color checker
pub fn default_analysis() -> LutAnalysis {
    let config = LutConfig::default();
    LutAnalysis::run(config.grid, &config.samples()).expect("default grid builds")
}

pub fn analysis_for(size: GridSize, samples: &[SampleConfig]) -> LutAnalysis {
    LutAnalysis::run(size, samples).expect("grid builds")
}

pub fn text_report(analysis: &LutAnalysis) -> String {
    let mut reporter = TextReporter::new(Vec::new());
    present(analysis, &mut reporter).expect("text report");
    String::from_utf8(reporter.into_inner()).expect("utf-8 report")
}

pub fn html_report(analysis: &LutAnalysis) -> String {
    let mut reporter = HtmlReporter::new(Vec::new(), "test report");
    present(analysis, &mut reporter).expect("html report");
    String::from_utf8(reporter.into_inner()).expect("utf-8 report")
}

pub fn json_report(analysis: &LutAnalysis) -> serde_json::Value {
    let mut reporter = JsonReporter::new(Vec::new(), "test report");
    present(analysis, &mut reporter).expect("json report");
    serde_json::from_slice(&reporter.into_inner()).expect("valid json")
}
