//! Grid construction and reference counting through the application layer.

mod common;

use common::*;
use lut_grid::{GridCoord, LutError, Rgb16, MAX_COLOR};
use lutviz::models::{GridSize, SampleConfig};
use lutviz::services::LutAnalysis;
use pretty_assertions::assert_eq;

fn sweep_samples() -> Vec<SampleConfig> {
    (0..64u32)
        .map(|i| {
            let r = (i * 1040) as u16;
            let g = MAX_COLOR - (i * 997) as u16;
            let b = ((i * 7919) % 65536) as u16;
            SampleConfig {
                name: format!("sweep {i}"),
                rgb: [r, g, b],
            }
        })
        .chain([
            SampleConfig {
                name: "black".to_string(),
                rgb: [0, 0, 0],
            },
            SampleConfig {
                name: "white".to_string(),
                rgb: [MAX_COLOR; 3],
            },
        ])
        .collect()
}

#[test]
fn test_default_checker_counts() {
    let analysis = default_analysis();
    assert_eq!(analysis.mappings.len(), 24);
    assert_eight_per_sample(&analysis);
    assert_roots_in_bounds(&analysis);
}

#[test]
fn test_sweep_on_many_shapes() {
    let samples = sweep_samples();
    for (x, y, z) in SHAPES {
        let analysis = analysis_for(GridSize { x, y, z }, &samples);
        assert_eight_per_sample(&analysis);
        assert_roots_in_bounds(&analysis);
    }
}

#[test]
fn test_single_sample_marks_exactly_one_cube() {
    let sample = SampleConfig {
        name: "probe".to_string(),
        rgb: [50000, 40000, 10000],
    };
    let analysis = analysis_for(GridSize::default(), &[sample]);
    let base = analysis.mappings[0].root.base;
    assert_eq!(base, GridCoord::new(2, 1, 0));

    let marked: Vec<GridCoord> = analysis
        .grid
        .iter()
        .filter(|(_, p)| p.visits > 0)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(marked.len(), 8);
    assert!(analysis.grid.iter().all(|(_, p)| p.visits <= 1));
}

#[test]
fn test_vertex_values_on_four_point_axis() {
    let analysis = analysis_for(GridSize { x: 4, y: 2, z: 2 }, &[]);
    let reds: Vec<u16> = (0..4)
        .map(|x| analysis.grid[GridCoord::new(x, 0, 0)].color.r)
        .collect();
    assert_eq!(reds, vec![0, 21845, 43690, 65535]);
}

#[test]
fn test_axis_size_one_is_rejected() {
    for size in [
        GridSize { x: 1, y: 3, z: 3 },
        GridSize { x: 4, y: 1, z: 3 },
        GridSize { x: 4, y: 3, z: 1 },
    ] {
        let err = LutAnalysis::run(size, &[]).unwrap_err();
        assert!(matches!(err, LutError::AxisTooSmall { size: 1, .. }), "{size}: {err}");
    }
}

#[test]
fn test_identity_mapping_of_checker() {
    let analysis = default_analysis();
    for m in &analysis.mappings {
        let mapped = analysis.grid.map_color(m.color);
        for (a, b) in m.color.channels().into_iter().zip(mapped.channels()) {
            assert!(a.abs_diff(b) <= 1, "{} mapped {} to {}", m.name, m.color, mapped);
        }
    }
    assert_eq!(
        analysis.grid.map_color(Rgb16::new(0, 0, 0)),
        Rgb16::new(0, 0, 0)
    );
}
