use lut_grid::LutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid grid size '{0}' (expected NXxNYxNZ, e.g. 4x3x3)")]
    InvalidSize(String),

    #[error("Invalid color '{0}' (expected rrrr,gggg,bbbb or #rrggbb)")]
    InvalidColor(String),

    #[error("Grid error: {0}")]
    Grid(#[from] LutError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row outside of a table")]
    NoOpenTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_size() {
        let error = ConfigError::InvalidSize("4x3".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid grid size '4x3' (expected NXxNYxNZ, e.g. 4x3x3)"
        );
    }

    #[test]
    fn test_config_error_invalid_color() {
        let error = ConfigError::InvalidColor("#12".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid color '#12' (expected rrrr,gggg,bbbb or #rrggbb)"
        );
    }

    #[test]
    fn test_config_error_from_grid_error() {
        let error: ConfigError = LutError::AxisTooSmall { axis: 'x', size: 1 }.into();
        assert_eq!(
            error.to_string(),
            "Grid error: x axis has 1 points, need at least 2"
        );
    }

    #[test]
    fn test_report_error_no_open_table() {
        assert_eq!(ReportError::NoOpenTable.to_string(), "Row outside of a table");
    }

    #[test]
    fn test_report_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: ReportError = io.into();
        match error {
            ReportError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
