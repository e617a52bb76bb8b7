//! Line-plot rendering of norm-difference traces.
//!
//! ## Purpose
//!
//! This module is the export collaborator of the experiment: it consumes
//! a finished [`NormTrace`] and persists it as a PNG line plot with axis
//! labels, title, and grid. The numeric core never calls back into it.
//!
//! ## Design notes
//!
//! * **One artifact**: Each render call writes exactly one image and
//!   returns the written path.
//! * **Swappable**: Nothing in the engine depends on this module; tests
//!   of the core run without touching the filesystem.
//!
//! ## Error conditions
//!
//! * Backend and filesystem failures surface as
//!   [`AmenabilityError::Render`] with the offending path and reason.
//! * Rendering an empty trace is rejected as [`AmenabilityError::EmptyInput`].

use std::path::{Path, PathBuf};

// External dependencies
use plotters::prelude::*;

// Internal dependencies
use crate::engine::output::NormTrace;
use crate::primitives::errors::AmenabilityError;

// ============================================================================
// Trace Plot
// ============================================================================

/// Configuration for rendering one trace to one PNG file.
#[derive(Debug, Clone)]
pub struct TracePlot {
    path: PathBuf,
    title: String,
    y_label: String,
    size: (u32, u32),
}

impl TracePlot {
    /// Create a plot configuration targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: String::from("Probabilistic Amenability: Norm Difference"),
            y_label: String::from("E[|noisy - exact|]"),
            size: (1000, 600),
        }
    }

    /// Set the chart title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the y-axis label.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set the pixel dimensions of the output image.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Target path of the rendered image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render `trace` as a line plot with circle markers and write the PNG.
    ///
    /// The x axis runs over the 1-based iteration index, the y axis from
    /// zero to just above the largest recorded deviation.
    pub fn render(&self, trace: &NormTrace) -> Result<PathBuf, AmenabilityError> {
        if trace.is_empty() {
            return Err(AmenabilityError::EmptyInput);
        }
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| self.render_error(e.to_string()))?;
            }
        }

        let n = trace.len() as f64;
        // A zero-deviation trace (variance 0 everywhere) still needs a
        // non-degenerate y range to draw axes.
        let max = trace.max_value();
        let y_max = if max > 0.0 { max * 1.05 } else { 1.0 };

        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| self.render_error(format!("backend error: {e}")))?;

        {
            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .caption(&self.title, ("sans-serif", 24.0))
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .set_label_area_size(LabelAreaPosition::Bottom, 60)
                .build_cartesian_2d(1.0..n.max(2.0), 0.0..y_max)
                .map_err(|e| self.render_error(format!("chart build error: {e}")))?;

            chart
                .configure_mesh()
                .x_desc("Iteration (n)")
                .y_desc(self.y_label.as_str())
                .draw()
                .map_err(|e| self.render_error(format!("mesh error: {e}")))?;

            chart
                .draw_series(LineSeries::new(trace.points(), &BLUE))
                .map_err(|e| self.render_error(format!("draw error: {e}")))?;
            chart
                .draw_series(
                    trace
                        .points()
                        .map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())),
                )
                .map_err(|e| self.render_error(format!("draw error: {e}")))?;
        }

        root.present()
            .map_err(|e| self.render_error(format!("render error: {e}")))?;

        Ok(self.path.clone())
    }

    fn render_error(&self, reason: String) -> AmenabilityError {
        AmenabilityError::Render {
            path: self.path.display().to_string(),
            reason,
        }
    }
}
