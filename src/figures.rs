//! The five thermodynamics figures.
//!
//! Each figure module splits into a pure data builder, which samples the model
//! on the figure's fixed grids, and a renderer that draws that data with
//! [`plotters`]. [`render`] ties the two together for one figure and writes a
//! PNG; [`render_all`] produces every figure in order, finishing each file
//! before starting the next.

mod critical_exponents;
mod error;
mod gibbs;
mod joule_thomson;
mod phase_space;
mod pv;
mod style;

pub use error::FigureError;

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};

use crate::models::gravity::black_hole::LqgBlackHole;
use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use style::Typography;

/// Output settings shared by all figures.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Directory the PNG files are written to.
    pub output_dir: PathBuf,

    /// Raster resolution in dots per inch.
    pub dpi: Constrained<u32, StrictlyPositive>,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: StrictlyPositive::new(150).expect("150 is strictly positive"),
        }
    }
}

impl FigureConfig {
    /// Creates a configuration writing to `output_dir` at `dpi`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dpi` is zero.
    pub fn new(output_dir: impl Into<PathBuf>, dpi: u32) -> ConstraintResult<Self> {
        Ok(Self {
            output_dir: output_dir.into(),
            dpi: StrictlyPositive::new(dpi)?,
        })
    }

    /// Output path of `figure`.
    #[must_use]
    pub fn path(&self, figure: Figure) -> PathBuf {
        self.output_dir.join(figure.file_name())
    }

    /// Pixel dimensions of `figure` at the configured resolution.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self, figure: Figure) -> (u32, u32) {
        let dpi = f64::from(*self.dpi.as_ref());
        let (width, height) = figure.size_inches();
        ((width * dpi).round() as u32, (height * dpi).round() as u32)
    }

    fn typography(&self) -> Typography {
        Typography::new(*self.dpi.as_ref())
    }
}

/// One of the generated figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    /// Gibbs free energy versus horizon radius.
    Gibbs,
    /// Pressure-volume isotherms around the critical point.
    PressureVolume,
    /// Volume-pressure-temperature surface.
    PhaseSpace,
    /// Joule-Thomson inversion curve and coefficient.
    JouleThomson,
    /// Mean-field critical exponent scaling.
    CriticalExponents,
}

impl Figure {
    /// Every figure, in generation order.
    pub const ALL: [Self; 5] = [
        Self::Gibbs,
        Self::PressureVolume,
        Self::PhaseSpace,
        Self::JouleThomson,
        Self::CriticalExponents,
    ];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Gibbs => "figure1_gibbs_enhanced.png",
            Self::PressureVolume => "figure2_pv_diagrams.png",
            Self::PhaseSpace => "figure3_3d_phase_space.png",
            Self::JouleThomson => "figure4_joule_thomson.png",
            Self::CriticalExponents => "figure5_critical_exponents.png",
        }
    }

    /// Short human-readable description, used in progress output.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Gibbs => "Enhanced Gibbs Free Energy Analysis",
            Self::PressureVolume => "P-V Diagrams with Maxwell Construction",
            Self::PhaseSpace => "3D Quantum Phase Space",
            Self::JouleThomson => "Enhanced Joule-Thomson Analysis",
            Self::CriticalExponents => "Critical Exponents Analysis",
        }
    }

    /// Canvas size in inches.
    fn size_inches(self) -> (f64, f64) {
        match self {
            Self::Gibbs | Self::PressureVolume => (12.0, 8.0),
            Self::PhaseSpace => (14.0, 10.0),
            Self::JouleThomson => (16.0, 8.0),
            Self::CriticalExponents => (16.0, 12.0),
        }
    }
}

/// Samples and draws `figure`, returning the written path.
///
/// # Errors
///
/// Returns [`FigureError::Draw`] if the backend fails to draw or encode the
/// image.
pub fn render(
    figure: Figure,
    model: &LqgBlackHole,
    config: &FigureConfig,
) -> Result<PathBuf, FigureError> {
    let path = config.path(figure);
    let size = config.pixels(figure);
    let typography = config.typography();
    let params = model.parameters();

    debug!(file = figure.file_name(), width = size.0, height = size.1, "drawing");

    let root = BitMapBackend::new(&path, size).into_drawing_area();
    let drawn = match figure {
        Figure::Gibbs => gibbs::draw(&root, &gibbs::data(params), typography),
        Figure::PressureVolume => pv::draw(&root, &pv::data(params), typography),
        Figure::PhaseSpace => {
            phase_space::draw(&root, &phase_space::data(model), typography)
        }
        Figure::JouleThomson => {
            joule_thomson::draw(&root, &joule_thomson::data(params), typography)
        }
        Figure::CriticalExponents => {
            critical_exponents::draw(&root, &critical_exponents::data(), typography)
        }
    };

    drawn
        .and_then(|()| root.present())
        .map_err(|err| FigureError::Draw {
            file: figure.file_name(),
            message: err.to_string(),
        })?;
    drop(root);

    Ok(path)
}

/// Renders every figure into `config.output_dir`, in order.
///
/// # Errors
///
/// Returns the first [`FigureError`] encountered. Figures already written
/// stay on disk.
pub fn render_all(
    model: &LqgBlackHole,
    config: &FigureConfig,
) -> Result<Vec<PathBuf>, FigureError> {
    ensure_dir(&config.output_dir)?;

    Figure::ALL
        .iter()
        .enumerate()
        .map(|(index, &figure)| {
            info!("Generating Figure {}: {}...", index + 1, figure.description());
            let path = render(figure, model, config)?;
            info!(path = %path.display(), "saved");
            Ok(path)
        })
        .collect()
}

fn ensure_dir(path: &Path) -> Result<(), FigureError> {
    std::fs::create_dir_all(path).map_err(|source| FigureError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}
