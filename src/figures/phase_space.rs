//! Figure 3: the volume-pressure-temperature surface.

use plotters::{coord::Shift, prelude::*};
use twine_core::Model;

use crate::models::gravity::black_hole::{HorizonState, LqgBlackHole};
use crate::support::{
    constraint::NonZero,
    grid::{Mesh, linspace},
    series::finite_range,
};

use super::style::{self, DrawResult, Typography};

const RADIUS_SAMPLES: usize = 50;
const LAMBDA_SAMPLES: usize = 20;
const COLORBAR_STEPS: usize = 64;

type Node = (f64, f64, f64);

pub(super) struct PhaseSurface {
    /// `(V, P, T)` at each mesh node; rows run along `Λ`, columns along `r₊`.
    pub(super) nodes: Vec<Vec<Node>>,
    /// `(Vc, Pc, Tc)`
    pub(super) critical: Node,
}

impl PhaseSurface {
    /// Quadrilateral cells with all four corners finite.
    pub(super) fn cells(&self) -> Vec<[Node; 4]> {
        self.nodes
            .windows(2)
            .flat_map(|rows| {
                let (lower, upper) = (&rows[0], &rows[1]);
                (0..lower.len().saturating_sub(1))
                    .map(move |j| [lower[j], lower[j + 1], upper[j + 1], upper[j]])
            })
            .filter(|cell| {
                cell.iter()
                    .all(|&(v, p, t)| v.is_finite() && p.is_finite() && t.is_finite())
            })
            .collect()
    }

    fn range(&self, component: impl Fn(&Node) -> f64) -> Option<(f64, f64)> {
        finite_range(
            self.nodes
                .iter()
                .flatten()
                .chain(std::iter::once(&self.critical))
                .map(component),
        )
    }
}

pub(super) fn data(model: &LqgBlackHole) -> PhaseSurface {
    let params = model.parameters();
    let mesh = Mesh::new(
        linspace(1.5, 12.0, NonZero::new(RADIUS_SAMPLES).expect("sample count is non-zero")),
        linspace(
            0.0,
            params.lambda_ads() / 2.0,
            NonZero::new(LAMBDA_SAMPLES).expect("sample count is non-zero"),
        ),
    );

    let nodes = mesh.map(|r_plus, lambda| {
        let Ok(thermo) = model.call(&HorizonState { r_plus, lambda });
        (thermo.volume, thermo.pressure, thermo.temperature)
    });

    let critical = params.critical_point();
    PhaseSurface {
        nodes,
        critical: (critical.volume, critical.pressure, critical.temperature),
    }
}

pub(super) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &PhaseSurface,
    typography: Typography,
) -> DrawResult<(), DB> {
    style::clear(root)?;

    let (width, _) = root.dim_in_pixel();
    let (surface_area, colorbar_area) = root.split_horizontally(width * 85 / 100);

    let t_range = data.range(|&(_, _, t)| t);
    let (t_lo, t_hi) = t_range.unwrap_or((0.0, 1.0));
    let color_of = |t: f64| {
        let span = t_hi - t_lo;
        style::viridis(if span > 0.0 { (t - t_lo) / span } else { 0.5 })
    };

    let mut chart = ChartBuilder::on(&surface_area)
        .caption(
            "3D Quantum Phase Space: LQG Black Hole Thermodynamics (V, P, T)",
            typography.bold(18.0),
        )
        .margin(typography.px(16.0))
        .build_cartesian_3d(
            style::padded(data.range(|&(v, _, _)| v), 0.02),
            style::padded(data.range(|&(_, p, _)| p), 0.02),
            style::padded(t_range, 0.02),
        )?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.7;
        pb.pitch = 0.3;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.12))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(data.cells().into_iter().map(|cell| {
        let mean_t = cell.iter().map(|&(_, _, t)| t).sum::<f64>() / 4.0;
        Polygon::new(cell.to_vec(), color_of(mean_t).mix(0.8).filled())
    }))?;

    chart.draw_series(std::iter::once(Circle::new(
        data.critical,
        typography.px(6.0),
        RED.filled(),
    )))?;

    draw_colorbar(&colorbar_area, (t_lo, t_hi), color_of, typography)
}

/// Vertical temperature scale next to the surface.
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (t_lo, t_hi): (f64, f64),
    color_of: impl Fn(f64) -> RGBColor,
    typography: Typography,
) -> DrawResult<(), DB> {
    let (_, height) = area.dim_in_pixel();
    let margin = height / 4;

    let mut bar = ChartBuilder::on(area)
        .margin_top(margin)
        .margin_bottom(margin)
        .margin_right(typography.px(24.0))
        .y_label_area_size(typography.px(56.0))
        .build_cartesian_2d(0.0..1.0, t_lo..t_hi)?;

    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_desc("Temperature T")
        .axis_desc_style(typography.font(12.0))
        .label_style(typography.font(10.0))
        .draw()?;

    #[allow(clippy::cast_precision_loss)]
    let step = (t_hi - t_lo) / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        #[allow(clippy::cast_precision_loss)]
        let lo = t_lo + i as f64 * step;
        Rectangle::new([(0.0, lo), (1.0, lo + step)], color_of(lo + step / 2.0).filled())
    }))?;

    Ok(())
}
