//! Figure 1: Gibbs free energy versus horizon radius.

use plotters::{coord::Shift, prelude::*};
use tracing::warn;

use crate::models::gravity::black_hole::LqgParameters;
use crate::support::{
    constraint::NonZero,
    grid::linspace,
    series::{Series, finite_range},
};

use super::style::{self, Dash, DrawResult, Typography};

const R_MIN: f64 = 2.0;
const R_MAX: f64 = 10.0;
const SAMPLES: usize = 1000;

pub(super) struct GibbsData {
    /// Asymptotically flat horizon (`Λ = 0`).
    pub(super) flat: Series,
    /// Half the AdS cosmological constant.
    pub(super) ads: Series,
}

pub(super) fn data(params: &LqgParameters) -> GibbsData {
    let radii = linspace(R_MIN, R_MAX, NonZero::new(SAMPLES).expect("sample count is non-zero"));
    let lambda = params.lambda_ads() / 2.0;

    let flat = Series::sample("Λ = 0", &radii, |r| params.gibbs(r, 0.0));
    let ads = Series::sample("Λ = Λ_AdS/2", &radii, |r| params.gibbs(r, lambda));

    for series in [&flat, &ads] {
        if series.finite_len() == 0 {
            warn!(label = %series.label, "Gibbs energy undefined over the whole radius range");
        }
    }

    GibbsData { flat, ads }
}

pub(super) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &GibbsData,
    typography: Typography,
) -> DrawResult<(), DB> {
    style::clear(root)?;

    let y_range = finite_range(
        data.flat
            .points
            .iter()
            .chain(&data.ads.points)
            .map(|&(_, g)| g),
    );

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Enhanced Gibbs Free Energy Analysis: LQG Black Hole Thermodynamics",
            typography.bold(18.0),
        )
        .margin(typography.px(12.0))
        .x_label_area_size(typography.px(40.0))
        .y_label_area_size(typography.px(56.0))
        .build_cartesian_2d(
            style::padded(Some((R_MIN, R_MAX)), 0.05),
            style::padded(y_range, 0.05),
        )?;

    chart
        .configure_mesh()
        .x_desc("Horizon radius r₊")
        .y_desc("Gibbs Free Energy G")
        .axis_desc_style(typography.font(16.0))
        .label_style(typography.font(12.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    style::draw_line(
        &mut chart,
        &data.flat,
        typography.stroke(BLUE, 3.0),
        Dash::Solid,
        typography,
    )?;
    style::draw_line(
        &mut chart,
        &data.ads,
        typography.stroke(RED, 3.0),
        Dash::Dashed,
        typography,
    )?;

    style::draw_legend(&mut chart, 14.0, typography)
}
