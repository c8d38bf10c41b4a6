//! Figure 5: mean-field critical exponents.

use plotters::{coord::Shift, prelude::*};

use crate::models::gravity::black_hole::scaling::{self, Branch};
use crate::support::{
    constraint::NonZero,
    grid::linspace,
    series::{Series, finite_range},
};

use super::style::{self, Dash, DrawResult, Typography};

const SAMPLES: usize = 100;
const REDUCED_T_DESC: &str = "(T - Tc)/Tc";

pub(super) struct ExponentData {
    pub(super) heat_above: Series,
    pub(super) heat_below: Series,
    pub(super) order_parameter: Series,
    pub(super) compressibility: Series,
    pub(super) critical_isotherm: Series,
}

pub(super) fn data() -> ExponentData {
    let count = NonZero::new(SAMPLES).expect("sample count is non-zero");
    let reduced = linspace(-0.5, 0.5, count);
    let field = linspace(-1.0, 1.0, count);

    ExponentData {
        heat_above: Series::sample("T > Tc", &reduced, |t| {
            scaling::heat_capacity(t, Branch::Above)
        }),
        heat_below: Series::sample("T < Tc", &reduced, |t| {
            scaling::heat_capacity(t, Branch::Below)
        }),
        order_parameter: Series::sample("Order Parameter", &reduced, scaling::order_parameter),
        compressibility: Series::sample("Compressibility", &reduced, scaling::compressibility),
        critical_isotherm: Series::sample(
            "Critical Isotherm",
            &field,
            scaling::critical_isotherm,
        ),
    }
}

pub(super) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ExponentData,
    typography: Typography,
) -> DrawResult<(), DB> {
    style::clear(root)?;

    let body = root.titled(
        "Enhanced Critical Exponents Analysis: LQG Black Hole Quantum Phase Transitions",
        typography.bold(18.0),
    )?;
    let panels = body.split_evenly((2, 2));

    draw_linear_panel(
        &panels[0],
        "Critical Exponent α = 0",
        ("Heat Capacity (log scale)", REDUCED_T_DESC),
        &[(&data.heat_above, RED, 2.0), (&data.heat_below, BLUE, 2.0)],
        typography,
    )?;
    draw_linear_panel(
        &panels[1],
        "Critical Exponent β = 1/2",
        ("Order Parameter", REDUCED_T_DESC),
        &[(&data.order_parameter, style::DARK_GREEN, 3.0)],
        typography,
    )?;
    draw_compressibility(&panels[2], &data.compressibility, typography)?;
    draw_linear_panel(
        &panels[3],
        "Critical Exponent δ = 3",
        ("Order Parameter", "Field h"),
        &[(&data.critical_isotherm, style::ORANGE, 3.0)],
        typography,
    )
}

/// Draws one panel with linear axes.
///
/// `descs` is `(y description, x description)`.
fn draw_linear_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    (y_desc, x_desc): (&str, &str),
    lines: &[(&Series, RGBColor, f64)],
    typography: Typography,
) -> DrawResult<(), DB> {
    let points = || lines.iter().flat_map(|(series, _, _)| series.points.iter());
    let x_range = finite_range(points().map(|&(x, _)| x));
    let y_range = finite_range(points().map(|&(_, y)| y));

    let mut chart = ChartBuilder::on(area)
        .caption(title, typography.bold(14.0))
        .margin(typography.px(10.0))
        .x_label_area_size(typography.px(36.0))
        .y_label_area_size(typography.px(52.0))
        .build_cartesian_2d(style::padded(x_range, 0.05), style::padded(y_range, 0.05))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(typography.font(12.0))
        .label_style(typography.font(10.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    for &(series, color, width) in lines {
        style::draw_line(
            &mut chart,
            series,
            typography.stroke(color, width),
            Dash::Solid,
            typography,
        )?;
    }

    style::draw_legend(&mut chart, 10.0, typography)
}

fn draw_compressibility<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &Series,
    typography: Typography,
) -> DrawResult<(), DB> {
    let x_range = finite_range(series.points.iter().map(|&(t, _)| t));

    let mut chart = ChartBuilder::on(area)
        .caption("Critical Exponent γ = 1", typography.bold(14.0))
        .margin(typography.px(10.0))
        .x_label_area_size(typography.px(36.0))
        .y_label_area_size(typography.px(52.0))
        .build_cartesian_2d(
            style::padded(x_range, 0.05),
            style::padded_log(series.y_range(), 1.5).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(REDUCED_T_DESC)
        .y_desc("Compressibility (log scale)")
        .axis_desc_style(typography.font(12.0))
        .label_style(typography.font(10.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    style::draw_line(
        &mut chart,
        series,
        typography.stroke(MAGENTA, 2.0),
        Dash::Solid,
        typography,
    )?;

    style::draw_legend(&mut chart, 10.0, typography)
}
