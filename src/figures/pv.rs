//! Figure 2: pressure-volume isotherms around the critical point.

use plotters::{coord::Shift, prelude::*};
use tracing::debug;

use crate::models::gravity::black_hole::{IsothermScan, LqgParameters};
use crate::support::{constraint::NonZero, grid::linspace, series::Series};

use super::style::{self, Dash, DrawResult, Typography};

/// Isotherm temperatures as fractions of `Tc`, with their line colors.
const ISOTHERMS: [(f64, RGBColor); 5] = [
    (0.6, RED),
    (0.8, style::ORANGE),
    (1.0, style::DARK_GREEN),
    (1.2, BLUE),
    (1.4, style::PURPLE),
];

pub(super) struct PvData {
    /// Non-empty isotherms with their colors.
    pub(super) isotherms: Vec<(Series, RGBColor)>,
    /// `(Vc, Pc)`
    pub(super) critical: (f64, f64),
}

pub(super) fn data(params: &LqgParameters) -> PvData {
    let radii = linspace(2.0, 10.0, NonZero::new(1000).expect("sample count is non-zero"));
    let critical = params.critical_point();
    let scan = IsothermScan::default();

    let isotherms = ISOTHERMS
        .iter()
        .filter_map(|&(ratio, color)| {
            let points = scan.scan(params, &radii, ratio * critical.temperature);
            debug!(ratio, matched = points.len(), "isotherm scan");
            (!points.is_empty())
                .then(|| (Series::from_points(format!("T = {ratio:.1}Tc"), points), color))
        })
        .collect();

    PvData {
        isotherms,
        critical: (critical.volume, critical.pressure),
    }
}

pub(super) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &PvData,
    typography: Typography,
) -> DrawResult<(), DB> {
    style::clear(root)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Enhanced P-V Diagrams with Quantum Phase Transitions: Maxwell Construction",
            typography.bold(18.0),
        )
        .margin(typography.px(12.0))
        .x_label_area_size(typography.px(40.0))
        .y_label_area_size(typography.px(64.0))
        .build_cartesian_2d(0.0..25.0, 0.0..0.04)?;

    chart
        .configure_mesh()
        .x_desc("Volume V")
        .y_desc("Pressure P")
        .axis_desc_style(typography.font(16.0))
        .label_style(typography.font(12.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    // Points outside the fixed window become gaps.
    let clipped = |series: &Series| {
        Series::from_points(
            series.label.clone(),
            series
                .points
                .iter()
                .map(|&(v, p)| {
                    if !(0.0..=0.04).contains(&p) || v > 25.0 {
                        (v, f64::NAN)
                    } else {
                        (v, p)
                    }
                })
                .collect(),
        )
    };

    for (series, color) in &data.isotherms {
        style::draw_line(
            &mut chart,
            &clipped(series),
            typography.stroke(*color, 2.5),
            Dash::Solid,
            typography,
        )?;
    }

    style::draw_marker(&mut chart, data.critical, RED, "Critical Point", typography)?;
    style::draw_legend(&mut chart, 12.0, typography)
}
