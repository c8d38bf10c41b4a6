//! Figure 4: Joule-Thomson inversion curve and coefficient.

use plotters::{coord::Shift, prelude::*};

use crate::models::gravity::black_hole::LqgParameters;
use crate::support::{constraint::NonZero, grid::linspace, series::Series};

use super::style::{self, Dash, DrawResult, Typography};

const PRESSURE_MAX: f64 = 0.06;
const R_MIN: f64 = 2.0;
const R_MAX: f64 = 8.0;

pub(super) struct JouleThomsonData {
    /// Inversion temperature over pressure.
    pub(super) inversion: Series,
    /// `(Pc, Tc)`
    pub(super) critical: (f64, f64),
    /// Coefficient over horizon radius, restricted to radii with a defined mass.
    pub(super) coefficient: Series,
}

pub(super) fn data(params: &LqgParameters) -> JouleThomsonData {
    let critical = params.critical_point();
    let count = NonZero::new(100).expect("sample count is non-zero");

    let pressures = linspace(0.0, PRESSURE_MAX, count);
    let inversion = Series::sample("Inversion Curve", &pressures, |p| {
        critical.inversion_temperature(p)
    });

    let coefficient = Series::from_points(
        "J-T Coefficient",
        linspace(R_MIN, R_MAX, count)
            .into_iter()
            .filter_map(|r| {
                let mass = params.mass(r, 0.0);
                (!mass.is_nan()).then(|| (r, params.joule_thomson(r, mass)))
            })
            .collect(),
    );

    JouleThomsonData {
        inversion,
        critical: (critical.pressure, critical.temperature),
        coefficient,
    }
}

pub(super) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &JouleThomsonData,
    typography: Typography,
) -> DrawResult<(), DB> {
    style::clear(root)?;

    let panels = root.split_evenly((1, 2));
    draw_inversion(&panels[0], data, typography)?;
    draw_coefficient(&panels[1], data, typography)
}

fn draw_inversion<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &JouleThomsonData,
    typography: Typography,
) -> DrawResult<(), DB> {
    let mut chart = ChartBuilder::on(area)
        .caption("Joule-Thomson Inversion Curve", typography.bold(16.0))
        .margin(typography.px(12.0))
        .x_label_area_size(typography.px(40.0))
        .y_label_area_size(typography.px(60.0))
        .build_cartesian_2d(
            style::padded(Some((0.0, PRESSURE_MAX)), 0.05),
            style::padded(data.inversion.y_range(), 0.05),
        )?;

    chart
        .configure_mesh()
        .x_desc("Pressure P")
        .y_desc("Temperature T")
        .axis_desc_style(typography.font(14.0))
        .label_style(typography.font(12.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    style::draw_line(
        &mut chart,
        &data.inversion,
        typography.stroke(RED, 3.0),
        Dash::Solid,
        typography,
    )?;
    style::draw_marker(&mut chart, data.critical, RED, "Critical Point", typography)?;
    style::draw_legend(&mut chart, 12.0, typography)
}

fn draw_coefficient<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &JouleThomsonData,
    typography: Typography,
) -> DrawResult<(), DB> {
    let x_range = data
        .coefficient
        .points
        .first()
        .zip(data.coefficient.points.last())
        .map(|(&(lo, _), &(hi, _))| (lo, hi));
    let y_range = data
        .coefficient
        .y_range()
        .map(|(lo, hi)| (lo.min(0.0), hi.max(0.0)));
    let x_range = style::padded(x_range, 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption("J-T Coefficient vs Horizon Radius", typography.bold(16.0))
        .margin(typography.px(12.0))
        .x_label_area_size(typography.px(40.0))
        .y_label_area_size(typography.px(60.0))
        .build_cartesian_2d(x_range.clone(), style::padded(y_range, 0.05))?;

    chart
        .configure_mesh()
        .x_desc("Horizon radius r₊")
        .y_desc("Joule-Thomson Coefficient")
        .axis_desc_style(typography.font(14.0))
        .label_style(typography.font(12.0))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    style::draw_line(
        &mut chart,
        &data.coefficient,
        typography.stroke(BLUE, 3.0),
        Dash::Solid,
        typography,
    )?;

    let zero = Series::from_points(
        "Zero line",
        vec![(x_range.start, 0.0), (x_range.end, 0.0)],
    );
    style::draw_line(
        &mut chart,
        &zero,
        typography.stroke(BLACK, 1.0),
        Dash::Dashed,
        typography,
    )?;

    style::draw_legend(&mut chart, 12.0, typography)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn inversion_curve_spans_pressure_grid() {
        let data = data(&LqgParameters::default());
        let (pc, tc) = data.critical;

        assert_eq!(data.inversion.points.len(), 100);
        assert_eq!(data.inversion.points[0], (0.0, tc));

        let (p_last, t_last) = data.inversion.points[99];
        assert_eq!(p_last, PRESSURE_MAX);
        assert_relative_eq!(t_last, tc * (1.0 + 2.0 * PRESSURE_MAX / pc));
    }

    #[test]
    fn coefficient_keeps_radii_with_defined_mass() {
        let params = LqgParameters::default();
        let data = data(&params);
        let threshold = 3.0 * params.alpha().sqrt();

        assert_eq!(data.coefficient.points.len(), 79);
        assert!(data.coefficient.points.iter().all(|&(r, _)| r >= threshold));
        assert_eq!(data.coefficient.finite_len(), 79);
    }
}
