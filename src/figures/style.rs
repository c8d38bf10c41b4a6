//! Shared drawing conventions for every figure.

use plotters::{
    coord::{CoordTranslate, Shift},
    prelude::*,
};

use crate::support::series::Series;

/// Result of a drawing call on backend `DB`.
pub(super) type DrawResult<T, DB> = Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub(super) const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub(super) const PURPLE: RGBColor = RGBColor(128, 0, 128);
pub(super) const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Sizes in points, converted to pixels for the configured resolution.
#[derive(Debug, Clone, Copy)]
pub(super) struct Typography {
    dpi: u32,
}

impl Typography {
    pub(super) fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Converts a length in points (1/72 inch) to pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn px(self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / 72.0).round() as u32
    }

    pub(super) fn font(self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::Serif, f64::from(self.px(points)), FontStyle::Normal)
    }

    pub(super) fn bold(self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::Serif, f64::from(self.px(points)), FontStyle::Bold)
    }

    pub(super) fn stroke(self, color: RGBColor, points: f64) -> ShapeStyle {
        color.stroke_width(self.px(points).max(1))
    }
}

/// Length of a legend line sample, and the diameter of a legend marker.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn legend_swatch_len(typography: Typography) -> i32 {
    typography.px(12.0) as i32
}

/// Horizontal space reserved for a legend sample before its label.
pub(super) fn legend_area_len(typography: Typography) -> u32 {
    typography.px(18.0)
}

/// How a line series is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Dash {
    Solid,
    Dashed,
}

/// Draws `series` as one line per finite segment, labelled once.
///
/// A series with no finite samples still gets a legend entry.
pub(super) fn draw_line<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    series: &Series,
    style: ShapeStyle,
    dash: Dash,
    typography: Typography,
) -> DrawResult<(), DB>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let segments = series.segments();
    let legend_len = legend_swatch_len(typography);

    if segments.is_empty() {
        chart
            .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
            .label(series.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        return Ok(());
    }

    let dash_size = typography.px(6.0);
    let dash_spacing = typography.px(4.0);

    for (index, segment) in segments.into_iter().enumerate() {
        let anno = match dash {
            Dash::Solid => chart.draw_series(LineSeries::new(segment, style))?,
            Dash::Dashed => chart.draw_series(DashedLineSeries::new(
                segment,
                dash_size,
                dash_spacing,
                style,
            ))?,
        };
        if index == 0 {
            anno.label(series.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        }
    }

    Ok(())
}

/// Draws a filled marker with a black rim at `point`.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn draw_marker<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    point: (f64, f64),
    fill: RGBColor,
    label: &str,
    typography: Typography,
) -> DrawResult<(), DB>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let radius = typography.px(6.0);
    let rim = typography.stroke(BLACK, 1.5);

    chart.draw_series(std::iter::once(Circle::new(point, radius, fill.filled())))?;
    chart
        .draw_series(std::iter::once(Circle::new(point, radius, rim)))?
        .label(label)
        .legend(move |(x, y)| Circle::new((x + radius as i32, y), radius, fill.filled()));

    Ok(())
}

/// Draws the legend box in the upper right corner.
pub(super) fn draw_legend<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    points: f64,
    typography: Typography,
) -> DrawResult<(), DB>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .legend_area_size(legend_area_len(typography))
        .label_font(typography.font(points))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()
}

/// Fills the drawing area with a white background.
pub(super) fn clear<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
    area.fill(&WHITE)
}

/// Pads `[lo, hi]` by `fraction` of its width on each side.
///
/// A degenerate range is widened to unit width.
pub(super) fn padded(range: Option<(f64, f64)>, fraction: f64) -> std::ops::Range<f64> {
    match range {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * fraction;
            (lo - pad)..(hi + pad)
        }
        Some((v, _)) => (v - 0.5)..(v + 0.5),
        None => 0.0..1.0,
    }
}

/// Pads a strictly positive range by `factor` on a logarithmic scale.
pub(super) fn padded_log(range: Option<(f64, f64)>, factor: f64) -> std::ops::Range<f64> {
    match range {
        Some((lo, hi)) if lo > 0.0 && hi > lo => (lo / factor)..(hi * factor),
        Some((v, _)) if v > 0.0 => (v / 10.0)..(v * 10.0),
        _ => 1.0..10.0,
    }
}

/// Approximation of the viridis colormap at `t ∈ [0, 1]`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(super) fn viridis(t: f64) -> RGBColor {
    const STOPS: [(f64, f64, f64); 5] = [
        (68.0, 1.0, 84.0),
        (59.0, 82.0, 139.0),
        (33.0, 145.0, 140.0),
        (94.0, 201.0, 98.0),
        (253.0, 231.0, 37.0),
    ];

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (STOPS.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(STOPS.len() - 2);
    let frac = scaled - index as f64;

    let (r0, g0, b0) = STOPS[index];
    let (r1, g1, b1) = STOPS[index + 1];
    let mix = |a: f64, b: f64| (a + (b - a) * frac).round() as u8;

    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}
