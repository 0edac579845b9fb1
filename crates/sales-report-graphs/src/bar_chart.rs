//! Vertical bar chart drawing shared by every report chart.

use crate::template::ChartTemplate;
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sales_report_common::{
    format_currency_tick, format_value, truncate_label, Result, SalesReportError, SeriesPoint,
};
use sales_report_config::ChartsConfig;
use std::io::Cursor;
use tracing::debug;

/// Headroom above the tallest bar, leaving space for its value label.
const Y_HEADROOM: f64 = 1.15;

/// Titles and dimensions of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
    /// Prefix of every y tick label.
    pub y_tick_prefix: String,
    /// Logical width.
    pub width: u32,
    /// Logical height.
    pub height: u32,
    /// Supersampling factor.
    pub scale: u32,
}

impl ChartSpec {
    /// A sales chart: y axis "Total Sales ($)" with `$` ticks, sized from the config.
    pub fn sales(title: impl Into<String>, x_title: impl Into<String>, charts: &ChartsConfig) -> Self {
        Self {
            title: title.into(),
            x_title: x_title.into(),
            y_title: "Total Sales ($)".to_string(),
            y_tick_prefix: "$".to_string(),
            width: charts.width,
            height: charts.height,
            scale: charts.scale.max(1),
        }
    }

    /// Size of the rendered image in pixels, `None` when it does not fit in `u32`.
    pub const fn pixel_size(&self) -> Option<(u32, u32)> {
        match (
            self.width.checked_mul(self.scale),
            self.height.checked_mul(self.scale),
        ) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }

    const fn px(&self, logical: u32) -> u32 {
        logical.saturating_mul(self.scale)
    }
}

/// Y axis range covering every value, zero included.
fn value_range(series: &[SeriesPoint]) -> std::ops::Range<f64> {
    let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let min = series.iter().map(|p| p.value).fold(0.0_f64, f64::min);

    if max <= 0.0 && min >= 0.0 {
        return 0.0..1.0;
    }
    let top = if max > 0.0 { max * Y_HEADROOM } else { 0.0 };
    let bottom = if min < 0.0 { min * Y_HEADROOM } else { 0.0 };
    bottom..top
}

/// Renders a bar chart and returns it PNG encoded.
///
/// Bars appear in series order, each labelled with its value. An empty series
/// renders the axes without bars.
pub fn render_bar_chart(
    series: &[SeriesPoint],
    spec: &ChartSpec,
    template: &ChartTemplate,
) -> Result<Vec<u8>> {
    if let Some(point) = series.iter().find(|p| !p.value.is_finite()) {
        return Err(SalesReportError::graph(format!(
            "Value for '{}' in '{}' is not a finite number",
            point.label, spec.title
        )));
    }
    if spec.width == 0 || spec.height == 0 {
        return Err(SalesReportError::graph("Chart dimensions must be positive"));
    }

    let (width, height) = spec.pixel_size().ok_or_else(|| {
        SalesReportError::graph(format!(
            "Chart '{}' at {}x{} scaled by {} is too large",
            spec.title, spec.width, spec.height, spec.scale
        ))
    })?;
    let buffer_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| SalesReportError::graph("Chart pixel buffer is too large"))?;
    let mut buffer = vec![0u8; buffer_len];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_bars(&root, series, spec, template)?;
        root.present()?;
    }

    let png = encode_png(buffer, width, height)?;
    debug!(
        title = %spec.title,
        bars = series.len(),
        bytes = png.len(),
        "Rendered bar chart"
    );
    Ok(png)
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    series: &[SeriesPoint],
    spec: &ChartSpec,
    template: &ChartTemplate,
) -> Result<()>
where
    DB::ErrorType: std::error::Error + Send + Sync + 'static,
{
    root.fill(&template.background)?;

    let family = template.font_family.as_str();
    let font = |size: u32| (family, f64::from(spec.px(size))).into_font().color(&template.text);

    let slots = u32::try_from(series.len())
        .map_err(|_| SalesReportError::graph("Too many bars for one chart"))?
        .max(1);
    let labels: Vec<String> = series
        .iter()
        .map(|p| truncate_label(&p.label, template.max_label_chars))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, font(template.title_size))
        .margin(spec.px(20))
        .x_label_area_size(spec.px(70))
        .y_label_area_size(spec.px(100))
        .build_cartesian_2d((0u32..slots).into_segmented(), value_range(series))?;

    let prefix = spec.y_tick_prefix.as_str();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT.stroke_width(0))
        .bold_line_style(template.grid.stroke_width(spec.px(1)))
        .axis_style(template.text.stroke_width(spec.px(1)))
        .x_labels(slots as usize + 1)
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|value| format_currency_tick(prefix, *value))
        .x_label_style(font(template.tick_size))
        .y_label_style(font(template.tick_size))
        .x_desc(spec.x_title.as_str())
        .y_desc(spec.y_title.as_str())
        .axis_desc_style(font(template.axis_title_size))
        .draw()?;

    // Rectangle margins are in pixels, so the gap is derived from the slot width.
    let plot_width = chart.plotting_area().dim_in_pixel().0;
    let slot_px = f64::from(plot_width) / f64::from(slots);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let side_margin = (slot_px * template.bar_gap / 2.0).round() as u32;

    chart.draw_series(series.iter().zip(0u32..).map(|(point, i)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), point.value),
            ],
            template.bar.filled(),
        );
        bar.set_margin(0, 0, side_margin, side_margin);
        bar
    }))?;

    let value_style = font(template.value_size).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(series.iter().zip(0u32..).map(|(point, i)| {
        Text::new(
            format_value(point.value),
            (SegmentValue::CenterOf(i), point.value),
            value_style.clone(),
        )
    }))?;

    Ok(())
}

/// Encodes an RGB pixel buffer as PNG.
pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| SalesReportError::graph("Pixel buffer does not match chart size"))?;

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)?;
    Ok(png)
}
