//! Shared visual template for every chart.

use plotters::prelude::*;
use plotters::style::FontStyle;

/// Colours, font family and logical font sizes applied to every chart.
///
/// Sizes are in logical pixels and multiplied by the chart scale when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTemplate {
    /// Canvas background.
    pub background: RGBColor,
    /// Horizontal gridlines.
    pub grid: RGBColor,
    /// Axis lines, tick labels and titles.
    pub text: RGBColor,
    /// Fill of every bar.
    pub bar: RGBColor,
    /// Font family name passed to the font resolver.
    pub font_family: String,
    /// Chart title size.
    pub title_size: u32,
    /// Axis title size.
    pub axis_title_size: u32,
    /// Tick label size.
    pub tick_size: u32,
    /// Size of the value printed above each bar.
    pub value_size: u32,
    /// Fraction of each category slot left empty between bars.
    pub bar_gap: f64,
    /// Labels longer than this are shortened with an ellipsis.
    pub max_label_chars: usize,
}

impl ChartTemplate {
    /// White canvas, light gridlines, large type and a single blue bar colour.
    pub fn presentation() -> Self {
        Self {
            background: WHITE,
            grid: RGBColor(238, 238, 238),
            text: RGBColor(68, 68, 68),
            bar: RGBColor(99, 110, 250),
            font_family: "sans-serif".to_string(),
            title_size: 24,
            axis_title_size: 20,
            tick_size: 16,
            value_size: 16,
            bar_gap: 0.2,
            max_label_chars: 24,
        }
    }

    /// Whether the template's font family resolves to an installed font.
    pub fn font_available(&self) -> bool {
        FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            f64::from(self.tick_size),
            FontStyle::Normal,
        )
        .box_size("$0")
        .is_ok()
    }
}

impl Default for ChartTemplate {
    fn default() -> Self {
        Self::presentation()
    }
}
