//! Graph renderer trait shared by the report charts.

use crate::bar_chart::{render_bar_chart, ChartSpec};
use crate::template::ChartTemplate;
use sales_report_common::{
    ChartArtifact, ChartKind, ReportData, Result, SalesReportError, SeriesPoint,
};

/// A chart of the report: which series it draws and how it is titled.
pub trait GraphRenderer {
    /// Which chart this renderer produces.
    fn kind(&self) -> ChartKind;

    /// Titles and dimensions.
    fn spec(&self) -> &ChartSpec;

    /// Series to draw, taken from the report data.
    fn prepare(&self, data: &ReportData) -> Vec<SeriesPoint> {
        data.series(self.kind()).to_vec()
    }

    /// Renders the chart into an artifact holding the PNG bytes.
    fn render(&self, data: &ReportData, template: &ChartTemplate) -> Result<ChartArtifact> {
        let spec = self.spec();
        let series = self.prepare(data);
        let png = render_bar_chart(&series, spec, template)?;
        let (width_px, height_px) = spec
            .pixel_size()
            .ok_or_else(|| SalesReportError::graph("Chart size overflows"))?;

        Ok(ChartArtifact {
            kind: self.kind(),
            title: spec.title.clone(),
            png,
            width_px,
            height_px,
        })
    }
}
