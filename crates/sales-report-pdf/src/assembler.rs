//! Builds the report document from the ordered chart artifacts.

use crate::elements::{KeepTogetherImage, TitleCell, VerticalSpace};
use crate::fonts::load_font_family;
use chrono::NaiveDate;
use genpdf::elements::Image;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Mm, PaperSize, Scale, SimplePageDecorator};
use sales_report_common::{format_us_date, ChartArtifact, Result, SalesReportError};
use sales_report_config::ReportConfig;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const MM_PER_INCH: f64 = 25.4;
/// Resolution genpdf assumes for images without an explicit DPI.
const IMAGE_DPI: f64 = 300.0;

/// Page geometry and title styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// Page width in millimetres.
    pub page_width_mm: f64,
    /// Margin on every side of the page.
    pub margin_mm: f64,
    /// Height of the title cell.
    pub title_height_mm: f64,
    /// Title font size in points.
    pub title_font_size: u8,
    /// Title colour.
    pub title_color: (u8, u8, u8),
    /// Gap inserted before every chart.
    pub chart_gap_mm: f64,
}

impl ReportLayout {
    /// Width available to a chart: the page width minus both margins.
    pub fn content_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Scale factor that fits an image `width_px` wide to the content width.
    pub fn image_scale(&self, width_px: u32) -> Result<f64> {
        if width_px == 0 {
            return Err(SalesReportError::pdf("Chart image has zero width"));
        }
        let natural_mm = f64::from(width_px) / IMAGE_DPI * MM_PER_INCH;
        Ok(self.content_width_mm() / natural_mm)
    }

    /// Height of a width-fitted chart on the page.
    pub fn image_height_mm(&self, width_px: u32, height_px: u32) -> Result<f64> {
        let scale = self.image_scale(width_px)?;
        Ok(f64::from(height_px) / IMAGE_DPI * MM_PER_INCH * scale)
    }

    fn title_style(&self) -> Style {
        let (r, g, b) = self.title_color;
        Style::new()
            .bold()
            .with_font_size(self.title_font_size)
            .with_color(Color::Rgb(r, g, b))
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            margin_mm: 10.0,
            title_height_mm: 20.0,
            title_font_size: 24,
            title_color: (64, 64, 64),
            chart_gap_mm: 10.0,
        }
    }
}

/// `Sales Report as of MM/DD/YYYY`.
pub fn report_title(date: NaiveDate) -> String {
    format!("Sales Report as of {}", format_us_date(date))
}

/// Lays out the title and the charts on A4 pages.
pub struct ReportAssembler {
    fonts: FontFamily<FontData>,
    layout: ReportLayout,
}

impl ReportAssembler {
    /// Creates an assembler using the given font family.
    pub fn new(fonts: FontFamily<FontData>) -> Self {
        Self {
            fonts,
            layout: ReportLayout::default(),
        }
    }

    /// Creates an assembler, locating fonts per the report configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let fonts = load_font_family(config.fonts_dir.as_deref(), config.font_family.as_deref())?;
        Ok(Self::new(fonts))
    }

    /// Replaces the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Page geometry in use.
    pub const fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    fn chart_image(&self, artifact: &ChartArtifact) -> Result<KeepTogetherImage> {
        let scale = self.layout.image_scale(artifact.width_px)?;
        let height = self
            .layout
            .image_height_mm(artifact.width_px, artifact.height_px)?;
        let image = Image::from_reader(Cursor::new(artifact.png.as_slice())).map_err(|err| {
            SalesReportError::pdf(format!("Failed to embed chart '{}': {err}", artifact.title))
        })?;
        let image = image
            .with_alignment(Alignment::Center)
            .with_scale(Scale::new(scale, scale));
        Ok(KeepTogetherImage::new(image, Mm::from(height)))
    }

    /// Renders the report to PDF bytes. Charts appear in the order given.
    pub fn assemble(&self, artifacts: &[ChartArtifact], report_date: NaiveDate) -> Result<Vec<u8>> {
        let title = report_title(report_date);

        let mut doc = Document::new(self.fonts.clone());
        doc.set_title(title.as_str());
        doc.set_paper_size(PaperSize::A4);
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Mm::from(self.layout.margin_mm));
        doc.set_page_decorator(decorator);

        doc.push(
            TitleCell::new(title.as_str(), Mm::from(self.layout.title_height_mm))
                .with_style(self.layout.title_style()),
        );

        for artifact in artifacts {
            doc.push(VerticalSpace::new(Mm::from(self.layout.chart_gap_mm)));
            doc.push(self.chart_image(artifact)?);
            debug!(chart = %artifact.kind, "Added chart to report");
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes)?;
        Ok(bytes)
    }

    /// Renders the report and writes it to `path`.
    pub fn write(
        &self,
        artifacts: &[ChartArtifact],
        report_date: NaiveDate,
        path: &Path,
    ) -> Result<()> {
        let bytes = self.assemble(artifacts, report_date)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;

        info!(
            path = %path.display(),
            charts = artifacts.len(),
            bytes = bytes.len(),
            "Wrote report"
        );
        Ok(())
    }
}
