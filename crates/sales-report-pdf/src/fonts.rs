//! TrueType font discovery for the report document.
//!
//! genpdf embeds the fonts it renders with, so a full family (regular, bold,
//! italic, bold italic) has to be found on disk. The search order is the
//! configured directory, `SALES_REPORT_FONTS_DIR`, then well-known system
//! locations.

use genpdf::fonts::{FontData, FontFamily};
use sales_report_common::{Result, SalesReportError};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an extra font directory.
pub const FONTS_DIR_ENV: &str = "SALES_REPORT_FONTS_DIR";

/// File names of the four faces of a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFiles {
    /// Regular face.
    pub regular: String,
    /// Bold face.
    pub bold: String,
    /// Italic face.
    pub italic: String,
    /// Bold italic face.
    pub bold_italic: String,
}

impl FontFiles {
    /// The `<family>-Regular.ttf`, `<family>-Bold.ttf`, ... naming scheme.
    pub fn family(name: &str) -> Self {
        Self {
            regular: format!("{name}-Regular.ttf"),
            bold: format!("{name}-Bold.ttf"),
            italic: format!("{name}-Italic.ttf"),
            bold_italic: format!("{name}-BoldItalic.ttf"),
        }
    }

    fn explicit(regular: &str, bold: &str, italic: &str, bold_italic: &str) -> Self {
        Self {
            regular: regular.to_string(),
            bold: bold.to_string(),
            italic: italic.to_string(),
            bold_italic: bold_italic.to_string(),
        }
    }

    fn dejavu() -> Self {
        Self::explicit(
            "DejaVuSans.ttf",
            "DejaVuSans-Bold.ttf",
            "DejaVuSans-Oblique.ttf",
            "DejaVuSans-BoldOblique.ttf",
        )
    }

    fn windows_arial() -> Self {
        Self::explicit("arial.ttf", "arialbd.ttf", "ariali.ttf", "arialbi.ttf")
    }

    fn macos_arial() -> Self {
        Self::explicit(
            "Arial.ttf",
            "Arial Bold.ttf",
            "Arial Italic.ttf",
            "Arial Bold Italic.ttf",
        )
    }

    fn paths(&self, dir: &Path) -> [PathBuf; 4] {
        [
            dir.join(&self.regular),
            dir.join(&self.bold),
            dir.join(&self.italic),
            dir.join(&self.bold_italic),
        ]
    }
}

/// A directory expected to hold a complete family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    /// Directory searched.
    pub dir: PathBuf,
    /// Expected file names.
    pub files: FontFiles,
}

impl FontCandidate {
    /// Creates a candidate.
    pub fn new(dir: impl Into<PathBuf>, files: FontFiles) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    fn missing(&self) -> Vec<PathBuf> {
        self.files
            .paths(&self.dir)
            .into_iter()
            .filter(|path| !path.is_file())
            .collect()
    }

    fn load(&self) -> Result<FontFamily<FontData>> {
        let [regular, bold, italic, bold_italic] = self.files.paths(&self.dir);
        Ok(FontFamily {
            regular: load_face(&regular)?,
            bold: load_face(&bold)?,
            italic: load_face(&italic)?,
            bold_italic: load_face(&bold_italic)?,
        })
    }
}

fn load_face(path: &Path) -> Result<FontData> {
    FontData::load(path, None).map_err(|err| {
        SalesReportError::font(format!("Failed to load font {}: {err}", path.display()))
    })
}

/// Every family tried inside a user supplied directory when no family name is configured.
fn known_families() -> Vec<FontFiles> {
    vec![
        FontFiles::family("LiberationSans"),
        FontFiles::dejavu(),
        FontFiles::windows_arial(),
        FontFiles::macos_arial(),
        FontFiles::family("Roboto"),
    ]
}

fn system_candidates() -> Vec<FontCandidate> {
    let mut candidates = vec![
        FontCandidate::new("/usr/share/fonts/truetype/liberation", FontFiles::family("LiberationSans")),
        FontCandidate::new("/usr/share/fonts/truetype/liberation2", FontFiles::family("LiberationSans")),
        FontCandidate::new("/usr/share/fonts/liberation-sans", FontFiles::family("LiberationSans")),
        FontCandidate::new("/usr/share/fonts/liberation", FontFiles::family("LiberationSans")),
        FontCandidate::new("/usr/share/fonts/truetype/dejavu", FontFiles::dejavu()),
        FontCandidate::new("/usr/share/fonts/dejavu-sans-fonts", FontFiles::dejavu()),
        FontCandidate::new("/usr/share/fonts/TTF", FontFiles::dejavu()),
        FontCandidate::new("/System/Library/Fonts/Supplemental", FontFiles::macos_arial()),
        FontCandidate::new("/Library/Fonts", FontFiles::macos_arial()),
    ];

    for var in ["WINDIR", "SystemRoot"] {
        if let Some(root) = env::var_os(var).filter(|v| !v.is_empty()) {
            candidates.push(FontCandidate::new(
                PathBuf::from(root).join("Fonts"),
                FontFiles::windows_arial(),
            ));
        }
    }

    candidates
}

/// Search order for the given configuration.
pub fn font_candidates(fonts_dir: Option<&Path>, family: Option<&str>) -> Vec<FontCandidate> {
    let mut candidates = Vec::new();

    let mut user_dirs: Vec<PathBuf> = fonts_dir.map(Path::to_path_buf).into_iter().collect();
    if let Some(dir) = env::var_os(FONTS_DIR_ENV).filter(|v| !v.is_empty()) {
        user_dirs.push(PathBuf::from(dir));
    }

    for dir in user_dirs {
        match family {
            Some(name) => candidates.push(FontCandidate::new(&dir, FontFiles::family(name))),
            None => candidates.extend(
                known_families()
                    .into_iter()
                    .map(|files| FontCandidate::new(&dir, files)),
            ),
        }
    }

    candidates.extend(system_candidates());
    candidates
}

/// Loads the first complete family among `candidates`.
pub fn load_first_family(candidates: &[FontCandidate]) -> Result<FontFamily<FontData>> {
    let mut attempts = Vec::new();

    for candidate in candidates {
        let missing = candidate.missing();
        if missing.is_empty() {
            let family = candidate.load()?;
            info!(dir = %candidate.dir.display(), regular = %candidate.files.regular, "Loaded report fonts");
            return Ok(family);
        }

        debug!(dir = %candidate.dir.display(), missing = missing.len(), "Font candidate incomplete");
        attempts.push(format!(
            "{} ({})",
            candidate.dir.display(),
            candidate.files.regular
        ));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };
    Err(SalesReportError::font(format!(
        "No complete TrueType font family found. Checked: {summary}. Set report.fonts_dir or {FONTS_DIR_ENV}."
    )))
}

/// Locates and loads the report font family.
pub fn load_font_family(
    fonts_dir: Option<&Path>,
    family: Option<&str>,
) -> Result<FontFamily<FontData>> {
    load_first_family(&font_candidates(fonts_dir, family))
}
