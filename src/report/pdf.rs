//! PDF rendering of a [`CanonicalReport`].
//!
//! Intentionally a reduced view of the markdown report: title, task id,
//! child summary and per-dimension score listing. The rendered strings come
//! from [`summary_lines`], which reads only the canonical structure, so every
//! value shown here matches the markdown output for the same report.
//!
//! Non-ASCII text requires a real TTF; the font is loaded once at startup and
//! a missing or corrupt font file is a fatal initialization error for this
//! render path, never a per-request fallback.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element, SimplePageDecorator};
use thiserror::Error;
use uuid::Uuid;

use crate::report::assembler::CanonicalReport;

pub const REPORT_TITLE: &str = "Психодиагностический отчёт";

const TITLE_FONT_SIZE: u8 = 18;
const BODY_FONT_SIZE: u8 = 12;
const PAGE_MARGIN_MM: i32 = 15;

fn default_font_path() -> PathBuf {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts")).join("DejaVuSans.ttf")
}

/// Whether the font resource for the PDF render path is present.
pub fn font_available(path: Option<&Path>) -> bool {
    path.map(Path::to_path_buf)
        .unwrap_or_else(default_font_path)
        .is_file()
}

#[derive(Debug, Error)]
pub enum PdfRenderError {
    #[error("report font missing at {path}: {source}")]
    FontResourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report font could not be parsed: {0}")]
    FontResourceInvalid(genpdf::error::Error),
    #[error("PDF rendering failed: {0}")]
    Render(genpdf::error::Error),
}

/// Stateless renderer around one loaded font resource.
#[derive(Debug)]
pub struct PdfRenderer {
    font_bytes: Vec<u8>,
}

impl PdfRenderer {
    /// Loads and validates the font file. Call at service startup; a failure
    /// here must abort the process.
    pub fn from_font_file(path: &Path) -> Result<Self, PdfRenderError> {
        let font_bytes = fs::read(path).map_err(|source| PdfRenderError::FontResourceMissing {
            path: path.to_path_buf(),
            source,
        })?;
        FontData::new(font_bytes.clone(), None).map_err(PdfRenderError::FontResourceInvalid)?;
        Ok(Self::from_font_bytes(font_bytes))
    }

    /// Wraps already-obtained font bytes without validating them. `render`
    /// surfaces bad data as [`PdfRenderError::FontResourceInvalid`]; startup
    /// wiring should prefer [`PdfRenderer::from_font_file`], which validates
    /// eagerly.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> Self {
        Self { font_bytes }
    }

    pub fn from_default_font() -> Result<Self, PdfRenderError> {
        Self::from_font_file(&default_font_path())
    }

    /// One TTF serves all four style slots; the report does not rely on
    /// synthetic bold/italic variants.
    fn font_family(&self) -> Result<FontFamily<FontData>, PdfRenderError> {
        let load = || {
            FontData::new(self.font_bytes.clone(), None)
                .map_err(PdfRenderError::FontResourceInvalid)
        };
        Ok(FontFamily {
            regular: load()?,
            bold: load()?,
            italic: load()?,
            bold_italic: load()?,
        })
    }

    pub fn render(
        &self,
        task_id: Uuid,
        report: &CanonicalReport,
    ) -> Result<Vec<u8>, PdfRenderError> {
        let mut doc = genpdf::Document::new(self.font_family()?);
        doc.set_title(REPORT_TITLE);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGIN_MM);
        doc.set_page_decorator(decorator);

        doc.push(
            Paragraph::new(REPORT_TITLE)
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(TITLE_FONT_SIZE)),
        );
        doc.push(Break::new(1));

        let body = Style::new().with_font_size(BODY_FONT_SIZE);
        for line in summary_lines(task_id, report) {
            doc.push(Paragraph::new(line).styled(body));
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes).map_err(PdfRenderError::Render)?;
        Ok(bytes)
    }
}

/// The text lines of the PDF body, in order. Shared with tests that check
/// cross-renderer consistency against the markdown output.
pub fn summary_lines(task_id: Uuid, report: &CanonicalReport) -> Vec<String> {
    let child = &report.child;
    let mut lines = vec![
        format!("Задача: {task_id}"),
        "Краткая сводка:".to_string(),
        format!("Имя ребёнка: {}", child.name),
        format!("Дата рождения: {}", child.dob),
        format!("Пол: {}", child.gender),
        "Опросник: суммарные баллы".to_string(),
    ];
    for score in &report.scores {
        lines.push(format!("• {}: {} / {}", score.label, score.points, score.max));
    }
    lines
}
