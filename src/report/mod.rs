//! Report synthesis: scoring, canonical assembly and the two renderers.

pub mod assembler;
pub mod content;
pub mod handlers;
pub mod markdown;
pub mod pdf;
pub mod scoring;


pub use assembler::{assemble, CanonicalReport, DimensionScore};
pub use content::ReportContent;
pub use pdf::{PdfRenderer, PdfRenderError};
