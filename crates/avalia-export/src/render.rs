use serde::{Deserialize, Serialize};

use avalia_core::models::record::EvaluationRecord;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::layout::layout;
use crate::styles::{DocumentStyles, Letterhead};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Everything about the output that does not come from the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub styles: DocumentStyles,
    pub letterhead: Letterhead,
}

/// A generated document, ready to be offered for download.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render a record into a DOCX document.
///
/// Any well-formed record renders; the only failure is the DOCX packing
/// step itself, in which case nothing is returned.
pub fn render(
    record: &EvaluationRecord,
    options: &RenderOptions,
) -> Result<RenderedDocument, ExportError> {
    let blocks = layout(record, &options.letterhead);
    let bytes = generate_docx(&blocks, &options.styles)?;
    let filename = document_filename(&record.identification.student_name);

    tracing::info!(
        filename = %filename,
        blocks = blocks.len(),
        size = bytes.len(),
        "evaluation rendered"
    );

    Ok(RenderedDocument {
        filename,
        content_type: DOCX_CONTENT_TYPE,
        bytes,
    })
}

/// Download name for a student's document: whitespace becomes `_`,
/// e.g. `Avaliacao_Ana_Silva.docx`.
pub fn document_filename(student_name: &str) -> String {
    let name = student_name
        .split_whitespace()
        .map(|word| word.replace(['/', '\\', '"'], "_"))
        .collect::<Vec<_>>()
        .join("_");

    if name.is_empty() {
        "Avaliacao.docx".to_string()
    } else {
        format!("Avaliacao_{name}.docx")
    }
}
