use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Arial", "Calibri").
    pub body_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Size of the institutional header lines, in points.
    pub letterhead_size: usize,

    /// Size of the document title, in points.
    pub title_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            body_size: 11,
            letterhead_size: 12,
            title_size: 14,
            margin_inches: 1.0,
        }
    }
}

/// The institution printed at the top of every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub institution: String,
    pub department: String,
    pub title: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            institution: "PREFEITURA MUNICIPAL".to_string(),
            department: "SECRETARIA MUNICIPAL DE EDUCAÇÃO".to_string(),
            title: "AVALIAÇÃO PEDAGÓGICA".to_string(),
        }
    }
}
