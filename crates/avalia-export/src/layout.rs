//! Lays an [`EvaluationRecord`] out as an ordered list of document blocks.
//!
//! The layout is a pure function of the record and the letterhead. It does
//! no validation: blank names and empty sets simply render as blank lines
//! and unchecked boxes.

use avalia_core::catalog::{self, ItemDefinition};
use avalia_core::dates::format_long_date;
use avalia_core::models::conclusion::SupportLevel;
use avalia_core::models::item::ItemAnswer;
use avalia_core::models::record::EvaluationRecord;

use crate::legal::REFERENCES;
use crate::styles::Letterhead;

/// A run of text with inline formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Institutional header line.
    Letterhead,
    /// The document title.
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered bold line.
    Heading { level: HeadingLevel, text: String },
    /// Horizontal rule.
    Rule,
    Paragraph(Vec<Span>),
    /// Checkbox-style line.
    Check { checked: bool, label: String },
    /// Indented quotation; deeper levels are indented further.
    Quote { level: u8, text: String },
    PageBreak,
    /// Blank paragraph.
    Spacer,
    Table {
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
}

impl Block {
    /// Plain text of the block, without formatting.
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Quote { text, .. } => text.clone(),
            Block::Check { label, .. } => label.clone(),
            Block::Paragraph(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::Rule | Block::PageBreak | Block::Spacer | Block::Table { .. } => String::new(),
        }
    }
}

/// Lay the whole document out, top to bottom.
pub fn layout(record: &EvaluationRecord, letterhead: &Letterhead) -> Vec<Block> {
    let mut blocks = Vec::new();
    let id = &record.identification;

    blocks.push(Block::Heading {
        level: HeadingLevel::Letterhead,
        text: letterhead.institution.clone(),
    });
    blocks.push(Block::Heading {
        level: HeadingLevel::Letterhead,
        text: letterhead.department.clone(),
    });
    blocks.push(Block::Rule);
    blocks.push(Block::Heading {
        level: HeadingLevel::Title,
        text: letterhead.title.clone(),
    });

    blocks.push(labeled("Nome do(a) estudante: ", &id.student_name));
    blocks.push(labeled("Ano escolar: ", &id.school_year));

    blocks.push(Block::Paragraph(vec![Span::bold("Deficiência / transtorno:")]));
    for entry in catalog::DISABILITIES {
        blocks.push(Block::Check {
            checked: id.disabilities.iter().any(|d| d == *entry),
            label: entry.to_string(),
        });
    }
    let other = id.other_diagnosis.trim();
    if !other.is_empty() {
        blocks.push(Block::Check {
            checked: true,
            label: format!("Outro: {other}"),
        });
    }

    for reference in &REFERENCES {
        blocks.push(Block::Paragraph(vec![Span::plain(reference.lead)]));
        for quotation in reference.quotations {
            blocks.push(Block::Quote {
                level: quotation.level,
                text: quotation.text.to_string(),
            });
        }
    }

    blocks.push(Block::PageBreak);
    blocks.push(labeled("Observações gerais: ", &record.general_remarks));
    blocks.push(Block::Spacer);

    for def in catalog::items() {
        let answer = record
            .answer(def.id)
            .cloned()
            .unwrap_or_else(|| def.default_answer());
        item_blocks(def, &answer, &mut blocks);
    }

    blocks.push(Block::PageBreak);
    blocks.push(Block::Table {
        header: ["Nível de apoio".to_string(), "Características".to_string()],
        rows: SupportLevel::ALL
            .iter()
            .map(|level| [level.label().to_string(), level.characteristics().to_string()])
            .collect(),
    });
    blocks.push(Block::Spacer);

    let conclusion = &record.conclusion;
    blocks.push(Block::Paragraph(vec![
        Span::plain("O estudante necessita de "),
        Span::bold(conclusion.support_level.label().to_uppercase()),
    ]));
    let existing = conclusion.existing_support.trim();
    if !existing.is_empty() {
        blocks.push(labeled("Apoio já existente: ", existing));
    }

    blocks.push(Block::Spacer);
    blocks.push(Block::Paragraph(vec![Span::plain(format!(
        "Data de emissão: {}",
        format_long_date(conclusion.issue_date)
    ))]));

    for (role, name) in conclusion.signatories.roles() {
        blocks.push(Block::Spacer);
        blocks.push(Block::Rule);
        blocks.push(Block::Paragraph(vec![Span::plain(format!("{role}: {name}"))]));
    }

    blocks
}

/// Title, one checkbox line per catalog option, the optional observation
/// and a spacer.
fn item_blocks(def: &ItemDefinition, answer: &ItemAnswer, blocks: &mut Vec<Block>) {
    blocks.push(Block::Paragraph(vec![Span::bold(format!(
        "{}. {}",
        def.number, def.title
    ))]));

    for option in def.options {
        let checked = answer.selection.is_selected(option);
        let label = if checked && def.is_open(option) {
            format!(
                "{option}: {}",
                answer.extension.as_deref().unwrap_or_default()
            )
        } else {
            option.to_string()
        };
        blocks.push(Block::Check { checked, label });
    }

    let observation = answer.observation.trim();
    if !observation.is_empty() {
        blocks.push(labeled("Obs: ", observation));
    }
    blocks.push(Block::Spacer);
}

fn labeled(label: &str, value: &str) -> Block {
    Block::Paragraph(vec![Span::bold(label), Span::plain(value)])
}
