use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::layout::{Block, HeadingLevel, Span};
use crate::styles::DocumentStyles;

const CHECKED: &str = "\u{2612}";
const UNCHECKED: &str = "\u{2610}";
const RULE: &str = "__________________________________________________";

/// Table column widths in twips (label, characteristics).
const TABLE_GRID: [usize; 2] = [2600, 6400];

/// Twips per indentation step of checkbox lines and quotations.
const INDENT_STEP: i32 = 567;

/// Serialize laid-out blocks into DOCX bytes.
pub fn generate_docx(blocks: &[Block], styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * 1440.0).round() as i32;
    let mut docx = Docx::new().page_margin(
        PageMargin::new()
            .top(margin)
            .bottom(margin)
            .left(margin)
            .right(margin),
    );

    for block in blocks {
        docx = match block {
            Block::Heading { level, text } => {
                let size = match level {
                    HeadingLevel::Letterhead => styles.letterhead_size,
                    HeadingLevel::Title => styles.title_size,
                };
                docx.add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(text_run(text, styles).bold().size(size * 2)), // OOXML uses half-points
                )
            }
            Block::Rule => docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(text_run(RULE, styles)),
            ),
            Block::Paragraph(spans) => docx.add_paragraph(body_paragraph(spans, styles)),
            Block::Check { checked, label } => {
                let mark = if *checked { CHECKED } else { UNCHECKED };
                docx.add_paragraph(
                    Paragraph::new()
                        .indent(Some(INDENT_STEP), None, None, None)
                        .add_run(text_run(&format!("{mark} {label}"), styles)),
                )
            }
            Block::Quote { level, text } => docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Both)
                    .indent(Some(INDENT_STEP * 2 * i32::from(*level)), None, None, None)
                    .add_run(
                        text_run(text, styles)
                            .italic()
                            .size(styles.body_size.saturating_sub(1) * 2),
                    ),
            ),
            Block::PageBreak => docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            ),
            Block::Spacer => docx.add_paragraph(Paragraph::new()),
            Block::Table { header, rows } => docx.add_table(reference_table(header, rows, styles)),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(
            RunFonts::new()
                .ascii(&styles.body_font)
                .hi_ansi(&styles.body_font),
        )
}

fn span_run(span: &Span, styles: &DocumentStyles) -> Run {
    let mut run = text_run(&span.text, styles);
    if span.bold {
        run = run.bold();
    }
    run
}

fn body_paragraph(spans: &[Span], styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Both);
    for span in spans {
        para = para.add_run(span_run(span, styles));
    }
    para
}

fn cell(text: &str, bold: bool, styles: &DocumentStyles) -> TableCell {
    let mut run = text_run(text, styles);
    if bold {
        run = run.bold();
    }
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

fn reference_table(header: &[String; 2], rows: &[[String; 2]], styles: &DocumentStyles) -> Table {
    let mut table_rows = vec![TableRow::new(
        header.iter().map(|h| cell(h, true, styles)).collect(),
    )];
    for [level, characteristics] in rows {
        table_rows.push(TableRow::new(vec![
            cell(level, true, styles),
            cell(characteristics, false, styles),
        ]));
    }
    Table::new(table_rows).set_grid(TABLE_GRID.to_vec())
}
