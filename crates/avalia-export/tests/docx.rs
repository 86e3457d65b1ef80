use avalia_core::form::FormState;
use avalia_core::models::item::ItemId;
use avalia_core::schema::{FieldName, FieldValue};
use avalia_export::layout::layout;
use avalia_export::render::{document_filename, render, RenderOptions, DOCX_CONTENT_TYPE};
use avalia_export::styles::Letterhead;
use jiff::civil::date;

fn filled_form() -> FormState {
    let mut form = FormState::initialize(date(2026, 10, 18));
    form.set_field(FieldName::StudentName, FieldValue::text("Ana Silva"))
        .unwrap();
    form.set_field(FieldName::SchoolYear, FieldValue::text("3º ano"))
        .unwrap();
    form.set_field(FieldName::Item(ItemId::Interaction), FieldValue::text("Outros"))
        .unwrap();
    form.set_field(
        FieldName::Extension(ItemId::Interaction),
        FieldValue::text("Via intérprete"),
    )
    .unwrap();
    form
}

#[test]
fn rendered_document_is_a_readable_docx() {
    let document = render(filled_form().record(), &RenderOptions::default()).unwrap();

    assert_eq!(document.content_type, DOCX_CONTENT_TYPE);
    assert_eq!(document.filename, "Avaliacao_Ana_Silva.docx");
    assert!(document.bytes.starts_with(b"PK"));

    let docx = docx_rs::read_docx(&document.bytes).unwrap();
    let json = docx.json();
    assert!(json.contains("Ana Silva"));
    assert!(json.contains("Outros: Via intérprete"));
    assert!(json.contains("Apoio muito substancial"));
    assert!(json.contains("SECRETARIA MUNICIPAL DE EDUCAÇÃO"));
}

#[test]
fn default_record_renders() {
    let record = FormState::initialize(date(2026, 10, 18)).snapshot();
    let document = render(&record, &RenderOptions::default()).unwrap();

    assert_eq!(document.filename, "Avaliacao.docx");
    assert!(!document.bytes.is_empty());
}

#[test]
fn letterhead_comes_from_options() {
    let options = RenderOptions {
        letterhead: Letterhead {
            institution: "PREFEITURA DE ITAPEVA".to_string(),
            department: "SECRETARIA DE EDUCAÇÃO".to_string(),
            title: "PARECER PEDAGÓGICO".to_string(),
        },
        ..RenderOptions::default()
    };

    let document = render(filled_form().record(), &options).unwrap();
    let json = docx_rs::read_docx(&document.bytes).unwrap().json();
    assert!(json.contains("PREFEITURA DE ITAPEVA"));
    assert!(json.contains("PARECER PEDAGÓGICO"));
}

#[test]
fn equal_records_render_identically() {
    let record = filled_form().snapshot();
    let options = RenderOptions::default();

    let first = render(&record, &options).unwrap();
    let second = render(&record, &options).unwrap();
    assert_eq!(first.filename, second.filename);
    assert_eq!(first.bytes, second.bytes);
    assert_eq!(
        layout(&record, &options.letterhead),
        layout(&record, &options.letterhead)
    );
}

#[test]
fn filenames_replace_whitespace() {
    assert_eq!(document_filename("Ana Silva"), "Avaliacao_Ana_Silva.docx");
    assert_eq!(
        document_filename("  João   da Costa "),
        "Avaliacao_João_da_Costa.docx"
    );
    assert_eq!(document_filename("a/b"), "Avaliacao_a_b.docx");
    assert_eq!(document_filename("   "), "Avaliacao.docx");
}

#[test]
fn render_options_fill_missing_fields_with_defaults() {
    let options: RenderOptions =
        serde_json::from_str(r#"{"styles": {"body_font": "Calibri"}}"#).unwrap();
    assert_eq!(options.styles.body_font, "Calibri");
    assert_eq!(options.styles.body_size, 11);
    assert_eq!(options.letterhead, Letterhead::default());
}
