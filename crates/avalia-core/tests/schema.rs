use avalia_core::dates::format_long_date;
use avalia_core::models::item::ItemId;
use avalia_core::schema::{form_schema, FieldKind, FieldName, FieldValue};
use jiff::civil::date;

#[test]
fn field_names_round_trip_through_keys() {
    for field in FieldName::all() {
        let parsed: FieldName = field.key().parse().unwrap();
        assert_eq!(parsed, field);
    }
}

#[test]
fn only_interaction_has_an_extension_field() {
    assert_eq!(
        "interaction_other".parse::<FieldName>().unwrap(),
        FieldName::Extension(ItemId::Interaction)
    );
    assert!("feeding_other".parse::<FieldName>().is_err());
    assert!("nope".parse::<FieldName>().is_err());
}

#[test]
fn schema_has_four_sections_covering_every_field() {
    let schema = form_schema(date(2026, 10, 18));
    let titles: Vec<_> = schema.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Identificação", "Observações gerais", "Itens de avaliação", "Conclusão"]
    );

    let count: usize = schema.sections.iter().map(|s| s.fields.len()).sum();
    assert_eq!(count, FieldName::all().len());

    let date_field = schema.sections[3]
        .fields
        .iter()
        .find(|f| f.name == "issue_date")
        .unwrap();
    assert_eq!(date_field.kind, FieldKind::Date);
    assert_eq!(date_field.default, FieldValue::text("2026-10-18"));

    let locomotion = schema.sections[2]
        .fields
        .iter()
        .find(|f| f.name == "locomotion")
        .unwrap();
    assert_eq!(locomotion.kind, FieldKind::MultiChoice);
    assert!(locomotion.options.contains(&"possui prótese/órtese.".to_string()));
}

#[test]
fn long_dates_use_portuguese_month_names() {
    assert_eq!(format_long_date(date(2026, 10, 18)), "18 de outubro de 2026");
    assert_eq!(format_long_date(date(2025, 3, 1)), "1 de março de 2025");
}
