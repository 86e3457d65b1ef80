use avalia_core::catalog::{self, ChoiceKind, OTHER_OPTION};
use avalia_core::error::CoreError;
use avalia_core::form::{FormSession, FormState};
use avalia_core::models::conclusion::SupportLevel;
use avalia_core::models::item::{ItemId, Selection};
use avalia_core::schema::{FieldName, FieldValue};
use jiff::civil::date;

fn fresh() -> FormState {
    FormState::initialize(date(2026, 10, 18))
}

#[test]
fn defaults_follow_catalog() {
    let form = fresh();
    let record = form.record();

    assert_eq!(record.identification.student_name, "");
    assert!(record.identification.disabilities.is_empty());
    assert_eq!(record.conclusion.support_level, SupportLevel::NotNeeded);
    assert_eq!(record.conclusion.issue_date, date(2026, 10, 18));
    assert_eq!(
        form.get_field(&FieldName::Item(ItemId::Feeding)),
        FieldValue::text("É independente.")
    );
    assert_eq!(
        form.get_field(&FieldName::Item(ItemId::Locomotion)),
        FieldValue::List(vec![])
    );
    assert_eq!(record.items.len(), 12);
}

#[test]
fn single_choice_outside_catalog_falls_back_to_default() {
    for def in catalog::items().iter().filter(|d| d.kind == ChoiceKind::Single) {
        let mut form = fresh();
        let field = FieldName::Item(def.id);

        form.set_field(field, FieldValue::text(def.options[1])).unwrap();
        assert_eq!(form.get_field(&field), FieldValue::text(def.options[1]));

        let stored = form
            .set_field(field, FieldValue::text("resposta inexistente"))
            .unwrap();
        assert_eq!(stored, FieldValue::text(def.default_option()), "{field}");
        assert_eq!(form.get_field(&field), stored);
    }
}

#[test]
fn support_level_outside_catalog_falls_back_to_default() {
    let mut form = fresh();
    form.set_field(FieldName::SupportLevel, FieldValue::text("Apoio substancial"))
        .unwrap();
    assert_eq!(form.record().conclusion.support_level, SupportLevel::Substantial);

    form.set_field(FieldName::SupportLevel, FieldValue::text("Nível 9"))
        .unwrap();
    assert_eq!(form.record().conclusion.support_level, SupportLevel::NotNeeded);
}

#[test]
fn multi_choice_is_intersected_with_catalog_in_catalog_order() {
    let mut form = fresh();
    let stored = form
        .set_field(
            FieldName::Item(ItemId::Locomotion),
            FieldValue::list([
                "possui prótese/órtese.",
                "voa.",
                "utiliza cadeira de rodas.",
                "possui prótese/órtese.",
            ]),
        )
        .unwrap();

    assert_eq!(
        stored,
        FieldValue::list(["utiliza cadeira de rodas.", "possui prótese/órtese."])
    );
}

#[test]
fn disabilities_drop_unknown_entries() {
    let mut form = fresh();
    form.set_field(
        FieldName::Disabilities,
        FieldValue::list(["Deficiência visual", "Dislexia"]),
    )
    .unwrap();

    assert_eq!(
        form.record().identification.disabilities,
        vec!["Deficiência visual".to_string()]
    );
}

#[test]
fn shape_mismatch_is_rejected() {
    let mut form = fresh();

    let err = form
        .set_field(FieldName::StudentName, FieldValue::list(["Ana"]))
        .unwrap_err();
    assert!(matches!(err, CoreError::ShapeMismatch { .. }));

    let err = form
        .set_field(FieldName::Item(ItemId::Language), FieldValue::text("x"))
        .unwrap_err();
    assert!(matches!(err, CoreError::ShapeMismatch { .. }));
}

#[test]
fn interaction_extension_is_kept_alongside_sentinel() {
    let mut form = fresh();
    form.set_field(FieldName::Item(ItemId::Interaction), FieldValue::text(OTHER_OPTION))
        .unwrap();
    form.set_field(
        FieldName::Extension(ItemId::Interaction),
        FieldValue::text("Via intérprete"),
    )
    .unwrap();

    let answer = form.record().answer(ItemId::Interaction).unwrap();
    assert_eq!(answer.selection, Selection::Single("Outros".to_string()));
    assert_eq!(answer.extension.as_deref(), Some("Via intérprete"));

    form.set_field(FieldName::Extension(ItemId::Interaction), FieldValue::text(""))
        .unwrap();
    assert_eq!(form.record().answer(ItemId::Interaction).unwrap().extension, None);
}

#[test]
fn issue_date_is_overridable() {
    let mut form = fresh();
    let stored = form
        .set_field(FieldName::IssueDate, FieldValue::text("2027-03-05"))
        .unwrap();
    assert_eq!(stored, FieldValue::text("2027-03-05"));

    let err = form
        .set_field(FieldName::IssueDate, FieldValue::text("05/03/2027"))
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidDate { .. }));
    assert_eq!(form.record().conclusion.issue_date, date(2027, 3, 5));
}

#[test]
fn blank_student_name_is_accepted() {
    let mut form = fresh();
    form.set_field(FieldName::StudentName, FieldValue::text("")).unwrap();
    assert_eq!(form.get_field(&FieldName::StudentName), FieldValue::text(""));
}

#[test]
fn session_initialize_is_idempotent() {
    let mut session = FormSession::new();
    assert!(!session.is_initialized());

    session
        .initialize(date(2026, 10, 18))
        .set_field(FieldName::StudentName, FieldValue::text("Ana Silva"))
        .unwrap();

    let state = session.initialize(date(2030, 1, 1));
    assert_eq!(state.record().identification.student_name, "Ana Silva");
    assert_eq!(state.record().conclusion.issue_date, date(2026, 10, 18));
}

#[test]
fn from_record_normalizes_stale_values() {
    let mut record = fresh().snapshot();
    record.answer_mut(ItemId::Feeding).selection = Selection::Single("antiga opção".into());
    record.answer_mut(ItemId::Language).selection =
        Selection::Multi(vec!["apresenta ecolalia.".into(), "antiga".into()]);
    record.items.remove(&ItemId::Hygiene);

    let form = FormState::from_record(record);
    assert_eq!(
        form.get_field(&FieldName::Item(ItemId::Feeding)),
        FieldValue::text("É independente.")
    );
    assert_eq!(
        form.get_field(&FieldName::Item(ItemId::Language)),
        FieldValue::list(["apresenta ecolalia."])
    );
    assert!(form.record().answer(ItemId::Hygiene).is_some());
}

#[test]
fn record_survives_json() {
    let mut form = fresh();
    form.set_field(FieldName::StudentName, FieldValue::text("Ana Silva"))
        .unwrap();
    let json = serde_json::to_string(form.record()).unwrap();
    let back: avalia_core::models::record::EvaluationRecord =
        serde_json::from_str(&json).unwrap();
    assert_eq!(&back, form.record());
}
