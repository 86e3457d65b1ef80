//! The Form State Holder: one mutable [`EvaluationRecord`] per session.

use crate::catalog::{self, ChoiceKind};
use crate::error::CoreError;
use crate::models::conclusion::SupportLevel;
use crate::models::item::Selection;
use crate::models::record::EvaluationRecord;
use crate::schema::{FieldName, FieldValue};

/// Owns the record being edited in one session.
#[derive(Debug, Clone)]
pub struct FormState {
    record: EvaluationRecord,
}

impl FormState {
    /// Start a form with every field on its default.
    pub fn initialize(today: jiff::civil::Date) -> Self {
        Self {
            record: EvaluationRecord::with_defaults(today),
        }
    }

    /// Resume editing a record built elsewhere. Catalog invariants are
    /// re-applied before the record is accepted.
    pub fn from_record(mut record: EvaluationRecord) -> Self {
        record.normalize();
        Self { record }
    }

    pub fn record(&self) -> &EvaluationRecord {
        &self.record
    }

    /// Copy of the record, handed to the renderer on submission.
    pub fn snapshot(&self) -> EvaluationRecord {
        self.record.clone()
    }

    pub fn get_field(&self, field: &FieldName) -> FieldValue {
        let record = &self.record;
        let id = &record.identification;
        let conclusion = &record.conclusion;
        let signatories = &conclusion.signatories;

        match field {
            FieldName::StudentName => FieldValue::text(&id.student_name),
            FieldName::SchoolYear => FieldValue::text(&id.school_year),
            FieldName::Disabilities => FieldValue::list(id.disabilities.iter().cloned()),
            FieldName::OtherDiagnosis => FieldValue::text(&id.other_diagnosis),
            FieldName::GeneralRemarks => FieldValue::text(&record.general_remarks),
            FieldName::Item(item) => {
                let selection = match record.answer(*item) {
                    Some(answer) => answer.selection.clone(),
                    None => catalog::item(*item).default_selection(),
                };
                match selection {
                    Selection::Single(value) => FieldValue::Text(value),
                    Selection::Multi(values) => FieldValue::List(values),
                }
            }
            FieldName::Observation(item) => FieldValue::text(
                record
                    .answer(*item)
                    .map(|a| a.observation.as_str())
                    .unwrap_or_default(),
            ),
            FieldName::Extension(item) => FieldValue::text(
                record
                    .answer(*item)
                    .and_then(|a| a.extension.as_deref())
                    .unwrap_or_default(),
            ),
            FieldName::SupportLevel => FieldValue::text(conclusion.support_level.label()),
            FieldName::ExistingSupport => FieldValue::text(&conclusion.existing_support),
            FieldName::ClassroomTeacher => FieldValue::text(&signatories.classroom_teacher),
            FieldName::SpecialEducationTeacher => {
                FieldValue::text(&signatories.special_education_teacher)
            }
            FieldName::Director => FieldValue::text(&signatories.director),
            FieldName::Coordinator => FieldValue::text(&signatories.coordinator),
            FieldName::IssueDate => FieldValue::Text(conclusion.issue_date.to_string()),
        }
    }

    /// Write one field and return the value actually stored.
    ///
    /// Single-choice values outside the field's catalog fall back to the
    /// default option; multi-choice sets are intersected with the catalog.
    /// Neither case is an error.
    pub fn set_field(&mut self, field: FieldName, value: FieldValue) -> Result<FieldValue, CoreError> {
        let record = &mut self.record;

        match field {
            FieldName::StudentName => record.identification.student_name = text(&field, value)?,
            FieldName::SchoolYear => record.identification.school_year = text(&field, value)?,
            FieldName::Disabilities => {
                let values = list(&field, value)?;
                record.identification.disabilities =
                    catalog::retain_catalog(catalog::DISABILITIES, &values);
            }
            FieldName::OtherDiagnosis => {
                record.identification.other_diagnosis = text(&field, value)?
            }
            FieldName::GeneralRemarks => record.general_remarks = text(&field, value)?,
            FieldName::Item(item) => {
                let def = catalog::item(item);
                let selection = match def.kind {
                    ChoiceKind::Single => {
                        let requested = text(&field, value)?;
                        let stored = catalog::coerce_single(def.options, &requested);
                        if stored != requested {
                            tracing::debug!(
                                field = %field,
                                requested = %requested,
                                fallback = stored,
                                "value outside catalog, using default"
                            );
                        }
                        Selection::Single(stored.to_string())
                    }
                    ChoiceKind::Multi => {
                        Selection::Multi(catalog::retain_catalog(def.options, &list(&field, value)?))
                    }
                };
                record.answer_mut(item).selection = selection;
            }
            FieldName::Observation(item) => {
                record.answer_mut(item).observation = text(&field, value)?
            }
            FieldName::Extension(item) => {
                let extension = text(&field, value)?;
                record.answer_mut(item).extension =
                    (!extension.is_empty()).then_some(extension);
            }
            FieldName::SupportLevel => {
                let requested = text(&field, value)?;
                record.conclusion.support_level =
                    SupportLevel::from_label(&requested).unwrap_or_else(|| {
                        tracing::debug!(requested = %requested, "unknown support level, using default");
                        SupportLevel::default()
                    });
            }
            FieldName::ExistingSupport => {
                record.conclusion.existing_support = text(&field, value)?
            }
            FieldName::ClassroomTeacher => {
                record.conclusion.signatories.classroom_teacher = text(&field, value)?
            }
            FieldName::SpecialEducationTeacher => {
                record.conclusion.signatories.special_education_teacher = text(&field, value)?
            }
            FieldName::Director => record.conclusion.signatories.director = text(&field, value)?,
            FieldName::Coordinator => {
                record.conclusion.signatories.coordinator = text(&field, value)?
            }
            FieldName::IssueDate => {
                let raw = text(&field, value)?;
                record.conclusion.issue_date =
                    raw.trim().parse().map_err(|e: jiff::Error| CoreError::InvalidDate {
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
            }
        }

        Ok(self.get_field(&field))
    }
}

fn text(field: &FieldName, value: FieldValue) -> Result<String, CoreError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::List(_) => Err(CoreError::ShapeMismatch {
            field: field.key(),
            expected: "a single text value",
        }),
    }
}

fn list(field: &FieldName, value: FieldValue) -> Result<Vec<String>, CoreError> {
    match value {
        FieldValue::List(values) => Ok(values),
        FieldValue::Text(_) => Err(CoreError::ShapeMismatch {
            field: field.key(),
            expected: "a list of options",
        }),
    }
}

/// The per-session slot for a [`FormState`].
///
/// A session starts empty; the first call to [`FormSession::initialize`]
/// seeds the record and later calls return the existing one untouched.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    state: Option<FormState>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, today: jiff::civil::Date) -> &mut FormState {
        self.state.get_or_insert_with(|| FormState::initialize(today))
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }
}
