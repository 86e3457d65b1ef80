use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, ChoiceKind};
use crate::error::CoreError;
use crate::form::FormState;
use crate::models::conclusion::SupportLevel;
use crate::models::item::ItemId;

/// Every addressable attribute of an evaluation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    StudentName,
    SchoolYear,
    Disabilities,
    OtherDiagnosis,
    GeneralRemarks,
    Item(ItemId),
    Observation(ItemId),
    /// Free text behind an item's open option (only the interaction item has one).
    Extension(ItemId),
    SupportLevel,
    ExistingSupport,
    ClassroomTeacher,
    SpecialEducationTeacher,
    Director,
    Coordinator,
    IssueDate,
}

impl FieldName {
    pub fn key(&self) -> String {
        match self {
            FieldName::StudentName => "student_name".to_string(),
            FieldName::SchoolYear => "school_year".to_string(),
            FieldName::Disabilities => "disabilities".to_string(),
            FieldName::OtherDiagnosis => "other_diagnosis".to_string(),
            FieldName::GeneralRemarks => "general_remarks".to_string(),
            FieldName::Item(id) => id.key().to_string(),
            FieldName::Observation(id) => format!("{}_obs", id.key()),
            FieldName::Extension(id) => format!("{}_other", id.key()),
            FieldName::SupportLevel => "support_level".to_string(),
            FieldName::ExistingSupport => "existing_support".to_string(),
            FieldName::ClassroomTeacher => "classroom_teacher".to_string(),
            FieldName::SpecialEducationTeacher => "special_education_teacher".to_string(),
            FieldName::Director => "director".to_string(),
            FieldName::Coordinator => "coordinator".to_string(),
            FieldName::IssueDate => "issue_date".to_string(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Disabilities => FieldKind::MultiChoice,
            FieldName::Item(id) => match catalog::item(*id).kind {
                ChoiceKind::Single => FieldKind::SingleChoice,
                ChoiceKind::Multi => FieldKind::MultiChoice,
            },
            FieldName::SupportLevel => FieldKind::SingleChoice,
            FieldName::GeneralRemarks | FieldName::ExistingSupport => FieldKind::LongText,
            FieldName::IssueDate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Permitted values for choice fields; empty for free-text fields.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            FieldName::Disabilities => catalog::DISABILITIES.to_vec(),
            FieldName::Item(id) => catalog::item(*id).options.to_vec(),
            FieldName::SupportLevel => SupportLevel::ALL.iter().map(|l| l.label()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            FieldName::StudentName => "Nome do(a) estudante".to_string(),
            FieldName::SchoolYear => "Ano escolar".to_string(),
            FieldName::Disabilities => "Deficiência / transtorno".to_string(),
            FieldName::OtherDiagnosis => "Outro diagnóstico".to_string(),
            FieldName::GeneralRemarks => "Observações gerais".to_string(),
            FieldName::Item(id) => {
                let def = catalog::item(*id);
                format!("{}. {}", def.number, def.title)
            }
            FieldName::Observation(id) => format!("Obs. ({})", catalog::item(*id).title),
            FieldName::Extension(id) => match catalog::item(*id).open_option {
                Some(option) => format!("{option} (especifique)"),
                None => "Especifique".to_string(),
            },
            FieldName::SupportLevel => "Nível de apoio".to_string(),
            FieldName::ExistingSupport => "Apoio já existente".to_string(),
            FieldName::ClassroomTeacher => "Professor(a) regente".to_string(),
            FieldName::SpecialEducationTeacher => "Professor(a) do AEE".to_string(),
            FieldName::Director => "Diretor(a)".to_string(),
            FieldName::Coordinator => "Coordenador(a) pedagógico(a)".to_string(),
            FieldName::IssueDate => "Data de emissão".to_string(),
        }
    }

    /// All fields, in form order.
    pub fn all() -> Vec<FieldName> {
        let mut fields = vec![
            FieldName::StudentName,
            FieldName::SchoolYear,
            FieldName::Disabilities,
            FieldName::OtherDiagnosis,
            FieldName::GeneralRemarks,
        ];
        fields.extend(item_fields());
        fields.extend(conclusion_fields());
        fields
    }
}

fn item_fields() -> Vec<FieldName> {
    let mut fields = Vec::new();
    for def in catalog::items() {
        fields.push(FieldName::Item(def.id));
        if def.open_option.is_some() {
            fields.push(FieldName::Extension(def.id));
        }
        fields.push(FieldName::Observation(def.id));
    }
    fields
}

fn conclusion_fields() -> [FieldName; 7] {
    [
        FieldName::SupportLevel,
        FieldName::ExistingSupport,
        FieldName::ClassroomTeacher,
        FieldName::SpecialEducationTeacher,
        FieldName::Director,
        FieldName::Coordinator,
        FieldName::IssueDate,
    ]
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::all()
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    LongText,
    SingleChoice,
    MultiChoice,
    Date,
}

/// A field's value on the wire: free text, a single option or an ISO date
/// travel as `Text`; multi-choice sets travel as `List`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<String>,
    pub default: FieldValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSchema {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSchema {
    pub sections: Vec<SectionSchema>,
}

/// Describe the form: four labeled sections, each field with its kind,
/// options and the default a new session starts with.
pub fn form_schema(today: jiff::civil::Date) -> FormSchema {
    let defaults = FormState::initialize(today);

    let section = |id: &str, title: &str, fields: Vec<FieldName>| SectionSchema {
        id: id.to_string(),
        title: title.to_string(),
        fields: fields
            .into_iter()
            .map(|field| FieldSchema {
                name: field.key(),
                label: field.label(),
                kind: field.kind(),
                options: field.options().into_iter().map(str::to_string).collect(),
                default: defaults.get_field(&field),
            })
            .collect(),
    };

    FormSchema {
        sections: vec![
            section(
                "identification",
                "Identificação",
                vec![
                    FieldName::StudentName,
                    FieldName::SchoolYear,
                    FieldName::Disabilities,
                    FieldName::OtherDiagnosis,
                ],
            ),
            section(
                "remarks",
                "Observações gerais",
                vec![FieldName::GeneralRemarks],
            ),
            section("items", "Itens de avaliação", item_fields()),
            section("conclusion", "Conclusão", conclusion_fields().to_vec()),
        ],
    }
}
