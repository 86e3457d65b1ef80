use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How much assistance the student requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SupportLevel {
    #[default]
    NotNeeded,
    Limited,
    Substantial,
    VerySubstantial,
}

impl SupportLevel {
    pub const ALL: [SupportLevel; 4] = [
        SupportLevel::NotNeeded,
        SupportLevel::Limited,
        SupportLevel::Substantial,
        SupportLevel::VerySubstantial,
    ];

    /// Display label, as offered on the form and printed in the document.
    pub fn label(self) -> &'static str {
        match self {
            SupportLevel::NotNeeded => "Não necessita de apoio",
            SupportLevel::Limited => "Apoio pouco substancial",
            SupportLevel::Substantial => "Apoio substancial",
            SupportLevel::VerySubstantial => "Apoio muito substancial",
        }
    }

    /// Characteristics column of the support-level reference table.
    pub fn characteristics(self) -> &'static str {
        match self {
            SupportLevel::NotNeeded => {
                "Realiza com autonomia as atividades de alimentação, higiene e locomoção, \
                 participando da rotina escolar sem necessidade de profissional de apoio."
            }
            SupportLevel::Limited => {
                "Necessita de apoio pontual em algumas atividades de vida diária ou em \
                 momentos específicos da rotina, com supervisão eventual."
            }
            SupportLevel::Substantial => {
                "Necessita de apoio frequente em alimentação, higiene ou locomoção e de \
                 mediação constante para participar das atividades escolares."
            }
            SupportLevel::VerySubstantial => {
                "Necessita de apoio contínuo e individualizado em todas as atividades de \
                 vida diária e escolares, com acompanhamento permanente."
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// The four responsible parties who sign the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signatories {
    pub classroom_teacher: String,
    pub special_education_teacher: String,
    pub director: String,
    pub coordinator: String,
}

impl Signatories {
    /// `(role, name)` pairs in signing order.
    pub fn roles(&self) -> [(&'static str, &str); 4] {
        [
            ("Professor(a) regente", &self.classroom_teacher),
            ("Professor(a) do AEE", &self.special_education_teacher),
            ("Diretor(a)", &self.director),
            ("Coordenador(a) pedagógico(a)", &self.coordinator),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Conclusion {
    pub support_level: SupportLevel,
    #[serde(default)]
    pub existing_support: String,
    #[serde(default)]
    pub signatories: Signatories,
    pub issue_date: jiff::civil::Date,
}
