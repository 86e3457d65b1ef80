use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::conclusion::{Conclusion, Signatories, SupportLevel};
use super::item::{ItemAnswer, ItemId};
use crate::catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identification {
    pub student_name: String,
    pub school_year: String,
    /// Selected entries of [`catalog::DISABILITIES`], in catalog order.
    #[serde(default)]
    pub disabilities: Vec<String>,
    #[serde(default)]
    pub other_diagnosis: String,
}

/// Every answer collected by one evaluation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub identification: Identification,
    #[serde(default)]
    pub general_remarks: String,
    pub items: BTreeMap<ItemId, ItemAnswer>,
    pub conclusion: Conclusion,
}

impl EvaluationRecord {
    /// A fresh record: blank text, empty sets, each single-choice item on its
    /// default option and the issuance date set to `today`.
    pub fn with_defaults(today: jiff::civil::Date) -> Self {
        let items = catalog::items()
            .iter()
            .map(|def| (def.id, def.default_answer()))
            .collect();

        Self {
            identification: Identification::default(),
            general_remarks: String::new(),
            items,
            conclusion: Conclusion {
                support_level: SupportLevel::default(),
                existing_support: String::new(),
                signatories: Signatories::default(),
                issue_date: today,
            },
        }
    }

    pub fn answer(&self, id: ItemId) -> Option<&ItemAnswer> {
        self.items.get(&id)
    }

    pub fn answer_mut(&mut self, id: ItemId) -> &mut ItemAnswer {
        self.items
            .entry(id)
            .or_insert_with(|| catalog::item(id).default_answer())
    }

    /// Re-apply the catalog invariants to every field.
    ///
    /// Records deserialized from an older catalog may hold options that no
    /// longer exist; single-choice items fall back to their default and
    /// multi-choice sets drop unknown members.
    pub fn normalize(&mut self) {
        self.identification.disabilities =
            catalog::retain_catalog(catalog::DISABILITIES, &self.identification.disabilities);

        for def in catalog::items() {
            let answer = self.answer_mut(def.id);
            answer.selection = def.normalize(&answer.selection);
            if def.open_option.is_none() {
                answer.extension = None;
            }
        }
    }
}
