use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The twelve evaluation items, in the order they appear on the form and in
/// the generated document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemId {
    Feeding,
    Hygiene,
    Locomotion,
    Behavior,
    GroupParticipation,
    Interaction,
    Language,
    ClassroomRoutine,
    SustainedAttention,
    DividedAttention,
    SelectiveAttention,
    PedagogicalActivities,
}

impl ItemId {
    pub const ALL: [ItemId; 12] = [
        ItemId::Feeding,
        ItemId::Hygiene,
        ItemId::Locomotion,
        ItemId::Behavior,
        ItemId::GroupParticipation,
        ItemId::Interaction,
        ItemId::Language,
        ItemId::ClassroomRoutine,
        ItemId::SustainedAttention,
        ItemId::DividedAttention,
        ItemId::SelectiveAttention,
        ItemId::PedagogicalActivities,
    ];

    /// Position of the item on the form, starting at zero.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case key used in field names (e.g. `"group_participation"`).
    pub fn key(self) -> &'static str {
        match self {
            ItemId::Feeding => "feeding",
            ItemId::Hygiene => "hygiene",
            ItemId::Locomotion => "locomotion",
            ItemId::Behavior => "behavior",
            ItemId::GroupParticipation => "group_participation",
            ItemId::Interaction => "interaction",
            ItemId::Language => "language",
            ItemId::ClassroomRoutine => "classroom_routine",
            ItemId::SustainedAttention => "sustained_attention",
            ItemId::DividedAttention => "divided_attention",
            ItemId::SelectiveAttention => "selective_attention",
            ItemId::PedagogicalActivities => "pedagogical_activities",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// The answer to one evaluation item.
///
/// The variant is fixed by the item's catalog kind: single-choice items always
/// hold `Single`, multi-choice items always hold `Multi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Selection {
    Single(String),
    Multi(Vec<String>),
}

impl Selection {
    /// Whether `option` is the chosen value (single) or a member of the
    /// chosen set (multi).
    pub fn is_selected(&self, option: &str) -> bool {
        match self {
            Selection::Single(value) => value == option,
            Selection::Multi(values) => values.iter().any(|v| v == option),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemAnswer {
    pub selection: Selection,

    /// Free-text observation. Empty means "no observation".
    #[serde(default)]
    pub observation: String,

    /// Free text attached to the item's open option. Only meaningful while
    /// the single selection equals that option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}
