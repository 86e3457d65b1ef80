//! Fixed, ordered option catalogs for every choice on the form.

use crate::models::item::{ItemAnswer, ItemId, Selection};

/// Option of the interaction item that unlocks a free-text extension.
pub const OTHER_OPTION: &str = "Outros";

pub const DISABILITIES: &[&str] = &[
    "Deficiência física",
    "Deficiência intelectual",
    "Deficiência visual",
    "Deficiência auditiva",
    "Surdocegueira",
    "Deficiência múltipla",
    "Transtorno do Espectro Autista (TEA)",
    "Altas habilidades/Superdotação",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Single,
    Multi,
}

/// Definition of one evaluation item.
#[derive(Debug)]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Number printed before the title (1-based).
    pub number: u8,
    pub title: &'static str,
    pub kind: ChoiceKind,
    pub options: &'static [&'static str],
    /// Option whose selection makes the item's extension text meaningful.
    pub open_option: Option<&'static str>,
}

impl ItemDefinition {
    /// The first catalog entry. Every single-choice item defaults to it.
    pub fn default_option(&self) -> &'static str {
        self.options.first().copied().unwrap_or_default()
    }

    pub fn default_selection(&self) -> Selection {
        match self.kind {
            ChoiceKind::Single => Selection::Single(self.default_option().to_string()),
            ChoiceKind::Multi => Selection::Multi(Vec::new()),
        }
    }

    pub fn default_answer(&self) -> ItemAnswer {
        ItemAnswer {
            selection: self.default_selection(),
            observation: String::new(),
            extension: None,
        }
    }

    /// Bring a selection in line with this item's kind and catalog.
    pub fn normalize(&self, selection: &Selection) -> Selection {
        match (self.kind, selection) {
            (ChoiceKind::Single, Selection::Single(value)) => {
                Selection::Single(coerce_single(self.options, value).to_string())
            }
            (ChoiceKind::Single, Selection::Multi(values)) => {
                let first = retain_catalog(self.options, values).into_iter().next();
                Selection::Single(first.unwrap_or_else(|| self.default_option().to_string()))
            }
            (ChoiceKind::Multi, Selection::Multi(values)) => {
                Selection::Multi(retain_catalog(self.options, values))
            }
            (ChoiceKind::Multi, Selection::Single(value)) => {
                Selection::Multi(retain_catalog(self.options, std::slice::from_ref(value)))
            }
        }
    }

    pub fn is_open(&self, option: &str) -> bool {
        self.open_option == Some(option)
    }
}

/// Return `value` if it is a catalog member, else the catalog's first entry.
pub fn coerce_single(options: &'static [&'static str], value: &str) -> &'static str {
    options
        .iter()
        .copied()
        .find(|option| *option == value)
        .unwrap_or_else(|| options.first().copied().unwrap_or_default())
}

/// Intersect `values` with the catalog, without duplicates, in catalog order.
pub fn retain_catalog(options: &[&str], values: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|option| values.iter().any(|v| v == *option))
        .map(|option| option.to_string())
        .collect()
}

static ITEMS: [ItemDefinition; 12] = [
    ItemDefinition {
        id: ItemId::Feeding,
        number: 1,
        title: "Alimentação",
        kind: ChoiceKind::Single,
        options: &[
            "É independente.",
            "Necessita de apoio parcial.",
            "Necessita de apoio total.",
            "Faz uso de sonda ou dieta especial.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::Hygiene,
        number: 2,
        title: "Higiene",
        kind: ChoiceKind::Single,
        options: &[
            "É independente.",
            "Necessita de apoio parcial.",
            "Necessita de apoio total.",
            "Faz uso de fraldas.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::Locomotion,
        number: 3,
        title: "Locomoção",
        kind: ChoiceKind::Multi,
        options: &[
            "locomove-se com autonomia.",
            "necessita de apoio para se locomover.",
            "utiliza cadeira de rodas.",
            "utiliza andador ou muletas.",
            "possui prótese/órtese.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::Behavior,
        number: 4,
        title: "Comportamento",
        kind: ChoiceKind::Single,
        options: &[
            "Adequado ao ambiente escolar.",
            "Apresenta agitação ocasional.",
            "Apresenta comportamentos desafiadores frequentes.",
            "Apresenta comportamento autolesivo ou heteroagressivo.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::GroupParticipation,
        number: 5,
        title: "Participação em grupo",
        kind: ChoiceKind::Single,
        options: &[
            "Participa ativamente.",
            "Participa com mediação.",
            "Participa raramente.",
            "Não participa.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::Interaction,
        number: 6,
        title: "Interação",
        kind: ChoiceKind::Single,
        options: &[
            "Interage com colegas e adultos.",
            "Interage apenas com adultos.",
            "Interage somente quando solicitado.",
            "Não interage.",
            OTHER_OPTION,
        ],
        open_option: Some(OTHER_OPTION),
    },
    ItemDefinition {
        id: ItemId::Language,
        number: 7,
        title: "Linguagem e comunicação",
        kind: ChoiceKind::Multi,
        options: &[
            "comunica-se verbalmente.",
            "comunica-se por gestos.",
            "utiliza comunicação alternativa.",
            "apresenta ecolalia.",
            "não se comunica verbalmente.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::ClassroomRoutine,
        number: 8,
        title: "Rotina de sala de aula",
        kind: ChoiceKind::Single,
        options: &[
            "Compreende e segue a rotina.",
            "Segue a rotina com apoio.",
            "Apresenta dificuldade em seguir a rotina.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::SustainedAttention,
        number: 9,
        title: "Atenção sustentada",
        kind: ChoiceKind::Single,
        options: &[
            "Mantém a atenção durante as atividades.",
            "Mantém a atenção por curtos períodos.",
            "Não mantém a atenção.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::DividedAttention,
        number: 10,
        title: "Atenção dividida",
        kind: ChoiceKind::Single,
        options: &[
            "Realiza mais de uma tarefa ao mesmo tempo.",
            "Realiza mais de uma tarefa com dificuldade.",
            "Não realiza mais de uma tarefa ao mesmo tempo.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::SelectiveAttention,
        number: 11,
        title: "Atenção seletiva",
        kind: ChoiceKind::Single,
        options: &[
            "Concentra-se no estímulo relevante.",
            "Distrai-se com facilidade.",
            "Não seleciona estímulos.",
        ],
        open_option: None,
    },
    ItemDefinition {
        id: ItemId::PedagogicalActivities,
        number: 12,
        title: "Atividades pedagógicas",
        kind: ChoiceKind::Single,
        options: &[
            "Realiza as atividades com autonomia.",
            "Realiza as atividades com mediação.",
            "Realiza atividades adaptadas.",
            "Não realiza as atividades propostas.",
        ],
        open_option: None,
    },
];

/// All item definitions in form order.
pub fn items() -> &'static [ItemDefinition] {
    &ITEMS
}

pub fn item(id: ItemId) -> &'static ItemDefinition {
    &ITEMS[id.index()]
}
