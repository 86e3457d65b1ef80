use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use serde::Serialize;
use uuid::Uuid;

use avalia_core::catalog::{self, OTHER_OPTION};
use avalia_core::dates;
use avalia_core::form::FormState;
use avalia_core::schema::{form_schema, FieldKind, FieldName, FieldValue};

use crate::error::ApiError;
use crate::state::{AppState, FORM_TEMPLATE};

#[derive(Serialize)]
struct OptionView {
    value: String,
    selected: bool,
}

#[derive(Serialize)]
struct FieldView {
    name: String,
    label: String,
    kind: FieldKind,
    value: String,
    options: Vec<OptionView>,
    /// False for an extension whose open option is not selected.
    enabled: bool,
}

#[derive(Serialize)]
struct SectionView {
    title: String,
    fields: Vec<FieldView>,
}

/// Open a new session and send the browser to its form.
pub async fn start(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let (id, _) = sessions.create()?;
    Ok(Redirect::to(&format!("/sessions/{id}/form")))
}

/// The form, grouped into its four sections and filled with the session's
/// current values.
pub async fn form_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let sections = {
        let mut sessions = state.sessions.lock().await;
        section_views(sessions.get_mut(id)?.form())
    };

    let mut context = tera::Context::new();
    context.insert("session_id", &id);
    context.insert("sections", &sections);
    context.insert("open_option", OTHER_OPTION);

    let html = state.templates.render(FORM_TEMPLATE, &context)?;
    Ok(Html(html))
}

fn section_views(form: &FormState) -> Vec<SectionView> {
    form_schema(dates::today())
        .sections
        .into_iter()
        .map(|section| SectionView {
            title: section.title,
            fields: section
                .fields
                .into_iter()
                .filter_map(|field| {
                    let name: FieldName = field.name.parse().ok()?;
                    let current = form.get_field(&name);
                    let options = field
                        .options
                        .into_iter()
                        .map(|option| OptionView {
                            selected: is_selected(&current, &option),
                            value: option,
                        })
                        .collect();

                    Some(FieldView {
                        name: field.name,
                        label: field.label,
                        kind: field.kind,
                        value: current.as_text().unwrap_or_default().to_string(),
                        options,
                        enabled: is_enabled(form, name),
                    })
                })
                .collect(),
        })
        .collect()
}

fn is_enabled(form: &FormState, name: FieldName) -> bool {
    let FieldName::Extension(id) = name else {
        return true;
    };
    let open = catalog::item(id).open_option;
    form.record()
        .answer(id)
        .zip(open)
        .is_some_and(|(answer, open)| answer.selection.is_selected(open))
}

fn is_selected(current: &FieldValue, option: &str) -> bool {
    match current {
        FieldValue::Text(value) => value == option,
        FieldValue::List(values) => values.iter().any(|v| v == option),
    }
}
