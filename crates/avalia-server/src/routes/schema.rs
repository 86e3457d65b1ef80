use axum::Json;

use avalia_core::dates;
use avalia_core::schema::{form_schema, FormSchema};

/// The form's sections, fields, options and defaults.
pub async fn get_schema() -> Json<FormSchema> {
    Json(form_schema(dates::today()))
}
