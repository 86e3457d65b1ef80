use std::sync::Arc;

use tera::Tera;
use tokio::sync::Mutex;

use avalia_export::render::RenderOptions;

use crate::session::SessionStore;

pub const FORM_TEMPLATE: &str = "form.html";

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<SessionStore>>,
    pub render: Arc<RenderOptions>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(sessions: SessionStore, render: RenderOptions) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(FORM_TEMPLATE, include_str!("../templates/form.html.tera"))?;

        Ok(Self {
            sessions: Arc::new(Mutex::new(sessions)),
            render: Arc::new(render),
            templates: Arc::new(tera),
        })
    }
}
