//! Named HTML views rendered with Tera.
//!
//! Templates are compiled into the binary and registered under
//! `<view name>.html`, which also turns on Tera's HTML autoescaping.

use axum::http::HeaderName;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// View listing artist search results.
pub const ARTIST_SEARCH_VIEW: &str = "artist_search";

/// Response header naming the view that produced an HTML body.
pub const X_VIEW_NAME: HeaderName = HeaderName::from_static("x-view-name");

const TEMPLATES: &[(&str, &str)] = &[(
    ARTIST_SEARCH_VIEW,
    include_str!("../../templates/artist_search.html"),
)];

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Compiled view templates.
pub struct ViewEngine {
    tera: Tera,
}

impl ViewEngine {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            TEMPLATES
                .iter()
                .map(|(name, source)| (template_name(name), *source)),
        )?;
        Ok(Self { tera })
    }

    /// Render `view` with `model` as its top-level context.
    ///
    /// The model must serialize to a map.
    pub fn render<M: Serialize>(&self, view: &str, model: &M) -> Result<String, ViewError> {
        let context = Context::from_serialize(model)?;
        Ok(self.tera.render(&template_name(view), &context)?)
    }
}

fn template_name(view: &str) -> String {
    format!("{}.html", view)
}
