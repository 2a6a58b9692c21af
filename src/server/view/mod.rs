//! Server-side page rendering.
//!
//! Templates are embedded at build time and compiled once into a shared `minijinja`
//! environment. Every page receives the caller's message catalog (`t`), language code,
//! logged in user, form token and a page specific `page` value.

use std::sync::LazyLock;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Environment, Value};
use serde::Serialize;

use crate::server::{error::AppError, i18n::Locale, model::user::User};

const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("queue.html", include_str!("../../../templates/queue.html")),
    ("message.html", include_str!("../../../templates/message.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("bot_form.html", include_str!("../../../templates/bot_form.html")),
    ("add.html", include_str!("../../../templates/add.html")),
    ("edit.html", include_str!("../../../templates/edit.html")),
    ("bot.html", include_str!("../../../templates/bot.html")),
    ("delete.html", include_str!("../../../templates/delete.html")),
    ("token.html", include_str!("../../../templates/token.html")),
    ("remove.html", include_str!("../../../templates/remove.html")),
];

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();

    for (name, source) in TEMPLATE_SOURCES {
        if let Err(e) = env.add_template(*name, *source) {
            tracing::error!("Failed to compile template {}: {}", name, e);
        }
    }

    env
});

/// Per-request rendering context.
pub struct Page<'a> {
    pub locale: Locale,
    pub user: Option<&'a User>,
    /// Form token embedded into every form on the page.
    pub csrf: Option<String>,
}

impl<'a> Page<'a> {
    pub fn new(locale: Locale, user: Option<&'a User>) -> Self {
        Self {
            locale,
            user,
            csrf: None,
        }
    }

    pub fn with_csrf(mut self, csrf: String) -> Self {
        self.csrf = Some(csrf);
        self
    }

    /// Renders `template` with `page` as its page specific data.
    ///
    /// # Returns
    /// - `Ok(Html)` - Rendered document
    /// - `Err(AppError::TemplateErr)` - Unknown template or rendering failure
    pub fn render<T: Serialize>(&self, template: &str, page: T) -> Result<Html<String>, AppError> {
        let template = TEMPLATES.get_template(template)?;

        let html = template.render(context! {
            t => self.locale.catalog(),
            lang => self.locale.code(),
            user => self.user.cloned().map(User::into_dto),
            csrf => self.csrf.as_deref(),
            page => Value::from_serialize(&page),
        })?;

        Ok(Html(html))
    }

    /// Renders a plain status page showing the localized message `key`.
    pub fn message(&self, key: &str) -> Result<Html<String>, AppError> {
        self.render(
            "message.html",
            context! {
                message => self.locale.text(key),
            },
        )
    }
}

/// Renders the error page for a status and an already localized message.
///
/// Falls back to a plain text body if the template itself cannot be rendered.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    let page = Page::new(Locale::default(), None);

    match page.render(
        "error.html",
        context! {
            status => status.as_u16(),
            message => message,
        },
    ) {
        Ok(html) => (status, html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (status, message.to_string()).into_response()
        }
    }
}
