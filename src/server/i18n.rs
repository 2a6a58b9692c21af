//! Message catalogs and locale negotiation.
//!
//! User facing text is looked up by key in JSON catalogs embedded at build time. Lookups
//! fall back to English, then to the key itself.

use std::{collections::HashMap, convert::Infallible, sync::LazyLock};

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};

type Catalog = HashMap<String, String>;

static EN: LazyLock<Catalog> =
    LazyLock::new(|| load_catalog("en", include_str!("../../locales/en.json")));
static FR: LazyLock<Catalog> =
    LazyLock::new(|| load_catalog("fr", include_str!("../../locales/fr.json")));

fn load_catalog(code: &str, source: &str) -> Catalog {
    serde_json::from_str(source).unwrap_or_else(|e| {
        tracing::error!("Failed to parse {} message catalog: {}", code, e);
        HashMap::new()
    })
}

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Self::En, Self::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Matches a language tag such as `fr` or `fr-CA` by its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split('-').next()?.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }

    /// Picks the supported language the client prefers most from an `Accept-Language`
    /// header value.
    ///
    /// Entries are ordered by their `q` weight, entries with `q=0` are ignored and ties
    /// keep header order. Anything unparsable falls back to English.
    pub fn negotiate(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };

        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let weight = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                    .unwrap_or(1.0);
                (!tag.is_empty() && weight > 0.0).then_some((tag, weight))
            })
            .collect();

        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .into_iter()
            .find_map(|(tag, _)| Self::from_tag(tag))
            .unwrap_or_default()
    }

    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Self::En => &EN,
            Self::Fr => &FR,
        }
    }

    /// Looks up a message by key.
    pub fn text(&self, key: &str) -> String {
        self.catalog()
            .get(key)
            .or_else(|| EN.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(Self::negotiate(header))
    }
}
