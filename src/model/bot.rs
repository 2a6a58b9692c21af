use serde::{Deserialize, Serialize};

/// Fields posted by the add and edit forms.
///
/// Every field defaults to empty so that a missing input surfaces as a validation
/// message instead of a rejected request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BotFormDto {
    #[serde(rename = "_csrf", skip_serializing)]
    pub csrf: String,
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub invite: String,
    pub count: String,
    #[serde(rename = "shortDesc")]
    pub short_desc: String,
    #[serde(rename = "longDesc")]
    pub long_desc: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of the moderation removal form.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RemoveBotDto {
    #[serde(rename = "_csrf", default)]
    pub csrf: String,
    pub reason: Option<String>,
    pub description: Option<String>,
}

/// Body of forms that carry nothing but the CSRF token.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CsrfDto {
    #[serde(rename = "_csrf", default)]
    pub csrf: String,
}

/// Public view of a bot. Carries no token.
#[derive(Serialize, Clone, Debug)]
pub struct BotDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub invite: String,
    pub count: i64,
    pub short_desc: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub owner: String,
    pub approved: bool,
    pub timestamp: i64,
}

/// A selectable removal reason with its localized label.
#[derive(Serialize, Clone, Debug)]
pub struct RemovalReasonDto {
    pub key: String,
    pub label: String,
}
