//! Validation of submitted bot forms.
//!
//! Field checks are pure; confirming that the id belongs to a Discord bot account goes
//! through a `BotDirectory`.

use thiserror::Error;
use url::Url;

use crate::{
    model::bot::BotFormDto,
    server::{
        error::AppError,
        model::bot::{BotContent, DescriptionFormat},
        service::discord::BotDirectory,
    },
};

const MAX_NAME_CHARS: usize = 32;
const MAX_SHORT_DESC_CHARS: usize = 200;
const MAX_LONG_DESC_CHARS: usize = 20_000;

/// Why a submitted form was refused.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A field is malformed. Carries the message key describing the problem.
    #[error("invalid form field: {0}")]
    Field(&'static str),

    /// The id is well formed but is not a Discord bot account.
    #[error("client id does not belong to a bot account")]
    NotABot,

    /// The directory could not be consulted.
    #[error(transparent)]
    Upstream(#[from] AppError),
}

impl ValidationError {
    /// Message key to show next to the form, or the underlying error when the failure
    /// is not the user's.
    pub fn into_message_key(self) -> Result<&'static str, AppError> {
        match self {
            Self::Field(key) => Ok(key),
            Self::NotABot => Ok("error_not_a_bot"),
            Self::Upstream(err) => Err(err),
        }
    }
}

/// Parses a Discord snowflake: 17 to 20 decimal digits without a leading zero.
pub fn parse_snowflake(value: &str) -> Option<u64> {
    let value = value.trim();

    if !(17..=20).contains(&value.len())
        || value.starts_with('0')
        || !value.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    value.parse::<u64>().ok().filter(|id| *id != 0)
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

/// Checks the editable fields of a form.
pub fn check_content(form: &BotFormDto) -> Result<BotContent, ValidationError> {
    let name = form.name.trim();
    let name_len = name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_CHARS {
        return Err(ValidationError::Field("error_invalid_name"));
    }

    let avatar = form.avatar.trim();
    if !is_web_url(avatar) {
        return Err(ValidationError::Field("error_invalid_avatar"));
    }

    let invite = form.invite.trim();
    if !is_web_url(invite) {
        return Err(ValidationError::Field("error_invalid_invite"));
    }

    let count = form
        .count
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|count| *count >= 0)
        .ok_or(ValidationError::Field("error_invalid_count"))?;

    let short_desc = form.short_desc.trim();
    let short_len = short_desc.chars().count();
    if short_len == 0 || short_len > MAX_SHORT_DESC_CHARS {
        return Err(ValidationError::Field("error_invalid_short_desc"));
    }

    if form.long_desc.chars().count() > MAX_LONG_DESC_CHARS {
        return Err(ValidationError::Field("error_invalid_long_desc"));
    }

    let format = DescriptionFormat::parse(form.kind.trim())
        .ok_or(ValidationError::Field("error_invalid_type"))?;

    Ok(BotContent {
        name: name.to_string(),
        avatar: avatar.to_string(),
        invite: invite.to_string(),
        count,
        short_desc: short_desc.to_string(),
        long_desc: form.long_desc.clone(),
        format,
    })
}

pub struct BotValidator<'a> {
    directory: &'a dyn BotDirectory,
}

impl<'a> BotValidator<'a> {
    pub fn new(directory: &'a dyn BotDirectory) -> Self {
        Self { directory }
    }

    /// Validates a new submission, including the directory lookup of its id.
    ///
    /// # Returns
    /// - `Ok((id, content))` - The form is acceptable
    /// - `Err(ValidationError::Field)` - A field is malformed
    /// - `Err(ValidationError::NotABot)` - The id is not a bot account
    /// - `Err(ValidationError::Upstream)` - Discord could not be consulted
    pub async fn validate_submission(
        &self,
        form: &BotFormDto,
    ) -> Result<(u64, BotContent), ValidationError> {
        let id = parse_snowflake(&form.id).ok_or(ValidationError::Field("error_invalid_id"))?;
        let content = check_content(form)?;

        if !self.directory.is_bot(id).await? {
            return Err(ValidationError::NotABot);
        }

        Ok((id, content))
    }

    /// Validates an edit. The id comes from the path and is not re-checked.
    pub fn validate_edit(&self, form: &BotFormDto) -> Result<BotContent, ValidationError> {
        check_content(form)
    }
}
