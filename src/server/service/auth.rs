use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

/// Service for the Discord OAuth2 login flow.
///
/// Owns the exchange of the authorization code, the lookup of the logged in Discord
/// account and the upsert of the matching `user` row.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Discord ids granted admin on login.
    pub admin_ids: &'a [u64],
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        admin_ids: &'a [u64],
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_ids,
        }
    }

    /// Discord authorize URL plus the `state` value the callback must echo back.
    ///
    /// Only the `identify` scope is requested; the listing needs nothing beyond the
    /// user's id, name and avatar.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback and records the user.
    ///
    /// Exchanges the authorization code for an access token, fetches the Discord account
    /// and upserts it. Accounts listed in `admin_ids` are granted admin; for everyone else
    /// the stored flag is left as it is.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in user with refreshed profile
    /// - `Err(AuthError::TokenExchange)` - OAuth2 token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the account from Discord
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token_response = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token_response).await?;
        let discord_id = discord_user.id.get();
        let grant_admin = self.admin_ids.contains(&discord_id);

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id,
                avatar: discord_user.avatar_url(),
                name: discord_user.name,
                is_admin: grant_admin.then_some(true),
            })
            .await?;

        if grant_admin {
            tracing::info!("User {} has been set as admin", user.name);
        }

        Ok(user)
    }

    /// Retrieves the Discord account the access token belongs to.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let account = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(account)
    }
}
