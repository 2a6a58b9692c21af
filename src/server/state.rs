//! Shared handles given to every handler through axum's `State` extractor.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{discord::BotDirectory, notification::NotificationDispatcher};

/// Discord OAuth2 client with the authorize, token and redirect endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Built once in `main` and cloned per request; every field is a pool, an `Arc` or a
/// channel sender, so clones share the underlying resource.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Used for the token exchange and `/users/@me`. Never follows redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Confirms that submitted ids belong to Discord bot accounts.
    pub directory: Arc<dyn BotDirectory>,

    /// Queue of moderation events for the Discord log.
    pub notifications: NotificationDispatcher,

    /// Discord ids granted admin when they log in.
    pub admin_ids: Arc<Vec<u64>>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        directory: Arc<dyn BotDirectory>,
        notifications: NotificationDispatcher,
        admin_ids: Vec<u64>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            directory,
            notifications,
            admin_ids: Arc::new(admin_ids),
        }
    }
}
