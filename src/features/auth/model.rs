use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity attached to the request after bearer token validation.
///
/// Tokens are issued by the external identity provider; `sub` carries the
/// user's database id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
}

/// Claims expected in a FAISTROQUER access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID)
    pub sub: String,
    /// Display name
    pub name: String,
    pub iss: String,
    pub exp: i64,
}
