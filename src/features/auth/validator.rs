use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Validates HS256 bearer tokens issued by the identity provider.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.clone()]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            name: data.claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::Duration;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-test-secret-test-secret!".to_string(),
            issuer: "faistroquer".to_string(),
            jwt_leeway: Duration::from_secs(60),
        }
    }

    fn token_for(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_user() {
        let cfg = config();
        let user_id = Uuid::new_v4();
        let claims = Claims {
            sub: user_id.to_string(),
            name: "Margaux".to_string(),
            iss: "faistroquer".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = token_for(&claims, &cfg.jwt_secret);

        let user = JwtValidator::new(&cfg).validate_token(&token).unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "Margaux");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let cfg = config();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            name: "Margaux".to_string(),
            iss: "faistroquer".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = token_for(&claims, "another-secret-another-secret-00000");

        assert!(JwtValidator::new(&cfg).validate_token(&token).is_err());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let cfg = config();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            name: "Margaux".to_string(),
            iss: "faistroquer".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = token_for(&claims, &cfg.jwt_secret);

        assert!(JwtValidator::new(&cfg).validate_token(&token).is_err());
    }
}
