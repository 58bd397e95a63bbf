//! Axum extractors resolving the bearer token to a caller identity

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::db;
use crate::error::AppError;
use crate::models::role::Role;
use crate::models::user::User;
use crate::state::AppState;

use super::jwt;

/// Authenticated caller resolved from `Authorization: Bearer <token>`.
///
/// Rejects with 401 on a missing/invalid token or when the claimed
/// subject has no matching user record.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub roles: Vec<Role>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r.name == "ADMIN")
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization format"))?;

        let claims = jwt::decode_token(token, &state.jwt_secret)?;

        let user = db::users::find_by_username(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token"))?;
        let roles = db::users::roles_of(&state.pool, user.id).await?;

        Ok(CurrentUser { user, roles })
    }
}

/// Role gate: an authenticated caller holding ADMIN (case-sensitive),
/// rejecting with 403 otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = CurrentUser::from_request_parts(parts, state).await?;
        if !caller.is_admin() {
            return Err(AppError::forbidden("Admin privileges required"));
        }
        Ok(AdminUser(caller))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Ana".into(),
            phone_number: "3001234567".into(),
            email: "ana@example.com".into(),
            username: "ana".into(),
            password: "hash".into(),
            address: "Calle 1".into(),
            enabled: true,
        }
    }

    #[test]
    fn admin_check_is_case_sensitive() {
        let caller = CurrentUser {
            user: user(),
            roles: vec![Role {
                id: 1,
                name: "admin".into(),
            }],
        };
        assert!(!caller.is_admin());
    }

    #[test]
    fn any_role_named_admin_passes() {
        let caller = CurrentUser {
            user: user(),
            roles: vec![
                Role {
                    id: 2,
                    name: "CUSTOMER".into(),
                },
                Role {
                    id: 1,
                    name: "ADMIN".into(),
                },
            ],
        };
        assert!(caller.is_admin());
    }
}
