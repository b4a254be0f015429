use uuid::Uuid;

use super::Claims;
use crate::models::Role;

/// Verified identity attached to request extensions by the authentication
/// middleware. Handlers take this via `Extension<CurrentUser>`; it is only
/// ever constructed from verified token claims.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub role: Role,
    /// Customer record bound to a Client account, if any.
    pub customer_id: Option<Uuid>,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
            customer_id: claims.customer_id,
        }
    }
}
