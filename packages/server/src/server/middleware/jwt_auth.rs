use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

use crate::domains::auth::{Identity, JwtService};

/// JWT authentication middleware
///
/// Extracts the JWT from the Authorization header, verifies it, and adds the
/// resolved Identity to request extensions. If no token or an invalid token,
/// the request continues unauthenticated (public routes still work).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = extract_identity(&request, &jwt_service);

    if let Some(identity) = identity {
        debug!(
            "Authenticated user: {} ({})",
            identity.user_id, identity.email
        );
        request.extensions_mut().insert(identity);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the JWT from the request
fn extract_identity(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<Identity> {
    // Get Authorization header
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Extract token (handle both "Bearer <token>" and raw token)
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    // Verify token
    let claims = jwt_service.verify_token(token).ok()?;

    Some(Identity::from(claims))
}
