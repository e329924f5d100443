//! Auth gate を axum の middleware として Router に掛ける。
//!
//! ```ignore
//! let protected = Router::new().route("/check", get(check));
//! let protected = auth::apply(protected, state.auth.clone());
//! ```

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use super::{AuthError, AuthGate};

/// Installs the gate on every route currently registered on `router`.
///
/// Uses `route_layer`, so unknown paths still answer 404 instead of 401.
pub fn apply<S>(router: Router<S>, gate: AuthGate) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(gate, gate_middleware))
}

async fn gate_middleware(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = match gate.authenticate(req.headers()) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                method = %req.method(),
                path = %req.uri().path(),
                "request rejected by auth gate"
            );
            return Err(err);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
