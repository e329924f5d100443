//! Auth Gate: 全ての保護ルートの前段で
//! 「内部呼び出し (bypass)」か「有効な Bearer JWT」かを判定し、Identity を request extensions に載せる。
//!
//! - 判定ロジック本体は [`AuthGate::authenticate`] (HTTP サーバー不要で呼べる)
//! - axum への組み込みは [`apply`]、handler 側の受け取りは [`AuthCtx`]
//!
//! NOTE: `X-Internal-Service` ヘッダは値を検証しない。ネットワーク内部から到達できる
//! 呼び出し元は誰でも認証を素通りできる (互換性のため維持。`INTERNAL_BYPASS=off` で無効化可)。

mod bearer;
mod config;
mod error;
mod extractor;
mod gate;
mod identity;
mod middleware;
mod verifier;

pub use bearer::extract_bearer;
pub use config::{
    AuthConfig, DEFAULT_INTERNAL_HEADER, DEFAULT_JWT_SECRET, internal_header_from_lookup,
};
pub use error::{AuthError, AuthErrorKind};
pub use extractor::AuthCtx;
pub use gate::AuthGate;
pub use identity::{Claims, Identity, IdentitySource};
pub use middleware::apply;
pub use verifier::TokenVerifier;
