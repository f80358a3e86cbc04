//! # docvault-auth
//!
//! Token and credential primitives for DocVault: HMAC-signed JWTs for
//! sessions and per-recipient document links, and Argon2id password
//! hashing. The signing secret is injected at construction from
//! [`docvault_core::config::auth::AuthConfig`].

pub mod jwt;
pub mod password;

pub use jwt::claims::{DocumentClaims, SessionClaims, TokenKind};
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::hasher::PasswordHasher;
