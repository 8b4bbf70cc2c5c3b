//! Secure handling of secret material

pub mod secret;

pub use secret::{SecretBuffer, ZeroizeGuard};
