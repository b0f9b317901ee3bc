//! # amoria-auth
//!
//! JWT issuing and verification for the Amoria backend.
//!
//! Amoria does not manage identities; login happens elsewhere and hands the
//! client an HS256 access token. This crate defines the claims contract
//! (member, session, role) and the encode/decode pair built on it.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
