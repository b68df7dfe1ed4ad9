//! Request authentication helpers.
//!
//! `AuthSession` gives typed access to the login identity in the session, and
//! `AuthGuard` turns that identity into an active user with the permissions an
//! endpoint requires.

pub mod auth;
pub mod session;
