//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shape of every request and response body. Server-side
//! domain models live in `server::model` and convert to and from these DTOs at the
//! controller boundary.

pub mod api;
pub mod order;
pub mod product;
pub mod user;
