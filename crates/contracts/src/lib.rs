//! Wire types and pure domain logic shared by the back-office frontend.
//!
//! The backend itself lives in a separate service; this crate only pins
//! down the JSON shapes it exchanges and the client-side rules applied
//! before a request is sent.

pub mod domain;
pub mod shared;
