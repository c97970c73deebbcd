//! HTTP handlers for every resource family and the auth endpoints.
//!
//! Reads are public. Every mutating handler runs `AuthGuard` before touching the
//! payload, then validates the DTO and hands it to the matching service.

pub mod advertisement;
pub mod auth;
pub mod category;
pub mod condition;
pub mod param;
pub mod user;

#[cfg(test)]
mod test;
