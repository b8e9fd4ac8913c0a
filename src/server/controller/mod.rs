//! HTTP request handlers.
//!
//! Controllers extract path, query, and body parameters, convert DTOs into server
//! parameter models, call the matching service, and convert the result back into a
//! response. Each handler is annotated with `utoipa::path` so the OpenAPI document
//! is generated from the same signatures the router uses.

pub mod brainstorm_session;
pub mod idea;

#[cfg(test)]
mod test;
