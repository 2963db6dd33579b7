//! Resource integration tests
//!
//! Construction and typed access are tested separately from schema
//! validation.
