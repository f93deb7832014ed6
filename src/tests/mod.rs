//! Tests for the relay chain pipeline.
//!
//! ## Test Organization
//!
//! - `common`: Shared step sets used across policies
//! - `map`: Transform-all policy tests
//! - `every`: All-must-pass policy and guard tests
//! - `some`: First-match policy and guard tests
//! - `handler`: Chain lifecycle, reset, and lookup-error tests
//! - `step`: Descriptor, kind, and normalizer validation tests
//!
//! ## Test Step Sets
//!
//! Most tests use a small arithmetic domain over `i64`:
//! - `add_one`, `double`: plain transforms
//! - `add`, `multiply`: factories configured with an operand
//!
//! Mixed-type coercion tests use `serde_json::Value` payloads.

mod common;

mod map;
