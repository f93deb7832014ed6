#![deny(missing_docs)]

//! Relay — named, chainable processing steps composed into callable pipelines.
//!
//! # Design Goals
//!
//! Relay turns a set of named transform functions into a single [`Handler`]
//! with a fluent chain-of-responsibility surface:
//!
//! - **Named steps**: every step is registered under an identifier and resolved
//!   by name at chain time
//! - **Explicit kinds**: a step is either a plain transform or a factory that
//!   builds a transform from options; the kind is carried in the type, so no
//!   step function is ever probed or invoked during registration
//! - **Three policies**: `map` threads a value through every step, `every`
//!   aborts on the first result rejected by a guard, `some` returns the first
//!   result a guard accepts
//!
//! # Core Concepts
//!
//! - [`StepFn`]: a plain transform or a factory, the unit of registration
//! - [`Handler`]: the stateful pipeline; chaining [`Handler::step`] and
//!   [`Handler::configure`] accumulates transforms, [`Handler::call`] drains
//!   and reduces them against an input
//! - [`steps!`]: declares a step set without spelling out the plumbing
//!
//! # Example
//!
//! ```
//! use relay::{map, steps};
//!
//! let chain = map(steps! {
//!     add_one: plain |x: Option<i64>| x.map(|v| v + 1),
//!     double: plain |x: Option<i64>| x.map(|v| v * 2),
//! })?;
//!
//! assert_eq!(chain.step("add_one")?.step("double")?.call(Some(5)), Some(12));
//! # Ok::<(), relay::ChainError>(())
//! ```

// Modules
pub mod handler;
mod macros;
pub mod policy;
pub mod predicate;
pub mod step;

// Re-exports for convenience
pub use handler::Handler;
pub use policy::{every, every_with, map, some, some_with};
pub use predicate::{is_non_null, is_null, Guard};
pub use step::{ChainError, Factory, IntoSteps, StepDescriptor, StepFn, StepKind, Transform};

#[cfg(test)]
mod tests;
