//! Consumption policies and the public pipeline constructors.
//!
//! A policy is the reduction rule a [`Handler`] applies to its drained
//! sequence of transforms and an input value. It is chosen at construction
//! time and fixed for the handler's lifetime:
//!
//! - [`map`]: thread the value through every transform, in order
//! - [`every`]: thread the value, but abort with `None` the first time a
//!   guard rejects an intermediate result
//! - [`some`]: apply each transform to the *original* input and return the
//!   first result the guard accepts
//!
//! `some` deliberately does not thread a running value: it picks the first
//! matching transformation of the input, not the first passing stage of a
//! pipeline.

use std::sync::Arc;

use crate::handler::Handler;
use crate::predicate::{is_non_null, Guard};
use crate::step::{ChainError, IntoSteps, Transform};

/// The reduction rule fixed at handler construction.
pub(crate) enum Policy<T: 'static> {
    /// Transform-all: left fold, no short-circuiting.
    Map,
    /// All-must-pass: left fold, abort on the first guard rejection.
    Every(Guard<T>),
    /// First-match: each transform sees the original input.
    First(Guard<T>),
}

impl<T: Clone + 'static> Policy<T> {
    /// Reduce a drained sequence against an input.
    ///
    /// The empty sequence is handled here, not by the caller: folds yield the
    /// input unchanged, first-match yields `None`.
    pub(crate) fn reduce(&self, sequence: &[Transform<T>], input: Option<T>) -> Option<T> {
        match self {
            Self::Map => sequence.iter().fold(input, |value, func| func(value)),
            Self::Every(guard) => {
                let mut value = input;
                for func in sequence {
                    value = func(value);
                    if !guard(&value) {
                        return None;
                    }
                }
                value
            }
            Self::First(guard) => {
                for func in sequence {
                    let value = func(input.clone());
                    if guard(&value) {
                        return value;
                    }
                }
                None
            }
        }
    }
}

/// Build a transform-all pipeline.
///
/// Invoking the handler applies every accumulated transform in chain order,
/// each to the previous result. With nothing accumulated the input passes
/// through unchanged.
///
/// ```
/// use relay::{map, steps};
///
/// let chain = map(steps! {
///     add_one: plain |x: Option<i64>| x.map(|v| v + 1),
///     double: plain |x: Option<i64>| x.map(|v| v * 2),
/// })?;
///
/// assert_eq!(chain.step("double")?.step("add_one")?.call(Some(5)), Some(11));
/// assert_eq!(chain.call(Some(5)), Some(5));
/// # Ok::<(), relay::ChainError>(())
/// ```
pub fn map<T: 'static, S>(steps: S) -> Result<Handler<T>, ChainError>
where
    S: IntoSteps<T>,
{
    Handler::new(Policy::Map, steps)
}

/// Build an all-must-pass pipeline with the default guard ([`is_non_null`]).
///
/// Invoking the handler threads the input through the accumulated transforms;
/// the first intermediate result the guard rejects aborts the run with
/// `None`, and later transforms do not execute.
pub fn every<T: 'static, S>(steps: S) -> Result<Handler<T>, ChainError>
where
    S: IntoSteps<T>,
{
    every_with(steps, is_non_null)
}

/// Build an all-must-pass pipeline with a caller-supplied guard.
pub fn every_with<T: 'static, S, G>(steps: S, guard: G) -> Result<Handler<T>, ChainError>
where
    S: IntoSteps<T>,
    G: Fn(&Option<T>) -> bool + Send + Sync + 'static,
{
    Handler::new(Policy::Every(Arc::new(guard)), steps)
}

/// Build a first-match pipeline with the default guard ([`is_non_null`]).
///
/// Invoking the handler applies each accumulated transform to the original
/// input and returns the first result the guard accepts; if none is
/// accepted — including when nothing was accumulated — the result is `None`.
pub fn some<T: 'static, S>(steps: S) -> Result<Handler<T>, ChainError>
where
    S: IntoSteps<T>,
{
    some_with(steps, is_non_null)
}

/// Build a first-match pipeline with a caller-supplied guard.
pub fn some_with<T: 'static, S, G>(steps: S, guard: G) -> Result<Handler<T>, ChainError>
where
    S: IntoSteps<T>,
    G: Fn(&Option<T>) -> bool + Send + Sync + 'static,
{
    Handler::new(Policy::First(Arc::new(guard)), steps)
}
