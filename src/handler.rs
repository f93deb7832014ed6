//! The handler: step table, pending sequence, and the chain lifecycle.
//!
//! A [`Handler`] is built once from a step set and a policy, then used many
//! times. Each use is one logical chain: look up steps by name to accumulate
//! their transforms, then invoke [`Handler::call`] to drain the accumulated
//! sequence and reduce it against an input. The sequence is swapped out
//! before the policy runs, so a transform that re-enters the same handler
//! never sees the outer chain's pending steps.

use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::policy::Policy;
use crate::step::{ChainError, IntoSteps, StepFn, Transform};

/// A callable pipeline over a fixed set of named steps.
///
/// The step table and policy are immutable after construction; the pending
/// sequence is the only mutable state, and it lives exactly as long as one
/// chain (it is emptied by every [`Handler::call`], whatever the outcome).
///
/// Chains are meant to be built and invoked as one uninterrupted run on one
/// logical thread. Sharing a handler across threads is safe in the memory
/// sense (`Handler<T>: Send + Sync`), but two callers interleaving partial
/// chains will merge their steps — that race is the caller's to avoid.
pub struct Handler<T: 'static> {
    steps: IndexMap<Arc<str>, StepFn<T>>,
    sequence: Mutex<Vec<Transform<T>>>,
    policy: Policy<T>,
}

impl<T: 'static> Handler<T> {
    /// Register a normalized step set under the given policy.
    ///
    /// Fail-fast: the first invalid descriptor aborts construction and no
    /// handler is returned. A later descriptor reusing a name replaces the
    /// earlier function but keeps its registration position.
    pub(crate) fn new<S>(policy: Policy<T>, steps: S) -> Result<Self, ChainError>
    where
        S: IntoSteps<T>,
    {
        let descriptors = steps.into_steps()?;
        let mut table = IndexMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            table.insert(descriptor.name, descriptor.func);
        }
        Ok(Self {
            steps: table,
            sequence: Mutex::new(Vec::new()),
            policy,
        })
    }

    /// Chain a plain step: append its transform to the pending sequence and
    /// return `self` for further chaining or the terminal [`Handler::call`].
    ///
    /// Fails with [`ChainError::UnknownStep`] for an unregistered name and
    /// [`ChainError::ExpectedPlain`] if the step is a factory.
    pub fn step(&self, name: &str) -> Result<&Self, ChainError> {
        match self.steps.get(name) {
            Some(StepFn::Plain(func)) => {
                self.sequence.lock().push(Arc::clone(func));
                Ok(self)
            }
            Some(StepFn::Factory(_)) => Err(ChainError::ExpectedPlain(name.to_string())),
            None => Err(ChainError::UnknownStep(name.to_string())),
        }
    }

    /// Chain a factory step: run the factory with `options`, append the
    /// configured transform, and return `self`.
    ///
    /// Fails with [`ChainError::UnknownStep`] for an unregistered name and
    /// [`ChainError::ExpectedFactory`] if the step is plain.
    pub fn configure(&self, name: &str, options: T) -> Result<&Self, ChainError> {
        match self.steps.get(name) {
            Some(StepFn::Factory(func)) => {
                let configured = func(options);
                self.sequence.lock().push(configured);
                Ok(self)
            }
            Some(StepFn::Plain(_)) => Err(ChainError::ExpectedFactory(name.to_string())),
            None => Err(ChainError::UnknownStep(name.to_string())),
        }
    }

    /// Number of transforms currently pending. Zero after every [`Handler::call`].
    pub fn pending(&self) -> usize {
        self.sequence.lock().len()
    }
}

impl<T: Clone + 'static> Handler<T> {
    /// Invoke the pipeline: drain the pending sequence and reduce it against
    /// `input` under this handler's policy.
    ///
    /// The sequence is replaced with a fresh empty one *before* the policy
    /// runs, never after; nested or subsequent calls cannot observe stale
    /// steps. With nothing pending, `map` and `every` return the input
    /// unchanged (`None` in, `None` out) and `some` returns `None`.
    pub fn call(&self, input: Option<T>) -> Option<T> {
        let sequence = std::mem::take(&mut *self.sequence.lock());
        self.policy.reduce(&sequence, input)
    }

    /// Chain a factory step and invoke in one go: the tail-call form.
    ///
    /// `handler.apply(name, options, input)` behaves exactly like
    /// `handler.configure(name, options)?.call(input)`.
    pub fn apply(&self, name: &str, options: T, input: Option<T>) -> Result<Option<T>, ChainError> {
        self.configure(name, options)?;
        Ok(self.call(input))
    }
}
