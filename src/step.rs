//! Step model: kinds, transforms, descriptors, and registration-time validation.
//!
//! A step is a named unit of work. It is either **plain** — a direct
//! `Option<T> -> Option<T>` transform — or a **factory** — a function that
//! takes options and returns a configured transform. The kind is carried by
//! the [`StepFn`] variant, so classification is static: nothing is ever
//! called just to find out what shape it has.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An already-configured transform held in a handler's pending sequence.
///
/// `None` is the "no value" / "no result" sentinel threaded through every
/// policy; a step that wants to reject its input returns `None`.
pub type Transform<T> = Arc<dyn Fn(Option<T>) -> Option<T> + Send + Sync>;

/// A factory producing a [`Transform`] from per-use options.
pub type Factory<T> = Arc<dyn Fn(T) -> Transform<T> + Send + Sync>;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while registering steps or chaining them on a handler.
///
/// Every failure is raised synchronously and never recovered internally: a
/// failed construction yields no handler at all. Shape errors of the kind a
/// dynamic registry would need (a non-callable step, a non-callable guard)
/// cannot be represented here and so have no variants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A step name is empty or not a usable identifier.
    #[error("step name `{0}` is not a usable identifier")]
    InvalidStepName(String),

    /// A step kind string is neither `plain` nor `factory`.
    #[error("unknown step kind `{0}`; expected `plain` or `factory`")]
    InvalidStepKind(String),

    /// A chained name does not match any registered step.
    #[error("unknown step `{0}`")]
    UnknownStep(String),

    /// A factory step was chained without options.
    #[error("step `{0}` is a factory step and must be configured with options")]
    ExpectedPlain(String),

    /// A plain step was configured with options.
    #[error("step `{0}` is a plain step and takes no options")]
    ExpectedFactory(String),
}

// ============================================================================
// Step Kind
// ============================================================================

/// The shape of a registered step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A direct `Option<T> -> Option<T>` transform.
    Plain,
    /// A function taking options and returning a configured transform.
    Factory,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Factory => f.write_str("factory"),
        }
    }
}

impl FromStr for StepKind {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "factory" => Ok(Self::Factory),
            other => Err(ChainError::InvalidStepKind(other.to_string())),
        }
    }
}

// ============================================================================
// Step Function
// ============================================================================

/// A registered step function: a plain transform or a transform factory.
pub enum StepFn<T: 'static> {
    /// Chained as-is; appended to the pending sequence on lookup.
    Plain(Transform<T>),
    /// Called with options at chain time; the returned transform is appended.
    Factory(Factory<T>),
}

impl<T: 'static> StepFn<T> {
    /// Wrap a plain transform.
    pub fn plain<F>(func: F) -> Self
    where
        F: Fn(Option<T>) -> Option<T> + Send + Sync + 'static,
    {
        Self::Plain(Arc::new(func))
    }

    /// Wrap a factory. The outer function runs once per [`Handler::configure`]
    /// call; the transform it returns is what joins the pending sequence.
    ///
    /// [`Handler::configure`]: crate::Handler::configure
    pub fn factory<F, C>(func: F) -> Self
    where
        F: Fn(T) -> C + Send + Sync + 'static,
        C: Fn(Option<T>) -> Option<T> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move |options| {
            Arc::new(func(options)) as Transform<T>
        }))
    }

    /// The kind this function was registered as.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Plain(_) => StepKind::Plain,
            Self::Factory(_) => StepKind::Factory,
        }
    }
}

impl<T: 'static> Clone for StepFn<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(func) => Self::Plain(Arc::clone(func)),
            Self::Factory(func) => Self::Factory(Arc::clone(func)),
        }
    }
}

impl<T: 'static> fmt::Debug for StepFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StepFn").field(&self.kind()).finish()
    }
}

// ============================================================================
// Step Descriptor
// ============================================================================

/// A validated named step, ready for registration.
///
/// Immutable once constructed: [`StepDescriptor::of`] is the only way in, and
/// it rejects names that are not usable identifiers.
pub struct StepDescriptor<T: 'static> {
    pub(crate) name: Arc<str>,
    pub(crate) func: StepFn<T>,
}

impl<T: 'static> StepDescriptor<T> {
    /// Build a descriptor, validating the name.
    pub fn of(name: impl Into<Arc<str>>, func: StepFn<T>) -> Result<Self, ChainError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self { name, func })
    }

    /// Check that `name` is usable as a step identifier: non-empty, starting
    /// with a letter or `_`, continuing with letters, digits, or `_`.
    pub fn validate(name: &str) -> Result<(), ChainError> {
        let mut chars = name.chars();
        let usable = match chars.next() {
            Some(first) => {
                (first.is_alphabetic() || first == '_')
                    && chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            None => false,
        };
        if usable {
            Ok(())
        } else {
            Err(ChainError::InvalidStepName(name.to_string()))
        }
    }

    /// The step's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The step's kind.
    pub fn kind(&self) -> StepKind {
        self.func.kind()
    }
}

impl<T: 'static> Clone for StepDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            func: self.func.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for StepDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

// ============================================================================
// Step Normalizer
// ============================================================================

/// Step collections accepted by the policy constructors.
///
/// Both ordered pair sequences and keyed mappings are accepted; each form is
/// its own impl, so there is no shape ambiguity to resolve at runtime.
/// Ordering is preserved verbatim — mappings use [`IndexMap`], which keeps
/// insertion order. An empty collection is the canonical "no steps" value.
pub trait IntoSteps<T: 'static> {
    /// Normalize into a validated, ordered descriptor list.
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError>;
}

impl<T: 'static> IntoSteps<T> for Vec<StepDescriptor<T>> {
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError> {
        Ok(self)
    }
}

impl<T: 'static, const N: usize> IntoSteps<T> for [StepDescriptor<T>; N] {
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError> {
        Ok(self.into_iter().collect())
    }
}

impl<T: 'static, K: Into<Arc<str>>> IntoSteps<T> for Vec<(K, StepFn<T>)> {
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError> {
        self.into_iter()
            .map(|(name, func)| StepDescriptor::of(name, func))
            .collect()
    }
}

impl<T: 'static, K: Into<Arc<str>>, const N: usize> IntoSteps<T> for [(K, StepFn<T>); N] {
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError> {
        self.into_iter()
            .map(|(name, func)| StepDescriptor::of(name, func))
            .collect()
    }
}

impl<T: 'static, K: Into<Arc<str>>> IntoSteps<T> for IndexMap<K, StepFn<T>> {
    fn into_steps(self) -> Result<Vec<StepDescriptor<T>>, ChainError> {
        self.into_iter()
            .map(|(name, func)| StepDescriptor::of(name, func))
            .collect()
    }
}
