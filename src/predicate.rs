//! Guard predicates used by the `every` and `some` policies.

use std::sync::Arc;

/// A guard applied to step results: `true` accepts the value, `false` rejects
/// it. What a rejection means depends on the policy — `every` aborts, `some`
/// keeps looking.
pub type Guard<T> = Arc<dyn Fn(&Option<T>) -> bool + Send + Sync>;

/// Accepts any present value. The default guard for `every` and `some`.
pub fn is_non_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Accepts only the absent value. The inverse convenience guard.
pub fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}
