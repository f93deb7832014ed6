//! The `steps!` declaration macro.

/// Declare a step set as `name: kind closure` entries.
///
/// Expands to a `Vec<(&'static str, StepFn<T>)>` suitable for any policy
/// constructor. Names are identifiers by construction, so a macro-declared
/// set cannot fail name validation. `kind` is `plain` or `factory`:
///
/// ```
/// use relay::{map, steps};
///
/// let chain = map(steps! {
///     add_one: plain |x: Option<i64>| x.map(|v| v + 1),
///     add: factory |v: i64| move |x: Option<i64>| x.map(|n| n + v),
/// })?;
///
/// assert_eq!(chain.step("add_one")?.apply("add", 2, Some(5))?, Some(8));
/// # Ok::<(), relay::ChainError>(())
/// ```
#[macro_export]
macro_rules! steps {
    (@step plain $func:expr) => {
        $crate::StepFn::plain($func)
    };
    (@step factory $func:expr) => {
        $crate::StepFn::factory($func)
    };
    ($($name:ident : $kind:ident $func:expr),* $(,)?) => {
        ::std::vec![$(
            (::std::stringify!($name), $crate::steps!(@step $kind $func))
        ),*]
    };
}
