//! Transform-all policy tests.

use super::common::{arithmetic, calculator, mixed};
use crate::step::{ChainError, StepDescriptor};
use crate::map;

/// A handler with nothing accumulated passes any input through unchanged.
#[test]
fn empty_chain_is_identity() {
    let chain = map(arithmetic()).unwrap();

    assert_eq!(chain.call(None), None);
    assert_eq!(chain.call(Some(5)), Some(5));
    assert_eq!(chain.call(Some(-3)), Some(-3));
}

/// A handler over zero steps is still a valid identity pipeline.
#[test]
fn empty_step_set_is_identity() {
    let chain = map(Vec::<StepDescriptor<i64>>::new()).unwrap();

    assert_eq!(chain.call(Some(5)), Some(5));
    assert_eq!(chain.call(None), None);
}

/// Plain steps compose left to right in chain order.
#[test]
fn applies_plain_steps_in_chain_order() {
    let chain = map(arithmetic()).unwrap();

    assert_eq!(chain.step("add_one").unwrap().call(Some(5)), Some(6));
    assert_eq!(
        chain.step("add_one").unwrap().step("double").unwrap().call(Some(5)),
        Some(12)
    );
    assert_eq!(
        chain.step("double").unwrap().step("add_one").unwrap().call(Some(5)),
        Some(11)
    );
}

/// Factory steps configured inline, with and without the tail-call form.
#[test]
fn applies_factory_steps() {
    let chain = map(calculator()).unwrap();

    assert_eq!(chain.apply("add", 2, Some(8)).unwrap(), Some(10));
    assert_eq!(
        chain
            .configure("add", 2)
            .unwrap()
            .apply("multiply", 3, Some(4))
            .unwrap(),
        Some(18)
    );
}

/// Plain and factory steps interleave freely in one chain.
#[test]
fn applies_mixed_steps() {
    let chain = map(mixed()).unwrap();

    let result = chain
        .step("add_one")
        .unwrap()
        .configure("multiply", 3)
        .unwrap()
        .step("double")
        .unwrap()
        .apply("add", 10, Some(8))
        .unwrap();

    // (8 + 1) * 3 * 2 + 10
    assert_eq!(result, Some(64));
}

/// Construction fails fast on a bad step name; no handler is returned.
#[test]
fn rejects_invalid_step_names() {
    let result = map(vec![(
        "not a name",
        crate::StepFn::plain(|x: Option<i64>| x),
    )]);

    assert_eq!(
        result.err(),
        Some(ChainError::InvalidStepName("not a name".to_string()))
    );
}
