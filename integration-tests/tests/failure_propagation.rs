//! Failure propagation from a behavior, through the invoker, to the caller.

use approx::assert_relative_eq;
use strand_components::stats::{EmptyInput, Mean};
use strand_core::{reduce, reduce_fn, Reduce};

#[test]
fn mean_succeeds_on_non_empty_input() {
    let mean = Mean::new();
    assert_relative_eq!(
        reduce(&mean, &[1.0, 2.0, 3.0, 4.0]).unwrap(),
        2.5,
        epsilon = 1e-12
    );
}

#[test]
fn mean_failure_passes_through_the_invoker_unchanged() {
    let mean = Mean::<f64>::new();
    assert_eq!(reduce(&mean, &[]), Err(EmptyInput));
}

#[test]
fn failure_propagates_with_the_question_mark_operator() {
    fn average_or_bail(items: &[f64]) -> Result<f64, EmptyInput> {
        let value = reduce(&Mean::new(), items)?;
        Ok(value)
    }

    assert_eq!(average_or_bail(&[5.0]), Ok(5.0));
    assert_eq!(average_or_bail(&[]), Err(EmptyInput));
}

#[test]
fn closure_behaviors_use_the_same_failure_channel() {
    let first = reduce_fn(|items: &[f64]| items.first().copied().ok_or(EmptyInput));

    assert_eq!(reduce(&first, &[9.0, 8.0]), Ok(9.0));
    assert_eq!(reduce(&first, &[]), Err(EmptyInput));
}

#[test]
fn the_failure_kind_is_a_standard_error() {
    let failure: Box<dyn std::error::Error> = Box::new(EmptyInput);
    assert_eq!(failure.to_string(), "empty input sequence");
}

#[test]
fn boxed_reduce_behaviors_rebind_like_any_other_contract() {
    let mut fold: Box<dyn Reduce<Item = f64, Output = f64, Error = EmptyInput>> =
        Box::new(Mean::new());
    assert_eq!(reduce(fold.as_ref(), &[2.0, 4.0]), Ok(3.0));

    fold = Box::new(reduce_fn(|items: &[f64]| {
        items.last().copied().ok_or(EmptyInput)
    }));
    assert_eq!(reduce(fold.as_ref(), &[2.0, 4.0]), Ok(4.0));
}
