//! Independent instantiations of the generic contracts at different types.

use strand_components::{math::Factorial, search::CountMatching, text::Reverse};
use strand_core::{apply, count};

#[test]
fn one_transform_contract_serves_numbers_and_strings_at_once() {
    let factorial = Factorial::<u64>::new();
    let reverse = Reverse;

    // Both bindings are live at the same time; neither affects the other.
    assert_eq!(apply(&factorial, 5), 120);
    assert_eq!(apply(&reverse, "Lambda Expression".to_string()), "noisserpxE adbmaL");
    assert_eq!(apply(&factorial, 8), 40320);
}

#[test]
fn one_search_contract_serves_numbers_and_strings_at_once() {
    let count_ints = CountMatching::new();
    let count_strs = CountMatching::new();

    assert_eq!(count(&count_ints, &[1, 2, 3, 4, 2, 3, 4, 4, 5], &4), 3);
    assert_eq!(count(&count_strs, &["One", "Two", "Three", "Two"], &"Two"), 2);
    assert_eq!(count(&count_ints, &[4, 4], &4), 2);
}

#[test]
fn transforms_compose_through_repeated_invocation() {
    let reverse = Reverse;
    let original = "palindrome-free".to_string();

    let once = apply(&reverse, original.clone());
    let twice = apply(&reverse, once);

    assert_eq!(twice, original);
}
