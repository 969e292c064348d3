//! A guided tour of the Strand contracts.
//!
//! One entry point walks through each contract in turn: binding closures and
//! named behaviors to contract-typed references, rebinding those references,
//! invoking behaviors through the generic invokers, and handling the one
//! domain failure a behavior can raise.
//!
//! ```sh
//! cargo run -p strand-examples
//! ```

use std::error::Error;

use strand_components::{
    math::{Factorial, MultipleOf},
    search::CountMatching,
    stats::Mean,
    text::Reverse,
};
use strand_core::{
    apply, count, predicate_fn, produce, reduce, source_fn, test, transform_fn, Source,
};

fn main() -> Result<(), Box<dyn Error>> {
    // A constant-returning behavior bound to a Source-typed reference.
    let mut number: Box<dyn Source<Output = f64>> = Box::new(source_fn(|| 12345.678));
    println!("Fixed value: {}", produce(number.as_ref()));

    // Rebind the same reference to a different behavior. The capture is
    // read-only: `base` cannot be reassigned from inside the closure.
    let base = 4.2_f64;
    number = Box::new(source_fn(move || base * 2.0));
    println!("Computed value: {}", produce(number.as_ref()));

    // Single- and two-operand predicates.
    let is_even = predicate_fn(|n: i64| n % 2 == 0);
    println!("Is 10 even? {}", test(&is_even, 10));
    println!("Is 9 even? {}", test(&is_even, 9));
    println!("Is 10 a multiple of 5? {}", test(&MultipleOf, (10, 5)));
    println!("Is 10 a multiple of 3? {}", test(&MultipleOf, (10, 3)));

    // A block-bodied numeric transform and a string transform.
    let factorial = Factorial::<u64>::new();
    for n in [3, 5, 8] {
        println!("{n}! is {}", apply(&factorial, n));
    }
    println!(
        "\"Lambda\" reversed is \"{}\"",
        apply(&Reverse, "Lambda".to_string())
    );

    // The same generic contract bound at two types at once.
    let shout = transform_fn(|s: String| s.to_uppercase());
    let square = transform_fn(|n: i32| n * n);
    println!("Shouted: {}", apply(&shout, "strand".to_string()));
    println!("12 squared is {}", apply(&square, 12));

    // Generic match counting over integers and over strings.
    let numbers = [1, 2, 3, 4, 2, 3, 4, 4, 5];
    println!(
        "4 appears {} times in {numbers:?}",
        count(&CountMatching::new(), &numbers, &4)
    );
    let words = ["One", "Two", "Three", "Two"];
    println!(
        "\"Two\" appears {} times in {words:?}",
        count(&CountMatching::new(), &words, &"Two")
    );

    // A fallible reduction: the success path propagates with `?`, and the
    // empty-input failure is handled explicitly rather than swallowed.
    let mean = Mean::new();
    let readings = [12.5, 14.0, 13.1, 15.2];
    println!("Mean of {readings:?} is {}", reduce(&mean, &readings)?);

    match reduce(&mean, &[]) {
        Ok(value) => println!("Mean of [] is {value}"),
        Err(failure) => println!("Mean of [] failed: {failure}"),
    }

    Ok(())
}
