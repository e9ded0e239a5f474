#![no_main]

use libfuzzer_sys::fuzz_target;

use quicksort_core::{Execution, PivotPolicy, Quicksort};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let pivot = PivotPolicy::ALL[(selector & 0b11) as usize];
    let execution = if selector & 0b100 == 0 {
        Execution::Recursive
    } else {
        Execution::Iterative
    };

    let mut v = rest.to_vec();
    Quicksort::new()
        .pivot(pivot)
        .execution(execution)
        .seed(selector as u64)
        .sort(&mut v);

    let mut expected = rest.to_vec();
    expected.sort();
    assert_eq!(v, expected);
});
