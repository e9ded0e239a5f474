#![no_main]

use libfuzzer_sys::fuzz_target;

use quicksort_core::stable::rust_filter_mid as test_sort;

fuzz_target!(|data: &[u8]| {
    // Sort by the high nibble only, the index tags each element so stability is observable.
    let v: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();

    let sorted = test_sort::sort_new_by(&v, |a, b| (a.0 >> 4).cmp(&(b.0 >> 4)));

    let mut expected = v.clone();
    expected.sort_by_key(|(x, _)| x >> 4);
    assert_eq!(sorted, expected);
});
