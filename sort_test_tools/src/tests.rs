//! Generic checks every [`Sort`] has to pass, instantiated per implementation with
//! [`instantiate_sort_tests!`](crate::instantiate_sort_tests).
//!
//! Results are compared against `slice::sort`. Set `WRITE_LARGE_FAILURE` to dump failing inputs
//! that are too long to print, and `OVERRIDE_SEED` to regenerate them.

use std::cell::Cell;
use std::cmp::Ordering;
use std::env;
use std::fmt::Debug;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::patterns::{self, Pattern};
use crate::Sort;

const SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 50, 100, 257, 500, 1_000, 2_048,
];

// The last element pivot is quadratic on sorted and few distinct inputs, these only run on
// request.
#[cfg(feature = "large_test_sizes")]
const LARGE_SIZES: &[usize] = &[5_000, 10_000];

#[cfg(not(feature = "large_test_sizes"))]
const LARGE_SIZES: &[usize] = &[];

fn sizes() -> impl Iterator<Item = usize> {
    SIZES.iter().chain(LARGE_SIZES).copied()
}

fn announce_seed<S: Sort>() -> u64 {
    static ANNOUNCE: Once = Once::new();

    let seed = patterns::seed();
    ANNOUNCE.call_once(|| println!("\nSeed: {seed}\nTesting: {}\n", S::name()));

    seed
}

/// Sorts `input` with `S` and with `slice::sort` and requires equal results.
fn check_against_std<T, S>(input: Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = announce_seed::<S>();

    let mut expected = input.clone();
    expected.sort();

    let mut actual = input.clone();
    S::sort(&mut actual);

    if actual == expected {
        return;
    }

    if input.len() <= 64 {
        panic!(
            "{} mis-sorted {input:?}\nexpected: {expected:?}\ngot:      {actual:?}",
            S::name()
        );
    }

    if env::var("WRITE_LARGE_FAILURE").is_ok() {
        for (kind, values) in [("input", &input), ("expected", &expected), ("actual", &actual)] {
            let path = format!("{}_{kind}_{seed}.txt", S::name());
            if let Err(err) = fs::write(&path, format!("{values:?}")) {
                eprintln!("could not write {path}: {err}");
            }
        }
        panic!("{} mis-sorted {} elements, inputs written for seed {seed}", S::name(), input.len());
    }

    panic!(
        "{} mis-sorted {} elements, set WRITE_LARGE_FAILURE to dump them",
        S::name(),
        input.len()
    );
}

/// Runs `check` on every pattern at every size of at least `min_len`.
fn for_each_input(min_len: usize, mut check: impl FnMut(Pattern, Vec<i32>)) {
    for pattern in Pattern::BASIC.into_iter().chain(Pattern::EXTRA) {
        for len in sizes().filter(|len| *len >= min_len) {
            check(pattern, pattern.generate(len));
        }
    }
}

fn sorted_copy<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.sort();
    v
}

// --- Tests ---

pub fn textbook_inputs<S: Sort>() {
    let cases: [(&[i32], &[i32]); 8] = [
        (&[], &[]),
        (&[42], &[42]),
        (&[3, 3, 3, 3], &[3, 3, 3, 3]),
        (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
        (&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]),
        (&[64, 34, 25, 12, 22, 11, 90], &[11, 12, 22, 25, 34, 64, 90]),
        (&[10, 80, 30, 90, 40, 50, 70], &[10, 30, 40, 50, 70, 80, 90]),
        (&[3, 6, 8, 10, 1, 2, 1], &[1, 1, 2, 3, 6, 8, 10]),
    ];

    for (input, expected) in cases {
        let mut v = input.to_vec();
        S::sort(&mut v);
        assert_eq!(v, expected, "input: {input:?}");
    }
}

pub fn patterns<S: Sort>() {
    for_each_input(0, |_, input| check_against_std::<i32, S>(input));
}

pub fn narrow_value_ranges<S: Sort>() {
    for max in [0, 1, 3, 15, 255] {
        for len in sizes() {
            check_against_std::<i32, S>(patterns::random_uniform(len, 0..=max));
        }
    }
}

pub fn extreme_values<S: Sort>() {
    let edges = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX];

    for len in sizes() {
        let input = patterns::random_uniform(len, 0..=(edges.len() as i32 - 1))
            .into_iter()
            .map(|i| edges[i as usize])
            .collect();
        check_against_std::<i32, S>(input);
    }
}

pub fn other_types<S: Sort>() {
    for len in sizes() {
        let values = patterns::random(len);

        // Order preserving spread into the full u64 range.
        check_against_std::<u64, S>(
            values
                .iter()
                .map(|v| (i64::from(*v) - i64::from(i32::MIN)) as u64 * u64::from(u32::MAX))
                .collect(),
        );

        check_against_std::<String, S>(values.iter().map(|v| v.to_string()).collect());
    }
}

pub fn zero_sized<S: Sort>() {
    for len in [0, 1, 2, 3, 1_000] {
        let mut v = vec![(); len];
        S::sort(&mut v);
        assert_eq!(v.len(), len);
    }
}

pub fn idempotent<S: Sort>() {
    for_each_input(2, |pattern, input| {
        let mut once = input;
        S::sort(&mut once);

        let mut twice = once.clone();
        S::sort(&mut twice);

        assert_eq!(once, twice, "{}", pattern.name());
    });
}

pub fn sort_by_matches_sort<S: Sort>() {
    for_each_input(0, |pattern, input| {
        let mut by_ord = input.clone();
        S::sort(&mut by_ord);

        let mut by_cmp = input.clone();
        S::sort_by(&mut by_cmp, |a, b| a.cmp(b));
        assert_eq!(by_ord, by_cmp, "{}", pattern.name());

        let mut reversed = input;
        S::sort_by(&mut reversed, |a, b| b.cmp(a));
        by_ord.reverse();
        assert_eq!(by_ord, reversed, "{}", pattern.name());
    });
}

pub fn stability<S: Sort>() {
    if !S::STABLE {
        return;
    }

    let _seed = announce_seed::<S>();

    for max_key in [0, 1, 7, 100] {
        for len in sizes() {
            // Tag every key with its input position, equal keys must come out in tag order.
            let input: Vec<(i32, usize)> = patterns::random_uniform(len, 0..=max_key)
                .into_iter()
                .zip(0..)
                .collect();

            let mut expected = input.clone();
            expected.sort_by_key(|(key, _)| *key);

            let mut actual = input;
            S::sort_by(&mut actual, |a, b| a.0.cmp(&b.0));

            assert_eq!(actual, expected, "keys 0..={max_key} len {len}");
        }
    }
}

pub fn comparisons_are_observable<S: Sort>() {
    let _seed = announce_seed::<S>();

    // Side effects of the comparison function must reach the output, a sort that compares
    // copies it throws away would lose them.
    #[derive(Clone)]
    struct Counted {
        val: i32,
        seen: Cell<u64>,
    }

    for_each_input(2, |pattern, input| {
        let mut v: Vec<Counted> = input
            .into_iter()
            .map(|val| Counted {
                val,
                seen: Cell::new(0),
            })
            .collect();

        let mut comparisons = 0u64;
        S::sort_by(&mut v, |a, b| {
            a.seen.set(a.seen.get() + 1);
            b.seen.set(b.seen.get() + 1);
            comparisons += 1;
            a.val.cmp(&b.val)
        });

        let seen: u64 = v.iter().map(|c| c.seen.get()).sum();
        assert_eq!(seen, comparisons * 2, "{}", pattern.name());
    });
}

pub fn panicking_comparator_keeps_elements<S: Sort>() {
    if !S::DETERMINISTIC {
        return;
    }

    let seed = announce_seed::<S>();
    let mut rng = StdRng::seed_from_u64(seed);

    for_each_input(2, |pattern, input| {
        let mut total = 0u64;
        S::sort_by(&mut input.clone(), |a, b| {
            total += 1;
            a.cmp(b)
        });

        // Any of the comparisons may be the one that panics.
        let panic_at = rng.gen_range(0..total);

        let mut v = input.clone();
        let mut count = 0u64;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            S::sort_by(&mut v, |a, b| {
                if count == panic_at {
                    panic!("comparison {count} of {total}");
                }
                count += 1;
                a.cmp(b)
            });
        }));

        assert!(result.is_err(), "{}", pattern.name());
        assert_eq!(sorted_copy(&v), sorted_copy(&input), "{}", pattern.name());
    });
}

pub fn inconsistent_comparator_keeps_elements<S: Sort>() {
    let seed = announce_seed::<S>();

    type Comparator<'a> = Box<dyn FnMut(&i32, &i32) -> Ordering + 'a>;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut calls = 0usize;

    let comparators: Vec<(&str, Comparator<'_>)> = vec![
        ("always_less", Box::new(|_: &i32, _: &i32| Ordering::Less)),
        ("always_greater", Box::new(|_: &i32, _: &i32| Ordering::Greater)),
        ("always_equal", Box::new(|_: &i32, _: &i32| Ordering::Equal)),
        ("reversed_for_odd", Box::new(|a: &i32, b: &i32| {
            if a % 2 == 0 {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        })),
        ("flip_every_third", Box::new(|a: &i32, b: &i32| {
            calls += 1;
            if calls % 3 == 0 {
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        })),
        ("coin_toss", Box::new(move |_: &i32, _: &i32| {
            if rng.gen() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        })),
    ];

    // Sorts may detect the inconsistency and panic, they may not lose or duplicate elements.
    for (name, mut compare) in comparators {
        for_each_input(2, |pattern, input| {
            let mut v = input.clone();
            let _ = panic::catch_unwind(AssertUnwindSafe(|| {
                S::sort_by(&mut v, |a, b| compare(a, b));
            }));

            assert_eq!(
                sorted_copy(&v),
                sorted_copy(&input),
                "{name} on {}",
                pattern.name()
            );
        });
    }
}

pub fn fixed_seed<S: Sort>() {
    assert_eq!(patterns::seed(), patterns::seed());
    assert_eq!(patterns::random(16), patterns::random(16));
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @each $sort_impl,
            comparisons_are_observable,
            extreme_values,
            fixed_seed,
            idempotent,
            inconsistent_comparator_keeps_elements,
            narrow_value_ranges,
            other_types,
            panicking_comparator_keeps_elements,
            patterns,
            sort_by_matches_sort,
            stability,
            textbook_inputs,
            zero_sized,
        );
    };
    (@each $sort_impl:ty, $($test_name:ident),* $(,)?) => {
        $(
            #[test]
            fn $test_name() {
                $crate::tests::$test_name::<$sort_impl>();
            }
        )*
    };
}
