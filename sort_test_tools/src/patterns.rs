//! `i32` inputs for the test suite and the benches.
//!
//! Every random pattern draws from a [`StdRng`] seeded by [`seed`]. Within one process the seed
//! is fixed, so a failing input can be regenerated. `OVERRIDE_SEED=<u64>` pins it across runs.

use std::env;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

/// Input shapes that stress the pivot policies in different ways.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Random,
    /// About log2(len) distinct values.
    FewDistinct,
    /// Only 0 and 1.
    Binary,
    Ascending,
    Descending,
    /// Sorted runs of alternating direction, `runs` of them.
    Runs { runs: usize },
    /// Ascending first half, descending second half.
    PipeOrgan,
    AllEqual,
    /// The first `percent` of the input is sorted, the rest random.
    MostlySorted { percent: u8 },
    /// Zipf distributed values, a handful of them very frequent.
    Zipf,
}

impl Pattern {
    /// Patterns every test and bench run covers.
    pub const BASIC: [Pattern; 6] = [
        Pattern::Random,
        Pattern::FewDistinct,
        Pattern::Binary,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::Runs { runs: 8 },
    ];

    /// Added by the suite always and by the benches with `EXTRA_PATTERNS` set.
    pub const EXTRA: [Pattern; 4] = [
        Pattern::PipeOrgan,
        Pattern::AllEqual,
        Pattern::MostlySorted { percent: 95 },
        Pattern::Zipf,
    ];

    pub fn name(&self) -> String {
        match self {
            Pattern::Random => "random".into(),
            Pattern::FewDistinct => "few_distinct".into(),
            Pattern::Binary => "binary".into(),
            Pattern::Ascending => "ascending".into(),
            Pattern::Descending => "descending".into(),
            Pattern::Runs { runs } => format!("runs_{runs}"),
            Pattern::PipeOrgan => "pipe_organ".into(),
            Pattern::AllEqual => "all_equal".into(),
            Pattern::MostlySorted { percent } => format!("sorted_{percent}p"),
            Pattern::Zipf => "zipf".into(),
        }
    }

    pub fn generate(&self, len: usize) -> Vec<i32> {
        match *self {
            Pattern::Random => random(len),
            Pattern::FewDistinct => {
                let distinct = (len.max(1) as f64).log2().round() as i32;
                random_uniform(len, 0..=distinct)
            }
            Pattern::Binary => random_uniform(len, 0..=1),
            Pattern::Ascending => ascending(len),
            Pattern::Descending => descending(len),
            Pattern::Runs { runs } => {
                let mut v = random(len);
                let run_len = (len / runs.max(1)).max(1);
                for (i, run) in v.chunks_mut(run_len).enumerate() {
                    run.sort_unstable();
                    if i % 2 == 1 {
                        run.reverse();
                    }
                }
                v
            }
            Pattern::PipeOrgan => {
                let mut v = random(len);
                let (up, down) = v.split_at_mut(len / 2);
                up.sort_unstable();
                down.sort_unstable_by(|a, b| b.cmp(a));
                v
            }
            Pattern::AllEqual => vec![66; len],
            Pattern::MostlySorted { percent } => {
                let mut v = random(len);
                let sorted_len = len * usize::from(percent.min(100)) / 100;
                v[..sorted_len].sort_unstable();
                v
            }
            Pattern::Zipf => {
                if len == 0 {
                    return Vec::new();
                }
                let dist = match ZipfDistribution::new(len, 1.0) {
                    Ok(dist) => dist,
                    Err(()) => panic!("invalid zipf parameters for len {len}"),
                };
                let mut rng = new_rng();
                (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
            }
        }
    }
}

/// The patterns the benches run, honoring `EXTRA_PATTERNS`.
pub fn bench_patterns() -> Vec<Pattern> {
    let mut patterns = Pattern::BASIC.to_vec();
    if env::var("EXTRA_PATTERNS").is_ok() {
        patterns.extend(Pattern::EXTRA);
    }
    patterns
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

////////////////////////////////////////////////////////////////////////////////
// Seeding
////////////////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug)]
enum SeedSource {
    /// Set by `OVERRIDE_SEED` or drawn once at startup.
    Fixed(u64),
    /// A fresh seed for every generated input.
    Fresh,
}

static SEED_SOURCE: Lazy<Mutex<SeedSource>> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(text) => match text.parse() {
            Ok(seed) => seed,
            Err(err) => panic!("OVERRIDE_SEED={text} is not a u64: {err}"),
        },
        Err(_) => thread_rng().gen(),
    };

    Mutex::new(SeedSource::Fixed(seed))
});

/// The seed the next generated input is derived from.
pub fn seed() -> u64 {
    match *lock_seed_source() {
        SeedSource::Fixed(seed) => seed,
        SeedSource::Fresh => thread_rng().gen(),
    }
}

/// Gives every generated input a fresh seed. Benches call this so repeated runs of the same
/// pattern don't measure one memorized input.
///
/// Ignored when `OVERRIDE_SEED` is set.
pub fn reseed_every_call() {
    if env::var("OVERRIDE_SEED").is_ok() {
        return;
    }

    *lock_seed_source() = SeedSource::Fresh;
}

fn lock_seed_source() -> std::sync::MutexGuard<'static, SeedSource> {
    // A panicking test may poison the lock, the seed itself is still valid.
    SEED_SOURCE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}
