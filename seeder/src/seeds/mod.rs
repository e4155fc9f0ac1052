pub mod course;
pub mod enrollment;
pub mod student;
pub mod teacher;

use rand::Rng;

/// A `YYYY-MM-DD` string somewhere in `years`.
pub fn random_date<R: Rng>(rng: &mut R, years: std::ops::RangeInclusive<i32>) -> String {
    format!(
        "{}-{:02}-{:02}",
        rng.gen_range(years),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}

pub fn random_phone<R: Rng>(rng: &mut R) -> String {
    format!("555-{:03}-{:04}", rng.gen_range(0..1000), rng.gen_range(0..10_000))
}

/// Lowercase `first.last{n}@domain`, unique as long as `n` is.
pub fn email_for(first: &str, last: &str, n: usize, domain: &str) -> String {
    let clean = |s: &str| {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    };
    format!("{}.{}{}@{}", clean(first), clean(last), n, domain)
}
