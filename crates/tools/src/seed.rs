//! Seed entry for the command-line tools.
//!
//! A seed is either a plain integer or a seed code of the form `N<digits>S`
//! (case-insensitive), the format used when a session is started from a
//! recorded input string.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn resolve_seed(cli_seed: Option<u64>, generated_seed: u64) -> SeedChoice {
    match cli_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    }
}

/// Parses `--seed` values; usable directly as a clap `value_parser`.
pub fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    let trimmed = raw_value.trim();
    if let Some(digits) = strip_seed_code(trimmed) {
        return parse_seed_digits(digits, raw_value);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| format!("seed value '{raw_value}' must be a number or an N<digits>S code"))
}

fn strip_seed_code(value: &str) -> Option<&str> {
    let rest = value.strip_prefix(['n', 'N'])?;
    rest.strip_suffix(['s', 'S'])
}

/// An empty digit run means seed 0; anything above `i64::MAX` is clamped.
fn parse_seed_digits(digits: &str, raw_value: &str) -> Result<u64, String> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("seed code '{raw_value}' may only contain digits between N and S"));
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    let ceiling = i64::MAX as u64;
    Ok(significant.parse::<u64>().map_or(ceiling, |value| value.min(ceiling)))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        assert_eq!(resolve_seed(None, 9_876_543), SeedChoice::Generated(9_876_543));
        assert_eq!(resolve_seed(Some(4_242), 1), SeedChoice::Cli(4_242));
        assert_eq!(SeedChoice::Cli(7).value(), 7);
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_seed_value("2026"), Ok(2_026));
        assert_eq!(parse_seed_value(" 42 "), Ok(42));
    }

    #[test]
    fn parses_seed_codes_in_either_case() {
        assert_eq!(parse_seed_value("N543S"), Ok(543));
        assert_eq!(parse_seed_value("n12s"), Ok(12));
    }

    #[test]
    fn empty_seed_code_means_zero() {
        assert_eq!(parse_seed_value("NS"), Ok(0));
        assert_eq!(parse_seed_value("n000s"), Ok(0));
    }

    #[test]
    fn oversized_seed_code_clamps_to_signed_maximum() {
        assert_eq!(parse_seed_value("N99999999999999999999999S"), Ok(i64::MAX as u64));
        assert_eq!(parse_seed_value("N9223372036854775808S"), Ok(i64::MAX as u64));
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let err = parse_seed_value("abc").expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");

        let err = parse_seed_value("N12xS").expect_err("letters inside a seed code should error");
        assert!(err.contains("digits"), "error should explain digit requirement: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }

    proptest! {
        #[test]
        fn seed_codes_agree_with_plain_numbers_up_to_the_clamp(seed in 0_u64..=(i64::MAX as u64)) {
            prop_assert_eq!(parse_seed_value(&format!("N{seed}S")), Ok(seed));
            prop_assert_eq!(parse_seed_value(&seed.to_string()), Ok(seed));
        }
    }
}
