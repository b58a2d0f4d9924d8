//! Random string generation from a character set.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

use super::error::{GenError, Result};

/// Generate `length` characters drawn uniformly from `charset` using the OS CSPRNG.
///
/// Length and charset are checked here regardless of what the caller already
/// validated. A failing random source is reported, never replaced.
pub fn generate(length: i64, charset: &str) -> Result<String> {
    generate_with(&mut OsRng, length, charset)
}

/// Same as [`generate`], drawing from `rng`.
pub fn generate_with<R: RngCore + ?Sized>(
    rng: &mut R,
    length: i64,
    charset: &str,
) -> Result<String> {
    if length <= 0 {
        return Err(GenError::InvalidLength);
    }
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(GenError::EmptyCharset);
    }

    let length = usize::try_from(length).map_err(|_| GenError::InvalidLength)?;
    // Sized in bytes for the widest character plus a trailing newline, so
    // the buffer never reallocates and leaves an unwiped copy behind.
    let widest = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut password = String::with_capacity(length * widest + 1);

    for _ in 0..length {
        match random_index(rng, chars.len()) {
            Ok(idx) => password.push(chars[idx]),
            Err(e) => {
                password.zeroize();
                return Err(GenError::RandomSourceFailure(e));
            }
        }
    }

    Ok(password)
}

/// Uniform index in `[0, bound)`.
///
/// Draws from the top `2^64 mod bound` values of the u64 range would favour
/// low indices, so they are thrown away and redrawn.
fn random_index<R: RngCore + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> std::result::Result<usize, rand::Error> {
    let bound = bound as u64;
    let reject = (u64::MAX % bound + 1) % bound;
    let zone = u64::MAX - reject;

    let mut buf = Zeroizing::new([0u8; 8]);
    loop {
        rng.try_fill_bytes(&mut buf[..])?;
        let draw = u64::from_le_bytes(*buf);
        if draw <= zone {
            return Ok((draw % bound) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
    use rand::rngs::mock::StepRng;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("infallible draw used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("infallible draw used")
        }

        fn fill_bytes(&mut self, _: &mut [u8]) {
            unreachable!("infallible draw used")
        }

        fn try_fill_bytes(&mut self, _: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    #[test]
    fn length_and_membership() {
        let charset = [LOWERCASE, UPPERCASE].concat();
        for length in [1, 2, 10, 64, 255, 256] {
            let pass = generate(length, &charset).unwrap();
            assert_eq!(pass.chars().count(), length as usize);
            assert!(pass.chars().all(|c| charset.contains(c)));
        }
    }

    #[test]
    fn numbers_only() {
        let pass = generate(6, DIGITS).unwrap();
        assert_eq!(pass.len(), 6);
        assert!(pass.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn special_characters() {
        let pass = generate(12, SYMBOLS).unwrap();
        assert_eq!(pass.len(), 12);
        assert!(pass.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn non_positive_length() {
        for length in [0, -1, i64::MIN] {
            assert!(matches!(
                generate(length, LOWERCASE),
                Err(GenError::InvalidLength)
            ));
        }
        // length is checked before the charset
        assert!(matches!(generate(0, ""), Err(GenError::InvalidLength)));
    }

    #[test]
    fn empty_charset() {
        assert!(matches!(generate(8, ""), Err(GenError::EmptyCharset)));
    }

    #[test]
    fn multibyte_charset_counts_characters() {
        let pass = generate(5, "äöü€").unwrap();
        assert_eq!(pass.chars().count(), 5);
        assert!(pass.chars().all(|c| "äöü€".contains(c)));
    }

    #[test]
    fn buffer_never_reallocates() {
        for (length, charset) in [(12, DIGITS), (256, SYMBOLS), (40, "a€"), (7, "äöü€")] {
            let mut pass = generate(length, charset).unwrap();
            assert!(pass.capacity() > pass.len());

            let (capacity, ptr) = (pass.capacity(), pass.as_ptr());
            pass.push('\n');
            assert_eq!(pass.capacity(), capacity);
            assert_eq!(pass.as_ptr(), ptr);
        }
    }

    #[test]
    fn maps_draws_to_indices() {
        let mut rng = StepRng::new(0, 1);
        let pass = generate_with(&mut rng, 12, DIGITS).unwrap();
        assert_eq!(pass, "012345678901");
    }

    #[test]
    fn rejects_biased_tail() {
        // 2^64 mod 3 == 1, so u64::MAX must be redrawn
        let mut rng = StepRng::new(u64::MAX, 1);
        let pass = generate_with(&mut rng, 3, "abc").unwrap();
        assert_eq!(pass, "abc");
    }

    #[test]
    fn power_of_two_accepts_every_draw() {
        let mut rng = StepRng::new(u64::MAX, 1);
        let pass = generate_with(&mut rng, 3, "ab").unwrap();
        assert_eq!(pass, "bab");
    }

    #[test]
    fn random_source_failure() {
        match generate_with(&mut FailingRng, 8, LOWERCASE) {
            Err(GenError::RandomSourceFailure(e)) => {
                assert!(e.to_string().contains("entropy source unavailable"));
            }
            other => panic!("expected RandomSourceFailure, got {other:?}"),
        }
    }

    #[test]
    fn repeated_charset_entries_are_allowed() {
        let pass = generate(32, "aaab").unwrap();
        assert_eq!(pass.len(), 32);
        assert!(pass.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn digits_roughly_uniform() {
        let mut counts = [0usize; 10];
        for _ in 0..40 {
            for c in generate(250, DIGITS).unwrap().chars() {
                counts[c.to_digit(10).unwrap() as usize] += 1;
            }
        }
        // 10,000 draws, 1,000 expected per digit; bounds sit ~6.6 sigma out
        for (digit, count) in counts.iter().enumerate() {
            assert!((800..=1200).contains(count), "digit {digit} drawn {count} times");
        }
    }
}
