//! Grammar component matchers
//!
//! One matcher per grammar component, in the order the components appear in an
//! identifier. Every matcher either consumes its component and returns the span, or
//! returns `None` and leaves the cursor where it was.
//!
//!     Standard _ NC 24 - 2 ads _ A100 _ v4
//!     |        | || |  | | |   | |    | +- version
//!     |        | || |  | | |   | |    +--- separator
//!     |        | || |  | | |   | +-------- accelerator type
//!     |        | || |  | | |   +---------- separator
//!     |        | || |  | | +-------------- features
//!     |        | || |  | +---------------- constrained vCPU count
//!     |        | || |  +------------------ constrained separator
//!     |        | || +--------------------- vCPU count
//!     |        | |+----------------------- subfamily
//!     |        | +------------------------ family
//!     |        +-------------------------- separator
//!     +----------------------------------- tier

use super::cursor::{Cursor, Matched};

/// Known machine family codes, longest first.
///
/// A multi-character code must come before every code that is a prefix of it, so a
/// first-match scan over this list is a longest-match scan.
pub const FAMILY_CODES: &[&str] = &[
    "Mv2", "Bs", "Ls", "A", "B", "D", "E", "F", "G", "H", "L", "M", "N",
];

pub fn machine_tier<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.take_while(|b| b.is_ascii_alphabetic())
}

/// The `_` between components. Mandatory after the tier, optional elsewhere.
pub fn separator<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.eat("_")
}

pub fn machine_family<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    FAMILY_CODES.iter().find_map(|code| cursor.eat(code))
}

pub fn machine_subfamily<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.take_one(|b| b.is_ascii_uppercase())
}

pub fn num_vcpu<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.take_while(|b| b.is_ascii_digit())
}

pub fn constrained_separator<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.eat("-")
}

pub fn num_constrained_vcpu<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.take_one(|b| b.is_ascii_digit())
}

/// The whole feature run. Splitting into individual features happens in
/// [`super::features::split_features`].
pub fn feature_run<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    cursor.take_while(|b| b.is_ascii_alphabetic())
}

/// An alphanumeric run, unless that run is itself a version (`v3` in `D2s_v3`).
pub fn accelerator_type<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    let len = cursor.run_len(|b| b.is_ascii_alphanumeric());
    if is_version(&cursor.rest()[..len]) {
        return None;
    }
    cursor.advance(len)
}

pub fn version<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    let rest = cursor.rest();
    if !rest.starts_with('v') {
        return None;
    }
    let digits = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    cursor.advance(1 + digits)
}

fn is_version(text: &str) -> bool {
    match text.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run<'a>(
        matcher: impl Fn(&mut Cursor<'a>) -> Option<Matched<'a>>,
        source: &'a str,
    ) -> (Option<&'a str>, &'a str) {
        let mut cursor = Cursor::new(source);
        let matched = matcher(&mut cursor).map(|m| m.text);
        (matched, cursor.rest())
    }

    #[rstest]
    #[case("Mv264", "Mv2")]
    #[case("M64", "M")]
    #[case("Bs1", "Bs")]
    #[case("B2", "B")]
    #[case("Ls8", "Ls")]
    #[case("L8", "L")]
    #[case("NC24", "N")]
    fn test_family_longest_match(#[case] source: &str, #[case] expected: &str) {
        let (matched, rest) = run(machine_family, source);
        assert_eq!(matched, Some(expected));
        assert_eq!(rest, &source[expected.len()..]);
    }

    #[rstest]
    #[case("C24")]
    #[case("Z8")]
    #[case("d2")]
    #[case("")]
    fn test_family_rejects_unknown_codes(#[case] source: &str) {
        assert_eq!(run(machine_family, source), (None, source));
    }

    #[test]
    fn test_family_codes_are_ordered_longest_first() {
        for (i, code) in FAMILY_CODES.iter().enumerate() {
            for later in &FAMILY_CODES[i + 1..] {
                assert!(!later.starts_with(*code), "{later} is shadowed by {code}");
            }
        }
    }

    #[test]
    fn test_subfamily_is_one_uppercase_letter() {
        assert_eq!(run(machine_subfamily, "CV24"), (Some("C"), "V24"));
        assert_eq!(run(machine_subfamily, "24"), (None, "24"));
        assert_eq!(run(machine_subfamily, "s"), (None, "s"));
    }

    #[test]
    fn test_vcpu_digits_are_greedy() {
        assert_eq!(run(num_vcpu, "416ms"), (Some("416"), "ms"));
        assert_eq!(run(num_vcpu, "ms"), (None, "ms"));
    }

    #[test]
    fn test_constrained_vcpu_is_single_digit() {
        assert_eq!(run(num_constrained_vcpu, "42"), (Some("4"), "2"));
    }

    #[test]
    fn test_accelerator_skips_version_runs() {
        assert_eq!(run(accelerator_type, "A100_v4"), (Some("A100"), "_v4"));
        assert_eq!(run(accelerator_type, "v3"), (None, "v3"));
        assert_eq!(run(accelerator_type, "v"), (Some("v"), ""));
        assert_eq!(run(accelerator_type, "vA"), (Some("vA"), ""));
        assert_eq!(run(accelerator_type, "_v3"), (None, "_v3"));
    }

    #[test]
    fn test_version_requires_digits() {
        assert_eq!(run(version, "v12"), (Some("v12"), ""));
        assert_eq!(run(version, "v"), (None, "v"));
        assert_eq!(run(version, "V2"), (None, "V2"));
        assert_eq!(run(version, "v2x"), (Some("v2"), "x"));
    }
}
