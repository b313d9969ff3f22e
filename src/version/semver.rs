use semver::Version;

/// Parse a catalog entry into a release version.
///
/// Only plain `MAJOR.MINOR.PATCH` entries qualify. Pre-release and build
/// metadata (`5.0.0-beta.1`, `1.0.0+abc`) and anything `semver` rejects
/// return None.
///
/// Examples:
/// - "1.2.3" -> Some(Version(1, 2, 3))
/// - "1.10.0" -> Some(Version(1, 10, 0))
/// - "1.2" -> None
pub fn parse_release(version: &str) -> Option<Version> {
    let parsed = Version::parse(version).ok()?;
    if parsed.pre.is_empty() && parsed.build.is_empty() {
        Some(parsed)
    } else {
        None
    }
}

/// Parse a single dot-separated tag component as a decimal integer.
///
/// Accepts ASCII digits only, with no sign and no leading zeros (a lone
/// `0` is fine), matching what `semver` accepts for catalog entries.
pub fn parse_component(component: &str) -> Option<u64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if component.len() > 1 && component.starts_with('0') {
        return None;
    }
    component.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Some((1, 2, 3)))]
    #[case("1.10.0", Some((1, 10, 0)))]
    #[case("0.0.0", Some((0, 0, 0)))]
    #[case("5.0.0-beta.1", None)]
    #[case("1.0.0+build.5", None)]
    #[case("1.2", None)]
    #[case("v1.2.3", None)]
    #[case("01.2.3", None)]
    #[case("garbage", None)]
    fn parse_release_returns_expected(
        #[case] input: &str,
        #[case] expected: Option<(u64, u64, u64)>,
    ) {
        assert_eq!(
            parse_release(input).map(|v| (v.major, v.minor, v.patch)),
            expected
        );
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("7", Some(7))]
    #[case("10", Some(10))]
    #[case("18446744073709551615", Some(u64::MAX))]
    #[case("18446744073709551616", None)] // overflows u64
    #[case("", None)]
    #[case("01", None)]
    #[case("+1", None)]
    #[case("-1", None)]
    #[case("1a", None)]
    #[case(" 1", None)]
    fn parse_component_returns_expected(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_component(input), expected);
    }
}
