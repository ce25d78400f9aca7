/// Approximate pod-name match: true when `pattern` occurs in `name` as an
/// order-preserving, not necessarily contiguous byte subsequence. Matching
/// is case-sensitive and purely boolean; there is no scoring or ranking.
///
/// An empty pattern disables filtering and selects every pod.
pub fn selects(pattern: &str, name: &str) -> bool {
    let mut rest = name.bytes();
    pattern.bytes().all(|wanted| rest.any(|b| b == wanted))
}
