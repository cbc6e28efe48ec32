/// Returns every domain level of `hostname`, most specific first, down to the
/// second-level domain.
///
/// `a.b.c.com` yields `["a.b.c.com", "b.c.com", "c.com"]`. A hostname with a
/// single label yields nothing. Labels are kept verbatim, empty ones included.
pub fn candidate_domains(hostname: &str) -> Vec<String> {
    let levels = hostname.matches('.').count();

    std::iter::once(0)
        .chain(hostname.match_indices('.').map(|(idx, _)| idx + 1))
        .take(levels)
        .map(|start| hostname[start..].to_string())
        .collect()
}

/// First dot-delimited segment of `hostname`, or the whole string when there
/// is no dot.
pub fn leading_label(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}
