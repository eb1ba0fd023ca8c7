//! Header-line parsing for the transfer callback.

/// Extracts ordered (name, value) pairs from collected raw header lines.
///
/// With redirect following enabled the header callback fires for every hop,
/// so the lines contain one block per response, each introduced by an
/// `HTTP/` status line. Only the block after the last status line, i.e. the
/// final response, is kept. Names and values are trimmed; header name case
/// is preserved.
pub(crate) fn final_header_block(lines: &[String]) -> Vec<(String, String)> {
    let start = lines
        .iter()
        .rposition(|l| l.starts_with("HTTP/"))
        .map(|i| i + 1)
        .unwrap_or(0);

    lines[start..]
        .iter()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}
