/// Route path for the CSV download
pub const EXPORT: &str = "/export";

/// Media type of the exported dataset.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// `Content-Disposition` value offering `file_name` as a download.
pub fn attachment_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

/// Whether an `If-None-Match` header value matches `etag`.
///
/// Uses the weak comparison: a `W/` prefix on either side is ignored. `*`
/// matches any current representation.
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    let etag = etag.trim_start_matches("W/");
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}
