use std::path::Path;

/// Reduce a client-supplied filename to something safe to join onto the
/// upload directory: final path component only, whitespace collapsed to
/// underscores, everything outside `[A-Za-z0-9._-]` dropped, no leading
/// dots. Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Remove everything inside `dir`, leaving the directory itself in place.
pub async fn clear_dir(dir: &Path) -> std::io::Result<()> {
    if tokio::fs::try_exists(dir).await? {
        tokio::fs::remove_dir_all(dir).await?;
    }
    tokio::fs::create_dir_all(dir).await
}
