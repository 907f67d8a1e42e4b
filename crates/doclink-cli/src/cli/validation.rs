/// A dotted namespace path given on the command line (`a.b`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopePath(pub Vec<String>);

impl ScopePath {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Parse a dotted scope path.
///
/// The empty string is the top level. Segments must be non-empty, so
/// `a..b`, `.a` and `a.` are rejected.
///
/// # Errors
///
/// Returns an error message naming the offending input.
pub fn parse_scope(s: &str) -> Result<ScopePath, String> {
    if s.is_empty() {
        return Ok(ScopePath::default());
    }

    let segments: Vec<String> = s.split('.').map(str::to_string).collect();
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(format!("Scope segments cannot be empty: '{s}'"));
    }

    Ok(ScopePath(segments))
}
