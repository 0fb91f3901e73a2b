use amdwrap_gen::validate_dotted_path;

/// Parse a loader entry point such as `sap.ui.define`.
///
/// # Errors
///
/// Returns an error message if any segment is not a JavaScript identifier.
pub fn parse_dotted_path(s: &str) -> Result<String, String> {
    validate_dotted_path(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Parse a file extension, accepting `js` as well as `.js`.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.strip_prefix('.').unwrap_or(s);
    if ext.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }
    if ext.contains(['/', '\\', '.']) {
        return Err(format!("Invalid extension: '{}'", s));
    }
    Ok(ext.to_ascii_lowercase())
}
