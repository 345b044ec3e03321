use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::GlyphloomResult;

const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
const MAX_STEM_BYTES: usize = 20;

/// Turn arbitrary text into a file stem.
///
/// Whitespace becomes `_`, path-reserved and control characters are dropped, and copying stops
/// as soon as the stem grows past 20 bytes. Text that leaves nothing behind becomes `output`.
pub fn sanitize_filename(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push('_');
        } else if !ch.is_control() && !RESERVED.contains(&ch) {
            out.push(ch);
        }
        if out.len() > MAX_STEM_BYTES {
            break;
        }
    }
    if out.is_empty() {
        out.push_str("output");
    }
    out
}

/// `<dir>/<sanitized text>.<extension>`, creating `dir` if needed.
pub fn output_path(dir: &Path, text: &str, extension: &str) -> GlyphloomResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))?;
    Ok(dir.join(format!("{}.{extension}", sanitize_filename(text))))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/filename.rs"]
mod tests;
