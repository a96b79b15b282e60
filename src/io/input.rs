use std::path::Path;

use anyhow::{Context, Result};

/// Load the transcript to score
///
/// A file path wins over inline text when both are supplied, mirroring how
/// an uploaded file overrides a pasted transcript. The content is trimmed;
/// an empty transcript is allowed here (scoring handles it as degenerate
/// input rather than an error).
pub fn load_transcript(path: Option<&Path>, inline: Option<&str>) -> Result<String> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {:?}", path))?;
        return Ok(content.trim().to_string());
    }

    if let Some(text) = inline {
        return Ok(text.trim().to_string());
    }

    anyhow::bail!("No transcript provided: pass a file path or inline text")
}
