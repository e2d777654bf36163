//! Writes a [`gspan_core::MiningOutcome`] to disk: one `<prefix>.t<thread>`
//! file per worker buffer, plus an optional `<prefix>.nodes` file.

use std::io::Write;
use std::path::Path;

use gspan_core::{MiningOutcome, Result};

/// Flushes every worker's output buffer and, if present, the
/// frequent-nodes buffer, to files under `prefix`. A no-op (returns `Ok`
/// immediately) if `prefix` is empty, matching `-o ""` meaning "no output".
pub fn write_outcome(prefix: &str, outcome: &MiningOutcome, emit_parents: bool, emit_pattern: bool) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }

    for (thread_id, output) in outcome.per_thread_output.iter().enumerate() {
        if output.is_empty() {
            continue;
        }
        let path = format!("{prefix}.t{thread_id}");
        write_file(&path, &output.render(emit_parents, emit_pattern))?;
    }

    if let Some(nodes) = &outcome.frequent_nodes {
        let path = format!("{prefix}.nodes");
        write_file(&path, &nodes.render(false, true))?;
    }

    Ok(())
}

fn write_file(path: &str, contents: &str) -> Result<()> {
    let mut file = std::fs::File::create(Path::new(path))?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
