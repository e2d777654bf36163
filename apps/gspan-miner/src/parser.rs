//! The textual input parser: turns the line-oriented graph format into
//! [`gspan_core::InputGraph`] records. Kept out of `gspan-core` — the
//! core only knows about already-parsed graphs.

use std::io::BufRead;

use gspan_core::primitives::FILE_MAX_LINE;
use gspan_core::{Error, InputEdge, InputGraph, InputVertex, Result};

/// Parses every graph out of `reader`, splitting fields on `mark`.
///
/// Recognized line kinds: `t # <id>` starts a graph, `v <id> <label>` adds
/// a vertex, `e <from> <to> <label>` adds an edge, blank lines are
/// ignored. Any other leading token is a fatal [`Error::InputFormat`] —
/// malformed input is rejected outright, never silently skipped.
pub fn parse_graphs(reader: impl BufRead, mark: &str) -> Result<Vec<InputGraph>> {
    let mut graphs = Vec::new();
    let mut current: Option<InputGraph> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.len() > FILE_MAX_LINE {
            return Err(fmt_err(line_no, &format!("line exceeds {FILE_MAX_LINE} characters")));
        }

        let fields: Vec<&str> = trimmed.split(mark).filter(|f| !f.is_empty()).collect();
        let Some(&tag) = fields.first() else { continue };

        match tag {
            "t" => {
                if let Some(graph) = current.take() {
                    graphs.push(graph);
                }
                let id = fields
                    .get(2)
                    .ok_or_else(|| fmt_err(line_no, "`t` line missing graph id"))?
                    .parse::<usize>()
                    .map_err(|_| fmt_err(line_no, "graph id is not an integer"))?;
                current = Some(InputGraph { id, vertices: Vec::new(), edges: Vec::new() });
            }
            "v" => {
                let graph = current.as_mut().ok_or_else(|| fmt_err(line_no, "`v` line before any `t` line"))?;
                let id = parse_field(&fields, 1, line_no, "vertex id")?;
                let label = parse_field(&fields, 2, line_no, "vertex label")?;
                graph.vertices.push(InputVertex { id, label });
            }
            "e" => {
                let graph = current.as_mut().ok_or_else(|| fmt_err(line_no, "`e` line before any `t` line"))?;
                let from = parse_field(&fields, 1, line_no, "edge source")?;
                let to = parse_field(&fields, 2, line_no, "edge target")?;
                let label = parse_field(&fields, 3, line_no, "edge label")?;
                graph.edges.push(InputEdge { from, to, label });
            }
            other => return Err(fmt_err(line_no, &format!("unrecognized line tag `{other}`"))),
        }
    }

    if let Some(graph) = current.take() {
        graphs.push(graph);
    }

    Ok(graphs)
}

fn parse_field<T: std::str::FromStr>(fields: &[&str], index: usize, line_no: usize, what: &str) -> Result<T> {
    fields
        .get(index)
        .ok_or_else(|| fmt_err(line_no, &format!("missing {what}")))?
        .parse::<T>()
        .map_err(|_| fmt_err(line_no, &format!("{what} is not a valid number")))
}

fn fmt_err(line: usize, detail: &str) -> Error {
    Error::InputFormat { line, detail: detail.to_string() }
}
