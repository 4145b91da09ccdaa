//! Line classification for the edge-list format.

use std::fmt::Display;
use std::str::FromStr;

use sprig_core::{Edge, Weight};

use crate::errors::EdgeListError;

const VERTICES_DIRECTIVE: &str = "vertices";

/// A meaningful line of input.
#[derive(Debug, PartialEq)]
pub(crate) enum Line<W> {
    Edge(Edge<W>),
    VertexCount(usize),
}

/// Parses one raw line, returning `None` for blanks and comments.
pub(crate) fn parse_line<W>(line: usize, raw: &str) -> Result<Option<Line<W>>, EdgeListError>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    let text = raw.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split_ascii_whitespace().collect();
    match fields.as_slice() {
        [VERTICES_DIRECTIVE, count] => count
            .parse::<usize>()
            .map(|count| Some(Line::VertexCount(count)))
            .map_err(|_| EdgeListError::InvalidVertexCount {
                line,
                text: text.to_owned(),
            }),
        [VERTICES_DIRECTIVE, ..] => Err(EdgeListError::InvalidVertexCount {
            line,
            text: text.to_owned(),
        }),
        [source, target, weight] => {
            let source = parse_vertex(line, source)?;
            let target = parse_vertex(line, target)?;
            let weight = weight
                .parse::<W>()
                .map_err(|err| EdgeListError::InvalidWeight {
                    line,
                    value: (*weight).to_owned(),
                    reason: err.to_string(),
                })?;
            Ok(Some(Line::Edge(Edge::new(source, target, weight))))
        }
        other => Err(EdgeListError::FieldCount {
            line,
            found: other.len(),
        }),
    }
}

fn parse_vertex(line: usize, value: &str) -> Result<usize, EdgeListError> {
    value
        .parse::<usize>()
        .map_err(|_| EdgeListError::InvalidVertex {
            line,
            value: value.to_owned(),
        })
}
