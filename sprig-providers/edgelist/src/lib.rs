//! Edge-list provider reading weighted undirected graphs from text.
//!
//! Each non-blank line holds `source target weight` separated by ASCII
//! whitespace. Lines starting with `#` are comments, and a single
//! `vertices N` directive may declare the vertex count explicitly.
//!
//! ```
//! use sprig_core::VertexIndexing;
//! use sprig_providers_edgelist::EdgeList;
//!
//! let text = "# triangle\nvertices 3\n1 2 4\n2 3 1\n1 3 2\n";
//! let list: EdgeList<u32> = text.parse()?;
//! assert_eq!(list.edges().len(), 3);
//! assert_eq!(list.vertex_count(VertexIndexing::OneBased), 3);
//! # Ok::<(), sprig_providers_edgelist::EdgeListError>(())
//! ```

mod errors;
mod list;
mod parse;

pub use errors::EdgeListError;
pub use list::EdgeList;
