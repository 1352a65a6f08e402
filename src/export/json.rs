//! Nested JSON rendering of a (sub)tree
//!
//! Nodes are serialized straight from the arena, so large trees never get
//! copied into an intermediate structure.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    Error, Result,
    tree::{GameTree, NodeId},
};

/// Serializable view of a node and everything below it.
///
/// Produces `{"move", "outcome", "outcomes", "children"}` objects; the root's
/// move is `"Start"` and undecided nodes report `"undecided"`. With a depth
/// limit, nodes at the limit are emitted with empty `children` and
/// `"truncated": true`.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a GameTree,
    id: NodeId,
    depth_left: Option<usize>,
}

impl<'a> NodeView<'a> {
    pub fn new(tree: &'a GameTree, id: NodeId, max_depth: Option<usize>) -> Self {
        Self {
            tree,
            id,
            depth_left: max_depth,
        }
    }
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let node = self.tree.get(self.id);
        let truncated = self.depth_left == Some(0) && !node.children().is_empty();

        let label = node
            .mv()
            .map_or_else(|| "Start".to_string(), |mv| mv.to_string());
        let outcome = node.result().map_or("undecided", |outcome| outcome.as_str());

        let mut state = serializer.serialize_struct("Node", 5)?;
        state.serialize_field("move", &label)?;
        state.serialize_field("outcome", outcome)?;
        state.serialize_field("outcomes", node.outcomes())?;
        state.serialize_field("truncated", &truncated)?;
        state.serialize_field(
            "children",
            &Children {
                parent: self,
                ids: if truncated { &[] } else { node.children() },
            },
        )?;
        state.end()
    }
}

struct Children<'v, 'a> {
    parent: &'v NodeView<'a>,
    ids: &'a [NodeId],
}

impl Serialize for Children<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let depth_left = self.parent.depth_left.map(|d| d.saturating_sub(1));
        serializer.collect_seq(self.ids.iter().map(|&id| NodeView {
            tree: self.parent.tree,
            id,
            depth_left,
        }))
    }
}

/// Pretty-printed JSON for the subtree at `id`
pub fn to_json_string(tree: &GameTree, id: NodeId, max_depth: Option<usize>) -> Result<String> {
    if !tree.is_live(id) {
        return Err(Error::DanglingNode { node: id });
    }
    Ok(serde_json::to_string_pretty(&NodeView::new(tree, id, max_depth))?)
}

/// Write the whole tree as pretty-printed JSON
pub fn write_json(tree: &GameTree, path: &Path, max_depth: Option<usize>) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &NodeView::new(tree, tree.root(), max_depth))?;
    writer.flush()?;
    Ok(())
}
