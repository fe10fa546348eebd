//! Component Tree Operations
//!
//! Recursive operations over the document's node tree: lookup, deletion,
//! duplication, counting, and id regeneration. All functions operate on
//! the root sequence a document owns and stop at the first match.

pub mod tree;


pub use tree::{
    assign_fresh_ids, count_nodes, delete_node, duplicate_node, find_node, find_node_mut,
};
