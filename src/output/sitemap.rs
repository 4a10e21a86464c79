//! Site-map rendering
//!
//! Walks the adjacency store from a root address and produces an indented
//! tree, one address per line, children connected with `|__` markers:
//!
//! ```text
//! https://example.com
//! 	|__https://example.com/blog
//! 		|__https://example.com/blog/post
//! 	|__https://example.com/about
//! ```
//!
//! Rendering is read-only and deterministic for a fixed store, since child
//! order is the discovery order the store preserves.

use crate::state::AdjacencyStore;

/// Renders the tree rooted at `address`, bounded by the crawl's depth limit
///
/// `level` is the current indentation level; the top-level caller passes 1.
/// Once `level` reaches `max_depth` the address is emitted alone and its
/// children, recorded or not, are left out.
pub fn render_site_map(
    adjacency: &AdjacencyStore,
    address: &str,
    max_depth: u32,
    level: u32,
) -> String {
    if level >= max_depth {
        return address.to_string();
    }

    let mut rendered = address.to_string();

    if let Some(children) = adjacency.children(address) {
        for child in children {
            rendered.push('\n');
            rendered.push_str(&"\t".repeat(level as usize));
            rendered.push_str("|__");
            rendered.push_str(&render_site_map(adjacency, &child, max_depth, level + 1));
        }
    }

    rendered
}
