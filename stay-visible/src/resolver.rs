use crate::Host;

/// Finds the nearest ancestor of `node` that can scroll its own content.
///
/// An ancestor qualifies when its content overflows its box on either axis and its computed
/// overflow is not `visible`. The walk stops at the document root, which is returned even if
/// it does not qualify. Returns `None` only when the host has no document root.
///
/// Nothing is cached; every call walks the current tree.
pub fn find_scrollable_parent<H: Host>(host: &H, node: &H::Node) -> Option<H::Node> {
    let root = host.document_element();
    let mut current = node.clone();
    loop {
        let Some(parent) = host.parent_element(&current) else {
            svtrace!("find_scrollable_parent: reached top of tree");
            return root;
        };
        current = parent;

        if root.as_ref() == Some(&current) {
            return root;
        }

        let has_scrollable_space = host.scroll_metrics(&current).has_scrollable_space();
        if has_scrollable_space && !host.computed_overflow(&current).is_visible() {
            return Some(current);
        }
    }
}
