//! Render tree built and folded within a single compile call.

use hubql_core::Fragment;

/// Spread of the externally registered `rateLimit` fragment. Closes every document.
pub const RATE_LIMIT_FRAGMENT: &str = "...rateLimit";

#[derive(Debug, Clone)]
pub(crate) enum QueryNode<'r> {
    Selection {
        fragment: &'r Fragment,
        children: Vec<QueryNode<'r>>,
    },
    RateLimit,
}

impl<'r> QueryNode<'r> {
    pub(crate) fn selection(fragment: &'r Fragment, children: Vec<QueryNode<'r>>) -> Self {
        QueryNode::Selection { fragment, children }
    }

    pub(crate) fn leaf(fragment: &'r Fragment) -> Self {
        Self::selection(fragment, Vec::new())
    }

    /// Depth-first: children first, then this node's fragment around them.
    pub(crate) fn render(&self) -> String {
        match self {
            QueryNode::Selection { fragment, children } => fragment.render(&render_all(children)),
            QueryNode::RateLimit => RATE_LIMIT_FRAGMENT.to_owned(),
        }
    }
}

/// Render sibling nodes separated by newlines.
pub(crate) fn render_all(nodes: &[QueryNode<'_>]) -> String {
    nodes
        .iter()
        .map(QueryNode::render)
        .collect::<Vec<_>>()
        .join("\n")
}
