/// A parsed piece of paragraph text.
///
/// Text is stored decoded (entities resolved); escaping happens only when the
/// tree is written out as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Bold(Vec<InlineNode>),
    Italic(Vec<InlineNode>),
    Underline(Vec<InlineNode>),
    /// `href` has already passed [`super::kinds::Link::sanitize_href`].
    Link {
        href: String,
        children: Vec<InlineNode>,
    },
    LineBreak,
}

impl InlineNode {
    /// Concatenated text of a node sequence with all formatting removed.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        collect_text(nodes, &mut out);
        out
    }
}

fn collect_text(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Bold(children)
            | InlineNode::Italic(children)
            | InlineNode::Underline(children)
            | InlineNode::Link { children, .. } => collect_text(children, out),
            InlineNode::LineBreak => out.push('\n'),
        }
    }
}
