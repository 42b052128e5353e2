use html_escape::decode_html_entities;

use super::{
    cursor::Cursor,
    kinds::{Link, TagKind},
    types::InlineNode,
};

/// Parses paragraph text into a tree of [`InlineNode`]s.
///
/// Recognized tags become formatting nodes; anything else that looks like
/// markup stays literal text. Malformed markup never fails the parse:
/// - an unmatched closing tag is dropped
/// - a closing tag that skips over open tags flattens those tags
/// - tags still open at the end are dropped, keeping their content
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut tree = TreeBuilder::default();
    let mut text_start = cur.pos();

    while !cur.eof() {
        let tag_start = cur.pos();
        if let Some(tag) = try_parse_tag(&mut cur) {
            tree.push_text(cur.slice(text_start, tag_start));
            tree.apply(tag);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    tree.push_text(cur.slice(text_start, cur.pos()));
    tree.finish()
}

#[derive(Debug)]
struct Tag {
    kind: TagKind,
    closing: bool,
    self_closing: bool,
    href: Option<String>,
}

/// Attempts to parse a recognized tag at the current position.
///
/// Returns `None` (with the cursor restored) when not at `<`, when the name is
/// not a recognized tag, or when the tag never reaches its `>`.
fn try_parse_tag(cur: &mut Cursor<'_>) -> Option<Tag> {
    if cur.peek() != Some(TagKind::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let tag = parse_tag_body(cur);
    if tag.is_none() {
        *cur = saved;
    }
    tag
}

fn parse_tag_body(cur: &mut Cursor<'_>) -> Option<Tag> {
    cur.bump(); // <
    let closing = cur.peek() == Some(TagKind::END_MARK);
    if closing {
        cur.bump();
    }

    let name = cur.take_while(|b| b.is_ascii_alphanumeric());
    let kind = TagKind::from_name(name)?;

    let mut href = None;
    let mut self_closing = false;
    loop {
        cur.skip_whitespace();
        match cur.peek()? {
            TagKind::CLOSE => {
                cur.bump();
                break;
            }
            TagKind::END_MARK => {
                cur.bump();
                self_closing = true;
            }
            _ => {
                let attr = cur.take_while(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
                if attr.is_empty() {
                    return None;
                }
                cur.skip_whitespace();
                let value = if cur.peek() == Some(b'=') {
                    cur.bump();
                    cur.skip_whitespace();
                    read_attr_value(cur)?
                } else {
                    ""
                };
                if attr.eq_ignore_ascii_case(Link::HREF) {
                    href = Some(value.to_string());
                }
            }
        }
    }

    Some(Tag {
        kind,
        closing,
        self_closing,
        href,
    })
}

fn read_attr_value<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    match cur.peek()? {
        quote @ (b'"' | b'\'') => {
            cur.bump();
            let value = cur.take_while(|b| b != quote);
            cur.bump()?; // closing quote
            Some(value)
        }
        _ => Some(cur.take_while(|b| !b.is_ascii_whitespace() && b != TagKind::CLOSE)),
    }
}

struct Frame {
    kind: TagKind,
    href: Option<String>,
    children: Vec<InlineNode>,
}

impl Frame {
    /// Turns a closed frame into output nodes. A link whose href fails
    /// sanitization contributes only its children.
    fn into_nodes(self) -> Vec<InlineNode> {
        let node = match self.kind {
            TagKind::Bold => InlineNode::Bold(self.children),
            TagKind::Italic => InlineNode::Italic(self.children),
            TagKind::Underline => InlineNode::Underline(self.children),
            TagKind::Link => {
                let href = self
                    .href
                    .as_deref()
                    .and_then(|raw| Link::sanitize_href(&decode_html_entities(raw)));
                match href {
                    Some(href) => InlineNode::Link {
                        href,
                        children: self.children,
                    },
                    None => {
                        log::debug!("Dropping link with unsafe href {:?}", self.href);
                        return self.children;
                    }
                }
            }
            TagKind::LineBreak => InlineNode::LineBreak,
        };
        vec![node]
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<InlineNode>,
    open: Vec<Frame>,
}

impl TreeBuilder {
    fn children(&mut self) -> &mut Vec<InlineNode> {
        match self.open.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, node: InlineNode) {
        push_merged(self.children(), node);
    }

    fn push_all(&mut self, nodes: Vec<InlineNode>) {
        let children = self.children();
        for node in nodes {
            push_merged(children, node);
        }
    }

    fn push_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.push(InlineNode::Text(decode_html_entities(raw).into_owned()));
    }

    fn apply(&mut self, tag: Tag) {
        if tag.kind.is_void() {
            if !tag.closing {
                self.push(InlineNode::LineBreak);
            }
            return;
        }
        if tag.closing {
            self.close(tag.kind);
        } else if !tag.self_closing {
            self.open.push(Frame {
                kind: tag.kind,
                href: tag.href,
                children: Vec::new(),
            });
        }
    }

    fn close(&mut self, kind: TagKind) {
        let Some(pos) = self.open.iter().rposition(|frame| frame.kind == kind) else {
            log::debug!("Dropping unmatched closing tag {kind:?}");
            return;
        };

        while self.open.len() > pos + 1 {
            self.flatten_top();
        }
        if let Some(frame) = self.open.pop() {
            self.push_all(frame.into_nodes());
        }
    }

    /// Removes the innermost open tag, keeping its content unformatted.
    fn flatten_top(&mut self) {
        if let Some(frame) = self.open.pop() {
            log::debug!("Dropping unclosed tag {:?}", frame.kind);
            self.push_all(frame.children);
        }
    }

    fn finish(mut self) -> Vec<InlineNode> {
        while !self.open.is_empty() {
            self.flatten_top();
        }
        self.root
    }
}

/// Appends a node, joining it onto a preceding text node where possible.
fn push_merged(children: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(text) = &node
        && let Some(InlineNode::Text(prev)) = children.last_mut()
    {
        prev.push_str(text);
        return;
    }
    children.push(node);
}
