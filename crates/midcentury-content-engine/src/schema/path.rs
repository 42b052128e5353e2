use std::fmt;

/// One step into a JSON document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a field inside a raw post document, printed as `content[3].url`.
///
/// Paths are built by extension (`key`/`index` return a new path) so a parent
/// path can be shared by every field check beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_display() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn nested_path_display() {
        let path = FieldPath::root().key("content").index(3).key("url");
        assert_eq!(path.to_string(), "content[3].url");
    }

    #[test]
    fn nested_index_display() {
        let path = FieldPath::root()
            .key("content")
            .index(0)
            .key("rows")
            .index(2)
            .index(1);
        assert_eq!(path.to_string(), "content[0].rows[2][1]");
    }

    #[test]
    fn extending_does_not_mutate_parent() {
        let parent = FieldPath::root().key("metadata");
        let child = parent.key("title");
        assert_eq!(parent.to_string(), "metadata");
        assert_eq!(child.to_string(), "metadata.title");
    }
}
