/// A half-open `[start, end)` byte range into the source markup.
///
/// An `end` of `0` means the fragment has not been closed. No real fragment
/// can end at offset 0, so the sentinel never collides with a resolved span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// End offset of a fragment still waiting for its close tag.
    pub const UNCLOSED: usize = 0;

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span for an open tag whose end is not known yet.
    pub fn open(start: usize) -> Self {
        Self::new(start, Self::UNCLOSED)
    }

    pub fn is_open(&self) -> bool {
        self.end == Self::UNCLOSED
    }

    /// Strict containment: `other` starts after and ends before `self`.
    ///
    /// An open span contains nothing.
    pub fn contains(&self, other: &Span) -> bool {
        other.start > self.start && other.end < self.end
    }
}

/// What a fragment was recognized as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentKind {
    /// An open tag, carrying its name with the source casing.
    Tag(String),
    /// A run of text between tag boundaries.
    Text,
}

/// A recognized tag or text run, located by its span.
///
/// The scanner produces fragments with empty `children`; [`crate::tree::build`]
/// fills them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub span: Span,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn tag(name: impl Into<String>, span: Span) -> Self {
        Self {
            kind: FragmentKind::Tag(name.into()),
            span,
            children: Vec::new(),
        }
    }

    pub fn text(span: Span) -> Self {
        Self {
            kind: FragmentKind::Text,
            span,
            children: Vec::new(),
        }
    }

    /// The tag name, or `None` for text.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            FragmentKind::Tag(name) => Some(name),
            FragmentKind::Text => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FragmentKind::Text)
    }

    pub fn is_open(&self) -> bool {
        self.span.is_open()
    }
}

/// Elements that are self-closing and never have children.
pub const VOID_ELEMENTS: &[&str] = &[
    "!doctype", "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// The set of tag names treated as void. Membership is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElements {
    names: Vec<String>,
}

impl Default for VoidElements {
    fn default() -> Self {
        Self::new(VOID_ELEMENTS.iter().copied())
    }
}

impl VoidElements {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            set.insert(name.as_ref());
        }
        set
    }

    /// Add a name to the set. Duplicates are ignored.
    pub fn insert(&mut self, name: &str) {
        let name = name.to_lowercase();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.names.iter().any(|n| *n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
