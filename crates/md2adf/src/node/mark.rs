use std::mem::discriminant;

/// An inline formatting attribute attached to a text leaf.
///
/// ADF expresses inline formatting as flat marks on text nodes rather than
/// nested wrapper nodes. Marks are compared by kind and payload; the
/// declaration order below is the canonical order they are emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Link { attrs: LinkAttrs },
    Strong,
    Em,
    Strike,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct LinkAttrs {
    pub href: String,
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Self::Link {
            attrs: LinkAttrs { href: href.into() },
        }
    }

    fn is_same_kind(&self, other: &Self) -> bool {
        discriminant(self) == discriminant(other)
    }
}

/// The set of marks active at a point of the inline walk.
///
/// Contains at most one mark per kind. Extending the set with a mark whose
/// kind is already present replaces the existing one, so the innermost
/// wrapper wins. Serializes as a plain JSON array in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MarkSet(Vec<Mark>);

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set extended with `mark`, replacing any existing mark
    /// of the same kind.
    #[must_use]
    pub fn with(&self, mark: Mark) -> Self {
        let mut marks = self
            .0
            .iter()
            .filter(|m| !m.is_same_kind(&mark))
            .cloned()
            .collect::<Vec<_>>();
        marks.push(mark);
        marks.sort();
        Self(marks)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Mark] {
        &self.0
    }
}
