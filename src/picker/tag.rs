//! Option tagging.
//!
//! Every picker option carries a [`Tag`] slot next to its content. The slot is
//! untagged by default; [`PickerTag::picker_tag`] fills it in without changing
//! what the option renders.

use ratatui::text::Line;

/// Value associated with a picker option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<V> {
    Untagged,
    Tagged(V),
}

impl<V> Default for Tag<V> {
    fn default() -> Self {
        Tag::Untagged
    }
}

impl<V> Tag<V> {
    /// The tagged value, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            Tag::Tagged(value) => Some(value),
            Tag::Untagged => None,
        }
    }
}

/// One row of a value picker: the content to draw plus its tag.
#[derive(Debug, Clone)]
pub struct PickerOption<V> {
    content: Line<'static>,
    tag: Tag<V>,
}

impl<V> PickerOption<V> {
    /// Create an untagged option. It can never be selected.
    pub fn new(content: impl Into<Line<'static>>) -> Self {
        Self {
            content: content.into(),
            tag: Tag::Untagged,
        }
    }

    /// Replace the option's tag.
    pub fn picker_tag(mut self, tag: V) -> Self {
        self.tag = Tag::Tagged(tag);
        self
    }

    pub fn content(&self) -> &Line<'static> {
        &self.content
    }

    pub fn tag(&self) -> &Tag<V> {
        &self.tag
    }

    /// Plain text of the content, spans joined.
    pub fn label(&self) -> String {
        self.content
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }
}

/// Modifier-style tagging for anything that renders as a [`Line`].
///
/// ```ignore
/// let options = names.iter().map(|name| name.to_string().picker_tag(name.to_string()));
/// ```
pub trait PickerTag: Sized {
    /// Wrap `self` as a picker option tagged with `tag`.
    fn picker_tag<V>(self, tag: V) -> PickerOption<V>;
}

impl<T: Into<Line<'static>>> PickerTag for T {
    fn picker_tag<V>(self, tag: V) -> PickerOption<V> {
        PickerOption::new(self).picker_tag(tag)
    }
}
