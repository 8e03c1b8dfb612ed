//! Rich-text editor capability surface
//!
//! The library ships no widget of its own; a host application embeds
//! whatever rich-text editor it likes and hands over HTML. What the
//! library does own is the vocabulary: the closed set of formatting
//! capabilities a host toolbar may expose, so configuration files and
//! host code agree on spelling.

/// A formatting control a host editor toolbar can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Heading,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    TextColor,
    BackgroundColor,
    OrderedList,
    UnorderedList,
    Align,
    Link,
    Image,
    Blockquote,
    CodeBlock,
}

impl Capability {
    /// Every capability, in default toolbar order.
    pub const ALL: [Capability; 14] = [
        Capability::Heading,
        Capability::Bold,
        Capability::Italic,
        Capability::Underline,
        Capability::Strikethrough,
        Capability::TextColor,
        Capability::BackgroundColor,
        Capability::OrderedList,
        Capability::UnorderedList,
        Capability::Align,
        Capability::Link,
        Capability::Image,
        Capability::Blockquote,
        Capability::CodeBlock,
    ];

    /// The kebab-case name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Heading => "heading",
            Capability::Bold => "bold",
            Capability::Italic => "italic",
            Capability::Underline => "underline",
            Capability::Strikethrough => "strikethrough",
            Capability::TextColor => "text-color",
            Capability::BackgroundColor => "background-color",
            Capability::OrderedList => "ordered-list",
            Capability::UnorderedList => "unordered-list",
            Capability::Align => "align",
            Capability::Link => "link",
            Capability::Image => "image",
            Capability::Blockquote => "blockquote",
            Capability::CodeBlock => "code-block",
        }
    }

    /// Case-insensitive lookup by capability name.
    pub fn from_name(name: &str) -> Option<Capability> {
        let lowered = name.to_ascii_lowercase();
        Capability::ALL
            .into_iter()
            .find(|capability| capability.name() == lowered)
    }
}

/// The full toolbar, every capability enabled.
pub fn default_toolbar() -> Vec<Capability> {
    Capability::ALL.to_vec()
}

/// Resolve configured capability names into a toolbar.
///
/// Unknown names are logged and skipped rather than failing the whole
/// toolbar.
pub fn toolbar_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Capability> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let capability = Capability::from_name(name);
            if capability.is_none() {
                log::warn!("unknown toolbar capability '{name}' ignored");
            }
            capability
        })
        .collect()
}
