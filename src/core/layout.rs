//! Rendering-engine boundary: typed layout nodes.
//!
//! Report derivation produces an ordered tree of these nodes; an external
//! layout engine paginates them onto fixed-size pages. Pagination and
//! page-break behavior are entirely the engine's concern, which is why the
//! nodes only carry hints (`wrap`, `fixed`) rather than positions.

use serde::Serialize;

/// One node in the document tree handed to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum LayoutNode {
    /// A fixed-size page holding the whole document flow
    Page {
        /// Child nodes in document order
        children: Vec<LayoutNode>,
    },
    /// A vertical group of nodes
    Block {
        /// Vertical spacing above the block, in layout units
        spacing_top: u32,
        /// Whether the engine may break the block across pages
        wrap: bool,
        /// Whether the block repeats on every page (headers/footers)
        fixed: bool,
        /// Child nodes in document order
        children: Vec<LayoutNode>,
    },
    /// A horizontal flex row
    Row {
        /// Child nodes left to right
        children: Vec<LayoutNode>,
    },
    /// Styled text content
    Text {
        /// The text to render
        content: String,
        /// Styling hints
        style: TextStyle,
    },
    /// A table with a header row and per-column flex weights
    Table {
        /// Header labels
        headers: Vec<String>,
        /// Body rows
        rows: Vec<Vec<String>>,
        /// Relative column widths; empty means equal widths
        column_flex: Vec<u32>,
    },
    /// An image referenced by path, resolved by the engine
    Image {
        /// Image path
        path: String,
    },
}

/// Styling hints for a [`LayoutNode::Text`] node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextStyle {
    /// Font size; `None` means the engine default
    pub size: Option<u32>,
    /// Bold weight
    pub bold: bool,
    /// Rendered in the document accent color
    pub accent: bool,
}

impl TextStyle {
    /// Bold text at the default size.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            size: None,
            bold: true,
            accent: false,
        }
    }

    /// Bold text at a fixed size.
    #[must_use]
    pub const fn heading(size: u32) -> Self {
        Self {
            size: Some(size),
            bold: true,
            accent: false,
        }
    }

    /// Accent-colored bold text (section title highlights).
    #[must_use]
    pub const fn accent() -> Self {
        Self {
            size: None,
            bold: true,
            accent: true,
        }
    }
}

impl LayoutNode {
    /// Plain text node with default styling.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    /// Text node with explicit styling.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Breakable vertical group with the given top spacing.
    #[must_use]
    pub fn section(spacing_top: u32, children: Vec<LayoutNode>) -> Self {
        Self::Block {
            spacing_top,
            wrap: true,
            fixed: false,
            children,
        }
    }

    /// Unbreakable vertical group (kept on one page).
    #[must_use]
    pub fn group(spacing_top: u32, children: Vec<LayoutNode>) -> Self {
        Self::Block {
            spacing_top,
            wrap: false,
            fixed: false,
            children,
        }
    }

    /// Block repeated on every page (header/footer).
    #[must_use]
    pub fn fixed(children: Vec<LayoutNode>) -> Self {
        Self::Block {
            spacing_top: 0,
            wrap: false,
            fixed: true,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_nodes_tag_their_type_on_the_wire() {
        let node = LayoutNode::section(24, vec![LayoutNode::text("hello")]);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "Block");
        assert_eq!(json["spacing_top"], 24);
        assert_eq!(json["children"][0]["type"], "Text");
        assert_eq!(json["children"][0]["content"], "hello");
    }

    #[test]
    fn test_fixed_blocks_carry_the_repeat_hint() {
        let node = LayoutNode::fixed(vec![LayoutNode::Image {
            path: "logo.png".to_string(),
        }]);
        let LayoutNode::Block { fixed, wrap, .. } = &node else {
            panic!("expected a block");
        };
        assert!(*fixed);
        assert!(!wrap);
    }
}
