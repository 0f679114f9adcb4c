//! Block-level types.

use serde::{Deserialize, Serialize};

/// A content block inside a module body or auxiliary section.
///
/// Text fields carry raw markdown; the HTML renderer escapes and applies
/// inline formatting when the block is emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A single-line paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A level-3 or level-4 heading
    Heading {
        /// Heading level (3 or 4)
        level: u8,
        /// Heading text
        text: String,
    },

    /// A numbered list
    OrderedList {
        /// Item texts
        items: Vec<String>,
    },

    /// A bulleted list
    UnorderedList {
        /// Item texts
        items: Vec<String>,
    },

    /// A pipe table
    Table(Table),

    /// An image on its own line, optionally captioned
    Image {
        /// Image source path or URL
        src: String,
        /// Alternative text
        alt: String,
        /// Caption from a following `*caption*` line
        caption: Option<String>,
    },

    /// A callout card recognized by a reserved heading title
    Card {
        /// Visual kind of the card
        kind: CardKind,
        /// The reserved heading text, as written
        title: String,
        /// Nested blocks of the card body
        body: Vec<Block>,
    },
}

impl Block {
    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Check if this block is a card.
    pub fn is_card(&self) -> bool {
        matches!(self, Block::Card { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}

/// Visual kind of a callout card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Module quick-reference card
    Quick,
    /// Checklist card
    Checklist,
}

impl CardKind {
    /// CSS class used for the card container.
    pub fn css_class(&self) -> &'static str {
        match self {
            CardKind::Quick => "quick-card",
            CardKind::Checklist => "checklist-card",
        }
    }
}

/// A pipe table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, raw trimmed text
    pub header: Vec<String>,

    /// Body rows, raw trimmed text per cell
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header row.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Add a body row.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count for rendering: the maximum cell count across the header
    /// and every row. Short rows are padded, never truncated.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.len())
            .fold(self.header.len(), usize::max)
    }

    /// Check if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
