//! HTML rendering for parsed blocks.

use crate::model::{Block, Table};
use crate::parser::BlockParser;
use crate::render::{escape_html, InlineFormatter};

/// Renders block sequences to HTML fragments.
///
/// Fragments carry the CSS classes the shared stylesheet targets. Blocks
/// are joined with newlines; a card's nested fragment lives inside a single
/// `<section>` element.
pub struct HtmlRenderer {
    parser: BlockParser,
    inline: InlineFormatter,
}

impl HtmlRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self {
            parser: BlockParser::new(),
            inline: InlineFormatter::new(),
        }
    }

    /// Parse a raw section body and render it to an HTML fragment.
    pub fn render_body(&self, body: &str) -> String {
        self.render_blocks(&self.parser.parse(body))
    }

    /// Render parsed blocks to an HTML fragment.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Access the inline formatter, for callers assembling page chrome.
    pub fn inline(&self) -> &InlineFormatter {
        &self.inline
    }

    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Paragraph { text } => format!("<p>{}</p>", self.inline.format(text)),
            Block::Heading { level, text } => self.render_heading(*level, text),
            Block::OrderedList { items } => {
                format!("<ol>{}</ol>", self.render_items(items))
            }
            Block::UnorderedList { items } => {
                format!("<ul>{}</ul>", self.render_items(items))
            }
            Block::Table(table) => self.render_table(table),
            Block::Image { src, alt, caption } => self.render_image(src, alt, caption.as_deref()),
            Block::Card { kind, title, body } => format!(
                "<section class=\"{}\"><h3 class=\"module-subtitle\">{}</h3>{}</section>",
                kind.css_class(),
                self.inline.format(title),
                self.render_blocks(body)
            ),
        }
    }

    fn render_heading(&self, level: u8, text: &str) -> String {
        match level {
            3 => format!(
                "<h3 class=\"module-subtitle\">{}</h3>",
                self.inline.format(text)
            ),
            _ => format!(
                "<h4 class=\"module-subtitle-small\">{}</h4>",
                self.inline.format(text)
            ),
        }
    }

    fn render_items(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("<li>{}</li>", self.inline.format(item)))
            .collect::<String>()
    }

    fn render_table(&self, table: &Table) -> String {
        let columns = table.column_count();

        let thead = self
            .padded_cells(&table.header, columns)
            .map(|cell| format!("<th>{}</th>", cell))
            .collect::<String>();

        let tbody = table
            .rows
            .iter()
            .map(|row| {
                let tds = self
                    .padded_cells(row, columns)
                    .map(|cell| format!("<td>{}</td>", cell))
                    .collect::<String>();
                format!("<tr>{}</tr>", tds)
            })
            .collect::<String>();

        format!(
            "<div class=\"table-wrap\"><table class=\"content-table\">\
             <thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>",
            thead, tbody
        )
    }

    /// Format each cell and pad with empty cells up to `columns`.
    fn padded_cells<'a>(
        &'a self,
        cells: &'a [String],
        columns: usize,
    ) -> impl Iterator<Item = String> + 'a {
        (0..columns).map(move |idx| match cells.get(idx) {
            Some(cell) => self.inline.format(cell),
            None => String::new(),
        })
    }

    fn render_image(&self, src: &str, alt: &str, caption: Option<&str>) -> String {
        let caption_html = caption
            .map(|text| {
                format!(
                    "<figcaption class=\"figure-caption\">{}</figcaption>",
                    self.inline.format(text)
                )
            })
            .unwrap_or_default();

        format!(
            "<figure class=\"module-image\">\
             <img src=\"{}\" alt=\"{}\" onclick=\"this.classList.toggle('zoomed')\">\
             {}</figure>",
            escape_html(src),
            self.inline.format(alt),
            caption_html
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
