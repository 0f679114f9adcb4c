//! Block-level parsing for module bodies.

use regex::Regex;

use crate::model::{Block, CardKind};
use crate::parser::TableDetector;

/// Nested cards deeper than this degrade to plain headings.
const MAX_CARD_DEPTH: usize = 2;

/// Reserved level-3 heading titles that open a callout card.
const QUICK_CARD_TITLE: &str = "scheda rapida del modulo";
const CHECKLIST_CARD_TITLES: [&str; 2] = [
    "checklist dei concetti principali",
    "principali punti di fine sezione",
];

/// Parses a body's lines into an ordered sequence of [`Block`]s.
///
/// The parser walks the lines with a cursor; each step classifies the block
/// starting at the current position and returns how far it consumed. Every
/// line is classifiable as at least a paragraph, so malformed input degrades
/// to plain text instead of failing.
pub struct BlockParser {
    heading3: Regex,
    heading4: Regex,
    image: Regex,
    caption: Regex,
    ordered_item: Regex,
    tables: TableDetector,
}

impl BlockParser {
    /// Create a parser with its patterns compiled once.
    pub fn new() -> Self {
        Self {
            heading3: Regex::new(r"^###\s+(.+)$").unwrap(),
            heading4: Regex::new(r"^####\s+(.+)$").unwrap(),
            image: Regex::new(r"^!\[(.*?)\]\((.*?)\)$").unwrap(),
            caption: Regex::new(r"^\*(.*?)\*$").unwrap(),
            ordered_item: Regex::new(r"^\d+\.\s+(.+)$").unwrap(),
            tables: TableDetector::new(),
        }
    }

    /// Parse a raw body into blocks.
    pub fn parse(&self, body: &str) -> Vec<Block> {
        let lines: Vec<&str> = body.lines().collect();
        self.parse_lines(&lines, 0)
    }

    fn parse_lines(&self, lines: &[&str], depth: usize) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let (block, next) = self.next_block(lines, i, depth);
            debug_assert!(next > i, "cursor must advance");
            if let Some(block) = block {
                blocks.push(block);
            }
            i = next;
        }
        blocks
    }

    /// Classify the block at `i` and return it with the next cursor position.
    fn next_block(&self, lines: &[&str], i: usize, depth: usize) -> (Option<Block>, usize) {
        let line = lines[i].trim();

        if line.is_empty() {
            return (None, i + 1);
        }

        if let Some((table, next)) = self.tables.detect(lines, i) {
            return (Some(Block::Table(table)), next);
        }

        if let Some(caps) = self.heading3.captures(line) {
            let text = caps[1].trim().to_string();
            if let Some(kind) = card_kind(&text) {
                if depth < MAX_CARD_DEPTH {
                    return self.consume_card(lines, i + 1, kind, text, depth);
                }
                log::debug!("card nesting limit reached, emitting plain heading");
            }
            return (Some(Block::heading(3, text)), i + 1);
        }

        if let Some(caps) = self.heading4.captures(line) {
            return (Some(Block::heading(4, caps[1].trim().to_string())), i + 1);
        }

        if let Some(caps) = self.image.captures(line) {
            return self.consume_image(lines, i, &caps[1], &caps[2]);
        }

        if self.ordered_item.is_match(line) {
            return self.consume_ordered_list(lines, i);
        }

        if line.starts_with("- ") {
            return self.consume_unordered_list(lines, i);
        }

        (Some(Block::paragraph(line)), i + 1)
    }

    /// Collect a card body: lines up to the next level-3/4 heading, stopping
    /// at the first blank line once content has been seen. Leading blank
    /// lines are tolerated.
    fn consume_card(
        &self,
        lines: &[&str],
        start: usize,
        kind: CardKind,
        title: String,
        depth: usize,
    ) -> (Option<Block>, usize) {
        let mut collected: Vec<&str> = Vec::new();
        let mut seen_content = false;
        let mut i = start;

        while i < lines.len() {
            let raw = lines[i];
            let line = raw.trim();
            if self.heading3.is_match(line) || self.heading4.is_match(line) {
                break;
            }
            if line.is_empty() {
                if seen_content {
                    break;
                }
                i += 1;
                continue;
            }
            seen_content = true;
            collected.push(raw);
            i += 1;
        }

        let body = self.parse_lines(&collected, depth + 1);
        (Some(Block::Card { kind, title, body }), i)
    }

    fn consume_image(
        &self,
        lines: &[&str],
        i: usize,
        alt: &str,
        src: &str,
    ) -> (Option<Block>, usize) {
        let mut caption = None;
        let mut next = i + 1;
        if next < lines.len() {
            if let Some(caps) = self.caption.captures(lines[next].trim()) {
                caption = Some(caps[1].trim().to_string());
                next += 1;
            }
        }
        let block = Block::Image {
            src: src.trim().to_string(),
            alt: alt.trim().to_string(),
            caption,
        };
        (Some(block), next)
    }

    fn consume_ordered_list(&self, lines: &[&str], start: usize) -> (Option<Block>, usize) {
        let mut items = Vec::new();
        let mut i = start;
        while i < lines.len() {
            match self.ordered_item.captures(lines[i].trim()) {
                Some(caps) => items.push(caps[1].trim().to_string()),
                None => break,
            }
            i += 1;
        }
        (Some(Block::OrderedList { items }), i)
    }

    fn consume_unordered_list(&self, lines: &[&str], start: usize) -> (Option<Block>, usize) {
        let mut items = Vec::new();
        let mut i = start;
        while i < lines.len() {
            let line = lines[i].trim();
            if !line.starts_with("- ") {
                break;
            }
            items.push(line[2..].trim().to_string());
            i += 1;
        }
        (Some(Block::UnorderedList { items }), i)
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Card kind for a reserved heading title, or `None` for ordinary headings.
fn card_kind(title: &str) -> Option<CardKind> {
    let key = title.to_lowercase();
    if key == QUICK_CARD_TITLE {
        Some(CardKind::Quick)
    } else if CHECKLIST_CARD_TITLES.contains(&key.as_str()) {
        Some(CardKind::Checklist)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<Block> {
        BlockParser::new().parse(body)
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let blocks = parse("\n\nuna riga\n\n");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::Paragraph { text } if text == "una riga"));
    }

    #[test]
    fn test_plain_heading_levels() {
        let blocks = parse("### Approfondimento\n#### Dettaglio");
        assert!(matches!(&blocks[0], Block::Heading { level: 3, .. }));
        assert!(matches!(&blocks[1], Block::Heading { level: 4, .. }));
    }

    #[test]
    fn test_hash_run_without_space_is_paragraph() {
        let blocks = parse("#####testo");
        assert!(matches!(&blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_ordered_list_grouping() {
        let blocks = parse("1. uno\n2. due\n3. tre\nprosa");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::OrderedList { items } => assert_eq!(items, &["uno", "due", "tre"]),
            other => panic!("expected ordered list, got {:?}", other),
        }
    }

    #[test]
    fn test_unordered_list_stops_at_non_item() {
        let blocks = parse("- a\n- b\nfine");
        match &blocks[0] {
            Block::UnorderedList { items } => assert_eq!(items, &["a", "b"]),
            other => panic!("expected unordered list, got {:?}", other),
        }
        assert!(matches!(&blocks[1], Block::Paragraph { .. }));
    }

    #[test]
    fn test_image_with_caption() {
        let blocks = parse("![schema](img/rete.png)\n*Topologia di rete*");
        match &blocks[0] {
            Block::Image { src, alt, caption } => {
                assert_eq!(src, "img/rete.png");
                assert_eq!(alt, "schema");
                assert_eq!(caption.as_deref(), Some("Topologia di rete"));
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_image_without_caption() {
        let blocks = parse("![schema](img/rete.png)\nprosa normale");
        match &blocks[0] {
            Block::Image { caption, .. } => assert!(caption.is_none()),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_card_closes_at_blank_line_after_content() {
        let blocks = parse(
            "### Scheda rapida del modulo\n- punto uno\n- punto due\n\nprosa non correlata",
        );
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::Card { kind, body, .. } => {
                assert_eq!(*kind, CardKind::Quick);
                assert_eq!(body.len(), 1);
                assert!(matches!(&body[0], Block::UnorderedList { .. }));
            }
            other => panic!("expected card, got {:?}", other),
        }
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "prosa non correlata"));
    }

    #[test]
    fn test_card_tolerates_leading_blank_lines() {
        let blocks = parse("### Checklist dei concetti principali\n\n\n- voce");
        match &blocks[0] {
            Block::Card { kind, body, .. } => {
                assert_eq!(*kind, CardKind::Checklist);
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected card, got {:?}", other),
        }
    }

    #[test]
    fn test_card_title_match_is_case_insensitive() {
        let blocks = parse("### SCHEDA RAPIDA DEL MODULO\ntesto");
        assert!(blocks[0].is_card());
    }

    #[test]
    fn test_card_stops_at_next_heading() {
        let blocks = parse("### Principali punti di fine sezione\n- voce\n#### Dettaglio");
        assert!(blocks[0].is_card());
        assert!(matches!(&blocks[1], Block::Heading { level: 4, .. }));
    }

    #[test]
    fn test_unreserved_heading_is_not_a_card() {
        let blocks = parse("### Introduzione storica\ntesto");
        assert!(matches!(&blocks[0], Block::Heading { level: 3, .. }));
        assert!(matches!(&blocks[1], Block::Paragraph { .. }));
    }

    #[test]
    fn test_adjacent_reserved_headings_become_sibling_cards() {
        // Card collection stops at the next heading, so a second reserved
        // title opens a sibling card, never a nested one.
        let body = "### Scheda rapida del modulo\n\
                    ### Checklist dei concetti principali\n\
                    testo interno";
        let blocks = parse(body);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_card());
        assert!(blocks[1].is_card());
        match &blocks[0] {
            Block::Card { body, .. } => assert!(body.is_empty()),
            other => panic!("expected card, got {:?}", other),
        }
    }

    #[test]
    fn test_card_body_can_hold_a_table() {
        let body = "### Scheda rapida del modulo\n| A | B |\n| --- | --- |\n| 1 | 2 |";
        let blocks = parse(body);
        match &blocks[0] {
            Block::Card { body, .. } => assert!(body[0].is_table()),
            other => panic!("expected card, got {:?}", other),
        }
    }

    #[test]
    fn test_table_dispatch_beats_paragraph() {
        let blocks = parse("| A | B |\n| --- | --- |\n| 1 | 2 |");
        assert!(blocks[0].is_table());
    }

    #[test]
    fn test_lone_pipe_line_degrades_to_paragraph() {
        let blocks = parse("| niente separatore |");
        assert!(matches!(&blocks[0], Block::Paragraph { .. }));
    }
}
