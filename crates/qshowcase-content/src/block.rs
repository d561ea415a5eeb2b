use serde::Serialize;

use crate::topic::Topic;

/// A unit of display content.
///
/// Text fields may carry inline markup (`**bold**`, `` `code` ``); surfaces
/// decide whether to keep or style it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        text: &'static str,
    },
    Code {
        language: &'static str,
        source: &'static str,
    },
    Paragraph {
        text: &'static str,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    Link {
        label: &'static str,
        url: &'static str,
    },
    Rule,
}

impl Block {
    pub fn heading(level: u8, text: &'static str) -> Self {
        Block::Heading { level, text }
    }

    pub fn paragraph(text: &'static str) -> Self {
        Block::Paragraph { text }
    }

    pub fn bullets(items: Vec<ListItem>) -> Self {
        Block::List {
            ordered: false,
            items,
        }
    }

    pub fn numbered(items: Vec<ListItem>) -> Self {
        Block::List {
            ordered: true,
            items,
        }
    }

    /// Every piece of text carried by this block, depth-first
    pub fn texts(&self) -> Vec<&'static str> {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } => vec![*text],
            Block::Code { source, .. } => vec![*source],
            Block::List { items, .. } => items.iter().flat_map(ListItem::texts).collect(),
            Block::Link { label, url } => vec![*label, *url],
            Block::Rule => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ListItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ordered_children: bool,
}

impl ListItem {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            children: Vec::new(),
            ordered_children: false,
        }
    }

    pub fn with_bullets(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self.ordered_children = false;
        self
    }

    pub fn with_steps(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self.ordered_children = true;
        self
    }

    fn texts(&self) -> Vec<&'static str> {
        let mut out = vec![self.text];
        out.extend(self.children.iter().flat_map(ListItem::texts));
        out
    }
}

/// Output of one sidebar topic's renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub topic: Topic,
    pub header: &'static str,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn texts(&self) -> Vec<&'static str> {
        let mut out = vec![self.header];
        out.extend(self.blocks.iter().flat_map(Block::texts));
        out
    }

    /// Whether any text in the section contains `needle`
    #[cfg(test)]
    pub fn mentions(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

/// Full display sequence for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub intro: Vec<Block>,
    pub exploration: Block,
    pub section: Section,
    pub footer: Vec<Block>,
}

impl Page {
    /// Blocks in display order, with the section header as a level-2 heading
    pub fn blocks(&self) -> Vec<Block> {
        let mut out = self.intro.clone();
        out.push(self.exploration.clone());
        out.push(Block::heading(2, self.section.header));
        out.extend(self.section.blocks.iter().cloned());
        out.extend(self.footer.iter().cloned());
        out
    }
}
