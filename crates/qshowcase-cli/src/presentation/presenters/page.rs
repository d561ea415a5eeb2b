use qshowcase_content::{Block, Catalog, ListItem, Topic};

use crate::presentation::view_models::{
    BlockViewModel, ListItemViewModel, PageViewModel, SectionViewModel, TopicRefViewModel,
};

pub fn present_page(catalog: &Catalog, topic: Topic) -> PageViewModel {
    let page = catalog.page(topic);

    PageViewModel {
        topic: present_topic_ref(topic),
        intro: page.intro.iter().map(present_block).collect(),
        exploration: present_block(&page.exploration),
        section: SectionViewModel {
            header: page.section.header.to_string(),
            blocks: page.section.blocks.iter().map(present_block).collect(),
        },
        footer: page.footer.iter().map(present_block).collect(),
    }
}

fn present_topic_ref(topic: Topic) -> TopicRefViewModel {
    TopicRefViewModel {
        label: topic.label().to_string(),
        slug: topic.slug().to_string(),
        position: topic.index() + 1,
    }
}

fn present_block(block: &Block) -> BlockViewModel {
    match block {
        Block::Heading { level, text } => BlockViewModel::Heading {
            level: *level,
            text: text.to_string(),
        },
        Block::Code { language, source } => BlockViewModel::Code {
            language: language.to_string(),
            source: source.to_string(),
            line_count: source.lines().count(),
        },
        Block::Paragraph { text } => BlockViewModel::Paragraph {
            text: text.to_string(),
        },
        Block::List { ordered, items } => BlockViewModel::List {
            ordered: *ordered,
            items: items.iter().map(present_list_item).collect(),
        },
        Block::Link { label, url } => BlockViewModel::Link {
            label: label.to_string(),
            url: url.to_string(),
        },
        Block::Rule => BlockViewModel::Rule,
    }
}

fn present_list_item(item: &ListItem) -> ListItemViewModel {
    ListItemViewModel {
        text: item.text.to_string(),
        children: item.children.iter().map(present_list_item).collect(),
        ordered_children: item.ordered_children,
    }
}
