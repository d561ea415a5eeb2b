use qshowcase_content::{Catalog, Topic};

use crate::presentation::view_models::{TopicEntryViewModel, TopicListViewModel};

pub fn present_topic_list(catalog: &Catalog, default_topic: Topic) -> TopicListViewModel {
    let topics = catalog
        .topics()
        .map(|topic| TopicEntryViewModel {
            position: topic.index() + 1,
            label: topic.label().to_string(),
            slug: topic.slug().to_string(),
            header: catalog.render(topic).header.to_string(),
            is_default: topic == default_topic,
        })
        .collect();

    TopicListViewModel { topics }
}
