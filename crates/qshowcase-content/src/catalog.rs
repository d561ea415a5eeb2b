use crate::block::{Page, Section};
use crate::error::Result;
use crate::intro::{exploration_heading, footer, intro};
use crate::sections;
use crate::topic::Topic;

/// Renderer for one sidebar topic
pub type SectionRenderer = fn() -> Section;

/// Dispatch table, indexed by `Topic::index()`.
static STANDARD_TABLE: [(Topic, SectionRenderer); Topic::COUNT] = [
    (Topic::ProjectCodeWalkthrough, sections::code_walkthrough),
    (
        Topic::HistoryOfQuantumMechanics,
        sections::history_of_quantum_mechanics,
    ),
    (Topic::CurrentQuantumWorld, sections::current_quantum_world),
    (
        Topic::QuantumMathAndNotations,
        sections::quantum_math_and_notations,
    ),
    (Topic::QuantumGatesAndOperations, sections::quantum_gates),
    (
        Topic::TeleportationStepsAndCircuitry,
        sections::teleportation_steps,
    ),
    (
        Topic::MindBlowingQuantumExperiments,
        sections::quantum_experiments,
    ),
    (
        Topic::TheoreticalIdeasYetToBeProven,
        sections::theoretical_ideas,
    ),
    (Topic::RvUniversityAndCqst, sections::rv_university),
];

/// Maps each sidebar topic to exactly one section renderer.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    table: &'static [(Topic, SectionRenderer); Topic::COUNT],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            table: &STANDARD_TABLE,
        }
    }

    /// Topics in menu order
    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.table.iter().map(|(topic, _)| *topic)
    }

    pub fn renderer(&self, topic: Topic) -> SectionRenderer {
        let (entry_topic, renderer) = self.table[topic.index()];
        debug_assert_eq!(entry_topic, topic, "dispatch table out of menu order");
        renderer
    }

    pub fn render(&self, topic: Topic) -> Section {
        (self.renderer(topic))()
    }

    /// Render from a raw label or slug
    pub fn render_label(&self, label: &str) -> Result<Section> {
        let topic: Topic = label.parse()?;
        Ok(self.render(topic))
    }

    pub fn page(&self, topic: Topic) -> Page {
        Page {
            intro: intro(),
            exploration: exploration_heading(),
            section: self.render(topic),
            footer: footer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, ListItem};
    use crate::error::Error;
    use std::collections::HashSet;

    fn top_level_items(section: &Section) -> Vec<&'static str> {
        section
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::List { items, .. } => Some(items.iter().map(|i| i.text)),
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn test_table_is_in_menu_order() {
        let catalog = Catalog::standard();
        let topics: Vec<Topic> = catalog.topics().collect();
        assert_eq!(topics, Topic::ALL.to_vec());
    }

    #[test]
    fn test_every_topic_renders_its_own_section() {
        let catalog = Catalog::standard();
        for topic in Topic::ALL {
            assert_eq!(catalog.render(topic).topic, topic);
        }
    }

    #[test]
    fn test_mapping_is_injective() {
        let catalog = Catalog::standard();
        let headers: HashSet<_> = Topic::ALL
            .iter()
            .map(|t| catalog.render(*t).header)
            .collect();
        assert_eq!(headers.len(), Topic::COUNT);

        let bodies: HashSet<_> = Topic::ALL
            .iter()
            .map(|t| catalog.render(*t).blocks)
            .map(|b| format!("{:?}", b))
            .collect();
        assert_eq!(bodies.len(), Topic::COUNT);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let catalog = Catalog::standard();
        for topic in Topic::ALL {
            assert_eq!(catalog.render(topic), catalog.render(topic));
            assert_eq!(catalog.page(topic), catalog.page(topic));
        }
    }

    #[test]
    fn test_no_section_leaks_another_header() {
        let catalog = Catalog::standard();
        for topic in Topic::ALL {
            let section = catalog.render(topic);
            for other in Topic::ALL.into_iter().filter(|o| *o != topic) {
                let other_header = catalog.render(other).header;
                assert!(
                    !section.texts().contains(&other_header),
                    "{} contains header of {}",
                    topic,
                    other
                );
            }
        }
    }

    #[test]
    fn test_intro_and_footer_are_unconditional() {
        let catalog = Catalog::standard();
        let reference = catalog.page(Topic::default());
        for topic in Topic::ALL {
            let page = catalog.page(topic);
            assert_eq!(page.intro, reference.intro);
            assert_eq!(page.exploration, reference.exploration);
            assert_eq!(page.footer, reference.footer);
        }
    }

    #[test]
    fn test_history_section() {
        let section = Catalog::standard()
            .render_label("History of Quantum Mechanics")
            .unwrap();
        assert_eq!(section.header, "History of Quantum Mechanics");
        assert_eq!(
            top_level_items(&section),
            vec![
                "**1900**: Max Planck proposed quantization of energy.",
                "**1925-27**: Schrödinger and Heisenberg formalized quantum mechanics.",
                "**1980s**: Feynman envisioned quantum computers.",
            ]
        );
    }

    #[test]
    fn test_gates_section_lists_exactly_four_gates() {
        let section = Catalog::standard().render(Topic::QuantumGatesAndOperations);
        let Block::List { items, .. } = &section.blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(section.blocks.len(), 1);
        assert_eq!(items.len(), 3);
        assert!(items[0].text.contains("Hadamard"));
        assert!(items[1].text.contains("CNOT"));
        assert!(items[2].text.contains("Pauli"));

        let pauli: Vec<&str> = items[2].children.iter().map(|c| c.text).collect();
        assert_eq!(pauli.len(), 2);
        assert!(pauli[0].starts_with("X:"));
        assert!(pauli[1].starts_with("Z:"));
        assert!(!section.mentions("Toffoli"));
        assert!(!section.mentions("Y:"));
    }

    #[test]
    fn test_walkthrough_nests_teleport_steps() {
        let section = Catalog::standard().render(Topic::default());
        let Block::List { items, .. } = &section.blocks[0] else {
            panic!("expected a list");
        };
        let teleport: &ListItem = &items[1];
        assert!(teleport.ordered_children);
        assert_eq!(teleport.children.len(), 3);
    }

    #[test]
    fn test_cqst_links_to_university() {
        let section = Catalog::standard().render(Topic::RvUniversityAndCqst);
        assert!(section.blocks.contains(&Block::Link {
            label: "Visit CQST: RV University",
            url: "https://www.rvu.edu.in",
        }));
    }

    #[test]
    fn test_render_label_rejects_unknown() {
        let err = Catalog::standard().render_label("Quantum Knitting").unwrap_err();
        assert!(matches!(err, Error::UnknownTopic { .. }));
    }

    #[test]
    fn test_page_blocks_order() {
        let page = Catalog::standard().page(Topic::HistoryOfQuantumMechanics);
        let blocks = page.blocks();
        let header_pos = blocks
            .iter()
            .position(|b| *b == Block::heading(2, "History of Quantum Mechanics"))
            .unwrap();
        let code_pos = blocks
            .iter()
            .position(|b| matches!(b, Block::Code { .. }))
            .unwrap();
        let rule_pos = blocks.iter().position(|b| *b == Block::Rule).unwrap();
        assert!(code_pos < header_pos);
        assert!(header_pos < rule_pos);
        assert_eq!(rule_pos, blocks.len() - 2);
    }
}
