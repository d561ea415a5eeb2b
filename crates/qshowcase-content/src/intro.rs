use crate::block::{Block, ListItem};

/// Q# teleportation program shown at the top of every page
pub const QSHARP_TELEPORT_SOURCE: &str = r#"namespace Sample {
    open Microsoft.Quantum.Diagnostics;
    open Microsoft.Quantum.Intrinsic;
    open Microsoft.Quantum.Measurement;

    @EntryPoint()
    operation Main() : Result[] {
        use (message, target) = (Qubit(), Qubit());
        let stateInitializerBasisTuples = [
            ("|0〉", I, PauliZ),
            ("|0〉", I, PauliZ),
            ("|0〉", I, PauliZ),
            ("|0〉", I, PauliZ)
        ];

        mutable results = [];

        // Loop to teleport multiple states
        for (state, initializer, basis) in stateInitializerBasisTuples {
            initializer(message);
            Message($"Teleporting state {state}");
            DumpMachine();
            Teleport(message, target);
            Message($"Received state {state}");
            DumpMachine();
            let result = Measure([basis], [target]);
            set results += [result];
            ResetAll([message, target]);
        }
        return results;
    }

    // Teleportation operation
    operation Teleport(message : Qubit, target : Qubit) : Unit {
        use auxiliary = Qubit();

        // Entanglement generation
        H(auxiliary);
        CNOT(auxiliary, target);
        CNOT(message, auxiliary);
        H(message);

        // Measurement and conditional gates
        if M(message) == One {
            Z(target);
        }
        if M(auxiliary) == One {
            X(target);
        }

        // Reset the auxiliary qubit
        Reset(auxiliary);
    }
}
"#;

pub const PAGE_TITLE: &str = "Quantum Teleportation: Project Showcase and Deep Dive";

/// Title, code listing and description; identical for every selection
pub fn intro() -> Vec<Block> {
    vec![
        Block::heading(1, PAGE_TITLE),
        Block::heading(2, "Q# Code for Quantum Teleportation Protocol"),
        Block::Code {
            language: "qsharp",
            source: QSHARP_TELEPORT_SOURCE,
        },
        Block::heading(3, "Code Description:"),
        Block::paragraph(
            "This Q# program demonstrates **quantum teleportation** using the following steps:",
        ),
        Block::numbered(vec![
            ListItem::new("**State Initialization**: Prepares qubits for teleportation."),
            ListItem::new(
                "**Entanglement Generation**: Entangles an auxiliary qubit with the target qubit using quantum gates.",
            ),
            ListItem::new(
                "**Bell State Measurement**: Alice measures the message qubit and the auxiliary qubit.",
            ),
            ListItem::new(
                "**Conditional Corrections**: Based on classical results, Bob reconstructs the state using Pauli gates.",
            ),
        ]),
    ]
}

pub fn exploration_heading() -> Block {
    Block::heading(2, "Explore More About Quantum Mechanics and Teleportation")
}

pub fn footer() -> Vec<Block> {
    vec![
        Block::Rule,
        Block::paragraph("Explore, learn, and dive deep into the world of quantum mechanics. 🚀"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_contains_both_operations() {
        assert!(QSHARP_TELEPORT_SOURCE.starts_with("namespace Sample {"));
        assert!(QSHARP_TELEPORT_SOURCE.contains("operation Main() : Result[]"));
        assert!(QSHARP_TELEPORT_SOURCE.contains("operation Teleport(message : Qubit, target : Qubit)"));
        assert!(QSHARP_TELEPORT_SOURCE.ends_with("}\n"));
    }

    #[test]
    fn test_intro_order() {
        let blocks = intro();
        assert_eq!(blocks[0], Block::heading(1, PAGE_TITLE));
        assert!(matches!(blocks[2], Block::Code { language: "qsharp", .. }));
        assert!(matches!(blocks[5], Block::List { ordered: true, ref items } if items.len() == 4));
    }

    #[test]
    fn test_footer_starts_with_rule() {
        let footer = footer();
        assert_eq!(footer[0], Block::Rule);
        assert_eq!(footer.len(), 2);
    }
}
