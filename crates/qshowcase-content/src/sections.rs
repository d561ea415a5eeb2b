//! The nine sidebar sections.
//!
//! Each renderer takes no input and always returns the same [`Section`].

use crate::block::{Block, ListItem, Section};
use crate::topic::Topic;

pub fn code_walkthrough() -> Section {
    Section {
        topic: Topic::ProjectCodeWalkthrough,
        header: "Project Code Walkthrough",
        blocks: vec![Block::bullets(vec![
            ListItem::new(
                "**Main Operation**: Initializes qubits and iteratively teleports states using `Teleport` operation.",
            ),
            ListItem::new("**Teleport Operation**:").with_steps(vec![
                ListItem::new("Generates entanglement."),
                ListItem::new("Performs measurements."),
                ListItem::new("Applies corrections conditionally."),
            ]),
        ])],
    }
}

pub fn history_of_quantum_mechanics() -> Section {
    Section {
        topic: Topic::HistoryOfQuantumMechanics,
        header: "History of Quantum Mechanics",
        blocks: vec![Block::bullets(vec![
            ListItem::new("**1900**: Max Planck proposed quantization of energy."),
            ListItem::new("**1925-27**: Schrödinger and Heisenberg formalized quantum mechanics."),
            ListItem::new("**1980s**: Feynman envisioned quantum computers."),
        ])],
    }
}

pub fn current_quantum_world() -> Section {
    Section {
        topic: Topic::CurrentQuantumWorld,
        header: "The Current Quantum World",
        blocks: vec![
            Block::paragraph(
                "Quantum computing is now at the forefront of technological innovation. Key players:",
            ),
            Block::bullets(vec![
                ListItem::new("**Google**: Quantum supremacy with Sycamore."),
                ListItem::new("**IBM**: Offering cloud-based quantum systems."),
            ]),
        ],
    }
}

pub fn quantum_math_and_notations() -> Section {
    Section {
        topic: Topic::QuantumMathAndNotations,
        header: "Quantum Math and Notations",
        blocks: vec![Block::bullets(vec![
            ListItem::new("**Superposition**: |ψ⟩ = α|0⟩ + β|1⟩."),
            ListItem::new("**Dirac Notation**: States are represented as kets (|ψ⟩)."),
            ListItem::new("**Bloch Sphere**: Visualizes qubit states."),
        ])],
    }
}

pub fn quantum_gates() -> Section {
    Section {
        topic: Topic::QuantumGatesAndOperations,
        header: "Quantum Gates and Operations",
        blocks: vec![Block::bullets(vec![
            ListItem::new("**Hadamard Gate**: Creates superposition."),
            ListItem::new("**CNOT Gate**: Entangles two qubits."),
            ListItem::new("**Pauli Gates**:").with_bullets(vec![
                ListItem::new("X: Flips |0⟩ ↔ |1⟩."),
                ListItem::new("Z: Phase-flip on |1⟩."),
            ]),
        ])],
    }
}

pub fn teleportation_steps() -> Section {
    Section {
        topic: Topic::TeleportationStepsAndCircuitry,
        header: "Teleportation Steps and Circuitry",
        blocks: vec![Block::bullets(vec![
            ListItem::new("Step 1: Create entanglement."),
            ListItem::new("Step 2: Alice performs measurements."),
            ListItem::new("Step 3: Classical communication."),
            ListItem::new("Step 4: Bob applies corrections."),
        ])],
    }
}

pub fn quantum_experiments() -> Section {
    Section {
        topic: Topic::MindBlowingQuantumExperiments,
        header: "Mind-Blowing Quantum Experiments",
        blocks: vec![Block::numbered(vec![
            ListItem::new("**Double-Slit Experiment**: Particles behave like waves."),
            ListItem::new("**Quantum Eraser**: Observation changes history."),
            ListItem::new("**Schrödinger’s Cat**: Superposition of life and death."),
        ])],
    }
}

pub fn theoretical_ideas() -> Section {
    Section {
        topic: Topic::TheoreticalIdeasYetToBeProven,
        header: "Theoretical Ideas Yet to Be Proven",
        blocks: vec![Block::numbered(vec![
            ListItem::new("**Quantum Gravity**: Bridging relativity and quantum theory."),
            ListItem::new("**Time Crystals**: Perpetual motion without energy."),
            ListItem::new("**ER=EPR**: Linking entanglement with wormholes."),
        ])],
    }
}

pub fn rv_university() -> Section {
    Section {
        topic: Topic::RvUniversityAndCqst,
        header: "RV University and the Center for Quantum Science and Technologies (CQST)",
        blocks: vec![
            Block::paragraph(
                "The **Center for Quantum Science and Technology (CQST)** at RV University is dedicated to cutting-edge research in quantum computing.",
            ),
            Block::paragraph("**Acknowledgments**:"),
            Block::bullets(vec![
                ListItem::new("Dr. P.C. Deshmukh: Exceptional mentorship."),
                ListItem::new("Prof. Vaidyanathan Sivasubramanian: Insightful guidance."),
                ListItem::new("Prof. Bharath Manchikodi: Constant support."),
            ]),
            Block::Link {
                label: "Visit CQST: RV University",
                url: "https://www.rvu.edu.in",
            },
        ],
    }
}
