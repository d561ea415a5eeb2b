use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One entry of the sidebar menu.
///
/// The variant order is the menu order; the first variant is the selection
/// shown on initial load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Topic {
    #[default]
    #[serde(rename = "code-walkthrough")]
    ProjectCodeWalkthrough,
    #[serde(rename = "history")]
    HistoryOfQuantumMechanics,
    #[serde(rename = "current-world")]
    CurrentQuantumWorld,
    #[serde(rename = "math")]
    QuantumMathAndNotations,
    #[serde(rename = "gates")]
    QuantumGatesAndOperations,
    #[serde(rename = "teleportation")]
    TeleportationStepsAndCircuitry,
    #[serde(rename = "experiments")]
    MindBlowingQuantumExperiments,
    #[serde(rename = "theories")]
    TheoreticalIdeasYetToBeProven,
    #[serde(rename = "cqst")]
    RvUniversityAndCqst,
}

impl Topic {
    pub const COUNT: usize = 9;

    /// All topics in menu order
    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::ProjectCodeWalkthrough,
        Topic::HistoryOfQuantumMechanics,
        Topic::CurrentQuantumWorld,
        Topic::QuantumMathAndNotations,
        Topic::QuantumGatesAndOperations,
        Topic::TeleportationStepsAndCircuitry,
        Topic::MindBlowingQuantumExperiments,
        Topic::TheoreticalIdeasYetToBeProven,
        Topic::RvUniversityAndCqst,
    ];

    /// Exact label shown in the sidebar
    pub fn label(self) -> &'static str {
        match self {
            Topic::ProjectCodeWalkthrough => "Project Code Walkthrough",
            Topic::HistoryOfQuantumMechanics => "History of Quantum Mechanics",
            Topic::CurrentQuantumWorld => "Current Quantum World",
            Topic::QuantumMathAndNotations => "Quantum Math and Notations",
            Topic::QuantumGatesAndOperations => "Quantum Gates and Operations",
            Topic::TeleportationStepsAndCircuitry => "Teleportation Steps and Circuitry",
            Topic::MindBlowingQuantumExperiments => "Mind-Blowing Quantum Experiments",
            Topic::TheoreticalIdeasYetToBeProven => "Theoretical Ideas Yet to Be Proven",
            Topic::RvUniversityAndCqst => "RV University and CQST",
        }
    }

    /// Short identifier accepted on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Topic::ProjectCodeWalkthrough => "code-walkthrough",
            Topic::HistoryOfQuantumMechanics => "history",
            Topic::CurrentQuantumWorld => "current-world",
            Topic::QuantumMathAndNotations => "math",
            Topic::QuantumGatesAndOperations => "gates",
            Topic::TeleportationStepsAndCircuitry => "teleportation",
            Topic::MindBlowingQuantumExperiments => "experiments",
            Topic::TheoreticalIdeasYetToBeProven => "theories",
            Topic::RvUniversityAndCqst => "cqst",
        }
    }

    /// Zero-based position in the menu
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Topic> {
        Topic::ALL.get(index).copied()
    }

    pub fn next(self) -> Topic {
        Topic::ALL[(self.index() + 1) % Topic::COUNT]
    }

    pub fn previous(self) -> Topic {
        Topic::ALL[(self.index() + Topic::COUNT - 1) % Topic::COUNT]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted) || t.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownTopic {
                input: s.to_string(),
            })
    }
}
