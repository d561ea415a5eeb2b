use qshowcase_content::QSHARP_TELEPORT_SOURCE;

use crate::presentation::view_models::CodeListingViewModel;

pub fn present_code_listing() -> CodeListingViewModel {
    CodeListingViewModel {
        title: "Q# Code for Quantum Teleportation Protocol".to_string(),
        language: "qsharp".to_string(),
        source: QSHARP_TELEPORT_SOURCE.to_string(),
        line_count: QSHARP_TELEPORT_SOURCE.lines().count(),
    }
}
