mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_default_run_shows_walkthrough_once() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&[]);

    assert!(out.starts_with("# Quantum Teleportation: Project Showcase and Deep Dive\n"));
    assert_eq!(out.matches("## Project Code Walkthrough").count(), 1);
    assert!(out.contains("```qsharp\nnamespace Sample {"));
    assert!(out.ends_with("Explore, learn, and dive deep into the world of quantum mechanics. 🚀\n"));
    assert_eq!(out, fixture.stdout(&["show"]));
}

#[test]
fn test_history_by_label() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&[
        "show",
        "--topic",
        "History of Quantum Mechanics",
        "--section-only",
    ]);
    assert_eq!(
        out,
        "## History of Quantum Mechanics\n\
         \n\
         - **1900**: Max Planck proposed quantization of energy.\n\
         - **1925-27**: Schrödinger and Heisenberg formalized quantum mechanics.\n\
         - **1980s**: Feynman envisioned quantum computers.\n"
    );
}

#[test]
fn test_gates_section_has_no_other_gates() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&["show", "-t", "gates", "--section-only"]);
    assert!(out.contains("- **Hadamard Gate**: Creates superposition.\n"));
    assert!(out.contains("- **CNOT Gate**: Entangles two qubits.\n"));
    assert!(out.contains("    - X: Flips |0⟩ ↔ |1⟩.\n"));
    assert!(out.contains("    - Z: Phase-flip on |1⟩.\n"));
    assert!(!out.contains("Toffoli"));
    assert!(!out.contains("Y:"));
}

#[test]
fn test_each_topic_renders_only_its_header() {
    let fixture = TestFixture::new();
    let topics = fixture.json(&["topics"]);
    let entries = topics["content"]["topics"].as_array().unwrap();
    assert_eq!(entries.len(), 9);

    for entry in entries {
        let slug = entry["slug"].as_str().unwrap();
        let out = fixture.stdout(&["show", "--topic", slug]);
        for other in entries {
            let header = format!("## {}\n", other["header"].as_str().unwrap());
            let expected = usize::from(other["slug"] == entry["slug"]);
            assert_eq!(out.matches(&header).count(), expected, "{} in {}", header, slug);
        }
    }
}

#[test]
fn test_json_envelope() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["show", "--topic", "cqst"]);
    let content = &json["content"];
    assert_eq!(content["topic"]["position"], 9);
    assert_eq!(
        content["section"]["header"],
        "RV University and the Center for Quantum Science and Technologies (CQST)"
    );
    assert_eq!(content["intro"][2]["type"], "code");
    assert_eq!(content["footer"][0]["type"], "rule");
}

#[test]
fn test_unknown_topic_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["show", "--topic", "Quantum Knitting"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: unknown topic 'Quantum Knitting'"));
}

#[test]
fn test_config_default_topic() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\ndefault_topic = \"teleportation\"\n");
    let out = fixture.stdout(&["show", "--section-only"]);
    assert!(out.starts_with("## Teleportation Steps and Circuitry\n"));

    // explicit flag wins over config
    let out = fixture.stdout(&["show", "--section-only", "--topic", "math"]);
    assert!(out.starts_with("## Quantum Math and Notations\n"));
}

#[test]
fn test_invalid_config_topic_fails() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\ndefault_topic = \"alchemy\"\n");
    fixture
        .command()
        .arg("topics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("display.default_topic"));
}

#[test]
fn test_code_prints_raw_listing() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&["code"]);
    assert_eq!(out, qshowcase_content::QSHARP_TELEPORT_SOURCE);
}

#[test]
fn test_browse_requires_terminal() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
