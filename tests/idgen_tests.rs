use std::collections::HashSet;

use portfolio_cms::utils::idgen::{generate_id, generate_slug};

#[test]
fn slug_from_punctuated_title() {
    assert_eq!(generate_slug("Hello, World! 2024"), "hello-world-2024");
}

#[test]
fn slug_lowercases() {
    assert_eq!(generate_slug("RUST Is Great"), "rust-is-great");
}

#[test]
fn slug_collapses_separator_runs() {
    assert_eq!(generate_slug("Rust & Actix -- Deep_Dive"), "rust-actix-deep-dive");
    assert_eq!(generate_slug("a \t\n b"), "a-b");
}

#[test]
fn slug_trims_edge_hyphens() {
    assert_eq!(generate_slug("  --Hello--  "), "hello");
}

#[test]
fn slug_strips_non_ascii_letters() {
    assert_eq!(generate_slug("Café au lait"), "caf-au-lait");
}

#[test]
fn slug_of_empty_or_junk_input_is_empty() {
    assert_eq!(generate_slug(""), "");
    assert_eq!(generate_slug("!!!"), "");
    assert_eq!(generate_slug("_-_ -"), "");
}

#[test]
fn slug_is_idempotent() {
    for input in [
        "Hello, World! 2024",
        "Rust & Actix -- Deep_Dive",
        "  --Hello--  ",
        "plain",
        "",
    ] {
        let once = generate_slug(input);
        assert_eq!(generate_slug(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn ids_are_nonempty_base36() {
    let id = generate_id();
    assert!(!id.is_empty());
    assert!(
        id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
        "unexpected character in id {id:?}"
    );
}

#[test]
fn ids_are_unique_within_a_run() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(generate_id()));
    }
}
