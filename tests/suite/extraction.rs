//! Notebook files on disk -> decks.

use std::fs;

use nbdeck_engine::{ExtractError, ExtractOptions, NbdeckConfig, load_deck};
use nbdeck_tui::decode_chart;
use tempfile::tempdir;

use crate::common::{code_cell, markdown_cell, notebook, sample_notebook, write_notebook};

#[test]
fn sample_notebook_yields_one_slide_per_code_cell() {
    let dir = tempdir().unwrap();
    let path = write_notebook(dir.path(), &sample_notebook());

    let deck = load_deck(&path, &ExtractOptions::default()).unwrap();
    assert_eq!(deck.len(), 3);

    let schema = deck.get(0).unwrap();
    assert_eq!(schema.title(), Some("Dataset Schema"));
    assert_eq!(schema.question(), Some("What is X?"));
    assert_eq!(schema.code, "#1. What is X?\ndf.info()\ndf.plot()");
    let chart = decode_chart(schema.chart.as_ref().unwrap()).unwrap();
    assert_eq!(chart.dimensions(), (8, 4));

    let second = deck.get(1).unwrap();
    assert_eq!(second.title(), Some("Question 2"));
    assert_eq!(second.question(), Some("What is Y?"));
    assert!(second.chart.is_none());

    let plain = deck.get(2).unwrap();
    assert!(plain.heading.is_none());
    assert_eq!(plain.code, "print('hi')");
}

#[test]
fn title_and_question_are_always_paired() {
    let dir = tempdir().unwrap();
    let path = write_notebook(dir.path(), &sample_notebook());
    let deck = load_deck(&path, &ExtractOptions::default()).unwrap();
    for slide in &deck {
        assert_eq!(slide.title().is_some(), slide.question().is_some());
    }
}

#[test]
fn config_overrides_reach_extraction() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[extract]\nfirst_title = \"Schema\"\ntitle_prefix = \"Q\"\n",
    )
    .unwrap();
    let options = NbdeckConfig::load_from(&config_path)
        .unwrap()
        .extract_options();

    let path = write_notebook(dir.path(), &sample_notebook());
    let deck = load_deck(&path, &options).unwrap();
    assert_eq!(deck.get(0).unwrap().title(), Some("Schema"));
    assert_eq!(deck.get(1).unwrap().title(), Some("Q 2"));
}

#[test]
fn malformed_heading_aborts_the_whole_notebook() {
    let dir = tempdir().unwrap();
    let doc = notebook(vec![
        markdown_cell("intro"),
        code_cell("#1. Fine?"),
        code_cell("# TODO plot revenue\nplt.show()"),
    ]);
    let path = write_notebook(dir.path(), &doc);

    let err = load_deck(&path, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedHeading { cell: 2, .. }));
    assert!(err.to_string().contains("# TODO plot revenue"));
}

#[test]
fn invalid_json_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.ipynb");
    fs::write(&path, "{\"nbformat\": 4, \"cells\": [").unwrap();

    assert!(matches!(
        load_deck(&path, &ExtractOptions::default()),
        Err(ExtractError::Format(_))
    ));
}

#[test]
fn notebook_without_slides_is_rejected_up_front() {
    let dir = tempdir().unwrap();
    let doc = notebook(vec![code_cell("import pandas as pd")]);
    let path = write_notebook(dir.path(), &doc);

    assert!(matches!(
        load_deck(&path, &ExtractOptions::default()),
        Err(ExtractError::NoSlides)
    ));
}
