use sponge_core::predictor::NextWordPredictor;
use sponge_core::types::{CompletionConfig, Term, Word};
use sponge_search::{AutoComplete, AutoCompleteQuery, QueryOptions};

const TABLE: &str = r#"[
    {"w": "good", "p": [{"w": "morning", "c": 12}, {"w": "grief", "c": 1}, {"w": "night", "c": 7}]},
    {"w": "go", "p": [{"w": "home", "c": 9}, {"w": "go", "c": 2}]},
    {"w": "gone", "p": []}
]"#;

fn words(results: &[Word]) -> Vec<&str> {
    results.iter().map(Word::as_str).collect()
}

/// Verify words exported from a prediction table are completable.
#[test]
fn test_vocabulary_feeds_autocomplete() {
    let predictor = NextWordPredictor::from_json(TABLE).unwrap();
    let config = CompletionConfig::default();

    let index = AutoComplete::new(predictor.vocabulary(config.vocabulary.cutoff_frequency));

    assert_eq!(words(&index.search("go")), vec!["go", "gone", "good"]);
    assert_eq!(words(&index.search("g")), vec!["go", "gone", "good", "grief"]);
    assert_eq!(words(&index.search("good n")), vec!["night"]);
}

/// Verify the cutoff frequency keeps rare predictions out of the index.
#[test]
fn test_cutoff_frequency_filters_rare_predictions() {
    let predictor = NextWordPredictor::from_json(TABLE).unwrap();

    let index = AutoComplete::new(predictor.vocabulary(5));

    assert!(index.search("gri").is_empty());
    assert_eq!(words(&index.search("mor")), vec!["morning"]);
}

/// Verify the configured limit and options drive a prepared query.
#[test]
fn test_config_driven_query() {
    let predictor = NextWordPredictor::from_json(TABLE).unwrap();
    let mut config = CompletionConfig::default();
    config.suggestions.limit = 2;

    let index = AutoComplete::new(predictor.vocabulary(config.vocabulary.cutoff_frequency));
    let query = AutoCompleteQuery::with_options("g", QueryOptions::from(&config.suggestions));

    assert_eq!(words(&index.search_with(&query)), vec!["go", "gone"]);
}

/// Verify aliases make a word reachable by its alternative spellings.
#[test]
fn test_aliases_extend_an_existing_index() {
    let predictor = NextWordPredictor::from_json(TABLE).unwrap();
    let base = AutoComplete::new(predictor.vocabulary(1));
    let colour = Word::with_aliases(
        Term::try_new("colour".to_string()).unwrap(),
        vec!["color".to_string()],
    );

    let extended = base.inserting(colour.clone());

    assert_eq!(extended.search("colo"), vec![colour.clone()]);
    assert_eq!(extended.search("color"), vec![colour]);
    assert!(base.search("colo").is_empty());
}
