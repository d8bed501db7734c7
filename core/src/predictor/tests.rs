use super::*;
use common::{next_word, predictor_with};

mod common {
    use super::*;

    pub(super) fn next_word(word: &str, predictions: &[(&str, u32)]) -> NextWord {
        NextWord {
            word: word.to_string(),
            predictions: predictions
                .iter()
                .map(|(w, c)| Prediction {
                    word: w.to_string(),
                    count: *c,
                })
                .collect(),
        }
    }

    pub(super) fn predictor_with(records: Vec<NextWord>) -> NextWordPredictor {
        let mut predictor = NextWordPredictor::new();
        for record in records {
            predictor.insert_word(record);
        }
        predictor
    }
}

mod from_json {
    use super::*;

    #[test]
    fn test_from_json_compact_fields() {
        let json = r#"[
            {"w": "good", "p": [{"w": "morning", "c": 12}, {"w": "night", "c": 7}]},
            {"w": "thank", "p": [{"w": "you", "c": 40}]}
        ]"#;

        let predictor = NextWordPredictor::from_json(json).unwrap();

        assert_eq!(predictor.len(), 2);
        assert_eq!(predictor.get("good").unwrap().predictions.len(), 2);
        assert_eq!(predictor.get("thank").unwrap().predictions[0].count, 40);
    }

    #[test]
    fn test_from_json_missing_predictions_defaults_empty() {
        let predictor = NextWordPredictor::from_json(r#"[{"w": "alone"}]"#).unwrap();

        assert!(predictor.get("alone").unwrap().predictions.is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = NextWordPredictor::from_json(r#"{"w": "not an array"}"#);

        assert!(matches!(result, Err(LexiconError::Parse(_))));
    }

    #[test]
    fn test_from_json_empty_array() {
        let predictor = NextWordPredictor::from_json("[]").unwrap();

        assert!(predictor.is_empty());
    }
}

mod insert_word {
    use super::*;

    #[test]
    fn test_insert_word_replaces_existing_record() {
        let mut predictor = predictor_with(vec![next_word("good", &[("morning", 1)])]);

        predictor.insert_word(next_word("good", &[("night", 5)]));

        assert_eq!(predictor.len(), 1);
        assert_eq!(predictor.get("good").unwrap().predictions[0].word, "night");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let predictor = predictor_with(vec![next_word("Good", &[])]);

        assert!(predictor.get("Good").is_some());
        assert!(predictor.get("good").is_none());
    }
}

mod predictions {
    use super::*;

    #[test]
    fn test_predictions_sorted_by_count_then_word() {
        let predictor = predictor_with(vec![next_word(
            "the",
            &[("end", 3), ("best", 9), ("beginning", 3)],
        )]);

        let words: Vec<&str> = predictor
            .predictions("the", 10)
            .iter()
            .map(|p| p.word.as_str())
            .collect();

        assert_eq!(words, vec!["best", "beginning", "end"]);
    }

    #[test]
    fn test_predictions_truncated_to_limit() {
        let predictor = predictor_with(vec![next_word("a", &[("b", 1), ("c", 2), ("d", 3)])]);

        assert_eq!(predictor.predictions("a", 2).len(), 2);
        assert!(predictor.predictions("a", 0).is_empty());
    }

    #[test]
    fn test_predictions_unknown_word() {
        let predictor = NextWordPredictor::new();

        assert!(predictor.predictions("missing", 5).is_empty());
    }
}

mod vocabulary {
    use super::*;

    fn spellings(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::as_str).collect()
    }

    #[test]
    fn test_vocabulary_includes_known_and_frequent_predictions() {
        let predictor = predictor_with(vec![
            next_word("good", &[("morning", 12), ("grief", 1)]),
            next_word("thank", &[("you", 40)]),
        ]);

        let vocabulary = predictor.vocabulary(2);

        assert_eq!(
            spellings(&vocabulary),
            vec!["good", "morning", "thank", "you"]
        );
    }

    #[test]
    fn test_vocabulary_deduplicates() {
        let predictor = predictor_with(vec![
            next_word("good", &[("night", 3)]),
            next_word("night", &[("owl", 3)]),
        ]);

        let vocabulary = predictor.vocabulary(1);

        assert_eq!(spellings(&vocabulary), vec!["good", "night", "owl"]);
    }

    #[test]
    fn test_vocabulary_skips_blank_entries() {
        let predictor = predictor_with(vec![next_word("hi", &[("   ", 10), ("", 10)])]);

        assert_eq!(spellings(&predictor.vocabulary(1)), vec!["hi"]);
    }

    #[test]
    fn test_vocabulary_empty_predictor() {
        assert!(NextWordPredictor::new().vocabulary(1).is_empty());
    }
}
