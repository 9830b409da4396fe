//! Tests for conll-model types.

use conll_model::{Document, FieldName, SemanticPredicate, Span, Token, TokenId, WriterOptions};

#[test]
fn document_deserializes_from_pipeline_json() {
    let json = r#"{
        "id": "doc-1",
        "text": "Dogs bark.",
        "sentences": [{"span": {"begin": 0, "end": 10}}],
        "tokens": [
            {"span": {"begin": 0, "end": 4}, "lemma": "dog", "pos": "NNS"},
            {"span": {"begin": 5, "end": 9}, "pos": "VBZ"},
            {"span": {"begin": 9, "end": 10}}
        ],
        "dependencies": [
            {"governor": 1, "dependent": 0, "label": "nsubj"},
            {"governor": 1, "dependent": 1, "label": "root"}
        ],
        "predicates": [
            {
                "span": {"begin": 5, "end": 9},
                "category": "bark.01",
                "arguments": [{"span": {"begin": 0, "end": 4}, "role": "A0"}]
            }
        ]
    }"#;

    let doc: Document = serde_json::from_str(json).expect("deserialize document");
    doc.validate().expect("valid document");

    assert_eq!(doc.id.as_deref(), Some("doc-1"));
    assert_eq!(doc.tokens.len(), 3);
    assert_eq!(doc.tokens[0].lemma.as_deref(), Some("dog"));
    assert_eq!(doc.tokens[1].lemma, None);
    assert!(doc.morphology.is_empty());
    assert!(doc.dependencies[1].is_root_loop());
    assert_eq!(doc.predicates[0].arguments[0].role, "A0");
}

#[test]
fn document_serialization_skips_absent_values() {
    let mut doc = Document::new("Hi");
    doc.add_sentence(0, 2);
    doc.add_token(Token::new(0, 2));
    let json = serde_json::to_string(&doc).expect("serialize document");
    assert!(!json.contains("lemma"));
    assert!(!json.contains("\"id\""));

    let round: Document = serde_json::from_str(&json).expect("deserialize document");
    assert_eq!(round, doc);
}

#[test]
fn predicates_keep_document_order_within_sentence() {
    let mut doc = Document::new("a b c");
    doc.add_sentence(0, 5);
    doc.add_predicate(SemanticPredicate::new(4, 5, "c.01"));
    doc.add_predicate(SemanticPredicate::new(0, 1, "a.01"));
    let sentence = doc.sentences()[0];
    let categories: Vec<&str> = doc
        .sentence_predicates(sentence)
        .iter()
        .map(|p| p.category.as_str())
        .collect();
    assert_eq!(categories, vec!["a.01", "c.01"]);
}

#[test]
fn builder_ids_are_dense() {
    let mut doc = Document::new("x y");
    let first = doc.add_token(Token::new(0, 1));
    let second = doc.add_token(Token::new(2, 3).with_pos("NN"));
    assert_eq!(first, TokenId(0));
    assert_eq!(second, TokenId(1));
    assert_eq!(doc.token(second).and_then(|t| t.pos.as_deref()), Some("NN"));
    assert_eq!(doc.covered_text(Span::new(2, 3)), Some("y"));
}

#[test]
fn field_names_serialize_as_template_tokens() {
    let json = serde_json::to_string(&FieldName::PDeprel).expect("serialize field");
    assert_eq!(json, "\"pdeprel\"");
    let field: FieldName = serde_json::from_str("\"fillpred\"").expect("deserialize field");
    assert_eq!(field, FieldName::FillPred);
}

#[test]
fn writer_options_round_trip() {
    let options = WriterOptions::new()
        .with_field_separator("|")
        .with_header(false)
        .with_row_format("${form}, ${pos}")
        .with_filename_suffix(".conll09");
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: WriterOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}
