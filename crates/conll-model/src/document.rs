//! Sentence annotation graph.
//!
//! A [`Document`] holds its text plus stand-off annotation layers: sentences,
//! tokens (with optional lemma and part-of-speech), morphological features,
//! dependency arcs and semantic predicates with their arguments. Layers are
//! flat; sentence membership is recovered from span coverage, the way an
//! annotation index answers "select covered" queries.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::span::Span;

/// Identity of a token within a [`Document`]'s token layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub usize);

impl TokenId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub span: Span,
}

impl Sentence {
    pub const fn new(begin: usize, end: usize) -> Self {
        Self {
            span: Span::new(begin, end),
        }
    }
}

/// A token; its surface form is the document text under `span`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl Token {
    pub const fn new(begin: usize, end: usize) -> Self {
        Self {
            span: Span::new(begin, end),
            lemma: None,
            pos: None,
        }
    }

    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    #[must_use]
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }
}

/// Morphological feature string (e.g. `Number=Plur`) over a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologicalFeatures {
    pub span: Span,
    pub value: String,
}

/// A labeled arc from a governor token to a dependent token.
///
/// An arc whose governor is its own dependent marks the sentence root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub governor: TokenId,
    pub dependent: TokenId,
    pub label: String,
}

impl Dependency {
    #[must_use]
    pub fn is_root_loop(&self) -> bool {
        self.governor == self.dependent
    }
}

/// A role-labeled argument; it covers every token inside its span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticArgument {
    pub span: Span,
    pub role: String,
}

/// A predicate with its category label and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticPredicate {
    pub span: Span,
    pub category: String,
    #[serde(default)]
    pub arguments: Vec<SemanticArgument>,
}

impl SemanticPredicate {
    pub fn new(begin: usize, end: usize, category: impl Into<String>) -> Self {
        Self {
            span: Span::new(begin, end),
            category: category.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, begin: usize, end: usize, role: impl Into<String>) -> Self {
        self.arguments.push(SemanticArgument {
            span: Span::new(begin, end),
            role: role.into(),
        });
        self
    }
}

/// A text with its annotation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub morphology: Vec<MorphologicalFeatures>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub predicates: Vec<SemanticPredicate>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn add_sentence(&mut self, begin: usize, end: usize) {
        self.sentences.push(Sentence::new(begin, end));
    }

    pub fn add_token(&mut self, token: Token) -> TokenId {
        self.tokens.push(token);
        TokenId(self.tokens.len() - 1)
    }

    pub fn add_morphology(&mut self, begin: usize, end: usize, value: impl Into<String>) {
        self.morphology.push(MorphologicalFeatures {
            span: Span::new(begin, end),
            value: value.into(),
        });
    }

    pub fn add_dependency(
        &mut self,
        governor: TokenId,
        dependent: TokenId,
        label: impl Into<String>,
    ) {
        self.dependencies.push(Dependency {
            governor,
            dependent,
            label: label.into(),
        });
    }

    pub fn add_predicate(&mut self, predicate: SemanticPredicate) {
        self.predicates.push(predicate);
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Text under `span`, or `None` if the span does not address valid text.
    #[must_use]
    pub fn covered_text(&self, span: Span) -> Option<&str> {
        self.text.get(span.begin..span.end)
    }

    /// Sentences in span order.
    pub fn sentences(&self) -> Vec<&Sentence> {
        let mut sentences: Vec<&Sentence> = self.sentences.iter().collect();
        sentences.sort_by_key(|sentence| sentence.span);
        sentences
    }

    /// Tokens inside `sentence`, in span order.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> Vec<(TokenId, &Token)> {
        let mut tokens: Vec<(TokenId, &Token)> = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| sentence.span.covers(&token.span))
            .map(|(idx, token)| (TokenId(idx), token))
            .collect();
        tokens.sort_by_key(|(_, token)| token.span);
        tokens
    }

    /// Morphological feature annotations inside `sentence`, in span order.
    pub fn sentence_morphology(&self, sentence: &Sentence) -> Vec<&MorphologicalFeatures> {
        let mut features: Vec<&MorphologicalFeatures> = self
            .morphology
            .iter()
            .filter(|feature| sentence.span.covers(&feature.span))
            .collect();
        features.sort_by_key(|feature| feature.span);
        features
    }

    /// Predicates inside `sentence`, in document order.
    pub fn sentence_predicates(&self, sentence: &Sentence) -> Vec<&SemanticPredicate> {
        let mut predicates: Vec<&SemanticPredicate> = self
            .predicates
            .iter()
            .filter(|predicate| sentence.span.covers(&predicate.span))
            .collect();
        predicates.sort_by_key(|predicate| predicate.span);
        predicates
    }

    /// Arcs whose dependent lies inside `sentence`, in insertion order.
    pub fn sentence_dependencies(&self, sentence: &Sentence) -> Vec<&Dependency> {
        self.dependencies
            .iter()
            .filter(|dependency| {
                self.token(dependency.dependent)
                    .is_some_and(|token| sentence.span.covers(&token.span))
            })
            .collect()
    }

    /// Check spans and token references.
    ///
    /// # Errors
    ///
    /// Returns the first span that does not address the text, or the first
    /// dependency naming a token outside the token layer.
    pub fn validate(&self) -> Result<()> {
        let spans = self
            .sentences
            .iter()
            .map(|sentence| sentence.span)
            .chain(self.tokens.iter().map(|token| token.span))
            .chain(self.morphology.iter().map(|feature| feature.span))
            .chain(self.predicates.iter().flat_map(|predicate| {
                std::iter::once(predicate.span)
                    .chain(predicate.arguments.iter().map(|argument| argument.span))
            }));
        for span in spans {
            self.check_span(span)?;
        }

        for (index, dependency) in self.dependencies.iter().enumerate() {
            for id in [dependency.governor, dependency.dependent] {
                if self.token(id).is_none() {
                    return Err(ModelError::UnknownToken {
                        index,
                        token: id.index(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_span(&self, span: Span) -> Result<()> {
        if span.end < span.begin {
            return Err(ModelError::InvertedSpan { span });
        }
        if span.end > self.text.len() {
            return Err(ModelError::SpanOutOfRange {
                span,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(span.begin) || !self.text.is_char_boundary(span.end) {
            return Err(ModelError::SpanNotOnCharBoundary { span });
        }
        Ok(())
    }
}
