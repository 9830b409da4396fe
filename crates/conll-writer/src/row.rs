//! Sentence-to-row conversion.
//!
//! Rows are built in three passes over one sentence:
//!
//! 1. tokens, in span order, numbered `1..=N`; each row takes the first
//!    predicate its token covers and, when the sentence has exactly one
//!    feature annotation per token, the feature annotation at its position
//! 2. dependency arcs, attached to their dependent's row (a later arc for the
//!    same dependent replaces an earlier one)
//! 3. predicate arguments, aligned by the predicate's position in the sentence
//!
//! Head ids are resolved when a row is rendered.

use std::collections::HashMap;
use std::fmt;

use conll_model::{
    Dependency, Document, FieldName, MorphologicalFeatures, SemanticArgument, SemanticPredicate,
    Sentence, Token, TokenId,
};
use tracing::{debug, warn};

use crate::buffer::{FieldBuffer, UNUSED};

/// Value of `fillpred` for rows that carry a predicate.
const FILLPRED: &str = "Y";

/// Separator between argument slots inside `apreds`.
const APREDS_SEPARATOR: &str = "\t";

/// Resolved head of a dependency arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Head {
    /// Self-loop arc: the token is the sentence root (rendered as `0`).
    Root,
    /// Row id of the governor.
    Id(usize),
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Head::Root => f.write_str("0"),
            Head::Id(id) => write!(f, "{id}"),
        }
    }
}

/// One output row.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    /// 1-based position in the sentence.
    pub id: usize,
    pub token_id: TokenId,
    pub token: &'a Token,
    /// Covered text of the token.
    pub form: Option<&'a str>,
    pub feats: Option<&'a MorphologicalFeatures>,
    /// Arc for which this token is the dependent.
    pub dependency: Option<&'a Dependency>,
    pub predicate: Option<&'a SemanticPredicate>,
    /// One slot per sentence predicate, by predicate position.
    pub args: Vec<Option<&'a SemanticArgument>>,
}

/// Rows of one sentence plus the token index used for head resolution.
#[derive(Debug, Clone)]
pub struct SentenceRows<'a> {
    rows: Vec<Row<'a>>,
    index: HashMap<TokenId, usize>,
    predicate_count: usize,
}

impl<'a> SentenceRows<'a> {
    pub fn build(doc: &'a Document, sentence: &Sentence) -> Self {
        let tokens = doc.sentence_tokens(sentence);
        let morphology = doc.sentence_morphology(sentence);
        let predicates = doc.sentence_predicates(sentence);

        let use_feats = morphology.len() == tokens.len();
        if !use_feats && !morphology.is_empty() {
            debug!(
                features = morphology.len(),
                tokens = tokens.len(),
                "feature count differs from token count, omitting features"
            );
        }

        let mut rows = Vec::with_capacity(tokens.len());
        let mut index = HashMap::with_capacity(tokens.len());
        for (idx, (token_id, token)) in tokens.into_iter().enumerate() {
            let form = doc.covered_text(token.span);
            if form.is_none() {
                warn!(span = %token.span, "token span does not address document text");
            }
            let predicate = predicates
                .iter()
                .copied()
                .find(|predicate| token.span.covers(&predicate.span));
            rows.push(Row {
                id: idx + 1,
                token_id,
                token,
                form,
                feats: if use_feats { Some(morphology[idx]) } else { None },
                dependency: None,
                predicate,
                args: vec![None; predicates.len()],
            });
            index.insert(token_id, idx);
        }

        for dependency in doc.sentence_dependencies(sentence) {
            if let Some(&idx) = index.get(&dependency.dependent) {
                rows[idx].dependency = Some(dependency);
            }
        }

        for (position, predicate) in predicates.iter().copied().enumerate() {
            for argument in &predicate.arguments {
                for row in rows
                    .iter_mut()
                    .filter(|row| argument.span.covers(&row.token.span))
                {
                    row.args[position] = Some(argument);
                }
            }
        }

        Self {
            rows,
            index,
            predicate_count: predicates.len(),
        }
    }

    /// Rows in id order.
    #[must_use]
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicate_count
    }

    #[must_use]
    pub fn row_for(&self, token: TokenId) -> Option<&Row<'a>> {
        self.index.get(&token).map(|&idx| &self.rows[idx])
    }

    /// Head of `row`, or `None` when the row has no arc.
    ///
    /// A self-loop arc yields [`Head::Root`]. An arc whose governor lies
    /// outside the sentence yields `None`.
    pub fn head(&self, row: &Row<'_>) -> Option<Head> {
        let dependency = row.dependency?;
        if dependency.is_root_loop() {
            return Some(Head::Root);
        }
        match self.row_for(dependency.governor) {
            Some(governor) => Some(Head::Id(governor.id)),
            None => {
                warn!(
                    row = row.id,
                    governor = dependency.governor.index(),
                    "dependency governor is outside the sentence"
                );
                None
            }
        }
    }

    /// Fill `buffer` with the fields of `row`.
    pub fn populate(&self, row: &Row<'_>, buffer: &mut FieldBuffer) {
        buffer.set_id(row.id);

        if buffer.has(FieldName::Form) {
            buffer.put(FieldName::Form, row.form.unwrap_or(UNUSED));
        }

        let lemma = row.token.lemma.as_deref().unwrap_or(UNUSED);
        buffer.put_mirrored(FieldName::Lemma, lemma);

        let pos = row.token.pos.as_deref().unwrap_or(UNUSED);
        buffer.put_mirrored(FieldName::Pos, pos);

        let feat = row.feats.map_or(UNUSED, |feats| feats.value.as_str());
        buffer.put_mirrored(FieldName::Feat, feat);

        if buffer.has(FieldName::Head) || buffer.has(FieldName::PHead) {
            let head = self.head(row).map(|head| head.to_string());
            buffer.put_mirrored(FieldName::Head, head.as_deref().unwrap_or(UNUSED));
        }

        let deprel = row
            .dependency
            .map_or(UNUSED, |dependency| dependency.label.as_str());
        buffer.put_mirrored(FieldName::Deprel, deprel);

        match row.predicate {
            Some(predicate) => {
                buffer.put(FieldName::FillPred, FILLPRED);
                buffer.put(FieldName::Pred, &predicate.category);
            }
            None => {
                buffer.put(FieldName::FillPred, UNUSED);
                buffer.put(FieldName::Pred, UNUSED);
            }
        }

        if buffer.has(FieldName::APreds) {
            let apreds = row
                .args
                .iter()
                .map(|arg| arg.map_or(UNUSED, |arg| arg.role.as_str()))
                .collect::<Vec<_>>()
                .join(APREDS_SEPARATOR);
            buffer.put(FieldName::APreds, &apreds);
        }
    }
}
