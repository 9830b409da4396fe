//! The fixed CoNLL-2009 column vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A column that a row template may select.
///
/// The `P*` variants mirror their plain counterparts: the CoNLL-2009 layout
/// distinguishes gold from predicted annotations, and a single annotation
/// source fills both columns with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Form,
    Lemma,
    PLemma,
    Pos,
    PPos,
    Feat,
    PFeat,
    Head,
    PHead,
    Deprel,
    PDeprel,
    FillPred,
    Pred,
    APreds,
}

impl FieldName {
    /// Every field, in CoNLL-2009 column order.
    pub const ALL: [FieldName; 14] = [
        FieldName::Form,
        FieldName::Lemma,
        FieldName::PLemma,
        FieldName::Pos,
        FieldName::PPos,
        FieldName::Feat,
        FieldName::PFeat,
        FieldName::Head,
        FieldName::PHead,
        FieldName::Deprel,
        FieldName::PDeprel,
        FieldName::FillPred,
        FieldName::Pred,
        FieldName::APreds,
    ];

    /// Template token for this field (the text inside `${...}`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Form => "form",
            FieldName::Lemma => "lemma",
            FieldName::PLemma => "plemma",
            FieldName::Pos => "pos",
            FieldName::PPos => "ppos",
            FieldName::Feat => "feat",
            FieldName::PFeat => "pfeat",
            FieldName::Head => "head",
            FieldName::PHead => "phead",
            FieldName::Deprel => "deprel",
            FieldName::PDeprel => "pdeprel",
            FieldName::FillPred => "fillpred",
            FieldName::Pred => "pred",
            FieldName::APreds => "apreds",
        }
    }

    /// Column title used in header lines.
    #[must_use]
    pub fn header_name(self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    /// Placeholder form, e.g. `${form}`.
    #[must_use]
    pub fn placeholder(self) -> String {
        format!("${{{}}}", self.as_str())
    }

    /// The gold/predicted partner of a mirrored field.
    #[must_use]
    pub const fn mirror(self) -> Option<FieldName> {
        match self {
            FieldName::Lemma => Some(FieldName::PLemma),
            FieldName::PLemma => Some(FieldName::Lemma),
            FieldName::Pos => Some(FieldName::PPos),
            FieldName::PPos => Some(FieldName::Pos),
            FieldName::Feat => Some(FieldName::PFeat),
            FieldName::PFeat => Some(FieldName::Feat),
            FieldName::Head => Some(FieldName::PHead),
            FieldName::PHead => Some(FieldName::Head),
            FieldName::Deprel => Some(FieldName::PDeprel),
            FieldName::PDeprel => Some(FieldName::Deprel),
            FieldName::Form | FieldName::FillPred | FieldName::Pred | FieldName::APreds => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    /// Case-sensitive lookup against the vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField {
                name: s.to_string(),
            })
    }
}
