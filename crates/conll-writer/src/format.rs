//! Row format compilation.
//!
//! A row format is a comma-separated list of `${field}` placeholders, e.g.
//! `${form}, ${pos}, ${head}, ${deprel}`. Compiling it yields a
//! [`FormatDescriptor`]: the selected fields in template order, a dense
//! field-to-column mapping, a render template and the header line.

use std::collections::HashMap;
use std::fmt;

use conll_model::{DEFAULT_CONLL2009_ROW_FORMAT, FieldName};
use tracing::debug;

use crate::error::{Result, WriterError};

/// Value slot used in render templates.
const VALUE_SLOT: &str = "{}";

/// Title of the leading id column.
const ID_HEADER: &str = "ID";

/// Compiled, immutable column layout.
///
/// The column mapping is a bijection from the selected fields onto
/// `0..fields.len()`; fields that were not selected have no column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    fields: Vec<FieldName>,
    columns: HashMap<FieldName, usize>,
    separator: String,
    render_template: String,
    header: String,
}

impl FormatDescriptor {
    /// Compile a row format.
    ///
    /// A blank template selects the CoNLL-2009 default. Unknown field names are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::MalformedPlaceholder`] for a segment that is not
    /// shaped `${name}` and [`WriterError::DuplicateField`] when a field is
    /// selected twice.
    pub fn compile(template: &str, separator: &str) -> Result<Self> {
        let template = template.trim();
        if template.is_empty() {
            debug!("empty row format, using CoNLL-2009 default");
            return Ok(Self::conll2009(separator));
        }
        if template == DEFAULT_CONLL2009_ROW_FORMAT {
            return Ok(Self::conll2009(separator));
        }

        let mut segments: Vec<&str> = template.split(',').collect();
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        let mut fields: Vec<FieldName> = Vec::new();
        for (position, segment) in segments.into_iter().enumerate() {
            let name = placeholder_name(segment)
                .ok_or_else(|| WriterError::malformed_placeholder(segment.trim(), position))?;
            match name.parse::<FieldName>() {
                Ok(field) if fields.contains(&field) => {
                    return Err(WriterError::DuplicateField { field });
                }
                Ok(field) => fields.push(field),
                Err(_) => debug!(field = name, position, "skipping unknown field in row format"),
            }
        }

        let descriptor = Self::from_fields(fields, separator);
        debug!(
            columns = descriptor.len(),
            template = %descriptor.render_template,
            "compiled row format"
        );
        Ok(descriptor)
    }

    /// The full 14-column CoNLL-2009 layout.
    #[must_use]
    pub fn conll2009(separator: &str) -> Self {
        Self::from_fields(FieldName::ALL.to_vec(), separator)
    }

    fn from_fields(fields: Vec<FieldName>, separator: &str) -> Self {
        let columns = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (*field, idx))
            .collect();
        let render_template = vec![VALUE_SLOT; fields.len()].join(separator);
        let mut header = String::from(ID_HEADER);
        for field in &fields {
            header.push_str(separator);
            header.push_str(&field.header_name());
        }
        Self {
            fields,
            columns,
            separator: separator.to_string(),
            render_template,
            header,
        }
    }

    /// Selected fields in output order.
    #[must_use]
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Zero-based column of `field`, if selected.
    #[must_use]
    pub fn column_index(&self, field: FieldName) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of selected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// One `{}` slot per column, joined by the separator.
    #[must_use]
    pub fn render_template(&self) -> &str {
        &self.render_template
    }

    /// `ID` followed by the uppercased field names, without a line break.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self
            .fields
            .iter()
            .map(|field| field.placeholder())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&template)
    }
}

/// Bare field name inside a `${...}` segment.
fn placeholder_name(segment: &str) -> Option<&str> {
    let name = segment.trim().strip_prefix("${")?.strip_suffix('}')?;
    if name.is_empty() { None } else { Some(name) }
}

/// Builds row format strings field by field.
///
/// ```
/// use conll_writer::FormatBuilder;
///
/// let template = FormatBuilder::new().with_form().with_pos().with_head().build();
/// assert_eq!(template, "${form},${pos},${head}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatBuilder {
    fields: Vec<FieldName>,
}

impl FormatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldName) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_form(self) -> Self {
        self.with_field(FieldName::Form)
    }

    #[must_use]
    pub fn with_lemma(self) -> Self {
        self.with_field(FieldName::Lemma)
    }

    #[must_use]
    pub fn with_plemma(self) -> Self {
        self.with_field(FieldName::PLemma)
    }

    #[must_use]
    pub fn with_pos(self) -> Self {
        self.with_field(FieldName::Pos)
    }

    #[must_use]
    pub fn with_ppos(self) -> Self {
        self.with_field(FieldName::PPos)
    }

    #[must_use]
    pub fn with_feat(self) -> Self {
        self.with_field(FieldName::Feat)
    }

    #[must_use]
    pub fn with_pfeat(self) -> Self {
        self.with_field(FieldName::PFeat)
    }

    #[must_use]
    pub fn with_head(self) -> Self {
        self.with_field(FieldName::Head)
    }

    #[must_use]
    pub fn with_phead(self) -> Self {
        self.with_field(FieldName::PHead)
    }

    #[must_use]
    pub fn with_deprel(self) -> Self {
        self.with_field(FieldName::Deprel)
    }

    #[must_use]
    pub fn with_pdeprel(self) -> Self {
        self.with_field(FieldName::PDeprel)
    }

    #[must_use]
    pub fn with_fillpred(self) -> Self {
        self.with_field(FieldName::FillPred)
    }

    #[must_use]
    pub fn with_pred(self) -> Self {
        self.with_field(FieldName::Pred)
    }

    #[must_use]
    pub fn with_apreds(self) -> Self {
        self.with_field(FieldName::APreds)
    }

    /// Placeholders joined by `,`.
    #[must_use]
    pub fn build(&self) -> String {
        self.fields
            .iter()
            .map(|field| field.placeholder())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_fast_path() {
        let descriptor = FormatDescriptor::compile(DEFAULT_CONLL2009_ROW_FORMAT, "\t").unwrap();
        assert_eq!(descriptor.fields(), &FieldName::ALL);
        assert_eq!(
            descriptor.header(),
            "ID\tFORM\tLEMMA\tPLEMMA\tPOS\tPPOS\tFEAT\tPFEAT\tHEAD\tPHEAD\tDEPREL\tPDEPREL\tFILLPRED\tPRED\tAPREDS"
        );
        assert_eq!(descriptor.column_index(FieldName::PFeat), Some(6));
        assert_eq!(descriptor.column_index(FieldName::APreds), Some(13));
    }

    #[test]
    fn test_blank_template_falls_back_to_default() {
        let blank = FormatDescriptor::compile("   ", "\t").unwrap();
        assert_eq!(blank, FormatDescriptor::conll2009("\t"));
    }

    #[test]
    fn test_general_path_matches_fast_path() {
        let spelled = FormatBuilder {
            fields: FieldName::ALL.to_vec(),
        }
        .build();
        assert_ne!(spelled, DEFAULT_CONLL2009_ROW_FORMAT);
        let general = FormatDescriptor::compile(&spelled, "|").unwrap();
        let fast = FormatDescriptor::compile(DEFAULT_CONLL2009_ROW_FORMAT, "|").unwrap();
        assert_eq!(general.header(), fast.header());
        assert_eq!(general.render_template(), fast.render_template());
        assert_eq!(general, fast);
    }

    #[test]
    fn test_template_order_is_kept() {
        let descriptor = FormatDescriptor::compile("${deprel}, ${form} ,${head}", "|").unwrap();
        assert_eq!(
            descriptor.fields(),
            &[FieldName::Deprel, FieldName::Form, FieldName::Head]
        );
        assert_eq!(descriptor.column_index(FieldName::Deprel), Some(0));
        assert_eq!(descriptor.column_index(FieldName::Head), Some(2));
        assert_eq!(descriptor.column_index(FieldName::Pos), None);
        assert_eq!(descriptor.header(), "ID|DEPREL|FORM|HEAD");
        assert_eq!(descriptor.render_template(), "{}|{}|{}");
    }

    #[test]
    fn test_unknown_fields_are_skipped() {
        let descriptor = FormatDescriptor::compile("${form},${bogus},${pos}", "\t").unwrap();
        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.column_index(FieldName::Pos), Some(1));
        assert_eq!(descriptor.header(), "ID\tFORM\tPOS");
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let descriptor = FormatDescriptor::compile("${FORM},${pos}", "\t").unwrap();
        assert_eq!(descriptor.fields(), &[FieldName::Pos]);
    }

    #[test]
    fn test_malformed_placeholders() {
        for template in ["form,${pos}", "${form", "${}", "$form}", "${form},,${pos}", "${form}, ,"] {
            let err = FormatDescriptor::compile(template, "\t").unwrap_err();
            assert!(
                matches!(err, WriterError::MalformedPlaceholder { .. }),
                "{template}: {err}"
            );
        }
        let err = FormatDescriptor::compile("${form},pos", "\t").unwrap_err();
        assert!(matches!(
            err,
            WriterError::MalformedPlaceholder { position: 1, .. }
        ));
    }

    #[test]
    fn test_trailing_commas_ignored() {
        for template in ["${form}, ${pos},", "${form}, ${pos},,"] {
            let descriptor = FormatDescriptor::compile(template, "\t").unwrap();
            assert_eq!(descriptor.fields(), &[FieldName::Form, FieldName::Pos]);
        }
        assert!(FormatDescriptor::compile(",", "\t").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = FormatDescriptor::compile("${form},${pos},${form}", "\t").unwrap_err();
        assert!(matches!(
            err,
            WriterError::DuplicateField {
                field: FieldName::Form
            }
        ));
    }

    #[test]
    fn test_only_unknown_fields_yields_empty_layout() {
        let descriptor = FormatDescriptor::compile("${bogus}", "\t").unwrap();
        assert!(descriptor.is_empty());
        assert_eq!(descriptor.header(), "ID");
        assert_eq!(descriptor.render_template(), "");
    }

    #[test]
    fn test_builder_round_trips_through_compile() {
        let template = FormatBuilder::new()
            .with_form()
            .with_lemma()
            .with_pdeprel()
            .with_apreds()
            .build();
        let descriptor = FormatDescriptor::compile(&template, "\t").unwrap();
        assert_eq!(descriptor.to_string(), "${form}, ${lemma}, ${pdeprel}, ${apreds}");
        assert_eq!(
            descriptor.fields(),
            &[
                FieldName::Form,
                FieldName::Lemma,
                FieldName::PDeprel,
                FieldName::APreds
            ]
        );
    }
}
