//! Single-row field buffer.

use std::io::{self, Write};
use std::sync::Arc;

use conll_model::FieldName;

use crate::format::FormatDescriptor;

/// Placeholder written for absent values.
pub const UNUSED: &str = "_";

/// Reusable working set for one row.
///
/// Slots are addressed through the descriptor's column mapping; writing a
/// field that the layout does not select does nothing. [`FieldBuffer::write_line`]
/// emits the row and clears every slot, so the buffer never carries values
/// from one row into the next. A buffer belongs to one writer; concurrent
/// writers share the descriptor, not the buffer.
#[derive(Debug, Clone)]
pub struct FieldBuffer {
    descriptor: Arc<FormatDescriptor>,
    id: usize,
    slots: Vec<Option<String>>,
}

impl FieldBuffer {
    pub fn new(descriptor: Arc<FormatDescriptor>) -> Self {
        let slots = vec![None; descriptor.len()];
        Self {
            descriptor,
            id: 0,
            slots,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    pub fn set_id(&mut self, id: usize) -> &mut Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// True when the layout selects `field`.
    #[must_use]
    pub fn has(&self, field: FieldName) -> bool {
        self.descriptor.contains(field)
    }

    pub fn put(&mut self, field: FieldName, value: &str) -> &mut Self {
        if let Some(idx) = self.descriptor.column_index(field) {
            self.slots[idx] = Some(value.to_string());
        }
        self
    }

    /// Write `value` into `field` and its gold/predicted partner.
    pub fn put_mirrored(&mut self, field: FieldName, value: &str) -> &mut Self {
        self.put(field, value);
        if let Some(partner) = field.mirror() {
            self.put(partner, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        let idx = self.descriptor.column_index(field)?;
        self.slots[idx].as_deref()
    }

    /// True when no slot holds a value.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Write `{id}\t{fields}` followed by a newline, then clear the slots.
    ///
    /// The id is always tab-separated from the fields; fields are joined by
    /// the layout's separator. Unfilled slots render as `_`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`. The slots are cleared either way.
    pub fn write_line<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let result = self.write_fields(out);
        self.clear();
        result
    }

    fn write_fields<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}\t", self.id)?;
        let separator = self.descriptor.separator();
        for (idx, slot) in self.slots.iter().enumerate() {
            if idx > 0 {
                out.write_all(separator.as_bytes())?;
            }
            out.write_all(slot.as_deref().unwrap_or(UNUSED).as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(template: &str, separator: &str) -> FieldBuffer {
        let descriptor = FormatDescriptor::compile(template, separator).unwrap();
        FieldBuffer::new(Arc::new(descriptor))
    }

    #[test]
    fn test_unselected_fields_are_dropped() {
        let mut buf = buffer("${form},${pos}", "\t");
        buf.put(FieldName::Lemma, "dog");
        assert!(buf.is_clear());
        assert_eq!(buf.get(FieldName::Lemma), None);

        buf.put(FieldName::Pos, "NNS");
        assert_eq!(buf.get(FieldName::Pos), Some("NNS"));
        assert!(buf.has(FieldName::Form));
        assert!(!buf.has(FieldName::Head));
    }

    #[test]
    fn test_mirrored_put_fills_both_columns() {
        let mut buf = buffer("${pos},${ppos},${head}", "\t");
        buf.put_mirrored(FieldName::Pos, "VBZ");
        buf.put_mirrored(FieldName::Head, "0");
        assert_eq!(buf.get(FieldName::Pos), Some("VBZ"));
        assert_eq!(buf.get(FieldName::PPos), Some("VBZ"));
        assert_eq!(buf.get(FieldName::Head), Some("0"));
    }

    #[test]
    fn test_write_line_layout_and_clear() {
        let mut buf = buffer("${form},${pos},${deprel}", "|");
        buf.set_id(3).put(FieldName::Form, "bark").put(FieldName::Pos, "VBZ");

        let mut out = Vec::new();
        buf.write_line(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3\tbark|VBZ|_\n");
        assert!(buf.is_clear());

        let mut out = Vec::new();
        buf.set_id(4).write_line(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4\t_|_|_\n");
    }

    /// Accepts `capacity` bytes, then fails every write.
    struct ShortSink {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for ShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(io::Error::other("sink full"));
            }
            let take = room.min(buf.len());
            self.written.extend_from_slice(&buf[..take]);
            Ok(take)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_still_clears_slots() {
        let mut buf = buffer("${form},${pos}", "\t");
        buf.set_id(1).put(FieldName::Form, "Dogs").put(FieldName::Pos, "NNS");

        let mut sink = ShortSink {
            written: Vec::new(),
            capacity: 4,
        };
        let err = buf.write_line(&mut sink).unwrap_err();
        assert_eq!(err.to_string(), "sink full");
        assert!(buf.is_clear());
        assert_eq!(sink.written, b"1\tDo");

        let mut out = Vec::new();
        buf.set_id(2).write_line(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\t_\t_\n");
    }

    #[test]
    fn test_empty_layout_writes_id_only() {
        let mut buf = buffer("${bogus}", "\t");
        let mut out = Vec::new();
        buf.set_id(1).write_line(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\t\n");
    }
}
