//! Writer behavior when the sink stops accepting bytes.

use std::io::{self, Write};

use conll_model::{Document, Token, WriterOptions};
use conll_writer::{ConllWriter, WriterError, to_conll_string};

/// Accepts `capacity` bytes, then fails every write.
struct ShortSink {
    written: Vec<u8>,
    capacity: usize,
}

impl ShortSink {
    fn new(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
        }
    }
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

/// One sentence of `count` single-letter tokens separated by spaces.
fn long_sentence(count: usize) -> Document {
    let text = "a ".repeat(count);
    let mut doc = Document::new(text.trim_end());
    doc.add_sentence(0, count * 2 - 1);
    for idx in 0..count {
        doc.add_token(Token::new(idx * 2, idx * 2 + 1).with_pos("DT"));
    }
    doc
}

fn options() -> WriterOptions {
    WriterOptions::default().with_row_format("${form}, ${pos}")
}

#[test]
fn test_short_sink_surfaces_io_error_on_flush() {
    let doc = long_sentence(3);
    let expected = to_conll_string(&doc, &options()).unwrap();

    let mut sink = ShortSink::new(12);
    {
        let mut writer = ConllWriter::new(&mut sink, &options()).unwrap();
        let outcome = writer.write_document(&doc).and_then(|_| writer.flush());
        assert!(matches!(outcome, Err(WriterError::Io(_))), "{outcome:?}");
    }

    assert_eq!(sink.written.len(), 12);
    assert!(expected.as_bytes().starts_with(&sink.written));
}

#[test]
fn test_short_sink_stops_document_mid_block() {
    let doc = long_sentence(4000);
    let expected = to_conll_string(&doc, &options()).unwrap();
    assert!(expected.len() > 16 * 1024);

    let mut sink = ShortSink::new(100);
    {
        let mut writer = ConllWriter::new(&mut sink, &options()).unwrap();
        let err = writer.write_document(&doc).unwrap_err();
        assert!(matches!(err, WriterError::Io(_)), "{err}");
        assert!(!err.is_configuration());
    }

    assert_eq!(sink.written.len(), 100);
    assert!(expected.as_bytes().starts_with(&sink.written));
    assert!(!String::from_utf8_lossy(&sink.written).ends_with("\n\n"));
}
