//! Minimal indented XML emitter.

use std::fmt::Write as _;

/// Escape text for use in XML attribute values and character data.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes XML elements into a string buffer, four spaces per level.
pub(crate) struct XmlWriter {
    buffer: String,
    depth: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        let mut buffer = String::new();
        buffer.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        Self { buffer, depth: 0 }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str("    ");
        }
    }

    fn tag(&mut self, name: &str, attrs: &[(&str, &str)], close: &str) {
        self.indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        for (key, value) in attrs {
            let _ = write!(self.buffer, " {key}=\"{}\"", escape(value));
        }
        self.buffer.push_str(close);
        self.buffer.push('\n');
    }

    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.tag(name, attrs, ">");
        self.depth += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        let _ = writeln!(self.buffer, "</{name}>");
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.tag(name, attrs, " />");
    }

    /// Element holding one line of character data.
    pub fn text(&mut self, name: &str, text: &str) {
        self.indent();
        let _ = writeln!(self.buffer, "<{name}>{}</{name}>", escape(text));
    }

    /// Raw character data line at the current depth.
    pub fn line(&mut self, text: &str) {
        self.indent();
        self.buffer.push_str(&escape(text));
        self.buffer.push('\n');
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn nested_elements_are_indented() {
        let mut w = XmlWriter::new();
        w.open("scene", &[]);
        w.empty("parameter", &[("name", "x"), ("value", "1")]);
        w.close("scene");
        let xml = w.finish();
        assert!(xml.contains("<scene>\n    <parameter name=\"x\" value=\"1\" />\n</scene>\n"));
    }
}
