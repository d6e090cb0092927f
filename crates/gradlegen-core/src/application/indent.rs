//! Indentation-aware text emission.

/// A text emitter that tracks a nesting depth and writes
/// `header { … }`-shaped blocks with consistent indentation. Blocks compose
/// by nested [`IndentingWriter::block`] calls. Pure formatting — no
/// validation of content, no failure mode.
#[derive(Debug, Default)]
pub struct IndentingWriter {
    buffer: String,
    level: usize,
}

impl IndentingWriter {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.level {
            self.buffer.push_str(Self::INDENT);
        }
        self.buffer.push_str(text.as_ref());
        self.buffer.push('\n');
    }

    /// Write `header {`, run `body` one level deeper, write `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.line(format!("{header} {{"));
        self.level += 1;
        body(self);
        self.level -= 1;
        self.line("}");
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the writer, yielding the accumulated text. Every line ends
    /// with `\n`.
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_terminated() {
        let mut writer = IndentingWriter::new();
        writer.line("group = 'com.example'");
        assert_eq!(writer.finish(), "group = 'com.example'\n");
    }

    #[test]
    fn blocks_indent_their_body() {
        let mut writer = IndentingWriter::new();
        writer.block("plugins", |w| {
            w.line("java");
        });
        assert_eq!(writer.finish(), "plugins {\n    java\n}\n");
    }

    #[test]
    fn blocks_compose_recursively() {
        let mut writer = IndentingWriter::new();
        writer.block("dependencyManagement", |w| {
            w.block("imports", |w| {
                w.line("mavenBom 'com.example:deps:1.0'");
            });
        });
        assert_eq!(
            writer.finish(),
            "dependencyManagement {\n    imports {\n        mavenBom 'com.example:deps:1.0'\n    }\n}\n"
        );
    }
}
