/// Line-oriented buffer for emitting C++ source with indentation
#[derive(Debug, Clone)]
pub struct CodeWriter {
    lines: Vec<String>,
    current: String,
    indents: usize,
    indent_str: &'static str,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: String::new(),
            indents: 0,
            indent_str: "    ",
        }
    }

    pub fn indent(&mut self) {
        self.indents += 1;
    }

    pub fn dedent(&mut self) {
        self.indents = self.indents.saturating_sub(1);
    }

    /// Append to the line under construction
    pub fn put(&mut self, code: &str) {
        self.current.push_str(code);
    }

    /// Finish the line under construction
    pub fn newline(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
    }

    /// Append `code` and finish the line, without indentation
    pub fn putline(&mut self, code: &str) {
        self.put(code);
        self.newline();
    }

    /// Start a line at the current indentation
    pub fn startline(&mut self, code: &str) {
        let prefix = self.indent_str.repeat(self.indents);
        self.put(&prefix);
        self.put(code);
    }

    /// Write a whole line at the current indentation
    pub fn writeline(&mut self, code: &str) {
        self.startline(code);
        self.newline();
    }

    /// Write `/* comment */` on its own indented line
    pub fn comment(&mut self, comment: &str) {
        self.writeline(&format!("/* {} */", comment));
    }

    pub fn include(&mut self, filename: &str) {
        self.putline(&format!("#include \"{}\"", filename));
    }

    pub fn external_include(&mut self, header: &str) {
        self.putline(&format!("#include <{}>", header));
    }

    /// Join all lines; the result always ends with a newline
    pub fn finish(mut self) -> String {
        if !self.current.is_empty() {
            self.newline();
        }
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
