// ABOUTME: Transient text editor for the field currently being typed into
// Lives only while a field has focus; the crawl data is re-derived from it on every edit

/// Cursor-aware editing buffer. Columns count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditor {
    lines: Vec<String>,
    cursor_line: usize,
    cursor_col: usize,
    multiline: bool,
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl FieldEditor {
    /// Seed the editor with `text`, cursor at the very end
    pub fn from_string(text: &str, multiline: bool) -> Self {
        let mut lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(ToString::to_string).collect()
        };
        if !multiline && lines.len() > 1 {
            lines = vec![lines.join(" ")];
        }

        let cursor_line = lines.len() - 1;
        let cursor_col = char_len(&lines[cursor_line]);
        Self {
            lines,
            cursor_line,
            cursor_col,
            multiline,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// (line, column) of the cursor
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let line = &mut self.lines[self.cursor_line];
        let at = byte_offset(line, self.cursor_col);
        line.insert(at, ch);
        self.cursor_col += 1;
    }

    /// Split the current line. Single-line editors ignore this.
    pub fn insert_newline(&mut self) {
        if !self.multiline {
            return;
        }
        let line = &mut self.lines[self.cursor_line];
        let at = byte_offset(line, self.cursor_col);
        let right = line.split_off(at);

        self.lines.insert(self.cursor_line + 1, right);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| *ch != '\r') {
            if ch == '\n' && !self.multiline {
                self.insert_char(' ');
            } else {
                self.insert_char(ch);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            // Delete character before cursor
            let line = &mut self.lines[self.cursor_line];
            let at = byte_offset(line, self.cursor_col - 1);
            line.remove(at);
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            // Join with previous line
            let current_line = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = char_len(&self.lines[self.cursor_line]);
            self.lines[self.cursor_line].push_str(&current_line);
        }
    }

    pub fn delete(&mut self) {
        let line_len = char_len(&self.lines[self.cursor_line]);
        if self.cursor_col < line_len {
            let line = &mut self.lines[self.cursor_line];
            let at = byte_offset(line, self.cursor_col);
            line.remove(at);
        } else if self.cursor_line + 1 < self.lines.len() {
            let next_line = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next_line);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = char_len(&self.lines[self.cursor_line]);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_col < char_len(&self.lines[self.cursor_line]) {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.cursor_col.min(char_len(&self.lines[self.cursor_line]));
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = self.cursor_col.min(char_len(&self.lines[self.cursor_line]));
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor_col = char_len(&self.lines[self.cursor_line]);
    }
}
