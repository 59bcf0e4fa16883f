use std::fmt::Display;
use std::fs;
use std::path::Path;

pub const ELEMENT_FIELD_WIDTH: usize = 4;

pub fn format_right_aligned(value: impl Display, width: usize) -> String {
    format!("{value:>width$}", width = width)
}

pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a String>) -> String {
    let mut joined = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            joined.push('\n');
        }
        joined.push_str(line);
    }
    joined
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}
