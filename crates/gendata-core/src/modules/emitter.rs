//! Line-oriented builder for C header files.

use super::serialization::{
    ELEMENT_FIELD_WIDTH, format_right_aligned, join_lines, write_text_artifact,
};
use crate::domain::{GenDataError, GenDataResult};
use std::collections::VecDeque;
use std::fmt::Display;
use std::path::PathBuf;

pub const DEFAULT_ELEMENTS_PER_LINE: usize = 16;

/// Accumulates header lines and writes them once. Body lines are rejected
/// once the header guard closes the document, and `emit_file` consumes the
/// emitter, so a written document cannot be mutated afterwards.
#[derive(Debug, Clone)]
pub struct SourceEmitter {
    output_path: PathBuf,
    lines: VecDeque<String>,
    header_guard: Option<String>,
}

impl SourceEmitter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            lines: VecDeque::new(),
            header_guard: None,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn append_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    fn prepend_line(&mut self, line: impl Into<String>) {
        self.lines.push_front(line.into());
    }

    fn ensure_open(&self) -> GenDataResult<()> {
        match &self.header_guard {
            Some(guard) => Err(GenDataError::input_validation(
                "INPUT.HEADER_GUARD_CLOSED",
                format!("header guard '{}' already closes the document", guard),
            )),
            None => Ok(()),
        }
    }

    pub fn add_comment(&mut self, text: &str) -> GenDataResult<()> {
        self.ensure_open()?;
        self.append_line(format!("// {}", text));
        Ok(())
    }

    pub fn add_define(&mut self, symbol: &str, value: Option<&str>) -> GenDataResult<()> {
        self.ensure_open()?;
        self.append_line(render_define(symbol, value));
        Ok(())
    }

    pub fn add_typedef(&mut self, type_name: &str, alias: &str) -> GenDataResult<()> {
        self.ensure_open()?;
        self.append_line(format!("typedef {} {} ;", type_name, alias));
        Ok(())
    }

    pub fn add_empty_line(&mut self) -> GenDataResult<()> {
        self.ensure_open()?;
        self.append_line(String::new());
        Ok(())
    }

    /// Appends `static <type> <name>[<size>] = { ... };` with elements
    /// right-aligned in a fixed-width field, at most `elements_per_line`
    /// per row. Nothing is appended when validation fails.
    pub fn add_static_array<T: Display>(
        &mut self,
        type_name: &str,
        name: &str,
        size: usize,
        elements: &[T],
        elements_per_line: usize,
    ) -> GenDataResult<()> {
        self.ensure_open()?;
        if elements.len() != size {
            return Err(GenDataError::input_validation(
                "INPUT.STATIC_ARRAY_SIZE",
                format!(
                    "array '{}' declares {} elements but {} were supplied",
                    name,
                    size,
                    elements.len()
                ),
            ));
        }
        if elements_per_line == 0 {
            return Err(GenDataError::input_validation(
                "INPUT.STATIC_ARRAY_WRAP",
                format!("array '{}' needs at least one element per line", name),
            ));
        }

        self.append_line(format!("static {} {}[{}] =", type_name, name, size));
        self.append_line("{");
        for row in elements.chunks(elements_per_line) {
            let line = row
                .iter()
                .map(|element| {
                    format!("{},", format_right_aligned(element, ELEMENT_FIELD_WIDTH))
                })
                .collect::<String>();
            self.append_line(line);
        }
        self.append_line("};");
        Ok(())
    }

    /// Wraps everything added so far in `#ifndef`/`#define`/`#endif`.
    pub fn add_header_guard(&mut self, name: &str) -> GenDataResult<()> {
        if let Some(existing) = &self.header_guard {
            return Err(GenDataError::input_validation(
                "INPUT.HEADER_GUARD",
                format!(
                    "header guard '{}' requested but '{}' already encloses the document",
                    name, existing
                ),
            ));
        }

        self.prepend_line(render_define(name, None));
        self.prepend_line(format!("#ifndef {}", name));
        self.append_line(format!("#endif // {}", name));
        self.header_guard = Some(name.to_string());
        Ok(())
    }

    pub fn render(&self) -> String {
        join_lines(&self.lines)
    }

    /// Writes the document to the output path, replacing any existing file.
    pub fn emit_file(self) -> GenDataResult<PathBuf> {
        let contents = self.render();
        write_text_artifact(&self.output_path, &contents).map_err(|source| {
            GenDataError::io_system(
                "IO.EMIT_WRITE",
                format!(
                    "failed to write header '{}': {}",
                    self.output_path.display(),
                    source
                ),
            )
        })?;
        tracing::debug!(
            path = %self.output_path.display(),
            lines = self.lines.len(),
            bytes = contents.len(),
            "emitted header file"
        );
        Ok(self.output_path)
    }
}

fn render_define(symbol: &str, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("#define {} {}", symbol, value),
        _ => format!("#define {}", symbol),
    }
}
