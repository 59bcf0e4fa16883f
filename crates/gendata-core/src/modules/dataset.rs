use super::emitter::SourceEmitter;
use super::generator::MatrixGenerator;
use crate::domain::{ElementRange, GenDataError, GenDataResult, GenerationOptions, Matrix};
use crate::numerics::matmul;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER_GUARD: &str = "__DATASET_H";
pub const ELEMENT_TYPEDEF: &str = "data_t";
pub const INPUT1_ARRAY: &str = "input1_data";
pub const INPUT2_ARRAY: &str = "input2_data";
pub const VERIFY_ARRAY: &str = "verify_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub options: GenerationOptions,
    pub input1: Matrix,
    pub input2: Matrix,
    pub verify: Matrix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRequest {
    pub options: GenerationOptions,
    pub output_path: PathBuf,
    /// Recorded verbatim in the leading comment of the header.
    pub command_line: String,
}

impl DatasetRequest {
    pub fn new(
        options: GenerationOptions,
        output_path: impl Into<PathBuf>,
        command_line: impl Into<String>,
    ) -> Self {
        Self {
            options,
            output_path: output_path.into(),
            command_line: command_line.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub output_path: PathBuf,
    pub dim_size: usize,
    pub array_size: usize,
    pub data_type: String,
    pub seed: u64,
    pub element_range: ElementRange,
    pub line_count: usize,
    pub input1_sum: i64,
    pub input2_sum: i64,
    pub verify_sum: i64,
}

/// Draws both operands from one generator, in order, and multiplies them.
pub fn build_dataset(options: &GenerationOptions) -> GenDataResult<Dataset> {
    let mut generator = MatrixGenerator::new(options.seed());
    let range = options.element_range();
    let input1 = generator.generate_matrix(options.dim_size(), range)?;
    let input2 = generator.generate_matrix(options.dim_size(), range)?;
    let verify = matmul(&input1, &input2)?;

    Ok(Dataset {
        options: options.clone(),
        input1,
        input2,
        verify,
    })
}

pub fn render_dataset(
    dataset: &Dataset,
    command_line: &str,
    output_path: impl Into<PathBuf>,
) -> GenDataResult<SourceEmitter> {
    let options = &dataset.options;
    let array_size = options.array_size();
    let per_line = options.dim_size();

    let mut emitter = SourceEmitter::new(output_path);
    emitter.add_comment(&format!("Command: {}", command_line))?;
    emitter.add_define("ARRAY_SIZE", Some(&array_size.to_string()))?;
    emitter.add_define("DIM_SIZE", Some(&options.dim_size().to_string()))?;
    emitter.add_typedef(options.data_type(), ELEMENT_TYPEDEF)?;
    for (name, matrix) in [
        (INPUT1_ARRAY, &dataset.input1),
        (INPUT2_ARRAY, &dataset.input2),
        (VERIFY_ARRAY, &dataset.verify),
    ] {
        emitter.add_static_array(
            ELEMENT_TYPEDEF,
            name,
            array_size,
            matrix.elements(),
            per_line,
        )?;
    }
    emitter.add_header_guard(HEADER_GUARD)?;
    Ok(emitter)
}

pub fn write_dataset(request: &DatasetRequest) -> GenDataResult<DatasetSummary> {
    let dataset = build_dataset(&request.options)?;
    let emitter = render_dataset(&dataset, &request.command_line, &request.output_path)?;
    let line_count = emitter.line_count();
    let output_path = emitter.emit_file()?;

    tracing::debug!(
        path = %output_path.display(),
        dim = request.options.dim_size(),
        "dataset written"
    );

    let options = &dataset.options;
    Ok(DatasetSummary {
        output_path,
        dim_size: options.dim_size(),
        array_size: options.array_size(),
        data_type: options.data_type().to_string(),
        seed: options.seed(),
        element_range: options.element_range(),
        line_count,
        input1_sum: dataset.input1.element_sum(),
        input2_sum: dataset.input2.element_sum(),
        verify_sum: dataset.verify.element_sum(),
    })
}

pub fn write_summary_report(path: &Path, summary: &DatasetSummary) -> GenDataResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            GenDataError::io_system(
                "IO.REPORT_DIRECTORY",
                format!(
                    "failed to create report directory '{}': {}",
                    parent.display(),
                    source
                ),
            )
        })?;
    }

    let json = serde_json::to_string_pretty(summary).map_err(|source| {
        GenDataError::internal(
            "SYS.REPORT_SERIALIZE",
            format!("failed to serialize dataset summary: {}", source),
        )
    })?;
    fs::write(path, json).map_err(|source| {
        GenDataError::io_system(
            "IO.REPORT_WRITE",
            format!("failed to write report '{}': {}", path.display(), source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{DatasetRequest, build_dataset, render_dataset, write_dataset, write_summary_report};
    use crate::domain::GenerationOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn verify_matrix_is_the_product_of_the_inputs() {
        let options = GenerationOptions::new(4, "int").expect("options");
        let dataset = build_dataset(&options).expect("dataset should build");

        for row in 0..4 {
            for col in 0..4 {
                let expected: i64 = (0..4)
                    .map(|k| {
                        dataset.input1.get(row, k).expect("lhs")
                            * dataset.input2.get(k, col).expect("rhs")
                    })
                    .sum();
                assert_eq!(dataset.verify.get(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn rendered_dataset_follows_reference_layout() {
        let options = GenerationOptions::new(2, "int").expect("options");
        let dataset = build_dataset(&options).expect("dataset");
        let emitter = render_dataset(&dataset, "gen --dim-size 2", "out.h").expect("render");
        let lines: Vec<&str> = emitter.lines().collect();

        assert_eq!(lines[0], "#ifndef __DATASET_H");
        assert_eq!(lines[1], "#define __DATASET_H");
        assert_eq!(lines[2], "// Command: gen --dim-size 2");
        assert_eq!(lines[3], "#define ARRAY_SIZE 4");
        assert_eq!(lines[4], "#define DIM_SIZE 2");
        assert_eq!(lines[5], "typedef int data_t ;");
        assert_eq!(lines[6], "static data_t input1_data[4] =");
        assert_eq!(lines[11], "static data_t input2_data[4] =");
        assert_eq!(lines[16], "static data_t verify_data[4] =");
        assert_eq!(lines.last().copied(), Some("#endif // __DATASET_H"));
        assert_eq!(lines.len(), 22);
    }

    #[test]
    fn write_dataset_is_byte_identical_across_runs() {
        let temp = TempDir::new().expect("tempdir should be created");
        let options = GenerationOptions::new(8, "long").expect("options");
        let first_path = temp.path().join("first.h");
        let second_path = temp.path().join("second.h");

        write_dataset(&DatasetRequest::new(options.clone(), &first_path, "cmd"))
            .expect("first write");
        write_dataset(&DatasetRequest::new(options, &second_path, "cmd")).expect("second write");

        assert_eq!(
            fs::read(&first_path).expect("first file"),
            fs::read(&second_path).expect("second file")
        );
    }

    #[test]
    fn summary_report_is_written_as_json() {
        let temp = TempDir::new().expect("tempdir should be created");
        let options = GenerationOptions::new(3, "int").expect("options");
        let summary = write_dataset(&DatasetRequest::new(
            options,
            temp.path().join("dataset.h"),
            "cmd",
        ))
        .expect("dataset write");
        let report_path = temp.path().join("reports/summary.json");

        write_summary_report(&report_path, &summary).expect("report should be written");

        let parsed: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&report_path).expect("report should be readable"),
        )
        .expect("report should be valid JSON");
        assert_eq!(parsed["dimSize"], 3);
        assert_eq!(parsed["arraySize"], 9);
        assert_eq!(parsed["dataType"], "int");
        assert_eq!(parsed["seed"], 154);
        assert_eq!(parsed["elementRange"]["max"], 2);
        assert_eq!(parsed["verifySum"], summary.verify_sum);
    }
}
