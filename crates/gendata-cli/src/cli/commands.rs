use super::CliError;
use super::helpers::init_logging;
use gendata_core::domain::{DEFAULT_SEED, ElementRange, GenerationOptions};
use gendata_core::modules::{DatasetRequest, write_dataset, write_summary_report};
use gendata_core::numerics::overflow_risk;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct GenerateArgs {
    /// Size of a side of a square matrix
    #[arg(long)]
    dim_size: usize,

    /// Name of the output file
    #[arg(long)]
    output_name: PathBuf,

    /// Data type of each element in the matrices, e.g. int, long
    #[arg(long)]
    data_type: String,

    /// Seed for the element generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Smallest generated element value (inclusive)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min_element: i64,

    /// Largest generated element value (inclusive)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    max_element: i64,

    /// Optional JSON summary output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl GenerateArgs {
    fn options(&self) -> Result<GenerationOptions, CliError> {
        let range =
            ElementRange::new(self.min_element, self.max_element).map_err(CliError::Generate)?;
        GenerationOptions::with_seed(self.seed, self.dim_size, self.data_type.as_str(), range)
            .map_err(CliError::Generate)
    }
}

pub(super) fn run_generate_command(
    args: GenerateArgs,
    command_line: &str,
) -> Result<i32, CliError> {
    init_logging(args.verbose)?;

    let options = args.options()?;
    if let Some(risk) = overflow_risk(
        options.data_type(),
        options.dim_size(),
        options.element_range(),
    ) {
        tracing::warn!("{}", risk);
    }

    let request = DatasetRequest::new(options, &args.output_name, command_line);
    let summary = write_dataset(&request).map_err(CliError::Generate)?;
    tracing::info!(
        path = %summary.output_path.display(),
        dim = summary.dim_size,
        data_type = %summary.data_type,
        "wrote matrix dataset"
    );

    if let Some(report_path) = &args.report {
        write_summary_report(report_path, &summary).map_err(CliError::Generate)?;
        tracing::info!(path = %report_path.display(), "wrote dataset summary");
    }

    Ok(0)
}
