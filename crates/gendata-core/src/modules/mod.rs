pub mod dataset;
pub mod emitter;
pub mod generator;
pub mod serialization;

pub use dataset::{
    Dataset, DatasetRequest, DatasetSummary, build_dataset, render_dataset, write_dataset,
    write_summary_report,
};
pub use emitter::{DEFAULT_ELEMENTS_PER_LINE, SourceEmitter};
pub use generator::MatrixGenerator;
