mod batch;
mod descriptor;
mod load;
mod operation;

pub use batch::{BatchReport, BatchResult, evaluate_batch};
pub use descriptor::{RectangleDescriptor, RectangleRequest};
pub use load::{read_batch_file, read_request_file};
pub use operation::{Operation, Outcome, Response, evaluate};
