//! CLI command implementations.

mod localize;
mod options;
mod preview;
mod resolve;
mod scan;

pub use localize::{run_localize, LocalizeArgs};
pub use preview::{run_preview, PreviewArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use scan::{run_scan, ScanArgs};
