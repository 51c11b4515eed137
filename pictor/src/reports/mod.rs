//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`].

mod generate;
mod import;
mod list;
mod optimize;
mod output;
mod preview;

pub use generate::{GenerateReport, PreviewFile, TargetSummary};
pub use import::ImportReport;
pub use list::ListReport;
pub use optimize::{OptimizeReport, OptimizedAsset};
pub use output::{Output, Report, TerminalOutput};
pub use preview::PreviewReport;
use pictor_core::Diagnostics;

/// Informational findings are logged as they happen; only warnings are
/// repeated in the summary.
fn render_diagnostics(out: &mut dyn Output, diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.warnings() {
        out.warning(&diagnostic.to_string());
    }
}
