pub mod diagnostics;
pub mod error;
pub mod meld;
pub mod model;
pub mod slot;

pub use diagnostics::{CapturedLog, Diagnostic, MeldLog, Severity, TracingLog};
pub use error::MeldError;
pub use meld::{FitOutcome, SlotKind};
pub use slot::{MeldSlot, SlotLayout, SlotSnapshot};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "rummy"
    }

    pub const fn codename() -> &'static str {
        "Meld Engine"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
