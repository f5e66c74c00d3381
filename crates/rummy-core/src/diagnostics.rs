//! Injected logging capability for the meld engine.
//!
//! Components never reach for a global logger. Each slot owns a [`MeldLog`]
//! and lends it to the rule functions through a [`Reporter`], which stamps
//! every diagnostic with the slot's name.

use crate::error::MeldError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub slot: String,
    pub error: MeldError,
}

pub trait MeldLog {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl MeldLog for TracingLog {
    fn report(&self, diagnostic: Diagnostic) {
        let Diagnostic {
            severity,
            slot,
            error,
        } = diagnostic;
        match severity {
            Severity::Info => tracing::info!(
                target: "rummy_core::meld_slot",
                slot = %slot,
                message = %error
            ),
            Severity::Warning => tracing::warn!(
                target: "rummy_core::meld_slot",
                slot = %slot,
                message = %error
            ),
            Severity::Error => tracing::error!(
                target: "rummy_core::meld_slot",
                slot = %slot,
                message = %error
            ),
        }
    }
}

/// Keeps every diagnostic in memory; used by tests and the replay harness.
#[derive(Debug, Default)]
pub struct CapturedLog {
    entries: RefCell<Vec<Diagnostic>>,
}

impl CapturedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl MeldLog for CapturedLog {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}

impl<L: MeldLog + ?Sized> MeldLog for &L {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Borrowed view of a slot's log tagged with the slot name.
#[derive(Clone, Copy)]
pub struct Reporter<'a> {
    slot: &'a str,
    log: &'a dyn MeldLog,
}

impl<'a> Reporter<'a> {
    pub fn new(slot: &'a str, log: &'a dyn MeldLog) -> Self {
        Self { slot, log }
    }

    pub fn slot(&self) -> &str {
        self.slot
    }

    pub fn warn(&self, error: MeldError) {
        self.emit(Severity::Warning, error);
    }

    pub fn error(&self, error: MeldError) {
        self.emit(Severity::Error, error);
    }

    fn emit(&self, severity: Severity, error: MeldError) {
        self.log.report(Diagnostic {
            severity,
            slot: self.slot.to_string(),
            error,
        });
    }
}
