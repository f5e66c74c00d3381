use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rummy_core::diagnostics::{CapturedLog, Diagnostic, MeldLog, Severity, TracingLog};
use rummy_core::meld::SlotKind;
use rummy_core::model::FaceParseError;
use rummy_core::slot::MeldSlot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{ReplayConfig, ResolvedOutputs, SlotScript};
use crate::script::{CardBook, Step};

/// Replays every slot script of a configuration and streams JSONL rows.
pub struct ReplayRunner {
    config: ReplayConfig,
    outputs: ResolvedOutputs,
    logging_enabled: bool,
}

/// Summary details returned after a run.
#[derive(Debug)]
pub struct ReplaySummary {
    pub slots: usize,
    pub rows_written: usize,
    pub diagnostics: usize,
    pub jsonl_path: PathBuf,
    pub telemetry_path: Option<PathBuf>,
}

/// One line of the step log: the step that ran and the slot state after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    pub run_id: String,
    pub slot: String,
    pub step: usize,
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<Vec<String>>,
    pub kind: SlotKind,
    pub cards: Vec<String>,
    pub value: u32,
    pub revision: u64,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticRow {
    pub severity: Severity,
    pub message: String,
}

impl From<Diagnostic> for DiagnosticRow {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity,
            message: diagnostic.error.to_string(),
        }
    }
}

/// Sends diagnostics to `tracing` and keeps them for the step log.
#[derive(Debug, Default)]
struct ReplayLog {
    captured: CapturedLog,
}

impl MeldLog for ReplayLog {
    fn report(&self, diagnostic: Diagnostic) {
        TracingLog.report(diagnostic.clone());
        self.captured.report(diagnostic);
    }
}

impl ReplayRunner {
    pub fn new(config: ReplayConfig, outputs: ResolvedOutputs) -> Self {
        Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
        }
    }

    pub fn run(&self) -> Result<ReplaySummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);

        let mut rows_written = 0usize;
        let mut diagnostics = 0usize;
        for script in &self.config.slots {
            let (rows, reported) = self.replay_slot(script, &mut writer)?;
            rows_written += rows;
            diagnostics += reported;
        }
        writer.flush()?;

        let telemetry_path = self
            .logging_enabled
            .then(|| self.outputs.output_dir().join("telemetry.jsonl"));

        Ok(ReplaySummary {
            slots: self.config.slots.len(),
            rows_written,
            diagnostics,
            jsonl_path: self.outputs.jsonl.clone(),
            telemetry_path,
        })
    }

    fn replay_slot<W: Write>(
        &self,
        script: &SlotScript,
        writer: &mut W,
    ) -> Result<(usize, usize), RunnerError> {
        let mut book = CardBook::new();
        let mut slot = MeldSlot::with_log(script.name.clone(), ReplayLog::default());
        slot.declare(script.kind);

        let mut rows = 0usize;
        let mut reported = 0usize;
        for (index, step) in script.steps.iter().enumerate() {
            let mut record = StepRecord {
                run_id: self.config.run_id.clone(),
                slot: script.name.clone(),
                step: index,
                op: step.op().to_string(),
                card: None,
                fits: None,
                replaces: None,
                removed: None,
                released: None,
                kind: slot.kind(),
                cards: Vec::new(),
                value: 0,
                revision: 0,
                diagnostics: Vec::new(),
            };

            let card = match step.card() {
                Some(label) => {
                    let card = book.card(label).map_err(|source| RunnerError::Card {
                        slot: script.name.clone(),
                        step: index,
                        source,
                    })?;
                    record.card = Some(book.label(card));
                    Some(card)
                }
                None => None,
            };

            match (step, card) {
                (Step::Declare { kind }, _) => slot.declare(*kind),
                (Step::Add { .. }, Some(card)) => slot.add_card(card),
                (Step::Remove { .. }, Some(card)) => record.removed = Some(slot.remove_card(card)),
                (Step::CanFit { .. }, Some(card)) => {
                    let outcome = slot.can_fit(card);
                    record.fits = Some(outcome.fits());
                    record.replaces = outcome.replaced_joker().map(|joker| book.label(joker));
                }
                (Step::Reset, _) => record.released = Some(book.labels(&slot.reset())),
                (Step::Value, _) | (_, None) => {}
            }

            record.kind = slot.kind();
            record.cards = book.labels(slot.cards());
            record.value = slot.value();
            record.revision = slot.revision();
            record.diagnostics = slot
                .log()
                .captured
                .take()
                .into_iter()
                .map(DiagnosticRow::from)
                .collect();
            reported += record.diagnostics.len();

            event!(
                target: "rummy_replay::step",
                Level::DEBUG,
                slot = %record.slot,
                step = record.step,
                op = %record.op,
                value = record.value,
                cards = record.cards.len()
            );

            serde_json::to_writer(&mut *writer, &record)?;
            writer.write_all(b"\n")?;
            rows += 1;
        }

        Ok((rows, reported))
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize step row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("slot '{slot}' step {step}: {source}")]
    Card {
        slot: String,
        step: usize,
        #[source]
        source: FaceParseError,
    },
}
