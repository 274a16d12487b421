//! Run report - ordered record of everything evaluated in one invocation

use crate::domain::entities::Evaluation;
use crate::error::CalcError;

/// Input line that could not be turned into an operation request
#[derive(Debug)]
pub struct MalformedLine {
    /// 1-based line number in the input
    pub line: usize,
    pub input: String,
    pub error: CalcError,
}

/// One entry of a run report
#[derive(Debug)]
pub enum RunEntry {
    Evaluated(Evaluation),
    Malformed(MalformedLine),
}

/// Process exit status derived from a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every entry succeeded
    Success,
    /// At least one computation failed, all input parsed
    ComputationFailed,
    /// At least one input could not be parsed
    MalformedInput,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::ComputationFailed => 1,
            ExitStatus::MalformedInput => 2,
        }
    }

    /// Status for a single failed operation
    pub fn for_error(error: &CalcError) -> Self {
        if error.is_malformed_input() {
            ExitStatus::MalformedInput
        } else {
            ExitStatus::ComputationFailed
        }
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<RunEntry>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_evaluation(&mut self, evaluation: Evaluation) {
        self.entries.push(RunEntry::Evaluated(evaluation));
    }

    pub fn push_malformed(&mut self, line: usize, input: impl Into<String>, error: CalcError) {
        self.entries.push(RunEntry::Malformed(MalformedLine {
            line,
            input: input.into(),
            error,
        }));
    }

    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.entries.iter().filter_map(|e| match e {
            RunEntry::Evaluated(evaluation) => Some(evaluation),
            RunEntry::Malformed(_) => None,
        })
    }

    pub fn succeeded(&self) -> usize {
        self.evaluations().filter(|e| e.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.evaluations().filter(|e| !e.is_success()).count()
    }

    pub fn malformed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, RunEntry::Malformed(_)))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.malformed() == 0
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.malformed() > 0 {
            ExitStatus::MalformedInput
        } else if self.failed() > 0 {
            ExitStatus::ComputationFailed
        } else {
            ExitStatus::Success
        }
    }
}
