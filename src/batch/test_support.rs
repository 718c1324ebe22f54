//! Scripted confirmation and recording progress doubles.

use std::collections::VecDeque;

use super::{Confirm, ProgressEvent, ProgressSink};

/// Confirmation source that replays fixed answers.
///
/// Once the script is exhausted every further question is declined.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    /// Creates a source replaying `answers` in order.
    #[must_use]
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts asked so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_owned());
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Owned copy of a [`ProgressEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedProgress {
    /// See [`ProgressEvent::Record`].
    Record {
        /// Position within the batch.
        position: usize,
        /// Batch size.
        total: usize,
        /// Repository full name.
        repository: String,
    },
    /// See [`ProgressEvent::Elided`].
    Elided,
}

/// Progress sink that keeps every event.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Vec<RecordedProgress>,
}

impl RecordingProgress {
    /// Events reported so far.
    #[must_use]
    pub fn events(&self) -> &[RecordedProgress] {
        &self.events
    }

    /// Positions of reported records.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RecordedProgress::Record { position, .. } => Some(*position),
                RecordedProgress::Elided => None,
            })
            .collect()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&mut self, event: ProgressEvent<'_>) {
        self.events.push(match event {
            ProgressEvent::Record {
                position,
                total,
                repository,
            } => RecordedProgress::Record {
                position,
                total,
                repository: repository.to_owned(),
            },
            ProgressEvent::Elided => RecordedProgress::Elided,
        });
    }
}
