//! Outbound interface from the session to whatever renders it.
//!
//! A view subscribes with [`DrillSession::subscribe`](crate::DrillSession::subscribe)
//! and only ever receives copies of session state. User input goes back
//! through the session's own methods.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{
    AnswerOptionSet, Feedback, Question, SessionPhase, TableSelection,
};

/// Callbacks fired after each state change. All methods default to no-ops.
pub trait SessionObserver {
    fn on_table_selection_changed(&mut self, _selection: &TableSelection) {}
    fn on_question_changed(&mut self, _question: &Question) {}
    fn on_answer_options_changed(&mut self, _options: &AnswerOptionSet) {}
    fn on_feedback(&mut self, _correct: bool) {}
    fn on_phase_changed(&mut self, _phase: SessionPhase) {}
}

/// One observer callback captured as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    TableSelectionChanged { selection: TableSelection },
    QuestionChanged { question: Question },
    AnswerOptionsChanged { options: AnswerOptionSet },
    Feedback { feedback: Feedback },
    PhaseChanged { phase: SessionPhase },
}

/// Observer that appends every callback to a shared log.
///
/// Clones share the same log, so a test keeps one handle and subscribes the other.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Return and clear everything recorded so far.
    pub fn take(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: SessionEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SessionObserver for EventRecorder {
    fn on_table_selection_changed(&mut self, selection: &TableSelection) {
        self.push(SessionEvent::TableSelectionChanged { selection: selection.clone() });
    }

    fn on_question_changed(&mut self, question: &Question) {
        self.push(SessionEvent::QuestionChanged { question: *question });
    }

    fn on_answer_options_changed(&mut self, options: &AnswerOptionSet) {
        self.push(SessionEvent::AnswerOptionsChanged { options: options.clone() });
    }

    fn on_feedback(&mut self, correct: bool) {
        let feedback = if correct { Feedback::Correct } else { Feedback::Incorrect };
        self.push(SessionEvent::Feedback { feedback });
    }

    fn on_phase_changed(&mut self, phase: SessionPhase) {
        self.push(SessionEvent::PhaseChanged { phase });
    }
}
