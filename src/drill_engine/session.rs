//! The drill session state machine.
//!
//! ```text
//! Selecting --start--> AwaitingAnswer --submit--> ShowingFeedback(..)
//!     ^                     ^                           |
//!     |                     +------ feedback_elapsed ---+
//!     +------------- end_session (from any practice phase)
//! ```
//!
//! The session owns the only mutable state: the table selection, the current
//! question and its options, and the pending feedback timer. Time does not
//! pass inside the session. `submit_answer` hands back a [`FeedbackTimer`]
//! and the driver calls [`DrillSession::feedback_elapsed`] once the delay has
//! run out. A timer that was cancelled by `end_session` or superseded by a
//! newer one is rejected, so a late callback cannot resurrect a stale question.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::drill_engine::{
    answer_set::generate_answer_options,
    config::DrillConfig,
    error::{ConfigError, SessionError},
    labels::practice_label,
    models::{
        AnswerOptionSet, Feedback, Question, SessionPhase, SessionSnapshot, TableSelection,
    },
    question::generate_question,
    view::SessionObserver,
};

/// Ticket for the pending feedback delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTimer {
    pub id: u64,
    pub delay_ms: u64,
}

/// What `feedback_elapsed` did once the delay ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resumed {
    /// The answer was right; a fresh question is up.
    NextQuestion,
    /// The answer was wrong; the same question is back with input unlocked.
    SameQuestion,
}

#[derive(Debug, Clone)]
struct ActiveQuestion {
    question: Question,
    options: AnswerOptionSet,
}

pub struct DrillSession<R: Rng = StdRng> {
    config: DrillConfig,
    rng: R,
    selection: TableSelection,
    phase: SessionPhase,
    active: Option<ActiveQuestion>,
    pending: Option<FeedbackTimer>,
    next_timer_id: u64,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl DrillSession<StdRng> {
    /// Build a session; `rng_seed: Some(_)` makes every draw reproducible.
    pub fn new(config: DrillConfig, rng_seed: Option<u64>) -> Result<Self, ConfigError> {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> DrillSession<R> {
    pub fn with_rng(config: DrillConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            selection: TableSelection::new(),
            phase: SessionPhase::Selecting,
            active: None,
            pending: None,
            next_timer_id: 0,
            observers: Vec::new(),
        })
    }

    /// Register a view. It receives every change from now on.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn selection(&self) -> &TableSelection {
        &self.selection
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active.as_ref().map(|a| &a.question)
    }

    pub fn answer_options(&self) -> Option<&AnswerOptionSet> {
        self.active.as_ref().map(|a| &a.options)
    }

    pub fn pending_timer(&self) -> Option<FeedbackTimer> {
        self.pending
    }

    /// Whether the start action should be enabled.
    pub fn can_start(&self) -> bool {
        self.phase == SessionPhase::Selecting && !self.selection.is_empty()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            selection: self.selection.clone(),
            question: self.current_question().copied(),
            options: self.answer_options().cloned(),
            input_locked: self.phase.input_locked(),
            practice_label: practice_label(&self.selection),
        }
    }

    // -----------------------------------------------------------------------
    // Inbound events
    // -----------------------------------------------------------------------

    /// Select `table`, or deselect it if already selected.
    /// Returns whether the table is selected afterwards.
    pub fn toggle_table(&mut self, table: u32) -> Result<bool, SessionError> {
        if self.phase != SessionPhase::Selecting {
            return self.reject("toggle_table", SessionError::NotSelecting { phase: self.phase });
        }
        if !self.config.is_available_table(table) {
            return self.reject(
                "toggle_table",
                SessionError::TableOutOfRange {
                    table,
                    min: self.config.table_min,
                    max: self.config.table_max,
                },
            );
        }

        let selected = self.selection.toggle(table);
        debug!(table, selected, "table toggled");
        let selection = self.selection.clone();
        self.notify(|o| o.on_table_selection_changed(&selection));
        Ok(selected)
    }

    /// Leave selection and put up the first question.
    pub fn start_session(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Selecting {
            return self.reject("start_session", SessionError::NotSelecting { phase: self.phase });
        }
        if self.selection.is_empty() {
            return self.reject("start_session", SessionError::EmptySelection);
        }

        info!(tables = ?self.selection.as_slice(), "practice session started");
        self.next_question();
        Ok(())
    }

    /// Judge `value` against the current question and lock input.
    ///
    /// The returned timer must be passed to [`feedback_elapsed`](Self::feedback_elapsed)
    /// after `delay_ms` to move on.
    pub fn submit_answer(&mut self, value: u32) -> Result<FeedbackTimer, SessionError> {
        let answer = match (self.phase, &self.active) {
            (SessionPhase::AwaitingAnswer, Some(active)) => active.question.answer,
            (SessionPhase::ShowingFeedback(_), _) => {
                return self.reject("submit_answer", SessionError::InputLocked);
            }
            _ => return self.reject("submit_answer", SessionError::NotPracticing),
        };

        let feedback = if value == answer { Feedback::Correct } else { Feedback::Incorrect };
        debug!(value, answer, ?feedback, "answer judged");

        let timer = FeedbackTimer { id: self.next_timer_id, delay_ms: self.config.feedback_delay_ms };
        self.next_timer_id += 1;
        self.pending = Some(timer);

        self.set_phase(SessionPhase::ShowingFeedback(feedback));
        self.notify(|o| o.on_feedback(feedback.is_correct()));
        Ok(timer)
    }

    /// The feedback delay for `timer` has run out.
    pub fn feedback_elapsed(&mut self, timer: FeedbackTimer) -> Result<Resumed, SessionError> {
        let feedback = match self.phase {
            SessionPhase::ShowingFeedback(fb) if self.pending == Some(timer) => fb,
            _ => return self.reject("feedback_elapsed", SessionError::StaleTimer),
        };
        self.pending = None;

        match feedback {
            Feedback::Correct => {
                self.next_question();
                Ok(Resumed::NextQuestion)
            }
            Feedback::Incorrect => {
                let Some(question) = self.current_question().copied() else {
                    return self.reject("feedback_elapsed", SessionError::NotPracticing);
                };
                self.set_phase(SessionPhase::AwaitingAnswer);
                self.notify(|o| o.on_question_changed(&question));
                Ok(Resumed::SameQuestion)
            }
        }
    }

    /// Drop the current question and return to table selection.
    ///
    /// The selection is kept. Any pending feedback timer is cancelled.
    pub fn end_session(&mut self) -> Result<(), SessionError> {
        if !self.phase.is_practicing() {
            return self.reject("end_session", SessionError::NotPracticing);
        }

        self.active = None;
        self.pending = None;
        info!("practice session ended");

        self.set_phase(SessionPhase::Selecting);
        let selection = self.selection.clone();
        self.notify(|o| o.on_table_selection_changed(&selection));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn next_question(&mut self) {
        let range = self.config.multiplier_range;
        let question = generate_question(&mut self.rng, &self.selection, range);
        let options = generate_answer_options(
            &mut self.rng,
            &question,
            &self.selection,
            range,
            self.config.max_display_options,
        );
        self.active = Some(ActiveQuestion { question, options: options.clone() });

        self.set_phase(SessionPhase::AwaitingAnswer);
        self.notify(|o| o.on_question_changed(&question));
        self.notify(|o| o.on_answer_options_changed(&options));
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
        self.notify(|o| o.on_phase_changed(phase));
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn SessionObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }

    fn reject<T>(&self, action: &'static str, err: SessionError) -> Result<T, SessionError> {
        debug!(action, phase = %self.phase, error = %err, "action rejected");
        Err(err)
    }
}
