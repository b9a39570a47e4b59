//! # times_drill
//!
//! A headless multiplication-table drill engine.
//!
//! The learner picks one or more tables (10 to 40 by default), then answers
//! randomly generated questions such as `17 x 6 = ?` by choosing from a set of
//! numeric buttons. This crate holds everything with real logic in it; a
//! front end only renders what the session tells it and forwards clicks.
//!
//! ## How it works
//!
//! 1. Create a [`DrillSession`] from a [`DrillConfig`] and an optional RNG seed.
//! 2. Subscribe a view implementing [`SessionObserver`].
//! 3. Forward user input: [`DrillSession::toggle_table`],
//!    [`DrillSession::start_session`], [`DrillSession::submit_answer`],
//!    [`DrillSession::end_session`].
//! 4. `submit_answer` returns a [`FeedbackTimer`]. Wait `delay_ms`, then call
//!    [`DrillSession::feedback_elapsed`]: a correct answer brings a new
//!    question, a wrong one brings the same question back.
//!
//! ## Answer options
//!
//! Options are every distinct product of the selected tables over the
//! multiplier range, shuffled and capped at `max_display_options` (16 by
//! default). The correct answer is always present exactly once.
//!
//! ## Quick start
//!
//! ```rust
//! use times_drill::{DrillConfig, DrillSession, EventRecorder, Resumed};
//!
//! let mut session = DrillSession::new(DrillConfig::default(), Some(42)).unwrap();
//! let events = EventRecorder::new();
//! session.subscribe(events.clone());
//!
//! session.toggle_table(12).unwrap();
//! session.start_session().unwrap();
//!
//! let question = *session.current_question().unwrap();
//! println!("{question}");
//! assert!(session.answer_options().unwrap().contains(question.answer));
//!
//! let timer = session.submit_answer(question.answer).unwrap();
//! // ... wait timer.delay_ms ...
//! assert_eq!(session.feedback_elapsed(timer), Ok(Resumed::NextQuestion));
//!
//! session.end_session().unwrap();
//! assert_eq!(session.selection().as_slice(), &[12]);
//! ```

pub mod client_adapter;
pub mod drill_engine;

// Convenience re-exports so callers can use `times_drill::DrillSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_answer_options, generate_question, practice_label, shuffle, AnswerOptionSet,
    ConfigError, DrillConfig, DrillSession, EventRecorder, Feedback, FeedbackTimer,
    MultiplierRange, Question, Resumed, SessionError, SessionEvent, SessionObserver,
    SessionPhase, SessionSnapshot, TableSelection,
};
pub use client_adapter::{event_message, snapshot_message};
