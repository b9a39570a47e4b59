//! Core drill engine: question generation, answer sets and the session state machine.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: table selection, questions, option sets, phases |
//! | `shuffle`    | Fisher-Yates shuffle over an injected RNG |
//! | `question`   | Random factor pair from the selected tables |
//! | `answer_set` | Deduplicated, shuffled, size-bounded multiple-choice options |
//! | `session`    | `DrillSession`: selection → question → feedback → next question |
//! | `view`       | `SessionObserver` trait and event recording for renderers |
//! | `labels`     | Header text for the practice screen |
//! | `config`     | `DrillConfig` with TOML loading and validation |
//! | `error`      | `SessionError` rejections and `ConfigError` |

pub mod answer_set;
pub mod config;
pub mod error;
pub mod labels;
pub mod models;
pub mod question;
pub mod session;
pub mod shuffle;
pub mod view;

pub use answer_set::{all_products, generate_answer_options};
pub use config::DrillConfig;
pub use error::{ConfigError, SessionError};
pub use labels::practice_label;
pub use models::{
    AnswerOptionSet, Feedback, MultiplierRange, Question, SessionPhase, SessionSnapshot,
    TableSelection,
};
pub use question::generate_question;
pub use session::{DrillSession, FeedbackTimer, Resumed};
pub use shuffle::shuffle;
pub use view::{EventRecorder, SessionEvent, SessionObserver};
