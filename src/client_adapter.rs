use serde_json::{json, Value};
use crate::drill_engine::{
    models::{AnswerOptionSet, Question, SessionPhase, SessionSnapshot},
    view::SessionEvent,
};

/// Phase name expected by the web client.
fn phase_str(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Selecting          => "selecting",
        SessionPhase::AwaitingAnswer     => "awaiting_answer",
        SessionPhase::ShowingFeedback(_) => "showing_feedback",
    }
}

/// Question block: factors plus the prompt text. The answer is left out so
/// the client cannot read it ahead of time.
fn question_json(q: &Question) -> Value {
    json!({
        "factor1": q.factor1,
        "factor2": q.factor2,
        "prompt":  q.to_string()
    })
}

/// Answer buttons in display order.
fn buttons_json(options: &AnswerOptionSet, disabled: bool) -> Value {
    let buttons: Vec<Value> = options
        .iter()
        .enumerate()
        .map(|(id, value)| json!({ "id": id, "value": value, "disabled": disabled }))
        .collect();
    Value::Array(buttons)
}

/// Map a session event to a client message tagged with `"type"`.
pub fn event_message(event: &SessionEvent) -> Value {
    match event {
        SessionEvent::TableSelectionChanged { selection } => json!({
            "type":      "selection",
            "tables":    selection.as_slice(),
            "can_start": !selection.is_empty()
        }),
        SessionEvent::QuestionChanged { question } => json!({
            "type":     "question",
            "question": question_json(question)
        }),
        SessionEvent::AnswerOptionsChanged { options } => json!({
            "type":    "options",
            "buttons": buttons_json(options, false)
        }),
        SessionEvent::Feedback { feedback } => json!({
            "type":    "feedback",
            "correct": feedback.is_correct(),
            "text":    feedback.to_string()
        }),
        SessionEvent::PhaseChanged { phase } => {
            let feedback = match phase {
                SessionPhase::ShowingFeedback(fb) => Value::Bool(fb.is_correct()),
                _ => Value::Null,
            };
            json!({
                "type":         "phase",
                "phase":        phase_str(*phase),
                "input_locked": phase.input_locked(),
                "correct":      feedback
            })
        }
    }
}

/// Full-screen state for a client that (re)connects mid-session.
pub fn snapshot_message(snapshot: &SessionSnapshot) -> Value {
    let question = snapshot.question.as_ref().map(question_json).unwrap_or(Value::Null);
    let buttons = snapshot
        .options
        .as_ref()
        .map(|o| buttons_json(o, snapshot.input_locked))
        .unwrap_or_else(|| Value::Array(Vec::new()));

    json!({
        "type":   "snapshot",
        "screen": if snapshot.phase.is_practicing() { "practice" } else { "selection" },
        "phase":  phase_str(snapshot.phase),
        "header": snapshot.practice_label,
        "tables": snapshot.selection.as_slice(),
        "question": question,
        "buttons":  buttons
    })
}
