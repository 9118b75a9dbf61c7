use serde::{Deserialize, Serialize};

use crate::model::ids::{ChoiceId, QuestionId};

/// One selectable answer for a question.
///
/// Field names follow the quiz endpoint's JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub content: String,
}

/// A quiz prompt together with its answer choices.
///
/// The `choice` vector keeps the backend's ordering; the screen renders the
/// buttons in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub description: String,
    pub choice: Vec<Choice>,
}
