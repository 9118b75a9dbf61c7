use quiz_core::QuizState;

/// One answer button: the choice id as its badge plus the answer text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub id: String,
    pub content: String,
}

/// Everything the quiz card renders, precomputed as plain strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    /// `Question {cursor + 1} of {count}`; shows `Question 1 of 0` while the
    /// list is empty so the screen stays honest about a failed fetch.
    pub header: String,
    pub description: Option<String>,
    pub choices: Vec<ChoiceVm>,
    pub next_label: &'static str,
    /// Extra class for the Previous button; the button itself stays clickable.
    pub previous_class: &'static str,
}

#[must_use]
pub fn map_quiz_card(state: &QuizState) -> QuizCardVm {
    let current = state.current_question();
    QuizCardVm {
        header: format!(
            "Question {} of {}",
            state.cursor() + 1,
            state.question_count()
        ),
        description: current.map(|question| question.description.clone()),
        choices: current.map_or_else(Vec::new, |question| {
            question
                .choice
                .iter()
                .map(|choice| ChoiceVm {
                    id: choice.id.to_string(),
                    content: choice.content.clone(),
                })
                .collect()
        }),
        next_label: if state.is_on_last() {
            "See result"
        } else {
            "Next question"
        },
        previous_class: if state.is_first() { "previous-btn" } else { "" },
    }
}
