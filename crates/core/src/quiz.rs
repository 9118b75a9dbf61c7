use crate::model::Question;

//
// ─── CURSOR CLAMPING ───────────────────────────────────────────────────────────
//

/// Clamp a cursor target into `[0, max(0, count - 1)]`.
///
/// Every cursor mutation funnels through this, so the screen can never point
/// past either end of the question list, including the empty list.
#[must_use]
pub fn clamp_cursor(target: usize, count: usize) -> usize {
    target.min(count.saturating_sub(1))
}

//
// ─── QUIZ STATE ────────────────────────────────────────────────────────────────
//

/// Walkthrough state for one quiz screen: the fetched questions plus a cursor.
///
/// Starts empty when the screen mounts and is populated once by the fetch;
/// stepping afterwards is purely local. The question list is only ever
/// replaced wholesale, never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    questions: Vec<Question>,
    cursor: usize,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched question list, keeping the cursor in bounds.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.cursor = clamp_cursor(self.cursor, self.questions.len());
    }

    /// Step forward one question; a no-op on the last question.
    pub fn next(&mut self) {
        self.cursor = clamp_cursor(self.cursor.saturating_add(1), self.questions.len());
    }

    /// Step back one question; a no-op on the first question.
    pub fn previous(&mut self) {
        self.cursor = clamp_cursor(self.cursor.saturating_sub(1), self.questions.len());
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of fetched questions.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// True while the cursor sits on the first question (or the list is empty).
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    /// True when the cursor sits on the final question of a non-empty list.
    #[must_use]
    pub fn is_on_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
