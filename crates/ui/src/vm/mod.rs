mod quiz_vm;

pub use quiz_vm::{ChoiceVm, QuizCardVm, map_quiz_card};
