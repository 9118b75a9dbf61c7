use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info};

use quiz_core::QuizState;
use quiz_core::model::RoleName;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizCardVm, map_quiz_card};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Footer actions. The answer buttons intentionally dispatch nothing: the
/// walkthrough does not capture a selection yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QuizIntent {
    Previous,
    Next,
}

#[component]
pub fn QuizView(role_type: String) -> Element {
    let ctx = use_context::<AppContext>();

    // The role is resolved from the query before anything is fetched; a link
    // without one renders the error panel and never touches the backend.
    let role = RoleName::parse(role_type.as_str()).ok();
    let quiz = use_signal(QuizState::new);

    // One fetch per mount. Dropping the view drops this future with it, so a
    // slow response can never land in a torn-down screen.
    let questions_for_fetch = ctx.questions();
    let role_for_fetch = role.clone();
    let _fetch = use_resource(move || {
        let questions = Arc::clone(&questions_for_fetch);
        let role = role_for_fetch.clone();
        let mut quiz = quiz;
        async move {
            let Some(role) = role else { return };
            info!(role = %role, "quiz role resolved");
            match questions.random_questions(&role).await {
                Ok(items) => quiz.write().replace_questions(items),
                Err(err) => {
                    error!(error = %err, "question fetch failed; leaving the question list empty");
                }
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut quiz = quiz;
        match intent {
            QuizIntent::Previous => quiz.write().previous(),
            QuizIntent::Next => quiz.write().next(),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, quiz);
            }
        }
    }

    if role.is_none() {
        let err = ViewError::MissingRole;
        return rsx! {
            div { class: "page quiz-page",
                p { class: "quiz-error", "{err.message()}" }
            }
        };
    }

    let QuizCardVm {
        header,
        description,
        choices,
        next_label,
        previous_class,
    } = map_quiz_card(&quiz.read());

    rsx! {
        div { class: "page quiz-page",
            div { class: "quiz-card",
                header { class: "quiz-card__header",
                    h4 { strong { "{header}" } }
                }
                div { class: "quiz-card__body",
                    p { class: "quiz-card__title",
                        strong { "Question: " }
                        if let Some(description) = description.as_ref() {
                            "{description}"
                        }
                    }
                    p { "Please choose one of the following answers:" }
                    div { class: "quiz-answers",
                        for choice in choices {
                            AnswerButton {
                                key: "{choice.id}",
                                id: choice.id.clone(),
                                content: choice.content,
                            }
                        }
                    }
                }
                footer { class: "quiz-card__footer",
                    button {
                        class: "btn btn-secondary {previous_class}",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Previous),
                        "Previous question"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                        "{next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerButton(id: String, content: String) -> Element {
    rsx! {
        button { class: "btn btn-danger quiz-answer-btn", r#type: "button",
            span { class: "answer answer-id", "{id}" }
            span { class: "answer answer-content", "{content}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizState>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, quiz: Signal<QuizState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizState> {
        (*self.quiz.borrow()).expect("quiz state registered")
    }
}
