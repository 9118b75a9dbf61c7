use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Choice, ChoiceId, Question, QuestionId, RoleName};
use services::{QuestionServiceError, QuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView};

/// Question source that serves a canned list and records every requested role.
#[derive(Default)]
pub struct ScriptedQuestions {
    questions: Vec<Question>,
    requested_roles: Mutex<Vec<RoleName>>,
}

impl ScriptedQuestions {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            requested_roles: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_roles(&self) -> Vec<RoleName> {
        self.requested_roles.lock().expect("roles lock").clone()
    }
}

#[async_trait]
impl QuestionSource for ScriptedQuestions {
    async fn random_questions(
        &self,
        role: &RoleName,
    ) -> Result<Vec<Question>, QuestionServiceError> {
        self.requested_roles
            .lock()
            .expect("roles lock")
            .push(role.clone());
        Ok(self.questions.clone())
    }
}

/// Question source whose fetch always fails with a server status.
pub struct FailingQuestions;

#[async_trait]
impl QuestionSource for FailingQuestions {
    async fn random_questions(
        &self,
        _role: &RoleName,
    ) -> Result<Vec<Question>, QuestionServiceError> {
        Err(QuestionServiceError::HttpStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}

pub fn sample_question(id: u64, description: &str, choices: &[(u64, &str)]) -> Question {
    Question {
        id: QuestionId::new(id),
        description: description.to_string(),
        choice: choices
            .iter()
            .map(|(choice_id, content)| Choice {
                id: ChoiceId::new(*choice_id),
                content: (*content).to_string(),
            })
            .collect(),
    }
}

pub fn sample_questions(count: u64) -> Vec<Question> {
    (1..=count)
        .map(|id| {
            sample_question(
                id,
                &format!("Sample question {id}"),
                &[(1, "Yes"), (2, "No")],
            )
        })
        .collect()
}

#[derive(Clone)]
struct TestApp {
    questions: Arc<dyn QuestionSource>,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.questions)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz { role_type: String },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz { role_type } => rsx! { QuizView { role_type } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> &QuizTestHandles {
        self.quiz_handles.as_ref().expect("quiz handles present")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, questions: Arc<dyn QuestionSource>) -> ViewHarness {
    let quiz_handles = match view {
        ViewKind::Quiz { .. } => Some(QuizTestHandles::default()),
        ViewKind::Home => None,
    };

    let app = Arc::new(TestApp { questions });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
