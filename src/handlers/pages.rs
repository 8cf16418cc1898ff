//! 页面处理器
//!
//! 单页式交互流程：选择器 → 生成 → 逐题作答 → 成绩回顾，
//! 或编程题链接列表。每个处理器先定位会话再渲染。

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::{Deserialize, Serialize};
use tera::Context;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

use crate::handlers::{AppState, UserSession, TEMPLATES};
use crate::models::category::{Category, ALL_CATEGORIES};
use crate::models::company::ALL_COMPANIES;
use crate::models::experience::ALL_EXPERIENCE;
use crate::models::question::{CodingProblem, EnvelopeStatus, QuestionSource};
use crate::quiz::QuizState;
use crate::services::{difficulty_from_text, extract_concepts, resolve_problem_link};
use crate::workflow::GenerationRequest;

const SESSION_COOKIE: &str = "session_id";

/// 生成请求表单
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub company: String,
    pub experience: String,
    pub category: String,
    pub num_questions: Option<usize>,
}

/// 答题表单
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub selected: String,
}

#[derive(Serialize)]
struct CompanyView {
    name: &'static str,
    tip: &'static str,
}

#[derive(Serialize)]
struct ExperienceView {
    name: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct CategoryView {
    name: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct AnswerView {
    question: String,
    selected: String,
    correct: String,
    result: bool,
}

#[derive(Serialize)]
struct ProblemView {
    index: usize,
    title: String,
    url: String,
    description: Option<String>,
    concepts: Vec<&'static str>,
    difficulty: &'static str,
    difficulty_class: &'static str,
    similar_url: String,
}

/// 从 cookie 取会话 ID，没有则新建并写回
fn session_id(cookies: &Cookies) -> Uuid {
    if let Some(id) = cookies
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        return id;
    }

    let id = Uuid::new_v4();
    tracing::info!("创建新会话: {}", id);
    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);
    id
}

fn render(template: &str, context: &Context) -> Html<String> {
    match TEMPLATES.render(template, context) {
        Ok(t) => Html(t),
        Err(e) => {
            tracing::error!("模板渲染失败 ({}): {:?}", template, e);
            Html(format!("Error: {}", e))
        }
    }
}

fn selector_context() -> Context {
    let mut context = Context::new();
    context.insert(
        "companies",
        &ALL_COMPANIES
            .iter()
            .map(|c| CompanyView {
                name: c.name(),
                tip: c.tip(),
            })
            .collect::<Vec<_>>(),
    );
    context.insert(
        "experiences",
        &ALL_EXPERIENCE
            .iter()
            .map(|e| ExperienceView {
                name: e.name(),
                label: e.label(),
            })
            .collect::<Vec<_>>(),
    );
    context.insert(
        "categories",
        &ALL_CATEGORIES
            .iter()
            .map(|c| CategoryView {
                name: c.name(),
                label: c.label(),
            })
            .collect::<Vec<_>>(),
    );
    context
}

/// 首页：选择器 + 备考建议
pub async fn index(cookies: Cookies, State(state): State<AppState>) -> Html<String> {
    let id = session_id(&cookies);
    let sessions = state.sessions.read().await;

    let mut context = selector_context();
    if let Some(session) = sessions.get(&id) {
        context.insert("selected_company", session.company.name());
        context.insert("selected_experience", session.experience.name());
        context.insert("selected_category", session.quiz.category().name());
    }
    context.insert("default_num_questions", &state.config.default_num_questions);

    render("index.html", &context)
}

/// 生成题目
pub async fn generate(
    cookies: Cookies,
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> impl IntoResponse {
    let id = session_id(&cookies);

    let request = match GenerationRequest::parse(
        &form.company,
        &form.experience,
        &form.category,
        form.num_questions,
        state.config.default_num_questions,
    ) {
        Ok(request) => request,
        Err(e) => {
            // 校验错误立即上报，不生成任何内容
            tracing::warn!("生成请求校验失败: {}", e);
            let mut context = selector_context();
            context.insert("error_message", &e.to_string());
            context.insert("default_num_questions", &state.config.default_num_questions);
            return render("index.html", &context).into_response();
        }
    };

    let envelope = state.flow.generate_questions(&request).await;

    let mut sessions = state.sessions.write().await;
    let session = sessions.entry(id).or_insert_with(UserSession::new);
    session.company = request.company;
    session.experience = request.experience;
    // 切换类别会强制把状态机重置到 NotGenerated
    session.quiz.switch_category(request.category);
    session.quiz.load_envelope(envelope);

    match request.category {
        Category::Vqar => Redirect::to("/quiz").into_response(),
        Category::Coding => Redirect::to("/problems").into_response(),
    }
}

/// 测验页：当前题目或成绩回顾
pub async fn quiz(cookies: Cookies, State(state): State<AppState>) -> impl IntoResponse {
    let id = session_id(&cookies);
    let sessions = state.sessions.read().await;

    let Some(session) = sessions.get(&id) else {
        return Redirect::to("/").into_response();
    };

    if session.quiz.category() != Category::Vqar || !session.quiz.is_generated() {
        return Redirect::to("/").into_response();
    }

    match session.quiz.state() {
        QuizState::InProgress => render_question(session).into_response(),
        QuizState::Done => render_results(session).into_response(),
        QuizState::NotGenerated => Redirect::to("/").into_response(),
    }
}

fn render_question(session: &UserSession) -> Html<String> {
    let quiz = &session.quiz;
    let Some(question) = quiz.current_question() else {
        return Html("Error: no current question".to_string());
    };

    let current = quiz.current_index() + 1;
    let total = quiz.total_questions();
    let elapsed = quiz.elapsed_seconds();

    let mut context = Context::new();
    context.insert("company", session.company.name());
    context.insert("question", &question.question);
    context.insert("options", &question.options);
    context.insert("current", &current);
    context.insert("total", &total);
    context.insert("progress_percent", &(current * 100 / total.max(1)));
    context.insert("answered", &quiz.answers().len());
    context.insert("remaining", &(total - quiz.answers().len()));
    context.insert("elapsed_min", &(elapsed / 60));
    context.insert("elapsed_sec", &format!("{:02}", elapsed % 60));

    if let Some(envelope) = quiz.envelope() {
        context.insert("from_fallback", &(envelope.source == QuestionSource::Fallback));
        context.insert("status_message", &envelope.message);
    }

    render("quiz.html", &context)
}

fn render_results(session: &UserSession) -> Html<String> {
    let quiz = &session.quiz;
    let elapsed = quiz.elapsed_seconds();

    let answers: Vec<AnswerView> = quiz
        .answers()
        .iter()
        .map(|a| AnswerView {
            question: a.question.clone(),
            selected: a.selected.clone(),
            correct: a.correct.clone(),
            result: a.result,
        })
        .collect();

    let mut context = Context::new();
    context.insert("company", session.company.name());
    context.insert("score", &quiz.score());
    context.insert("total", &quiz.total_questions());
    context.insert("percentage", &quiz.score_percentage());
    context.insert("verdict", quiz.performance_verdict());
    context.insert("time_min", &(elapsed / 60));
    context.insert("time_sec", &(elapsed % 60));
    context.insert("answers", &answers);

    render("results.html", &context)
}

/// 提交答案
pub async fn answer(
    cookies: Cookies,
    State(state): State<AppState>,
    Form(form): Form<AnswerForm>,
) -> Redirect {
    let id = session_id(&cookies);
    let mut sessions = state.sessions.write().await;

    if let Some(session) = sessions.get_mut(&id) {
        if session.quiz.submit_answer(&form.selected).is_none() {
            tracing::warn!("非答题状态下收到答案提交，忽略");
        }
    }

    Redirect::to("/quiz")
}

/// 编程题列表页
pub async fn problems(cookies: Cookies, State(state): State<AppState>) -> impl IntoResponse {
    let id = session_id(&cookies);
    let sessions = state.sessions.read().await;

    let Some(session) = sessions.get(&id) else {
        return Redirect::to("/").into_response();
    };

    let Some(envelope) = session.quiz.envelope() else {
        return Redirect::to("/").into_response();
    };

    let Some(problems) = envelope.questions.as_coding() else {
        return Redirect::to("/").into_response();
    };

    let views: Vec<ProblemView> = problems
        .iter()
        .enumerate()
        .map(|(i, p)| problem_view(i + 1, p))
        .collect();

    let mut context = Context::new();
    context.insert("company", session.company.name());
    context.insert("problems", &views);
    context.insert("is_error", &(envelope.status == EnvelopeStatus::Error));
    context.insert("from_fallback", &(envelope.source == QuestionSource::Fallback));
    context.insert("status_message", &envelope.message);

    render("problems.html", &context).into_response()
}

fn problem_view(index: usize, problem: &CodingProblem) -> ProblemView {
    // 概念标签与难度从标题+描述推断，"练习相似题"链接走关键词表
    let text = match &problem.description {
        Some(desc) => format!("{} {}", problem.title, desc),
        None => problem.title.clone(),
    };

    let difficulty = difficulty_from_text(&text);

    ProblemView {
        index,
        title: problem.title.clone(),
        url: problem.url.clone(),
        description: problem.description.clone(),
        concepts: extract_concepts(&text),
        difficulty: difficulty.as_str(),
        difficulty_class: difficulty.css_class(),
        similar_url: resolve_problem_link(&problem.title),
    }
}

/// 重置会话进度
pub async fn reset(cookies: Cookies, State(state): State<AppState>) -> Redirect {
    let id = session_id(&cookies);
    let mut sessions = state.sessions.write().await;

    if let Some(session) = sessions.get_mut(&id) {
        tracing::info!("重置会话: {}", id);
        session.quiz.reset();
    }

    Redirect::to("/")
}

/// 404 页面
pub async fn fallback() -> Html<String> {
    render("404.html", &Context::new())
}
