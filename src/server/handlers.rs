use crate::error::{Result, ResumeMatcherError};
use crate::output::formatter::{HtmlFormatter, OutputFormatter};
use crate::output::report::{MatchReport, StructuredResumeReport};
use crate::server::pages::IndexPage;
use crate::server::state::AppState;
use askama::Template;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde_json::{json, Value};

const RESUME_FIELD: &str = "resume";
const JD_FIELD: &str = "jd";

/// Resume file and job description pulled out of a multipart body
struct UploadForm {
    file_name: String,
    resume: Bytes,
    jd: String,
}

async fn read_upload(mut multipart: Multipart) -> Result<UploadForm> {
    let mut resume = None;
    let mut jd = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ResumeMatcherError::InvalidInput("Resume field has no file name".to_string()))?;
                let bytes = field.bytes().await?;
                resume = Some((file_name, bytes));
            }
            Some(JD_FIELD) => jd = field.text().await?,
            other => tracing::debug!("Ignoring multipart field {:?}", other),
        }
    }

    let (file_name, resume) =
        resume.ok_or_else(|| ResumeMatcherError::InvalidInput("No resume file uploaded".to_string()))?;
    if resume.is_empty() {
        return Err(ResumeMatcherError::InvalidInput(format!("Uploaded file '{}' is empty", file_name)));
    }

    Ok(UploadForm { file_name, resume, jd })
}

/// Extract the uploaded resume text, returning it with the form
async fn extract(state: &AppState, multipart: Multipart) -> Result<(UploadForm, String)> {
    let form = read_upload(multipart).await?;
    tracing::info!(
        "Received '{}' ({} bytes) with a {}-character job description",
        form.file_name,
        form.resume.len(),
        form.jd.chars().count()
    );

    let text = state.input.extract_upload(&form.file_name, &form.resume).await?;
    Ok((form, text))
}

async fn analyze_upload(state: &AppState, multipart: Multipart) -> Result<MatchReport> {
    let (form, resume_text) = extract(state, multipart).await?;
    Ok(state
        .engine
        .analyze(&resume_text, &form.jd)
        .with_sources(form.file_name, JD_FIELD))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let page = IndexPage::new(state.engine.vocabulary().len(), state.config.server.max_upload_bytes);
    Ok(Html(page.render()?))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-matcher"
    }))
}

/// POST /upload
pub async fn upload_page(State(state): State<AppState>, multipart: Multipart) -> Result<Html<String>> {
    let report = analyze_upload(&state, multipart).await?;
    let page = HtmlFormatter::new(true).format_report(&report)?;
    Ok(Html(page))
}

/// POST /api/upload
pub async fn api_upload(State(state): State<AppState>, multipart: Multipart) -> Result<Json<MatchReport>> {
    Ok(Json(analyze_upload(&state, multipart).await?))
}

/// POST /api/structured-resume
pub async fn api_structured_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<StructuredResumeReport>> {
    let (form, resume_text) = extract(&state, multipart).await?;
    let mut report = state.engine.structured_resume(&resume_text, &form.jd);
    report.analysis = report.analysis.with_sources(form.file_name, JD_FIELD);
    Ok(Json(report))
}
