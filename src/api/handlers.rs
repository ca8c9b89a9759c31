use actix_web::{web, HttpResponse, Responder};
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::config::Settings;
use crate::models::{ContactHistory, ThreadView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplySubjectRequest {
    pub history: ContactHistory,
    #[serde(default, alias = "fallback_subject")]
    pub fallback_subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplySubjectResponse {
    pub subject: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDraftRequest {
    pub history: ContactHistory,
    /// Defaults to the contact's own address when omitted.
    #[serde(default)]
    #[validate(email(message = "recipient must be a valid email address"))]
    pub recipient: Option<String>,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    #[serde(default, alias = "fallback_subject")]
    pub fallback_subject: Option<String>,
}

fn fallback_subject<'a>(requested: &'a Option<String>, settings: &'a Settings) -> &'a str {
    requested
        .as_deref()
        .unwrap_or(settings.threads.fallback_subject.as_str())
}

// Handler for reconciling one contact's history into a thread
pub async fn reconcile_thread(
    settings: web::Data<Settings>,
    payload: web::Json<ContactHistory>,
) -> Result<impl Responder, ApiError> {
    debug!("Handling POST /api/threads/reconcile");

    let history = payload.into_inner();
    let state = history.reconcile()?;
    let view = ThreadView::new(state, &settings.threads.fallback_subject);

    Ok(HttpResponse::Ok().json(view))
}

// Handler for the subject of the next message in a thread
pub async fn reply_subject(
    settings: web::Data<Settings>,
    payload: web::Json<ReplySubjectRequest>,
) -> Result<impl Responder, ApiError> {
    debug!("Handling POST /api/threads/reply-subject");

    let request = payload.into_inner();
    let state = request.history.reconcile()?;
    let subject = state.reply_subject(fallback_subject(&request.fallback_subject, &settings));

    Ok(HttpResponse::Ok().json(ReplySubjectResponse { subject }))
}

// Handler for composing the next outbound message with threading headers
pub async fn reply_draft(
    settings: web::Data<Settings>,
    payload: web::Json<ReplyDraftRequest>,
) -> Result<impl Responder, ApiError> {
    debug!("Handling POST /api/threads/reply-draft");

    let request = payload.into_inner();
    request.validate()?;

    let recipient = match &request.recipient {
        Some(recipient) => recipient.clone(),
        None => request
            .history
            .contact_email()
            .ok_or_else(|| ApiError::missing_field("recipient"))?
            .to_string(),
    };

    let state = request.history.reconcile()?;
    let draft = state.draft_reply(
        recipient,
        request.body.as_str(),
        fallback_subject(&request.fallback_subject, &settings),
    );
    // The contact's stored address skips request validation
    draft.recipient_mailbox()?;
    debug!("Reply draft threaded: {}", draft.headers.is_threaded());

    Ok(HttpResponse::Ok().json(draft))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
