// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for the thread REST endpoints

#[cfg(test)]
mod api_thread_tests {
    use actix_web::{http::StatusCode, test, web, App};
    use placement_pitcher::api::routes::configure;
    use placement_pitcher::config::Settings;
    use serde_json::{json, Value};

    fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.threads.fallback_subject = "Campus placement 2025".to_string();
        settings
    }

    fn history() -> Value {
        json!({
            "email": "hr@widget.example",
            "sent_emails": [
                {
                    "id": 1,
                    "subject": "Campus placement 2025",
                    "body": "Dear HR,",
                    "sent_at": "2024-01-01T10:00:00",
                    "message_id": "<s1@college.example>"
                }
            ],
            "replies": [
                {
                    "id": 2,
                    "subject": "Re: Campus placement 2025",
                    "body": "Please share the brochure.",
                    "received_at": "2024-01-02T10:00:00",
                    "sender_email": "hr@widget.example",
                    "message_id": "<r2@widget.example>"
                }
            ]
        })
    }

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_settings()))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_reconcile_returns_thread_view() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reconcile")
            .set_json(history())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["orderedEntries"].as_array().unwrap().len(), 2);
        assert_eq!(body["orderedEntries"][0]["kind"], "sent");
        assert_eq!(body["replyAnchorMessageId"], "<r2@widget.example>");
        assert_eq!(body["hasUnrepliedInbound"], true);
        assert_eq!(body["unrepliedCount"], 1);
        assert_eq!(body["replySubject"], "Re: Campus placement 2025");
    }

    #[actix_web::test]
    async fn test_reconcile_empty_history() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reconcile")
            .set_json(json!({}))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["orderedEntries"], json!([]));
        assert_eq!(body["replyAnchorMessageId"], Value::Null);
        assert_eq!(body["hasUnrepliedInbound"], false);
        assert_eq!(body["replySubject"], "Campus placement 2025");
    }

    #[actix_web::test]
    async fn test_malformed_timestamp_is_unprocessable() {
        let app = init_app!();
        let mut payload = history();
        payload["replies"][0]["received_at"] = json!("not-a-date");

        let req = test::TestRequest::post()
            .uri("/api/threads/reconcile")
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "DATA_INTEGRITY");
        assert_eq!(body["details"]["recordId"], "2");
        assert_eq!(body["details"]["field"], "receivedAt");
        assert_eq!(body["details"]["value"], "not-a-date");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reconcile")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"sent\": [")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_reply_subject_uses_request_fallback() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reply-subject")
            .set_json(json!({ "history": {}, "fallbackSubject": "Hiring partners" }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["subject"], "Hiring partners");
    }

    #[actix_web::test]
    async fn test_reply_draft_threads_against_anchor() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reply-draft")
            .set_json(json!({ "history": history(), "body": "Attached as requested." }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["to"], "hr@widget.example");
        assert_eq!(body["subject"], "Re: Campus placement 2025");
        assert_eq!(body["inReplyTo"], "<r2@widget.example>");
        assert_eq!(body["references"], "<r2@widget.example>");
    }

    #[actix_web::test]
    async fn test_reply_draft_without_history_starts_new_thread() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reply-draft")
            .set_json(json!({
                "history": {},
                "recipient": "talent@gadget.example",
                "body": "Dear team,"
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["subject"], "Campus placement 2025");
        assert_eq!(body["inReplyTo"], Value::Null);
    }

    #[actix_web::test]
    async fn test_reply_draft_without_recipient_is_rejected() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reply-draft")
            .set_json(json!({ "history": { "sent": [] }, "body": "Hello" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["validationErrors"][0]["field"], "recipient");
    }

    #[actix_web::test]
    async fn test_reply_draft_rejects_invalid_recipient() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/threads/reply-draft")
            .set_json(json!({ "history": {}, "recipient": "not-an-email", "body": "Hello" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_reply_draft_rejects_unusable_contact_email() {
        let app = init_app!();
        let mut payload = history();
        payload["email"] = json!("hr at widget");

        let req = test::TestRequest::post()
            .uri("/api/threads/reply-draft")
            .set_json(json!({ "history": payload, "body": "Hello" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["validationErrors"][0]["field"], "recipient");
        assert_eq!(body["details"]["validationErrors"][0]["constraint"], "email");
    }

    #[actix_web::test]
    async fn test_health() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
