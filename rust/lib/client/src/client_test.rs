//! Client tests against a real HTTP server.
//!
//! Starts an in-process axum server that records every request it sees,
//! then drives `ApiClient` and the domain APIs through it.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{HeaderMap, Method, StatusCode, Uri};
    use axum::response::{IntoResponse, Response};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use medadmin_session::{MemoryStore, SessionError, SessionStore};

    use crate::api::{NewDispensing, NewTransfer};
    use crate::{
        ApiClient, ApiError, AuthUser, Credentials, FormData, FormMethod, ListQuery,
        ReportStatus, RequestOptions, Session, UserType,
    };

    // =====================================================================
    // Recording test server
    // =====================================================================

    #[derive(Debug, Clone)]
    struct Captured {
        method: String,
        path: String,
        query: Option<String>,
        authorization: Option<String>,
        content_type: Option<String>,
        body: String,
    }

    type Log = Arc<Mutex<Vec<Captured>>>;

    fn reply(status: StatusCode, body: Value) -> Response {
        (status, Json(body)).into_response()
    }

    async fn handler(
        State(log): State<Log>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        log.lock().unwrap().push(Captured {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: header("authorization"),
            content_type: header("content-type"),
            body: String::from_utf8_lossy(&body).to_string(),
        });
        let input: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

        match (method.as_str(), uri.path()) {
            ("GET", "/reports") => reply(
                StatusCode::OK,
                json!({
                    "data": [
                        {"id": 1, "title": "عطل في جهاز التعقيم", "status": "مفتوح"},
                        {"id": 2, "title": "Chair pump", "status": "مغلق"},
                    ],
                    "current_page": 1,
                    "last_page": 4,
                    "per_page": 2,
                    "total": 8,
                }),
            ),
            ("POST", "/reports") => reply(
                StatusCode::CREATED,
                json!({"success": true, "data": {"id": 2, "title": "new"}}),
            ),
            ("POST", "/reports/2") => {
                reply(StatusCode::OK, json!({"data": {"id": 2, "title": "updated"}}))
            }
            ("PATCH", "/reports/2/status") => reply(
                StatusCode::OK,
                json!({"data": {"id": 2, "status": input["status"].clone()}}),
            ),
            ("DELETE", "/reports/9") => StatusCode::NO_CONTENT.into_response(),
            ("GET", "/expired") => {
                reply(StatusCode::UNAUTHORIZED, json!({"message": "Unauthenticated."}))
            }
            ("GET", "/invalid") => reply(
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "message": "The given data was invalid.",
                    "errors": {"name": ["الاسم مطلوب"]},
                }),
            ),
            ("GET", "/boom") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
            ("POST", "/admin/login") => {
                if input["password"] == "pw" {
                    reply(
                        StatusCode::OK,
                        json!({"token": "admin-tok", "user": {"id": 1, "name": "مدير"}}),
                    )
                } else {
                    reply(StatusCode::UNAUTHORIZED, json!({"message": "invalid credentials"}))
                }
            }
            ("GET", "/admin/me") => reply(
                StatusCode::OK,
                json!({"data": {"user": {"id": 1, "name": "مدير محدث"}}}),
            ),
            ("POST", "/staff/logout") => {
                reply(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "down"}))
            }
            ("GET", "/admin/staff") => reply(StatusCode::OK, json!([])),
            ("GET", "/transactions/5/transfers") => reply(
                StatusCode::OK,
                json!({"data": [{
                    "id": 1,
                    "from_department": "الوارد",
                    "to_department": "الشؤون الفنية",
                    "created_at": "2024-02-01T08:00:00Z",
                }]}),
            ),
            ("POST", "/transactions/5/transfers") => reply(
                StatusCode::CREATED,
                json!({"data": {"id": 2, "to_department": input["to_department"].clone()}}),
            ),
            ("GET", "/warehouse/inventory") => reply(
                StatusCode::OK,
                json!({"data": [
                    {"id": 1, "name": "قفازات", "quantity": 4, "min_quantity": 10},
                    {"id": 2, "name": "كمامات", "quantity": "50", "min_quantity": 10},
                ]}),
            ),
            ("POST", "/warehouse/dispensing") => reply(
                StatusCode::CREATED,
                json!({"data": {
                    "id": 11,
                    "item_id": input["item_id"].clone(),
                    "quantity": input["quantity"].clone(),
                }}),
            ),
            ("GET", "/facilities") => {
                let page: u64 = uri
                    .query()
                    .and_then(|q| q.strip_prefix("page="))
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(1);
                let first = (page - 1) * 2 + 1;
                reply(
                    StatusCode::OK,
                    json!({
                        "data": [
                            {"id": first, "name": format!("منشأة {}", first)},
                            {"id": first + 1, "name": format!("منشأة {}", first + 1)},
                        ],
                        "current_page": page.to_string(),
                        "last_page": 3,
                        "per_page": 2,
                        "total": 6,
                    }),
                )
            }
            ("GET", "/dental/assets") => reply(
                StatusCode::OK,
                json!({"data": [
                    {"id": 1, "name": "كرسي أسنان", "warranty_end": "2024-03-20"},
                    {"id": 2, "name": "جهاز أشعة", "warranty_end": "2024-02-01"},
                    {"id": 3, "name": "جهاز تعقيم", "warranty_end": "2024-03-05"},
                    {"id": 4, "name": "ضاغط هواء"},
                    {"id": 5, "name": "وحدة شفط", "warranty_end": "2025-01-01"},
                ]}),
            ),
            _ => reply(StatusCode::NOT_FOUND, json!({"message": "not found"})),
        }
    }

    struct TestServer {
        base_url: String,
        log: Log,
    }

    impl TestServer {
        fn requests(&self) -> Vec<Captured> {
            self.log.lock().unwrap().clone()
        }

        fn last(&self) -> Captured {
            self.requests().pop().expect("no request recorded")
        }
    }

    async fn start_test_server() -> TestServer {
        let log: Log = Arc::default();
        let app = Router::new().fallback(handler).with_state(log.clone());

        // Bind to random port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url: format!("http://{}", addr),
            log,
        }
    }

    fn session_with(entries: &[(&str, &str)]) -> Session {
        let session = Session::in_memory();
        for (k, v) in entries {
            session.store().set(k, v).unwrap();
        }
        session
    }

    fn stored(session: &Session, key: &str) -> Option<String> {
        session.store().get(key).unwrap()
    }

    // =====================================================================
    // Authorization header
    // =====================================================================

    #[tokio::test]
    async fn missing_staff_token_omits_authorization() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, Session::in_memory());

        let _: Value = client
            .call("/reports", RequestOptions::get(), true, Some(UserType::Staff))
            .await
            .unwrap();

        let req = server.last();
        assert_eq!(req.path, "/reports");
        assert_eq!(req.authorization, None);
    }

    #[tokio::test]
    async fn empty_stored_token_omits_authorization() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "")]));

        let _: Value = client
            .call("/reports", RequestOptions::get(), true, Some(UserType::Staff))
            .await
            .unwrap();
        assert_eq!(server.last().authorization, None);
    }

    #[tokio::test]
    async fn bearer_attached_when_token_present() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let _: Value = client
            .call("/reports", RequestOptions::get(), true, Some(UserType::Staff))
            .await
            .unwrap();

        let req = server.last();
        assert_eq!(req.authorization.as_deref(), Some("Bearer s-tok"));
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn no_auth_when_not_required() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("admin_token", "a-tok")]));

        let _: Value = client
            .call("/reports", RequestOptions::get(), false, Some(UserType::Admin))
            .await
            .unwrap();
        assert_eq!(server.last().authorization, None);
    }

    #[tokio::test]
    async fn auto_detect_prefers_admin_token() {
        let server = start_test_server().await;
        let client = ApiClient::new(
            &server.base_url,
            session_with(&[("admin_token", "a-tok"), ("staff_token", "s-tok")]),
        );

        let _: Value = client
            .call("/reports", RequestOptions::get(), true, None)
            .await
            .unwrap();
        assert_eq!(server.last().authorization.as_deref(), Some("Bearer a-tok"));
    }

    #[tokio::test]
    async fn staff_api_pins_admin_token() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let staff = client.staff().all().await.unwrap();
        assert!(staff.is_empty());

        let req = server.last();
        assert_eq!(req.path, "/admin/staff");
        assert_eq!(req.authorization, None);
    }

    // =====================================================================
    // Error mapping and session clearing
    // =====================================================================

    #[tokio::test]
    async fn unauthorized_clears_only_that_session() {
        let server = start_test_server().await;
        let session = session_with(&[
            ("staff_token", "s-tok"),
            ("staff_user", r#"{"id":4}"#),
            ("admin_token", "a-tok"),
            ("admin_user", r#"{"id":1}"#),
        ]);
        let client = ApiClient::new(&server.base_url, session.clone());

        let err = client
            .call::<Value>("/expired", RequestOptions::get(), true, Some(UserType::Staff))
            .await
            .unwrap_err();

        match &err {
            ApiError::Unauthorized { message } => assert_eq!(message, "Unauthenticated."),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
        assert_eq!(err.status(), 401);
        assert_eq!(stored(&session, "staff_token"), None);
        assert_eq!(stored(&session, "staff_user"), None);
        assert_eq!(stored(&session, "admin_token").as_deref(), Some("a-tok"));
        assert_eq!(stored(&session, "admin_user").as_deref(), Some(r#"{"id":1}"#));
    }

    #[tokio::test]
    async fn unauthorized_clears_auto_detected_session() {
        let server = start_test_server().await;
        let session = session_with(&[("admin_token", "a-tok"), ("admin_user", "{}")]);
        let client = ApiClient::new(&server.base_url, session.clone());

        let err = client
            .call::<Value>("/expired", RequestOptions::get(), true, None)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(stored(&session, "admin_token"), None);
        assert_eq!(stored(&session, "admin_user"), None);
    }

    #[tokio::test]
    async fn validation_error_keeps_session() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok"), ("staff_user", "{}")]);
        let client = ApiClient::new(&server.base_url, session.clone());

        let err = client
            .call::<Value>("/invalid", RequestOptions::get(), true, Some(UserType::Staff))
            .await
            .unwrap_err();

        assert_eq!(err.status(), 422);
        assert_eq!(err.field_errors()["name"], vec!["الاسم مطلوب".to_string()]);
        assert!(err.to_string().contains("The given data was invalid."));
        assert_eq!(stored(&session, "staff_token").as_deref(), Some("s-tok"));
        assert_eq!(stored(&session, "staff_user").as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn non_json_error_uses_status_reason() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, session.clone());

        let err = client
            .call::<Value>("/boom", RequestOptions::get(), true, None)
            .await
            .unwrap_err();

        match err {
            ApiError::Server { status, message, errors } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
                assert!(errors.is_empty());
            }
            other => panic!("expected Server, got {:?}", other),
        }
        assert_eq!(stored(&session, "staff_token").as_deref(), Some("s-tok"));
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // Grab a free port, then close it again.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(format!("http://{}", addr), session.clone());

        let err = client
            .call::<Value>("/reports", RequestOptions::get(), true, None)
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.status(), 0);
        assert_eq!(stored(&session, "staff_token").as_deref(), Some("s-tok"));
    }

    #[tokio::test]
    async fn empty_body_decodes_as_null() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s")]));

        let value: Value = client
            .call("/reports/9", RequestOptions::delete(), true, None)
            .await
            .unwrap();
        assert_eq!(value, Value::Null);

        client.reports().delete(9).await.unwrap();
        assert_eq!(server.last().method, "DELETE");
    }

    // =====================================================================
    // Multipart
    // =====================================================================

    #[tokio::test]
    async fn multipart_put_is_post_with_method_field() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let form = FormData::new()
            .text("title", "تحديث")
            .file("attachment", "photo.jpg", vec![0xFF, 0xD8, 0xFF]);
        let _: Value = client
            .call_with_files("/reports/2", form, FormMethod::Put, true, None)
            .await
            .unwrap();

        let req = server.last();
        assert_eq!(req.method, "POST");
        assert_eq!(req.authorization.as_deref(), Some("Bearer s-tok"));
        let content_type = req.content_type.unwrap();
        assert!(
            content_type.starts_with("multipart/form-data; boundary="),
            "unexpected content type: {}",
            content_type
        );
        assert!(req.body.contains(r#"name="_method""#));
        assert!(req.body.contains("PUT"));
        assert!(req.body.contains(r#"filename="photo.jpg""#));
        assert!(req.body.contains("تحديث"));
    }

    #[tokio::test]
    async fn multipart_post_has_no_method_field() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let form = FormData::from_json(&json!({"title": "جديد", "priority": "عالي"}));
        let report = client.reports().create(form).await.unwrap();
        assert_eq!(report.id, 2);

        let req = server.last();
        assert_eq!(req.path, "/reports");
        assert!(req.content_type.unwrap().starts_with("multipart/form-data"));
        assert!(!req.body.contains("_method"));
    }

    // =====================================================================
    // Domain APIs
    // =====================================================================

    #[tokio::test]
    async fn reports_list_and_status() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let page = client
            .reports()
            .list(&ListQuery::new().page(1).status("مفتوح"))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 8);
        assert!(page.has_more());
        assert_eq!(page.data[0].status().unwrap().unwrap(), ReportStatus::Open);
        let query = server.last().query.unwrap();
        assert!(query.contains("page=1"));
        assert!(query.contains("status="));

        let updated = client
            .reports()
            .update_status(2, ReportStatus::Scrapped, Some("تالف"))
            .await
            .unwrap();
        assert_eq!(updated.status.as_deref(), Some("مكهن"));

        let req = server.last();
        assert_eq!(req.method, "PATCH");
        let sent: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent["status"], "مكهن");
        assert_eq!(sent["notes"], "تالف");
    }

    #[tokio::test]
    async fn transaction_transfers() {
        let server = start_test_server().await;
        let client = ApiClient::new(&server.base_url, session_with(&[("staff_token", "s-tok")]));

        let log = client.transactions().transfers(5).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].to_department.as_deref(), Some("الشؤون الفنية"));
        assert_eq!(log[0].transferred_at.as_deref(), Some("2024-02-01T08:00:00Z"));

        let entry = client
            .transactions()
            .add_transfer(
                5,
                &NewTransfer {
                    to_department: "المستودع".into(),
                    notes: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(entry.id, Some(2));
        let sent: Value = serde_json::from_str(&server.last().body).unwrap();
        assert_eq!(sent, json!({"to_department": "المستودع"}));
    }

    // =====================================================================
    // Auth
    // =====================================================================

    #[tokio::test]
    async fn login_stores_session() {
        let server = start_test_server().await;
        let session = Session::in_memory();
        let client = ApiClient::new(&server.base_url, session.clone());

        let login = client
            .auth()
            .login(
                UserType::Admin,
                &Credentials {
                    email: "admin@clinic.sa".into(),
                    password: "pw".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(login.token, "admin-tok");
        assert_eq!(server.last().authorization, None);

        assert_eq!(stored(&session, "admin_token").as_deref(), Some("admin-tok"));
        let user: AuthUser = session.user(UserType::Admin).unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("مدير"));
        assert_eq!(session.current_user_type().unwrap(), UserType::Admin);

        let me = client.auth().me(UserType::Admin).await.unwrap();
        assert_eq!(me.name.as_deref(), Some("مدير محدث"));
        assert_eq!(server.last().authorization.as_deref(), Some("Bearer admin-tok"));
        let cached = client.auth().cached_user(UserType::Admin).unwrap().unwrap();
        assert_eq!(cached.name.as_deref(), Some("مدير محدث"));
    }

    #[tokio::test]
    async fn failed_login_is_unauthorized() {
        let server = start_test_server().await;
        let session = session_with(&[("admin_token", "old-tok"), ("admin_user", "{}")]);
        let client = ApiClient::new(&server.base_url, session.clone());

        let err = client
            .auth()
            .login(
                UserType::Admin,
                &Credentials {
                    email: "admin@clinic.sa".into(),
                    password: "wrong".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(server.last().authorization.is_none());
        assert!(!session.is_authenticated(UserType::Admin).unwrap());
        assert_eq!(stored(&session, "admin_token"), None);
        assert_eq!(stored(&session, "admin_user"), None);
    }

    #[tokio::test]
    async fn logout_clears_even_when_server_fails() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok"), ("staff_user", "{}")]);
        let client = ApiClient::new(&server.base_url, session.clone());

        client.auth().logout(UserType::Staff).await.unwrap();

        let req = server.last();
        assert_eq!(req.path, "/staff/logout");
        assert_eq!(req.authorization.as_deref(), Some("Bearer s-tok"));
        assert_eq!(req.body, "{}");
        assert_eq!(stored(&session, "staff_token"), None);
        assert_eq!(stored(&session, "staff_user"), None);
    }

    // =====================================================================
    // Warehouse and assets
    // =====================================================================

    #[tokio::test]
    async fn low_stock_and_dispense() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, session);

        let low = client.warehouse().low_stock().await.unwrap();
        assert_eq!(low.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);

        let dispensed = client
            .warehouse()
            .dispense(&NewDispensing {
                item_id: 1,
                facility_id: 3,
                quantity: 2.0,
                request_number: Some("REQ-7".into()),
                recipient: None,
                notes: None,
            })
            .await
            .unwrap();
        assert_eq!(dispensed.id, 11);
        assert_eq!(dispensed.item_id, Some(1));

        let req = server.last();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/warehouse/dispensing");
        let body: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["request_number"], "REQ-7");
        assert!(body.get("recipient").is_none());
    }

    #[tokio::test]
    async fn expiring_warranties_sorted_soonest_first() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, session);
        let on = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let assets = client.dental_assets().expiring_warranties(on, 30).await.unwrap();
        assert_eq!(assets.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[tokio::test]
    async fn unauthorized_clears_persisted_session() {
        use medadmin_session::FileStore;

        let server = start_test_server().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        let store = FileStore::open(&path).unwrap();
        store.set("staff_token", "s-tok").unwrap();
        store.set("staff_user", "{}").unwrap();
        let client = ApiClient::new(&server.base_url, Session::new(Arc::new(store)));

        let err = client
            .call::<Value>("/expired", RequestOptions::get(), true, None)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("staff_token").unwrap(), None);
        assert_eq!(reopened.get("staff_user").unwrap(), None);
    }

    /// Store whose removals always fail.
    struct StuckStore(MemoryStore);

    impl SessionStore for StuckStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.0.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), SessionError> {
            Err(SessionError::Storage("read-only".into()))
        }

        fn keys(&self) -> Result<Vec<String>, SessionError> {
            self.0.keys()
        }
    }

    #[tokio::test]
    async fn unauthorized_survives_failed_session_clear() {
        let server = start_test_server().await;
        let store = MemoryStore::with_entries([("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, Session::new(Arc::new(StuckStore(store))));

        let err = client
            .call::<Value>("/expired", RequestOptions::get(), true, None)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized(), "got {:?}", err);
    }

    // =====================================================================
    // Pagination
    // =====================================================================

    #[tokio::test]
    async fn all_follows_every_page() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, session);

        let facilities = client.facilities().all().await.unwrap();
        assert_eq!(
            facilities.iter().map(|f| f.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );

        let queries: Vec<_> = server.requests().into_iter().map(|r| r.query).collect();
        assert_eq!(
            queries,
            vec![None, Some("page=2".to_string()), Some("page=3".to_string())]
        );
    }

    #[tokio::test]
    async fn all_stops_when_server_repeats_a_page() {
        let server = start_test_server().await;
        let session = session_with(&[("staff_token", "s-tok")]);
        let client = ApiClient::new(&server.base_url, session);

        // /reports claims four pages but always answers with page 1.
        let reports = client.reports().all().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(server.requests().len(), 2);
    }
}
