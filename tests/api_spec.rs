use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use mergington_activities::api::{create_router, create_router_with_config};
use mergington_activities::config::ServerConfig;
use mergington_activities::directory::Directory;
use mergington_activities::models::*;

fn setup() -> TestServer {
    let app = create_router(Directory::with_seed());
    TestServer::new(app).expect("Failed to create test server")
}

async fn participants(server: &TestServer, name: &str) -> Vec<String> {
    let activities = server.get("/activities").await.json::<ActivityMap>();
    activities
        .get(name)
        .expect("Activity should exist")
        .participants
        .clone()
}

mod root {
    use super::*;

    #[tokio::test]
    async fn redirects_to_static_index() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.header(header::LOCATION).to_str().unwrap(),
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

mod list_activities {
    use super::*;

    #[tokio::test]
    async fn returns_all_seeded_activities() {
        let server = setup();

        let response = server.get("/activities").await;

        response.assert_status_ok();
        let activities: ActivityMap = response.json();
        assert_eq!(activities.len(), 9);
        assert!(activities.contains_key("Soccer Team"));
        assert!(activities.contains_key("Swimming Club"));
        assert!(activities.contains_key("Drama Club"));
    }

    #[tokio::test]
    async fn lists_activities_in_seed_order() {
        let server = setup();

        let text = server.get("/activities").await.text();

        let soccer = text.find("\"Soccer Team\"").expect("Soccer Team listed");
        let art = text.find("\"Art Studio\"").expect("Art Studio listed");
        let gym = text.find("\"Gym Class\"").expect("Gym Class listed");
        assert!(soccer < art && art < gym);
    }

    #[tokio::test]
    async fn exposes_activity_fields() {
        let server = setup();

        let data: serde_json::Value = server.get("/activities").await.json();
        let soccer = &data["Soccer Team"];

        assert_eq!(
            soccer["description"],
            "Join the varsity soccer team and compete against other schools"
        );
        assert_eq!(
            soccer["schedule"],
            "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM"
        );
        assert_eq!(soccer["max_participants"], 25);
        assert_eq!(
            soccer["participants"],
            serde_json::json!(["lucas@mergington.edu", "ava@mergington.edu"])
        );
    }
}

mod signup {
    use super::*;

    #[tokio::test]
    async fn signs_up_a_new_student() {
        let server = setup();

        let response = server
            .post("/activities/Soccer%20Team/signup")
            .add_query_param("email", "newstudent@mergington.edu")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<MessageResponse>(),
            MessageResponse::new("Signed up newstudent@mergington.edu for Soccer Team")
        );
        assert!(participants(&server, "Soccer Team")
            .await
            .contains(&"newstudent@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_activity() {
        let server = setup();

        let response = server
            .post("/activities/Nonexistent%20Activity/signup")
            .add_query_param("email", "student@mergington.edu")
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<ErrorDetail>(),
            ErrorDetail::new("Activity not found")
        );
    }

    #[tokio::test]
    async fn returns_400_for_duplicate_signup() {
        let server = setup();

        let response = server
            .post("/activities/Soccer%20Team/signup")
            .add_query_param("email", "lucas@mergington.edu")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorDetail>(),
            ErrorDetail::new("Student already signed up for this activity")
        );
    }

    #[tokio::test]
    async fn allows_one_student_in_several_activities() {
        let server = setup();
        let email = "multisport@mergington.edu";

        server
            .post("/activities/Soccer%20Team/signup")
            .add_query_param("email", email)
            .await
            .assert_status_ok();
        server
            .post("/activities/Swimming%20Club/signup")
            .add_query_param("email", email)
            .await
            .assert_status_ok();

        assert!(participants(&server, "Soccer Team")
            .await
            .contains(&email.to_string()));
        assert!(participants(&server, "Swimming Club")
            .await
            .contains(&email.to_string()));
    }

    #[tokio::test]
    async fn stores_emails_verbatim() {
        let server = setup();

        let response = server
            .post("/activities/Art%20Studio/signup")
            .add_query_param("email", "test.user+tag@mergington.edu")
            .await;

        response.assert_status_ok();
        assert!(participants(&server, "Art Studio")
            .await
            .contains(&"test.user+tag@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn rejects_missing_email_with_detail() {
        let server = setup();

        let response = server.post("/activities/Chess%20Club/signup").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorDetail = response.json();
        assert!(error.detail.contains("email"));
        assert_eq!(participants(&server, "Chess Club").await.len(), 2);
    }
}

mod unregister {
    use super::*;

    #[tokio::test]
    async fn unregisters_a_signed_up_student() {
        let server = setup();

        let response = server
            .delete("/activities/Soccer%20Team/unregister")
            .add_query_param("email", "lucas@mergington.edu")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<MessageResponse>(),
            MessageResponse::new("Unregistered lucas@mergington.edu from Soccer Team")
        );
        assert!(!participants(&server, "Soccer Team")
            .await
            .contains(&"lucas@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_activity() {
        let server = setup();

        let response = server
            .delete("/activities/Nonexistent%20Activity/unregister")
            .add_query_param("email", "student@mergington.edu")
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<ErrorDetail>(),
            ErrorDetail::new("Activity not found")
        );
    }

    #[tokio::test]
    async fn returns_400_when_not_signed_up() {
        let server = setup();

        let response = server
            .delete("/activities/Soccer%20Team/unregister")
            .add_query_param("email", "notsignedup@mergington.edu")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorDetail>(),
            ErrorDetail::new("Student not signed up for this activity")
        );
    }

    #[tokio::test]
    async fn rejects_missing_email_with_detail() {
        let server = setup();

        let response = server.delete("/activities/Soccer%20Team/unregister").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorDetail = response.json();
        assert!(error.detail.contains("email"));
        assert_eq!(participants(&server, "Soccer Team").await.len(), 2);
    }

    #[tokio::test]
    async fn signup_then_unregister_restores_roster() {
        let server = setup();
        let email = "testflow@mergington.edu";
        let before = participants(&server, "Chess Club").await;

        server
            .post("/activities/Chess%20Club/signup")
            .add_query_param("email", email)
            .await
            .assert_status_ok();
        assert!(participants(&server, "Chess Club")
            .await
            .contains(&email.to_string()));

        server
            .delete("/activities/Chess%20Club/unregister")
            .add_query_param("email", email)
            .await
            .assert_status_ok();
        assert_eq!(participants(&server, "Chess Club").await, before);
    }
}

mod configuration {
    use super::*;

    #[tokio::test]
    async fn serves_files_from_static_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), "<h1>Mergington</h1>")
            .expect("Failed to write index");
        let config = ServerConfig::default().with_static_dir(Some(dir.path().to_path_buf()));
        let server = TestServer::new(create_router_with_config(Directory::with_seed(), &config))
            .expect("Failed to create test server");

        let response = server.get("/static/index.html").await;

        response.assert_status_ok();
        assert!(response.text().contains("Mergington"));
    }

    #[tokio::test]
    async fn restricts_cors_to_configured_origins() {
        let config = ServerConfig::default()
            .with_static_dir(None)
            .with_cors_origins(vec!["http://allowed.test".to_string()]);
        let server = TestServer::new(create_router_with_config(Directory::with_seed(), &config))
            .expect("Failed to create test server");

        let allowed = server
            .get("/activities")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://allowed.test"))
            .await;
        assert_eq!(
            allowed
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("http://allowed.test")
        );

        let denied = server
            .get("/activities")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://evil.test"))
            .await;
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
