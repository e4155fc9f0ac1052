#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};
    use serial_test::serial;

    use crate::helpers::{make_test_app, send_json};

    fn student(email: &str) -> Value {
        json!({
            "first_name": "Sam",
            "last_name": "Lee",
            "email": email,
            "enrollment_date": "2024-01-01"
        })
    }

    #[tokio::test]
    #[serial]
    async fn status_defaults_to_active() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            send_json(&app, Method::POST, "/api/students", Some(student("s@x.com"))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "active");
        assert_eq!(json["data"]["date_of_birth"], Value::Null);
        assert_eq!(json["data"]["enrollment_date"], "2024-01-01");
    }

    #[tokio::test]
    #[serial]
    async fn invalid_email_and_status_are_rejected() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            send_json(&app, Method::POST, "/api/students", Some(student("nope"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid email address");

        let mut unknown_status = student("s@x.com");
        unknown_status["status"] = json!("expelled");
        let (status, _) = send_json(&app, Method::POST, "/api/students", Some(unknown_status)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn list_filters_by_status() {
        let (app, _) = make_test_app().await;
        send_json(&app, Method::POST, "/api/students", Some(student("a@x.com"))).await;
        let mut graduated = student("g@x.com");
        graduated["status"] = json!("graduated");
        send_json(&app, Method::POST, "/api/students", Some(graduated)).await;

        let (status, json) =
            send_json(&app, Method::GET, "/api/students?status=graduated", None).await;

        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["email"], "g@x.com");
    }

    #[tokio::test]
    #[serial]
    async fn patch_updates_status_only() {
        let (app, _) = make_test_app().await;
        let (_, created) =
            send_json(&app, Method::POST, "/api/students", Some(student("s@x.com"))).await;
        let uri = format!("/api/students/{}", created["data"]["id"]);

        let (status, json) = send_json(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "status": "inactive" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "inactive");
        assert_eq!(json["data"]["email"], "s@x.com");
    }

    #[tokio::test]
    #[serial]
    async fn deleting_student_removes_their_enrollments_only() {
        let (app, _) = make_test_app().await;
        let (_, s1) = send_json(&app, Method::POST, "/api/students", Some(student("a@x.com"))).await;
        let (_, s2) = send_json(&app, Method::POST, "/api/students", Some(student("b@x.com"))).await;
        let (_, course) = send_json(
            &app,
            Method::POST,
            "/api/courses",
            Some(json!({ "course_name": "Intro", "course_code": "CS101", "credits": 3 })),
        )
        .await;
        let course_id = course["data"]["id"].as_i64().unwrap();

        for s in [&s1, &s2] {
            let (status, _) = send_json(
                &app,
                Method::POST,
                "/api/enrollments",
                Some(json!({ "student": s["data"]["id"], "course": course_id })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let s1_uri = format!("/api/students/{}", s1["data"]["id"]);
        let (_, held) = send_json(&app, Method::GET, &format!("{s1_uri}/enrollments"), None).await;
        assert_eq!(held["data"].as_array().unwrap().len(), 1);

        let (status, _) = send_json(&app, Method::DELETE, &s1_uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, remaining) = send_json(
            &app,
            Method::GET,
            &format!("/api/courses/{course_id}/enrollments"),
            None,
        )
        .await;
        let remaining = remaining["data"].as_array().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["student"], s2["data"]["id"]);

        let (status, _) = send_json(&app, Method::GET, &format!("{s1_uri}/enrollments"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn blank_names_are_bad_requests() {
        let (app, _) = make_test_app().await;
        let mut body = student("s@x.com");
        body["first_name"] = json!("   ");
        body["last_name"] = json!(" ");

        let (status, json) = send_json(&app, Method::POST, "/api/students", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("name must be 1 to 100"));

        let (_, listed) = send_json(&app, Method::GET, "/api/students", None).await;
        assert!(listed["data"].as_array().unwrap().is_empty());
    }
}
