#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};
    use serial_test::serial;

    use crate::helpers::{make_test_app, send_json};

    fn ada() -> Value {
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com",
            "phone": "555-0100",
            "department": "Math",
            "hire_date": "2020-01-01"
        })
    }

    #[tokio::test]
    #[serial]
    async fn create_then_get_returns_same_fields() {
        let (app, _) = make_test_app().await;

        let (status, created) = send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["message"], "Teacher created successfully");
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, fetched) =
            send_json(&app, Method::GET, &format!("/api/teachers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["data"], created["data"]);
        assert_eq!(fetched["data"]["hire_date"], "2020-01-01");
        assert_eq!(fetched["data"]["specialization"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_email_is_rejected() {
        let (app, _) = make_test_app().await;
        send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;

        let (status, json) = send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    #[serial]
    async fn malformed_and_incomplete_bodies_are_bad_requests() {
        let (app, _) = make_test_app().await;

        let req = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/api/teachers")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let response = tower::ServiceExt::oneshot(app.clone(), req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (status, json) = send_json(
            &app,
            Method::POST,
            "/api/teachers",
            Some(json!({ "first_name": "Ada" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        let mut bad_date = ada();
        bad_date["hire_date"] = json!("01/02/2020");
        let (status, json) = send_json(&app, Method::POST, "/api/teachers", Some(bad_date)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("hire_date"));
    }

    #[tokio::test]
    #[serial]
    async fn missing_teacher_is_404() {
        let (app, _) = make_test_app().await;

        for method in [Method::GET, Method::DELETE] {
            let (status, json) = send_json(&app, method, "/api/teachers/999", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(json["message"], "Teacher 999 not found");
        }

        let (status, _) = send_json(&app, Method::GET, "/api/teachers/999/courses", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn patch_and_put_differ_on_omitted_fields() {
        let (app, _) = make_test_app().await;
        let (_, created) = send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;
        let uri = format!("/api/teachers/{}", created["data"]["id"]);

        let (status, patched) = send_json(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "last_name": "King" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["data"]["last_name"], "King");
        assert_eq!(patched["data"]["phone"], "555-0100");

        let (_, cleared) =
            send_json(&app, Method::PATCH, &uri, Some(json!({ "phone": null }))).await;
        assert_eq!(cleared["data"]["phone"], Value::Null);
        assert_eq!(cleared["data"]["department"], "Math");

        let mut replacement = ada();
        replacement.as_object_mut().unwrap().remove("department");
        let (status, replaced) = send_json(&app, Method::PUT, &uri, Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(replaced["data"]["last_name"], "Lovelace");
        assert_eq!(replaced["data"]["department"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn deleting_teacher_keeps_courses_unassigned() {
        let (app, _) = make_test_app().await;
        let (_, teacher) = send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;
        let teacher_id = teacher["data"]["id"].as_i64().unwrap();

        let (_, course) = send_json(
            &app,
            Method::POST,
            "/api/courses",
            Some(json!({
                "course_name": "Algebra",
                "course_code": "MATH101",
                "teacher": teacher_id,
                "credits": 3
            })),
        )
        .await;
        let course_id = course["data"]["id"].as_i64().unwrap();

        let (_, taught) = send_json(
            &app,
            Method::GET,
            &format!("/api/teachers/{teacher_id}/courses"),
            None,
        )
        .await;
        assert_eq!(taught["data"].as_array().unwrap().len(), 1);

        let (status, json) = send_json(
            &app,
            Method::DELETE,
            &format!("/api/teachers/{teacher_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Teacher deleted successfully");

        let (status, course) =
            send_json(&app, Method::GET, &format!("/api/courses/{course_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(course["data"]["teacher"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn list_filters_by_department() {
        let (app, _) = make_test_app().await;
        send_json(&app, Method::POST, "/api/teachers", Some(ada())).await;
        let mut other = ada();
        other["email"] = json!("grace@x.com");
        other["first_name"] = json!("Grace");
        other["department"] = json!("Science");
        send_json(&app, Method::POST, "/api/teachers", Some(other)).await;

        let (_, all) = send_json(&app, Method::GET, "/api/teachers", None).await;
        assert_eq!(all["data"].as_array().unwrap().len(), 2);

        let (status, science) =
            send_json(&app, Method::GET, "/api/teachers?department=Science", None).await;
        assert_eq!(status, StatusCode::OK);
        let science = science["data"].as_array().unwrap();
        assert_eq!(science.len(), 1);
        assert_eq!(science[0]["first_name"], "Grace");
    }
}
