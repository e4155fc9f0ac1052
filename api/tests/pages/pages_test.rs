#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        response::Response,
    };
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{body_text, make_test_app, send_form, send_json};

    async fn get(app: &Router, uri: &str) -> Response {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn root_redirects_to_students() {
        let (app, _) = make_test_app().await;

        let response = get(&app, "/").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/students/");
    }

    #[tokio::test]
    #[serial]
    async fn list_pages_render_html() {
        let (app, _) = make_test_app().await;

        for uri in ["/teachers/", "/students/", "/courses/", "/enrollments/"] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{uri}");
        }
    }

    #[tokio::test]
    #[serial]
    async fn creating_teacher_redirects_to_list() {
        let (app, _) = make_test_app().await;

        let response = send_form(
            &app,
            "/teachers/create/",
            "first_name=Ada&last_name=Lovelace&email=ada%40x.com&hire_date=2020-01-01",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/teachers/");

        let html = body_text(get(&app, "/teachers/").await).await;
        assert!(html.contains("Ada Lovelace"));
    }

    #[tokio::test]
    #[serial]
    async fn invalid_form_is_redisplayed_with_message() {
        let (app, _) = make_test_app().await;

        let response = send_form(
            &app,
            "/students/create/",
            "first_name=Sam&last_name=Lee&email=sam%40x.com&enrollment_date=yesterday",
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("enrollment_date must be a valid date"));
        assert!(html.contains("value=\"Sam\""));
    }

    #[tokio::test]
    #[serial]
    async fn missing_record_page_is_404() {
        let (app, _) = make_test_app().await;

        let response = get(&app, "/students/999/").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Student 999 not found"));
    }

    #[tokio::test]
    #[serial]
    async fn delete_needs_confirmation() {
        let (app, _) = make_test_app().await;
        let (_, created) = send_json(
            &app,
            Method::POST,
            "/api/courses",
            Some(json!({ "course_name": "Intro", "course_code": "CS101", "credits": 3 })),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();

        let confirm = get(&app, &format!("/courses/{id}/delete/")).await;
        assert_eq!(confirm.status(), StatusCode::OK);
        assert_eq!(get(&app, &format!("/courses/{id}/")).await.status(), StatusCode::OK);

        let response = send_form(&app, &format!("/courses/{id}/delete/"), "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/courses/");
        assert_eq!(
            get(&app, &format!("/courses/{id}/")).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_enrollment_names_both_sides() {
        let (app, _) = make_test_app().await;
        let (_, student) = send_json(
            &app,
            Method::POST,
            "/api/students",
            Some(json!({
                "first_name": "Sam",
                "last_name": "Lee",
                "email": "sam@x.com",
                "enrollment_date": "2024-01-01"
            })),
        )
        .await;
        let (_, course) = send_json(
            &app,
            Method::POST,
            "/api/courses",
            Some(json!({ "course_name": "Intro", "course_code": "CS101", "credits": 3 })),
        )
        .await;
        let form = format!(
            "student_id={}&course_id={}&status=enrolled&grade=",
            student["data"]["id"], course["data"]["id"]
        );

        let first = send_form(&app, "/enrollments/create/", &form).await;
        assert_eq!(first.status(), StatusCode::SEE_OTHER);

        let second = send_form(&app, "/enrollments/create/", &form).await;
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let html = body_text(second).await;
        assert!(html.contains("Sam Lee is already enrolled in"));
    }

    #[tokio::test]
    #[serial]
    async fn blank_teacher_on_course_form_clears_assignment() {
        let (app, _) = make_test_app().await;
        let (_, teacher) = send_json(
            &app,
            Method::POST,
            "/api/teachers",
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@x.com",
                "hire_date": "2020-01-01"
            })),
        )
        .await;
        let (_, course) = send_json(
            &app,
            Method::POST,
            "/api/courses",
            Some(json!({
                "course_name": "Intro",
                "course_code": "CS101",
                "credits": 3,
                "teacher": teacher["data"]["id"]
            })),
        )
        .await;
        let id = course["data"]["id"].as_i64().unwrap();

        let response = send_form(
            &app,
            &format!("/courses/{id}/update/"),
            "course_name=Intro&course_code=CS101&teacher_id=&credits=4&max_capacity=25&description=&semester=",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let (_, json) = send_json(&app, Method::GET, &format!("/api/courses/{id}"), None).await;
        assert_eq!(json["data"]["teacher"], serde_json::Value::Null);
        assert_eq!(json["data"]["credits"], 4);
        assert_eq!(json["data"]["max_capacity"], 25);
    }

    async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    /// The `name=value` part of the response's `Set-Cookie` header.
    fn cookie_pair(response: &Response) -> String {
        let raw = response.headers()[header::SET_COOKIE].to_str().unwrap();
        raw.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    #[serial]
    async fn success_message_is_shown_once_on_the_list() {
        let (app, _) = make_test_app().await;

        let created = send_form(
            &app,
            "/teachers/create/",
            "first_name=Ada&last_name=Lovelace&email=ada%40x.com&hire_date=2020-01-01",
        )
        .await;
        assert_eq!(created.status(), StatusCode::SEE_OTHER);
        let cookie = cookie_pair(&created);

        let list = get_with_cookie(&app, "/teachers/", &cookie).await;
        assert_eq!(list.status(), StatusCode::OK);
        let cleared = list.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(cleared.starts_with("flash="));
        let html = body_text(list).await;
        assert!(html.contains("Teacher Ada Lovelace created successfully!"));

        let again = body_text(get(&app, "/teachers/").await).await;
        assert!(!again.contains("created successfully"));
    }

    #[tokio::test]
    #[serial]
    async fn deleting_from_page_names_the_record() {
        let (app, _) = make_test_app().await;
        let (_, created) = send_json(
            &app,
            Method::POST,
            "/api/students",
            Some(json!({
                "first_name": "Sam",
                "last_name": "Lee",
                "email": "sam@x.com",
                "enrollment_date": "2024-01-01"
            })),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();

        let deleted = send_form(&app, &format!("/students/{id}/delete/"), "").await;
        assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
        let cookie = cookie_pair(&deleted);

        let html = body_text(get_with_cookie(&app, "/students/", &cookie).await).await;
        assert!(html.contains("Student Sam Lee deleted successfully!"));
    }

    #[tokio::test]
    #[serial]
    async fn blank_course_code_is_redisplayed() {
        let (app, _) = make_test_app().await;

        let response = send_form(
            &app,
            "/courses/create/",
            "course_name=Intro&course_code=+++&credits=3&teacher_id=&max_capacity=&description=&semester=",
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Course code must be 1 to 20 characters"));
    }
}
