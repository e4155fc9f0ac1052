#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};
    use serial_test::serial;

    use crate::helpers::{make_test_app, send_json};

    fn course(code: &str, credits: i32) -> Value {
        json!({ "course_name": "Intro", "course_code": code, "credits": credits })
    }

    #[tokio::test]
    #[serial]
    async fn credits_below_one_are_rejected() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            send_json(&app, Method::POST, "/api/courses", Some(course("CS100", 0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("credits"));

        let (status, json) =
            send_json(&app, Method::POST, "/api/courses", Some(course("CS101", 1))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["credits"], 1);
        assert_eq!(json["data"]["max_capacity"], 30);
        assert_eq!(json["data"]["teacher"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_code_is_rejected() {
        let (app, _) = make_test_app().await;
        send_json(&app, Method::POST, "/api/courses", Some(course("CS101", 3))).await;

        let (status, json) =
            send_json(&app, Method::POST, "/api/courses", Some(course("CS101", 3))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("course_code"));
    }

    #[tokio::test]
    #[serial]
    async fn unknown_teacher_is_404() {
        let (app, _) = make_test_app().await;
        let mut body = course("CS101", 3);
        body["teacher"] = json!(77);

        let (status, json) = send_json(&app, Method::POST, "/api/courses", Some(body)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Teacher 77 not found");
    }

    #[tokio::test]
    #[serial]
    async fn null_teacher_unassigns_course() {
        let (app, _) = make_test_app().await;
        let (_, teacher) = send_json(
            &app,
            Method::POST,
            "/api/teachers",
            Some(json!({
                "first_name": "Ada",
                "last_name": "L",
                "email": "a@x.com",
                "hire_date": "2020-01-01"
            })),
        )
        .await;
        let mut body = course("CS101", 3);
        body["teacher"] = teacher["data"]["id"].clone();
        let (_, created) = send_json(&app, Method::POST, "/api/courses", Some(body)).await;
        let uri = format!("/api/courses/{}", created["data"]["id"]);
        assert_eq!(created["data"]["teacher"], teacher["data"]["id"]);

        let (_, untouched) =
            send_json(&app, Method::PATCH, &uri, Some(json!({ "semester": "Fall" }))).await;
        assert_eq!(untouched["data"]["teacher"], teacher["data"]["id"]);

        let (status, cleared) =
            send_json(&app, Method::PATCH, &uri, Some(json!({ "teacher": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cleared["data"]["teacher"], Value::Null);
        assert_eq!(cleared["data"]["semester"], "Fall");
    }

    #[tokio::test]
    #[serial]
    async fn list_is_ordered_by_code() {
        let (app, _) = make_test_app().await;
        send_json(&app, Method::POST, "/api/courses", Some(course("MATH200", 4))).await;
        send_json(&app, Method::POST, "/api/courses", Some(course("CS101", 3))).await;

        let (_, json) = send_json(&app, Method::GET, "/api/courses", None).await;
        let codes: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["course_code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["CS101", "MATH200"]);

        let (_, found) = send_json(&app, Method::GET, "/api/courses?query=MATH", None).await;
        assert_eq!(found["data"].as_array().unwrap().len(), 1);
    }
}
