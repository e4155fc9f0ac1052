#[cfg(test)]
mod tests {
    use axum::{
        Router,
        http::{Method, StatusCode},
    };
    use serde_json::{Value, json};
    use serial_test::serial;

    use crate::helpers::{make_test_app, send_json};

    async fn student_and_course(app: &Router) -> (i64, i64) {
        let (_, student) = send_json(
            app,
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
            app,
            Method::POST,
            "/api/courses",
            Some(json!({ "course_name": "Intro", "course_code": "CS101", "credits": 3 })),
        )
        .await;
        (
            student["data"]["id"].as_i64().unwrap(),
            course["data"]["id"].as_i64().unwrap(),
        )
    }

    #[tokio::test]
    #[serial]
    async fn enroll_then_reject_duplicate() {
        let (app, _) = make_test_app().await;
        let (student, course) = student_and_course(&app).await;
        let body = json!({ "student": student, "course": course });

        let (status, json) =
            send_json(&app, Method::POST, "/api/enrollments", Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "enrolled");
        assert_eq!(json["data"]["grade"], Value::Null);
        assert!(json["data"]["enrollment_date"].as_str().is_some());

        let (status, json) = send_json(&app, Method::POST, "/api/enrollments", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["message"],
            format!("Student {student} is already enrolled in course {course}")
        );

        let (_, listed) = send_json(
            &app,
            Method::GET,
            &format!("/api/enrollments?course_id={course}"),
            None,
        )
        .await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_student_or_course_is_404() {
        let (app, _) = make_test_app().await;
        let (student, course) = student_and_course(&app).await;

        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": 999, "course": course })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": student, "course": 999 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn grade_out_of_range_is_rejected() {
        let (app, _) = make_test_app().await;
        let (student, course) = student_and_course(&app).await;

        let (status, json) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": student, "course": course, "grade": 100.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("grade"));

        let (status, json) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": student, "course": course, "grade": 100 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["grade"], 100.0);
    }

    #[tokio::test]
    #[serial]
    async fn patch_changes_status_and_grade() {
        let (app, _) = make_test_app().await;
        let (student, course) = student_and_course(&app).await;
        let (_, created) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": student, "course": course })),
        )
        .await;
        let uri = format!("/api/enrollments/{}", created["data"]["id"]);

        let (status, json) = send_json(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "status": "completed", "grade": 91.5 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "completed");
        assert_eq!(json["data"]["grade"], 91.5);
        assert_eq!(json["data"]["student"], student);
        assert_eq!(json["data"]["enrollment_date"], created["data"]["enrollment_date"]);
    }

    #[tokio::test]
    #[serial]
    async fn second_delete_is_404() {
        let (app, _) = make_test_app().await;
        let (student, course) = student_and_course(&app).await;
        let (_, created) = send_json(
            &app,
            Method::POST,
            "/api/enrollments",
            Some(json!({ "student": student, "course": course })),
        )
        .await;
        let uri = format!("/api/enrollments/{}", created["data"]["id"]);

        let (status, json) = send_json(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Enrollment deleted successfully");

        let (status, json) = send_json(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }
}
