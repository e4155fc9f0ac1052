//! HTML building blocks shared by the page controllers.
//!
//! Every value interpolated into markup goes through [`escape`].

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use services::service::AppError;
use std::str::FromStr;
use util::config;

use crate::response::status_for;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:60rem;}\
nav a{margin-right:1rem;}table{border-collapse:collapse;width:100%;}\
th,td{border-bottom:1px solid #ddd;padding:.4rem;text-align:left;}\
label{display:inline-block;min-width:10rem;}.error{color:#b00020;font-weight:bold;}\
.notice{color:#1b5e20;font-weight:bold;}";

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the site layout. `title` is escaped, `body` is trusted markup.
pub fn page(status: StatusCode, title: &str, body: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title} | {project}</title>\n<style>{style}</style>\n</head>\n<body>\n\
<nav><a href=\"/students/\">Students</a><a href=\"/teachers/\">Teachers</a>\
<a href=\"/courses/\">Courses</a><a href=\"/enrollments/\">Enrollments</a></nav>\n\
<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        project = escape(&config::project_name()),
        style = STYLE,
        body = body,
    );
    (status, Html(html)).into_response()
}

/// Full page for a failure that has no form to fall back to.
pub fn error_page(err: &AppError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "page request failed");
    }
    let title = if status == StatusCode::NOT_FOUND {
        "Not Found"
    } else {
        "Something went wrong"
    };
    page(status, title, &alert(Some(&err.to_string())))
}

pub fn alert(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    }
}

const FLASH_COOKIE: &str = "flash";

/// 303 to `to`, leaving `message` for the next page that calls [`take_flash`].
pub fn redirect_with_flash(jar: CookieJar, to: &str, message: String) -> Response {
    let cookie = Cookie::build((FLASH_COOKIE, message)).path("/").http_only(true);
    (jar.add(cookie), Redirect::to(to)).into_response()
}

/// Reads and clears the pending flash message.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|c| c.value().to_string());
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), message)
}

pub fn notice(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("<p class=\"notice\">{}</p>", escape(msg)),
        None => String::new(),
    }
}

pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(href), escape(text))
}

pub fn or_dash(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_else(|| "-".to_string())
}

pub fn input(label: &str, name: &str, kind: &str, value: &str, required: bool) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label><input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}></p>",
        name = escape(name),
        label = escape(label),
        kind = escape(kind),
        value = escape(value),
        required = if required { " required" } else { "" },
    )
}

pub fn textarea(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label><textarea id=\"{name}\" name=\"{name}\">{value}</textarea></p>",
        name = escape(name),
        label = escape(label),
        value = escape(value),
    )
}

/// `options` are `(value, text)` pairs; the one equal to `selected` is preselected.
pub fn select(label: &str, name: &str, options: &[(String, String)], selected: &str) -> String {
    let choices: String = options
        .iter()
        .map(|(value, text)| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape(value),
                if value == selected { " selected" } else { "" },
                escape(text)
            )
        })
        .collect();

    format!(
        "<p><label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\">{choices}</select></p>",
        name = escape(name),
        label = escape(label),
    )
}

pub fn form(action: &str, fields: &[String], submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n{}\n<button type=\"submit\">{}</button>\n</form>",
        escape(action),
        fields.join("\n"),
        escape(submit)
    )
}

/// Cells are trusted markup; callers escape text themselves.
pub fn table(headers: &[&str], rows: Vec<Vec<String>>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p>{}</p>", escape(empty));
    }

    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    let body: String = rows
        .into_iter()
        .map(|cells| {
            let cells: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!("<table>\n<thead><tr>{head}</tr></thead>\n<tbody>{body}</tbody>\n</table>")
}

/// Confirmation form posting back to the same delete URL.
pub fn confirm_delete(what: &str, action: &str, cancel: &str) -> String {
    format!(
        "<p>Are you sure you want to delete \"{}\"?</p>\n{}\n<p>{}</p>",
        escape(what),
        form(action, &[], "Yes, delete"),
        link(cancel, "Cancel")
    )
}

/// Blank input means absent.
pub fn parse_optional<T: FromStr>(field: &str, value: &str) -> Result<Option<T>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{field} has an invalid value")))
}

pub fn parse_required<T: FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    parse_optional(field, value)?
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn parses_form_numbers() {
        assert_eq!(parse_optional::<i64>("teacher_id", " ").unwrap(), None);
        assert_eq!(parse_optional::<i64>("teacher_id", "7").unwrap(), Some(7));
        assert!(matches!(
            parse_required::<i32>("credits", ""),
            Err(AppError::Validation(msg)) if msg == "credits is required"
        ));
        assert!(matches!(
            parse_required::<i32>("credits", "three"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn selects_current_option() {
        let html = select(
            "Status",
            "status",
            &[
                ("active".into(), "Active".into()),
                ("inactive".into(), "Inactive".into()),
            ],
            "inactive",
        );
        assert!(html.contains("<option value=\"inactive\" selected>Inactive</option>"));
        assert!(html.contains("<option value=\"active\">Active</option>"));
    }
}
