use anyhow::Context;
use axum::{extract::State, response::Html};

use crate::domain::item::Item;
use crate::infrastructure::session::Session;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::middleware::session::CurrentSession;

const WELCOME_HIDDEN: &str = r#"<div id="welcome-message" style="display: none;"#;
const WELCOME_SHOWN: &str = r#"<div id="welcome-message" style="display: block;"#;
const USERNAME_PLACEHOLDER: &str = "ученик";
const AUTH_BUTTONS: &str = r#"<span id="auth-buttons">"#;
const ITEMS_BODY: &str = r#"<tbody id="items-table">"#;

pub(crate) async fn index(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Html<String>> {
    let template = tokio::fs::read_to_string(state.index_template.as_path())
        .await
        .with_context(|| format!("failed to read {}", state.index_template.display()))?;

    let items = state.item_service.list_items().await?;

    Ok(Html(render_index(&template, &session, &items)))
}

/// Literal substring rewriting of the landing page: toggle the welcome
/// banner, swap the auth buttons, fill in the items table.
fn render_index(template: &str, session: &Session, items: &[Item]) -> String {
    let mut html = template.to_string();

    match session.username() {
        Some(username) => {
            html = html.replace(WELCOME_HIDDEN, WELCOME_SHOWN);
            html = html.replace(USERNAME_PLACEHOLDER, &escape_html(username));
            html = html.replace(
                AUTH_BUTTONS,
                concat!(
                    r#"<span id="auth-buttons">"#,
                    "\n                ",
                    r#"<button id="btn-lk">ЛК</button>"#,
                    "\n                ",
                    r#"<button id="btn-logout">Выйти</button>"#,
                ),
            );
        }
        None => {
            html = html.replace(
                AUTH_BUTTONS,
                concat!(
                    r#"<span id="auth-buttons">"#,
                    "\n                ",
                    r#"<button id="btn-register">Зарегистрироваться</button>"#,
                    "\n                ",
                    r#"<button id="btn-login" style="margin-left:10px;">Войти</button>"#,
                ),
            );
        }
    }

    html.replace(ITEMS_BODY, &format!("{ITEMS_BODY}{}", item_rows(items)))
}

fn item_rows(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "\n                <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                item.id,
                escape_html(&item.name),
                escape_html(&item.value),
            )
        })
        .collect()
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::render_index;
    use crate::domain::item::Item;
    use crate::infrastructure::session::Session;

    const TEMPLATE: &str = concat!(
        r#"<div id="welcome-message" style="display: none;">Привет, ученик!</div>"#,
        r#"<span id="auth-buttons"></span>"#,
        r#"<table><tbody id="items-table"></tbody></table>"#,
    );

    fn item(id: i64, name: &str, value: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn anonymous_page_offers_register_and_login() {
        let html = render_index(TEMPLATE, &Session::Anonymous, &[]);

        assert!(html.contains(r#"style="display: none;"#));
        assert!(html.contains("Зарегистрироваться"));
        assert!(html.contains("Войти"));
        assert!(!html.contains("btn-logout"));
    }

    #[test]
    fn authenticated_page_shows_banner_with_username() {
        let session = Session::Authenticated {
            username: "alice".to_string(),
        };
        let html = render_index(TEMPLATE, &session, &[]);

        assert!(html.contains(r#"style="display: block;"#));
        assert!(html.contains("Привет, alice!"));
        assert!(html.contains("btn-lk"));
        assert!(html.contains("btn-logout"));
        assert!(!html.contains("btn-register"));
    }

    #[test]
    fn username_is_html_escaped() {
        let session = Session::Authenticated {
            username: "<script>".to_string(),
        };
        let html = render_index(TEMPLATE, &session, &[]);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn items_render_in_given_order() {
        let items = vec![item(1, "ruler", "1"), item(2, "pencil", "12")];
        let html = render_index(TEMPLATE, &Session::Anonymous, &items);

        let ruler = html.find("ruler").expect("ruler row must be present");
        let pencil = html.find("pencil").expect("pencil row must be present");
        assert!(ruler < pencil);
        assert!(html.contains("<td>12</td>"));
    }

    #[test]
    fn item_values_are_escaped() {
        let items = vec![item(1, "<b>", "\"12\"")];
        let html = render_index(TEMPLATE, &Session::Anonymous, &items);

        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&quot;12&quot;"));
    }
}
