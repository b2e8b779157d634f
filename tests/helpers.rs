#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const ACCESS_TOKEN: &str = "d3b25feccb89e508a9114afb82aa421fe2a9712b963b387cc5ad71e58722";

/// www.jw.org-shaped page.
pub fn www_jw_org_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="pt"><head><meta charset="utf-8"><title>{title}</title></head>
<body><nav><p>Menu</p></nav><article><h1>{title}</h1><div class="docClass-106 pub-w">{body}</div></article></body></html>"#
    )
}

/// wol.jw.org-shaped page.
pub fn wol_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="pt"><head><meta charset="utf-8"></head>
<body><div class="scalable"><p>Lateral</p></div><div id="content" class="scalable ui-resizable"><article><h1>{title}</h1>{body}</article></div></body></html>"#
    )
}

pub fn html_response(html: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_bytes(html.into_bytes())
        .insert_header("Content-Type", "text/html; charset=utf-8")
}

/// Mounts a successful `createAccount` on `server`.
pub async fn mount_create_account(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/createAccount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "short_name": "Link2InstantViewBot",
                "author_name": "",
                "author_url": "",
                "access_token": ACCESS_TOKEN,
                "auth_url": "https://edit.telegra.ph/auth/abc"
            }
        })))
        .mount(server)
        .await;
}

pub fn page_created(page_path: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ok": true,
        "result": {
            "path": page_path,
            "url": format!("https://telegra.ph/{page_path}"),
            "title": "T",
            "description": "",
            "views": 0,
            "can_edit": true
        }
    }))
}

/// JSON body of the `n`-th request received by `server` whose path ends
/// with `suffix`.
pub async fn request_body(server: &MockServer, suffix: &str, n: usize) -> Option<Value> {
    let requests = server.received_requests().await?;
    requests
        .iter()
        .filter(|r| r.url.path().ends_with(suffix))
        .nth(n)
        .and_then(|r| serde_json::from_slice(&r.body).ok())
}
