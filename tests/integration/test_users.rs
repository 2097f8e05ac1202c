use super::helpers::{
    STORAGE_BASE, assert_status, empty_request, json_request, multipart_picture_body,
    multipart_request, read_json, register_user, send, spawn_app, tiny_png_bytes, unique_email,
};
use axum::http::StatusCode;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};

#[tokio::test]
async fn registering_with_a_data_uri_picture_stores_it() {
    let test = spawn_app();
    let png = tiny_png_bytes();
    let email = unique_email("users-it");

    let res = send(
        &test.app,
        json_request(
            "POST",
            "/api/v1/users",
            None,
            &json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": email.to_uppercase(),
                "password": "analytical-engine",
                "profile_picture": format!("data:image/png;base64,{}", STANDARD.encode(&png)),
            }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::CREATED);
    let body: Value = read_json(res).await;

    assert_eq!(body["email"], email.to_lowercase());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    let url = body["profile_picture"].as_str().expect("picture url");
    assert!(url.starts_with(&format!("{}/profile_pics/", STORAGE_BASE)));
    assert!(url.ends_with(".png"));

    let uploads = test.storage.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].data, png);
    assert_eq!(uploads[0].content_type, "image/png");
}

#[tokio::test]
async fn picture_errors_are_reported_with_other_fields() {
    let test = spawn_app();

    let res = send(
        &test.app,
        json_request(
            "POST",
            "/api/v1/users",
            None,
            &json!({
                "first_name": "",
                "last_name": "Lovelace",
                "email": unique_email("users-it"),
                "password": "analytical-engine",
                "profile_picture": "not-base64-!!",
            }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;

    assert_eq!(body["error"], "Invalid input");
    assert!(body["fields"]["profile_picture"][0]
        .as_str()
        .unwrap()
        .starts_with("Upload a valid image."));
    assert!(body["fields"]["first_name"].is_array());
    assert!(test.storage.uploads().is_empty());
}

#[tokio::test]
async fn non_image_payload_is_an_unsupported_format() {
    let test = spawn_app();

    let res = send(
        &test.app,
        json_request(
            "POST",
            "/api/v1/users",
            None,
            &json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": unique_email("users-it"),
                "password": "analytical-engine",
                "profile_picture": STANDARD.encode("hello"),
            }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;
    assert!(body["fields"]["profile_picture"][0]
        .as_str()
        .unwrap()
        .starts_with("Unsupported image format."));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let test = spawn_app();
    let email = unique_email("users-dup");
    let body = json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "analytical-engine",
    });
    register_user(&test.app, body.clone()).await;

    let res = send(&test.app, json_request("POST", "/api/v1/users", None, &body)).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = read_json(res).await;
    assert!(payload["fields"]["email"].is_array());
}

#[tokio::test]
async fn profile_requires_a_bearer_token() {
    let test = spawn_app();
    let res = send(&test.app, empty_request("GET", "/api/v1/users/me", None)).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);

    let res = send(
        &test.app,
        empty_request("GET", "/api/v1/users/me", Some("not-a-jwt")),
    )
    .await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn patch_updates_and_clears_fields() {
    let test = spawn_app();
    let (_, token) = register_user(
        &test.app,
        json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": unique_email("users-patch"),
            "password": "compilers-rule",
            "city": "Arlington",
            "phone": "+1 555 0100",
        }),
    )
    .await;

    let res = send(
        &test.app,
        json_request(
            "PATCH",
            "/api/v1/users/me",
            Some(&token),
            &json!({ "city": "", "state": "VA" }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert!(body["city"].is_null());
    assert_eq!(body["state"], "VA");
    assert_eq!(body["phone"], "+1 555 0100");

    let res = send(&test.app, empty_request("GET", "/api/v1/users/me", Some(&token))).await;
    assert_status(res.status(), StatusCode::OK);
    let me: Value = read_json(res).await;
    assert_eq!(me["first_name"], "Grace");
    assert!(me["city"].is_null());
}

#[tokio::test]
async fn same_file_name_from_two_users_gets_distinct_keys() {
    let test = spawn_app();
    let mut pictures = Vec::new();

    for prefix in ["users-upload-a", "users-upload-b"] {
        let (_, token) = register_user(
            &test.app,
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": unique_email(prefix),
                "password": "analytical-engine",
            }),
        )
        .await;

        let (boundary, body) = multipart_picture_body(Some("avatar.png"), &tiny_png_bytes());
        let res = send(
            &test.app,
            multipart_request("/api/v1/users/me/profile-picture", &token, &boundary, body),
        )
        .await;
        assert_status(res.status(), StatusCode::OK);
        let user: Value = read_json(res).await;
        pictures.push(user["profile_picture"].as_str().expect("picture url").to_string());
    }

    assert_ne!(pictures[0], pictures[1]);
    let uploads = test.storage.uploads();
    assert_eq!(uploads.len(), 2);
    assert_ne!(uploads[0].key, uploads[1].key);
    for (upload, url) in uploads.iter().zip(&pictures) {
        assert_eq!(url, &format!("{}/{}", STORAGE_BASE, upload.key));
        let name = upload.key.strip_prefix("profile_pics/").expect("prefixed key");
        assert!(!name.contains("avatar"));
        let (base, ext) = name.split_once('.').expect("extension");
        assert_eq!(base.len(), 12);
        assert_eq!(ext, "png");
        assert_eq!(upload.content_type, "image/png");
    }
}

#[tokio::test]
async fn raw_file_extension_follows_its_content() {
    let test = spawn_app();
    let (_, token) = register_user(
        &test.app,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": unique_email("users-upload"),
            "password": "analytical-engine",
        }),
    )
    .await;

    let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
    let (boundary, body) = multipart_picture_body(Some("holiday.png"), gif);
    let res = send(
        &test.app,
        multipart_request("/api/v1/users/me/profile-picture", &token, &boundary, body),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);

    let upload = &test.storage.uploads()[0];
    assert!(upload.key.ends_with(".gif"));
    assert_eq!(upload.content_type, "image/gif");
    assert_eq!(upload.data, gif.to_vec());
}

#[tokio::test]
async fn multipart_text_part_is_decoded_as_base64() {
    let test = spawn_app();
    let (_, token) = register_user(
        &test.app,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": unique_email("users-upload"),
            "password": "analytical-engine",
        }),
    )
    .await;

    let encoded = STANDARD.encode(tiny_png_bytes());
    let (boundary, body) = multipart_picture_body(None, encoded.as_bytes());
    let res = send(
        &test.app,
        multipart_request("/api/v1/users/me/profile-picture", &token, &boundary, body),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);

    let key = test.storage.uploads()[0].key.clone();
    let name = key.strip_prefix("profile_pics/").expect("prefixed key");
    let (base, ext) = name.split_once('.').expect("extension");
    assert_eq!(base.len(), 12);
    assert_eq!(ext, "png");
}

#[tokio::test]
async fn multipart_non_image_file_is_rejected() {
    let test = spawn_app();
    let (_, token) = register_user(
        &test.app,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": unique_email("users-upload"),
            "password": "analytical-engine",
        }),
    )
    .await;

    let (boundary, body) = multipart_picture_body(Some("notes.txt"), b"plain text");
    let res = send(
        &test.app,
        multipart_request("/api/v1/users/me/profile-picture", &token, &boundary, body),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = read_json(res).await;
    assert!(payload["fields"]["profile_picture"].is_array());
    assert!(test.storage.uploads().is_empty());
}

#[tokio::test]
async fn deleted_account_is_gone() {
    let test = spawn_app();
    let (_, token) = register_user(
        &test.app,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": unique_email("users-delete"),
            "password": "analytical-engine",
        }),
    )
    .await;

    let res = send(&test.app, empty_request("DELETE", "/api/v1/users/me", Some(&token))).await;
    assert_status(res.status(), StatusCode::NO_CONTENT);

    let res = send(&test.app, empty_request("GET", "/api/v1/users/me", Some(&token))).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "User not found");
}
