//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Mail is forced onto the logging transport, so no SMTP server is
//! needed. Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Setup flows
// ============================================================================

/// Register a fresh user and log in, returning the registration data
/// and a bearer token.
async fn register_and_login(server: &TestServer) -> (RegisterRequest, String) {
    let register_req = RegisterRequest::unique();
    let response = server.post("/users", &register_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post_form("/token", &login_req).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (register_req, token.access_token)
}

/// Register, log in, and verify the account
async fn register_verified(server: &TestServer) -> (RegisterRequest, String) {
    let (register_req, token) = register_and_login(server).await;

    let verify_req = VerifyRequest {
        token: token.clone(),
    };
    let response = server.post("/verification", &verify_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    (register_req, token)
}

/// Create a product owned by the given token's business
async fn create_product(server: &TestServer, token: &str) -> ProductResponse {
    let product_req = CreateProductRequest::unique();
    let response = server.post_auth("/products", token, &product_req).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The body carries a check-your-email note and nothing else; no
    // token or password material leaves the server at registration
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["status"], "ok");
    let data = object["data"].as_str().unwrap();
    assert!(data.contains(&request.username));
    assert!(data.contains("Check your email"));
}

#[tokio::test]
async fn test_register_creates_business_named_after_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.user.username, register_req.username);
    assert!(!me.user.is_verified);
    assert_eq!(me.business.name, register_req.username);
    assert_eq!(me.business.owner_id, me.user.id);
    assert_eq!(me.business.logo, "default.jpg");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/users", &request).await.unwrap();

    // Same username, different email
    let duplicate = RegisterRequest {
        username: request.username.clone(),
        email: format!("other-{}", request.email),
        password: request.password.clone(),
    };
    let response = server.post("/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/users", &request).await.unwrap();

    // Same email, different username
    let duplicate = RegisterRequest {
        username: format!("{}other", request.username),
        email: request.email.clone(),
        password: request.password.clone(),
    };
    let response = server.post("/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/users", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post_form("/token", &login_req).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(token.token_type, "bearer");
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A real account, so the wrong-password path actually runs
    let register_req = RegisterRequest::unique();
    server.post("/users", &register_req).await.unwrap();

    let unknown_user = LoginRequest {
        username: format!("ghost{}", unique_suffix()),
        password: "TestPass123!".to_string(),
    };
    let wrong_password = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPass123!".to_string(),
    };

    let first = server.post_form("/token", &unknown_user).await.unwrap();
    assert_eq!(first.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        first.headers().get("www-authenticate").unwrap(),
        "Bearer",
        "401 must carry the bearer challenge"
    );
    let first_body = first.text().await.unwrap();

    let second = server.post_form("/token", &wrong_password).await.unwrap();
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(second.headers().get("www-authenticate").unwrap(), "Bearer");
    let second_body = second.text().await.unwrap();

    // Byte-identical bodies keep username probing blind
    assert_eq!(first_body, second_body);
}

// ============================================================================
// Current User Tests
// ============================================================================

#[tokio::test]
async fn test_token_authenticates_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.user.username, register_req.username);
    assert_eq!(me.user.email, register_req.email);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/me").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_current_user_rejects_garbage_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_auth("/users/me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_verification_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_and_login(&server).await;

    let verify_req = VerifyRequest {
        token: token.clone(),
    };

    // First verification flips the flag
    let response = server.post("/verification", &verify_req).await.unwrap();
    let first: VerificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.username, register_req.username);
    assert!(first.verified);

    // Repeating the call succeeds the same way
    let response = server.post("/verification", &verify_req).await.unwrap();
    let second: VerificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.verified);

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(me.user.is_verified);
}

#[tokio::test]
async fn test_verification_link_renders_page() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .get(&format!("/verification?token={token}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = response.text().await.unwrap();
    assert!(page.contains("Account Verification Successful"));
}

#[tokio::test]
async fn test_verification_rejects_invalid_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let verify_req = VerifyRequest {
        token: "garbage-token".to_string(),
    };
    let response = server.post("/verification", &verify_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_create_product() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;

    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/products", &token, &product_req)
        .await
        .unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(product.name, product_req.name);
    // 100.00 down to 75.00 is a 25% discount
    assert_eq!(product.discount, 25);
    assert_eq!(product.image, "defaultproduct.jpg");
}

#[tokio::test]
async fn test_create_product_requires_verified_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/products", &token, &product_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_product_rejects_bad_prices() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;

    // Negative current price
    let request = CreateProductRequest::with_prices("100.00", "-1.00");
    let response = server.post_auth("/products", &token, &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(
        body.error.message,
        "The current price set for the product is less than 0."
    );

    // Original price of zero
    let request = CreateProductRequest::with_prices("0.00", "0.00");
    let response = server.post_auth("/products", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Current price above original
    let request = CreateProductRequest::with_prices("100.00", "150.00");
    let response = server.post_auth("/products", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_products_is_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;
    let created = create_product(&server, &token).await;

    let response = server.get("/products").await.unwrap();
    let products: Vec<ProductResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(products.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_get_product_detail() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_verified(&server).await;
    let created = create_product(&server, &token).await;

    let response = server.get(&format!("/products/{}", created.id)).await.unwrap();
    let detail: ProductDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.product.id, created.id);
    assert_eq!(detail.business.id, created.business_id);
    assert_eq!(detail.business.name, register_req.username);
}

#[tokio::test]
async fn test_get_product_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/products/999999999").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.message, "Product does not exist");
}

#[tokio::test]
async fn test_get_product_rejects_non_numeric_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/products/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_product_requires_ownership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_verified(&server).await;
    let (_, other_token) = register_verified(&server).await;
    let created = create_product(&server, &owner_token).await;

    // A different verified user cannot delete it
    let response = server
        .delete_auth(&format!("/products/{}", created.id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The product is still there
    let response = server.get(&format!("/products/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The owner can
    let response = server
        .delete_auth(&format!("/products/{}", created.id), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/products/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_rejects_unsupported_extension() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;
    let created = create_product(&server, &token).await;

    let response = server
        .post_file_auth(
            &format!("/products/{}/image", created.id),
            &token,
            "anim.gif",
            png_bytes(64, 64),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(
        body.error.message,
        "File uploaded should be of type png, jpg or jpeg"
    );
}

#[tokio::test]
async fn test_upload_product_image_replaces_previous() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;
    let created = create_product(&server, &token).await;

    // First upload
    let response = server
        .post_file_auth(
            &format!("/products/{}/image", created.id),
            &token,
            "photo.png",
            png_bytes(400, 300),
        )
        .await
        .unwrap();
    let first: UploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.status, "ok");
    assert!(first.filename.ends_with(".png"));
    assert_eq!(first.url, format!("/static/images/{}", first.filename));

    // The stored file is served back
    let response = server.get(&first.url).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second upload replaces the first
    let response = server
        .post_file_auth(
            &format!("/products/{}/image", created.id),
            &token,
            "photo2.png",
            png_bytes(300, 400),
        )
        .await
        .unwrap();
    let second: UploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(second.filename, first.filename);

    let response = server.get(&second.url).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The first file is gone from disk
    let response = server.get(&first.url).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // And the product row points at the new filename
    let response = server.get(&format!("/products/{}", created.id)).await.unwrap();
    let detail: ProductDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.product.image, second.filename);
}

#[tokio::test]
async fn test_upload_to_missing_product() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;

    let response = server
        .post_file_auth(
            "/products/999999999/image",
            &token,
            "photo.png",
            png_bytes(64, 64),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_upload_to_non_owned_product() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_verified(&server).await;
    let (_, other_token) = register_verified(&server).await;
    let created = create_product(&server, &owner_token).await;

    let response = server
        .post_file_auth(
            &format!("/products/{}/image", created.id),
            &other_token,
            "photo.png",
            png_bytes(64, 64),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The product still shows its original image
    let response = server.get(&format!("/products/{}", created.id)).await.unwrap();
    let detail: ProductDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.product.image, "defaultproduct.jpg");
}

#[tokio::test]
async fn test_upload_business_logo() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_verified(&server).await;

    let response = server
        .post_file_auth("/business/image", &token, "logo.jpg", png_bytes(500, 200))
        .await
        .unwrap();
    let upload: UploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(upload.filename.ends_with(".jpg"));

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.business.logo, upload.filename);
}

#[tokio::test]
async fn test_upload_requires_verified_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .post_file_auth("/business/image", &token, "logo.png", png_bytes(64, 64))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
