//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

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
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(created.user_id > 0);
}

#[tokio::test]
async fn test_register_duplicate_contact() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same contact
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_bad_contact() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.contact = "not8digit".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    // Long enough for the length rule but no digit
    request.password = "abcdefghij".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "WEAK_PASSWORD");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.contact, register_req.contact);
    assert_eq!(user.last_name, register_req.last_name);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        contact: register_req.contact.clone(),
        password: "WrongPass999".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Unknown contact fails the same way
    let login_req = LoginRequest {
        contact: "00000000".to_string(),
        password: "WrongPass999".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Slot and Location Tests
// ============================================================================

#[tokio::test]
async fn test_list_slots_shows_seeded_slot() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let slot_id = server.seed_slot().await.unwrap();

    let response = server.get("/api/v1/slots").await.unwrap();
    let slots: Vec<SlotResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(slots.iter().any(|s| s.slot_id == slot_id && s.available));
}

#[tokio::test]
async fn test_get_slot_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/slots/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_locations_and_location_slots() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let location = format!("Loc{}", unique_suffix());
    let slot_id = server.seed_slot_at(&location).await.unwrap();

    let response = server.get("/api/v1/locations").await.unwrap();
    let locations: Vec<LocationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(locations.iter().any(|l| l.location == location));

    let response = server
        .get(&format!("/api/v1/locations/{location}/slots"))
        .await
        .unwrap();
    let slots: Vec<SlotResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(slots.iter().any(|s| s.slot_id == slot_id));
}

// ============================================================================
// Booking Flow Tests
// ============================================================================

#[tokio::test]
async fn test_full_booking_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let slot_id = server.seed_slot().await.unwrap();

    // Register
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user_id = created.user_id;

    // Book the slot
    let book_req = BookSlotRequest::from_register(&register_req);
    let response = server
        .post(&format!("/api/v1/slots/{slot_id}/bookings"), &book_req)
        .await
        .unwrap();
    let booking: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(booking.user_id, user_id);
    assert_eq!(booking.status, "booked");

    // Slot no longer listed as available
    let response = server.get(&format!("/api/v1/slots/{slot_id}")).await.unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!slot.available);

    // Dashboard shows the booking
    let response = server.get(&format!("/api/v1/users/{user_id}")).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.user.user_id, user_id);
    assert!(dashboard
        .bookings
        .iter()
        .any(|b| b.slot_id == slot_id && b.status == "booked"));

    // Cancel the booking
    let response = server
        .delete(&format!("/api/v1/users/{user_id}/bookings/{slot_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Slot is available again
    let response = server.get(&format!("/api/v1/slots/{slot_id}")).await.unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(slot.available);

    // Dashboard shows the booking as cancelled
    let response = server.get(&format!("/api/v1/users/{user_id}")).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(dashboard
        .bookings
        .iter()
        .any(|b| b.slot_id == slot_id && b.status == "cancelled"));
}

#[tokio::test]
async fn test_double_booking_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let slot_id = server.seed_slot().await.unwrap();

    let alice = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &alice).await.unwrap();
    let bob = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &bob).await.unwrap();

    // Alice books
    let response = server
        .post(
            &format!("/api/v1/slots/{slot_id}/bookings"),
            &BookSlotRequest::from_register(&alice),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Bob cannot book the same slot
    let response = server
        .post(
            &format!("/api/v1/slots/{slot_id}/bookings"),
            &BookSlotRequest::from_register(&bob),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "SLOT_UNAVAILABLE");
}

#[tokio::test]
async fn test_booking_with_bad_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let slot_id = server.seed_slot().await.unwrap();

    let book_req = BookSlotRequest {
        contact: "00000000".to_string(),
        password: "NotARealPass1".to_string(),
    };
    let response = server
        .post(&format!("/api/v1/slots/{slot_id}/bookings"), &book_req)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");

    // Slot untouched
    let response = server.get(&format!("/api/v1/slots/{slot_id}")).await.unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(slot.available);
}

#[tokio::test]
async fn test_cancel_without_booking() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let slot_id = server.seed_slot().await.unwrap();

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!(
            "/api/v1/users/{}/bookings/{slot_id}",
            created.user_id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user_id = created.user_id;

    // Update first name with correct old password
    let body = serde_json::json!({
        "first_name": "Renamed",
        "old_password": register_req.password,
    });
    let response = server.patch(&format!("/api/v1/users/{user_id}"), &body).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.first_name, "Renamed");
    assert_eq!(user.last_name, register_req.last_name);

    // Wrong old password is rejected
    let body = serde_json::json!({
        "first_name": "Again",
        "old_password": "WrongPass999",
    });
    let response = server.patch(&format!("/api/v1/users/{user_id}"), &body).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "WRONG_OLD_PASSWORD");
}

#[tokio::test]
async fn test_update_profile_changes_contact() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user_id = created.user_id;

    let new_contact = unique_contact();
    let body = serde_json::json!({
        "contact": new_contact,
        "old_password": register_req.password,
    });
    let response = server.patch(&format!("/api/v1/users/{user_id}"), &body).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.contact, new_contact);

    // The new contact is now the login identifier; the old one is gone
    let login_req = LoginRequest {
        contact: new_contact,
        password: register_req.password.clone(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_contact_collision() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let taken = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &taken).await.unwrap();

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({
        "contact": taken.contact,
        "old_password": register_req.password,
    });
    let response = server
        .patch(&format!("/api/v1/users/{}", created.user_id), &body)
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "CONTACT_ALREADY_REGISTERED");
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user_id = created.user_id;

    // Change password
    let body = serde_json::json!({
        "old_password": register_req.password,
        "new_password": "BrandNewPass1",
    });
    let response = server.patch(&format!("/api/v1/users/{user_id}"), &body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password no longer works
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // New password does
    let login_req = LoginRequest {
        contact: register_req.contact.clone(),
        password: "BrandNewPass1".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_dashboard_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_submit_feedback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "feedback": "Nets on court 3 need replacing" });

    let response = server.post("/api/v1/feedback", &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_submit_empty_feedback_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "feedback": "" });

    let response = server.post("/api/v1/feedback", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
