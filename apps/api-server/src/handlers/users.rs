//! User handlers - the controller layer.
//!
//! ```text
//! GET  /users/all
//! GET  /users/{id}
//! POST /users/new {"first_name":"John","last_name":"Doe","email":"johndoe@gmail.com","password":"johnDoe"}
//! ```

use actix_web::{Either, HttpResponse, web};

use roster_core::domain::User;
use roster_shared::dto::{CreateUserRequest, SingleUserResponse, UserListResponse, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Public view of a user. Drops the password hash and revision counter.
fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    }
}

/// GET /users/all
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    Ok(HttpResponse::Ok().json(UserListResponse {
        users: users.into_iter().map(to_response).collect(),
    }))
}

/// GET /users/{id}
///
/// An unknown ID is not an error: the body is `{"user": null}`.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = state.users.find_by_id(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SingleUserResponse {
        user: user.map(to_response),
    }))
}

/// POST /users/new
pub async fn create_user(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: Either<web::Json<CreateUserRequest>, web::Form<CreateUserRequest>>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Argon2 is CPU-bound; keep it off the worker's event loop.
    let passwords = state.passwords.clone();
    let password = req.password;
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("password hashing task failed: {}", e)))??;

    let user = User::new(req.first_name, req.last_name, req.email, password_hash);
    let saved_user = state.users.create(user).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        user_id = %saved_user.id,
        "User created"
    );

    Ok(HttpResponse::Created().json(SingleUserResponse {
        user: Some(to_response(saved_user)),
    }))
}
