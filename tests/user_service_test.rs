//! User service unit tests.
//!
//! The user service is exercised with a mocked user repository and a real
//! RoleManager wired over a mocked role repository, so role resolution
//! follows the same path it does in production.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use user_admin_api::domain::{CreateUserRequest, ReplaceUserRequest, Role, User};
use user_admin_api::errors::AppError;
use user_admin_api::infra::{MockRoleRepository, MockUserRepository};
use user_admin_api::services::{RoleManager, UserManager, UserService};

fn sample_role(id: Uuid, name: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        permissions: vec!["READ".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_user(id: Uuid, username: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        password: "pw1".to_string(),
        full_name: "Alice Anderson".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(users: MockUserRepository, roles: MockRoleRepository) -> UserManager {
    UserManager::new(
        Arc::new(users),
        Arc::new(RoleManager::new(Arc::new(roles))),
    )
}

#[tokio::test]
async fn test_create_user_success() {
    let role_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .with(eq("alice"))
        .returning(|_| Ok(None));
    users
        .expect_exists_by_full_name()
        .with(eq("Alice Anderson"))
        .returning(|_| Ok(false));
    users
        .expect_insert()
        .withf(|username, password, full_name, role| {
            username == "alice" && password == "pw1" && full_name == "Alice Anderson"
                && role.name == "ADMIN"
        })
        .returning(|username, _, _, role| Ok(sample_user(Uuid::new_v4(), &username, role)));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_find_by_id()
        .with(eq(role_id))
        .returning(|id| Ok(Some(sample_role(id, "ADMIN"))));

    let result = service(users, roles)
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "Alice Anderson".to_string(),
            role_id,
        })
        .await;

    let user = result.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role.name, "ADMIN");
}

#[tokio::test]
async fn test_create_user_duplicate_username_checked_before_role_resolution() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|username| {
        Ok(Some(sample_user(
            Uuid::new_v4(),
            username,
            sample_role(Uuid::new_v4(), "ADMIN"),
        )))
    });

    // No expectations on the role repository: it must never be consulted
    let roles = MockRoleRepository::new();

    let result = service(users, roles)
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "Alice Anderson".to_string(),
            role_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_create_user_blank_full_name_rejected() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));

    let result = service(users, MockRoleRepository::new())
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "   ".to_string(),
            role_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_create_user_duplicate_full_name_rejected() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));
    users.expect_exists_by_full_name().returning(|_| Ok(true));

    let result = service(users, MockRoleRepository::new())
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "Alice Anderson".to_string(),
            role_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_create_user_unknown_role_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));
    users.expect_exists_by_full_name().returning(|_| Ok(false));

    let mut roles = MockRoleRepository::new();
    roles.expect_find_by_id().returning(|_| Ok(None));

    let result = service(users, roles)
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "Alice Anderson".to_string(),
            role_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_create_user_storage_conflict_surfaces_as_conflict() {
    let role_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));
    users.expect_exists_by_full_name().returning(|_| Ok(false));
    users
        .expect_insert()
        .returning(|_, _, _, _| Err(AppError::conflict("User")));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_role(id, "ADMIN"))));

    let result = service(users, roles)
        .create_user(CreateUserRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            full_name: "Alice Anderson".to_string(),
            role_id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_get_user_absent_is_none() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let result = service(users, MockRoleRepository::new())
        .get_user(Uuid::new_v4())
        .await;

    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_id().with(eq(user_id)).returning(|id| {
        Ok(Some(sample_user(
            id,
            "alice",
            sample_role(Uuid::new_v4(), "ADMIN"),
        )))
    });

    let result = service(users, MockRoleRepository::new())
        .get_user(user_id)
        .await;

    assert_eq!(result.unwrap().unwrap().id, user_id);
}

#[tokio::test]
async fn test_replace_user_absent_is_none() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    // Role resolution must not happen for a missing user
    let roles = MockRoleRepository::new();

    let result = service(users, roles)
        .replace_user(
            Uuid::new_v4(),
            ReplaceUserRequest {
                username: "bob".to_string(),
                password: "pw2".to_string(),
                full_name: "Bob Brown".to_string(),
                role_id: Uuid::new_v4(),
            },
        )
        .await;

    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_user_keeps_path_id() {
    let user_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_id().with(eq(user_id)).returning(|id| {
        Ok(Some(sample_user(
            id,
            "alice",
            sample_role(Uuid::new_v4(), "ADMIN"),
        )))
    });
    users
        .expect_update()
        .withf(move |user| user.id == user_id && user.username == "bob")
        .returning(|user| Ok(user));

    let mut roles = MockRoleRepository::new();
    roles
        .expect_find_by_id()
        .with(eq(role_id))
        .returning(|id| Ok(Some(sample_role(id, "VIEWER"))));

    let result = service(users, roles)
        .replace_user(
            user_id,
            ReplaceUserRequest {
                username: "bob".to_string(),
                password: "pw2".to_string(),
                full_name: "Bob Brown".to_string(),
                role_id,
            },
        )
        .await;

    let user = result.unwrap().unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "bob");
    assert_eq!(user.role.name, "VIEWER");
}

#[tokio::test]
async fn test_delete_user_absent_returns_false() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let result = service(users, MockRoleRepository::new())
        .delete_user(Uuid::new_v4())
        .await;

    assert!(!result.unwrap());
}

#[tokio::test]
async fn test_delete_user_success_returns_true() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_id().with(eq(user_id)).returning(|id| {
        Ok(Some(sample_user(
            id,
            "alice",
            sample_role(Uuid::new_v4(), "ADMIN"),
        )))
    });
    users.expect_delete().with(eq(user_id)).returning(|_| Ok(()));

    let result = service(users, MockRoleRepository::new())
        .delete_user(user_id)
        .await;

    assert!(result.unwrap());
}

#[tokio::test]
async fn test_list_users() {
    let mut users = MockUserRepository::new();
    users.expect_list().returning(|| {
        Ok(vec![
            sample_user(Uuid::new_v4(), "alice", sample_role(Uuid::new_v4(), "ADMIN")),
            sample_user(Uuid::new_v4(), "bob", sample_role(Uuid::new_v4(), "VIEWER")),
        ])
    });

    let result = service(users, MockRoleRepository::new()).list_users().await;

    let list = result.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].username, "bob");
}
