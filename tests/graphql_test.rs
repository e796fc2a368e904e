//! GraphQL integration tests.
//!
//! The schema is executed against real services wired to mocked store
//! and media-host collaborators, so validation, response shaping, and
//! the service layer are exercised together.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use staffhub::domain::{Employee, NewEmployee, Password, User};
use staffhub::errors::AppError;
use staffhub::graphql::{build_schema, AppSchema};
use staffhub::infra::{MockEmployeeRepository, MockMediaHost, MockUserRepository};
use staffhub::services::{AuthService, Authenticator, EmployeeManager, EmployeeService};

const EID: &str = "00000000-0000-0000-0000-000000000001";

fn schema_with(
    users: MockUserRepository,
    employees: MockEmployeeRepository,
    media: MockMediaHost,
) -> AppSchema {
    let auth: Arc<dyn AuthService> = Arc::new(Authenticator::new(Arc::new(users)));
    let service: Arc<dyn EmployeeService> =
        Arc::new(EmployeeManager::new(Arc::new(employees), Arc::new(media)));
    build_schema(auth, service)
}

async fn execute(schema: &AppSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    serde_json::to_value(response.data).unwrap()
}

fn stored_employee(data: NewEmployee) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        gender: data.gender,
        designation: data.designation,
        salary: data.salary,
        date_of_joining: data.date_of_joining,
        department: data.department,
        employee_photo: data.employee_photo,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn signup_with_missing_fields_reports_every_violation() {
    // No store expectations: validation failures never reach it.
    let schema = schema_with(
        MockUserRepository::new(),
        MockEmployeeRepository::new(),
        MockMediaHost::new(),
    );

    let data = execute(
        &schema,
        r#"mutation {
            signup(input: { username: "", email: "", password: "" }) {
                success message errors { field message }
            }
        }"#,
    )
    .await;

    let signup = &data["signup"];
    assert_eq!(signup["success"], false);
    assert_eq!(signup["message"], "Validation failed");

    let fields: Vec<&str> = signup["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn duplicate_employee_email_is_reported_as_duplicate_value() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_create()
        .returning(|_| Err(AppError::Conflict("email".to_string())));

    let schema = schema_with(MockUserRepository::new(), employees, MockMediaHost::new());
    let data = execute(
        &schema,
        r#"mutation {
            addNewEmployee(input: {
                first_name: "Ada", last_name: "Lovelace",
                email: "ada@example.com", gender: "Female",
                designation: "Engineer", salary: 3500,
                date_of_joining: "2024-01-15", department: "R&D"
            }) {
                success message errors { field message }
            }
        }"#,
    )
    .await;

    let result = &data["addNewEmployee"];
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "Duplicate value");
    assert_eq!(result["errors"][0]["field"], "email");
    assert_eq!(result["errors"][0]["message"], "email already exists");
}

#[tokio::test]
async fn login_with_correct_credentials_returns_the_user() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_identifier().returning(|_| {
        Ok(Some(User {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: Password::new("secret123").unwrap().into_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }))
    });

    let schema = schema_with(users, MockEmployeeRepository::new(), MockMediaHost::new());
    let data = execute(
        &schema,
        r#"query {
            login(usernameOrEmail: "ada", password: "secret123") {
                success message user { username email } errors { field message }
            }
        }"#,
    )
    .await;

    let login = &data["login"];
    assert_eq!(login["success"], true);
    assert_eq!(login["message"], "Login successful");
    assert_eq!(login["user"]["username"], "ada");
    // The schema exposes no password field at all.
    assert!(login["user"].get("password").is_none());
}

#[tokio::test]
async fn login_with_unknown_identifier_is_user_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_identifier().returning(|_| Ok(None));

    let schema = schema_with(users, MockEmployeeRepository::new(), MockMediaHost::new());
    let data = execute(
        &schema,
        r#"query {
            login(usernameOrEmail: "nobody", password: "secret123") {
                success message user { username } errors { field message }
            }
        }"#,
    )
    .await;

    let login = &data["login"];
    assert_eq!(login["success"], false);
    assert_eq!(login["message"], "User not found");
    assert!(login["user"].is_null());
    assert_eq!(login["errors"][0]["field"], "usernameOrEmail");
}

#[tokio::test]
async fn update_with_low_salary_fails_without_touching_the_store() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_update().never();

    let schema = schema_with(MockUserRepository::new(), employees, MockMediaHost::new());
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateEmployeeByEid(eid: "{EID}", input: {{ salary: 500 }}) {{
                    success message errors {{ field message }}
                }}
            }}"#
        ),
    )
    .await;

    let result = &data["updateEmployeeByEid"];
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "Validation failed");
    assert_eq!(result["errors"][0]["field"], "salary");
}

#[tokio::test]
async fn delete_of_unknown_id_is_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_delete().returning(|_| Ok(false));

    let schema = schema_with(MockUserRepository::new(), employees, MockMediaHost::new());
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                deleteEmployeeByEid(eid: "{EID}") {{
                    success message errors {{ field message }}
                }}
            }}"#
        ),
    )
    .await;

    let result = &data["deleteEmployeeByEid"];
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "Employee not found");
    assert_eq!(result["errors"][0]["field"], "eid");
}

#[tokio::test]
async fn raw_photo_payload_is_stored_as_the_uploaded_url() {
    let mut media = MockMediaHost::new();
    media
        .expect_upload()
        .returning(|_| Ok("https://cdn.example.com/photo-9.jpg".to_string()));

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_create()
        .withf(|data| {
            data.employee_photo.as_deref() == Some("https://cdn.example.com/photo-9.jpg")
        })
        .returning(|data| Ok(stored_employee(data)));

    let schema = schema_with(MockUserRepository::new(), employees, media);
    let data = execute(
        &schema,
        r#"mutation {
            addNewEmployee(input: {
                first_name: "Ada", last_name: "Lovelace",
                email: "ada@example.com", gender: "Female",
                designation: "Engineer", salary: 3500,
                date_of_joining: "2024-01-15", department: "R&D",
                employee_photo: "iVBORw0KGgoAAAANSUhEUg"
            }) {
                success employee { employee_photo } errors { field message }
            }
        }"#,
    )
    .await;

    let result = &data["addNewEmployee"];
    assert_eq!(result["success"], true);
    assert_eq!(
        result["employee"]["employee_photo"],
        "https://cdn.example.com/photo-9.jpg"
    );
}

#[tokio::test]
async fn search_with_blank_filters_fails_without_querying_the_store() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_search().never();

    let schema = schema_with(MockUserRepository::new(), employees, MockMediaHost::new());
    let data = execute(
        &schema,
        r#"query {
            searchEmployeeByDesignationOrDepartment(designation: "  ", department: "") {
                success message employees { id } errors { field message }
            }
        }"#,
    )
    .await;

    let result = &data["searchEmployeeByDesignationOrDepartment"];
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "Validation failed");
    assert_eq!(result["errors"][0]["field"], "designation/department");
    assert!(result["employees"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn all_employees_are_listed_in_the_order_the_store_returns() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_list().returning(|| {
        let older = Employee {
            email: "old@example.com".to_string(),
            ..stored_employee(NewEmployee {
                first_name: "Old".to_string(),
                last_name: "Timer".to_string(),
                email: "old@example.com".to_string(),
                gender: staffhub::domain::Gender::Other,
                designation: "Clerk".to_string(),
                salary: 2000.0,
                date_of_joining: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
                department: "Ops".to_string(),
                employee_photo: None,
            })
        };
        let newer = Employee {
            email: "new@example.com".to_string(),
            ..older.clone()
        };
        // Repository contract: most recently created first.
        Ok(vec![newer, older])
    });

    let schema = schema_with(MockUserRepository::new(), employees, MockMediaHost::new());
    let data = execute(
        &schema,
        r#"query {
            getAllEmployees {
                success message employees { email }
            }
        }"#,
    )
    .await;

    let result = &data["getAllEmployees"];
    assert_eq!(result["success"], true);
    assert_eq!(result["employees"][0]["email"], "new@example.com");
    assert_eq!(result["employees"][1]["email"], "old@example.com");
}

#[tokio::test]
async fn unparseable_eid_behaves_as_not_found() {
    let schema = schema_with(
        MockUserRepository::new(),
        MockEmployeeRepository::new(),
        MockMediaHost::new(),
    );

    let data = execute(
        &schema,
        r#"query {
            searchEmployeeByEid(eid: "not-a-uuid") {
                success message errors { field message }
            }
        }"#,
    )
    .await;

    let result = &data["searchEmployeeByEid"];
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "Employee not found");
}
