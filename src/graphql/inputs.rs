//! GraphQL input objects and their validation rule sets.
//!
//! Rules are declared per field and evaluated before any collaborator
//! call; all failures are collected into the envelope's error list.
//! Field names follow the wire shape (snake_case).

use async_graphql::InputObject;
use chrono::NaiveDate;
use validator::Validate;

use crate::config::MIN_SALARY;
use crate::domain::{EmployeeUpdate, Gender, NewEmployee};
use crate::errors::{AppError, AppResult, FieldError};

pub(crate) const GENDER_MESSAGE: &str = "gender must be Male/Female/Other";
pub(crate) const SALARY_MESSAGE: &str = "salary must be >= 1000";

/// Collect every violated rule, in field declaration order.
fn collect_rule_errors<T: Validate>(input: &T, field_order: &[&str]) -> Vec<FieldError> {
    let Err(errors) = input.validate() else {
        return Vec::new();
    };

    let by_field = errors.field_errors();
    let mut out = Vec::new();
    for field in field_order {
        if let Some(violations) = by_field.get(*field) {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                out.push(FieldError::new(*field, message));
            }
        }
    }
    out
}

/// Signup rule set: username present, email present and well formed,
/// password at least six characters.
#[derive(Debug, InputObject, Validate)]
pub struct SignupInput {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be valid")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

impl SignupInput {
    const FIELD_ORDER: &'static [&'static str] = &["username", "email", "password"];

    pub fn check(&self) -> AppResult<()> {
        let errors = collect_rule_errors(self, Self::FIELD_ORDER);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Employee-create rule set. Gender membership is checked alongside the
/// declared rules so all failures are reported together.
#[derive(Debug, InputObject, Validate)]
#[graphql(rename_fields = "snake_case")]
pub struct EmployeeInput {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be valid")
    )]
    pub email: String,
    pub gender: String,
    #[validate(length(min = 1, message = "designation is required"))]
    pub designation: String,
    #[validate(range(min = 1000.0, message = "salary must be >= 1000"))]
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    pub employee_photo: Option<String>,
}

impl EmployeeInput {
    const FIELD_ORDER: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "designation",
        "salary",
        "department",
    ];

    /// Run the full rule set and convert into the domain type.
    pub fn into_validated(self) -> AppResult<NewEmployee> {
        let mut errors = collect_rule_errors(&self, Self::FIELD_ORDER);

        match self.gender.parse::<Gender>() {
            Ok(gender) if errors.is_empty() => Ok(NewEmployee {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                gender,
                designation: self.designation,
                salary: self.salary,
                date_of_joining: self.date_of_joining,
                department: self.department,
                employee_photo: self.employee_photo,
            }),
            Ok(_) => Err(AppError::Validation(errors)),
            Err(()) => {
                errors.push(FieldError::new("gender", GENDER_MESSAGE));
                Err(AppError::Validation(errors))
            }
        }
    }
}

/// Partial employee update. Only supplied fields are checked, and only
/// the gender-membership and salary-minimum rules apply; the remaining
/// fields pass through as-is (the create-side email-format rule is
/// deliberately not repeated here).
#[derive(Debug, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct EmployeeUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<NaiveDate>,
    pub department: Option<String>,
    pub employee_photo: Option<String>,
}

impl EmployeeUpdateInput {
    /// Inline partial validation, then conversion into the domain type.
    /// An empty photo string clears the stored photo.
    pub fn into_validated(self) -> AppResult<EmployeeUpdate> {
        let mut errors = Vec::new();

        let gender = match self.gender.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(()) => {
                    errors.push(FieldError::new("gender", GENDER_MESSAGE));
                    None
                }
            },
        };

        if let Some(salary) = self.salary {
            if salary < MIN_SALARY {
                errors.push(FieldError::new("salary", SALARY_MESSAGE));
            }
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(EmployeeUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            gender,
            designation: self.designation,
            salary: self.salary,
            date_of_joining: self.date_of_joining,
            department: self.department,
            employee_photo: self
                .employee_photo
                .map(|photo| if photo.is_empty() { None } else { Some(photo) }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee_input() -> EmployeeInput {
        EmployeeInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            gender: "Female".to_string(),
            designation: "Engineer".to_string(),
            salary: 5000.0,
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            department: "R&D".to_string(),
            employee_photo: None,
        }
    }

    #[test]
    fn signup_collects_an_error_per_missing_field() {
        let input = SignupInput {
            username: String::new(),
            email: String::new(),
            password: String::new(),
        };

        let err = input.check().unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn signup_rejects_short_password_and_bad_email() {
        let input = SignupInput {
            username: "ada".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let AppError::Validation(errors) = input.check().unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(errors
            .iter()
            .any(|e| e.field == "email" && e.message == "email must be valid"));
        assert!(errors.iter().any(
            |e| e.field == "password" && e.message == "password must be at least 6 characters"
        ));
    }

    #[test]
    fn employee_create_accepts_a_valid_record() {
        let employee = valid_employee_input().into_validated().unwrap();
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.salary, 5000.0);
    }

    #[test]
    fn employee_create_rejects_low_salary_and_bad_gender_together() {
        let mut input = valid_employee_input();
        input.salary = 500.0;
        input.gender = "unknown".to_string();

        let AppError::Validation(errors) = input.into_validated().unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(errors
            .iter()
            .any(|e| e.field == "salary" && e.message == SALARY_MESSAGE));
        assert!(errors
            .iter()
            .any(|e| e.field == "gender" && e.message == GENDER_MESSAGE));
    }

    #[test]
    fn update_checks_only_supplied_fields() {
        // Asymmetry with create is intentional: a malformed email is not
        // rejected on update, while salary and gender still are.
        let input = EmployeeUpdateInput {
            first_name: None,
            last_name: None,
            email: Some("not-an-email".to_string()),
            gender: None,
            designation: None,
            salary: Some(500.0),
            date_of_joining: None,
            department: None,
            employee_photo: None,
        };

        let AppError::Validation(errors) = input.into_validated().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors, vec![FieldError::new("salary", SALARY_MESSAGE)]);
    }

    #[test]
    fn update_empty_photo_clears_the_stored_value() {
        let input = EmployeeUpdateInput {
            first_name: None,
            last_name: None,
            email: None,
            gender: Some("Male".to_string()),
            designation: None,
            salary: None,
            date_of_joining: None,
            department: None,
            employee_photo: Some(String::new()),
        };

        let update = input.into_validated().unwrap();
        assert_eq!(update.gender, Some(Gender::Male));
        assert_eq!(update.employee_photo, Some(None));
    }
}
