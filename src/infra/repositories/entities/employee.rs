//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Employee, Gender};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: Date,
    pub department: String,
    pub employee_photo: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity. Writes only ever store
/// validated gender spellings; anything else maps to `Other`.
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            gender: model.gender.parse().unwrap_or(Gender::Other),
            designation: model.designation,
            salary: model.salary,
            date_of_joining: model.date_of_joining,
            department: model.department,
            employee_photo: model.employee_photo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
