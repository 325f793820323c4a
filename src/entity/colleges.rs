//! 学院实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "colleges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub college_code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::fee_structures::Entity")]
    FeeStructures,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::fee_structures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeStructures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_college(self) -> crate::models::colleges::entities::College {
        use super::ts_to_datetime;
        use crate::models::colleges::entities::College;

        College {
            id: self.id,
            name: self.name,
            college_code: self.college_code,
            address: self.address,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            created_at: ts_to_datetime(self.created_at),
            updated_at: ts_to_datetime(self.updated_at),
        }
    }
}
