//! 教师实体（以 user_id 为主键）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub department: String,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<i64>,
    pub gender: Option<String>,
    pub date_of_birth: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::classes::Entity")]
    Classes,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(
        self,
        user: super::users::Model,
    ) -> crate::models::teachers::entities::Teacher {
        use super::opt_ts_to_datetime;
        use crate::models::teachers::entities::Teacher;
        use crate::models::users::entities::Gender;

        Teacher {
            id: self.user_id,
            name: user.name.unwrap_or_default(),
            email: user.email,
            employee_id: self.employee_id,
            department: self.department,
            designation: self.designation,
            qualification: self.qualification,
            joining_date: opt_ts_to_datetime(self.joining_date),
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            date_of_birth: opt_ts_to_datetime(self.date_of_birth),
        }
    }
}
