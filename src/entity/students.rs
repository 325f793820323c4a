//! 学生实体（以 user_id 为主键）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub enrollment_number: String,
    pub program: String,
    pub year_of_study: i32,
    pub section: Option<String>,
    pub date_of_birth: Option<i64>,
    pub gender: Option<String>,
    pub admission_date: Option<i64>,
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
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::student_fees::Entity")]
    StudentFees,
    #[sea_orm(has_many = "super::results::Entity")]
    Results,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::student_fees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentFees.def()
    }
}

impl Related<super::results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 与所属用户合并为业务模型
    pub fn into_student(
        self,
        user: super::users::Model,
    ) -> crate::models::students::entities::Student {
        use super::opt_ts_to_datetime;
        use crate::models::students::entities::Student;
        use crate::models::users::entities::Gender;

        Student {
            id: self.user_id,
            name: user.name.unwrap_or_default(),
            email: user.email,
            enrollment_number: self.enrollment_number,
            program: self.program,
            year_of_study: self.year_of_study,
            section: self.section,
            date_of_birth: opt_ts_to_datetime(self.date_of_birth),
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            admission_date: opt_ts_to_datetime(self.admission_date),
        }
    }
}
