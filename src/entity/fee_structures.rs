//! 收费标准实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_structures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub college_id: i64,
    pub program: String,
    pub year: i32,
    pub semester: i32,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
    pub due_date: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::colleges::Entity",
        from = "Column::CollegeId",
        to = "super::colleges::Column::Id",
        on_delete = "Cascade"
    )]
    College,
    #[sea_orm(has_many = "super::student_fees::Entity")]
    StudentFees,
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<super::student_fees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentFees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_structure(self) -> crate::models::fees::entities::FeeStructure {
        use super::opt_ts_to_datetime;
        use crate::models::fees::entities::FeeStructure;

        FeeStructure {
            id: self.id,
            program: self.program,
            year: self.year,
            semester: self.semester,
            total_amount: self.total_amount,
            due_date: opt_ts_to_datetime(self.due_date),
        }
    }
}
