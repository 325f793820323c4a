//! 学生缴费实体
//!
//! 缴费状态不落库，由 amount_due 与 amount_paid 推导。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub fee_structure_id: i64,
    #[sea_orm(column_type = "Double")]
    pub amount_due: f64,
    #[sea_orm(column_type = "Double")]
    pub amount_paid: f64,
    pub last_payment_date: Option<i64>,
    pub remarks: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::UserId",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::fee_structures::Entity",
        from = "Column::FeeStructureId",
        to = "super::fee_structures::Column::Id",
        on_delete = "Cascade"
    )]
    FeeStructure,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::fee_structures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeStructure.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn status(&self) -> crate::models::fees::entities::FeeStatus {
        crate::models::fees::entities::FeeStatus::from_amounts(self.amount_due, self.amount_paid)
    }
}
