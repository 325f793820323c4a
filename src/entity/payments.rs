//! 缴费记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_fee_id: i64,
    pub paid_by_staff_id: Option<i64>,
    pub payment_date: i64,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub payment_mode: String,
    #[sea_orm(unique)]
    pub receipt_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_fees::Entity",
        from = "Column::StudentFeeId",
        to = "super::student_fees::Column::Id",
        on_delete = "Cascade"
    )]
    StudentFee,
    #[sea_orm(
        belongs_to = "super::account_managers::Entity",
        from = "Column::PaidByStaffId",
        to = "super::account_managers::Column::UserId",
        on_delete = "Cascade"
    )]
    AccountManager,
}

impl Related<super::student_fees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentFee.def()
    }
}

impl Related<super::account_managers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountManager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::fees::entities::Payment {
        use super::ts_to_datetime;
        use crate::models::fees::entities::{Payment, PaymentMode};

        Payment {
            id: self.id,
            student_fee_id: self.student_fee_id,
            paid_by_staff_id: self.paid_by_staff_id,
            payment_date: ts_to_datetime(self.payment_date),
            amount: self.amount,
            payment_mode: self
                .payment_mode
                .parse::<PaymentMode>()
                .unwrap_or(PaymentMode::Cash),
            receipt_number: self.receipt_number,
        }
    }
}
