use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_college_tables::{Colleges, Students, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建财务人员表（以 user_id 为主键）
        manager
            .create_table(
                Table::create()
                    .table(AccountManagers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountManagers::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccountManagers::EmployeeId)
                            .string_len(100)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AccountManagers::Department)
                            .string()
                            .not_null()
                            .default("Accounts"),
                    )
                    .col(ColumnDef::new(AccountManagers::ReportingTo).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AccountManagers::Table, AccountManagers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AccountManagers::Table, AccountManagers::ReportingTo)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建收费标准表
        manager
            .create_table(
                Table::create()
                    .table(FeeStructures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeStructures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeeStructures::CollegeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeStructures::Program).string().not_null())
                    .col(ColumnDef::new(FeeStructures::Year).integer().not_null())
                    .col(ColumnDef::new(FeeStructures::Semester).integer().not_null())
                    .col(
                        ColumnDef::new(FeeStructures::TotalAmount)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeStructures::DueDate).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeeStructures::Table, FeeStructures::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生缴费表
        // 缴费状态由 amount_due / amount_paid 推导，不单独存储
        manager
            .create_table(
                Table::create()
                    .table(StudentFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentFees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentFees::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(StudentFees::FeeStructureId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentFees::AmountDue).double().not_null())
                    .col(
                        ColumnDef::new(StudentFees::AmountPaid)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(StudentFees::LastPaymentDate)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentFees::Remarks).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentFees::Table, StudentFees::StudentId)
                            .to(Students::Table, Students::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentFees::Table, StudentFees::FeeStructureId)
                            .to(FeeStructures::Table, FeeStructures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缴费记录表
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::StudentFeeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::PaidByStaffId).big_integer().null())
                    .col(ColumnDef::new(Payments::PaymentDate).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::PaymentMode).string().not_null())
                    .col(
                        ColumnDef::new(Payments::ReceiptNumber)
                            .string_len(100)
                            .null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::StudentFeeId)
                            .to(StudentFees::Table, StudentFees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::PaidByStaffId)
                            .to(AccountManagers::Table, AccountManagers::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_payment_date")
                    .table(Payments::Table)
                    .col(Payments::PaymentDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentFees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeStructures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountManagers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountManagers {
    #[sea_orm(iden = "account_managers")]
    Table,
    UserId,
    EmployeeId,
    Department,
    ReportingTo,
}

#[derive(DeriveIden)]
enum FeeStructures {
    #[sea_orm(iden = "fee_structures")]
    Table,
    Id,
    CollegeId,
    Program,
    Year,
    Semester,
    TotalAmount,
    DueDate,
}

#[derive(DeriveIden)]
enum StudentFees {
    #[sea_orm(iden = "student_fees")]
    Table,
    Id,
    StudentId,
    FeeStructureId,
    AmountDue,
    AmountPaid,
    LastPaymentDate,
    Remarks,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    StudentFeeId,
    PaidByStaffId,
    PaymentDate,
    Amount,
    PaymentMode,
    ReceiptNumber,
}
