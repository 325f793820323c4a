//! 缴费存储
//!
//! 学生缴费记录经 fee_structures.college_id 归属学院。
//! 缴费状态不落库，每次读取时由金额推导。

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{AccountManagers, FeeStructures, StudentFees, Students};
use crate::entity::{fee_structures, opt_ts_to_datetime, payments, student_fees, students, users};
use crate::errors::{CollegeError, Result};
use crate::models::fees::{
    entities::{FeeStatus, FeeStructure, Payment, StudentFeeRecord},
    requests::{
        AssignFeeRequest, CreateFeeStructureRequest, RecordPaymentRequest, UpdateStudentFeeRequest,
    },
};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};

#[derive(Debug, FromQueryResult)]
struct StudentFeeQueryRow {
    id: i64,
    student_id: i64,
    student_name: Option<String>,
    program: String,
    year_of_study: i32,
    fee_structure_id: i64,
    amount_due: f64,
    amount_paid: f64,
    last_payment_date: Option<i64>,
    remarks: Option<String>,
}

impl StudentFeeQueryRow {
    fn into_record(self) -> StudentFeeRecord {
        StudentFeeRecord {
            id: self.id,
            student_id: self.student_id,
            student_name: self.student_name.unwrap_or_default(),
            program: self.program,
            year_of_study: self.year_of_study,
            fee_structure_id: self.fee_structure_id,
            amount_due: self.amount_due,
            amount_paid: self.amount_paid,
            status: FeeStatus::from_amounts(self.amount_due, self.amount_paid),
            last_payment_date: opt_ts_to_datetime(self.last_payment_date),
            remarks: self.remarks,
        }
    }
}

fn student_fee_query(college_id: i64) -> Select<StudentFees> {
    StudentFees::find()
        .select_only()
        .column(student_fees::Column::Id)
        .column(student_fees::Column::StudentId)
        .column_as(users::Column::Name, "student_name")
        .column(students::Column::Program)
        .column(students::Column::YearOfStudy)
        .column(student_fees::Column::FeeStructureId)
        .column(student_fees::Column::AmountDue)
        .column(student_fees::Column::AmountPaid)
        .column(student_fees::Column::LastPaymentDate)
        .column(student_fees::Column::Remarks)
        .join(JoinType::InnerJoin, student_fees::Relation::FeeStructure.def())
        .join(JoinType::InnerJoin, student_fees::Relation::Student.def())
        .join(JoinType::InnerJoin, students::Relation::User.def())
        .filter(fee_structures::Column::CollegeId.eq(college_id))
}

/// 未填写收据号时生成 "RCPT-" 加 12 位随机串
fn generate_receipt_number() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("RCPT-{}", id[..12].to_uppercase())
}

impl SeaOrmStorage {
    /// 学生缴费记录，可按学生过滤
    pub async fn list_student_fees_impl(
        &self,
        college_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<StudentFeeRecord>> {
        let mut query = student_fee_query(college_id);
        if let Some(student_id) = student_id {
            query = query.filter(student_fees::Column::StudentId.eq(student_id));
        }

        let rows = query
            .order_by_asc(student_fees::Column::Id)
            .into_model::<StudentFeeQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询缴费记录失败"))?;

        Ok(rows.into_iter().map(StudentFeeQueryRow::into_record).collect())
    }

    async fn get_student_fee(&self, college_id: i64, id: i64) -> Result<Option<StudentFeeRecord>> {
        let row = student_fee_query(college_id)
            .filter(student_fees::Column::Id.eq(id))
            .into_model::<StudentFeeQueryRow>()
            .one(&self.db)
            .await
            .map_err(db_error("查询缴费记录失败"))?;

        Ok(row.map(StudentFeeQueryRow::into_record))
    }

    /// 记录一笔缴费
    ///
    /// 学院归属与经手人在事务外查询。事务内第一条语句即原子累加 amount_paid，
    /// SQLite 上事务一开始就持有写锁，并发缴费在 busy_timeout 内排队而不是读后升级失败。
    pub async fn record_payment_impl(
        &self,
        college_id: i64,
        staff_id: Option<i64>,
        req: RecordPaymentRequest,
    ) -> Result<Payment> {
        let fee_id = StudentFees::find_by_id(req.student_fee_id)
            .select_only()
            .column(student_fees::Column::Id)
            .join(JoinType::InnerJoin, student_fees::Relation::FeeStructure.def())
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .into_tuple::<i64>()
            .one(&self.db)
            .await
            .map_err(db_error("查询缴费记录失败"))?
            .ok_or_else(|| {
                CollegeError::not_found(format!("Fee record {} not found", req.student_fee_id))
            })?;

        // 只有财务人员才记录经手人
        let paid_by_staff_id = match staff_id {
            Some(id) => AccountManagers::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(db_error("查询财务人员失败"))?
                .map(|m| m.user_id),
            None => None,
        };

        let receipt_number = req
            .receipt_number
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(generate_receipt_number);

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let updated = StudentFees::update_many()
            .col_expr(
                student_fees::Column::AmountPaid,
                Expr::col(student_fees::Column::AmountPaid).add(req.amount),
            )
            .col_expr(student_fees::Column::LastPaymentDate, Expr::value(now))
            .filter(student_fees::Column::Id.eq(fee_id))
            .exec(&txn)
            .await
            .map_err(db_error("更新已缴金额失败"))?;
        if updated.rows_affected == 0 {
            return Err(CollegeError::not_found(format!(
                "Fee record {fee_id} not found"
            )));
        }

        let payment = payments::ActiveModel {
            student_fee_id: Set(fee_id),
            paid_by_staff_id: Set(paid_by_staff_id),
            payment_date: Set(now),
            amount: Set(req.amount),
            payment_mode: Set(req.payment_mode.to_string()),
            receipt_number: Set(Some(receipt_number)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("写入缴费记录失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(payment.into_payment())
    }

    pub async fn update_student_fee_impl(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentFeeRequest,
    ) -> Result<Option<StudentFeeRecord>> {
        if self.get_student_fee(college_id, id).await?.is_none() {
            return Ok(None);
        }

        let mut model = student_fees::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        if let Some(amount_due) = update.amount_due {
            model.amount_due = Set(amount_due);
        }
        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks));
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(db_error("更新缴费记录失败"))?;
        }

        self.get_student_fee(college_id, id).await
    }

    pub async fn list_fee_structures_impl(&self, college_id: i64) -> Result<Vec<FeeStructure>> {
        let rows = FeeStructures::find()
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .order_by_asc(fee_structures::Column::Program)
            .order_by_asc(fee_structures::Column::Year)
            .order_by_asc(fee_structures::Column::Semester)
            .all(&self.db)
            .await
            .map_err(db_error("查询收费标准失败"))?;

        Ok(rows.into_iter().map(|m| m.into_fee_structure()).collect())
    }

    pub async fn create_fee_structure_impl(
        &self,
        college_id: i64,
        req: CreateFeeStructureRequest,
    ) -> Result<FeeStructure> {
        let model = fee_structures::ActiveModel {
            college_id: Set(college_id),
            program: Set(req.program),
            year: Set(req.year),
            semester: Set(req.semester),
            total_amount: Set(req.total_amount),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建收费标准失败"))?;

        Ok(result.into_fee_structure())
    }

    /// 为学生分配收费标准，应缴金额取标准总额
    pub async fn assign_fee_impl(
        &self,
        college_id: i64,
        req: AssignFeeRequest,
    ) -> Result<StudentFeeRecord> {
        let structure = FeeStructures::find_by_id(req.fee_structure_id)
            .filter(fee_structures::Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询收费标准失败"))?
            .ok_or_else(|| {
                CollegeError::not_found(format!(
                    "Fee structure {} not found",
                    req.fee_structure_id
                ))
            })?;

        let student = Students::find_by_id(req.student_id)
            .join(JoinType::InnerJoin, students::Relation::User.def())
            .filter(users::Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;
        if student.is_none() {
            return Err(CollegeError::not_found(format!(
                "Student {} not found",
                req.student_id
            )));
        }

        let created = student_fees::ActiveModel {
            student_id: Set(req.student_id),
            fee_structure_id: Set(structure.id),
            amount_due: Set(structure.total_amount),
            amount_paid: Set(0.0),
            last_payment_date: Set(None),
            remarks: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_error("分配收费标准失败"))?;

        self.get_student_fee(college_id, created.id)
            .await?
            .ok_or_else(|| CollegeError::database_operation("分配后读取缴费记录失败"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_receipt_number_shape() {
        let receipt = generate_receipt_number();
        assert!(receipt.starts_with("RCPT-"));
        assert_eq!(receipt.len(), 17);
        assert!(receipt[5..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
