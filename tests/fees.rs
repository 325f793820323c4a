mod common;

use college_admin::models::fees::entities::{FeeStatus, PaymentMode};
use college_admin::models::fees::requests::{
    AssignFeeRequest, CreateFeeStructureRequest, RecordPaymentRequest, UpdateStudentFeeRequest,
};
use college_admin::storage::Storage;
use common::Fixture;

fn payment(student_fee_id: i64, amount: f64, receipt: Option<&str>) -> RecordPaymentRequest {
    RecordPaymentRequest {
        student_fee_id,
        amount,
        payment_mode: PaymentMode::Cash,
        receipt_number: receipt.map(Into::into),
    }
}

#[tokio::test]
async fn student_fee_records_carry_status() {
    let fx = Fixture::new().await;
    let records = fx.storage.list_student_fees(fx.college_a).await.unwrap();

    let statuses: Vec<_> = records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![FeeStatus::Paid, FeeStatus::Partial, FeeStatus::Unpaid]
    );
    assert_eq!(records[1].student_name, "Bala");
    assert!(records.iter().all(|r| r.id != fx.fee_b));
}

#[tokio::test]
async fn fees_for_student_are_filtered() {
    let fx = Fixture::new().await;

    let own = fx
        .storage
        .list_fees_for_student(fx.college_a, fx.students_a[2])
        .await
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].amount_due, 2000.0);

    let foreign = fx
        .storage
        .list_fees_for_student(fx.college_a, fx.student_b)
        .await
        .unwrap();
    assert!(foreign.is_empty());
}

#[tokio::test]
async fn payment_accumulates_and_changes_status() {
    let fx = Fixture::new().await;
    let unpaid = fx.fees_a[2];

    let first = fx
        .storage
        .record_payment(fx.college_a, None, payment(unpaid, 500.0, Some("R-100")))
        .await
        .unwrap();
    assert_eq!(first.receipt_number.as_deref(), Some("R-100"));
    assert_eq!(first.paid_by_staff_id, None);

    let record = &fx
        .storage
        .list_fees_for_student(fx.college_a, fx.students_a[2])
        .await
        .unwrap()[0];
    assert_eq!(record.amount_paid, 500.0);
    assert_eq!(record.status, FeeStatus::Partial);
    assert!(record.last_payment_date.is_some());

    fx.storage
        .record_payment(fx.college_a, None, payment(unpaid, 1500.0, None))
        .await
        .unwrap();
    let record = &fx
        .storage
        .list_fees_for_student(fx.college_a, fx.students_a[2])
        .await
        .unwrap()[0];
    assert_eq!(record.amount_paid, 2000.0);
    assert_eq!(record.status, FeeStatus::Paid);
}

#[tokio::test]
async fn payment_generates_receipt_when_blank() {
    let fx = Fixture::new().await;
    let paid = fx
        .storage
        .record_payment(fx.college_a, None, payment(fx.fees_a[1], 10.0, Some("  ")))
        .await
        .unwrap();

    let receipt = paid.receipt_number.unwrap();
    assert!(receipt.starts_with("RCPT-"));
    assert_eq!(receipt.len(), 17);
}

#[tokio::test]
async fn payment_records_staff_only_for_account_manager() {
    let fx = Fixture::new().await;

    let by_accountant = fx
        .storage
        .record_payment(
            fx.college_a,
            Some(fx.accountant_a),
            payment(fx.fees_a[1], 50.0, None),
        )
        .await
        .unwrap();
    assert_eq!(by_accountant.paid_by_staff_id, Some(fx.accountant_a));

    // 管理员没有 account_managers 记录
    let by_admin = fx
        .storage
        .record_payment(fx.college_a, Some(fx.admin_a), payment(fx.fees_a[1], 50.0, None))
        .await
        .unwrap();
    assert_eq!(by_admin.paid_by_staff_id, None);
}

#[tokio::test]
async fn payment_to_foreign_fee_is_not_found() {
    let fx = Fixture::new().await;

    let err = fx
        .storage
        .record_payment(fx.college_a, None, payment(fx.fee_b, 10.0, None))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // 学院 B 的记录未被修改
    let b = fx.storage.list_student_fees(fx.college_b).await.unwrap();
    assert_eq!(b[0].amount_paid, 100.0);
}

#[tokio::test]
async fn duplicate_receipt_is_conflict() {
    let fx = Fixture::new().await;

    fx.storage
        .record_payment(fx.college_a, None, payment(fx.fees_a[1], 10.0, Some("R-1")))
        .await
        .unwrap();
    let err = fx
        .storage
        .record_payment(fx.college_a, None, payment(fx.fees_a[2], 10.0, Some("R-1")))
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // 失败的缴费不应累加金额
    let record = &fx
        .storage
        .list_fees_for_student(fx.college_a, fx.students_a[2])
        .await
        .unwrap()[0];
    assert_eq!(record.amount_paid, 0.0);
}

#[tokio::test]
async fn update_student_fee_recomputes_status() {
    let fx = Fixture::new().await;

    let updated = fx
        .storage
        .update_student_fee(
            fx.college_a,
            fx.fees_a[1],
            UpdateStudentFeeRequest {
                amount_due: Some(250.0),
                remarks: Some("scholarship".into()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, FeeStatus::Paid);
    assert_eq!(updated.remarks.as_deref(), Some("scholarship"));

    let foreign = fx
        .storage
        .update_student_fee(fx.college_a, fx.fee_b, UpdateStudentFeeRequest::default())
        .await
        .unwrap();
    assert!(foreign.is_none());
}

#[tokio::test]
async fn fee_structures_create_and_assign() {
    let fx = Fixture::new().await;

    let structures = fx.storage.list_fee_structures(fx.college_a).await.unwrap();
    assert_eq!(structures.len(), 2);
    assert_eq!(structures[0].program, "B.Sc");

    let created = fx
        .storage
        .create_fee_structure(
            fx.college_a,
            CreateFeeStructureRequest {
                program: "B.Sc".into(),
                year: 1,
                semester: 2,
                total_amount: 1200.0,
                due_date: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(fx.storage.list_fee_structures(fx.college_a).await.unwrap().len(), 3);
    assert_eq!(fx.storage.list_fee_structures(fx.college_b).await.unwrap().len(), 1);

    let assigned = fx
        .storage
        .assign_fee(
            fx.college_a,
            AssignFeeRequest {
                student_id: fx.students_a[0],
                fee_structure_id: created.id,
            },
        )
        .await
        .unwrap();
    assert_eq!(assigned.amount_due, 1200.0);
    assert_eq!(assigned.amount_paid, 0.0);
    assert_eq!(assigned.status, FeeStatus::Unpaid);
    assert_eq!(assigned.student_name, "Asha");
}

#[tokio::test]
async fn assign_rejects_foreign_structure_or_student() {
    let fx = Fixture::new().await;

    let err = fx
        .storage
        .assign_fee(
            fx.college_a,
            AssignFeeRequest {
                student_id: fx.students_a[0],
                fee_structure_id: fx.fee_structure_b,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = fx
        .storage
        .assign_fee(
            fx.college_a,
            AssignFeeRequest {
                student_id: fx.student_b,
                fee_structure_id: fx.fee_structure_a,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_payments_on_file_database_all_land() {
    let dir = tempfile::tempdir().unwrap();
    let fx = Fixture::on_disk(&dir.path().join("college.db")).await;
    let unpaid = fx.fees_a[2];

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let storage = fx.storage.clone();
            let college = fx.college_a;
            tokio::spawn(async move {
                storage
                    .record_payment(college, None, payment(unpaid, 10.0, None))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = &fx
        .storage
        .list_fees_for_student(fx.college_a, fx.students_a[2])
        .await
        .unwrap()[0];
    assert_eq!(record.amount_paid, 100.0);
    assert_eq!(record.status, FeeStatus::Partial);

    let recent = fx.storage.recent_payments(fx.college_a, 20).await.unwrap();
    assert_eq!(recent.len(), 13);
}
