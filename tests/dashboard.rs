mod common;

use chrono::Weekday;
use college_admin::models::dashboard::responses::{DashboardStats, FeeSummary};
use college_admin::models::fees::entities::PaymentMode;
use college_admin::storage::Storage;
use common::Fixture;

#[tokio::test]
async fn stats_are_scoped_to_college() {
    let fx = Fixture::new().await;

    let a = fx.storage.dashboard_stats(fx.college_a).await.unwrap();
    assert_eq!(
        a,
        DashboardStats {
            total_students: 3,
            total_teachers: 1,
            total_courses: 2,
            total_fees: 2,
        }
    );

    let b = fx.storage.dashboard_stats(fx.college_b).await.unwrap();
    assert_eq!(b.total_students, 1);
    assert_eq!(b.total_teachers, 0);
    assert_eq!(b.total_courses, 1);
    assert_eq!(b.total_fees, 1);
}

#[tokio::test]
async fn stats_for_empty_college_are_zero() {
    let fx = Fixture::new().await;
    let stats = fx.storage.dashboard_stats(9_999).await.unwrap();
    assert_eq!(stats.total_students, 0);
    assert_eq!(stats.total_fees, 0);
}

#[tokio::test]
async fn program_overview_groups_students() {
    let fx = Fixture::new().await;
    let rows = fx.storage.program_overview(fx.college_a).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].program, "B.Sc");
    assert_eq!(rows[0].year, 1);
    assert_eq!(rows[0].section.as_deref(), Some("A"));
    assert_eq!(rows[0].total_students, 2);
    assert_eq!(rows[1].program, "M.Sc");
    assert_eq!(rows[1].section, None);
    assert_eq!(rows[1].total_students, 1);
}

#[tokio::test]
async fn fee_summary_partitions_records() {
    let fx = Fixture::new().await;

    let a = fx.storage.fee_summary(fx.college_a).await.unwrap();
    assert_eq!(
        a,
        FeeSummary {
            paid_students: 1,
            partial_paid_students: 1,
            unpaid_students: 1,
        }
    );

    let b = fx.storage.fee_summary(fx.college_b).await.unwrap();
    assert_eq!(b.paid_students + b.partial_paid_students + b.unpaid_students, 1);
    assert_eq!(b.partial_paid_students, 1);
}

#[tokio::test]
async fn recent_payments_newest_first_with_limit() {
    let fx = Fixture::new().await;

    let all = fx.storage.recent_payments(fx.college_a, 20).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].payment_date >= w[1].payment_date));
    assert_eq!(all[0].student_name, "Bala");
    assert_eq!(all[0].paid_amount, 250.0);
    assert_eq!(all[0].payment_mode, PaymentMode::Upi);

    let limited = fx.storage.recent_payments(fx.college_a, 2).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[1].paid_amount, 400.0);
}

#[tokio::test]
async fn upcoming_exams_exclude_past_and_foreign() {
    let fx = Fixture::new().await;
    let exams = fx.storage.upcoming_exams(fx.college_a, fx.now).await.unwrap();

    let titles: Vec<_> = exams.iter().map(|e| e.exam.as_str()).collect();
    assert_eq!(titles, vec!["Maths Midterm", "Physics Midterm"]);
    assert_eq!(exams[0].course, "Maths");
    assert_eq!(exams[0].class, "2 - ");
    assert_eq!(exams[1].class, "1 - A");
    assert!(exams.iter().all(|e| e.exam_id != fx.exam_b));
}

#[tokio::test]
async fn upcoming_exams_exclude_exam_starting_now() {
    let fx = Fixture::new().await;
    fx.add_exam(fx.class_a1, "Physics Practical", fx.now).await;
    fx.add_exam(fx.class_a1, "Physics Lab", fx.now + 1).await;

    let exams = fx.storage.upcoming_exams(fx.college_a, fx.now).await.unwrap();
    let titles: Vec<_> = exams.iter().map(|e| e.exam.as_str()).collect();
    assert_eq!(titles, vec!["Physics Lab", "Maths Midterm", "Physics Midterm"]);
}

#[tokio::test]
async fn recent_payments_skip_unknown_mode() {
    let fx = Fixture::new().await;
    fx.add_payment(fx.fees_a[1], 75.0, "barter", fx.now).await;

    let recent = fx.storage.recent_payments(fx.college_a, 20).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert!(recent.iter().all(|p| p.paid_amount != 75.0));
    assert_eq!(recent[0].student_name, "Bala");
}

#[tokio::test]
async fn classes_for_day_sorted_by_start_time() {
    let fx = Fixture::new().await;

    let monday = fx
        .storage
        .classes_for_day(fx.college_a, Weekday::Mon)
        .await
        .unwrap();
    let starts: Vec<_> = monday.iter().map(|c| c.start_time.as_str()).collect();
    assert_eq!(starts, vec!["08:00", "09:00"]);
    assert_eq!(monday[0].course_title, "Maths");
    assert_eq!(monday[1].room.as_deref(), Some("R1"));

    let tuesday = fx
        .storage
        .classes_for_day(fx.college_a, Weekday::Tue)
        .await
        .unwrap();
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].room.as_deref(), Some("R2"));
}

#[tokio::test]
async fn no_classes_on_sunday() {
    let fx = Fixture::new().await;
    let sunday = fx
        .storage
        .classes_for_day(fx.college_a, Weekday::Sun)
        .await
        .unwrap();
    assert!(sunday.is_empty());
}
