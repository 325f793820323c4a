mod common;

use chrono::{TimeZone, Utc};
use college_admin::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use college_admin::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use college_admin::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use college_admin::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use college_admin::models::users::entities::Gender;
use college_admin::storage::Storage;
use common::Fixture;

fn new_student(email: &str, enrollment: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: "Esha".into(),
        email: email.into(),
        password: "hashed".into(),
        enrollment_number: enrollment.into(),
        program: "B.Com".into(),
        year_of_study: 3,
        section: Some("C".into()),
        date_of_birth: None,
        gender: Some(Gender::Female),
        admission_date: None,
    }
}

#[tokio::test]
async fn students_listed_per_college() {
    let fx = Fixture::new().await;

    let a = fx.storage.list_students(fx.college_a).await.unwrap();
    let ids: Vec<_> = a.iter().map(|s| s.id).collect();
    assert_eq!(ids, fx.students_a.to_vec());

    let b = fx.storage.list_students(fx.college_b).await.unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].id, fx.student_b);
}

#[tokio::test]
async fn foreign_student_is_invisible() {
    let fx = Fixture::new().await;

    let found = fx.storage.get_student(fx.college_a, fx.student_b).await.unwrap();
    assert!(found.is_none());

    let deleted = fx.storage.delete_student(fx.college_a, fx.student_b).await.unwrap();
    assert!(!deleted);
    assert!(
        fx.storage
            .get_student(fx.college_b, fx.student_b)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn create_update_delete_student() {
    let fx = Fixture::new().await;

    let created = fx
        .storage
        .create_student(fx.college_a, new_student("esha@north.test", "ENR-010"))
        .await
        .unwrap();
    assert_eq!(created.email, "esha@north.test");
    assert_eq!(created.gender, Some(Gender::Female));

    let user = fx.storage.get_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(user.college_id, fx.college_a);

    let updated = fx
        .storage
        .update_student(
            fx.college_a,
            created.id,
            UpdateStudentRequest {
                name: Some("Esha R".into()),
                year_of_study: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Esha R");
    assert_eq!(updated.year_of_study, 4);
    // 未提供的字段保持不变
    assert_eq!(updated.program, "B.Com");
    assert_eq!(updated.section.as_deref(), Some("C"));

    assert!(fx.storage.delete_student(fx.college_a, created.id).await.unwrap());
    assert!(fx.storage.get_user_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_student_is_conflict_and_rolled_back() {
    let fx = Fixture::new().await;

    // 学号重复：users 行已写入，但事务回滚后不应残留
    let err = fx
        .storage
        .create_student(fx.college_a, new_student("fresh@north.test", "ENR-001"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(
        fx.storage
            .get_user_by_email("fresh@north.test")
            .await
            .unwrap()
            .is_none()
    );

    let err = fx
        .storage
        .create_student(fx.college_a, new_student("admin@north.test", "ENR-011"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn update_missing_student_returns_none() {
    let fx = Fixture::new().await;
    let result = fx
        .storage
        .update_student(fx.college_b, fx.students_a[0], UpdateStudentRequest::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn teacher_lifecycle() {
    let fx = Fixture::new().await;

    let list = fx.storage.list_teachers(fx.college_a).await.unwrap();
    assert_eq!(list.len(), 1);
    assert!(fx.storage.list_teachers(fx.college_b).await.unwrap().is_empty());

    let created = fx
        .storage
        .create_teacher(
            fx.college_b,
            CreateTeacherRequest {
                name: "S. Rao".into(),
                email: "rao@south.test".into(),
                password: "hashed".into(),
                employee_id: "EMP-900".into(),
                department: "Chemistry".into(),
                designation: None,
                qualification: Some("PhD".into()),
                joining_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
                gender: None,
                date_of_birth: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.department, "Chemistry");

    let updated = fx
        .storage
        .update_teacher(
            fx.college_b,
            created.id,
            UpdateTeacherRequest {
                designation: Some("Professor".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.designation.as_deref(), Some("Professor"));
    assert_eq!(updated.qualification.as_deref(), Some("PhD"));

    // 其他学院无法删除
    assert!(!fx.storage.delete_teacher(fx.college_a, created.id).await.unwrap());
    assert!(fx.storage.delete_teacher(fx.college_b, created.id).await.unwrap());
    assert!(fx.storage.get_teacher(fx.college_b, created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn course_lifecycle() {
    let fx = Fixture::new().await;

    let codes: Vec<_> = fx
        .storage
        .list_courses(fx.college_a)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.course_code)
        .collect();
    assert_eq!(codes, vec!["MTH101", "PHY101"]);

    let created = fx
        .storage
        .create_course(
            fx.college_a,
            CreateCourseRequest {
                course_code: "BIO101".into(),
                title: "Biology".into(),
                description: None,
                department: Some("Life Sciences".into()),
                semester: Some(1),
            },
        )
        .await
        .unwrap();

    let err = fx
        .storage
        .create_course(
            fx.college_a,
            CreateCourseRequest {
                course_code: "BIO101".into(),
                title: "Biology again".into(),
                description: None,
                department: None,
                semester: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let updated = fx
        .storage
        .update_course(
            fx.college_a,
            created.id,
            UpdateCourseRequest {
                title: Some("Cell Biology".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Cell Biology");
    assert_eq!(updated.semester, Some(1));

    assert!(
        fx.storage
            .update_course(fx.college_b, created.id, UpdateCourseRequest::default())
            .await
            .unwrap()
            .is_none()
    );
    assert!(!fx.storage.delete_course(fx.college_b, created.id).await.unwrap());
    assert!(fx.storage.delete_course(fx.college_a, created.id).await.unwrap());
}

#[tokio::test]
async fn exam_requires_class_of_same_college() {
    let fx = Fixture::new().await;
    let at = Utc.with_ymd_and_hms(2030, 3, 1, 9, 0, 0).unwrap();

    let err = fx
        .storage
        .create_exam(
            fx.college_a,
            CreateExamRequest {
                class_id: fx.class_b,
                title: "Sneaky".into(),
                exam_date: at,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let exam = fx
        .storage
        .create_exam(
            fx.college_a,
            CreateExamRequest {
                class_id: fx.class_a1,
                title: "Physics Final".into(),
                exam_date: at,
            },
        )
        .await
        .unwrap();
    assert_eq!(exam.course_title, "Physics");
    assert_eq!(exam.class_label, "1 - A");
    assert_eq!(exam.exam_date, at);

    let err = fx
        .storage
        .update_exam(
            fx.college_a,
            exam.id,
            UpdateExamRequest {
                class_id: Some(fx.class_b),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let moved = fx
        .storage
        .update_exam(
            fx.college_a,
            exam.id,
            UpdateExamRequest {
                class_id: Some(fx.class_a2),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.course_title, "Maths");
    assert_eq!(moved.title, "Physics Final");

    assert!(fx.storage.get_exam(fx.college_b, exam.id).await.unwrap().is_none());
    assert!(fx.storage.delete_exam(fx.college_a, exam.id).await.unwrap());
}

#[tokio::test]
async fn exams_listed_by_date() {
    let fx = Fixture::new().await;
    let exams = fx.storage.list_exams(fx.college_a).await.unwrap();
    assert_eq!(exams.len(), 3);
    assert_eq!(exams[0].id, fx.past_exam_a);
    assert!(exams.windows(2).all(|w| w[0].exam_date <= w[1].exam_date));
    assert!(exams.iter().all(|e| e.id != fx.exam_b));
}
