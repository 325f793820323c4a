//! 集成测试夹具
//!
//! 内存 SQLite + 真实迁移，两所学院的数据直接通过 ActiveModel 写入，
//! 学院 B 的数据用于验证查询不会跨学院泄漏。

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use college_admin::entity::{
    account_managers, attendance, classes, colleges, courses, exams, fee_structures, payments,
    results, student_fees, students, teachers, timetable, users,
};
use college_admin::storage::Storage;
use college_admin::storage::sea_orm_storage::SeaOrmStorage;
use college_admin::utils::jwt::JwtUtils;
use college_admin::utils::password::hash_password;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub const ADMIN_PASSWORD: &str = "Adm1nPassword";
pub const DAY: i64 = 86_400;

pub struct Fixture {
    pub db: SeaOrmStorage,
    pub storage: Arc<dyn Storage>,
    pub now: i64,

    pub college_a: i64,
    pub college_b: i64,
    pub admin_a: i64,
    pub admin_b: i64,
    pub teacher_a: i64,
    pub accountant_a: i64,
    // 学院 A 的三名学生：B.Sc 1-A ×2，M.Sc 2
    pub students_a: [i64; 3],
    pub student_b: i64,
    pub course_a: i64,
    pub class_a1: i64,
    pub class_a2: i64,
    pub class_b: i64,
    pub past_exam_a: i64,
    pub exam_b: i64,
    pub fee_structure_a: i64,
    pub fee_structure_b: i64,
    // paid / partial / unpaid
    pub fees_a: [i64; 3],
    pub fee_b: i64,
}

impl Fixture {
    pub async fn new() -> Self {
        let db = SeaOrmStorage::in_memory()
            .await
            .expect("in-memory storage");
        Self::seed(db).await
    }

    /// 文件 SQLite，连接池与默认配置一致，用于并发写入
    pub async fn on_disk(path: &Path) -> Self {
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let db = SeaOrmStorage::connect(&url, 10, 30)
            .await
            .expect("file storage");
        Self::seed(db).await
    }

    async fn seed(db: SeaOrmStorage) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(db.clone());
        let now = chrono::Utc::now().timestamp();
        let conn = db.connection().clone();

        let college_a = college(&conn, "447", "North Campus").await;
        let college_b = college(&conn, "900", "South Campus").await;

        let admin_hash = hash_password(ADMIN_PASSWORD).expect("hash");
        let admin_a = user(&conn, college_a, "Admin A", "admin@north.test", &admin_hash, "admin").await;
        let admin_b = user(&conn, college_b, "Admin B", "admin@south.test", "x", "admin").await;

        let teacher_a = user(&conn, college_a, "R. Iyer", "iyer@north.test", "x", "teacher").await;
        teachers::ActiveModel {
            user_id: Set(teacher_a),
            employee_id: Set("EMP-001".into()),
            department: Set("Physics".into()),
            designation: Set(Some("Lecturer".into())),
            qualification: Set(None),
            joining_date: Set(None),
            gender: Set(None),
            date_of_birth: Set(None),
        }
        .insert(&conn)
        .await
        .expect("teacher");

        let accountant_a =
            user(&conn, college_a, "K. Menon", "accounts@north.test", "x", "account_manager").await;
        account_managers::ActiveModel {
            user_id: Set(accountant_a),
            employee_id: Set(Some("ACC-001".into())),
            department: Set("Accounts".into()),
            reporting_to: Set(None),
        }
        .insert(&conn)
        .await
        .expect("account manager");

        let s1 = student(&conn, college_a, "Asha", "ENR-001", "B.Sc", 1, Some("A")).await;
        let s2 = student(&conn, college_a, "Bala", "ENR-002", "B.Sc", 1, Some("A")).await;
        let s3 = student(&conn, college_a, "Chitra", "ENR-003", "M.Sc", 2, None).await;
        let student_b = student(&conn, college_b, "Dev", "ENR-900", "B.Sc", 1, Some("A")).await;

        let course_a = course(&conn, college_a, "PHY101", "Physics").await;
        let maths_a = course(&conn, college_a, "MTH101", "Maths").await;
        let course_b = course(&conn, college_b, "CHM900", "Chemistry").await;

        let class_a1 = class(&conn, course_a, Some(teacher_a), 1, Some("A")).await;
        let class_a2 = class(&conn, maths_a, None, 2, None).await;
        let class_b = class(&conn, course_b, None, 1, Some("B")).await;

        let past_exam_a = exam(&conn, class_a1, "Physics Quiz", now - 10 * DAY).await;
        exam(&conn, class_a1, "Physics Midterm", now + 2 * DAY).await;
        exam(&conn, class_a2, "Maths Midterm", now + DAY).await;
        let exam_b = exam(&conn, class_b, "Chemistry Midterm", now + 3 * DAY).await;

        slot(&conn, class_a1, "Monday", "09:00", "10:00", Some("R1")).await;
        slot(&conn, class_a2, "Monday", "08:00", "09:00", None).await;
        slot(&conn, class_a1, "Tuesday", "11:00", "12:00", Some("R2")).await;
        slot(&conn, class_b, "Monday", "07:00", "08:00", Some("B1")).await;

        let fee_structure_a = fee_structure(&conn, college_a, "B.Sc", 1, 1000.0).await;
        let fee_structure_m = fee_structure(&conn, college_a, "M.Sc", 2, 2000.0).await;
        let fee_structure_b = fee_structure(&conn, college_b, "B.Sc", 1, 1500.0).await;

        let paid = student_fee(&conn, s1, fee_structure_a, 1000.0, 1000.0).await;
        let partial = student_fee(&conn, s2, fee_structure_a, 1000.0, 250.0).await;
        let unpaid = student_fee(&conn, s3, fee_structure_m, 2000.0, 0.0).await;
        let fee_b = student_fee(&conn, student_b, fee_structure_b, 1500.0, 100.0).await;

        payment(&conn, paid, 600.0, "upi", now - 5 * DAY).await;
        payment(&conn, paid, 400.0, "upi", now - 2 * DAY).await;
        payment(&conn, partial, 250.0, "upi", now - DAY).await;
        payment(&conn, fee_b, 100.0, "upi", now).await;

        mark(&conn, class_a1, s1, "present", now - 3 * DAY).await;
        mark(&conn, class_a1, s1, "late", now - 2 * DAY).await;
        mark(&conn, class_a1, s1, "absent", now - DAY).await;
        mark(&conn, class_a1, s2, "present", now - DAY).await;
        mark(&conn, class_b, student_b, "absent", now - DAY).await;

        result(&conn, past_exam_a, s1, 40.0, 50.0).await;
        result(&conn, past_exam_a, s2, 15.0, 50.0).await;

        Self {
            db,
            storage,
            now,
            college_a,
            college_b,
            admin_a,
            admin_b,
            teacher_a,
            accountant_a,
            students_a: [s1, s2, s3],
            student_b,
            course_a,
            class_a1,
            class_a2,
            class_b,
            past_exam_a,
            exam_b,
            fee_structure_a,
            fee_structure_b,
            fees_a: [paid, partial, unpaid],
            fee_b,
        }
    }

    /// 直接签发 token，避免登录接口的限流
    pub fn token(&self, user_id: i64, role: &str, college_id: i64) -> String {
        JwtUtils::generate_access_token(user_id, role, college_id).expect("token")
    }

    pub fn admin_a_token(&self) -> String {
        self.token(self.admin_a, "admin", self.college_a)
    }

    pub async fn add_exam(&self, class_id: i64, title: &str, at: i64) -> i64 {
        exam(self.db.connection(), class_id, title, at).await
    }

    pub async fn add_payment(&self, student_fee_id: i64, amount: f64, mode: &str, at: i64) {
        payment(self.db.connection(), student_fee_id, amount, mode, at).await
    }
}

async fn college(conn: &DatabaseConnection, code: &str, name: &str) -> i64 {
    colleges::ActiveModel {
        name: Set(Some(name.into())),
        college_code: Set(code.into()),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("college")
    .id
}

async fn user(
    conn: &DatabaseConnection,
    college_id: i64,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
) -> i64 {
    users::ActiveModel {
        name: Set(Some(name.into())),
        email: Set(email.into()),
        password_hash: Set(password_hash.into()),
        role: Set(role.into()),
        college_id: Set(college_id),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("user")
    .id
}

async fn student(
    conn: &DatabaseConnection,
    college_id: i64,
    name: &str,
    enrollment: &str,
    program: &str,
    year: i32,
    section: Option<&str>,
) -> i64 {
    let email = format!("{}@{}.test", name.to_lowercase(), college_id);
    let id = user(conn, college_id, name, &email, "x", "student").await;
    students::ActiveModel {
        user_id: Set(id),
        enrollment_number: Set(enrollment.into()),
        program: Set(program.into()),
        year_of_study: Set(year),
        section: Set(section.map(Into::into)),
        date_of_birth: Set(None),
        gender: Set(None),
        admission_date: Set(None),
    }
    .insert(conn)
    .await
    .expect("student");
    id
}

async fn course(conn: &DatabaseConnection, college_id: i64, code: &str, title: &str) -> i64 {
    courses::ActiveModel {
        course_code: Set(code.into()),
        title: Set(title.into()),
        college_id: Set(college_id),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("course")
    .id
}

async fn class(
    conn: &DatabaseConnection,
    course_id: i64,
    teacher_id: Option<i64>,
    year: i32,
    section: Option<&str>,
) -> i64 {
    classes::ActiveModel {
        course_id: Set(course_id),
        teacher_id: Set(teacher_id),
        year: Set(year),
        section: Set(section.map(Into::into)),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("class")
    .id
}

async fn exam(conn: &DatabaseConnection, class_id: i64, title: &str, at: i64) -> i64 {
    exams::ActiveModel {
        class_id: Set(class_id),
        title: Set(title.into()),
        exam_date: Set(at),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("exam")
    .id
}

async fn slot(
    conn: &DatabaseConnection,
    class_id: i64,
    day: &str,
    start: &str,
    end: &str,
    room: Option<&str>,
) {
    timetable::ActiveModel {
        class_id: Set(class_id),
        day_of_week: Set(day.into()),
        start_time: Set(start.into()),
        end_time: Set(end.into()),
        room: Set(room.map(Into::into)),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("timetable");
}

async fn fee_structure(
    conn: &DatabaseConnection,
    college_id: i64,
    program: &str,
    year: i32,
    total: f64,
) -> i64 {
    fee_structures::ActiveModel {
        college_id: Set(college_id),
        program: Set(program.into()),
        year: Set(year),
        semester: Set(1),
        total_amount: Set(total),
        due_date: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("fee structure")
    .id
}

async fn student_fee(
    conn: &DatabaseConnection,
    student_id: i64,
    fee_structure_id: i64,
    due: f64,
    paid: f64,
) -> i64 {
    student_fees::ActiveModel {
        student_id: Set(student_id),
        fee_structure_id: Set(fee_structure_id),
        amount_due: Set(due),
        amount_paid: Set(paid),
        last_payment_date: Set(None),
        remarks: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("student fee")
    .id
}

async fn payment(conn: &DatabaseConnection, student_fee_id: i64, amount: f64, mode: &str, at: i64) {
    payments::ActiveModel {
        student_fee_id: Set(student_fee_id),
        paid_by_staff_id: Set(None),
        payment_date: Set(at),
        amount: Set(amount),
        payment_mode: Set(mode.into()),
        receipt_number: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("payment");
}

async fn mark(conn: &DatabaseConnection, class_id: i64, student_id: i64, status: &str, at: i64) {
    attendance::ActiveModel {
        class_id: Set(class_id),
        student_id: Set(student_id),
        date: Set(at),
        status: Set(status.into()),
        notes: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("attendance");
}

async fn result(conn: &DatabaseConnection, exam_id: i64, student_id: i64, marks: f64, max: f64) {
    results::ActiveModel {
        exam_id: Set(exam_id),
        student_id: Set(student_id),
        marks_obtained: Set(marks),
        max_marks: Set(max),
        ..Default::default()
    }
    .insert(conn)
    .await
    .expect("result");
}
