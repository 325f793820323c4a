//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod colleges;
mod courses;
mod dashboard;
mod exams;
mod fees;
mod reports;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{CollegeError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// 数据库错误附带上下文；唯一约束冲突保持为 Conflict
pub(crate) fn db_error(context: &'static str) -> impl Fn(DbErr) -> CollegeError {
    move |e| match CollegeError::from(e) {
        CollegeError::DatabaseOperation(msg) => {
            CollegeError::database_operation(format!("{context}: {msg}"))
        }
        other => other,
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CollegeError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite，主要用于测试
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1, 30).await
    }

    /// 底层连接，供初始化数据或测试夹具直接写表
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CollegeError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存库每个连接都是独立的数据库，只能保留一个常驻连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| CollegeError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CollegeError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CollegeError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    colleges::{entities::College, requests::CreateCollegeRequest},
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    dashboard::responses::{
        DashboardStats, FeeSummary, ProgramOverviewRow, RecentPayment, TodayClass, UpcomingExam,
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, UpdateExamRequest},
    },
    fees::{
        entities::{FeeStructure, Payment, StudentFeeRecord},
        requests::{
            AssignFeeRequest, CreateFeeStructureRequest, RecordPaymentRequest,
            UpdateStudentFeeRequest,
        },
    },
    reports::responses::{AttendanceReportRow, FeeReportRow, ResultReportRow},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::Weekday;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户与学院
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_college(&self, college: CreateCollegeRequest) -> Result<College> {
        self.create_college_impl(college).await
    }

    async fn list_colleges(&self) -> Result<Vec<College>> {
        self.list_colleges_impl().await
    }

    async fn get_college_by_id(&self, id: i64) -> Result<Option<College>> {
        self.get_college_by_id_impl(id).await
    }

    async fn get_college_by_code(&self, code: &str) -> Result<Option<College>> {
        self.get_college_by_code_impl(code).await
    }

    // 首页统计
    async fn dashboard_stats(&self, college_id: i64) -> Result<DashboardStats> {
        self.dashboard_stats_impl(college_id).await
    }

    async fn program_overview(&self, college_id: i64) -> Result<Vec<ProgramOverviewRow>> {
        self.program_overview_impl(college_id).await
    }

    async fn fee_summary(&self, college_id: i64) -> Result<FeeSummary> {
        self.fee_summary_impl(college_id).await
    }

    async fn recent_payments(&self, college_id: i64, limit: u64) -> Result<Vec<RecentPayment>> {
        self.recent_payments_impl(college_id, limit).await
    }

    async fn upcoming_exams(&self, college_id: i64, now: i64) -> Result<Vec<UpcomingExam>> {
        self.upcoming_exams_impl(college_id, now).await
    }

    async fn classes_for_day(&self, college_id: i64, weekday: Weekday) -> Result<Vec<TodayClass>> {
        self.classes_for_day_impl(college_id, weekday).await
    }

    // 学生模块
    async fn list_students(&self, college_id: i64) -> Result<Vec<Student>> {
        self.list_students_impl(college_id).await
    }

    async fn get_student(&self, college_id: i64, id: i64) -> Result<Option<Student>> {
        self.get_student_impl(college_id, id).await
    }

    async fn create_student(&self, college_id: i64, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(college_id, req).await
    }

    async fn update_student(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(college_id, id, update).await
    }

    async fn delete_student(&self, college_id: i64, id: i64) -> Result<bool> {
        self.delete_student_impl(college_id, id).await
    }

    // 教师模块
    async fn list_teachers(&self, college_id: i64) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(college_id).await
    }

    async fn get_teacher(&self, college_id: i64, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_impl(college_id, id).await
    }

    async fn create_teacher(&self, college_id: i64, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(college_id, req).await
    }

    async fn update_teacher(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(college_id, id, update).await
    }

    async fn delete_teacher(&self, college_id: i64, id: i64) -> Result<bool> {
        self.delete_teacher_impl(college_id, id).await
    }

    // 课程模块
    async fn list_courses(&self, college_id: i64) -> Result<Vec<Course>> {
        self.list_courses_impl(college_id).await
    }

    async fn get_course(&self, college_id: i64, id: i64) -> Result<Option<Course>> {
        self.get_course_impl(college_id, id).await
    }

    async fn create_course(&self, college_id: i64, req: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(college_id, req).await
    }

    async fn update_course(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(college_id, id, update).await
    }

    async fn delete_course(&self, college_id: i64, id: i64) -> Result<bool> {
        self.delete_course_impl(college_id, id).await
    }

    // 考试模块
    async fn list_exams(&self, college_id: i64) -> Result<Vec<Exam>> {
        self.list_exams_impl(college_id).await
    }

    async fn get_exam(&self, college_id: i64, id: i64) -> Result<Option<Exam>> {
        self.get_exam_impl(college_id, id).await
    }

    async fn create_exam(&self, college_id: i64, req: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(college_id, req).await
    }

    async fn update_exam(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        self.update_exam_impl(college_id, id, update).await
    }

    async fn delete_exam(&self, college_id: i64, id: i64) -> Result<bool> {
        self.delete_exam_impl(college_id, id).await
    }

    // 缴费模块
    async fn list_student_fees(&self, college_id: i64) -> Result<Vec<StudentFeeRecord>> {
        self.list_student_fees_impl(college_id, None).await
    }

    async fn list_fees_for_student(
        &self,
        college_id: i64,
        student_id: i64,
    ) -> Result<Vec<StudentFeeRecord>> {
        self.list_student_fees_impl(college_id, Some(student_id))
            .await
    }

    async fn record_payment(
        &self,
        college_id: i64,
        staff_id: Option<i64>,
        req: RecordPaymentRequest,
    ) -> Result<Payment> {
        self.record_payment_impl(college_id, staff_id, req).await
    }

    async fn update_student_fee(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentFeeRequest,
    ) -> Result<Option<StudentFeeRecord>> {
        self.update_student_fee_impl(college_id, id, update).await
    }

    async fn list_fee_structures(&self, college_id: i64) -> Result<Vec<FeeStructure>> {
        self.list_fee_structures_impl(college_id).await
    }

    async fn create_fee_structure(
        &self,
        college_id: i64,
        req: CreateFeeStructureRequest,
    ) -> Result<FeeStructure> {
        self.create_fee_structure_impl(college_id, req).await
    }

    async fn assign_fee(&self, college_id: i64, req: AssignFeeRequest) -> Result<StudentFeeRecord> {
        self.assign_fee_impl(college_id, req).await
    }

    // 报表模块
    async fn attendance_report(&self, college_id: i64) -> Result<Vec<AttendanceReportRow>> {
        self.attendance_report_impl(college_id).await
    }

    async fn fee_report(&self, college_id: i64) -> Result<Vec<FeeReportRow>> {
        self.fee_report_impl(college_id).await
    }

    async fn results_report(&self, college_id: i64) -> Result<Vec<ResultReportRow>> {
        self.results_report_impl(college_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("college.db").unwrap(),
            "sqlite://college.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://u@h/db").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
