use std::sync::Arc;

use chrono::Weekday;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问接口
///
/// 除用户/学院查询外，所有方法第一个参数都是当前学院 `college_id`，
/// 不属于该学院的数据视为不存在。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户与学院
    // 创建用户（password 为已哈希的值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 创建学院
    async fn create_college(&self, college: CreateCollegeRequest) -> Result<College>;
    // 列出全部学院
    async fn list_colleges(&self) -> Result<Vec<College>>;
    async fn get_college_by_id(&self, id: i64) -> Result<Option<College>>;
    async fn get_college_by_code(&self, code: &str) -> Result<Option<College>>;

    /// 首页统计
    async fn dashboard_stats(&self, college_id: i64) -> Result<DashboardStats>;
    async fn program_overview(&self, college_id: i64) -> Result<Vec<ProgramOverviewRow>>;
    async fn fee_summary(&self, college_id: i64) -> Result<FeeSummary>;
    // 最近缴费，按缴费时间倒序
    async fn recent_payments(&self, college_id: i64, limit: u64) -> Result<Vec<RecentPayment>>;
    // exam_date 晚于 now（unix 秒）的考试，按时间升序
    async fn upcoming_exams(&self, college_id: i64, now: i64) -> Result<Vec<UpcomingExam>>;
    // 指定星期的课表，周日为空
    async fn classes_for_day(&self, college_id: i64, weekday: Weekday) -> Result<Vec<TodayClass>>;

    /// 学生管理
    async fn list_students(&self, college_id: i64) -> Result<Vec<Student>>;
    async fn get_student(&self, college_id: i64, id: i64) -> Result<Option<Student>>;
    // 同一事务内创建 users 与 students 两行（password 为已哈希的值）
    async fn create_student(&self, college_id: i64, req: CreateStudentRequest) -> Result<Student>;
    async fn update_student(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, college_id: i64, id: i64) -> Result<bool>;

    /// 教师管理
    async fn list_teachers(&self, college_id: i64) -> Result<Vec<Teacher>>;
    async fn get_teacher(&self, college_id: i64, id: i64) -> Result<Option<Teacher>>;
    async fn create_teacher(&self, college_id: i64, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn update_teacher(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, college_id: i64, id: i64) -> Result<bool>;

    /// 课程管理
    async fn list_courses(&self, college_id: i64) -> Result<Vec<Course>>;
    async fn get_course(&self, college_id: i64, id: i64) -> Result<Option<Course>>;
    async fn create_course(&self, college_id: i64, req: CreateCourseRequest) -> Result<Course>;
    async fn update_course(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    async fn delete_course(&self, college_id: i64, id: i64) -> Result<bool>;

    /// 考试管理
    async fn list_exams(&self, college_id: i64) -> Result<Vec<Exam>>;
    async fn get_exam(&self, college_id: i64, id: i64) -> Result<Option<Exam>>;
    // 班级不属于当前学院时返回 NotFound
    async fn create_exam(&self, college_id: i64, req: CreateExamRequest) -> Result<Exam>;
    async fn update_exam(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>>;
    async fn delete_exam(&self, college_id: i64, id: i64) -> Result<bool>;

    /// 缴费管理
    async fn list_student_fees(&self, college_id: i64) -> Result<Vec<StudentFeeRecord>>;
    async fn list_fees_for_student(
        &self,
        college_id: i64,
        student_id: i64,
    ) -> Result<Vec<StudentFeeRecord>>;
    // 同一事务内写入缴费记录并累加 amount_paid；
    // staff_id 只有在对应财务人员存在时才会写入 paid_by_staff_id
    async fn record_payment(
        &self,
        college_id: i64,
        staff_id: Option<i64>,
        req: RecordPaymentRequest,
    ) -> Result<Payment>;
    async fn update_student_fee(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentFeeRequest,
    ) -> Result<Option<StudentFeeRecord>>;
    async fn list_fee_structures(&self, college_id: i64) -> Result<Vec<FeeStructure>>;
    async fn create_fee_structure(
        &self,
        college_id: i64,
        req: CreateFeeStructureRequest,
    ) -> Result<FeeStructure>;
    // 学生或收费标准不属于当前学院时返回 NotFound
    async fn assign_fee(&self, college_id: i64, req: AssignFeeRequest) -> Result<StudentFeeRecord>;

    /// 报表
    async fn attendance_report(&self, college_id: i64) -> Result<Vec<AttendanceReportRow>>;
    async fn fee_report(&self, college_id: i64) -> Result<Vec<FeeReportRow>>;
    async fn results_report(&self, college_id: i64) -> Result<Vec<ResultReportRow>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
