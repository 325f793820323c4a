//! 预导入模块，方便使用

pub use super::account_managers::{
    ActiveModel as AccountManagerActiveModel, Entity as AccountManagers,
    Model as AccountManagerModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::colleges::{
    ActiveModel as CollegeActiveModel, Entity as Colleges, Model as CollegeModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::fee_structures::{
    ActiveModel as FeeStructureActiveModel, Entity as FeeStructures, Model as FeeStructureModel,
};
pub use super::payments::{
    ActiveModel as PaymentActiveModel, Entity as Payments, Model as PaymentModel,
};
pub use super::results::{ActiveModel as ResultActiveModel, Entity as Results, Model as ResultModel};
pub use super::student_fees::{
    ActiveModel as StudentFeeActiveModel, Entity as StudentFees, Model as StudentFeeModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::timetable::{
    ActiveModel as TimetableActiveModel, Entity as Timetable, Model as TimetableModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
