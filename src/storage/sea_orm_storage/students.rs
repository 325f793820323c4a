use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{Students, Users};
use crate::entity::{students, users};
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 当前学院的全部学生
    pub async fn list_students_impl(&self, college_id: i64) -> Result<Vec<Student>> {
        let rows = Students::find()
            .find_also_related(Users)
            .filter(users::Column::CollegeId.eq(college_id))
            .order_by_asc(students::Column::UserId)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生列表失败"))?;

        Ok(rows
            .into_iter()
            .filter_map(|(student, user)| user.map(|u| student.into_student(u)))
            .collect())
    }

    pub async fn get_student_impl(&self, college_id: i64, id: i64) -> Result<Option<Student>> {
        let row = Students::find()
            .find_also_related(Users)
            .filter(students::Column::UserId.eq(id))
            .filter(users::Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        Ok(row.and_then(|(student, user)| user.map(|u| student.into_student(u))))
    }

    /// 创建学生：users 与 students 两行在同一事务中写入
    pub async fn create_student_impl(
        &self,
        college_id: i64,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let user = users::ActiveModel {
            name: Set(Some(req.name)),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Student.to_string()),
            college_id: Set(college_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建学生账号失败"))?;

        let student = students::ActiveModel {
            user_id: Set(user.id),
            enrollment_number: Set(req.enrollment_number),
            program: Set(req.program),
            year_of_study: Set(req.year_of_study),
            section: Set(req.section),
            date_of_birth: Set(req.date_of_birth.map(|d| d.timestamp())),
            gender: Set(req.gender.map(|g| g.to_string())),
            admission_date: Set(req.admission_date.map(|d| d.timestamp())),
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建学生档案失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(student.into_student(user))
    }

    /// 更新学生，未提供的字段保持不变
    pub async fn update_student_impl(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_impl(college_id, id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let mut user = users::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(name) = update.name {
            user.name = Set(Some(name));
        }
        if let Some(email) = update.email {
            user.email = Set(email);
        }
        user.update(&txn).await.map_err(db_error("更新学生账号失败"))?;

        let mut student = students::ActiveModel {
            user_id: Unchanged(id),
            ..Default::default()
        };
        if let Some(program) = update.program {
            student.program = Set(program);
        }
        if let Some(year) = update.year_of_study {
            student.year_of_study = Set(year);
        }
        if let Some(section) = update.section {
            student.section = Set(Some(section));
        }
        if let Some(dob) = update.date_of_birth {
            student.date_of_birth = Set(Some(dob.timestamp()));
        }
        if let Some(gender) = update.gender {
            student.gender = Set(Some(gender.to_string()));
        }
        if let Some(admitted) = update.admission_date {
            student.admission_date = Set(Some(admitted.timestamp()));
        }
        if student.is_changed() {
            student
                .update(&txn)
                .await
                .map_err(db_error("更新学生档案失败"))?;
        }

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        self.get_student_impl(college_id, id).await
    }

    /// 删除学生账号，students 行随外键级联删除
    pub async fn delete_student_impl(&self, college_id: i64, id: i64) -> Result<bool> {
        if self.get_student_impl(college_id, id).await?.is_none() {
            return Ok(false);
        }

        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除学生失败"))?;

        Ok(result.rows_affected > 0)
    }
}
