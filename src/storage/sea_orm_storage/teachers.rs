use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{Teachers, Users};
use crate::entity::{teachers, users};
use crate::errors::Result;
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn list_teachers_impl(&self, college_id: i64) -> Result<Vec<Teacher>> {
        let rows = Teachers::find()
            .find_also_related(Users)
            .filter(users::Column::CollegeId.eq(college_id))
            .order_by_asc(teachers::Column::UserId)
            .all(&self.db)
            .await
            .map_err(db_error("查询教师列表失败"))?;

        Ok(rows
            .into_iter()
            .filter_map(|(teacher, user)| user.map(|u| teacher.into_teacher(u)))
            .collect())
    }

    pub async fn get_teacher_impl(&self, college_id: i64, id: i64) -> Result<Option<Teacher>> {
        let row = Teachers::find()
            .find_also_related(Users)
            .filter(teachers::Column::UserId.eq(id))
            .filter(users::Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询教师失败"))?;

        Ok(row.and_then(|(teacher, user)| user.map(|u| teacher.into_teacher(u))))
    }

    /// 创建教师：users 与 teachers 两行在同一事务中写入
    pub async fn create_teacher_impl(
        &self,
        college_id: i64,
        req: CreateTeacherRequest,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let user = users::ActiveModel {
            name: Set(Some(req.name)),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Teacher.to_string()),
            college_id: Set(college_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建教师账号失败"))?;

        let teacher = teachers::ActiveModel {
            user_id: Set(user.id),
            employee_id: Set(req.employee_id),
            department: Set(req.department),
            designation: Set(req.designation),
            qualification: Set(req.qualification),
            joining_date: Set(req.joining_date.map(|d| d.timestamp())),
            gender: Set(req.gender.map(|g| g.to_string())),
            date_of_birth: Set(req.date_of_birth.map(|d| d.timestamp())),
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建教师档案失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(teacher.into_teacher(user))
    }

    pub async fn update_teacher_impl(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_impl(college_id, id).await?.is_none() {
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
        user.update(&txn).await.map_err(db_error("更新教师账号失败"))?;

        let mut teacher = teachers::ActiveModel {
            user_id: Unchanged(id),
            ..Default::default()
        };
        if let Some(department) = update.department {
            teacher.department = Set(department);
        }
        if let Some(designation) = update.designation {
            teacher.designation = Set(Some(designation));
        }
        if let Some(qualification) = update.qualification {
            teacher.qualification = Set(Some(qualification));
        }
        if let Some(joined) = update.joining_date {
            teacher.joining_date = Set(Some(joined.timestamp()));
        }
        if let Some(gender) = update.gender {
            teacher.gender = Set(Some(gender.to_string()));
        }
        if let Some(dob) = update.date_of_birth {
            teacher.date_of_birth = Set(Some(dob.timestamp()));
        }
        if teacher.is_changed() {
            teacher
                .update(&txn)
                .await
                .map_err(db_error("更新教师档案失败"))?;
        }

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        self.get_teacher_impl(college_id, id).await
    }

    /// 删除教师账号，teachers 行随外键级联删除
    pub async fn delete_teacher_impl(&self, college_id: i64, id: i64) -> Result<bool> {
        if self.get_teacher_impl(college_id, id).await?.is_none() {
            return Ok(false);
        }

        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除教师失败"))?;

        Ok(result.rows_affected > 0)
    }
}
