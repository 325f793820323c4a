use super::{SeaOrmStorage, db_error};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn list_courses_impl(&self, college_id: i64) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .filter(Column::CollegeId.eq(college_id))
            .order_by_asc(Column::CourseCode)
            .all(&self.db)
            .await
            .map_err(db_error("查询课程列表失败"))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn get_course_impl(&self, college_id: i64, id: i64) -> Result<Option<Course>> {
        let course = Courses::find_by_id(id)
            .filter(Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(course.map(|m| m.into_course()))
    }

    pub async fn create_course_impl(
        &self,
        college_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_code: Set(req.course_code),
            title: Set(req.title),
            description: Set(req.description),
            department: Set(req.department),
            semester: Set(req.semester),
            college_id: Set(college_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建课程失败"))?;

        Ok(result.into_course())
    }

    pub async fn update_course_impl(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        if self.get_course_impl(college_id, id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(code) = update.course_code {
            model.course_code = Set(code);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }
        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }

        model.update(&self.db).await.map_err(db_error("更新课程失败"))?;

        self.get_course_impl(college_id, id).await
    }

    /// 删除课程，班级、考试、课表随外键级联删除
    pub async fn delete_course_impl(&self, college_id: i64, id: i64) -> Result<bool> {
        let result = Courses::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::CollegeId.eq(college_id))
            .exec(&self.db)
            .await
            .map_err(db_error("删除课程失败"))?;

        Ok(result.rows_affected > 0)
    }
}
