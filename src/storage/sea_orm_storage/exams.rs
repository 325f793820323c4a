//! 考试存储
//!
//! exams 本身没有 college_id，经 classes → courses 归属学院。

use super::{SeaOrmStorage, db_error};
use crate::entity::classes::class_label;
use crate::entity::prelude::{Classes, Exams};
use crate::entity::{classes, courses, exams, ts_to_datetime};
use crate::errors::{CollegeError, Result};
use crate::models::exams::{
    entities::Exam,
    requests::{CreateExamRequest, UpdateExamRequest},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

#[derive(Debug, FromQueryResult)]
struct ExamQueryRow {
    id: i64,
    class_id: i64,
    title: String,
    exam_date: i64,
    course_title: String,
    year: i32,
    section: Option<String>,
}

impl ExamQueryRow {
    fn into_exam(self) -> Exam {
        Exam {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            exam_date: ts_to_datetime(self.exam_date),
            course_title: self.course_title,
            class_label: class_label(self.year, self.section.as_deref()),
        }
    }
}

/// 带课程名与班级信息的考试查询，已按学院过滤
fn exam_query(college_id: i64) -> Select<Exams> {
    Exams::find()
        .select_only()
        .column(exams::Column::Id)
        .column(exams::Column::ClassId)
        .column(exams::Column::Title)
        .column(exams::Column::ExamDate)
        .column_as(courses::Column::Title, "course_title")
        .column(classes::Column::Year)
        .column(classes::Column::Section)
        .join(JoinType::InnerJoin, exams::Relation::Class.def())
        .join(JoinType::InnerJoin, classes::Relation::Course.def())
        .filter(courses::Column::CollegeId.eq(college_id))
}

impl SeaOrmStorage {
    pub async fn list_exams_impl(&self, college_id: i64) -> Result<Vec<Exam>> {
        let rows = exam_query(college_id)
            .order_by_asc(exams::Column::ExamDate)
            .order_by_asc(exams::Column::Id)
            .into_model::<ExamQueryRow>()
            .all(&self.db)
            .await
            .map_err(db_error("查询考试列表失败"))?;

        Ok(rows.into_iter().map(ExamQueryRow::into_exam).collect())
    }

    pub async fn get_exam_impl(&self, college_id: i64, id: i64) -> Result<Option<Exam>> {
        let row = exam_query(college_id)
            .filter(exams::Column::Id.eq(id))
            .into_model::<ExamQueryRow>()
            .one(&self.db)
            .await
            .map_err(db_error("查询考试失败"))?;

        Ok(row.map(ExamQueryRow::into_exam))
    }

    /// 班级是否属于当前学院
    async fn class_in_college(&self, college_id: i64, class_id: i64) -> Result<bool> {
        let class = Classes::find_by_id(class_id)
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .filter(courses::Column::CollegeId.eq(college_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询班级失败"))?;

        Ok(class.is_some())
    }

    pub async fn create_exam_impl(&self, college_id: i64, req: CreateExamRequest) -> Result<Exam> {
        if !self.class_in_college(college_id, req.class_id).await? {
            return Err(CollegeError::not_found(format!(
                "Class {} not found",
                req.class_id
            )));
        }

        let model = exams::ActiveModel {
            class_id: Set(req.class_id),
            title: Set(req.title),
            exam_date: Set(req.exam_date.timestamp()),
            ..Default::default()
        };

        let created = model.insert(&self.db).await.map_err(db_error("创建考试失败"))?;

        self.get_exam_impl(college_id, created.id)
            .await?
            .ok_or_else(|| CollegeError::database_operation("创建考试后读取失败"))
    }

    pub async fn update_exam_impl(
        &self,
        college_id: i64,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        if self.get_exam_impl(college_id, id).await?.is_none() {
            return Ok(None);
        }

        let mut model = exams::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(class_id) = update.class_id {
            if !self.class_in_college(college_id, class_id).await? {
                return Err(CollegeError::not_found(format!("Class {class_id} not found")));
            }
            model.class_id = Set(class_id);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(exam_date) = update.exam_date {
            model.exam_date = Set(exam_date.timestamp());
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(db_error("更新考试失败"))?;
        }

        self.get_exam_impl(college_id, id).await
    }

    pub async fn delete_exam_impl(&self, college_id: i64, id: i64) -> Result<bool> {
        if self.get_exam_impl(college_id, id).await?.is_none() {
            return Ok(false);
        }

        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除考试失败"))?;

        Ok(result.rows_affected > 0)
    }
}
