use super::{SeaOrmStorage, db_error};
use crate::entity::colleges::{ActiveModel, Column, Entity as Colleges};
use crate::errors::Result;
use crate::models::colleges::{entities::College, requests::CreateCollegeRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学院
    pub async fn create_college_impl(&self, req: CreateCollegeRequest) -> Result<College> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(Some(req.name)),
            college_code: Set(req.college_code),
            address: Set(req.address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建学院失败"))?;

        Ok(result.into_college())
    }

    /// 列出全部学院
    pub async fn list_colleges_impl(&self) -> Result<Vec<College>> {
        let colleges = Colleges::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询学院列表失败"))?;

        Ok(colleges.into_iter().map(|m| m.into_college()).collect())
    }

    pub async fn get_college_by_id_impl(&self, id: i64) -> Result<Option<College>> {
        let result = Colleges::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询学院失败"))?;

        Ok(result.map(|m| m.into_college()))
    }

    pub async fn get_college_by_code_impl(&self, code: &str) -> Result<Option<College>> {
        let result = Colleges::find()
            .filter(Column::CollegeCode.eq(code))
            .one(&self.db)
            .await
            .map_err(db_error("查询学院失败"))?;

        Ok(result.map(|m| m.into_college()))
    }
}
