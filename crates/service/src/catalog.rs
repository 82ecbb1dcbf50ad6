use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use models::course::{validate_description, validate_title, Catalog, Course};

use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::storage::CatalogStorage;

/// 列表查询输入：可选标题过滤 + 分页参数
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// 创建输入：不包含 id，由服务端按 max+1 规则生成
#[derive(Clone, Debug, Deserialize)]
pub struct CreateCourse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// 更新输入：字段缺省或为空时保留旧值，id 不可变
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateCourse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog operations over a pluggable storage backend.
///
/// Every operation re-loads the catalog from storage at entry; mutating
/// operations rewrite it wholly on success. Nothing is cached in-process
/// between requests.
#[derive(Clone)]
pub struct CatalogService {
    storage: Arc<dyn CatalogStorage>,
}

impl CatalogService {
    pub fn new(storage: Arc<dyn CatalogStorage>) -> Arc<Self> {
        Arc::new(Self { storage })
    }

    /// 列出课程：可选标题子串过滤（两侧小写比较），再做分页切片
    pub async fn list(&self, query: ListQuery) -> Result<Vec<Course>, ServiceError> {
        let page = Page::from_query(query.page, query.size)?;
        let catalog = self.storage.load().await?;

        let filtered: Vec<Course> = match query.title.as_deref() {
            Some(raw) => {
                let needle = raw.trim().to_lowercase();
                catalog
                    .courses
                    .into_iter()
                    .filter(|c| c.title.to_lowercase().contains(&needle))
                    .collect()
            }
            None => catalog.courses,
        };

        Ok(page.slice(filtered))
    }

    /// 根据 id 获取课程；未命中返回 NotFound，不产生越界访问
    pub async fn get(&self, id: u64) -> Result<Course, ServiceError> {
        let catalog = self.storage.load().await?;
        catalog
            .find(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("course"))
    }

    /// 创建课程：校验标题/描述非空（标题优先报错），id = max(existing) + 1
    pub async fn create(&self, input: CreateCourse) -> Result<Course, ServiceError> {
        let title = validate_title(input.title.as_deref().unwrap_or_default())?;
        let description = validate_description(input.description.as_deref().unwrap_or_default())?;

        let mut catalog = self.storage.load().await?;
        let course = Course { id: catalog.next_id(), title, description };
        catalog.courses.push(course.clone());
        self.storage.save(&catalog).await?;
        info!(id = course.id, "course created");
        Ok(course)
    }

    /// 更新课程：仅覆盖调用方提供且非空的字段，其余保留旧值
    pub async fn update(&self, id: u64, input: UpdateCourse) -> Result<Course, ServiceError> {
        let mut catalog = self.storage.load().await?;
        let updated = {
            let existing = catalog
                .find_mut(id)
                .ok_or_else(|| ServiceError::not_found("course"))?;
            if let Some(title) = non_empty(input.title.as_deref()) {
                existing.title = title;
            }
            if let Some(description) = non_empty(input.description.as_deref()) {
                existing.description = description;
            }
            existing.clone()
        };
        self.storage.save(&catalog).await?;
        Ok(updated)
    }

    /// 删除课程：未命中返回 NotFound 且不重写文件
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let mut catalog = self.storage.load().await?;
        if !catalog.remove(id) {
            return Err(ServiceError::not_found("course"));
        }
        self.storage.save(&catalog).await?;
        info!(id, "course deleted");
        Ok(())
    }
}

/// Treat absent and blank-after-trim values the same: keep the old field.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
