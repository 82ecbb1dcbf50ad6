use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use models::course::Course;
use service::catalog::{CreateCourse, ListQuery, UpdateCourse};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// 列出课程：支持 `title` 子串过滤与 `page`/`size` 分页
pub async fn list_courses(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Course>>, JsonApiError> {
    let courses = state.catalog.list(query).await?;
    Ok(Json(courses))
}

/// 获取指定课程
pub async fn get_course(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<Course>, JsonApiError> {
    let course = state.catalog.get(id).await?;
    Ok(Json(course))
}

/// 创建课程，成功返回 201 与新记录
pub async fn create_course(
    State(state): State<ServerState>,
    Json(input): Json<CreateCourse>,
) -> Result<(StatusCode, Json<Course>), JsonApiError> {
    let created = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 更新指定课程，返回确认消息与更新后的记录
pub async fn update_course(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateCourse>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let updated = state.catalog.update(id, input).await?;
    Ok(Json(json!({
        "message": "Update successfully",
        "updatedCourse": updated,
    })))
}

/// 删除指定课程，返回确认消息
pub async fn delete_course(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    state.catalog.delete(id).await?;
    Ok(Json(json!({ "message": "Delete successfully" })))
}
