// ==========================================
// 设备配置提案系统 - 规划错误类型
// ==========================================
// 说明: 缺口 (Shortage) 不是错误，始终作为数据返回
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 规划引擎边界错误
#[derive(Error, Debug)]
pub enum PlanningError {
    /// 申请单不存在
    #[error("申请单不存在: request_id={request_id}")]
    RequestNotFound { request_id: i64 },

    /// 申请单无明细
    #[error("申请单无明细: request_id={request_id}")]
    EmptyRequest { request_id: i64 },

    /// 岗位需求画像未加载
    #[error("岗位需求画像缺失: role_id={role_id}, role={role}")]
    MissingRequirementProfile { role_id: i64, role: String },

    /// 数据读取失败
    #[error("数据读取失败: {0}")]
    DataSource(#[from] RepositoryError),

    /// 配置读取失败
    #[error("配置读取失败: {0}")]
    Config(String),
}

/// Result 类型别名
pub type PlanningResult<T> = Result<T, PlanningError>;
