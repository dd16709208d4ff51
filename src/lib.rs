// ==========================================
// 设备配置提案系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 决策支持 (只生成提案，不写回设备状态)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 配置提案规划
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{EquipmentStatus, RequestStatus};

// 领域实体
pub use domain::{
    Assignment, Equipment, EquipmentRequest, EquipmentUnit, Proposal, RequestDetail,
    RequirementLine, RequirementProfiles, Role, Shortage, SlotProposal,
};

// 引擎
pub use engine::{
    PlanningDataSource, PlanningError, ProposalAllocator, ProposalOrchestrator,
    ProposalRepositories, ScoringWeights,
};

// API
pub use api::{ApiError, ApiResult, ProposalApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备配置提案系统";
