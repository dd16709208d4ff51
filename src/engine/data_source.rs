// ==========================================
// 设备配置提案系统 - 规划数据源 Trait
// ==========================================
// 职责: 定义编排器所需的只读数据访问接口（不包含实现）
// 实现者: ProposalRepositories（SQLite）；测试中使用内存 Mock
// ==========================================

use crate::domain::equipment::EquipmentUnit;
use crate::domain::request::{EquipmentRequest, RequestDetail};
use crate::domain::role::RequirementLine;
use crate::repository::error::RepositoryResult;

pub trait PlanningDataSource: Send + Sync {
    /// 按 ID 解析申请单；不存在时返回 Ok(None)
    fn find_request(&self, request_id: i64) -> RepositoryResult<Option<EquipmentRequest>>;

    /// 申请明细（提交顺序），每条已关联岗位
    fn find_request_details(&self, request_id: i64) -> RepositoryResult<Vec<RequestDetail>>;

    /// 岗位需求行（定义顺序）
    fn find_requirement_lines(&self, role_id: i64) -> RepositoryResult<Vec<RequirementLine>>;

    /// 当前全部可用设备
    fn find_available_units(&self) -> RepositoryResult<Vec<EquipmentUnit>>;
}
