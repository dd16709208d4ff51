// ==========================================
// 设备配置提案系统 - 引擎层仓储聚合
// ==========================================
// 职责: 聚合提案编排所需的所有 Repository
// 实现: PlanningDataSource
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::domain::equipment::EquipmentUnit;
use crate::domain::request::{EquipmentRequest, RequestDetail};
use crate::domain::role::RequirementLine;
use crate::engine::data_source::PlanningDataSource;
use crate::repository::{
    EquipmentRepository, RepositoryResult, RequestRepository, RoleRepository,
};

/// 提案仓储集合
///
/// # 包含的仓储
/// - `request_repo`: 申请单与明细
/// - `role_repo`: 岗位与需求画像
/// - `equipment_repo`: 设备库存
#[derive(Clone)]
pub struct ProposalRepositories {
    /// 申请单仓储
    pub request_repo: Arc<RequestRepository>,
    /// 岗位仓储
    pub role_repo: Arc<RoleRepository>,
    /// 设备仓储
    pub equipment_repo: Arc<EquipmentRepository>,
}

impl ProposalRepositories {
    /// 创建新的仓储集合
    pub fn new(
        request_repo: Arc<RequestRepository>,
        role_repo: Arc<RoleRepository>,
        equipment_repo: Arc<EquipmentRepository>,
    ) -> Self {
        Self {
            request_repo,
            role_repo,
            equipment_repo,
        }
    }

    /// 基于同一个共享连接创建全部仓储
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self::new(
            Arc::new(RequestRepository::from_connection(conn.clone())),
            Arc::new(RoleRepository::from_connection(conn.clone())),
            Arc::new(EquipmentRepository::from_connection(conn)),
        )
    }
}

impl PlanningDataSource for ProposalRepositories {
    fn find_request(&self, request_id: i64) -> RepositoryResult<Option<EquipmentRequest>> {
        self.request_repo.find_by_id(request_id)
    }

    fn find_request_details(&self, request_id: i64) -> RepositoryResult<Vec<RequestDetail>> {
        self.request_repo.find_details(request_id)
    }

    fn find_requirement_lines(&self, role_id: i64) -> RepositoryResult<Vec<RequirementLine>> {
        self.role_repo.find_requirement_lines(role_id)
    }

    fn find_available_units(&self) -> RepositoryResult<Vec<EquipmentUnit>> {
        self.equipment_repo.find_available_units()
    }
}
