// ==========================================
// 设备配置提案系统 - 提案编排器
// ==========================================
// 用途: 读取输入 → 快照库存 → 调用分配器
// 顺序: 申请单 → 明细 → 岗位画像（每个岗位一次）→ 成本权重 → 库存快照
// 红线: 明细为空时不访问库存；全流程只读
// ==========================================

use crate::config::ProposalConfigReader;
use crate::domain::proposal::Proposal;
use crate::domain::role::RequirementProfiles;
use crate::engine::allocator::ProposalAllocator;
use crate::engine::assembler::ProposalAssembler;
use crate::engine::data_source::PlanningDataSource;
use crate::engine::error::{PlanningError, PlanningResult};
use crate::engine::scoring::ScoringWeights;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

// ==========================================
// ProposalOrchestrator - 提案编排器
// ==========================================
pub struct ProposalOrchestrator<S, C>
where
    S: PlanningDataSource,
    C: ProposalConfigReader,
{
    source: Arc<S>,
    config: Arc<C>,
}

impl<S, C> ProposalOrchestrator<S, C>
where
    S: PlanningDataSource,
    C: ProposalConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - source: 规划数据源
    /// - config: 配置读取器
    pub fn new(source: Arc<S>, config: Arc<C>) -> Self {
        Self { source, config }
    }

    /// 为申请单生成配置提案（带标签的结果）
    ///
    /// # 返回
    /// - Ok(Proposal): 缺口作为数据包含在内
    /// - Err(RequestNotFound / EmptyRequest / DataSource / Config)
    pub fn plan(&self, request_id: i64) -> PlanningResult<Proposal> {
        // ==========================================
        // 步骤1: 解析申请单
        // ==========================================
        let request = self
            .source
            .find_request(request_id)?
            .ok_or(PlanningError::RequestNotFound { request_id })?;

        // ==========================================
        // 步骤2: 读取明细
        // ==========================================
        let details = self.source.find_request_details(request.id)?;
        if details.is_empty() {
            return Err(PlanningError::EmptyRequest { request_id });
        }

        // ==========================================
        // 步骤3: 岗位需求画像（同一岗位只读一次）
        // ==========================================
        let mut profiles = RequirementProfiles::new();
        for detail in &details {
            if profiles.contains_key(&detail.role.id) {
                continue;
            }
            let lines = self.source.find_requirement_lines(detail.role.id)?;
            debug!(
                role_id = detail.role.id,
                role = %detail.role.name,
                lines_count = lines.len(),
                "加载岗位需求画像"
            );
            profiles.insert(detail.role.id, lines);
        }

        // ==========================================
        // 步骤4: 成本权重
        // ==========================================
        let cost_weight = self
            .config
            .get_cost_weight()
            .map_err(|e| PlanningError::Config(e.to_string()))?;

        // ==========================================
        // 步骤5: 库存快照
        // ==========================================
        let units = self.source.find_available_units()?;

        info!(
            request_id,
            request_name = %request.name,
            details_count = details.len(),
            roles_count = profiles.len(),
            snapshot_size = units.len(),
            cost_weight,
            "开始生成配置提案"
        );

        // ==========================================
        // 步骤6: 分配
        // ==========================================
        let allocator = ProposalAllocator::new(ScoringWeights::new(cost_weight));
        allocator.allocate(request_id, &details, &profiles, units)
    }

    /// 为申请单生成配置提案（带内结果）
    ///
    /// 所有错误都被吸收为空提案 + 说明消息，不会返回错误
    pub fn generate_optimal_proposal(&self, request_id: i64) -> Proposal {
        match self.plan(request_id) {
            Ok(proposal) => {
                info!(
                    request_id,
                    assignments_count = proposal.assignments().count(),
                    shortages_count = proposal.shortages.len(),
                    total_cost = proposal.total_estimated_cost,
                    "配置提案已返回"
                );
                proposal
            }
            Err(err) => absorb_planning_error(request_id, err),
        }
    }
}

/// 将规划错误转换为带内提案
pub fn absorb_planning_error(request_id: i64, err: PlanningError) -> Proposal {
    match err {
        PlanningError::RequestNotFound { .. } => {
            warn!(request_id, "申请单不存在");
            ProposalAssembler::request_not_found(request_id)
        }
        PlanningError::EmptyRequest { .. } => {
            warn!(request_id, "申请单无明细");
            ProposalAssembler::empty_request(request_id)
        }
        other => {
            error!(request_id, error = %other, "配置提案生成失败");
            ProposalAssembler::internal_failure(request_id, &other.to_string())
        }
    }
}
