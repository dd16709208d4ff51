// ==========================================
// 设备配置提案系统 - 配置提案 API
// ==========================================
// 职责: 对外暴露最优配置提案生成
// 两种形态:
// - generate_optimal_proposal: 带内结果，永不返回错误
// - try_generate_proposal: 带标签结果 (ApiResult)
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ProposalConfigReader;
use crate::domain::proposal::Proposal;
use crate::engine::data_source::PlanningDataSource;
use crate::engine::orchestrator::ProposalOrchestrator;

// ==========================================
// ProposalApi - 配置提案 API
// ==========================================
pub struct ProposalApi<S, C>
where
    S: PlanningDataSource,
    C: ProposalConfigReader,
{
    orchestrator: ProposalOrchestrator<S, C>,
}

impl<S, C> ProposalApi<S, C>
where
    S: PlanningDataSource,
    C: ProposalConfigReader,
{
    /// 创建新的ProposalApi实例
    pub fn new(source: Arc<S>, config: Arc<C>) -> Self {
        Self {
            orchestrator: ProposalOrchestrator::new(source, config),
        }
    }

    /// 生成最优配置提案（带内结果）
    ///
    /// # 参数
    /// - request_id: 申请单ID
    ///
    /// # 返回
    /// - Proposal: 未找到/无明细/内部错误时为空提案 + 说明消息
    pub fn generate_optimal_proposal(&self, request_id: i64) -> Proposal {
        self.orchestrator.generate_optimal_proposal(request_id)
    }

    /// 生成最优配置提案（带标签结果）
    ///
    /// # 返回
    /// - Ok(Proposal): 缺口包含在提案内
    /// - Err(ApiError::InvalidInput): request_id 非正数
    /// - Err(ApiError::NotFound / EmptyRequest / ...)
    pub fn try_generate_proposal(&self, request_id: i64) -> ApiResult<Proposal> {
        if request_id <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "申请单ID必须为正数: {}",
                request_id
            )));
        }

        Ok(self.orchestrator.plan(request_id)?)
    }
}
