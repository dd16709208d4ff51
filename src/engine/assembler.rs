// ==========================================
// 设备配置提案系统 - 结果汇总
// ==========================================
// 职责: 把分配过程的工作列表折叠为 Proposal
// 红线: 只做汇总与消息格式化，不含分配逻辑
// ==========================================

use crate::domain::proposal::{Proposal, Shortage, SlotProposal};
use crate::i18n::{t, t_with_args};
use std::collections::HashMap;

// ==========================================
// ShortageLedger - 缺口台账
// ==========================================
// (岗位, 类型) 合并累计，保持首次出现顺序
#[derive(Debug, Clone, Default)]
pub struct ShortageLedger {
    entries: Vec<Shortage>,
    index: HashMap<(String, String), usize>,
}

impl ShortageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录缺口；同一 (岗位, 类型) 已存在时累加
    pub fn record(&mut self, role: &str, equipment_type: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let key = (role.to_string(), equipment_type.to_string());
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].quantity += quantity,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(Shortage {
                    role: role.to_string(),
                    equipment_type: equipment_type.to_string(),
                    quantity,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Shortage> {
        self.entries
    }
}

// ==========================================
// ProposalAssembler - 提案汇总器
// ==========================================
pub struct ProposalAssembler {
    // 无状态
}

impl ProposalAssembler {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总提案
    ///
    /// 总成本 = 各 slot 成本之和
    pub fn assemble(
        &self,
        request_id: i64,
        slots: Vec<SlotProposal>,
        shortages: ShortageLedger,
    ) -> Proposal {
        let total_estimated_cost: f64 = slots.iter().map(|s| s.total_cost).sum();
        let message = Self::summary_message(shortages.len());

        Proposal {
            request_id,
            slots,
            total_estimated_cost,
            shortages: shortages.into_entries(),
            message,
        }
    }

    /// 汇总消息：无缺口 / 缺口条目数
    pub fn summary_message(shortage_count: usize) -> String {
        if shortage_count == 0 {
            t("proposal.all_satisfied")
        } else {
            t_with_args("proposal.shortages", &[("count", &shortage_count.to_string())])
        }
    }

    // ==========================================
    // 带内失败提案
    // ==========================================

    pub fn request_not_found(request_id: i64) -> Proposal {
        let message = t_with_args("proposal.request_not_found", &[("id", &request_id.to_string())]);
        Proposal::empty(request_id, message)
    }

    pub fn empty_request(request_id: i64) -> Proposal {
        let message = t_with_args("proposal.empty_request", &[("id", &request_id.to_string())]);
        Proposal::empty(request_id, message)
    }

    pub fn internal_failure(request_id: i64, reason: &str) -> Proposal {
        let message = t_with_args("proposal.internal_error", &[("reason", reason)]);
        Proposal::empty(request_id, message)
    }
}

impl Default for ProposalAssembler {
    fn default() -> Self {
        Self::new()
    }
}
