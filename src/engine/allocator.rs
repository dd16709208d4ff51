// ==========================================
// 设备配置提案系统 - 最优配置分配器
// ==========================================
// 职责: 对一张申请单，为每个岗位编制 (slot) 选择可用设备
// 输入: 申请明细 + 岗位需求画像 + 可用设备列表
// 输出: Proposal（分配 + 缺口 + 总成本 + 消息）
// ==========================================
// 红线: 纯计算，不写任何存储；选中的设备只从本次快照移除
// 顺序: 明细顺序 → slot 1..=head_count → 需求行优先级降序
// ==========================================

use crate::domain::equipment::EquipmentUnit;
use crate::domain::proposal::{Assignment, Proposal, SlotProposal};
use crate::domain::request::RequestDetail;
use crate::domain::role::{sort_by_priority, RequirementLine, RequirementProfiles};
use crate::engine::assembler::{ProposalAssembler, ShortageLedger};
use crate::engine::cost_normalizer::CostNormalizer;
use crate::engine::error::{PlanningError, PlanningResult};
use crate::engine::inventory::InventorySnapshot;
use crate::engine::scoring::ScoringWeights;
use tracing::{debug, info, instrument};

// ==========================================
// ProposalAllocator - 配置分配器
// ==========================================
pub struct ProposalAllocator {
    weights: ScoringWeights,
    assembler: ProposalAssembler,
}

impl ProposalAllocator {
    /// 构造函数
    ///
    /// # 参数
    /// - `weights`: 评分参数（成本权重）
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            assembler: ProposalAssembler::new(),
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成一张申请单的配置提案
    ///
    /// # 参数
    /// - `request_id`: 申请单ID
    /// - `details`: 申请明细（按提交顺序）
    /// - `profiles`: role_id → 需求行
    /// - `available_units`: 当前可用设备（规划开始时的快照）
    ///
    /// # 返回
    /// - Ok(Proposal): 缺口作为数据返回，不中断后续岗位
    /// - Err(EmptyRequest): 明细为空
    /// - Err(MissingRequirementProfile): 某岗位的需求画像未提供
    #[instrument(skip(self, details, profiles, available_units), fields(
        details_count = details.len(),
        units_count = available_units.len(),
        cost_weight = self.weights.cost_weight
    ))]
    pub fn allocate(
        &self,
        request_id: i64,
        details: &[RequestDetail],
        profiles: &RequirementProfiles,
        available_units: Vec<EquipmentUnit>,
    ) -> PlanningResult<Proposal> {
        if details.is_empty() {
            return Err(PlanningError::EmptyRequest { request_id });
        }

        // 先校验全部岗位画像，保证失败时不产生部分结果
        for detail in details {
            if !profiles.contains_key(&detail.role.id) {
                return Err(PlanningError::MissingRequirementProfile {
                    role_id: detail.role.id,
                    role: detail.role.name.clone(),
                });
            }
        }

        // 均价基于原始快照，消耗过程中不重算
        let normalizer = CostNormalizer::from_units(&available_units);
        let mut snapshot = InventorySnapshot::new(available_units);
        let mut ledger = ShortageLedger::new();
        let mut slots = Vec::new();

        for detail in details {
            let lines = profiles
                .get(&detail.role.id)
                .map(|lines| sort_by_priority(lines))
                .unwrap_or_default();

            for slot_no in 1..=detail.head_count {
                let slot = self.fill_slot(
                    &detail.role.name,
                    slot_no,
                    &lines,
                    &mut snapshot,
                    &normalizer,
                    &mut ledger,
                );
                slots.push(slot);
            }
        }

        let proposal = self.assembler.assemble(request_id, slots, ledger);

        info!(
            request_id,
            slots_count = proposal.slots.len(),
            shortages_count = proposal.shortages.len(),
            total_cost = proposal.total_estimated_cost,
            remaining_units = snapshot.remaining(),
            "配置提案生成完成"
        );

        Ok(proposal)
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 填充单个 slot：按优先级依次满足每条需求行
    fn fill_slot(
        &self,
        role: &str,
        slot_no: u32,
        lines: &[&RequirementLine],
        snapshot: &mut InventorySnapshot,
        normalizer: &CostNormalizer,
        ledger: &mut ShortageLedger,
    ) -> SlotProposal {
        let mut slot = SlotProposal::new(role, slot_no);

        for line in lines {
            let candidates = snapshot.available(&line.equipment_type);
            let positions = self.select_positions(line, candidates, normalizer);

            let shortfall = line.required_quantity.saturating_sub(positions.len() as u32);
            if shortfall > 0 {
                debug!(
                    role,
                    slot_no,
                    equipment_type = %line.equipment_type,
                    required = line.required_quantity,
                    shortfall,
                    "库存不足，记录缺口"
                );
                ledger.record(role, &line.equipment_type, shortfall);
            }

            for unit in snapshot.take(&line.equipment_type, &positions) {
                slot.push(Assignment {
                    equipment_id: unit.id,
                    equipment_type: unit.equipment_type,
                    cost: unit.cost,
                });
            }
        }

        slot
    }

    /// 对候选设备评分并选出前 required_quantity 台
    ///
    /// 分数降序；同分保持快照顺序（稳定排序）
    ///
    /// # 返回
    /// 候选切片中的下标，按分数从高到低
    fn select_positions(
        &self,
        line: &RequirementLine,
        candidates: &[EquipmentUnit],
        normalizer: &CostNormalizer,
    ) -> Vec<usize> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let priority = line.priority as f64;
        let mut ranked: Vec<(usize, f64)> = candidates
            .iter()
            .enumerate()
            .map(|(pos, unit)| {
                let mean_cost = normalizer.reference_cost(&unit.equipment_type, unit.cost);
                (pos, self.weights.score(priority, unit.performance, unit.cost, mean_cost))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(line.required_quantity as usize)
            .map(|(pos, _)| pos)
            .collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ProposalAllocator {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
