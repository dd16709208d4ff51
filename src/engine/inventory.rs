// ==========================================
// 设备配置提案系统 - 库存快照
// ==========================================
// 职责: 单次规划私有的可用设备工作副本
// 输入: 可用设备列表
// 输出: 按类型索引的候选集合，选中即移除
// ==========================================
// 红线: 同一设备在一次规划中最多被分配一次
// ==========================================

use crate::domain::equipment::EquipmentUnit;
use std::collections::HashMap;

// ==========================================
// InventorySnapshot - 库存快照
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    // 类型 → 设备列表（保持快照顺序，用于同分决胜）
    by_type: HashMap<String, Vec<EquipmentUnit>>,
    remaining: usize,
}

impl InventorySnapshot {
    /// 建立快照
    ///
    /// 按 (类型升序, 成本升序) 稳定排序后按类型分桶；
    /// 排序只用于固定同分时的遍历顺序。
    pub fn new(mut units: Vec<EquipmentUnit>) -> Self {
        units.sort_by(|a, b| {
            a.equipment_type
                .cmp(&b.equipment_type)
                .then_with(|| a.cost.total_cmp(&b.cost))
        });

        let remaining = units.len();
        let mut by_type: HashMap<String, Vec<EquipmentUnit>> = HashMap::new();
        for unit in units {
            by_type
                .entry(unit.equipment_type.clone())
                .or_insert_with(Vec::new)
                .push(unit);
        }

        Self { by_type, remaining }
    }

    /// 当前仍可用的某类型设备（快照顺序）
    pub fn available(&self, equipment_type: &str) -> &[EquipmentUnit] {
        self.by_type
            .get(equipment_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 取出某类型中指定位置的设备，并从快照移除
    ///
    /// # 参数
    /// - `positions`: `available()` 切片中的下标，按期望的返回顺序给出
    ///
    /// # 返回
    /// 被取出的设备（顺序同 positions；越界或重复的下标被忽略）
    pub fn take(&mut self, equipment_type: &str, positions: &[usize]) -> Vec<EquipmentUnit> {
        let Some(units) = self.by_type.get_mut(equipment_type) else {
            return Vec::new();
        };

        let mut slots: Vec<Option<EquipmentUnit>> = units.drain(..).map(Some).collect();
        let taken: Vec<EquipmentUnit> = positions
            .iter()
            .filter_map(|&pos| slots.get_mut(pos).and_then(Option::take))
            .collect();
        *units = slots.into_iter().flatten().collect();

        self.remaining -= taken.len();
        taken
    }

    /// 快照中剩余设备总数
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}
