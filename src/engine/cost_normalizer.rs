// ==========================================
// 设备配置提案系统 - 成本归一化
// ==========================================
// 职责: 计算各设备类型在可用库存中的平均成本
// 红线: 每次规划只在原始快照上计算一次，消耗过程中不重算
// ==========================================

use crate::domain::equipment::EquipmentUnit;
use std::collections::HashMap;

// ==========================================
// CostNormalizer - 类型均价表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostNormalizer {
    mean_by_type: HashMap<String, f64>,
}

impl CostNormalizer {
    /// 从可用设备列表计算均价表
    ///
    /// 无可用设备的类型不出现在表中
    pub fn from_units(units: &[EquipmentUnit]) -> Self {
        let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
        for unit in units {
            let entry = totals.entry(unit.equipment_type.as_str()).or_insert((0.0, 0));
            entry.0 += unit.cost;
            entry.1 += 1;
        }

        let mean_by_type = totals
            .into_iter()
            .map(|(ty, (sum, count))| (ty.to_string(), sum / count as f64))
            .collect();

        Self { mean_by_type }
    }

    /// 某类型的平均成本
    pub fn mean_cost(&self, equipment_type: &str) -> Option<f64> {
        self.mean_by_type.get(equipment_type).copied()
    }

    /// 评分用的参考成本：类型均价，缺失时退回设备自身成本
    pub fn reference_cost(&self, equipment_type: &str, unit_cost: f64) -> f64 {
        self.mean_cost(equipment_type).unwrap_or(unit_cost)
    }

    pub fn len(&self) -> usize {
        self.mean_by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean_by_type.is_empty()
    }
}
