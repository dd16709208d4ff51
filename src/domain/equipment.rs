// ==========================================
// 设备配置提案系统 - 设备领域模型
// ==========================================
// 表: equipos
// ==========================================

use crate::domain::types::EquipmentStatus;
use serde::{Deserialize, Serialize};

/// 性能分缺省值（未登记 rendimiento 时使用的中性值）
pub const DEFAULT_PERFORMANCE: f64 = 50.0;

// ==========================================
// Equipment - 设备完整记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub equipment_type: String,     // tipo_equipo
    pub model: String,              // modelo
    pub serial_number: String,      // numero_serie
    pub status: EquipmentStatus,    // estado
    pub cost: f64,                  // costo
    pub performance: f64,           // 已解析的性能分 (0-100)
    pub employee_id: Option<i64>,   // empleado_id
}

impl Equipment {
    /// 投影为引擎使用的设备单元
    pub fn to_unit(&self) -> EquipmentUnit {
        EquipmentUnit {
            id: self.id,
            equipment_type: self.equipment_type.clone(),
            performance: self.performance,
            cost: self.cost,
        }
    }
}

// ==========================================
// EquipmentUnit - 库存快照中的设备单元
// ==========================================
// 快照内存在 = 可用；被选中后从快照移除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUnit {
    pub id: i64,
    pub equipment_type: String,
    pub performance: f64,
    pub cost: f64,
}

impl EquipmentUnit {
    pub fn new(id: i64, equipment_type: &str, performance: f64, cost: f64) -> Self {
        Self {
            id,
            equipment_type: equipment_type.to_string(),
            performance,
            cost,
        }
    }
}
