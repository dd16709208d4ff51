// ==========================================
// 设备配置提案系统 - 提案输出模型
// ==========================================
// 序列化字段名与前端约定一致（西语）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 单台设备分配
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "equipo_id")]
    pub equipment_id: i64,
    #[serde(rename = "tipo_equipo")]
    pub equipment_type: String,
    #[serde(rename = "costo")]
    pub cost: f64,
}

// ==========================================
// SlotProposal - 单个岗位编制的配置方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotProposal {
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "puesto")]
    pub slot: u32, // 从 1 开始
    #[serde(rename = "equipos")]
    pub assignments: Vec<Assignment>,
    #[serde(rename = "costo_total_puesto")]
    pub total_cost: f64,
}

impl SlotProposal {
    pub fn new(role: &str, slot: u32) -> Self {
        Self {
            role: role.to_string(),
            slot,
            assignments: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// 追加一台设备并累加成本
    pub fn push(&mut self, assignment: Assignment) {
        self.total_cost += assignment.cost;
        self.assignments.push(assignment);
    }
}

// ==========================================
// Shortage - 缺口
// ==========================================
// (岗位, 设备类型) 在所有 slot 上累计的未满足数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortage {
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "tipo_equipo")]
    pub equipment_type: String,
    #[serde(rename = "cantidad_faltante")]
    pub quantity: u32,
}

// ==========================================
// Proposal - 最优配置提案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(rename = "solicitud_id")]
    pub request_id: i64,
    #[serde(rename = "asignaciones")]
    pub slots: Vec<SlotProposal>,
    #[serde(rename = "costo_total_estimado")]
    pub total_estimated_cost: f64,
    #[serde(rename = "faltantes")]
    pub shortages: Vec<Shortage>,
    #[serde(rename = "mensaje")]
    pub message: String,
}

impl Proposal {
    /// 空提案（未找到/无明细/内部错误时的带内返回）
    pub fn empty(request_id: i64, message: String) -> Self {
        Self {
            request_id,
            slots: Vec::new(),
            total_estimated_cost: 0.0,
            shortages: Vec::new(),
            message,
        }
    }

    /// 全部分配的设备（按 slot 顺序展开）
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.slots.iter().flat_map(|s| s.assignments.iter())
    }

    pub fn is_fully_satisfied(&self) -> bool {
        self.shortages.is_empty()
    }
}
