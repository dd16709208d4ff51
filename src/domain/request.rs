// ==========================================
// 设备配置提案系统 - 设备申请单
// ==========================================
// 表: solicitudes_equipamiento / detalles_solicitud
// ==========================================

use crate::domain::role::Role;
use crate::domain::types::RequestStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// EquipmentRequest - 申请单头
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRequest {
    pub id: i64,
    pub name: String,              // nombre_solicitud
    pub status: RequestStatus,     // estado（只读）
    pub created_by: i64,           // creado_por
    pub date: NaiveDateTime,       // fecha
    pub comments: Option<String>,  // comentarios
}

// ==========================================
// RequestDetail - 申请明细
// ==========================================
// 一个岗位 + 编制人数（每人一个 slot）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub id: i64,
    pub request_id: i64,
    pub role: Role,
    pub head_count: u32, // cantidad_puestos
}

impl RequestDetail {
    pub fn new(id: i64, request_id: i64, role: Role, head_count: u32) -> Self {
        Self {
            id,
            request_id,
            role,
            head_count,
        }
    }
}
