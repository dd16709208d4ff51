// ==========================================
// 设备配置提案系统 - 领域类型定义
// ==========================================
// 状态字符串与数据库/前端保持一致（小写西语）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 设备状态 (Equipment Status)
// ==========================================
// 红线: 只有 Disponible 的设备进入库存快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Disponible,    // 可用
    Asignado,      // 已分配给员工
    Baja,          // 已报废
    Mantenimiento, // 维修中
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Disponible => "disponible",
            EquipmentStatus::Asignado => "asignado",
            EquipmentStatus::Baja => "baja",
            EquipmentStatus::Mantenimiento => "mantenimiento",
        }
    }

    /// 是否可进入配置快照
    pub fn is_available(&self) -> bool {
        matches!(self, EquipmentStatus::Disponible)
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disponible" => Ok(EquipmentStatus::Disponible),
            "asignado" => Ok(EquipmentStatus::Asignado),
            "baja" => Ok(EquipmentStatus::Baja),
            "mantenimiento" => Ok(EquipmentStatus::Mantenimiento),
            other => Err(format!("未知设备状态: {}", other)),
        }
    }
}

// ==========================================
// 申请单状态 (Request Status)
// ==========================================
// 引擎只读，不做状态流转
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pendiente,
    Resuelta,
    Rechazada,
    EnProceso,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pendiente => "pendiente",
            RequestStatus::Resuelta => "resuelta",
            RequestStatus::Rechazada => "rechazada",
            RequestStatus::EnProceso => "en_proceso",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pendiente
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendiente" => Ok(RequestStatus::Pendiente),
            "resuelta" => Ok(RequestStatus::Resuelta),
            "rechazada" => Ok(RequestStatus::Rechazada),
            "en_proceso" | "en-proceso" => Ok(RequestStatus::EnProceso),
            other => Err(format!("未知申请单状态: {}", other)),
        }
    }
}
