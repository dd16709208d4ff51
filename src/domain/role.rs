// ==========================================
// 设备配置提案系统 - 岗位与需求画像
// ==========================================
// 表: roles / perfiles_requerimientos
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Role - 岗位
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,                // nombre_rol
    pub description: Option<String>, // descripcion
}

impl Role {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: None,
        }
    }
}

// ==========================================
// RequirementLine - 需求行
// ==========================================
// 一个岗位对一种设备类型的需求：数量 + 优先级 (1-100，越大越紧要)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementLine {
    pub id: i64,
    pub role_id: i64,
    pub equipment_type: String,  // tipo_equipo
    pub required_quantity: u32,  // cantidad_requerida
    pub priority: i32,           // prioridad
}

impl RequirementLine {
    pub fn new(
        id: i64,
        role_id: i64,
        equipment_type: &str,
        required_quantity: u32,
        priority: i32,
    ) -> Self {
        Self {
            id,
            role_id,
            equipment_type: equipment_type.to_string(),
            required_quantity,
            priority,
        }
    }
}

/// 岗位需求画像: role_id → 需求行（定义顺序）
pub type RequirementProfiles = HashMap<i64, Vec<RequirementLine>>;

/// 按优先级降序排列需求行
///
/// 稳定排序：同优先级保持定义顺序
pub fn sort_by_priority(lines: &[RequirementLine]) -> Vec<&RequirementLine> {
    let mut sorted: Vec<&RequirementLine> = lines.iter().collect();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_priority_is_stable() {
        let lines = vec![
            RequirementLine::new(1, 7, "Mouse", 1, 40),
            RequirementLine::new(2, 7, "Laptop", 1, 100),
            RequirementLine::new(3, 7, "Teclado", 1, 40),
            RequirementLine::new(4, 7, "Monitor", 2, 70),
        ];

        let order: Vec<&str> = sort_by_priority(&lines)
            .iter()
            .map(|l| l.equipment_type.as_str())
            .collect();

        assert_eq!(order, vec!["Laptop", "Monitor", "Mouse", "Teclado"]);
    }
}
