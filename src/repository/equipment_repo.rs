// ==========================================
// 设备配置提案系统 - 设备数据仓储
// ==========================================
// 表: equipos
// 红线: Repository 不含业务逻辑，只读
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::equipment::{Equipment, EquipmentUnit, DEFAULT_PERFORMANCE};
use crate::domain::types::EquipmentStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// EquipmentRepository - 设备仓储
// ==========================================
/// 设备仓储
/// 职责: 读取 equipos 表，投影为引擎设备单元
pub struct EquipmentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EquipmentRepository {
    /// 创建新的 EquipmentRepository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询当前可用设备（estado = 'disponible'）
    ///
    /// # 返回
    /// - 按 (tipo_equipo, costo, id) 升序排列的设备单元
    pub fn find_available_units(&self) -> RepositoryResult<Vec<EquipmentUnit>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, tipo_equipo, costo, rendimiento, especificaciones
            FROM equipos
            WHERE estado = ?1
            ORDER BY tipo_equipo ASC, costo ASC, id ASC
            "#,
        )?;

        let units = stmt
            .query_map(params![EquipmentStatus::Disponible.as_str()], |row| {
                let rendimiento: Option<f64> = row.get(3)?;
                let especificaciones: Option<String> = row.get(4)?;
                Ok(EquipmentUnit {
                    id: row.get(0)?,
                    equipment_type: row.get(1)?,
                    cost: row.get(2)?,
                    performance: resolve_performance(rendimiento, especificaciones.as_deref()),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(units)
    }

    /// 按主键查询设备完整记录
    ///
    /// # 返回
    /// - Ok(None): 设备不存在
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Equipment>> {
        let conn = self.get_conn()?;
        let raw = conn
            .query_row(
                r#"
                SELECT id, tipo_equipo, modelo, numero_serie, estado, costo,
                       rendimiento, especificaciones, empleado_id
                FROM equipos
                WHERE id = ?1
                "#,
                params![id],
                map_equipment_row,
            )
            .optional()?;

        raw.map(EquipmentRow::into_equipment).transpose()
    }
}

// 行数据（estado 尚未解析）
struct EquipmentRow {
    id: i64,
    equipment_type: String,
    model: String,
    serial_number: String,
    status: String,
    cost: f64,
    performance: f64,
    employee_id: Option<i64>,
}

impl EquipmentRow {
    fn into_equipment(self) -> RepositoryResult<Equipment> {
        let status = self
            .status
            .parse::<EquipmentStatus>()
            .map_err(|message| RepositoryError::FieldValueError {
                field: "estado".to_string(),
                message,
            })?;

        Ok(Equipment {
            id: self.id,
            equipment_type: self.equipment_type,
            model: self.model,
            serial_number: self.serial_number,
            status,
            cost: self.cost,
            performance: self.performance,
            employee_id: self.employee_id,
        })
    }
}

fn map_equipment_row(row: &Row<'_>) -> SqliteResult<EquipmentRow> {
    let rendimiento: Option<f64> = row.get(6)?;
    let especificaciones: Option<String> = row.get(7)?;
    Ok(EquipmentRow {
        id: row.get(0)?,
        equipment_type: row.get(1)?,
        model: row.get(2)?,
        serial_number: row.get(3)?,
        status: row.get(4)?,
        cost: row.get(5)?,
        performance: resolve_performance(rendimiento, especificaciones.as_deref()),
        employee_id: row.get(8)?,
    })
}

/// 解析性能分
///
/// 顺序: rendimiento 列 → especificaciones JSON 中的 "rendimiento"
/// （数字或数字字符串）→ 缺省 50。不做截断。
pub fn resolve_performance(column: Option<f64>, specifications: Option<&str>) -> f64 {
    if let Some(v) = column {
        return v;
    }

    specifications
        .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
        .and_then(|json| match json.get("rendimiento") {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_PERFORMANCE)
}
