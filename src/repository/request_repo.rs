// ==========================================
// 设备配置提案系统 - 申请单仓储
// ==========================================
// 表: solicitudes_equipamiento / detalles_solicitud
// 红线: Repository 不含业务逻辑，不修改申请单状态
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::request::{EquipmentRequest, RequestDetail};
use crate::domain::role::Role;
use crate::domain::types::RequestStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// RequestRepository - 申请单仓储
// ==========================================
pub struct RequestRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RequestRepository {
    /// 创建新的 RequestRepository 实例
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

    /// 按主键查询申请单
    ///
    /// # 返回
    /// - Ok(None): 申请单不存在
    /// - Err(FieldValueError): estado / fecha 无法解析
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<EquipmentRequest>> {
        let conn = self.get_conn()?;
        let raw = conn
            .query_row(
                r#"
                SELECT id, nombre_solicitud, estado, creado_por, fecha, comentarios
                FROM solicitudes_equipamiento
                WHERE id = ?1
                "#,
                params![id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, Option<String>>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, name, status, created_by, date, comments)) = raw else {
            return Ok(None);
        };

        let status = status
            .parse::<RequestStatus>()
            .map_err(|message| RepositoryError::FieldValueError {
                field: "estado".to_string(),
                message,
            })?;

        Ok(Some(EquipmentRequest {
            id,
            name,
            status,
            created_by,
            date: parse_timestamp(&date)?,
            comments,
        }))
    }

    /// 查询申请明细（提交顺序，id 升序），并关联岗位
    pub fn find_details(&self, request_id: i64) -> RepositoryResult<Vec<RequestDetail>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT d.id, d.solicitud_id, d.cantidad_puestos,
                   r.id, r.nombre_rol, r.descripcion
            FROM detalles_solicitud d
            JOIN roles r ON r.id = d.rol_id
            WHERE d.solicitud_id = ?1
            ORDER BY d.id ASC
            "#,
        )?;

        let rows = stmt
            .query_map(params![request_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    Role {
                        id: row.get(3)?,
                        name: row.get(4)?,
                        description: row.get(5)?,
                    },
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, request_id, head_count, role)| {
                let head_count =
                    u32::try_from(head_count).map_err(|_| RepositoryError::FieldValueError {
                        field: "cantidad_puestos".to_string(),
                        message: format!("非法编制人数 {} (detalle id={})", head_count, id),
                    })?;
                Ok(RequestDetail::new(id, request_id, role, head_count))
            })
            .collect()
    }
}

/// 解析 SQLite 时间文本
///
/// 支持 `YYYY-MM-DD HH:MM:SS`、ISO `T` 分隔形式和纯日期
fn parse_timestamp(raw: &str) -> RepositoryResult<NaiveDateTime> {
    let trimmed = raw.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| RepositoryError::FieldValueError {
            field: "fecha".to_string(),
            message: format!("无法解析时间: {}", raw),
        })
}
