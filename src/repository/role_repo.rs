// ==========================================
// 设备配置提案系统 - 岗位与需求画像仓储
// ==========================================
// 表: roles / perfiles_requerimientos
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::role::{RequirementLine, Role};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// RoleRepository - 岗位仓储
// ==========================================
pub struct RoleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RoleRepository {
    /// 创建新的 RoleRepository 实例
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

    /// 按主键查询岗位
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Role>> {
        let conn = self.get_conn()?;
        let role = conn
            .query_row(
                "SELECT id, nombre_rol, descripcion FROM roles WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Role {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(role)
    }

    /// 查询岗位的需求行（定义顺序，id 升序）
    ///
    /// # 说明
    /// - 岗位没有需求行时返回空列表（不是错误）
    /// - cantidad_requerida 为负数视为数据错误
    pub fn find_requirement_lines(&self, role_id: i64) -> RepositoryResult<Vec<RequirementLine>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, rol_id, tipo_equipo, cantidad_requerida, prioridad
            FROM perfiles_requerimientos
            WHERE rol_id = ?1
            ORDER BY id ASC
            "#,
        )?;

        let rows = stmt
            .query_map(params![role_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i32>(4)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, role_id, equipment_type, quantity, priority)| {
                let required_quantity =
                    u32::try_from(quantity).map_err(|_| RepositoryError::FieldValueError {
                        field: "cantidad_requerida".to_string(),
                        message: format!("非法数量 {} (perfil id={})", quantity, id),
                    })?;
                Ok(RequirementLine {
                    id,
                    role_id,
                    equipment_type,
                    required_quantity,
                    priority,
                })
            })
            .collect()
    }
}
