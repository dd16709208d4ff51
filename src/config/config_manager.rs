// ==========================================
// 设备配置提案系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::proposal_config_trait::ProposalConfigReader;
use crate::db::open_sqlite_connection;
use crate::engine::scoring::DEFAULT_COST_WEIGHT;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（存在则覆盖）
    pub fn upsert_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        Ok(())
    }
}

// ==========================================
// ProposalConfigReader Trait 实现
// ==========================================
impl ProposalConfigReader for ConfigManager {
    fn get_cost_weight(&self) -> Result<f64, Box<dyn Error>> {
        let value = self.get_config_value(config_keys::COST_WEIGHT)?;
        Ok(match value {
            Some(raw) => parse_cost_weight(&raw),
            None => DEFAULT_COST_WEIGHT,
        })
    }
}

/// 解析成本权重；格式错误或越界 [0, 1] 时回退缺省值
pub(crate) fn parse_cost_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => v,
        _ => {
            tracing::warn!(
                config_key = config_keys::COST_WEIGHT,
                raw_value = %raw,
                default = DEFAULT_COST_WEIGHT,
                "成本权重配置无效，使用缺省值"
            );
            DEFAULT_COST_WEIGHT
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 评分
    pub const COST_WEIGHT: &str = "cost_weight";
}
