// ==========================================
// 设备配置提案系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::ProposalApi;
use crate::config::config_manager::ConfigManager;
use crate::db::{init_schema, open_sqlite_connection};
use crate::engine::ProposalRepositories;

/// SQLite 后端的配置提案 API
pub type SqliteProposalApi = ProposalApi<ProposalRepositories, ConfigManager>;

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,
    /// 配置提案API
    pub proposal_api: Arc<SqliteProposalApi>,
    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享连接并建表（幂等）
    /// 2. 初始化仓储集合与配置管理器
    /// 3. 创建API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);
        crate::i18n::init();

        let conn =
            open_sqlite_connection(&db_path).map_err(|e| format!("无法打开数据库: {}", e))?;
        init_schema(&conn).map_err(|e| format!("数据库建表失败: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let repositories = Arc::new(ProposalRepositories::from_connection(conn.clone()));
        let config_manager = Arc::new(
            ConfigManager::from_connection(conn)
                .map_err(|e| format!("无法创建ConfigManager: {}", e))?,
        );

        let proposal_api = Arc::new(ProposalApi::new(repositories, config_manager.clone()));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            proposal_api,
            config_manager,
        })
    }
}

/// 获取默认数据库路径
///
/// 顺序: 环境变量 EQUIPMENT_PROPOSAL_DB_PATH → 用户数据目录 → 当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("EQUIPMENT_PROPOSAL_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./equipment_proposal.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("equipment-proposal");
        // 目录创建失败时保留当前目录回退值
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("equipment_proposal.db");
        }
    }

    path.to_string_lossy().to_string()
}
