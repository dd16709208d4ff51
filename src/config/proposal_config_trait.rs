// ==========================================
// 设备配置提案系统 - 提案配置读取 Trait
// ==========================================
// 职责: 定义规划引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use std::error::Error;

// ==========================================
// ProposalConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
pub trait ProposalConfigReader: Send + Sync {
    /// 获取成本惩罚权重
    ///
    /// # 返回
    /// - f64: 取值范围 [0, 1]
    ///
    /// # 默认值
    /// - 0.3
    fn get_cost_weight(&self) -> Result<f64, Box<dyn Error>>;
}
