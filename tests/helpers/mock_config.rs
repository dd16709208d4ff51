// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use equipment_proposal::config::ProposalConfigReader;
use equipment_proposal::engine::DEFAULT_COST_WEIGHT;
use std::error::Error;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub cost_weight: f64,
    /// 为 true 时读取配置返回错误
    pub fail: bool,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            cost_weight: DEFAULT_COST_WEIGHT,
            fail: false,
        }
    }

    pub fn with_cost_weight(cost_weight: f64) -> Self {
        Self {
            cost_weight,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            cost_weight: DEFAULT_COST_WEIGHT,
            fail: true,
        }
    }
}

impl ProposalConfigReader for MockConfig {
    fn get_cost_weight(&self) -> Result<f64, Box<dyn Error>> {
        if self.fail {
            return Err("config_kv 不可读".into());
        }
        Ok(self.cost_weight)
    }
}
