// ==========================================
// 设备配置提案系统 - 设备评分函数
// ==========================================
// 职责: (优先级, 性能, 成本, 类型均价, 成本权重) → 期望度分数
// 红线: 纯函数，不读取快照状态；输入越界不做钳制，原样传播
// ==========================================

/// 成本权重缺省值
pub const DEFAULT_COST_WEIGHT: f64 = 0.3;

// ==========================================
// ScoringWeights - 评分参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// 成本惩罚权重 [0, 1]
    pub cost_weight: f64,
}

impl ScoringWeights {
    pub fn new(cost_weight: f64) -> Self {
        Self { cost_weight }
    }

    /// 使用本组参数计算分数
    pub fn score(&self, priority: f64, performance: f64, cost: f64, mean_cost: f64) -> f64 {
        score(priority, performance, cost, mean_cost, self.cost_weight)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(DEFAULT_COST_WEIGHT)
    }
}

/// 计算单台设备对某需求行的期望度
///
/// - need = priority / 100, quality = performance / 100
/// - satisfaction = need * quality
/// - normalized_cost = cost / mean_cost（均价为 0 时除数按 1 处理）
/// - cost_penalty = cost_weight * normalized_cost * (1 - need)
///
/// # 返回
/// satisfaction - cost_penalty，越大越好
pub fn score(priority: f64, performance: f64, cost: f64, mean_cost: f64, cost_weight: f64) -> f64 {
    let need = priority / 100.0;
    let quality = performance / 100.0;
    let satisfaction = need * quality;

    let divisor = if mean_cost == 0.0 { 1.0 } else { mean_cost };
    let normalized_cost = cost / divisor;

    // 高优先级需求对高成本更宽容
    let cost_penalty = cost_weight * normalized_cost * (1.0 - need);

    satisfaction - cost_penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_score_formula() {
        // need=0.7, quality=0.9 → 0.63; penalty=0.3*(9000/9000)*0.3=0.09
        let s = score(70.0, 90.0, 9000.0, 9000.0, 0.3);
        assert!(approx(s, 0.54));
    }

    #[test]
    fn test_full_priority_has_no_cost_penalty() {
        let cheap = score(100.0, 80.0, 1000.0, 5000.0, 0.3);
        let expensive = score(100.0, 80.0, 50000.0, 5000.0, 0.3);
        assert!(approx(cheap, 0.8));
        assert!(approx(expensive, 0.8));
    }

    #[test]
    fn test_zero_mean_cost_uses_unit_divisor() {
        let s = score(50.0, 100.0, 0.0, 0.0, 0.3);
        assert!(s.is_finite());
        assert!(approx(s, 0.5));
    }

    #[test]
    fn test_out_of_range_inputs_propagate() {
        // 150 的优先级不钳制：need=1.5, penalty 为负
        let s = score(150.0, 100.0, 2.0, 1.0, 0.5);
        assert!(approx(s, 1.5 + 0.5 * 2.0 * 0.5));
    }

    #[test]
    fn test_cheaper_unit_wins_at_equal_quality() {
        let weights = ScoringWeights::default();
        let cheap = weights.score(40.0, 70.0, 300.0, 400.0);
        let pricey = weights.score(40.0, 70.0, 500.0, 400.0);
        assert!(cheap > pricey);
    }

    #[test]
    fn test_zero_cost_weight_ignores_cost() {
        let weights = ScoringWeights::new(0.0);
        assert!(approx(
            weights.score(30.0, 60.0, 100.0, 10.0),
            weights.score(30.0, 60.0, 1.0, 10.0)
        ));
    }
}
