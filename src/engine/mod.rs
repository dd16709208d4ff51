// ==========================================
// 设备配置提案系统 - 引擎层
// ==========================================
// 职责: 库存快照、成本归一、评分、分配、汇总与编排
// 红线: Engine 不拼 SQL，不写任何存储
// ==========================================

pub mod allocator;
pub mod assembler;
pub mod cost_normalizer;
pub mod data_source;
pub mod error;
pub mod inventory;
pub mod orchestrator;
pub mod repositories;
pub mod scoring;

// 重导出核心引擎
pub use allocator::ProposalAllocator;
pub use assembler::{ProposalAssembler, ShortageLedger};
pub use cost_normalizer::CostNormalizer;
pub use data_source::PlanningDataSource;
pub use error::{PlanningError, PlanningResult};
pub use inventory::InventorySnapshot;
pub use orchestrator::{absorb_planning_error, ProposalOrchestrator};
pub use repositories::ProposalRepositories;
pub use scoring::{score, ScoringWeights, DEFAULT_COST_WEIGHT};
