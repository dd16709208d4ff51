// ==========================================
// 设备配置提案系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod equipment;
pub mod proposal;
pub mod request;
pub mod role;
pub mod types;

// 重导出核心类型
pub use equipment::{Equipment, EquipmentUnit, DEFAULT_PERFORMANCE};
pub use proposal::{Assignment, Proposal, Shortage, SlotProposal};
pub use request::{EquipmentRequest, RequestDetail};
pub use role::{sort_by_priority, RequirementLine, RequirementProfiles, Role};
pub use types::{EquipmentStatus, RequestStatus};
