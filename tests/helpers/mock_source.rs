// ==========================================
// Mock 规划数据源 - 用于集成测试
// ==========================================
// 内存数据 + 调用计数（验证明细为空时不访问库存、岗位画像只读一次）
// ==========================================

use chrono::NaiveDate;
use equipment_proposal::domain::{
    EquipmentRequest, EquipmentUnit, RequestDetail, RequestStatus, RequirementLine, Role,
};
use equipment_proposal::engine::PlanningDataSource;
use equipment_proposal::repository::{RepositoryError, RepositoryResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockDataSource {
    requests: HashMap<i64, EquipmentRequest>,
    details: HashMap<i64, Vec<RequestDetail>>,
    lines: HashMap<i64, Vec<RequirementLine>>,
    units: Vec<EquipmentUnit>,
    fail_inventory: bool,
    next_id: AtomicUsize,
    pub inventory_calls: AtomicUsize,
    pub requirement_calls: AtomicUsize,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1
    }

    pub fn with_request(mut self, request_id: i64) -> Self {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        self.requests.insert(
            request_id,
            EquipmentRequest {
                id: request_id,
                name: format!("Solicitud {}", request_id),
                status: RequestStatus::Pendiente,
                created_by: 1,
                date,
                comments: None,
            },
        );
        self
    }

    pub fn with_detail(mut self, request_id: i64, role: Role, head_count: u32) -> Self {
        let id = self.next_id();
        self.details
            .entry(request_id)
            .or_default()
            .push(RequestDetail::new(id, request_id, role, head_count));
        self
    }

    pub fn with_line(
        mut self,
        role_id: i64,
        equipment_type: &str,
        quantity: u32,
        priority: i32,
    ) -> Self {
        let id = self.next_id();
        self.lines
            .entry(role_id)
            .or_default()
            .push(RequirementLine::new(id, role_id, equipment_type, quantity, priority));
        self
    }

    pub fn with_unit(mut self, id: i64, equipment_type: &str, performance: f64, cost: f64) -> Self {
        self.units
            .push(EquipmentUnit::new(id, equipment_type, performance, cost));
        self
    }

    pub fn failing_inventory(mut self) -> Self {
        self.fail_inventory = true;
        self
    }

    pub fn inventory_calls(&self) -> usize {
        self.inventory_calls.load(Ordering::SeqCst)
    }

    pub fn requirement_calls(&self) -> usize {
        self.requirement_calls.load(Ordering::SeqCst)
    }
}

impl PlanningDataSource for MockDataSource {
    fn find_request(&self, request_id: i64) -> RepositoryResult<Option<EquipmentRequest>> {
        Ok(self.requests.get(&request_id).cloned())
    }

    fn find_request_details(&self, request_id: i64) -> RepositoryResult<Vec<RequestDetail>> {
        Ok(self.details.get(&request_id).cloned().unwrap_or_default())
    }

    fn find_requirement_lines(&self, role_id: i64) -> RepositoryResult<Vec<RequirementLine>> {
        self.requirement_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lines.get(&role_id).cloned().unwrap_or_default())
    }

    fn find_available_units(&self) -> RepositoryResult<Vec<EquipmentUnit>> {
        self.inventory_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inventory {
            return Err(RepositoryError::DatabaseQueryError(
                "no such table: equipos".to_string(),
            ));
        }
        Ok(self.units.clone())
    }
}
