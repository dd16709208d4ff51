// ==========================================
// ProposalApi 端到端测试（SQLite）
// ==========================================
// 测试范围:
// 1. Developer 场景 / 同岗位两个 slot 竞争
// 2. 未找到 / 无明细 的带内与带标签结果
// 3. 引擎不写库
// 4. config_kv 成本权重
// 5. especificaciones 中的性能分
// ==========================================


use equipment_proposal::api::ApiError;
use equipment_proposal::app::AppState;
use equipment_proposal::config::ProposalConfigReader;
use equipment_proposal::i18n;
use test_helpers::*;

fn app_state(db_path: &str) -> AppState {
    AppState::new(db_path.to_string()).expect("无法创建AppState")
}

// ==========================================
// 场景
// ==========================================

#[test]
fn test_developer_scenario_end_to_end() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    let scenario = seed_developer_scenario(&conn).unwrap();

    let state = app_state(&db_path);
    let proposal = state
        .proposal_api
        .try_generate_proposal(scenario.request_id)
        .unwrap();

    assert_eq!(proposal.request_id, scenario.request_id);
    assert_eq!(proposal.slots.len(), 1);

    let slot = &proposal.slots[0];
    assert_eq!(slot.role, "Developer");
    assert_eq!(slot.slot, 1);
    let ids: Vec<i64> = slot.assignments.iter().map(|a| a.equipment_id).collect();
    assert_eq!(ids, vec![scenario.laptop_id, scenario.monitor_id]);
    assert_eq!(slot.total_cost, 33500.0);

    assert_eq!(proposal.total_estimated_cost, 33500.0);
    assert_eq!(proposal.shortages.len(), 1);
    assert_eq!(proposal.shortages[0].role, "Developer");
    assert_eq!(proposal.shortages[0].equipment_type, "Monitor");
    assert_eq!(proposal.shortages[0].quantity, 1);
}

#[test]
fn test_developer_scenario_message_per_locale() {
    let _guard = LOCALE_LOCK.lock().unwrap();
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    let scenario = seed_developer_scenario(&conn).unwrap();
    let state = app_state(&db_path);

    i18n::set_locale("es");
    let proposal = state.proposal_api.generate_optimal_proposal(scenario.request_id);
    assert!(proposal.message.contains("1 faltante"));

    i18n::set_locale("en");
    let proposal = state.proposal_api.generate_optimal_proposal(scenario.request_id);
    assert!(proposal.message.contains("1 equipment shortage"));

    i18n::set_locale(i18n::DEFAULT_LOCALE);
}

#[test]
fn test_two_slots_compete_for_single_unit() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();

    let role_id = insert_role(&conn, "QA").unwrap();
    insert_requirement(&conn, role_id, "Laptop", 1, 90).unwrap();
    let laptop_id = insert_available(&conn, "Laptop", "LAP-QA", 18000.0, 70.0).unwrap();
    let request_id = insert_request(&conn, "QA team").unwrap();
    insert_detail(&conn, request_id, role_id, 2).unwrap();

    let proposal = app_state(&db_path)
        .proposal_api
        .generate_optimal_proposal(request_id);

    assert_eq!(proposal.slots.len(), 2);
    assert_eq!(proposal.slots[0].slot, 1);
    assert_eq!(proposal.slots[0].assignments.len(), 1);
    assert_eq!(proposal.slots[0].assignments[0].equipment_id, laptop_id);
    assert_eq!(proposal.slots[1].slot, 2);
    assert!(proposal.slots[1].assignments.is_empty());
    assert_eq!(proposal.slots[1].total_cost, 0.0);

    assert_eq!(proposal.shortages.len(), 1);
    assert_eq!(proposal.shortages[0].role, "QA");
    assert_eq!(proposal.shortages[0].quantity, 1);
}

// ==========================================
// 未找到 / 无明细
// ==========================================

#[test]
fn test_unknown_request_in_band_and_tagged() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let state = app_state(&db_path);

    let proposal = state.proposal_api.generate_optimal_proposal(9999);
    assert_eq!(proposal.request_id, 9999);
    assert!(proposal.slots.is_empty());
    assert!(proposal.shortages.is_empty());
    assert_eq!(proposal.total_estimated_cost, 0.0);
    assert!(proposal.message.contains("9999"));

    let err = state.proposal_api.try_generate_proposal(9999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_empty_request_in_band_and_tagged() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    insert_available(&conn, "Laptop", "LAP-001", 24500.0, 80.0).unwrap();
    let request_id = insert_request(&conn, "Sin detalles").unwrap();

    let state = app_state(&db_path);

    let proposal = state.proposal_api.generate_optimal_proposal(request_id);
    assert!(proposal.slots.is_empty());
    assert!(proposal.shortages.is_empty());
    assert_eq!(proposal.total_estimated_cost, 0.0);
    assert!(proposal.message.contains(&request_id.to_string()));

    let err = state.proposal_api.try_generate_proposal(request_id).unwrap_err();
    assert!(matches!(err, ApiError::EmptyRequest(id) if id == request_id));
}

#[test]
fn test_non_positive_request_id_is_invalid_input() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let state = app_state(&db_path);

    let err = state.proposal_api.try_generate_proposal(0).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

// ==========================================
// 只读
// ==========================================

#[test]
fn test_engine_performs_no_writes() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    let scenario = seed_developer_scenario(&conn).unwrap();

    let before = equipment_state_rows(&conn).unwrap();
    let state = app_state(&db_path);
    let first = state.proposal_api.generate_optimal_proposal(scenario.request_id);
    let second = state.proposal_api.generate_optimal_proposal(scenario.request_id);
    let after = equipment_state_rows(&conn).unwrap();

    assert_eq!(before, after);
    // 未预留：重复规划得到同样的结果
    assert_eq!(first, second);

    let estado: String = conn
        .query_row(
            "SELECT estado FROM solicitudes_equipamiento WHERE id = ?1",
            [scenario.request_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(estado, "pendiente");
}

// ==========================================
// 配置
// ==========================================

#[test]
fn test_cost_weight_from_config_kv() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();

    let role_id = insert_role(&conn, "Analyst").unwrap();
    insert_requirement(&conn, role_id, "Laptop", 1, 50).unwrap();
    let fast_id = insert_available(&conn, "Laptop", "LAP-FAST", 30000.0, 90.0).unwrap();
    let cheap_id = insert_available(&conn, "Laptop", "LAP-CHEAP", 10000.0, 80.0).unwrap();
    let request_id = insert_request(&conn, "Analistas").unwrap();
    insert_detail(&conn, request_id, role_id, 1).unwrap();

    // 缺省 0.3 → 便宜的胜出
    let state = app_state(&db_path);
    let proposal = state.proposal_api.generate_optimal_proposal(request_id);
    assert_eq!(proposal.slots[0].assignments[0].equipment_id, cheap_id);

    // 权重 0 → 只看满足度
    state
        .config_manager
        .upsert_global_config_value("cost_weight", "0")
        .unwrap();
    assert_eq!(state.config_manager.get_cost_weight().unwrap(), 0.0);
    let proposal = state.proposal_api.generate_optimal_proposal(request_id);
    assert_eq!(proposal.slots[0].assignments[0].equipment_id, fast_id);

    // 非法值回退缺省
    set_config(&conn, "cost_weight", "muy alto").unwrap();
    let proposal = state.proposal_api.generate_optimal_proposal(request_id);
    assert_eq!(proposal.slots[0].assignments[0].equipment_id, cheap_id);
}

// ==========================================
// 性能分解析
// ==========================================

#[test]
fn test_performance_from_specifications_json() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();

    let role_id = insert_role(&conn, "Designer").unwrap();
    insert_requirement(&conn, role_id, "Monitor", 1, 80).unwrap();
    insert_equipment(&conn, "Monitor", "MON-COL", 9000.0, Some(60.0), "disponible", "{}").unwrap();
    let spec_id = insert_equipment(
        &conn,
        "Monitor",
        "MON-SPEC",
        9000.0,
        None,
        "disponible",
        r#"{"pulgadas": 27, "rendimiento": 95}"#,
    )
    .unwrap();
    let request_id = insert_request(&conn, "Diseño").unwrap();
    insert_detail(&conn, request_id, role_id, 1).unwrap();

    let proposal = app_state(&db_path)
        .proposal_api
        .generate_optimal_proposal(request_id);

    assert_eq!(proposal.slots[0].assignments[0].equipment_id, spec_id);
    assert!(proposal.is_fully_satisfied());
}

// ==========================================
// 序列化
// ==========================================

#[test]
fn test_proposal_json_uses_wire_names() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    let scenario = seed_developer_scenario(&conn).unwrap();

    let proposal = app_state(&db_path)
        .proposal_api
        .generate_optimal_proposal(scenario.request_id);
    let json = serde_json::to_value(&proposal).unwrap();

    assert_eq!(json["solicitud_id"], scenario.request_id);
    assert_eq!(json["costo_total_estimado"], 33500.0);
    assert_eq!(json["asignaciones"][0]["rol"], "Developer");
    assert_eq!(json["asignaciones"][0]["puesto"], 1);
    assert_eq!(json["asignaciones"][0]["equipos"][0]["tipo_equipo"], "Laptop");
    assert_eq!(json["asignaciones"][0]["costo_total_puesto"], 33500.0);
    assert_eq!(json["faltantes"][0]["cantidad_faltante"], 1);
    assert!(json["mensaje"].is_string());
}
