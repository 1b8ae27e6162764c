//! Integration tests for the table workflow: load, enumerate, filter,
//! add a row, edit and cancel.

use uavfleet_core::edit::RowSnapshots;
use uavfleet_core::listing::{apply_filter, enumerate, matches_filter, prepend_row, DisplayRow};
use uavfleet_core::models::{TableRecord, UavMaintenance, User, Vehicle};
use uavfleet_core::statuses::MaintenanceStatus;
use uavfleet_core::types::{DbId, UNASSIGNED_ID};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const MAINTENANCE_JSON: &str = r#"[
    {"id":11,"uavId":"A-01","inspectionDate":"2023-03-10","status":"ВЫПОЛНЕНО","note":"плановое"},
    {"id":12,"uavId":"A-01","inspectionDate":"2024-09-01","status":"ЗАПЛАНИРОВАНО","note":null},
    {"id":13,"uavId":"A-01","inspectionDate":"2024-01-20","status":"ЗАМЕЧАНИЯ","note":"винт"},
    {"id":14,"uavId":"A-01","inspectionDate":"2022-11-05","status":"ОШИБКИ","note":"датчик"}
]"#;

fn load_maintenance() -> Vec<UavMaintenance> {
    let mut rows: Vec<UavMaintenance> =
        serde_json::from_str(MAINTENANCE_JSON).expect("fixture should deserialize");
    rows.iter_mut().for_each(TableRecord::prepare_for_display);
    enumerate(rows)
}

fn ids<T: DisplayRow>(rows: &[T]) -> Vec<DbId> {
    rows.iter().map(DisplayRow::display_id).collect()
}

// ---------------------------------------------------------------------------
// Test: enumeration
// ---------------------------------------------------------------------------

#[test]
fn maintenance_loads_newest_first_with_dense_ids() {
    let rows = load_maintenance();
    let record_ids: Vec<DbId> = rows.iter().map(|r| r.record_id).collect();
    assert_eq!(record_ids, [12, 13, 11, 14]);
    assert_eq!(ids(&rows), [1, 2, 3, 4]);
}

#[test]
fn re_enumeration_is_idempotent_and_keeps_record_ids() {
    let once = load_maintenance();
    let twice = enumerate(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn users_and_vehicles_sort_ascending() {
    let users: Vec<User> = serde_json::from_str(
        r#"[{"login":"petrov","role":"USER","enabled":true},
            {"login":"admin","role":"ADMIN","enabled":true},
            {"login":"ivanov","role":"VIEW","enabled":false}]"#,
    )
    .unwrap();
    let users = enumerate(users);
    let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
    assert_eq!(logins, ["admin", "ivanov", "petrov"]);

    let vehicles: Vec<Vehicle> = serde_json::from_str(
        r#"[{"type":"VT-30","vehicleId":"B-2"},{"type":"VT-30","vehicleId":"A-9"}]"#,
    )
    .unwrap();
    let vehicles = enumerate(vehicles);
    assert_eq!(vehicles[0].vehicle_id, "A-9");
    assert_eq!(ids(&vehicles), [1, 2]);
}

// ---------------------------------------------------------------------------
// Test: filtering
// ---------------------------------------------------------------------------

#[test]
fn empty_filter_returns_every_row() {
    let rows = load_maintenance();
    let filtered = apply_filter(&rows, "");
    assert_eq!(filtered, rows);
}

#[test]
fn filter_returns_a_matching_subset() {
    let rows = load_maintenance();
    for needle in ["2024", "ВЫПОЛНЕНО", "в", "нет такого"] {
        let filtered = apply_filter(&rows, needle);
        assert!(filtered.len() <= rows.len());
        assert!(filtered.iter().all(|row| matches_filter(row, needle)));
        assert!(filtered
            .iter()
            .all(|row| rows.iter().any(|r| r.record_id == row.record_id)));
        let expected: Vec<DbId> = (1..=filtered.len() as DbId).collect();
        assert_eq!(ids(&filtered), expected);
    }
}

// ---------------------------------------------------------------------------
// Test: add row and cancel edits
// ---------------------------------------------------------------------------

#[test]
fn added_row_goes_to_the_top() {
    let mut rows = load_maintenance();
    prepend_row(&mut rows, UavMaintenance::new_for("A-01"));
    assert_eq!(rows[0].record_id, UNASSIGNED_ID);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows.len(), 5);
    assert_eq!(ids(&rows), [1, 2, 3, 4, 5]);
}

#[test]
fn cancel_reverts_to_load_time_state_every_time() {
    let mut rows = load_maintenance();
    let snapshots = RowSnapshots::capture(&rows);

    rows[1].note = "первая правка".to_string();
    rows[1].status = MaintenanceStatus::Done;
    assert!(snapshots.revert(&mut rows, 1));
    assert_eq!(rows[1].note, "винт");
    assert_eq!(rows[1].status, MaintenanceStatus::Remarks);

    rows[1].note = "вторая правка".to_string();
    assert!(snapshots.revert(&mut rows, 1));
    assert_eq!(rows[1].note, "винт");
    assert_eq!(ids(&rows), [1, 2, 3, 4]);
}

#[test]
fn wire_copy_converts_dates_back_to_iso() {
    let rows = load_maintenance();
    let wire = rows[0].to_wire();
    assert_eq!(rows[0].inspection_date, "01.09.2024");
    assert_eq!(wire.inspection_date, "2024-09-01");
    let json = serde_json::to_value(&wire).unwrap();
    assert_eq!(json["recordId"], 12);
    assert_eq!(json["status"], "ЗАПЛАНИРОВАНО");
}
