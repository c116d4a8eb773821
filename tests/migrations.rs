#[cfg(test)]
mod tests {
    use roster::db::db::Db;
    use roster::db::migrations;
    use roster::db::students::Students;
    use roster::libs::service;
    use roster::libs::student::StudentForm;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static DB_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn sample_form(roll: i64) -> StudentForm {
        StudentForm {
            name: "Asha".to_string(),
            roll_no: roll.to_string(),
            branch: "CSE".to_string(),
            phone: "9000000000".to_string(),
            father: "Ravi".to_string(),
            address: "12 Lake Road".to_string(),
            blood_group: "O+".to_string(),
            mother_name: "Meena".to_string(),
            community: "General".to_string(),
            email: "asha@example.com".to_string(),
            aadhar: "123412341234".to_string(),
            hostel_status: "Hostel".to_string(),
            bank_account: "0011223344".to_string(),
            dob: "2004-06-01".to_string(),
            medium: "English".to_string(),
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_fully_migrated(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        assert_eq!(migrations::get_db_version(&db.conn).unwrap(), 1);
        assert!(!migrations::needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_students_table_exists_after_open(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let table: String = db
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'students'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table, "students");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent_and_preserves_data(_ctx: &mut MigrationTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();
        drop(store);

        // A second open applies no further migrations and loses nothing
        let db = Db::new().unwrap();
        assert_eq!(migrations::get_db_version(&db.conn).unwrap(), 1);
        drop(db);

        let mut reopened = Students::new().unwrap();
        assert!(reopened.fetch(101).unwrap().is_some());
    }
}
