#[cfg(test)]
mod tests {
    use roster::db::students::Students;
    use roster::libs::error::AppError;
    use roster::libs::service::{self, ListOutcome};
    use roster::libs::student::StudentForm;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // The data directory is resolved from HOME/LOCALAPPDATA, so tests that
    // touch the store must not interleave their environment setup.
    static DB_LOCK: Mutex<()> = Mutex::new(());

    struct CrudTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for CrudTestContext {
        fn setup() -> Self {
            let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CrudTestContext {
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

    #[test_context(CrudTestContext)]
    #[test]
    fn test_add_then_view_yields_matching_row(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        let added = service::add(&mut store, &sample_form(101)).unwrap();
        assert_eq!(added.roll_no, 101);

        match service::view_all(&mut store).unwrap() {
            ListOutcome::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].name, "Asha");
                assert_eq!(rows[0].roll_no, 101);
                assert_eq!(rows[0].phone, 9000000000);
                assert_eq!(rows[0].medium, "English");
            }
            ListOutcome::Empty => panic!("expected one row"),
        }
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_duplicate_roll_rejected(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        service::add(&mut store, &sample_form(101)).unwrap();
        let err = service::add(&mut store, &sample_form(101)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateRoll(101)));

        // The first record is untouched
        match service::view_all(&mut store).unwrap() {
            ListOutcome::Rows(rows) => assert_eq!(rows.len(), 1),
            ListOutcome::Empty => panic!("expected one row"),
        }
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_view_all_ordered_by_roll(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        service::add(&mut store, &sample_form(202)).unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();
        service::add(&mut store, &sample_form(303)).unwrap();

        match service::view_all(&mut store).unwrap() {
            ListOutcome::Rows(rows) => {
                let rolls: Vec<i64> = rows.iter().map(|s| s.roll_no).collect();
                assert_eq!(rolls, vec![101, 202, 303]);
            }
            ListOutcome::Empty => panic!("expected three rows"),
        }
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_view_all_on_empty_table_is_signal_not_error(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        assert!(matches!(service::view_all(&mut store).unwrap(), ListOutcome::Empty));
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_update_overwrites_all_fields(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();

        let updated_form = StudentForm {
            name: "Asha Kumari".to_string(),
            roll_no: "101".to_string(),
            branch: "ECE".to_string(),
            phone: "9111111111".to_string(),
            father: "Ravi Kumar".to_string(),
            address: "14 Hill Street".to_string(),
            blood_group: "A+".to_string(),
            mother_name: "Meena Devi".to_string(),
            community: "OBC".to_string(),
            email: "asha.k@example.com".to_string(),
            aadhar: "432143214321".to_string(),
            hostel_status: "Day Scholar".to_string(),
            bank_account: "9988776655".to_string(),
            dob: "2004-07-02".to_string(),
            medium: "Tamil".to_string(),
        };
        service::update(&mut store, &updated_form).unwrap();

        match service::view_all(&mut store).unwrap() {
            ListOutcome::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                let row = &rows[0];
                assert_eq!(row.name, "Asha Kumari");
                assert_eq!(row.branch, "ECE");
                assert_eq!(row.phone, 9111111111);
                assert_eq!(row.father, "Ravi Kumar");
                assert_eq!(row.address, "14 Hill Street");
                assert_eq!(row.blood_group, "A+");
                assert_eq!(row.mother_name, "Meena Devi");
                assert_eq!(row.community, "OBC");
                assert_eq!(row.email, "asha.k@example.com");
                assert_eq!(row.aadhar, "432143214321");
                assert_eq!(row.hostel_status, "Day Scholar");
                assert_eq!(row.bank_account, "9988776655");
                assert_eq!(row.dob, "2004-07-02");
                assert_eq!(row.medium, "Tamil");
            }
            ListOutcome::Empty => panic!("expected one row"),
        }
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_update_of_missing_roll_is_not_found(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        let err = service::update(&mut store, &sample_form(999)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(999)));
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_delete_then_view_is_empty(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();

        let deleted = service::delete(&mut store, Some("101")).unwrap();
        assert_eq!(deleted, 101);

        assert!(matches!(service::view_all(&mut store).unwrap(), ListOutcome::Empty));
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_delete_of_missing_roll_is_not_found(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        let err = service::delete(&mut store, Some("555")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(555)));
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_delete_requires_roll(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();

        assert!(matches!(service::delete(&mut store, None).unwrap_err(), AppError::MissingRoll));
        assert!(matches!(service::delete(&mut store, Some("  ")).unwrap_err(), AppError::MissingRoll));
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_delete_with_non_numeric_roll(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();

        let err = service::delete(&mut store, Some("abc")).unwrap_err();
        assert!(matches!(err, AppError::NotNumeric("Roll no")));

        // Nothing was deleted
        match service::view_all(&mut store).unwrap() {
            ListOutcome::Rows(rows) => assert_eq!(rows.len(), 1),
            ListOutcome::Empty => panic!("expected one row"),
        }
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_stored_record_round_trips_through_form(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();

        // Selecting a row must reproduce exactly the 15 values it displays
        let stored = store.fetch(101).unwrap().expect("record should exist");
        let form = stored.to_form();
        let labels_and_values = form.fields();
        assert_eq!(labels_and_values.len(), 15);
        assert_eq!(form.name, "Asha");
        assert_eq!(form.roll_no, "101");
        assert_eq!(form.phone, "9000000000");

        // Saving the round-tripped form back is a no-op update
        let unchanged = service::update(&mut store, &form).unwrap();
        assert_eq!(unchanged, stored);
    }

    #[test_context(CrudTestContext)]
    #[test]
    fn test_records_persist_across_connections(_ctx: &mut CrudTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101)).unwrap();
        drop(store);

        // Each operation scope opens its own connection
        let mut reopened = Students::new().unwrap();
        let fetched = reopened.fetch(101).unwrap();
        assert!(fetched.is_some());
    }
}
