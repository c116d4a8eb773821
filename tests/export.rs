#[cfg(test)]
mod tests {
    use roster::db::students::Students;
    use roster::libs::export::{ExportOutcome, Exporter};
    use roster::libs::service;
    use roster::libs::student::{StudentForm, COLUMNS};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static DB_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext {
                _guard: guard,
                temp_dir,
            }
        }
    }

    fn sample_form(roll: i64, name: &str) -> StudentForm {
        StudentForm {
            name: name.to_string(),
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

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_header_and_row_order(ctx: &mut ExportTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(202, "Bina")).unwrap();
        service::add(&mut store, &sample_form(101, "Asha")).unwrap();

        let output_path = ctx.temp_dir.path().join("records.csv");
        let exporter = Exporter::new(Some(output_path.clone()));
        let outcome = exporter.export(&mut store).unwrap();
        assert_eq!(outcome, ExportOutcome::Written(2));

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        // Header row exactly matches the declared column order
        assert_eq!(lines[0], COLUMNS.join(","));

        // Data rows follow view ordering (roll ascending)
        assert!(lines[1].starts_with("Asha,101,"));
        assert!(lines[2].starts_with("Bina,202,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_quotes_embedded_delimiters(ctx: &mut ExportTestContext) {
        let mut store = Students::new().unwrap();
        let mut form = sample_form(101, "Asha");
        form.address = "12, Lake Road".to_string();
        service::add(&mut store, &form).unwrap();

        let output_path = ctx.temp_dir.path().join("records.csv");
        Exporter::new(Some(output_path.clone())).export(&mut store).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"12, Lake Road\""));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel_writes_workbook(ctx: &mut ExportTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101, "Asha")).unwrap();

        let output_path = ctx.temp_dir.path().join("records.xlsx");
        let outcome = Exporter::new(Some(output_path.clone())).export(&mut store).unwrap();
        assert_eq!(outcome, ExportOutcome::Written(1));

        assert!(output_path.exists());
        let bytes = std::fs::read(&output_path).unwrap();
        assert!(bytes.len() > 0);
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_table_writes_no_file(ctx: &mut ExportTestContext) {
        let mut store = Students::new().unwrap();

        let output_path = ctx.temp_dir.path().join("records.csv");
        let outcome = Exporter::new(Some(output_path.clone())).export(&mut store).unwrap();

        assert_eq!(outcome, ExportOutcome::Empty);
        assert!(!output_path.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_extension_selects_format(ctx: &mut ExportTestContext) {
        let mut store = Students::new().unwrap();
        service::add(&mut store, &sample_form(101, "Asha")).unwrap();

        // Unknown extensions fall back to the Excel workbook format
        let other_path = ctx.temp_dir.path().join("records.out");
        Exporter::new(Some(other_path.clone())).export(&mut store).unwrap();
        let bytes = std::fs::read(&other_path).unwrap();
        assert_eq!(&bytes[..2], b"PK");

        // Extension matching is case-insensitive
        let upper_path = ctx.temp_dir.path().join("records.CSV");
        Exporter::new(Some(upper_path.clone())).export(&mut store).unwrap();
        let content = std::fs::read_to_string(&upper_path).unwrap();
        assert!(content.starts_with("NAME,ROLL_NO,"));
    }
}
