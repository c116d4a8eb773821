use super::student::{Student, COLUMNS};
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Renders the student list as a terminal table, header row first,
    /// columns in declared order.
    pub fn students(students: &[Student]) {
        let mut table = Table::new();

        table.add_row(Row::new(COLUMNS.iter().map(|header| Cell::new(header)).collect()));
        for student in students {
            table.add_row(Row::new(student.columns().iter().map(|value| Cell::new(value)).collect()));
        }
        table.printstd();
    }
}
