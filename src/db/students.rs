use super::db::Db;
use crate::libs::error::AppError;
use crate::libs::student::Student;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const INSERT_STUDENT: &str = "INSERT INTO students (name, roll_no, branch, phone, father, address, blood_group, mother_name, \
     community, email, aadhar, hostel_status, bank_account, dob, medium) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)";
const SELECT_STUDENTS: &str = "SELECT name, roll_no, branch, phone, father, address, blood_group, mother_name, \
     community, email, aadhar, hostel_status, bank_account, dob, medium FROM students";
const ORDER_BY_ROLL: &str = "ORDER BY roll_no";
const WHERE_ROLL: &str = "WHERE roll_no = ?1";
const UPDATE_STUDENT: &str = "UPDATE students SET name = ?1, branch = ?2, phone = ?3, father = ?4, address = ?5, \
     blood_group = ?6, mother_name = ?7, community = ?8, email = ?9, aadhar = ?10, \
     hostel_status = ?11, bank_account = ?12, dob = ?13, medium = ?14 WHERE roll_no = ?15";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE roll_no = ?1";

/// Repository over the `students` table.
///
/// Owns one connection for the scope of a single operation; no retries, no
/// cross-call transaction. Constraint violations on insert surface as
/// [`AppError::DuplicateRoll`]; update and delete report affected-row counts
/// so callers can distinguish a hit from a miss.
pub struct Students {
    conn: Connection,
}

impl Students {
    pub fn new() -> Result<Self, AppError> {
        let db = Db::new()?;
        Ok(Students { conn: db.conn })
    }

    pub fn insert(&mut self, student: &Student) -> Result<(), AppError> {
        self.conn
            .execute(
                INSERT_STUDENT,
                params![
                    student.name,
                    student.roll_no,
                    student.branch,
                    student.phone,
                    student.father,
                    student.address,
                    student.blood_group,
                    student.mother_name,
                    student.community,
                    student.email,
                    student.aadhar,
                    student.hostel_status,
                    student.bank_account,
                    student.dob,
                    student.medium,
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
                    AppError::DuplicateRoll(student.roll_no)
                }
                other => AppError::Storage(other),
            })?;

        Ok(())
    }

    /// Snapshot of the whole table, ordered by roll number ascending.
    pub fn fetch_all(&mut self) -> Result<Vec<Student>, AppError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_STUDENTS, ORDER_BY_ROLL))?;
        let student_iter = stmt.query_map([], row_to_student)?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }

        Ok(students)
    }

    pub fn fetch(&mut self, roll_no: i64) -> Result<Option<Student>, AppError> {
        let student = self
            .conn
            .query_row(&format!("{} {}", SELECT_STUDENTS, WHERE_ROLL), params![roll_no], row_to_student)
            .optional()?;

        Ok(student)
    }

    /// Overwrites every non-key field of the record with the given roll
    /// number. Returns the number of rows affected (0 when no such record).
    pub fn update(&mut self, student: &Student) -> Result<usize, AppError> {
        let affected = self.conn.execute(
            UPDATE_STUDENT,
            params![
                student.name,
                student.branch,
                student.phone,
                student.father,
                student.address,
                student.blood_group,
                student.mother_name,
                student.community,
                student.email,
                student.aadhar,
                student.hostel_status,
                student.bank_account,
                student.dob,
                student.medium,
                student.roll_no,
            ],
        )?;

        Ok(affected)
    }

    /// Removes the record with the given roll number. Returns the number of
    /// rows affected (0 when no such record).
    pub fn delete(&mut self, roll_no: i64) -> Result<usize, AppError> {
        let affected = self.conn.execute(DELETE_STUDENT, params![roll_no])?;

        Ok(affected)
    }
}

fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        name: row.get(0)?,
        roll_no: row.get(1)?,
        branch: row.get(2)?,
        phone: row.get(3)?,
        father: row.get(4)?,
        address: row.get(5)?,
        blood_group: row.get(6)?,
        mother_name: row.get(7)?,
        community: row.get(8)?,
        email: row.get(9)?,
        aadhar: row.get(10)?,
        hostel_status: row.get(11)?,
        bank_account: row.get(12)?,
        dob: row.get(13)?,
        medium: row.get(14)?,
    })
}
