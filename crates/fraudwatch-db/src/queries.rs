use crate::Database;
use crate::models::ReportRow;
use anyhow::Result;
use rusqlite::{Connection, Row};

const REPORT_COLUMNS: &str = "id, name, mobile_number, amount_bdt, created_at, updated_at";

impl Database {
    /// Insert a report and return the stored row with its assigned id and timestamps.
    pub fn insert_report(&self, name: &str, mobile_number: &str, amount_bdt: f64) -> Result<ReportRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO fraud_reports (name, mobile_number, amount_bdt) VALUES (?1, ?2, ?3)",
                rusqlite::params![name, mobile_number, amount_bdt],
            )?;
            let id = conn.last_insert_rowid();
            query_report_by_id(conn, id)?
                .ok_or_else(|| anyhow::anyhow!("Inserted report {} vanished", id))
        })
    }

    /// All reports, newest first.
    pub fn list_reports(&self) -> Result<Vec<ReportRow>> {
        self.with_conn(query_reports)
    }

    pub fn count_reports(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM fraud_reports", [], |row| row.get(0))?;
            Ok(count as u64)
        })
    }

    /// Replace the editable fields of a report and refresh `updated_at`.
    /// Returns `None` when no report has this id.
    pub fn update_report(
        &self,
        id: i64,
        name: &str,
        mobile_number: &str,
        amount_bdt: f64,
    ) -> Result<Option<ReportRow>> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE fraud_reports
                 SET name = ?2, mobile_number = ?3, amount_bdt = ?4,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?1",
                rusqlite::params![id, name, mobile_number, amount_bdt],
            )?;

            if changed == 0 {
                return Ok(None);
            }
            query_report_by_id(conn, id)
        })
    }
}

fn map_report(row: &Row<'_>) -> rusqlite::Result<ReportRow> {
    Ok(ReportRow {
        id: row.get(0)?,
        name: row.get(1)?,
        mobile_number: row.get(2)?,
        amount_bdt: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn query_report_by_id(conn: &Connection, id: i64) -> Result<Option<ReportRow>> {
    let mut stmt =
        conn.prepare(&format!("SELECT {} FROM fraud_reports WHERE id = ?1", REPORT_COLUMNS))?;

    let row = stmt.query_row([id], map_report).optional()?;

    Ok(row)
}

fn query_reports(conn: &Connection) -> Result<Vec<ReportRow>> {
    // id breaks ties between reports created within the same millisecond
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM fraud_reports ORDER BY created_at DESC, id DESC",
        REPORT_COLUMNS
    ))?;

    let rows = stmt
        .query_map([], map_report)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let db = db();
        let row = db.insert_report("Karim", "01712345678", 500.0).unwrap();

        assert_eq!(row.id, 1);
        assert_eq!(row.name, "Karim");
        assert_eq!(row.amount_bdt, 500.0);
        assert!(row.created_at.ends_with('Z'));
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn list_is_newest_first() {
        let db = db();
        db.insert_report("First", "01712345678", 10.0).unwrap();
        db.insert_report("Second", "01812345678", 20.0).unwrap();
        db.insert_report("Third", "01912345678", 30.0).unwrap();

        let names: Vec<String> = db.list_reports().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Third", "Second", "First"]);
    }

    #[test]
    fn count_matches_inserts() {
        let db = db();
        assert_eq!(db.count_reports().unwrap(), 0);
        db.insert_report("Karim", "01712345678", 1.0).unwrap();
        db.insert_report("Rahim", "01712345679", 2.0).unwrap();
        assert_eq!(db.count_reports().unwrap(), 2);
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let db = db();
        let original = db.insert_report("Karim", "01712345678", 500.0).unwrap();

        let updated = db
            .update_report(original.id, "Karim Uddin", "01812345678", 750.5)
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Karim Uddin");
        assert_eq!(updated.mobile_number, "01812345678");
        assert_eq!(updated.amount_bdt, 750.5);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[test]
    fn update_missing_id_is_none() {
        let db = db();
        assert!(db.update_report(42, "Karim", "01712345678", 1.0).unwrap().is_none());
    }

    #[test]
    fn ids_are_not_reused() {
        let db = db();
        let first = db.insert_report("Karim", "01712345678", 1.0).unwrap();
        db.with_conn(|conn| {
            conn.execute("DELETE FROM fraud_reports WHERE id = ?1", [first.id])?;
            Ok(())
        })
        .unwrap();

        let second = db.insert_report("Rahim", "01712345679", 2.0).unwrap();
        assert!(second.id > first.id);
    }
}
