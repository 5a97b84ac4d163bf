//! Faculty roster loading.
//!
//! The roster is a colon-separated text file, one record per line:
//! `id:name:employee_code:designation:department_code`.
//!
use crate::app::account::FacultyRecord;
use crate::error::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and parse the roster at `path`.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<FacultyRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_ctx(|| format!("read roster {}", path.display()))?;
    Ok(parse_roster(&contents))
}

/// Parse roster text. Comments, blank lines and lines with fewer than five fields are skipped.
pub fn parse_roster(contents: &str) -> Vec<FacultyRecord> {
    let mut records = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let parts: Vec<&str> = line.splitn(5, ':').map(str::trim).collect();
        if parts.len() < 5 { continue; }
        records.push(FacultyRecord {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            employee_code: parts[2].to_string(),
            designation: parts[3].to_string(),
            department_code: parts[4].to_string(),
        });
    }
    records
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{path::PathBuf, time::{SystemTime, UNIX_EPOCH}};

	fn tmp_path(tag: &str) -> PathBuf {
		let mut p = std::env::temp_dir();
		let n = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
		p.push(format!("fa_{}_{}_{}", tag, std::process::id(), n));
		p
	}

	#[test]
	fn parse_roster_basic() {
		let data = "\
# id:name:code:designation:dept
F1:Jane Doe:EMP001:Professor:CS

F2 : John Roe : EMP002 : Lecturer : MATH
broken:line
";
		let recs = parse_roster(data);
		assert_eq!(recs.len(), 2);
		assert_eq!(recs[0].id, "F1");
		assert_eq!(recs[0].name, "Jane Doe");
		assert_eq!(recs[0].employee_code, "EMP001");
		assert_eq!(recs[1].designation, "Lecturer");
		assert_eq!(recs[1].department_code, "MATH");
	}

	#[test]
	fn department_may_contain_colons() {
		let recs = parse_roster("F9:A B:E9:Reader:EE:LAB");
		assert_eq!(recs.len(), 1);
		assert_eq!(recs[0].department_code, "EE:LAB");
	}

	#[test]
	fn load_roster_from_file() {
		let path = tmp_path("roster");
		fs::write(&path, "F1:Jane Doe:EMP001:Professor:CS\n").unwrap();
		let recs = load_roster(&path).unwrap();
		fs::remove_file(&path).ok();
		assert_eq!(recs.len(), 1);
	}

	#[test]
	fn load_roster_missing_file_names_path() {
		let path = tmp_path("missing");
		let err = load_roster(&path).unwrap_err();
		assert!(err.to_string().contains("read roster"));
		assert!(err.to_string().contains(&path.display().to_string()));
	}
}
