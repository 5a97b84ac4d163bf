use crate::app::AppState;
use crate::app::account::FacultyRecord;

fn matches(record: &FacultyRecord, q: &str) -> bool {
    [
        &record.name,
        &record.employee_code,
        &record.designation,
        &record.department_code,
        &record.id,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(q))
}

/// Filter the visible faculty list by `app.search_query` and reset the selection.
pub fn apply_search(app: &mut AppState) {
    let q = app.search_query.to_lowercase();
    if q.is_empty() {
        app.faculty = app.faculty_all.clone();
    } else {
        app.faculty = app
            .faculty_all
            .iter()
            .filter(|r| matches(r, &q))
            .cloned()
            .collect();
    }
    app.selected_index = 0;
}
