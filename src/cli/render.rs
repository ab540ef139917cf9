//! Plain-text rendering of the record list and of validation errors.

use students::{Field, FieldError, Student, ValidationErrors};

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Phone", "Gender", "Address"];

fn row(student: &Student) -> [String; 6] {
    [
        student.id().to_string(),
        student.full_name(),
        student.email().to_string(),
        student.phone().to_string(),
        student.gender().to_string(),
        student.address().to_string(),
    ]
}

/// Renders the record list as a table (wide terminals) or as cards (narrow
/// terminals).
#[must_use]
pub fn list(students: &[Student], narrow: bool) -> String {
    if students.is_empty() {
        return "No student records available\nAdd students with the 'Add student' action\n"
            .to_string();
    }

    if narrow {
        cards(students)
    } else {
        table(students)
    }
}

fn table(students: &[Student]) -> String {
    let rows: Vec<[String; 6]> = students.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(str::to_string);
    push_row(&mut out, &header, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn cards(students: &[Student]) -> String {
    let mut out = String::new();
    for (i, student) in students.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} ({})\n  Email: {}\n  Phone: {}\n  Gender: {}\n  Address: {}\n",
            student.full_name(),
            student.id(),
            student.email(),
            student.phone(),
            student.gender(),
            student.address(),
        ));
    }
    out
}

/// A single inline error line, shown beneath the field it belongs to.
#[must_use]
pub fn field_error(field: Field, error: &FieldError) -> String {
    format!("  ✗ {} ({field}): {error}", field.label())
}

/// Every error of a rejected form, one per line, in form order.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| field_error(field, error))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A one-line summary used when choosing a student from a list.
#[must_use]
pub fn choice(student: &Student) -> String {
    format!("{} - {}", student.id(), student.full_name())
}
