//! Server-rendered pages. Each page is a plain context struct whose
//! `Display` impl writes an HTML document; all interpolated text is escaped.

use std::fmt::{self, Display, Formatter};

use crate::model::{
    attendance::{Attendance, format_datetime},
    employee::Employee,
};
use crate::report::DepartmentCount;

pub struct EmployeeListPage<'a> {
    pub title: &'a str,
    pub employees: &'a [Employee],
}

pub struct EmployeeDetailsPage<'a> {
    pub employee: &'a Employee,
    pub attendance: &'a [Attendance],
}

pub struct ReportPage<'a> {
    pub report_data: &'a [DepartmentCount],
}

/// HTML-escapes the wrapped text when displayed.
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

fn opt(value: Option<&str>) -> Escaped<'_> {
    Escaped(value.unwrap_or_default())
}

fn header(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
    let title = Escaped(title);
    writeln!(f, "<!DOCTYPE html>\n<html>")?;
    writeln!(f, "<head><meta charset=\"utf-8\"><title>{title}</title></head>")?;
    writeln!(f, "<body>")?;
    writeln!(
        f,
        "<nav><a href=\"/employees\">Employees</a> | <a href=\"/report\">Report</a></nav>"
    )?;
    writeln!(f, "<h1>{title}</h1>")
}

fn footer(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "</body>\n</html>")
}

impl Display for EmployeeListPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        header(f, self.title)?;
        writeln!(f, "<table>")?;
        writeln!(
            f,
            "<tr><th>ID</th><th>Name</th><th>Designation</th><th>Department</th><th>Date joined</th></tr>"
        )?;
        for e in self.employees {
            writeln!(
                f,
                "<tr><td><a href=\"/employee/{id}\">{id}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                Escaped(&e.name),
                opt(e.designation.as_deref()),
                opt(e.department.as_deref()),
                e.date_joined,
                id = e.id,
            )?;
        }
        writeln!(f, "</table>")?;
        footer(f)
    }
}

impl Display for EmployeeDetailsPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let e = self.employee;
        header(f, &e.name)?;
        writeln!(f, "<dl>")?;
        writeln!(f, "<dt>ID</dt><dd>{}</dd>", e.id)?;
        writeln!(f, "<dt>Designation</dt><dd>{}</dd>", opt(e.designation.as_deref()))?;
        writeln!(f, "<dt>Department</dt><dd>{}</dd>", opt(e.department.as_deref()))?;
        writeln!(f, "<dt>Date joined</dt><dd>{}</dd>", e.date_joined)?;
        writeln!(f, "</dl>")?;
        writeln!(f, "<h2>Attendance</h2>")?;
        if self.attendance.is_empty() {
            writeln!(f, "<p>No attendance records.</p>")?;
        } else {
            writeln!(f, "<table>\n<tr><th>ID</th><th>In</th><th>Out</th></tr>")?;
            for a in self.attendance {
                writeln!(
                    f,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    a.id,
                    format_datetime(&a.in_time),
                    a.out_time.as_ref().map(format_datetime).unwrap_or_default(),
                )?;
            }
            writeln!(f, "</table>")?;
        }
        footer(f)
    }
}

impl Display for ReportPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        header(f, "Department Report")?;
        writeln!(f, "<table>\n<tr><th>Department</th><th>Employees</th></tr>")?;
        for row in self.report_data {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td></tr>",
                Escaped(row.label()),
                row.count
            )?;
        }
        writeln!(f, "</table>")?;
        footer(f)
    }
}
