use crate::core::{stats, ConfigProvider, HistogramBin, Student};
use std::io::{self, Write};

const SEPARATOR: &str = "------------------------------------";

pub fn format_grade(grade: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, grade),
        None => format!("{}", grade),
    }
}

/// Fixed-width table of every student followed by the average grade.
pub fn write_student_table<W: Write, C: ConfigProvider>(
    out: &mut W,
    students: &[Student],
    config: &C,
) -> io::Result<()> {
    let name_width = config.name_width();
    let column_width = config.column_width();

    writeln!(
        out,
        "{:>nw$}{:>cw$}{:>cw$}",
        "Name",
        "ID",
        "Grade",
        nw = name_width,
        cw = column_width
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    for student in students {
        writeln!(
            out,
            "{:>nw$}{:>cw$}{:>cw$}",
            student.name,
            student.id,
            format_grade(student.grade, config.grade_precision()),
            nw = name_width,
            cw = column_width
        )?;
    }
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(
        out,
        "Average Grade: {}",
        format_grade(stats::average(students), config.grade_precision())
    )
}

pub fn write_student<W: Write>(
    out: &mut W,
    student: &Student,
    precision: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "Student found:")?;
    writeln!(out, "Name: {}", student.name)?;
    writeln!(out, "ID: {}", student.id)?;
    writeln!(out, "Grade: {}", format_grade(student.grade, precision))
}

pub fn write_histogram<W: Write>(
    out: &mut W,
    bins: &[HistogramBin],
    bar_char: char,
) -> io::Result<()> {
    writeln!(out, "Grade Distribution Histogram:")?;
    for bin in bins {
        let bar: String = std::iter::repeat(bar_char).take(bin.count).collect();
        writeln!(
            out,
            "[{:.2} - {:.2}]: {} ({} students)",
            bin.start, bin.end, bar, bin.count
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(90.0, None), "90");
        assert_eq!(format_grade(87.5, None), "87.5");
        assert_eq!(format_grade(87.456, Some(2)), "87.46");
        assert_eq!(format_grade(70.0, Some(0)), "70");
    }

    #[test]
    fn test_student_table_layout() {
        let mut alice = Student::new("Alice", 3);
        alice.set_grade(90.0);
        let mut bob = Student::new("Bob", 1);
        bob.set_grade(70.0);
        let config = TomlConfig::default();

        let output = render(|out| write_student_table(out, &[alice, bob], &config));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "           Name        ID     Grade");
        assert_eq!(lines[1], SEPARATOR);
        assert_eq!(lines[2], "          Alice         3        90");
        assert_eq!(lines[3], "            Bob         1        70");
        assert_eq!(lines[4], SEPARATOR);
        assert_eq!(lines[5], "Average Grade: 80");
    }

    #[test]
    fn test_histogram_lines() {
        let bins = vec![
            HistogramBin {
                start: 70.0,
                end: 80.0,
                count: 2,
            },
            HistogramBin {
                start: 80.0,
                end: 90.0,
                count: 0,
            },
        ];

        let output = render(|out| write_histogram(out, &bins, '*'));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Grade Distribution Histogram:");
        assert_eq!(lines[1], "[70.00 - 80.00]: ** (2 students)");
        assert_eq!(lines[2], "[80.00 - 90.00]:  (0 students)");
    }
}
