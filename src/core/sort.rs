use crate::core::Student;
use std::cmp::Ordering;

/// Stable descending sort by grade. Students with equal grades keep their
/// relative order. NaN grades sort after every other grade.
pub fn sort_descending_by_grade(students: &mut [Student]) {
    students.sort_by(|a, b| descending_grade(a.grade, b.grade));
    tracing::debug!("Sorted {} students by grade (descending)", students.len());
}

// NaN 固定排在最後，其餘依成績由高到低；0.0 與 -0.0 視為同分
fn descending_grade(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable ascending sort by id. Establishes the precondition of
/// [`crate::core::search::find_by_id`].
pub fn sort_ascending_by_id(students: &mut [Student]) {
    students.sort_by_key(|s| s.id);
    tracing::debug!("Sorted {} students by id (ascending)", students.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, id: i32, grade: f64) -> Student {
        let mut s = Student::new(name, id);
        s.set_grade(grade);
        s
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sort_descending_by_grade() {
        let mut roster = vec![
            student("Alice", 3, 90.0),
            student("Bob", 1, 70.0),
            student("Cara", 2, 80.0),
        ];
        sort_descending_by_grade(&mut roster);

        assert_eq!(names(&roster), vec!["Alice", "Cara", "Bob"]);
        for pair in roster.windows(2) {
            assert!(pair[0].grade >= pair[1].grade);
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut roster = vec![
            student("Dan", 4, 60.0),
            student("Eve", 5, 85.0),
            student("Fay", 6, 60.0),
            student("Gus", 7, 85.0),
        ];
        sort_descending_by_grade(&mut roster);

        assert_eq!(names(&roster), vec!["Eve", "Gus", "Dan", "Fay"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut roster = vec![
            student("A", 1, 55.0),
            student("B", 2, 92.0),
            student("C", 3, 55.0),
            student("D", 4, -1.0),
        ];
        sort_descending_by_grade(&mut roster);
        let once = roster.clone();
        sort_descending_by_grade(&mut roster);

        assert_eq!(roster, once);
    }

    #[test]
    fn test_nan_grades_sort_last_and_rest_stay_descending() {
        let mut roster = vec![
            student("N1", 1, f64::NAN),
            student("Low", 2, 50.0),
            student("Top", 3, 90.0),
            student("N2", 4, f64::NAN),
            student("Mid", 5, 70.0),
            student("Inf", 6, f64::INFINITY),
            student("Neg", 7, -5.0),
        ];
        sort_descending_by_grade(&mut roster);

        assert_eq!(
            names(&roster),
            vec!["Inf", "Top", "Mid", "Low", "Neg", "N1", "N2"]
        );
    }

    #[test]
    fn test_signed_zero_grades_are_ties() {
        let mut roster = vec![student("Pos", 1, 0.0), student("Neg", 2, -0.0)];
        sort_descending_by_grade(&mut roster);
        assert_eq!(names(&roster), vec!["Pos", "Neg"]);

        let mut roster = vec![student("Neg", 2, -0.0), student("Pos", 1, 0.0)];
        sort_descending_by_grade(&mut roster);
        assert_eq!(names(&roster), vec!["Neg", "Pos"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Student> = Vec::new();
        sort_descending_by_grade(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![student("Solo", 1, 42.0)];
        sort_descending_by_grade(&mut single);
        assert_eq!(names(&single), vec!["Solo"]);
    }

    #[test]
    fn test_sort_ascending_by_id_is_stable() {
        let mut roster = vec![
            student("Alice", 3, 90.0),
            student("Bob", 1, 70.0),
            student("Bea", 1, 75.0),
            student("Cara", 2, 80.0),
        ];
        sort_ascending_by_id(&mut roster);

        assert_eq!(names(&roster), vec!["Bob", "Bea", "Cara", "Alice"]);
    }
}
