use crate::core::{Student, StudentId};

/// Binary search for `target` by id.
///
/// The slice must already be sorted ascending by id; this is not checked. On
/// any other order the result may be `None` even though a matching student
/// exists. With duplicate ids, the returned index is some match, not
/// necessarily the first.
pub fn find_by_id(students: &[Student], target: StudentId) -> Option<usize> {
    if students.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = students.len() - 1;

    // 閉區間 [low, high]
    while low <= high {
        let mid = low + (high - low) / 2;
        let id = students[mid].id;

        if id == target {
            tracing::debug!("Found id {} at index {}", target, mid);
            return Some(mid);
        } else if id < target {
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    tracing::debug!("Id {} not found among {} students", target, students.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[StudentId]) -> Vec<Student> {
        ids.iter()
            .map(|id| Student::new(format!("S{}", id), *id))
            .collect()
    }

    #[test]
    fn test_find_in_ascending_order() {
        let students = roster(&[1, 2, 3]);
        assert_eq!(find_by_id(&students, 2), Some(1));
        assert_eq!(find_by_id(&students, 1), Some(0));
        assert_eq!(find_by_id(&students, 3), Some(2));
    }

    #[test]
    fn test_not_found() {
        let students = roster(&[1, 4, 9, 16]);
        assert_eq!(find_by_id(&students, 0), None);
        assert_eq!(find_by_id(&students, 5), None);
        assert_eq!(find_by_id(&students, 17), None);
        assert_eq!(find_by_id(&[], 1), None);
    }

    #[test]
    fn test_every_present_id_is_found() {
        let ids: Vec<StudentId> = (0..50).map(|i| i * 3 - 20).collect();
        let students = roster(&ids);
        for id in &ids {
            let index = find_by_id(&students, *id).unwrap();
            assert_eq!(students[index].id, *id);
        }
    }

    #[test]
    fn test_duplicates_return_some_match() {
        let students = roster(&[1, 2, 2, 2, 3]);
        let index = find_by_id(&students, 2).unwrap();
        assert_eq!(students[index].id, 2);
    }

    #[test]
    fn test_unsorted_order_can_miss_present_id() {
        // 依成績排序後的順序：id 3, 2, 1
        let students = roster(&[3, 2, 1]);
        assert_eq!(find_by_id(&students, 2), Some(1));
        assert_eq!(find_by_id(&students, 3), None);
        assert_eq!(find_by_id(&students, 1), None);
    }
}
