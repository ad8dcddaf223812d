use crate::domain::model::{Student, StudentId};

/// Ordered, in-memory collection of students. Insertion order is kept until a
/// sort reorders it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student with a grade of 0 and hands back a handle to it.
    pub fn add(&mut self, name: impl Into<String>, id: StudentId) -> &mut Student {
        self.students.push(Student::new(name, id));
        tracing::debug!("Added student #{} (roster size {})", id, self.students.len());
        let last = self.students.len() - 1;
        &mut self.students[last]
    }

    /// Sets the grade of the student at `index`. Returns false when out of range.
    pub fn set_grade(&mut self, index: usize, grade: f64) -> bool {
        match self.students.get_mut(index) {
            Some(student) => {
                student.set_grade(grade);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Student> {
        self.students.iter_mut()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    pub fn as_mut_slice(&mut self) -> &mut [Student] {
        &mut self.students
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
