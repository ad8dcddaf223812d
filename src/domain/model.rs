use serde::{Deserialize, Serialize};

/// Caller-assigned identifier. Uniqueness is not enforced.
pub type StudentId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub id: StudentId,
    pub grade: f64,
}

impl Student {
    /// 新學生的成績預設為 0
    pub fn new(name: impl Into<String>, id: StudentId) -> Self {
        Self {
            name: name.into(),
            id,
            grade: 0.0,
        }
    }

    /// Overwrites the grade. Any value is accepted, including negative or
    /// non-finite ones.
    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSummary {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// One histogram bucket, covering `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchPolicy {
    /// Binary search over whatever order the roster currently has.
    #[default]
    AsIs,
    /// Sort the roster ascending by id before searching.
    SortById,
}

impl std::str::FromStr for SearchPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "as-is" => Ok(SearchPolicy::AsIs),
            "sort-by-id" => Ok(SearchPolicy::SortById),
            other => Err(format!(
                "unknown search policy '{}', expected 'as-is' or 'sort-by-id'",
                other
            )),
        }
    }
}
