use crate::core::{GradeSummary, HistogramBin, Student};

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Arithmetic mean of all grades. An empty slice yields 0.0.
pub fn average(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }

    let sum: f64 = students.iter().map(|s| s.grade).sum();
    sum / students.len() as f64
}

/// Lowest and highest grade in one pass, as `(min, max)`.
///
/// An empty slice yields `(0.0, 0.0)`; callers that need real extremes must
/// check for emptiness first.
pub fn min_max(students: &[Student]) -> (f64, f64) {
    let Some(first) = students.first() else {
        return (0.0, 0.0);
    };

    let mut lowest = first.grade;
    let mut highest = first.grade;
    for student in students {
        if student.grade > highest {
            highest = student.grade;
        }
        if student.grade < lowest {
            lowest = student.grade;
        }
    }

    (lowest, highest)
}

pub fn summarize(students: &[Student]) -> Option<GradeSummary> {
    if students.is_empty() {
        return None;
    }

    let (min, max) = min_max(students);
    Some(GradeSummary {
        count: students.len(),
        average: average(students),
        min,
        max,
    })
}

/// Splits `[min, max]` into `num_bins` equal-width bins, returned in ascending
/// order. The top bin is closed so the maximum grade lands in it.
///
/// When every grade is equal the bin width is zero and all students are
/// counted in the last bin. A `num_bins` of 0 is treated as 1. Ranges wider
/// than `f64::MAX` are binned on pre-scaled values so they do not overflow.
pub fn histogram(students: &[Student], num_bins: usize) -> Vec<HistogramBin> {
    if students.is_empty() {
        return Vec::new();
    }

    let num_bins = num_bins.max(1);
    let bins = num_bins as f64;
    let (lowest, highest) = min_max(students);
    let span = highest - lowest;
    let overflowed = !span.is_finite();
    let bin_width = if overflowed {
        highest / bins - lowest / bins
    } else {
        span / bins
    };
    let last = num_bins - 1;

    let mut counts = vec![0usize; num_bins];
    for student in students {
        let grade = student.grade;
        let index = if grade >= highest || !(bin_width > 0.0) {
            last
        } else {
            let position = if overflowed {
                (grade / bins - lowest / bins) / bin_width * bins
            } else {
                (grade - lowest) / bin_width
            };
            // `as usize` 會把負數與 NaN 收斂為 0
            (position as usize).min(last)
        };
        counts[index] += 1;
    }

    tracing::debug!(
        "Histogram over [{}, {}] with {} bins of width {}",
        lowest,
        highest,
        num_bins,
        bin_width
    );

    let edge = |i: usize| -> f64 {
        if !overflowed {
            lowest + i as f64 * bin_width
        } else if i == 0 {
            lowest
        } else if i == num_bins {
            highest
        } else {
            let t = i as f64 / bins;
            lowest * (1.0 - t) + highest * t
        }
    };

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: edge(i),
            end: edge(i + 1),
            count,
        })
        .collect()
}
