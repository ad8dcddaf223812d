use crate::domain::model::SearchPolicy;

/// Resolved settings the interactive shell reads.
pub trait ConfigProvider {
    fn name_width(&self) -> usize;
    fn column_width(&self) -> usize;
    fn grade_precision(&self) -> Option<usize>;
    fn histogram_bins(&self) -> usize;
    fn bar_char(&self) -> char;
    fn search_policy(&self) -> SearchPolicy;
}
