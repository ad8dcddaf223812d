// Application layer: the interactive menu shell and its text rendering.

pub mod report;
pub mod shell;
