//! Console and file reporting, plus the removal prompt

pub mod prompt;
pub mod report_writer;

pub use prompt::{confirm_removal, is_affirmative};
pub use report_writer::{
    print_removal_declined, print_removal_outcome, print_report, write_report, ReportFormat,
};
