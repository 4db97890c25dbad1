//! Template method — fixed procedures with variant-specific steps.
//!
//! A skeleton (`ReportGenerator`, `Barista`) owns the order of the steps;
//! a variant (`ReportFormat`, `Beverage` implementations) only fills in the
//! steps it is allowed to customize and may answer the one yes/no decision
//! each procedure contains. Because the skeleton is an inherent method of a
//! generic wrapper, no variant can reorder or skip the fixed steps.

pub mod beverage;
pub mod report;

pub use beverage::{Barista, Beverage, Coffee, Condiments, Tea};
pub use report::{Delivery, ExcelReport, HtmlReport, PdfReport, ReportFormat, ReportGenerator};
