//! Report generation — gather, format, header, content, then save or send.

use patternhub_domain::answer::Answer;

use crate::ports::Console;

/// The variant-specific steps of report generation.
///
/// The four content steps are required. The save/send decision and both
/// delivery steps have defaults a format may override.
pub trait ReportFormat {
    /// Short name used in the fixed steps, e.g. `"PDF"`.
    fn kind(&self) -> &str;

    fn gather_data(&self, console: &mut dyn Console);

    fn format_data(&self, console: &mut dyn Console);

    fn create_header(&self, console: &mut dyn Console);

    fn create_content(&self, console: &mut dyn Console);

    /// Whether the finished report is saved (`true`) or sent (`false`).
    fn wants_save(&self, _console: &mut dyn Console) -> bool {
        true
    }

    fn save_report(&self, console: &mut dyn Console) {
        console.say("Report saved.");
    }

    fn send_report(&self, console: &mut dyn Console) {
        console.say("Report sent by email.");
    }
}

/// What happened to a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Saved,
    Sent,
}

/// Runs the report-generation procedure for one format.
pub struct ReportGenerator<F> {
    format: F,
}

impl<F: ReportFormat> ReportGenerator<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Generate one report.
    ///
    /// Steps: gather, format, header, content, assemble, proofread, then
    /// either save or send depending on [`ReportFormat::wants_save`].
    pub fn generate(&self, console: &mut dyn Console) -> Delivery {
        let _span = tracing::debug_span!("generate_report", kind = self.format.kind()).entered();

        self.format.gather_data(console);
        self.format.format_data(console);
        self.format.create_header(console);
        self.format.create_content(console);
        self.assemble(console);
        self.proofread(console);

        let delivery = if self.format.wants_save(console) {
            self.format.save_report(console);
            Delivery::Saved
        } else {
            self.format.send_report(console);
            Delivery::Sent
        };
        tracing::debug!(?delivery, "report delivered");
        delivery
    }

    fn assemble(&self, console: &mut dyn Console) {
        console.say(&format!("Assembling the {} report.", self.format.kind()));
    }

    fn proofread(&self, console: &mut dyn Console) {
        console.say(&format!("Proofreading the {} report.", self.format.kind()));
    }
}

/// PDF report; saved with the default delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReport;

impl ReportFormat for PdfReport {
    fn kind(&self) -> &str {
        "PDF"
    }

    fn gather_data(&self, console: &mut dyn Console) {
        console.say("Gathering data for the PDF report.");
    }

    fn format_data(&self, console: &mut dyn Console) {
        console.say("Formatting data for PDF.");
    }

    fn create_header(&self, console: &mut dyn Console) {
        console.say("Creating the PDF report header.");
    }

    fn create_content(&self, console: &mut dyn Console) {
        console.say("Creating the PDF report content.");
    }
}

/// Excel report; overrides how the report is saved.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelReport;

impl ReportFormat for ExcelReport {
    fn kind(&self) -> &str {
        "Excel"
    }

    fn gather_data(&self, console: &mut dyn Console) {
        console.say("Gathering data for the Excel report.");
    }

    fn format_data(&self, console: &mut dyn Console) {
        console.say("Formatting data for Excel.");
    }

    fn create_header(&self, console: &mut dyn Console) {
        console.say("Creating the Excel report header.");
    }

    fn create_content(&self, console: &mut dyn Console) {
        console.say("Creating the Excel report content.");
    }

    fn save_report(&self, console: &mut dyn Console) {
        console.say("Excel report saved.");
    }
}

/// HTML report; asks the user whether to save it, otherwise sends it.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReport;

impl ReportFormat for HtmlReport {
    fn kind(&self) -> &str {
        "HTML"
    }

    fn gather_data(&self, console: &mut dyn Console) {
        console.say("Gathering data for the HTML report.");
    }

    fn format_data(&self, console: &mut dyn Console) {
        console.say("Formatting data for HTML.");
    }

    fn create_header(&self, console: &mut dyn Console) {
        console.say("Creating the HTML report header.");
    }

    fn create_content(&self, console: &mut dyn Console) {
        console.say("Creating the HTML report content.");
    }

    fn wants_save(&self, console: &mut dyn Console) -> bool {
        let reply = console.ask("Do you want to save the report? (yes/no): ");
        Answer::parse(reply.as_deref(), "yes").is_yes()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::testing::RecordingConsole;

    /// Records which steps ran, and in which order.
    struct TracingFormat {
        steps: RefCell<Vec<&'static str>>,
        save: bool,
    }

    impl TracingFormat {
        fn new(save: bool) -> Self {
            Self {
                steps: RefCell::new(Vec::new()),
                save,
            }
        }

        fn step(&self, name: &'static str) {
            self.steps.borrow_mut().push(name);
        }
    }

    impl ReportFormat for TracingFormat {
        fn kind(&self) -> &str {
            "traced"
        }

        fn gather_data(&self, _console: &mut dyn Console) {
            self.step("gather");
        }

        fn format_data(&self, _console: &mut dyn Console) {
            self.step("format");
        }

        fn create_header(&self, _console: &mut dyn Console) {
            self.step("header");
        }

        fn create_content(&self, _console: &mut dyn Console) {
            self.step("content");
        }

        fn wants_save(&self, _console: &mut dyn Console) -> bool {
            self.step("decide");
            self.save
        }

        fn save_report(&self, _console: &mut dyn Console) {
            self.step("save");
        }

        fn send_report(&self, _console: &mut dyn Console) {
            self.step("send");
        }
    }

    #[test]
    fn should_run_steps_in_fixed_order_then_save() {
        let generator = ReportGenerator::new(TracingFormat::new(true));
        let mut console = RecordingConsole::default();

        let delivery = generator.generate(&mut console);

        assert_eq!(delivery, Delivery::Saved);
        assert_eq!(
            *generator.format().steps.borrow(),
            vec!["gather", "format", "header", "content", "decide", "save"]
        );
        assert_eq!(
            console.lines,
            vec![
                "Assembling the traced report.",
                "Proofreading the traced report.",
            ]
        );
    }

    #[test]
    fn should_send_instead_of_save_when_decision_is_negative() {
        let generator = ReportGenerator::new(TracingFormat::new(false));
        let mut console = RecordingConsole::default();

        let delivery = generator.generate(&mut console);

        assert_eq!(delivery, Delivery::Sent);
        assert_eq!(
            *generator.format().steps.borrow(),
            vec!["gather", "format", "header", "content", "decide", "send"]
        );
    }

    #[test]
    fn should_save_pdf_report_with_default_delivery() {
        let mut console = RecordingConsole::default();

        let delivery = ReportGenerator::new(PdfReport).generate(&mut console);

        assert_eq!(delivery, Delivery::Saved);
        assert_eq!(
            console.lines,
            vec![
                "Gathering data for the PDF report.",
                "Formatting data for PDF.",
                "Creating the PDF report header.",
                "Creating the PDF report content.",
                "Assembling the PDF report.",
                "Proofreading the PDF report.",
                "Report saved.",
            ]
        );
        assert!(console.questions.is_empty());
    }

    #[test]
    fn should_use_excel_specific_save_step() {
        let mut console = RecordingConsole::default();

        ReportGenerator::new(ExcelReport).generate(&mut console);

        assert_eq!(console.lines.last().map(String::as_str), Some("Excel report saved."));
        assert!(!console.contains("Report saved."));
    }

    #[test]
    fn should_save_html_report_when_user_answers_yes() {
        let mut console = RecordingConsole::with_answers(&["Yes"]);

        let delivery = ReportGenerator::new(HtmlReport).generate(&mut console);

        assert_eq!(delivery, Delivery::Saved);
        assert_eq!(
            console.questions,
            vec!["Do you want to save the report? (yes/no): "]
        );
        assert!(console.contains("Report saved."));
    }

    #[test]
    fn should_send_html_report_when_user_answers_anything_else() {
        let mut console = RecordingConsole::with_answers(&["maybe"]);

        let delivery = ReportGenerator::new(HtmlReport).generate(&mut console);

        assert_eq!(delivery, Delivery::Sent);
        assert!(console.contains("Report sent by email."));
    }

    #[test]
    fn should_send_html_report_when_input_is_exhausted() {
        let mut console = RecordingConsole::default();

        let delivery = ReportGenerator::new(HtmlReport).generate(&mut console);

        assert_eq!(delivery, Delivery::Sent);
    }
}
