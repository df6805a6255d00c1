//! Check output in the monitoring plugin text format.

use std::fmt::Display;
use std::io::Write;

use aruba_cx_core::{CheckOutcome, EvaluationResult};

/// `<summary> | <perf data>` as printed on stdout.
pub fn format_result(result: &EvaluationResult) -> String {
    result.to_string()
}

/// Single line reported when the check could not reach a verdict.
pub fn format_error(error: &impl Display) -> String {
    format!("UNKNOWN - {}", error)
}

/// Writes exactly one status line per run.
///
/// The check outcome is printed as soon as it is known, before logout; any
/// later error only gets printed when nothing was printed yet.
pub struct ResultPrinter<W: Write> {
    out: W,
    printed: bool,
}

impl<W: Write> ResultPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: false,
        }
    }

    pub fn print_outcome(&mut self, outcome: &CheckOutcome) {
        match outcome {
            Ok(result) => self.print_line(&format_result(result)),
            Err(e) => self.print_line(&format_error(e)),
        }
    }

    pub fn print_error(&mut self, error: &impl Display) {
        self.print_line(&format_error(error));
    }

    fn print_line(&mut self, line: &str) {
        if self.printed {
            return;
        }
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
        self.printed = true;
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use aruba_cx_core::error::QueryError;
    use aruba_cx_core::{CoreError, ServiceState};

    #[test]
    fn test_format_result() {
        let result = EvaluationResult::new(ServiceState::Ok, "All fans OK")
            .with_perf_data("1/1 - ok".to_string());
        assert_eq!(format_result(&result), "All fans OK | 1/1 - ok");
    }

    #[test]
    fn test_format_error() {
        let err = CliError::InvalidArgument("timeout must be at least 1 second".to_string());
        assert_eq!(
            format_error(&err),
            "UNKNOWN - Invalid argument: timeout must be at least 1 second"
        );
    }

    #[test]
    fn test_outcome_printed_once() {
        let mut printer = ResultPrinter::new(Vec::new());
        let outcome: CheckOutcome = Ok(EvaluationResult::new(
            ServiceState::Critical,
            "CRITICAL - Interface should not be down - uplink",
        ));

        printer.print_outcome(&outcome);
        printer.print_error(&CliError::InvalidArgument("late".to_string()));

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "CRITICAL - Interface should not be down - uplink\n");
    }

    #[test]
    fn test_failed_outcome_printed_as_unknown() {
        let mut printer = ResultPrinter::new(Vec::new());
        let outcome: CheckOutcome = Err(CoreError::from(QueryError::InvalidResponse {
            url: "https://sw1/rest/v10.09/system/subsystems/chassis,1/fans".to_string(),
            message: "expected value".to_string(),
        }));

        printer.print_outcome(&outcome);

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert!(text.starts_with("UNKNOWN - Query error"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_error_printed_when_nothing_reported() {
        let mut printer = ResultPrinter::new(Vec::new());
        printer.print_error(&CliError::InvalidArgument("host cannot be empty".to_string()));

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "UNKNOWN - Invalid argument: host cannot be empty\n");
    }
}
