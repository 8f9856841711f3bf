//! Prompt-driven session: reads a collection of oscillators from a text
//! stream and writes their reports.
//!
//! Input is consumed as whitespace-separated tokens, so several answers may
//! share a line. Prompts go to the output stream; the `try again` notice for
//! an invalid menu selection goes to the error stream.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::errors::PendulumError;
use crate::math::Scalar;
use crate::oscillators::{Oscillator, OscillatorKind};
use crate::report::{collect_reports, OscillationReport, DEFAULT_PRECISION};

/// Interactive session over arbitrary streams.
#[derive(Debug)]
pub struct Session<R, W, E> {
    input: R,
    output: W,
    errors: E,
    pending: VecDeque<String>,
    precision: usize,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session reading from `input`, prompting on `output` and
    /// reporting invalid selections on `errors`.
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
            pending: VecDeque::new(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the number of significant digits used in text reports.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Runs the whole exchange: reads the collection, then writes one text
    /// report per oscillator in input order.
    ///
    /// # Errors
    ///
    /// Propagates stream failures, malformed numbers and premature end of input.
    pub fn run(&mut self) -> Result<Vec<OscillationReport>, PendulumError> {
        let oscillators = self.read_collection()?;
        let reports = collect_reports(&oscillators);
        self.write_reports(&reports)?;
        info!(count = reports.len(), "session finished");
        Ok(reports)
    }

    /// Asks for the count, then for each oscillator in turn.
    ///
    /// # Errors
    ///
    /// Propagates stream failures, malformed numbers and premature end of input.
    pub fn read_collection(&mut self) -> Result<Vec<Oscillator>, PendulumError> {
        let count = self.read_count()?;
        let mut oscillators = Vec::new();
        for _ in 0..count {
            oscillators.push(self.read_oscillator()?);
        }
        Ok(oscillators)
    }

    /// Prompts for and parses the number of oscillators.
    ///
    /// # Errors
    ///
    /// [`PendulumError::InvalidCount`] when the token is not a non-negative integer.
    pub fn read_count(&mut self) -> Result<usize, PendulumError> {
        writeln!(self.output, "Enter number of pendulums:")?;
        let token = self.next_token("number of pendulums")?;
        token
            .parse()
            .map_err(|_| PendulumError::InvalidCount { input: token })
    }

    /// Reads one oscillator, repeating the menu until a selector in `1..=4`
    /// is entered.
    ///
    /// # Errors
    ///
    /// [`PendulumError::InvalidNumber`] when a parameter is not a number.
    pub fn read_oscillator(&mut self) -> Result<Oscillator, PendulumError> {
        let kind = self.read_kind()?;
        let noun = kind.noun();

        writeln!(self.output, "Enter the name of the {noun}:")?;
        let label = self.next_token("name")?;

        let mut values = Vec::with_capacity(kind.parameters().len());
        for spec in kind.parameters() {
            writeln!(
                self.output,
                "Enter the {} of the {noun} ({}):",
                spec.label, spec.unit
            )?;
            let token = self.next_token(spec.label)?;
            let value = token.parse::<Scalar>().map_err(|_| PendulumError::InvalidNumber {
                field: spec.label.to_owned(),
                input: token,
            })?;
            values.push(value);
        }

        Oscillator::build(kind, &label, &values)
    }

    /// Writes text reports using the session precision.
    ///
    /// # Errors
    ///
    /// Propagates output stream failures.
    pub fn write_reports(&mut self, reports: &[OscillationReport]) -> Result<(), PendulumError> {
        for report in reports {
            report.write_text(&mut self.output, self.precision)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_kind(&mut self) -> Result<OscillatorKind, PendulumError> {
        loop {
            writeln!(self.output, "Select the type of a pendulum:")?;
            for kind in OscillatorKind::ALL {
                writeln!(self.output, "{} - {}", kind.selector(), kind)?;
            }
            let token = self.next_token("pendulum type")?;
            match token.parse().ok().and_then(OscillatorKind::from_selector) {
                Some(kind) => return Ok(kind),
                None => {
                    warn!(selector = %token, "invalid pendulum type");
                    writeln!(self.errors, "try again")?;
                }
            }
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<String, PendulumError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PendulumError::UnexpectedEof {
                    expected: expected.to_owned(),
                });
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::oscillators::Oscillating;

    struct Transcript {
        result: Result<Vec<OscillationReport>, PendulumError>,
        output: String,
        errors: String,
    }

    fn run_session(input: &str) -> Transcript {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let result = Session::new(input.as_bytes(), &mut output, &mut errors).run();
        Transcript {
            result,
            output: String::from_utf8(output).expect("utf8 output"),
            errors: String::from_utf8(errors).expect("utf8 errors"),
        }
    }

    #[test]
    fn zero_pendulums_prints_only_the_count_prompt() {
        let t = run_session("0\n");
        assert!(t.result.expect("session succeeds").is_empty());
        assert_eq!(t.output, "Enter number of pendulums:\n");
        assert!(t.errors.is_empty());
    }

    #[test]
    fn reads_each_kind_in_order() {
        let t = run_session("4\n1 LC 1 1\n2 A 9.8\n3 S 9.8\n4 C 1 1 1\n");
        let reports = t.result.expect("session succeeds");
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Electric oscillating circuit LC",
                "Mathematical pendulum A",
                "Spring pendulum S",
                "Compound pendulum C",
            ]
        );
        assert_relative_eq!(reports[3].cyclic_frequency, 9.8_f64.sqrt());
        assert!(t.output.contains("The 4 is the Compound pendulum C.\n"));
        assert!(t.output.contains(
            "Enter the inertia moment of the compound pendulum (kilogram*metre^2):\n"
        ));
    }

    #[test]
    fn invalid_selector_reprompts_same_slot() {
        let t = run_session("1\n7\nzero\n2\nA\n9.8\n");
        let reports = t.result.expect("session succeeds");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].index, 1);
        assert_eq!(t.errors, "try again\ntry again\n");
        assert_eq!(t.output.matches("Select the type of a pendulum:").count(), 3);
    }

    #[test]
    fn output_pass_follows_input_pass() {
        let t = run_session("2\n2 A 9.8\n3 B 9.8\n");
        t.result.expect("session succeeds");
        let last_prompt = t.output.rfind("Enter the weight").expect("spring prompt");
        let first_report = t.output.find("The 1 is the").expect("first report");
        assert!(last_prompt < first_report);
        assert!(t.output.ends_with(
            "The 2 is the Spring pendulum B.\n\
             It has cyclic frequency 1.\n\
             It has square oscillation period 6.28319.\n\
             The (oscillation period)/(cyclic frequency) ratio is 6.28319.\n\
             \n"
        ));
    }

    #[test]
    fn degenerate_parameters_are_reported_verbatim() {
        let t = run_session("1\n2 flat 0\n");
        let reports = t.result.expect("session succeeds");
        assert!(reports[0].cyclic_frequency.is_infinite());
        assert!(t.output.contains("It has cyclic frequency inf.\n"));
        assert!(t.output.contains("ratio is 0.\n"));
    }

    #[test]
    fn malformed_parameter_aborts_with_field_name() {
        let t = run_session("1\n2 A long\n");
        match t.result {
            Err(PendulumError::InvalidNumber { field, input }) => {
                assert_eq!(field, "length");
                assert_eq!(input, "long");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        let t = run_session("-3\n");
        assert!(matches!(t.result, Err(PendulumError::InvalidCount { .. })));
    }

    #[test]
    fn truncated_input_reports_eof() {
        let t = run_session("2\n2 A 9.8\n");
        assert!(matches!(t.result, Err(PendulumError::UnexpectedEof { .. })));
    }

    #[test]
    fn huge_count_without_items_reports_eof() {
        for count in ["18446744073709551615", "1000000000"] {
            let t = run_session(&format!("{count}\n"));
            assert!(
                matches!(t.result, Err(PendulumError::UnexpectedEof { .. })),
                "count {count} should end at the first missing item"
            );
        }
    }

    #[test]
    fn precision_controls_report_digits() {
        let mut output = Vec::new();
        let input = "1\n1 LC 1 1\n".as_bytes();
        let mut session = Session::new(input, &mut output, std::io::sink()).with_precision(10);
        session.run().expect("session succeeds");
        drop(session);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("period 6.283185307.\n"), "got {text}");
    }

    #[test]
    fn read_collection_leaves_output_pass_to_caller() {
        let mut output = Vec::new();
        let oscillators = Session::new("1\n4 C 2 1 0.5\n".as_bytes(), &mut output, std::io::sink())
            .read_collection()
            .expect("collection reads");
        assert_eq!(oscillators.len(), 1);
        assert_eq!(oscillators[0].kind(), OscillatorKind::Compound);
        assert_relative_eq!(oscillators[0].cyclic_frequency(), (0.5 * 9.8_f64 / 2.0).sqrt());
        assert!(!String::from_utf8(output).expect("utf8").contains("The 1 is"));
    }
}
