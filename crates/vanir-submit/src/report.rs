//! Result and error reporting.

use std::io::Write;

use console::Style;

use vanir_hal::JobHandle;

use crate::settings::OutputMode;

/// Renders a submitted job's reference to an output stream.
pub struct ResultReporter;

impl ResultReporter {
    /// Write the job reference in the requested mode.
    ///
    /// `Id` prints the identifier and nothing else. `FriendlyUri` prints
    /// the handle's status link; a backend that supplies no link (the no-op
    /// sentinel) falls back to the identifier, which is always present.
    pub fn report(
        out: &mut impl Write,
        handle: &JobHandle,
        mode: OutputMode,
    ) -> std::io::Result<()> {
        match mode {
            OutputMode::Id => writeln!(out, "{}", handle.id),
            OutputMode::FriendlyUri => match &handle.friendly_uri {
                Some(uri) => writeln!(out, "{uri}"),
                None => writeln!(out, "{}", handle.id),
            },
        }
    }
}

/// Write the unknown-target diagnostic to the error stream.
///
/// One clearly marked line; nothing else on any stream. The style is scoped
/// to this call and configured for stderr, so it degrades to plain text when
/// the stream is not a color-capable terminal and never leaves styling state
/// behind.
pub fn report_unknown_target(err: &mut impl Write, target: Option<&str>) -> std::io::Result<()> {
    let marker = Style::new().for_stderr().red().bold();

    match target {
        Some(target) => writeln!(
            err,
            "{} unknown execution target '{}'",
            marker.apply_to("error:"),
            target
        ),
        None => writeln!(
            err,
            "{} no execution target specified",
            marker.apply_to("error:")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle_with_uri() -> JobHandle {
        JobHandle::new("job-7", "ionq.qpu").with_friendly_uri("https://portal/jobs/job-7")
    }

    #[test]
    fn test_id_mode_prints_exactly_the_id() {
        let mut out = Vec::new();
        ResultReporter::report(&mut out, &handle_with_uri(), OutputMode::Id).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "job-7\n");
    }

    #[test]
    fn test_friendly_uri_mode_prints_link() {
        let mut out = Vec::new();
        ResultReporter::report(&mut out, &handle_with_uri(), OutputMode::FriendlyUri).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://portal/jobs/job-7\n"
        );
    }

    #[test]
    fn test_friendly_uri_falls_back_to_id() {
        let handle = JobHandle::new("job-8", "nothing");
        let mut out = Vec::new();
        ResultReporter::report(&mut out, &handle, OutputMode::FriendlyUri).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "job-8\n");
    }

    #[test]
    fn test_unknown_target_wording() {
        let mut err = Vec::new();
        report_unknown_target(&mut err, Some("bogus.qpu")).unwrap();
        let line = String::from_utf8(err).unwrap();
        assert!(line.contains("unknown execution target 'bogus.qpu'"));

        let mut err = Vec::new();
        report_unknown_target(&mut err, None).unwrap();
        let line = String::from_utf8(err).unwrap();
        assert!(line.contains("no execution target specified"));
    }
}
