//! CLI utility and parsing tests.
//!
//! The CLI is a binary crate, so these tests exercise the equivalent logic
//! through the underlying library crates: output-mode parsing, parameter
//! binding, and program loading.

use std::io::Write;

use vanir_hal::{ProgramInfo, ProgramInput};
use vanir_submit::OutputMode;

// ============================================================================
// Output mode flag values
// ============================================================================

mod output_mode_tests {
    use super::*;

    #[test]
    fn test_default_flag_value_parses() {
        // `--output` defaults to "id" in the CLI definition.
        assert_eq!("id".parse::<OutputMode>().unwrap(), OutputMode::Id);
    }

    #[test]
    fn test_friendly_uri_flag_value_parses() {
        assert_eq!(
            "friendly-uri".parse::<OutputMode>().unwrap(),
            OutputMode::FriendlyUri
        );
    }

    #[test]
    fn test_unknown_flag_value_is_rejected_with_hint() {
        let err = "tsv".parse::<OutputMode>().unwrap_err();
        assert!(err.contains("id"));
        assert!(err.contains("friendly-uri"));
    }
}

// ============================================================================
// --param binding
// ============================================================================

mod param_binding_tests {
    use super::*;

    #[test]
    fn test_repeated_params_bind_in_order() {
        let input = ProgramInput::from_pairs(["theta=0.5", "n=3"]).unwrap();
        assert_eq!(input.len(), 2);
        assert_eq!(input.0["theta"], serde_json::json!(0.5));
        assert_eq!(input.0["n"], serde_json::json!(3));
    }

    #[test]
    fn test_malformed_param_fails() {
        assert!(ProgramInput::from_pairs(["no-equals-sign"]).is_err());
    }

    #[test]
    fn test_no_params_is_empty_input() {
        let input = ProgramInput::from_pairs([]).unwrap();
        assert!(input.is_empty());
    }
}

// ============================================================================
// Buffered driver output (equivalent to commands::submit::execute)
// ============================================================================

mod buffered_output_tests {
    use super::*;
    use vanir_submit::{EXIT_FAILURE, SubmissionDriver, SubmissionSettings, TargetResolver};

    /// The submit command runs the driver over in-memory streams and only
    /// forwards them after the progress spinner is cleared, so a spinner
    /// redraw on stderr can never overwrite a diagnostic. The error line
    /// must arrive intact through the buffer-then-forward path.
    #[tokio::test]
    async fn test_unknown_target_error_survives_buffered_forwarding() {
        let program = ProgramInfo::new("bell", serde_json::json!({ "ir": "..." }));
        let input = ProgramInput::new();
        let settings = SubmissionSettings::new("no.such.target");

        let mut driver = SubmissionDriver::new(TargetResolver::new(), Vec::new(), Vec::new());
        let code = driver.run(&program, &input, &settings).await.unwrap();
        assert_eq!(code, EXIT_FAILURE);

        let (out, err) = driver.into_streams();

        let mut forwarded_out = Vec::new();
        let mut forwarded_err = Vec::new();
        forwarded_out.write_all(&out).unwrap();
        forwarded_err.write_all(&err).unwrap();

        assert!(forwarded_out.is_empty());
        let err_text = String::from_utf8(forwarded_err).unwrap();
        assert!(err_text.contains("unknown execution target 'no.such.target'"));
        assert!(err_text.ends_with('\n'));
    }
}

// ============================================================================
// Program loading (equivalent to commands::common::load_program)
// ============================================================================

mod program_loading_tests {
    use super::*;

    /// Equivalent to commands::common::load_program.
    fn load_program(path: &str) -> anyhow::Result<ProgramInfo> {
        let path_obj = std::path::Path::new(path);
        if !path_obj.exists() {
            anyhow::bail!("File not found: {path}");
        }
        let contents = std::fs::read_to_string(path)?;
        let name = path_obj.file_stem().map_or_else(
            || "program".to_string(),
            |s| s.to_string_lossy().to_string(),
        );
        let payload = serde_json::from_str(&contents)
            .unwrap_or_else(|_| serde_json::Value::String(contents));
        Ok(ProgramInfo::new(name, payload))
    }

    #[test]
    fn test_json_program_loads_as_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"entry": "bell", "ir": "..."}}"#).unwrap();

        let program = load_program(file.path().to_str().unwrap()).unwrap();
        assert_eq!(program.payload["entry"], serde_json::json!("bell"));
    }

    #[test]
    fn test_non_json_program_loads_as_string() {
        let mut file = tempfile::NamedTempFile::with_suffix(".bc").unwrap();
        write!(file, "not json at all").unwrap();

        let program = load_program(file.path().to_str().unwrap()).unwrap();
        assert_eq!(program.payload, serde_json::json!("not json at all"));
    }

    #[test]
    fn test_name_comes_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grover.json");
        std::fs::write(&path, "{}").unwrap();

        let program = load_program(path.to_str().unwrap()).unwrap();
        assert_eq!(program.name, "grover");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_program("/definitely/not/a/file.json").is_err());
    }
}
