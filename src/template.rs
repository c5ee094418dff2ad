//! Doxyfile template resolution.
//!
//! The template (`docs/Doxyfile.in`) carries two placeholder tokens that
//! depend on the build: the list of source directories and the output
//! directory. Resolution is a literal, whole-document substitution.
//!
//! ```text
//! INPUT            = @DOXYGEN_INPUT_DIRECTORY@
//! OUTPUT_DIRECTORY = @DOXYGEN_OUTPUT_DIRECTORY@
//!         │
//!         ▼
//! INPUT            = Interface/source \ Assets/Scripts
//! OUTPUT_DIRECTORY = docs/doxygen
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Replaced by the joined input directories.
pub const INPUT_PLACEHOLDER: &str = "@DOXYGEN_INPUT_DIRECTORY@";

/// Replaced by the output directory.
pub const OUTPUT_PLACEHOLDER: &str = "@DOXYGEN_OUTPUT_DIRECTORY@";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Doxyfile template `{0}` not found")]
    NotFound(PathBuf),

    #[error("cannot read Doxyfile template `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("cannot write resolved Doxyfile `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("placeholder `{token}` missing from Doxyfile template `{path}`")]
    MissingPlaceholder { token: &'static str, path: PathBuf },

    #[error("placeholder `{0}` still present after substitution")]
    Unresolved(&'static str),
}

/// Substitute both placeholders in `text`.
///
/// Fails if either token is absent from `text`, or if a token survives the
/// substitution (a directory name containing a token).
pub fn substitute(
    text: &str,
    input_dirs: &[String],
    delimiter: &str,
    output_dir: &str,
) -> Result<String, TemplateError> {
    let resolved = text
        .replace(INPUT_PLACEHOLDER, &input_dirs.join(delimiter))
        .replace(OUTPUT_PLACEHOLDER, output_dir);

    for token in [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER] {
        if resolved.contains(token) {
            return Err(TemplateError::Unresolved(token));
        }
    }
    Ok(resolved)
}

/// Read `template_path`, substitute both placeholders and write `output_path`.
///
/// The destination is overwritten; its parent directory must already exist.
/// Running twice with the same arguments produces byte-identical output.
pub fn resolve(
    template_path: &Path,
    output_path: &Path,
    input_dirs: &[String],
    delimiter: &str,
    output_dir: &str,
) -> Result<(), TemplateError> {
    let text = fs::read_to_string(template_path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TemplateError::NotFound(template_path.to_path_buf()),
        _ => TemplateError::Read(template_path.to_path_buf(), err),
    })?;

    for token in [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER] {
        if !text.contains(token) {
            return Err(TemplateError::MissingPlaceholder {
                token,
                path: template_path.to_path_buf(),
            });
        }
    }

    let resolved = substitute(&text, input_dirs, delimiter, output_dir)?;
    fs::write(output_path, resolved)
        .map_err(|err| TemplateError::Write(output_path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIMITER: &str = " \\ ";

    fn dirs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substitute_scenario() {
        let text = "in=@DOXYGEN_INPUT_DIRECTORY@ out=@DOXYGEN_OUTPUT_DIRECTORY@";
        let resolved = substitute(text, &dirs(&["A", "B"]), DELIMITER, "docs/out").unwrap();
        assert_eq!(resolved, "in=A \\ B out=docs/out");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let text = "@DOXYGEN_OUTPUT_DIRECTORY@/html @DOXYGEN_OUTPUT_DIRECTORY@/xml \
                    @DOXYGEN_INPUT_DIRECTORY@ @DOXYGEN_INPUT_DIRECTORY@";
        let resolved = substitute(text, &dirs(&["src"]), DELIMITER, "out").unwrap();
        assert_eq!(resolved, "out/html out/xml src src");
    }

    #[test]
    fn test_substitute_single_input_has_no_delimiter() {
        let resolved = substitute(
            "INPUT = @DOXYGEN_INPUT_DIRECTORY@\nOUT = @DOXYGEN_OUTPUT_DIRECTORY@",
            &dirs(&["Interface/source"]),
            DELIMITER,
            "docs/doxygen",
        )
        .unwrap();
        assert_eq!(resolved, "INPUT = Interface/source\nOUT = docs/doxygen");
    }

    #[test]
    fn test_substitute_rejects_token_in_value() {
        let err = substitute(
            "@DOXYGEN_INPUT_DIRECTORY@ @DOXYGEN_OUTPUT_DIRECTORY@",
            &dirs(&["@DOXYGEN_OUTPUT_DIRECTORY@"]),
            DELIMITER,
            "@DOXYGEN_INPUT_DIRECTORY@",
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::Unresolved(_)));
    }

    #[test]
    fn test_resolve_writes_output_without_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");
        let output = dir.path().join("Doxyfile");
        fs::write(
            &template,
            "PROJECT_NAME = vr-modeling\n\
             INPUT = @DOXYGEN_INPUT_DIRECTORY@\n\
             OUTPUT_DIRECTORY = @DOXYGEN_OUTPUT_DIRECTORY@\n\
             GENERATE_XML = YES\n",
        )
        .unwrap();

        resolve(
            &template,
            &output,
            &dirs(&["Interface/source", "Assets/Scripts"]),
            DELIMITER,
            "docs/doxygen",
        )
        .unwrap();

        let resolved = fs::read_to_string(&output).unwrap();
        assert!(!resolved.contains(INPUT_PLACEHOLDER));
        assert!(!resolved.contains(OUTPUT_PLACEHOLDER));
        assert!(resolved.contains("INPUT = Interface/source \\ Assets/Scripts\n"));
        assert!(resolved.contains("OUTPUT_DIRECTORY = docs/doxygen\n"));
        assert!(resolved.contains("GENERATE_XML = YES\n"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");
        let output = dir.path().join("Doxyfile");
        fs::write(&template, "in=@DOXYGEN_INPUT_DIRECTORY@ out=@DOXYGEN_OUTPUT_DIRECTORY@").unwrap();
        let inputs = dirs(&["A", "B"]);

        resolve(&template, &output, &inputs, DELIMITER, "docs/out").unwrap();
        let first = fs::read(&output).unwrap();
        resolve(&template, &output, &inputs, DELIMITER, "docs/out").unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, b"in=A \\ B out=docs/out");
    }

    #[test]
    fn test_resolve_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");
        let output = dir.path().join("Doxyfile");
        fs::write(&template, "@DOXYGEN_INPUT_DIRECTORY@|@DOXYGEN_OUTPUT_DIRECTORY@").unwrap();
        fs::write(&output, "stale content that is much longer than the result").unwrap();

        resolve(&template, &output, &dirs(&["a"]), DELIMITER, "b").unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "a|b");
    }

    #[test]
    fn test_resolve_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");

        let err = resolve(&template, &dir.path().join("Doxyfile"), &dirs(&["a"]), DELIMITER, "b")
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(ref p) if *p == template));
        assert!(err.to_string().contains("Doxyfile.in"));
    }

    #[test]
    fn test_resolve_missing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");
        let output = dir.path().join("Doxyfile");
        fs::write(&template, "INPUT = @DOXYGEN_INPUT_DIRECTORY@\nOUTPUT_DIRECTORY = out\n").unwrap();

        let err = resolve(&template, &output, &dirs(&["a"]), DELIMITER, "b").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MissingPlaceholder { token: OUTPUT_PLACEHOLDER, .. }
        ));
        assert_eq!(
            err.to_string(),
            format!(
                "placeholder `@DOXYGEN_OUTPUT_DIRECTORY@` missing from Doxyfile template `{}`",
                template.display()
            )
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_resolve_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Doxyfile.in");
        let output = dir.path().join("missing-dir").join("Doxyfile");
        fs::write(&template, "@DOXYGEN_INPUT_DIRECTORY@ @DOXYGEN_OUTPUT_DIRECTORY@").unwrap();

        let err = resolve(&template, &output, &dirs(&["a"]), DELIMITER, "b").unwrap_err();
        assert!(matches!(err, TemplateError::Write(ref p, _) if *p == output));
        assert_eq!(
            err.to_string(),
            format!("cannot write resolved Doxyfile `{}`", output.display())
        );
    }
}
