use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use crate::{
    decode::decode,
    encode::encode,
    error::SweepError,
    operations::{Operation, Outcome},
    prompt::Prompter,
    sweep_err, walk,
};

/// One run of a tool over a directory tree
#[derive(Debug)]
pub struct ExecutionPlan {
    pub operation: Operation,
    pub root: PathBuf,
}

/// Tally of a finished run
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scanned: usize,
    pub changed: usize,
    pub untouched: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, result: &Result<Outcome, SweepError>) {
        self.scanned += 1;
        match result {
            Ok(outcome) if outcome.is_change() => self.changed += 1,
            Ok(_) => self.untouched += 1,
            Err(_) => self.failed += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Done. Scanned {} images ({} changed, {} unchanged or skipped, {} failed).",
            self.scanned, self.changed, self.untouched, self.failed
        )
    }
}

impl ExecutionPlan {
    /// Processes every PNG file under the root, one at a time, writing a report
    /// line per file. A file that fails does not stop the run.
    pub fn execute<W: Write>(&self, report: &mut W) -> Result<Summary, SweepError> {
        let files = walk::find_png_files(&self.root)?;
        log::info!("found {} PNG files under {}", files.len(), self.root.display());

        let mut summary = Summary::default();
        for path in &files {
            let result = process_file(path, &self.operation);
            match &result {
                Ok(outcome) => report_outcome(report, path, outcome)?,
                Err(error) => {
                    log::error!("failed to process {}: {error}", path.display());
                    report_line(report, format_args!("[failed] {}: {error}", path.display()))?;
                }
            }
            summary.record(&result);
        }
        Ok(summary)
    }
}

/// Loads, transforms and, if anything changed, overwrites a single file
pub fn process_file(path: &Path, operation: &Operation) -> Result<Outcome, SweepError> {
    let mut image = decode(path)?;
    let outcome = operation.execute(&mut image)?;
    if outcome.is_change() {
        encode(&image, path)?;
    }
    Ok(outcome)
}

fn report_outcome<W: Write>(
    report: &mut W,
    path: &Path,
    outcome: &Outcome,
) -> Result<(), SweepError> {
    let tag: &'static str = outcome.into();
    match outcome {
        Outcome::Unchanged => report_line(report, format_args!("[{tag}] {}", path.display())),
        Outcome::Skipped(_) => {
            report_line(report, format_args!("[{tag}] {}: {outcome}", path.display()))
        }
        _ => report_line(report, format_args!("[{tag}] {} | {outcome}", path.display())),
    }
}

fn report_line<W: Write>(
    report: &mut W,
    line: std::fmt::Arguments<'_>,
) -> Result<(), SweepError> {
    writeln!(report, "{line}").map_err(|e| sweep_err!("unable to write report: {e}"))
}

/// The whole interactive session of a tool: describe, ask for the folder,
/// confirm, process, summarize and wait for Enter.
///
/// Returns `Ok(None)` if the user declined to continue.
pub fn run_session<R: BufRead, W: Write>(
    operation: Operation,
    default_root: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<Summary>, SweepError> {
    prompter.say(operation.description())?;
    prompter.say("Note: the original files will be overwritten.")?;

    let root = prompter.target_directory(default_root)?;
    if !root.exists() {
        return Err(sweep_err!("path does not exist: {}", root.display()));
    }
    prompter.say(format_args!("About to scan: {}", root.display()))?;

    if !prompter.confirm("Continue?")? {
        prompter.say("Operation cancelled.")?;
        return Ok(None);
    }

    let plan = ExecutionPlan { operation, root };
    let summary = plan.execute(prompter.output_mut())?;
    prompter.say(summary)?;
    log::info!("{summary:?}");
    prompter.pause()?;
    Ok(Some(summary))
}

/// Directory containing the running executable, where the tool is usually
/// dropped next to the assets. Falls back to the working directory.
pub fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{RemoveWhiteSettings, SkipReason, TrimSettings};
    use image::{Rgba, RgbaImage};
    use std::fs;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const INK: Rgba<u8> = Rgba([10, 10, 10, 255]);

    fn framed(width: u32, height: u32, margin: u32) -> RgbaImage {
        let mut pixels = RgbaImage::from_pixel(width + 2 * margin, height + 2 * margin, CLEAR);
        for x in margin..margin + width {
            for y in margin..margin + height {
                pixels.put_pixel(x, y, INK);
            }
        }
        pixels
    }

    #[test]
    fn test_process_file_crops_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("framed.png");
        framed(3, 2, 4).save(&path).unwrap();

        let operation = Operation::Trim(TrimSettings::default());
        let outcome = process_file(&path, &operation).unwrap();
        assert_eq!(
            outcome,
            Outcome::Cropped {
                before: (11, 10),
                after: (3, 2)
            }
        );
        assert_eq!(image::open(&path).unwrap().to_rgba8(), framed(3, 2, 0));

        // a second pass finds nothing to crop and leaves the file alone
        let written = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(process_file(&path, &operation).unwrap(), Outcome::Unchanged);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), written);
    }

    #[test]
    fn test_process_file_skips_transparent_image_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        RgbaImage::from_pixel(5, 5, CLEAR).save(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let outcome = process_file(&path, &Operation::Trim(TrimSettings::default())).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::FullyTransparent));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_process_file_reports_decode_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let operation = Operation::RemoveWhite(RemoveWhiteSettings::default());
        assert!(process_file(&path, &operation).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"definitely not a png");
    }

    #[test]
    fn test_execute_continues_after_failures() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a_broken.png"), b"garbage").unwrap();
        framed(2, 2, 1).save(root.join("b_framed.png")).unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        RgbaImage::from_pixel(2, 2, INK)
            .save(root.join("sub").join("c_solid.png"))
            .unwrap();

        let plan = ExecutionPlan {
            operation: Operation::Trim(TrimSettings::default()),
            root: root.to_path_buf(),
        };
        let mut report = Vec::new();
        let summary = plan.execute(&mut report).unwrap();
        assert_eq!(
            summary,
            Summary {
                scanned: 3,
                changed: 1,
                untouched: 1,
                failed: 1
            }
        );

        let report = String::from_utf8(report).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[failed] "));
        assert!(lines[0].contains("a_broken.png: "));
        assert!(lines[1].starts_with("[cropped] "));
        assert!(lines[1].ends_with("b_framed.png | 4x4 -> 2x2"));
        assert!(lines[2].starts_with("[unchanged] "));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_counts_each_file_once_despite_link_cycles() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        framed(2, 2, 1).save(root.join("a.png")).unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        std::os::unix::fs::symlink("..", root.join("sub").join("up")).unwrap();

        let plan = ExecutionPlan {
            operation: Operation::Trim(TrimSettings::default()),
            root: root.to_path_buf(),
        };
        let mut report = Vec::new();
        let summary = plan.execute(&mut report).unwrap();
        assert_eq!(summary.scanned, 1);
        assert_eq!(String::from_utf8(report).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_session_runs_after_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbaImage::from_pixel(2, 1, Rgba([250, 250, 250, 255]))
            .save(&path)
            .unwrap();

        let input = format!("{}\ny\n\n", dir.path().display());
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let summary = run_session(
            Operation::RemoveWhite(RemoveWhiteSettings::default()),
            Path::new("/unused"),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(summary.map(|s| s.changed), Some(1));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("[cleared] "));
        assert!(output.contains("| 2 pixels made transparent"));
        assert!(output.contains("Done. Scanned 1 images (1 changed, 0 unchanged or skipped, 0 failed)."));
        assert!(image::open(&path)
            .unwrap()
            .to_rgba8()
            .pixels()
            .all(|p| *p == Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn test_session_uses_default_root_and_can_be_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbaImage::from_pixel(2, 1, Rgba([250, 250, 250, 255]))
            .save(&path)
            .unwrap();
        let before = fs::read(&path).unwrap();

        let mut prompter = Prompter::new(&b"\nn\n"[..], Vec::new());
        let summary = run_session(
            Operation::RemoveWhite(RemoveWhiteSettings::default()),
            dir.path(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(summary, None);
        assert_eq!(fs::read(&path).unwrap(), before);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains(&format!("About to scan: {}", dir.path().display())));
        assert!(output.ends_with("Operation cancelled.\n"));
    }

    #[test]
    fn test_session_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let input = format!("{}\ny\n", missing.display());
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let result = run_session(
            Operation::Trim(TrimSettings::default()),
            dir.path(),
            &mut prompter,
        );
        assert!(result.is_err());
    }
}
