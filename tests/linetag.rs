use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use linelid::error::Error;
use linelid::identifiers::{Fixed, Identification, Identifier};
use linelid::lang::Lang;
use linelid::pipeline::{LineTag, Pipeline};

const HEADER: &str = "inv_nr\tpage_no\tline_id\tlang\tconfidence\tline_text";

/// Looks identifications up by line text, so results don't depend on the
/// order files get scheduled in.
struct Lookup {
    by_text: HashMap<String, Identification>,
}

impl Lookup {
    fn new(entries: &[(&str, Lang, f32)]) -> Self {
        let by_text = entries
            .iter()
            .map(|(text, lang, prob)| (text.to_string(), Identification::new(*lang, *prob)))
            .collect();
        Self { by_text }
    }
}

impl Identifier for Lookup {
    fn identify(&self, lines: &[String]) -> Result<Vec<Identification>, Error> {
        Ok(lines
            .iter()
            .map(|line| {
                self.by_text
                    .get(line)
                    .cloned()
                    .unwrap_or_else(|| Identification::new(Lang::Unknown, 0.0))
            })
            .collect())
    }
}

/// Fails the whole batch when any line contains the marker.
struct FailOn {
    marker: String,
}

impl Identifier for FailOn {
    fn identify(&self, lines: &[String]) -> Result<Vec<Identification>, Error> {
        if lines.iter().any(|l| l.contains(&self.marker)) {
            return Err(Error::Classifier("simulated mid-run failure".to_string()));
        }
        Ok(lines
            .iter()
            .map(|_| Identification::new(Lang::Nl, 1.0))
            .collect())
    }
}

/// Returns one result too few.
struct OffByOne;

impl Identifier for OffByOne {
    fn identify(&self, lines: &[String]) -> Result<Vec<Identification>, Error> {
        Ok(lines
            .iter()
            .skip(1)
            .map(|_| Identification::new(Lang::Nl, 1.0))
            .collect())
    }
}

fn write_source(dir: &Path, name: &str, data_rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "inv_nr\tpage_no\tline_id\tline_text").unwrap();
    for row in data_rows {
        writeln!(f, "{row}").unwrap();
    }
    path
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn end_to_end_example() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "A1-lines.tsv",
        &[
            "A1\t1\tL1\tDit is een voorbeeld.",
            "A1\t1\tL2\tThis is an example.",
        ],
    );

    let identifier = Lookup::new(&[
        ("Dit is een voorbeeld.", Lang::Nl, 0.97),
        ("This is an example.", Lang::En, 0.95),
    ]);
    let written = LineTag::new(vec![src], identifier).run().unwrap();
    assert_eq!(written, vec![dir.path().join("A1-lines.lang.tsv")]);

    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        content,
        "inv_nr\tpage_no\tline_id\tlang\tconfidence\tline_text\n\
         A1\t1\tL1\tnl\t0.97\tDit is een voorbeeld.\n\
         A1\t1\tL2\ten\t0.95\tThis is an example.\n"
    );
}

#[test]
fn row_count_and_order_invariance() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..50)
        .map(|i| format!("A1\t{}\tL{}\tregel nummer {}", i / 10, i % 10, i))
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let src = write_source(dir.path(), "big-lines.tsv", &row_refs);

    let written = LineTag::new(vec![src], Fixed::new(Lang::Nl, 0.5))
        .run()
        .unwrap();

    let content = std::fs::read_to_string(&written[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], HEADER);
    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields[0], "A1");
        assert_eq!(fields[1], format!("{}", i / 10));
        assert_eq!(fields[2], format!("L{}", i % 10));
        assert_eq!(fields[3], "nl");
        assert_eq!(fields[5], format!("regel nummer {}", i));
    }
}

#[test]
fn header_only_output_for_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(dir.path(), "empty-lines.tsv", &[]);

    let written = LineTag::new(vec![src], Fixed::new(Lang::Nl, 0.5))
        .run()
        .unwrap();
    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(content, format!("{HEADER}\n"));
}

#[test_log::test]
fn failed_file_leaves_no_output_and_no_debris() {
    let dir = tempfile::tempdir().unwrap();
    write_source(
        dir.path(),
        "bad-lines.tsv",
        &["A1\t1\tL1\teerste regel", "A1\t1\tL2\tXFAILX tweede"],
    );

    let p = LineTag::discover(
        dir.path(),
        FailOn {
            marker: "XFAILX".to_string(),
        },
    )
    .unwrap();
    assert!(p.run().is_err());

    assert_eq!(dir_entries(dir.path()), vec!["bad-lines.tsv".to_string()]);
}

#[test]
fn failed_rerun_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(dir.path(), "doc-lines.tsv", &["A1\t1\tL1\teerste regel"]);

    LineTag::new(vec![src.clone()], Fixed::new(Lang::Nl, 0.9))
        .run()
        .unwrap();
    let out = dir.path().join("doc-lines.lang.tsv");
    let first = std::fs::read_to_string(&out).unwrap();

    // make the rerun fail; previous output must survive untouched
    std::fs::write(&src, "inv_nr\tpage_no\tline_id\tline_text\nA1\t1\tL1\tXFAILX\n").unwrap();
    let rerun = LineTag::new(
        vec![src],
        FailOn {
            marker: "XFAILX".to_string(),
        },
    );
    assert!(rerun.run().is_err());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), first);
}

#[test_log::test]
fn sibling_files_survive_one_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "good-lines.tsv", &["A1\t1\tL1\tgoede regel"]);
    write_source(dir.path(), "bad-lines.tsv", &["A2\t1\tL1\tXFAILX regel"]);

    let p = LineTag::discover(
        dir.path(),
        FailOn {
            marker: "XFAILX".to_string(),
        },
    )
    .unwrap();
    assert!(p.run().is_err());

    assert!(dir.path().join("good-lines.lang.tsv").exists());
    assert!(!dir.path().join("bad-lines.lang.tsv").exists());
}

#[test]
fn result_count_mismatch_is_an_explicit_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "doc-lines.tsv",
        &["A1\t1\tL1\teen", "A1\t1\tL2\ttwee"],
    );

    let p = LineTag::new(vec![src.clone()], OffByOne);
    assert!(p.run().is_err());
    assert!(!dir.path().join("doc-lines.lang.tsv").exists());
}

#[test]
fn end_to_end_with_subprocess_classifier() {
    use linelid::identifiers::LidProcess;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "A1-lines.tsv",
        &[
            "A1\t1\tL1\tDit is een voorbeeld.",
            "A1\t1\tL2\tThis is an example.",
        ],
    );

    // crude stand-in for the real classifier: tags by keyword
    let script = dir.path().join("fake-lid");
    std::fs::write(
        &script,
        "#!/bin/sh\nwhile IFS= read -r line; do\n  case \"$line\" in\n    *This*) printf 'en\\t0.95\\n' ;;\n    *) printf 'nl\\t0.97\\n' ;;\n  esac\ndone\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();

    let identifier = LidProcess::with_default_langs(script.to_str().unwrap().to_string());
    let written = LineTag::new(vec![src], identifier).run().unwrap();

    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        content,
        "inv_nr\tpage_no\tline_id\tlang\tconfidence\tline_text\n\
         A1\t1\tL1\tnl\t0.97\tDit is een voorbeeld.\n\
         A1\t1\tL2\ten\t0.95\tThis is an example.\n"
    );
}

#[test]
fn missing_classifier_aborts_before_any_output() {
    use linelid::identifiers::LidProcess;

    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "doc-lines.tsv", &["A1\t1\tL1\tregel"]);

    let p = LineTag::discover(
        dir.path(),
        LidProcess::with_default_langs("no-such-lid-command".to_string()),
    )
    .unwrap();
    match p.run() {
        Err(Error::MissingDependency(_)) => (),
        other => panic!("expected MissingDependency, got {other:?}"),
    }
    assert_eq!(dir_entries(dir.path()), vec!["doc-lines.tsv".to_string()]);
}
