#![forbid(unsafe_code)]
use bebe_ical::{prepare_scrape, InputLocator, LocateError, NewestMatching, ScrapeAssist};
use std::cell::RefCell;
use std::fs::{self, File};
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn touch(path: &std::path::Path, age_secs: u64) {
    fs::write(path, "[]").unwrap();
    let mtime = SystemTime::now() - Duration::from_secs(age_secs);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

#[test]
fn picks_most_recent_matching_file() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("jb.json"), 3600);
    touch(&dir.path().join("jb (1).json"), 60);
    touch(&dir.path().join("jb (2).json"), 600);
    touch(&dir.path().join("notes.json"), 0);
    touch(&dir.path().join("jb.json.part"), 0);
    fs::create_dir(dir.path().join("jb-dir.json")).unwrap();

    let locator = NewestMatching::new(dir.path(), r"jb.*\.json$").unwrap();
    assert_eq!(locator.dir(), dir.path());
    let found = locator.locate().unwrap();
    assert_eq!(found, dir.path().join("jb (1).json"));
}

#[test]
fn no_match_is_an_error() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("schedule.json"), 0);
    let err = NewestMatching::new(dir.path(), r"jb.*\.json$")
        .unwrap()
        .locate()
        .unwrap_err();
    assert!(matches!(err, LocateError::NoFileFound { .. }));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = NewestMatching::new(dir.path().join("absent"), r"jb.*\.json$")
        .unwrap()
        .locate()
        .unwrap_err();
    assert!(matches!(err, LocateError::Io { .. }));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = NewestMatching::new(".", "jb(").err().unwrap();
    assert!(matches!(err, LocateError::Pattern(_)));
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl ScrapeAssist for Recorder {
    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(format!("open {url}"));
        Ok(())
    }
    fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(format!("copy {text}"));
        Ok(())
    }
}

#[test]
fn scrape_opens_then_copies() {
    let rec = Recorder::default();
    prepare_scrape(&rec, "https://schedule.example", "(function scrape() {})();").unwrap();
    assert_eq!(
        *rec.calls.borrow(),
        vec![
            "open https://schedule.example".to_string(),
            "copy (function scrape() {})();".to_string(),
        ]
    );
}

struct NoBrowser;

impl ScrapeAssist for NoBrowser {
    fn open_url(&self, _url: &str) -> anyhow::Result<()> {
        anyhow::bail!("no browser")
    }
    fn copy_to_clipboard(&self, _text: &str) -> anyhow::Result<()> {
        panic!("must not copy when the page could not be opened")
    }
}

#[test]
fn scrape_stops_when_browser_fails() {
    let err = prepare_scrape(&NoBrowser, "https://schedule.example", "x").unwrap_err();
    assert!(format!("{err:#}").contains("no browser"));
}
