//! Snapshot fixtures written to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three events around Belgrade, stored furthest first.
pub(super) const EVENTS_JSON: &str = r#"[
  {"id": "novi-sad", "izvodjac": "Vasil Hadžimanov", "lokal": "Kulturni centar", "grad": "Novi Sad",
   "zanr": "jazz", "vreme": "20:00", "lat": 45.2671, "lng": 19.8335},
  {"id": "zemun", "izvodjac": "Bilja Krstić", "lokal": "Šaran", "grad": "Beograd",
   "zanr": "etno", "vreme": "21:30", "datum": "2026-11-20", "lat": 44.8430, "lng": 20.4010},
  {"id": "centre", "izvodjac": "Bajaga", "lokal": "Dom omladine", "grad": "Beograd",
   "zanr": "rock", "vreme": "21:00", "datum": "2026-11-14", "lat": 44.8150, "lng": 20.4650}
]"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn events(&self) -> Utf8PathBuf {
        self.file("events.json", EVENTS_JSON)
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn output_lines(buffer: &[u8]) -> Vec<String> {
    String::from_utf8(buffer.to_vec())
        .expect("utf-8 output")
        .lines()
        .map(str::to_owned)
        .collect()
}
