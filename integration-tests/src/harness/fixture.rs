use logstat_core::session::{Session, SessionError, SessionOptions, SessionSummary};
use std::fs;
use std::path::PathBuf;

/// An `<name>.in` / `<name>.out` pair under `fixtures/`.
pub struct Fixture {
    pub name: &'static str,
    pub input: String,
    pub expected: String,
}

impl Fixture {
    pub fn load(name: &'static str) -> Self {
        Self {
            name,
            input: read_fixture(&format!("{name}.in")),
            expected: read_fixture(&format!("{name}.out")),
        }
    }
}

pub struct SessionRun {
    pub result: Result<SessionSummary, SessionError>,
    pub output: String,
}

pub fn run_session(input: &str, options: SessionOptions) -> SessionRun {
    let mut session = Session::new(Vec::new(), options);
    let result = session.run(input.as_bytes());
    let output = String::from_utf8(session.into_output()).expect("session wrote invalid UTF-8");

    SessionRun { result, output }
}

fn read_fixture(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}
