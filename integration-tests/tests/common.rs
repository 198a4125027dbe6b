use integration_tests::harness::{Fixture, SessionRun, run_session};
use logstat_core::session::SessionOptions;

#[allow(dead_code)]
pub fn run_fixture(name: &'static str, options: SessionOptions) -> (Fixture, SessionRun) {
    let fixture = Fixture::load(name);
    let run = run_session(&fixture.input, options);
    (fixture, run)
}
