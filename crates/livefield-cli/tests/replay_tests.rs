// Scripts replayed against the registration session, the way `livefield run` does.

use livefield::registration::{registration_session, PHONE_NUMBER, PHONE_REQUIRED};
use livefield::{Config, FormSession, LogSink};
use livefield_cli::{parse_script, Event};

fn replay(script: &str) -> FormSession {
    let mut session = registration_session(&Config::default()).unwrap();
    for (_, event) in parse_script(script).unwrap() {
        match event {
            Event::Change { field, raw } => session.change(&field, &raw).unwrap(),
            Event::Blur { field } => session.blur(&field).unwrap(),
            Event::Submit => {
                session.submit(&mut LogSink);
            }
            Event::Reset => session.reset(),
            Event::Show => {}
        }
    }
    session
}

#[test]
fn happy_path_submits() {
    let session = replay(
        "change fullName Ali Mohammadi\n\
         blur fullName\n\
         change phoneNumber 0912 345 6789\n\
         blur phoneNumber\n\
         submit\n",
    );
    assert!(session.form().submit_succeeded());
    assert_eq!(session.form().value(PHONE_NUMBER), Some("09123456789"));
}

#[test]
fn missing_phone_blocks_submit() {
    let session = replay("change fullName Ali\nsubmit\n");
    assert!(session.form().submit_attempted());
    assert!(!session.form().submit_succeeded());
    assert_eq!(session.form().error(PHONE_NUMBER), Some(PHONE_REQUIRED));
}

#[test]
fn reset_after_submit() {
    let session = replay("change fullName Ali\nsubmit\nreset\n");
    assert!(!session.form().submit_attempted());
    assert!(session.form().errors().is_empty());
}
