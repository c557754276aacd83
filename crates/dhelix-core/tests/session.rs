//! End-to-end runs of the built-in session.

use dhelix_core::{CommandError, CommandOutput, Session, SideEffect};

fn text(reply: dhelix_core::Reply) -> String {
    reply.expect("command should succeed").lines().join("\n")
}

#[test]
fn navigate_and_read_author() {
    let mut session = Session::builtin().unwrap();

    assert_eq!(text(session.submit("cwd")), "/");
    assert!(text(session.submit("cd documents")).contains("/documents"));
    assert_eq!(text(session.submit("cwd")), "/documents");
    assert!(text(session.submit("cd ..")).contains("'/'"));
    assert_eq!(
        text(session.submit("cat AUTHOR")),
        "Aaron Dalman <atdalman@gmail.com>"
    );
}

#[test]
fn root_listing() {
    let mut session = Session::builtin().unwrap();
    assert_eq!(
        text(session.submit("ls")),
        "documents  <directory>\nAUTHOR     <file>\n\n1 file(s), 1 dir(s) in /"
    );
}

#[test]
fn empty_directory_listing_is_summary_only() {
    let mut session = Session::builtin().unwrap();
    session.submit("cd documents").unwrap();
    assert_eq!(
        session.submit("ls"),
        Ok(CommandOutput::Lines(vec![
            "0 file(s), 0 dir(s) in /documents".to_string()
        ]))
    );
}

#[test]
fn unknown_command_leaves_cursor() {
    let mut session = Session::builtin().unwrap();
    session.submit("cd documents").unwrap();

    let err = session.submit("foo bar").unwrap_err();
    assert_eq!(err, CommandError::NotFound("foo".to_string()));
    assert!(err.to_string().contains("command not found"));
    assert_eq!(session.current_directory(), "/documents");
}

#[test]
fn missing_file_names_file_and_directory() {
    let mut session = Session::builtin().unwrap();
    session.submit("cd documents").unwrap();

    let msg = session.submit("cat nothing.txt").unwrap_err().to_string();
    assert!(msg.contains("nothing.txt"));
    assert!(msg.contains("/documents"));
}

#[test]
fn cd_into_file_is_refused() {
    let mut session = Session::builtin().unwrap();
    assert!(session.submit("cd AUTHOR").is_err());
    assert_eq!(session.current_directory(), "/");
}

#[test]
fn contact_email_opens_mail_link() {
    let mut session = Session::builtin().unwrap();
    let output = session.submit("contact email").unwrap();

    assert_eq!(
        output.effect(),
        Some(&SideEffect::Open {
            target: "mailto:atdalman@gmail.com".to_string()
        })
    );
    assert!(output.lines().join("\n").contains("email"));
}

#[test]
fn contact_without_key_prints_block() {
    let mut session = Session::builtin().unwrap();
    let block = text(session.submit("contact"));
    assert!(block.contains("Created by Aaron Dalman"));
    assert!(block.contains("email - atdalman@gmail.com"));
    assert!(block.contains("github - https://github.com/atdalman"));
    assert!(block.find("email").unwrap() < block.find("github").unwrap());
}

#[test]
fn bad_input_never_ends_the_session() {
    let mut session = Session::builtin().unwrap();
    for line in ["", "   ", "???", "cd", "cd ../../..", "cat", "mon", "hum 2", "ls extra"] {
        let _ = session.submit(line);
    }
    assert_eq!(text(session.submit("cwd")), "/");
}
