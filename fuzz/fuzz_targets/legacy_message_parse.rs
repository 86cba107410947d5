#![no_main]

use gdbot_commands::{parse_legacy_message, IssueAction, LEGACY_COMMAND_PREFIX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    assert!(parse_legacy_message(&raw, true).is_none());
    let Some(command) = parse_legacy_message(&raw, false) else {
        return;
    };
    assert!(raw.starts_with(LEGACY_COMMAND_PREFIX));
    assert_eq!(command.action, IssueAction::CreateIssue);
    assert!(command.description.is_none());
    for value in [command.project.as_deref(), command.title.as_deref()]
        .into_iter()
        .flatten()
    {
        assert!(!value.is_empty());
        assert!(!value.contains(char::is_whitespace));
    }
    if let Ok(request) = command.validate() {
        assert!(!request.project().trim().is_empty());
    }
});
