#![no_main]

use gdbot_commands::{parse_slash_command, IssueAction, SlashCommandInvocation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String, Vec<(String, String)>)| {
    let (command_name, subcommand, options) = data;
    let invocation = options.into_iter().fold(
        SlashCommandInvocation::new(command_name).with_subcommand(subcommand.clone()),
        |invocation, (name, value)| invocation.with_option(name, value),
    );
    let Some(command) = parse_slash_command(&invocation) else {
        return;
    };
    match command.action {
        IssueAction::CreateIssue => assert_eq!(subcommand, "create"),
        IssueAction::ListIssues => assert_eq!(subcommand, "get"),
    }
    let _ = command.validate();
});
