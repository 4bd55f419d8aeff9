//! Table tests for the commit message whitelist

use commit_gates::core::models::Whitelist;
use test_case::test_case;

fn rule_for(message: &str) -> Option<&'static str> {
    let whitelist = Whitelist::standard("Linear", "ROM").unwrap();
    whitelist.first_match(message).map(|rule| rule.name())
}

#[test_case("chore: bump deps", Some("conventional-maintenance") ; "chore")]
#[test_case("CHORE: bump deps", Some("conventional-maintenance") ; "chore uppercase")]
#[test_case("docs: fix typo", Some("conventional-maintenance") ; "docs")]
#[test_case("perf: cache fonts", Some("conventional-maintenance") ; "perf")]
#[test_case("feat: login", None ; "feat is not maintenance")]
#[test_case("fix: login", None ; "fix is not maintenance")]
#[test_case("chore(deps): bump", None ; "scoped type is not exempt")]
#[test_case("Merge branch 'main' into dev", Some("merge") ; "merge branch")]
#[test_case("Merge pull request #12 from x/y", Some("merge") ; "merge pull request")]
#[test_case("Merge PR 4", Some("merge") ; "merge pr")]
#[test_case("merge branch 'main'", None ; "merge is case sensitive")]
#[test_case("Revert \"feat: login\"", Some("revert") ; "revert")]
#[test_case("fixup! feat: login", Some("fixup") ; "fixup")]
#[test_case("squash! feat: login", Some("squash") ; "squash")]
#[test_case("initial commit", Some("initial-commit") ; "initial commit any case")]
#[test_case("wip: half done", Some("wip") ; "wip")]
#[test_case("Draft: idea", Some("draft") ; "draft")]
#[test_case("HOTFIX: prod down", Some("hotfix") ; "hotfix")]
#[test_case("emergency: rollback", Some("emergency") ; "emergency")]
#[test_case("[Linear] sync", Some("tracker-tag") ; "bracketed tracker")]
#[test_case("(linear) sync", Some("tracker-tag") ; "parenthesised tracker")]
#[test_case("linear: sync", None ; "tracker without bracket")]
#[test_case("[ROM-12] add page", Some("issue-tag") ; "bracketed issue id")]
#[test_case("rom-12) add page", Some("issue-tag") ; "closing bracket only")]
#[test_case("ROM-12 add page", None ; "bare issue id is not a tag")]
#[test_case("Bump version to 2.0", Some("bump-version") ; "bump version")]
#[test_case("release 1.4.0", Some("release") ; "release")]
#[test_case("Tag v1.2", Some("tag") ; "tag with v")]
#[test_case("tag 3", Some("tag") ; "tag without v")]
#[test_case("Tag latest", None ; "tag needs a number")]
#[test_case("Auto-merge of #4", Some("auto-merge") ; "auto merge")]
#[test_case("auto-merge of #4", None ; "auto merge is case sensitive")]
#[test_case("Dependabot: bump", Some("dependabot") ; "dependabot")]
#[test_case("Bot: nightly", Some("bot") ; "bot capitalised")]
#[test_case("BOT: nightly", Some("bot") ; "bot uppercase")]
#[test_case("  \n\tchore: tidy", Some("conventional-maintenance") ; "leading whitespace trimmed")]
#[test_case("Update README", None ; "plain message")]
#[test_case("", None ; "empty message")]
fn test_whitelist_rule(message: &str, expected: Option<&str>) {
    assert_eq!(rule_for(message), expected, "message={message:?}");
}
