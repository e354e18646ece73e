//! Integration tests for the soapbox CLI commands.
//!
//! Commands are driven through `run_command` with in-memory stdin/stdout.

use soapbox::cli::{Commands, build_parser, load_config, run_command};
use soapbox::{Config, MessageIntent, TipCommand, TipParser};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Run a command with the given stdin and return (exit code, stdout).
fn run(command: Commands, parser: &TipParser, stdin: &str) -> (i32, String) {
    let mut out = Vec::new();
    let code = run_command(&command, parser, Cursor::new(stdin.as_bytes()), &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn parse_cmd(words: &[&str], explain: bool) -> Commands {
    Commands::Parse {
        text: words.iter().map(|w| w.to_string()).collect(),
        explain,
    }
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_command_json() {
    let (code, out) = run(
        parse_cmd(&["tip", "alice.base.eth", "$5"], false),
        &TipParser::new(),
        "",
    );
    assert_eq!(code, 0);
    let cmd: TipCommand = serde_json::from_str(&out).unwrap();
    assert_eq!(cmd.recipient, "alice.base.eth");
    assert_eq!(cmd.currency, "USDC");
    assert!(cmd.is_basename);
}

#[test]
fn parse_rejection_exits_one() {
    let (code, out) = run(parse_cmd(&["hello", "there"], false), &TipParser::new(), "");
    assert_eq!(code, 1);
    assert_eq!(out.trim(), "not a tip command");
}

#[test]
fn parse_explain_reports_reason() {
    let (code, out) = run(parse_cmd(&["tip", "x", "0"], true), &TipParser::new(), "");
    assert_eq!(code, 1);
    assert_eq!(out.trim(), "not a tip command: invalid tip amount '0'");
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_parsed_command() {
    let cmd = soapbox::parse_tip_command("send 0.5 eth to dave").unwrap();
    let json = serde_json::to_string(&cmd).unwrap();
    let (code, out) = run(Commands::Validate { json }, &TipParser::new(), "");
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "valid");
}

#[test]
fn validate_rejects_inconsistent_command() {
    let json = r#"{"action":"tip","recipient":"dave.eth","amount":"1","currency":"ETH","confidence":90,"isBasename":false}"#;
    let (code, out) = run(
        Commands::Validate {
            json: json.to_string(),
        },
        &TipParser::new(),
        "",
    );
    assert_eq!(code, 1);
    assert_eq!(out.trim(), "invalid");
}

#[test]
fn validate_malformed_json_is_error() {
    let mut out = Vec::new();
    let result = run_command(
        &Commands::Validate {
            json: "{not json".to_string(),
        },
        &TipParser::new(),
        Cursor::new(Vec::new()),
        &mut out,
    );
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// scan / aliases
// ---------------------------------------------------------------------------

#[test]
fn scan_emits_one_intent_per_line() {
    let stdin = "gm all\n\n@degen_lord 100 degen\n⚡ grace $3\nsee you later\n";
    let (code, out) = run(Commands::Scan, &TipParser::new(), stdin);
    assert_eq!(code, 0);

    let intents: Vec<MessageIntent> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(intents.len(), 4);
    assert_eq!(
        intents[0],
        MessageIntent::Chat {
            text: "gm all".to_string()
        }
    );
    assert_eq!(intents[1].as_tip().unwrap().currency, "DEGEN");
    assert_eq!(intents[2].as_tip().unwrap().recipient, "grace");
    assert!(!intents[3].is_tip());
}

#[test]
fn scan_skips_lines_that_are_not_utf8() {
    let mut stdin = b"tip bob $1\r\n".to_vec();
    stdin.extend_from_slice(&[0xff, 0xfe, b' ', b'$', b'5', b'\n']);
    stdin.extend_from_slice("send 2 eth to carol\n".as_bytes());

    let mut out = Vec::new();
    let code = run_command(&Commands::Scan, &TipParser::new(), Cursor::new(stdin), &mut out).unwrap();
    assert_eq!(code, 0);

    let intents: Vec<MessageIntent> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(intents.len(), 2);
    assert_eq!(intents[0].as_tip().unwrap().recipient, "bob");
    assert_eq!(intents[1].as_tip().unwrap().recipient, "carol");
}

#[test]
fn aliases_include_config_extras() {
    let mut config = Config::default();
    config
        .tip
        .extra_currency_aliases
        .insert("toshi".to_string(), "TOSHI".to_string());
    let (code, out) = run(Commands::Aliases, &build_parser(&config), "");
    assert_eq!(code, 0);
    assert!(out.lines().any(|l| l == "dollars -> USDC"));
    assert!(out.lines().any(|l| l == "toshi -> TOSHI"));
}

// ---------------------------------------------------------------------------
// config loading
// ---------------------------------------------------------------------------

#[test]
fn explicit_config_drives_parser() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "tip:\n  extra_currency_aliases:\n    brett: BRETT\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    let parser = build_parser(&config);
    let cmd = parser.parse("@bob 42 brett").unwrap();
    assert_eq!(cmd.currency, "BRETT");
    assert_eq!(cmd.confidence, 80);
}

#[test]
fn missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(dir.path().join("nope.yaml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load config"));
}
