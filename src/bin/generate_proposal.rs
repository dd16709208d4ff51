// Generate the optimal equipment proposal for one request and print it as JSON.
//
// Usage:
//   generate_proposal <request_id> [db_path] [--locale es|en]
//
// db_path defaults to EQUIPMENT_PROPOSAL_DB_PATH or the user data directory.
// Planning failures (unknown request, empty request) are printed in-band.

use equipment_proposal::app::{get_default_db_path, AppState};
use equipment_proposal::i18n::{self, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use equipment_proposal::logging;

const USAGE: &str = "usage: generate_proposal <request_id> [db_path] [--locale es|en]";

/// 命令行参数
#[derive(Debug, PartialEq)]
struct CliArgs {
    request_id: i64,
    db_path: Option<String>,
    locale: String,
}

/// 解析命令行参数（不含程序名）
///
/// # 返回
/// - Ok(None): 请求帮助
/// - Err: 参数错误，附带用法
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<CliArgs>, String> {
    let mut positional = Vec::new();
    let mut locale = DEFAULT_LOCALE.to_string();

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--locale requires a value ({})", USAGE))?;
                if !SUPPORTED_LOCALES.contains(&value.as_str()) {
                    return Err(format!("unsupported locale: {} ({})", value, USAGE));
                }
                locale = value;
            }
            "-h" | "--help" => return Ok(None),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let request_id: i64 = positional
        .next()
        .ok_or_else(|| USAGE.to_string())?
        .trim()
        .parse()
        .map_err(|e| format!("invalid request_id: {} ({})", e, USAGE))?;
    let db_path = positional
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument: {} ({})", extra, USAGE));
    }

    Ok(Some(CliArgs {
        request_id,
        db_path,
        locale,
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    i18n::init();
    i18n::set_locale(&args.locale);

    let db_path = args.db_path.unwrap_or_else(get_default_db_path);
    let state = AppState::new(db_path)?;
    let proposal = state.proposal_api.generate_optimal_proposal(args.request_id);

    println!("{}", serde_json::to_string_pretty(&proposal)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<CliArgs>, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_full_arguments() {
        let args = parse(&["7", "/tmp/equipos.db", "--locale", "en"]).unwrap().unwrap();
        assert_eq!(
            args,
            CliArgs {
                request_id: 7,
                db_path: Some("/tmp/equipos.db".to_string()),
                locale: "en".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&["--locale", "es", "12"]).unwrap().unwrap();
        assert_eq!(args.request_id, 12);
        assert_eq!(args.db_path, None);
        assert_eq!(args.locale, DEFAULT_LOCALE);

        let args = parse(&["3"]).unwrap().unwrap();
        assert_eq!(args.locale, DEFAULT_LOCALE);
    }

    #[test]
    fn test_parse_missing_request_id() {
        let err = parse(&[]).unwrap_err();
        assert!(err.contains("usage"));

        let err = parse(&["--locale", "en"]).unwrap_err();
        assert!(err.contains("usage"));
    }

    #[test]
    fn test_parse_invalid_request_id() {
        let err = parse(&["abc"]).unwrap_err();
        assert!(err.contains("invalid request_id"));
    }

    #[test]
    fn test_parse_unsupported_locale() {
        let err = parse(&["1", "--locale", "fr"]).unwrap_err();
        assert!(err.contains("unsupported locale: fr"));
    }

    #[test]
    fn test_parse_locale_without_value() {
        let err = parse(&["1", "--locale"]).unwrap_err();
        assert!(err.contains("--locale requires a value"));
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        let err = parse(&["1", "a.db", "b.db"]).unwrap_err();
        assert!(err.contains("unexpected argument: b.db"));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["--help"]).unwrap(), None);
        assert_eq!(parse(&["5", "-h"]).unwrap(), None);
    }
}
