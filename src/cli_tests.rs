use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["calling-form-check", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.paths.is_empty());
            assert_eq!(args.config, PathBuf::from(DEFAULT_CHECK_FILE));
            assert_eq!(args.include, vec![DEFAULT_INCLUDE_PATTERN.to_string()]);
            assert!(args.baseline.is_empty());
            assert!(args.lang.is_empty());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.output.is_none());
        }
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths_and_config() {
    let cli = Cli::parse_from([
        "calling-form-check",
        "check",
        "testdata",
        "more",
        "--config",
        "checks.txt",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("testdata"), PathBuf::from("more")]
            );
            assert_eq!(args.config, PathBuf::from("checks.txt"));
        }
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_explicit_baselines() {
    let cli = Cli::parse_from([
        "calling-form-check",
        "check",
        "--baseline",
        "java=out/java.txt",
        "--baseline",
        "go=out/go.txt",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.baseline,
                vec![
                    BaselineSource::new("java", "out/java.txt"),
                    BaselineSource::new("go", "out/go.txt"),
                ]
            );
        }
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_malformed_baseline() {
    let result = Cli::try_parse_from(["calling-form-check", "check", "--baseline", "java.txt"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_lang_filter_is_comma_separated() {
    let cli = Cli::parse_from(["calling-form-check", "check", "--lang", "java,go"]);
    match cli.command {
        Commands::Check(args) => assert_eq!(args.lang, vec!["java", "go"]),
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_json_format() {
    let cli = Cli::parse_from(["calling-form-check", "check", "-f", "json"]);
    match cli.command {
        Commands::Check(args) => assert_eq!(args.format, OutputFormat::Json),
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_include_and_exclude() {
    let cli = Cli::parse_from([
        "calling-form-check",
        "check",
        "--include",
        "*.txt",
        "-x",
        "**/old/**",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.include, vec!["*.txt"]);
            assert_eq!(args.exclude, vec!["**/old/**"]);
        }
        Commands::List(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_list_defaults() {
    let cli = Cli::parse_from(["calling-form-check", "list"]);
    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.config, PathBuf::from(DEFAULT_CHECK_FILE));
            assert!(args.lang.is_empty());
        }
        Commands::Check(_) => panic!("Expected List command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["calling-form-check", "check", "-vv", "--quiet", "--color", "never"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
