use kubernetriks_tracegen::error::GeneratorError;
use kubernetriks_tracegen::report::{print_report, OutputFormat, ReportConfig};
use kubernetriks_tracegen::runner::generate_directory;
use kubernetriks_tracegen::test_util::helpers::{
    default_test_generator_config, write_directive_files,
};

#[test]
fn test_generate_directory() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_root = tempfile::tempdir().unwrap();
    let output_dir = output_root.path().join("data_out");
    write_directive_files(
        input_dir.path(),
        &[
            ("first", "2 5;x\n\n1 1;y\n"),
            ("second", "3 $0^0$;fixed\n0 $1^2$;never\n"),
        ],
    );

    let config = default_test_generator_config(input_dir.path(), &output_dir);
    let report = generate_directory(&config).unwrap();

    assert_eq!(
        std::fs::read_to_string(output_dir.join("first")).unwrap(),
        "1;y\n5;x\n5;x"
    );
    assert_eq!(
        std::fs::read_to_string(output_dir.join("second")).unwrap(),
        "0;fixed\n0;fixed\n0;fixed"
    );
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.sources[0].source, "first");
    assert_eq!(report.total_directives, 4);
    assert_eq!(report.total_rows, 6);
}

#[test]
fn test_runs_with_same_seed_are_identical() {
    let input_dir = tempfile::tempdir().unwrap();
    write_directive_files(
        input_dir.path(),
        &[("trace", "100 $0.0^100.0$;$1^1000$,$1^64$;constant\n")],
    );

    let mut traces = vec![];
    for _ in 0..2 {
        let output_dir = tempfile::tempdir().unwrap();
        let config = default_test_generator_config(input_dir.path(), output_dir.path());
        generate_directory(&config).unwrap();
        traces.push(std::fs::read_to_string(output_dir.path().join("trace")).unwrap());
    }
    assert_eq!(traces[0], traces[1]);
    assert_eq!(traces[0].lines().count(), 100);
}

#[test]
fn test_bad_source_fails_with_its_path() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    write_directive_files(input_dir.path(), &[("broken", "1 $1^2$$;x\n")]);

    let config = default_test_generator_config(input_dir.path(), output_dir.path());
    match generate_directory(&config) {
        Err(GeneratorError::Source { path, .. }) => {
            assert_eq!(path, input_dir.path().join("broken"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!output_dir.path().join("broken").exists());
}

#[test]
fn test_missing_input_dir() {
    let root = tempfile::tempdir().unwrap();
    let config = default_test_generator_config(&root.path().join("missing"), root.path());
    assert!(matches!(
        generate_directory(&config),
        Err(GeneratorError::Io { .. })
    ));
}

#[test]
fn test_print_report() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    write_directive_files(input_dir.path(), &[("trace", "4 1;x\n")]);

    let config = default_test_generator_config(input_dir.path(), output_dir.path());
    let report = generate_directory(&config).unwrap();

    let report_config = ReportConfig {
        format: OutputFormat::JSON,
        output_file: output_dir.path().join("report.json"),
    };
    print_report(&report, &report_config).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_config.output_file).unwrap())
            .unwrap();
    assert_eq!(json["total_rows"], 4);
}
