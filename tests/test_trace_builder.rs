use kubernetriks_tracegen::error::GeneratorError;
use kubernetriks_tracegen::generator::builder::{render_trace, TraceBuilder};
use kubernetriks_tracegen::generator::directive::parse_directives;
use kubernetriks_tracegen::generator::row::{FieldKind, RowSchema};
use kubernetriks_tracegen::generator::template::TemplateExpander;
use kubernetriks_tracegen::test_util::helpers::{default_test_builder, TEST_SEED};

#[test]
fn test_trace_is_sorted_by_ordering_key() {
    let rows = default_test_builder().build_from_str("2 5;x\n1 1;y\n").unwrap();
    let texts: Vec<&str> = rows.iter().map(|row| row.text()).collect();
    assert_eq!(texts, vec!["1;y", "5;x", "5;x"]);
}

#[test]
fn test_sort_is_stable() {
    let rows = default_test_builder()
        .build_from_str("1 3;first\n1 1;other\n1 3;second\n1 3;third")
        .unwrap();
    assert_eq!(render_trace(&rows), "1;other\n3;first\n3;second\n3;third");

    // equal keys from one directive keep generation order
    let mut builder = default_test_builder();
    let rows = builder
        .build_from_str("50 1;$0^1000000$\n1 0;head")
        .unwrap();
    let mut expander = TemplateExpander::seeded(TEST_SEED);
    let expected: Vec<String> = (0..50)
        .map(|_| expander.expand("1;$0^1000000$").unwrap())
        .collect();
    let actual: Vec<&str> = rows[1..].iter().map(|row| row.text()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_sort_is_stable_for_equal_keys_spelled_differently() {
    let source = "1 1;one\n1 0;zero\n1 1.0;one_real\n1 -0.0;neg_zero\n1 0.0;zero_real\n1 -0;neg_int";
    let rows = default_test_builder().build_from_str(source).unwrap();
    assert_eq!(
        render_trace(&rows),
        "0;zero\n-0.0;neg_zero\n0.0;zero_real\n-0;neg_int\n1;one\n1.0;one_real"
    );
}

#[test]
fn test_generated_rows_are_sorted() {
    let source = "
100 $0.0^1000.0$;$100^2000$,$1000^5000$;constant
50 $0^1000$;busybox

20 $500^600$;$1^2$
";
    let rows = default_test_builder().build_from_str(source).unwrap();
    assert_eq!(rows.len(), 170);
    assert!(rows
        .windows(2)
        .all(|pair| pair[0].ordering_key() <= pair[1].ordering_key()));
    assert!(rows.iter().all(|row| !row.text().contains('$')));
}

#[test]
fn test_zero_count_and_blank_lines() {
    let rows = default_test_builder()
        .build_from_str("\n0 $1^5$;never\n   \n1 2;once\n")
        .unwrap();
    assert_eq!(render_trace(&rows), "2;once");
    assert_eq!(parse_directives("\n\n  \n").unwrap().len(), 0);
}

#[test]
fn test_first_error_aborts_batch() {
    let mut builder = default_test_builder();
    assert!(matches!(
        builder.build_from_str("1 1;ok\n1 2;a b\n"),
        Err(GeneratorError::MalformedDirective { line: 2, .. })
    ));
    assert!(matches!(
        builder.build_from_str("1 1;ok\nmany 2;a\n"),
        Err(GeneratorError::MalformedDirective { line: 2, .. })
    ));
    assert!(matches!(
        builder.build_from_str("1 1;ok\n1 $1^2;a\n"),
        Err(GeneratorError::MalformedTemplate { .. })
    ));
    assert!(matches!(
        builder.build_from_str("1 1;ok\n1 $9^2$;a\n"),
        Err(GeneratorError::InvalidRange { .. })
    ));
}

#[test]
fn test_row_schema_is_validated() {
    let schema = RowSchema {
        field_separator: ',',
        ordering_key_field: 0,
        fields: Some(vec![FieldKind::Int, FieldKind::Real, FieldKind::Text]),
    };
    let mut builder = TraceBuilder::new(TemplateExpander::seeded(9), schema.clone());
    let rows = builder
        .build_from_str("5 $10^20$,$0.1^0.9$,constant\n1 3,1.0,first")
        .unwrap();
    assert_eq!(rows[0].text(), "3,1.0,first");
    assert_eq!(rows.len(), 6);

    let mut builder = TraceBuilder::new(TemplateExpander::seeded(9), schema);
    assert!(matches!(
        builder.build_from_str("1 $10^20$,$1^2$"),
        Err(GeneratorError::RowSchemaMismatch { .. })
    ));
}

#[test]
fn test_same_seed_same_trace() {
    let source = "30 $0^100$;$0.0^1.0$\n30 $50^150$;$1^9$";
    let lhs = TraceBuilder::new(TemplateExpander::seeded(77), RowSchema::default())
        .build_from_str(source)
        .unwrap();
    let rhs = TraceBuilder::new(TemplateExpander::seeded(77), RowSchema::default())
        .build_from_str(source)
        .unwrap();
    assert_eq!(render_trace(&lhs), render_trace(&rhs));
}
