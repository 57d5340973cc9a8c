mod common;

use common::fixtures::{catalog, chain};
use common::{TestResult, count, init_logging, names, select};
use elpath::{Element, ExecError, ExpressionType, ParseError, Path, PathError, Predicate};
use elpath_engine::element::tests::{MemoryElement, create_test_tree};
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_wildcard_walks_catalog_in_pre_order() -> TestResult {
    init_logging();
    let found = select("*", &catalog())?;
    assert_eq!(
        names(&found),
        vec!["shelf", "book", "title", "book", "title", "note", "shelf", "archive", "shelf", "book"]
    );
    Ok(())
}

#[test]
fn test_direct_children_by_name() -> TestResult {
    init_logging();
    let root = catalog();
    assert_eq!(count("shelf", &root)?, 2);
    assert_eq!(count("/shelf", &root)?, 2);
    assert_eq!(count("/archive", &root)?, 1);
    assert_eq!(count("book", &root)?, 0);
    Ok(())
}

#[test]
fn test_nested_steps_follow_uneven_fan_out() -> TestResult {
    init_logging();
    let root = catalog();
    assert_eq!(count("/shelf/book", &root)?, 2);
    assert_eq!(count("/shelf/book/title", &root)?, 2);
    assert_eq!(count("/shelf/book/note", &root)?, 1);
    assert_eq!(count("/archive/shelf/book", &root)?, 1);
    Ok(())
}

#[test]
fn test_leading_name_must_match_root() -> TestResult {
    init_logging();
    let root = catalog();
    assert_eq!(count("catalog/archive/shelf/book", &root)?, 1);
    assert_eq!(count("archive/shelf/book", &root)?, 0);
    Ok(())
}

#[test]
fn test_all_descendants() -> TestResult {
    init_logging();
    let root = catalog();
    assert_eq!(count("//book", &root)?, 3);
    assert_eq!(count("//shelf/book", &root)?, 3);
    assert_eq!(count("//title", &root)?, 2);
    Ok(())
}

#[test]
fn test_index_inside_a_chain() -> TestResult {
    init_logging();
    let root = catalog();

    let second = select("/shelf/book[1]/*", &root)?;
    assert_eq!(second.len(), 1);
    assert_eq!(names(&second[0].children()), vec!["title", "note"]);

    assert_eq!(count("/shelf/book[1]/note", &root)?, 1);
    assert_eq!(count("/shelf/book[0]/note", &root)?, 0);
    assert_eq!(count("/shelf/book[1]", &root)?, 1);
    assert_eq!(count("/shelf[1]/book", &root)?, 0);
    Ok(())
}

#[test]
fn test_deep_chain() -> TestResult {
    init_logging();
    let root = chain(6);
    assert_eq!(count("*", &root)?, 6);
    assert_eq!(count("//level5", &root)?, 1);
    assert_eq!(count("/level0/level1/level2/level3", &root)?, 1);
    assert_eq!(count("/level0/level2", &root)?, 0);
    assert_eq!(count("*", &chain(0))?, 0);
    Ok(())
}

#[test]
fn test_overlapping_subtrees_keep_duplicates() -> TestResult {
    init_logging();
    let root = chain(3);
    assert_eq!(count("//level2", &root)?, 1);
    // The second `//` descends again from every element the first one found.
    assert_eq!(count("////level2", &root)?, 2);
    Ok(())
}

#[test]
fn test_inequality_hook_is_never_called() -> TestResult {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let builder = common::name_aware_builder().with_inequality(
        move |_: &MemoryElement, _: &str, _: &elpath::Literal<'_>| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        },
    );
    let root = create_test_tree(3, 2);
    let path = builder.build(r#"/node.(@Name=="node")/subnode.(@Name=="subnode")"#)?;
    assert_eq!(path.execute(&root)?.len(), 6);
    assert_eq!(builder.build("/node.()")?.execute(&root)?.len(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn test_deep_paths_fail_to_compile() -> TestResult {
    init_logging();
    let source = vec!["level"; 10_000].join("/");
    assert!(matches!(
        common::compile(&source),
        Err(PathError::Parse(ParseError::TooDeep { limit: 512 }))
    ));
    let shallow = format!("/{}", vec!["level"; 200].join("/"));
    assert_eq!(count(&shallow, &chain(3))?, 0);
    Ok(())
}

#[test]
fn test_clauses_with_custom_property() -> TestResult {
    init_logging();
    let root = catalog();
    let predicate = Predicate::new().with_equality(
        |element: &MemoryElement, property: &str, value: &elpath::Literal<'_>| {
            match (property, value) {
                ("Children", elpath::Literal::Number(n)) => {
                    element.children().len() as f64 == *n
                }
                _ => false,
            }
        },
    );
    let path = elpath::compile::<MemoryElement>("/shelf/book.(Children==2)")?.with(predicate);
    let found = path.execute(&root)?;
    assert_eq!(found.len(), 1);
    assert_eq!(names(&found[0].children()), vec!["title", "note"]);
    Ok(())
}

#[test]
fn test_execution_errors_surface_through_facade() -> TestResult {
    init_logging();
    let err = select(r#""shelf".book"#, &catalog()).err().ok_or("expected failure")?;
    assert_eq!(
        err,
        PathError::Exec(ExecError::UnexpectedExpression {
            found: ExpressionType::String
        })
    );
    Ok(())
}

#[test]
fn test_paths_are_shareable_across_threads() -> TestResult {
    init_logging();
    let path: Path<MemoryElement> = elpath::compile("/node/subnode")?;
    let handles: Vec<_> = (1..=4)
        .map(|size| {
            let path = path.clone();
            std::thread::spawn(move || {
                path.execute(&create_test_tree(size, size))
                    .map(|found| found.len())
            })
        })
        .collect();
    for (size, handle) in (1..=4).zip(handles) {
        let found = handle.join().map_err(|_| "worker panicked")??;
        assert_eq!(found, size * size);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wildcard_counts(n in 0usize..12, m in 0usize..12) {
        let root = create_test_tree(n, m);
        prop_assert_eq!(count("*", &root)?, n * (m + 1));
        prop_assert_eq!(count("/*", &root)?, n);
    }

    #[test]
    fn name_counts(n in 0usize..12, m in 0usize..12) {
        let root = create_test_tree(n, m);
        prop_assert_eq!(count("node", &root)?, n);
        prop_assert_eq!(count("/node", &root)?, n);
    }

    #[test]
    fn nested_counts(n in 0usize..12, m in 0usize..12) {
        let root = create_test_tree(n, m);
        prop_assert_eq!(count("/node/subnode", &root)?, n * m);
        prop_assert_eq!(count("root/node/subnode", &root)?, n * m);
        prop_assert_eq!(count("/node/subnode/*", &root)?, n * m);
        prop_assert_eq!(count("root/node/subnode/*", &root)?, n * m);
    }

    #[test]
    fn index_counts(n in 1usize..12, m in 1usize..12) {
        let root = create_test_tree(n, m);
        prop_assert_eq!(count("/node[0]/subnode", &root)?, m);
        prop_assert_eq!(count("/node[0]/subnode[0]", &root)?, 1);
        prop_assert_eq!(count(&format!("/node[{}]/subnode", n - 1), &root)?, m);
        prop_assert_eq!(count(&format!("/node[{n}]/subnode"), &root)?, 0);
    }

    #[test]
    fn clause_counts(n in 1usize..12, m in 0usize..12) {
        let root = create_test_tree(n, m);
        prop_assert_eq!(count("/node[0]/subnode.()", &root)?, m);
        prop_assert_eq!(count(r#"/node[0]/subnode.(@Name=="subnode")"#, &root)?, m);
        let both = r#"/node.(@Name=="node")/subnode.(@Name=="subnode")"#;
        prop_assert_eq!(count(both, &root)?, n * m);
        prop_assert_eq!(count(r#"/node.(@Name=="other")/subnode"#, &root)?, 0);
    }
}
