use elpath_engine::element::tests::MemoryElement;

/// A small catalogue with uneven fan-out:
/// ```text
/// catalog
///   shelf
///     book
///       title
///     book
///       title
///       note
///   shelf
///   archive
///     shelf
///       book
/// ```
pub fn catalog() -> MemoryElement {
    let book = |children: Vec<MemoryElement>| MemoryElement::with_children("book", children);
    MemoryElement::with_children(
        "catalog",
        vec![
            MemoryElement::with_children(
                "shelf",
                vec![
                    book(vec![MemoryElement::new("title")]),
                    book(vec![MemoryElement::new("title"), MemoryElement::new("note")]),
                ],
            ),
            MemoryElement::new("shelf"),
            MemoryElement::with_children(
                "archive",
                vec![MemoryElement::with_children("shelf", vec![book(vec![])])],
            ),
        ],
    )
}

/// A single chain `level0/level1/.../level{depth-1}` under `root`.
pub fn chain(depth: usize) -> MemoryElement {
    (0..depth)
        .rev()
        .fold(None, |child: Option<MemoryElement>, level| {
            let children = child.into_iter().collect();
            Some(MemoryElement::with_children(format!("level{level}"), children))
        })
        .map_or_else(
            || MemoryElement::new("root"),
            |top| MemoryElement::with_children("root", vec![top]),
        )
}
