//! Property tests for name resolution and table slicing

use catalog_core::sync::book_form;
use catalog_core::view::paginate;
use catalog_core::{AuthorRecord, BookRecord, CategoryRecord, Selections};
use proptest::prelude::*;

proptest! {
    #[test]
    fn resolved_category_ids_are_known_and_bounded(
        known in proptest::collection::btree_set("[a-z]{1,8}", 1..8),
        wanted in proptest::collection::vec("[a-z]{1,8}", 0..10),
    ) {
        let categories: Vec<CategoryRecord> = known
            .iter()
            .enumerate()
            .map(|(i, name)| CategoryRecord::new(i as i64 + 1, name.clone()))
            .collect();
        let selections = Selections::project(
            vec![AuthorRecord::new(1, "Anyone")],
            categories,
            Vec::new(),
        );

        let mut record = BookRecord::new(1, "Book");
        record.categories = wanted.clone();
        let form = book_form(&record, &selections).unwrap();

        let expected = wanted.iter().filter(|name| known.contains(*name)).count();
        prop_assert_eq!(form.category_ids.len(), expected);
        for id in &form.category_ids {
            prop_assert!(*id >= 1 && *id <= known.len() as i64);
        }
    }

    #[test]
    fn pages_never_exceed_page_size(
        len in 0usize..200,
        page in 0usize..30,
        per_page in 1usize..25,
    ) {
        let rows: Vec<usize> = (0..len).collect();
        let result = paginate(rows, page, per_page);

        prop_assert!(result.items.len() <= per_page);
        prop_assert_eq!(result.total, len);
        prop_assert!(result.page >= 1);
        if let Some(first) = result.items.first() {
            prop_assert_eq!(*first, (result.page - 1) * per_page);
        }
    }
}
