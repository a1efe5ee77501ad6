//! End-to-end tests: the catalog client session against a live server

use catalog_core::notify::drain;
use catalog_core::{
    AuthorForm, BookForm, Catalog, CategoryForm, ClientConfig, EntityKind, FormValues,
    HttpCatalogApi, ModalPhase, Outcome,
};
use catalog_server::routes::{create_router, API_PREFIX};
use catalog_server::state::AppState;

/// Serve a fresh store on an ephemeral port and return its API base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::new()))
            .await
            .unwrap();
    });
    format!("http://{}{}", addr, API_PREFIX)
}

fn catalog(config: ClientConfig) -> Catalog<HttpCatalogApi> {
    let api = HttpCatalogApi::new(config.clone()).expect("Failed to build client");
    Catalog::new(api, config)
}

async fn create(catalog: &mut Catalog<HttpCatalogApi>, values: FormValues) {
    catalog.open_create(values.kind());
    let outcome = catalog.submit(None, values).await;
    assert_eq!(outcome, Outcome::Saved);
}

#[tokio::test]
async fn test_create_edit_round_trip() {
    let base_url = spawn_server().await;
    let mut catalog = catalog(ClientConfig::default().with_base_url(base_url));
    catalog.load().await;

    create(
        &mut catalog,
        FormValues::Author(AuthorForm {
            name: "Le Guin".to_string(),
        }),
    )
    .await;
    create(
        &mut catalog,
        FormValues::Category(CategoryForm {
            name: "Fantasy".to_string(),
            book_ids: Vec::new(),
        }),
    )
    .await;
    create(
        &mut catalog,
        FormValues::Book(BookForm {
            name: "Earthsea".to_string(),
            author_id: Some(1),
            category_ids: vec![2],
        }),
    )
    .await;

    let cache = catalog.cache();
    assert_eq!(cache.books.data().len(), 1);
    assert_eq!(cache.books.data()[0].author_name.as_deref(), Some("Le Guin"));
    assert_eq!(cache.authors.data()[0].books, vec!["Earthsea".to_string()]);
    assert_eq!(cache.selections.current().categories[0].id, 2);

    // Edit goes through name resolution, then the update schema
    let record = catalog.find(EntityKind::Book, 3).expect("created book");
    assert!(catalog.open_edit(record));
    match catalog.modal(EntityKind::Book).values() {
        Some(FormValues::Book(form)) => {
            assert_eq!(form.author_id, Some(1));
            assert_eq!(form.category_ids, vec![2]);
        }
        other => panic!("expected a book form, got {:?}", other),
    }
    catalog.modal_mut(EntityKind::Book).set_values(FormValues::Book(BookForm {
        name: "A Wizard of Earthsea (1968)".to_string(),
        author_id: Some(1),
        category_ids: Vec::new(),
    }));
    // 20 characters is the limit; this title is longer
    assert!(matches!(
        catalog.submit_open(EntityKind::Book).await,
        Outcome::Invalid(_)
    ));

    catalog.modal_mut(EntityKind::Book).set_values(FormValues::Book(BookForm {
        name: "Wizard of Earthsea".to_string(),
        author_id: Some(1),
        category_ids: Vec::new(),
    }));
    assert_eq!(catalog.submit_open(EntityKind::Book).await, Outcome::Saved);

    let book = &catalog.cache().books.data()[0];
    assert_eq!(book.book_name, "Wizard of Earthsea");
    assert!(book.categories.is_empty());
    assert!(catalog.cache().categories.data()[0].books.is_empty());
}

#[tokio::test]
async fn test_backend_field_errors_surface_on_modal() {
    let base_url = spawn_server().await;
    let config = ClientConfig {
        max_name_length: 60,
        ..ClientConfig::default().with_base_url(base_url)
    };
    let mut catalog = catalog(config);

    create(
        &mut catalog,
        FormValues::Author(AuthorForm {
            name: "Banks".to_string(),
        }),
    )
    .await;
    let mut notices = catalog.subscribe();

    let record = catalog.find(EntityKind::Author, 1).expect("created author");
    catalog.open_edit(record);
    let outcome = catalog
        .submit(
            Some(1),
            FormValues::Author(AuthorForm {
                name: "Iain Menzies Banks, author of the Culture novels".to_string(),
            }),
        )
        .await;

    assert_eq!(
        outcome,
        Outcome::Failed("authorName: size must be between 1 and 40".to_string())
    );
    let modal = catalog.modal(EntityKind::Author);
    assert_eq!(modal.phase(), ModalPhase::Open);
    assert_eq!(modal.editing_id(), Some(1));

    let raised = drain(&mut notices);
    assert_eq!(
        raised[0].message,
        "Failed to save author: authorName: size must be between 1 and 40"
    );
}

#[tokio::test]
async fn test_delete_missing_record_reports_plain_text() {
    let base_url = spawn_server().await;
    let mut catalog = catalog(ClientConfig::default().with_base_url(base_url));

    let outcome = catalog.remove(EntityKind::Book, 999).await;

    assert_eq!(
        outcome,
        Outcome::Failed("Book not found with id 999".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_backend_empties_collections() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut catalog = catalog(
        ClientConfig::default().with_base_url(format!("http://{}{}", addr, API_PREFIX)),
    );
    catalog.load().await;

    let cache = catalog.cache();
    for error in [
        cache.books.error(),
        cache.authors.error(),
        cache.categories.error(),
    ] {
        assert!(error.is_some_and(|e| e.starts_with("Failed to fetch")));
    }
    assert!(cache.books.data().is_empty());
    assert!(cache
        .selections
        .error()
        .is_some_and(|e| e.starts_with("Failed to load data for forms")));
}
