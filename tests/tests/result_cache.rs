use tests::prelude::*;

use pretty_assertions::assert_eq;
use rowmap::{Params, ResultCache};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Materialize)]
struct Product {
    id: i64,
    title: String,
}

fn products() -> LoggingCursor {
    LoggingCursor::new([result_set!(
        ["id", "title"];
        [1, "lamp"],
        [2, "desk"],
    )])
}

#[tokio::test]
async fn second_fetch_is_served_from_cache() {
    let processor = Processor::<Product>::builder("select id, title from products where shop = @shop")
        .result_cache(ResultCache::in_memory())
        .build()
        .unwrap();

    let opened = &AtomicUsize::new(0);
    let params = Params::new().with("shop", 7);

    for _ in 0..3 {
        let items = processor
            .fetch(&params, || async move {
                opened.fetch_add(1, Ordering::SeqCst);
                Ok(products())
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "desk");
    }

    assert_eq!(opened.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_parameters_miss() {
    let processor = Processor::<Product>::builder("select id, title from products where shop = @shop")
        .result_cache(ResultCache::in_memory())
        .build()
        .unwrap();

    let opened = &AtomicUsize::new(0);

    for shop in [1, 2, 1] {
        processor
            .fetch(&Params::new().with("shop", shop), || async move {
                opened.fetch_add(1, Ordering::SeqCst);
                Ok(products())
            })
            .await
            .unwrap();
    }

    assert_eq!(opened.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_load_is_not_cached() {
    let processor = Processor::<Product>::builder("select id, title from products")
        .result_cache(ResultCache::in_memory())
        .build()
        .unwrap();
    let params = Params::new();

    let broken = LoggingCursor::new([result_set!(["id"]; ["x"])]);
    let err = assert_err!(
        processor
            .fetch(&params, || async move { Ok(broken) })
            .await,
        is_column_binding
    );
    assert!(err.root().is_coercion());

    let items = processor
        .fetch(&params, || async { Ok(products()) })
        .await
        .unwrap();
    assert_eq!(
        items[0],
        Product {
            id: 1,
            title: "lamp".to_string(),
        }
    );
}
