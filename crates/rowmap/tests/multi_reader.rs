use rowmap::{ColumnChecker, DynamicRow, Materialize, MemoryCursor, MultiReader, ResultSet, Value};

#[derive(Debug, Default, PartialEq, Materialize)]
struct Author {
    id: i64,
    name: String,
}

#[derive(Debug, Default, PartialEq, Materialize)]
struct Book {
    author_id: i64,
    title: String,
}

fn batch() -> MemoryCursor {
    MemoryCursor::new([
        ResultSet::new(["id", "name"]).row([Value::I64(1), Value::from("Le Guin")]),
        ResultSet::new(["author_id", "title"])
            .row([Value::I64(1), Value::from("The Dispossessed")])
            .row([Value::I64(1), Value::from("The Lathe of Heaven")]),
        ResultSet::new(["total"]).row([Value::I64(2)]),
    ])
}

#[test]
fn reads_one_type_per_result_set() {
    let mut cursor = batch();
    let mut reader = MultiReader::new(&mut cursor);

    let authors: Vec<Author> = reader.read().unwrap();
    let books: Vec<Book> = reader.read().unwrap();
    let total: Vec<i64> = reader.read().unwrap();

    assert_eq!(
        authors,
        vec![Author {
            id: 1,
            name: "Le Guin".to_string(),
        }]
    );
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].title, "The Lathe of Heaven");
    assert_eq!(total, vec![2]);
    assert_eq!(reader.position(), 3);
}

#[test]
fn exhausted_batch_yields_empty_sets() {
    let mut cursor = MemoryCursor::new([ResultSet::new(["id"]).row([Value::I64(1)])]);
    let mut reader = MultiReader::new(&mut cursor);

    assert_eq!(reader.read::<i64>().unwrap(), vec![1]);
    assert!(reader.read::<DynamicRow>().unwrap().is_empty());
}

#[test]
fn keeps_one_checker_per_position() {
    let mut cursor = batch();
    let mut reader = MultiReader::new(&mut cursor);

    reader.read::<Author>().unwrap();
    reader.read::<Book>().unwrap();
    reader.read::<i64>().unwrap();

    let columns: Vec<ColumnChecker> = reader.into_columns();
    assert_eq!(columns.len(), 3);
    assert!(columns[0].report().unwrap().contains("name"));
    assert!(columns[1].report().unwrap().contains("title"));

    let mut cursor = batch();
    let mut reader = MultiReader::new(&mut cursor).with_columns(columns);
    let authors: Vec<Author> = reader.read().unwrap();
    assert_eq!(authors[0].id, 1);
    assert_eq!(reader.into_columns()[0].cached(), 2);
}
