use tests::prelude::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, Materialize)]
#[materialize(rename_all = "SCREAMING_SNAKE_CASE")]
struct Invoice {
    invoice_id: i64,
    #[column("cust")]
    customer: String,
    total_cents: Option<i64>,
    #[actions(read)]
    audit_note: String,
    #[skip]
    cached_label: String,
}

#[test]
fn struct_and_field_attributes_drive_aliases() {
    let export = MappingExport::<Invoice>::declarative();
    let aliases: Vec<_> = export
        .iter()
        .map(|config| config.active_alias().to_string())
        .collect();

    assert_eq!(aliases, ["INVOICE_ID", "cust", "TOTAL_CENTS"]);
    assert_eq!(export.catalog().len(), 4);
}

#[test]
fn processor_reads_derived_type() {
    let processor = Processor::<Invoice>::builder("select * from invoices")
        .build()
        .unwrap();

    let mut cursor = LoggingCursor::new([result_set!(
        ["invoice_id", "CUST", "total_cents", "audit_note"];
        [1, "acme", 1250, "imported"],
        [2, "globex", Value::Null, "manual"],
    )]);

    let invoices = processor.execute(&mut cursor).unwrap();

    assert_eq!(
        invoices,
        vec![
            Invoice {
                invoice_id: 1,
                customer: "acme".to_string(),
                total_cents: Some(1250),
                ..Invoice::default()
            },
            Invoice {
                invoice_id: 2,
                customer: "globex".to_string(),
                total_cents: None,
                ..Invoice::default()
            },
        ]
    );

    // Read-only properties are never bound.
    assert!(!cursor.cells_read().contains(&3));
}

#[test]
fn read_only_property_can_be_mapped_explicitly() {
    let processor = Processor::<Invoice>::builder("select * from invoices")
        .property("audit_note", |config| {
            config.alias("note");
        })
        .build()
        .unwrap();

    let mut cursor = LoggingCursor::new([result_set!(["INVOICE_ID", "note"]; [9, "checked"])]);
    let invoices = processor.execute(&mut cursor).unwrap();

    assert_eq!(invoices[0].invoice_id, 9);
    assert_eq!(invoices[0].audit_note, "checked");
}

#[test]
fn binding_errors_name_the_field() {
    let processor = Processor::<Invoice>::builder("select * from invoices")
        .build()
        .unwrap();

    let mut cursor = LoggingCursor::new([result_set!(["INVOICE_ID"]; ["not a number"])]);
    let err = assert_err!(processor.execute(&mut cursor), is_column_binding);

    assert_eq!(err.binding(), Some(("invoice_id", "INVOICE_ID", "i64")));
    assert!(err.root().is_coercion());
}
