#[cfg(test)]
mod tests {
    use delta::apply::Apply;
    use delta::attributes::Attributes;
    use delta::delta::Delta;
    use delta::document::Document;
    use delta::Error;

    #[test]
    fn lines_pairs_content_with_line_attributes_passes() {
        let mut bold = Attributes::default();
        bold.insert("bold", true);

        let mut header = Attributes::default();
        header.insert("header", 1);

        let mut doc = Delta::default();
        doc.insert_attr("ab", bold.clone());
        doc.insert_attr("\n", header.clone());
        doc.insert("cd");

        let lines = doc.lines().unwrap();

        let mut expect_first = Delta::default();
        expect_first.insert_attr("ab", bold);
        assert_eq!(lines[0], (expect_first, header));

        let mut expect_second = Delta::default();
        expect_second.insert("cd");
        assert_eq!(lines[1], (expect_second, Attributes::default()));
    }

    #[test]
    fn lines_rejects_change_delta_passes() {
        let mut delta = Delta::default();
        delta.retain(2);
        delta.insert("x");

        assert!(matches!(delta.lines(), Err(Error::NotADocument)));
    }

    #[test]
    fn apply_composes_change_onto_document_passes() {
        let mut doc = Delta::default();
        doc.insert("Hello World!");

        let mut change = Delta::default();
        change.retain(6);
        change.delete(5);
        change.insert("Rust");

        let mut expected = Delta::default();
        expected.insert("Hello Rust!");

        assert_eq!(doc.apply(&change).unwrap(), expected);
    }

    #[test]
    fn apply_rejects_change_past_document_end_passes() {
        let mut doc = Delta::default();
        doc.insert("test");

        let mut change = Delta::default();
        change.delete(5);

        match doc.apply(&change) {
            Err(Error::LengthMismatch { doc_len, delta_len }) => {
                assert_eq!(doc_len, 4);
                assert_eq!(delta_len, 5);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
