use super::Document;
use std::collections::BTreeMap;

/// Order each bucket by composed title, comparing bytes. The sort is stable,
/// so equal titles keep source order.
pub(super) fn sort_by_title<K>(buckets: &mut BTreeMap<K, Vec<Document>>) {
    for documents in buckets.values_mut() {
        documents.sort_by(|a, b| a.header.title.cmp(&b.header.title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Header;

    fn document(title: &str, url: &str) -> Document {
        Document {
            header: Header {
                title: title.to_string(),
                ..Header::default()
            },
            url: url.to_string(),
            rego: String::new(),
        }
    }

    fn titles(documents: &[Document]) -> Vec<&str> {
        documents
            .iter()
            .map(|document| document.header.title.as_str())
            .collect()
    }

    #[test]
    fn sorts_each_bucket_by_title() {
        let mut buckets = BTreeMap::new();
        buckets.insert("high", vec![document("B: Y", "b"), document("A: X", "a")]);
        buckets.insert("low", vec![document("b", "b"), document("B", "B")]);

        sort_by_title(&mut buckets);

        assert_eq!(titles(&buckets["high"]), ["A: X", "B: Y"]);
        // Uppercase sorts before lowercase byte-wise.
        assert_eq!(titles(&buckets["low"]), ["B", "b"]);
    }

    #[test]
    fn equal_titles_keep_processing_order() {
        let mut buckets = BTreeMap::new();
        buckets.insert(
            "high",
            vec![
                document("Same", "first"),
                document("Earlier", "x"),
                document("Same", "second"),
            ],
        );

        sort_by_title(&mut buckets);

        let urls: Vec<_> = buckets["high"].iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, ["x", "first", "second"]);
    }
}
