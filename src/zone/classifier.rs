use super::{
    error::ZoneError,
    record::{MIN_TOKENS, RawRecord, RecordKind, TypedRecord},
};

/// A and AAAA records split out of a record set, in input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classified {
    pub a: Vec<TypedRecord>,
    pub aaaa: Vec<TypedRecord>,
    pub dropped: usize,
}

impl Classified {
    pub fn total(&self) -> usize {
        self.a.len() + self.aaaa.len() + self.dropped
    }
}

/// Partitions records by their type field.
///
/// Anything that is not exactly `A` or `AAAA` is counted as dropped. A record
/// too short to carry a type and an address aborts the whole classification.
pub fn classify(records: Vec<RawRecord>) -> Result<Classified, ZoneError> {
    let mut classified = Classified::default();

    for record in records {
        if record.tokens().len() < MIN_TOKENS {
            return Err(ZoneError::MalformedRecord {
                line: record.line(),
            });
        }

        match record.record_type().and_then(|token| token.parse::<RecordKind>().ok()) {
            Some(RecordKind::A) => classified.a.push(TypedRecord::new(RecordKind::A, record)),
            Some(RecordKind::AAAA) => {
                classified.aaaa.push(TypedRecord::new(RecordKind::AAAA, record));
            }
            None => classified.dropped += 1,
        }
    }

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: &str) -> RawRecord {
        RawRecord::new(line.split_whitespace())
    }

    #[test]
    fn splits_a_and_aaaa() {
        let records = vec![
            raw("host1 IN A 10.0.0.1"),
            raw("host2 IN AAAA 2001:db8::1"),
            raw("host3 IN A 10.0.0.3"),
        ];
        let classified = classify(records).unwrap();
        assert_eq!(classified.a.len(), 2);
        assert_eq!(classified.aaaa.len(), 1);
        assert_eq!(classified.a[1].name(), "host3");
        assert_eq!(classified.aaaa[0].address(), "2001:db8::1");
        assert_eq!(classified.dropped, 0);
    }

    #[test]
    fn drops_other_types_and_keeps_count() {
        let records = vec![
            raw("www IN CNAME host1"),
            raw("host1 IN A 10.0.0.1"),
            raw("mail IN MX 10"),
            raw("host2 IN a 10.0.0.2"),
        ];
        let classified = classify(records).unwrap();
        assert_eq!(classified.a.len(), 1);
        assert!(classified.aaaa.is_empty());
        assert_eq!(classified.dropped, 3);
        assert_eq!(classified.total(), 4);
    }

    #[test]
    fn every_classified_record_has_its_type() {
        let records = vec![
            raw("a 300 A 10.0.0.1"),
            raw("b 300 AAAA ::1"),
            raw("c 300 TXT hello"),
        ];
        let classified = classify(records).unwrap();
        assert!(classified
            .a
            .iter()
            .all(|record| record.kind == RecordKind::A && record.raw().record_type() == Some("A")));
        assert!(classified.aaaa.iter().all(|record| record.kind == RecordKind::AAAA
            && record.raw().record_type() == Some("AAAA")));
    }

    #[test]
    fn short_record_is_malformed() {
        let records = vec![raw("host1 IN A 10.0.0.1"), raw("host2 IN A")];
        let result = classify(records);
        assert_eq!(
            result,
            Err(ZoneError::MalformedRecord {
                line: "host2 IN A".to_string()
            })
        );
    }

    #[test]
    fn short_record_of_unknown_type_is_still_malformed() {
        let result = classify(vec![raw("x IN")]);
        assert!(matches!(result, Err(ZoneError::MalformedRecord { .. })));
    }

    #[test]
    fn empty_input_is_empty_result() {
        assert_eq!(classify(Vec::new()).unwrap(), Classified::default());
    }
}
