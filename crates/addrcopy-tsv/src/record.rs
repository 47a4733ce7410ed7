//! The two-field record and its line representation.

/// Field separator used on both the read and the write side.
pub const DELIMITER: char = '\t';

/// A record: exactly two ordered text fields.
///
/// Reading always yields two fields, whatever the arity of the line; any
/// fields past the second are dropped by [`Record::from_line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    first: String,
    second: String,
}

impl Record {
    /// Creates a record from its two fields.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Parses a line (without its terminator) into a record.
    ///
    /// Returns `None` when the line splits into fewer than two fields, which
    /// includes the empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use addrcopy_tsv::Record;
    ///
    /// let record = Record::from_line("Bo\tElm St.\tExtra").unwrap();
    /// assert_eq!(record.first(), "Bo");
    /// assert_eq!(record.second(), "Elm St.");
    ///
    /// assert!(Record::from_line("").is_none());
    /// assert!(Record::from_line("no tab here").is_none());
    /// ```
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split(DELIMITER);
        let first = fields.next()?;
        let second = fields.next()?;
        Some(Self::new(first, second))
    }

    /// The first field.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The second field.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Consumes the record, returning both fields in order.
    #[must_use]
    pub fn into_fields(self) -> (String, String) {
        (self.first, self.second)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Record {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

/// Number of tab-separated fields in a line. An empty line has one field.
pub(crate) fn field_count(line: &str) -> usize {
    line.split(DELIMITER).count()
}

/// Joins fields with single tabs into `buf`, returning `false` when there
/// were no fields at all.
pub(crate) fn join_fields<I, S>(fields: I, buf: &mut String) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut any = false;
    for field in fields {
        if any {
            buf.push(DELIMITER);
        }
        buf.push_str(field.as_ref());
        any = true;
    }
    any
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::two_fields("Ann\tOak St.", "Ann", "Oak St.")]
    #[case::extra_fields_dropped("Bo\tElm St.\tExtra\tMore", "Bo", "Elm St.")]
    #[case::empty_first("\tOak St.", "", "Oak St.")]
    #[case::empty_second("Ann\t", "Ann", "")]
    #[case::only_tab("\t", "", "")]
    #[case::spaces_kept(" Ann \t Oak St. ", " Ann ", " Oak St. ")]
    fn from_line_takes_first_two_fields(
        #[case] line: &str,
        #[case] first: &str,
        #[case] second: &str,
    ) {
        let record = Record::from_line(line).expect("line should form a record");
        assert_eq!(record.first(), first);
        assert_eq!(record.second(), second);
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_field("Shelby Macias")]
    #[case::spaces_only("   ")]
    fn from_line_rejects_fewer_than_two_fields(#[case] line: &str) {
        assert!(Record::from_line(line).is_none());
    }

    #[test]
    fn field_count_of_empty_line_is_one() {
        assert_eq!(field_count(""), 1);
        assert_eq!(field_count("a\tb\tc"), 3);
    }

    #[test]
    fn join_fields_separates_with_single_tabs() {
        let mut buf = String::new();
        assert!(join_fields(["This", "should", "be", "written"], &mut buf));
        assert_eq!(buf, "This\tshould\tbe\twritten");
    }

    #[test]
    fn join_fields_single_field_has_no_tab() {
        let mut buf = String::new();
        assert!(join_fields(["alone"], &mut buf));
        assert_eq!(buf, "alone");
    }

    #[test]
    fn join_fields_reports_empty_input() {
        let mut buf = String::new();
        assert!(!join_fields(Vec::<String>::new(), &mut buf));
        assert!(buf.is_empty());
    }

    #[test]
    fn join_fields_keeps_empty_fields() {
        let mut buf = String::new();
        assert!(join_fields(["", ""], &mut buf));
        assert_eq!(buf, "\t");
    }

    #[test]
    fn record_from_tuple_and_into_fields() {
        let record = Record::from(("Ann", String::from("Oak St.")));
        assert_eq!(
            record.into_fields(),
            ("Ann".to_string(), "Oak St.".to_string())
        );
    }
}
