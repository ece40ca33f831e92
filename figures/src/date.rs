use std::fmt;

/// Creation date in `D.M.Y` form, e.g. `15.6.2020`.
///
/// Only tokenized, never range checked; the catalogue cares about the year
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    day: u32,
    month: u32,
    year: i32,
}

impl Date {
    pub fn parse(text: &str) -> Option<Date> {
        let mut parts = text.split('.');
        let day = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let year = parts.next()?.parse().ok()?;
        Some(Date { day, month, year })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Gt,
    Lt,
    Eq,
}

/// A year comparison, written `<op> <year>` with op one of `>`, `<`, `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    op: Op,
    year: i32,
}

impl Predicate {
    /// Parses a condition. Anything unrecognized yields `None`; a missing
    /// predicate selects nothing.
    pub fn parse(text: &str) -> Option<Predicate> {
        let mut fields = text.split_whitespace();
        let op = match fields.next()? {
            ">" => Op::Gt,
            "<" => Op::Lt,
            "=" => Op::Eq,
            _ => return None,
        };
        let year = fields.next()?.parse().ok()?;
        Some(Predicate { op, year })
    }

    pub fn matches(&self, year: i32) -> bool {
        match self.op {
            Op::Gt => year > self.year,
            Op::Lt => year < self.year,
            Op::Eq => year == self.year,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            Op::Gt => '>',
            Op::Lt => '<',
            Op::Eq => '=',
        };
        write!(f, "{} {}", op, self.year)
    }
}

#[test]
fn parses_dates() {
    let date = Date::parse("15.6.2020").unwrap();
    assert_eq!(date.year(), 2020);
    assert_eq!(date.to_string(), "15.6.2020");

    // tokenization only, no range checks
    assert_eq!(Date::parse("40.13.1").unwrap().year(), 1);

    assert!(Date::parse("").is_none());
    assert!(Date::parse("15.6").is_none());
    assert!(Date::parse("a.b.c").is_none());
}

#[test]
fn parses_conditions() {
    let p = Predicate::parse("> 2019").unwrap();
    assert!(p.matches(2020));
    assert!(!p.matches(2019));

    let p = Predicate::parse("< 2021").unwrap();
    assert!(p.matches(2020));
    assert!(!p.matches(2021));

    let p = Predicate::parse("= 2020").unwrap();
    assert!(p.matches(2020));
    assert!(!p.matches(2019));
}

#[test]
fn malformed_conditions_select_nothing() {
    assert!(Predicate::parse("").is_none());
    assert!(Predicate::parse(">").is_none());
    assert!(Predicate::parse(">= 2019").is_none());
    assert!(Predicate::parse("> soon").is_none());
    assert!(Predicate::parse("2019").is_none());
}

#[test]
fn condition_ignores_extra_fields() {
    let p = Predicate::parse("  =   2020  trailing junk").unwrap();
    assert!(p.matches(2020));
}
