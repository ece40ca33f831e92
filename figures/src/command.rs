//! Turns one line of the command stream into a [`Command`].
//!
//! A line is a verb followed by whitespace-separated fields. Trailing
//! fields beyond what a command consumes are ignored.

use glam::DVec2;

use crate::date::{Date, Predicate};
use crate::shapes::Shape;

/// One line of the command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Shape),
    /// `None` when the condition failed to parse; such a removal selects
    /// nothing.
    Rem(Option<Predicate>),
    Print,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown shape kind `{0}`")]
    UnknownShape(String),
    #[error("expected {0}")]
    MissingField(&'static str),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let mut fields = Fields::new(line);
        match fields.field("a command")? {
            "ADD" => add(fields),
            "REM" => Ok(Command::Rem(Predicate::parse(fields.rest()))),
            "PRINT" => Ok(Command::Print),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// `ADD <kind> <color> <kind-specific fields> <date>`
fn add(mut fields: Fields) -> Result<Command, ParseError> {
    let kind = fields.field("a shape kind")?;
    let color = fields.field("a color")?.to_string();
    let shape = match kind {
        "circle" => {
            let radius = fields.number("a radius")?;
            let center = fields.point()?;
            Shape::circle(color, center, radius, fields.date()?)
        }
        "rectangle" => {
            let corner1 = fields.point()?;
            let corner2 = fields.point()?;
            Shape::rectangle(color, corner1, corner2, fields.date()?)
        }
        "triangle" => {
            let a = fields.point()?;
            let b = fields.point()?;
            let c = fields.point()?;
            Shape::triangle(color, [a, b, c], fields.date()?)
        }
        other => return Err(ParseError::UnknownShape(other.to_string())),
    };
    Ok(Command::Add(shape))
}

/// Cursor over the whitespace-separated fields of a line.
struct Fields<'a> {
    text: &'a str,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text: text.trim_start(),
        }
    }

    fn field(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        if self.text.is_empty() {
            return Err(ParseError::MissingField(what));
        }
        let end = self
            .text
            .find(char::is_whitespace)
            .unwrap_or(self.text.len());
        let (field, rest) = self.text.split_at(end);
        self.text = rest.trim_start();
        Ok(field)
    }

    /// Whatever is left of the line, untokenized.
    fn rest(&self) -> &'a str {
        self.text
    }

    fn number(&mut self, what: &'static str) -> Result<f64, ParseError> {
        let field = self.field(what)?;
        field
            .parse()
            .map_err(|_| ParseError::InvalidNumber(field.to_string()))
    }

    fn point(&mut self) -> Result<DVec2, ParseError> {
        let x = self.number("a coordinate")?;
        let y = self.number("a coordinate")?;
        Ok(DVec2::new(x, y))
    }

    fn date(&mut self) -> Result<Date, ParseError> {
        let field = self.field("a creation date")?;
        Date::parse(field).ok_or_else(|| ParseError::InvalidDate(field.to_string()))
    }
}

#[test]
fn parses_each_shape_kind() {
    let cmd = Command::parse("ADD circle red 5 0 0 1.1.2020").unwrap();
    match cmd {
        Command::Add(shape) => {
            assert_eq!(shape.color(), "red");
            assert_eq!(shape.year(), 2020);
            assert_eq!(
                shape.to_string(),
                "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020"
            );
        }
        other => panic!("expected Add, got {:?}", other),
    }

    let cmd = Command::parse("ADD rectangle blue 0 0 2 2 1.1.2019").unwrap();
    assert!(matches!(cmd, Command::Add(ref s) if s.year() == 2019));

    let cmd = Command::parse("ADD triangle green 0 0 1 0 0 1 1.1.2021").unwrap();
    assert!(matches!(cmd, Command::Add(ref s) if s.year() == 2021));
}

#[test]
fn parses_rem_and_print() {
    let cmd = Command::parse("REM > 2019").unwrap();
    match cmd {
        Command::Rem(Some(p)) => {
            assert!(p.matches(2020));
            assert!(!p.matches(2019));
        }
        other => panic!("expected Rem, got {:?}", other),
    }

    assert_eq!(Command::parse("PRINT").unwrap(), Command::Print);
}

#[test]
fn malformed_rem_condition_selects_nothing() {
    assert_eq!(Command::parse("REM").unwrap(), Command::Rem(None));
    assert_eq!(Command::parse("REM >= 2019").unwrap(), Command::Rem(None));
    assert_eq!(Command::parse("REM > never").unwrap(), Command::Rem(None));
}

#[test]
fn rejects_unknown_verbs_and_kinds() {
    assert_eq!(
        Command::parse("DEL circle"),
        Err(ParseError::UnknownCommand("DEL".to_string()))
    );
    assert_eq!(
        Command::parse("ADD hexagon pink 1 2 3 1.1.2020"),
        Err(ParseError::UnknownShape("hexagon".to_string()))
    );
}

#[test]
fn rejects_malformed_add_fields() {
    assert_eq!(
        Command::parse("ADD circle red"),
        Err(ParseError::MissingField("a radius"))
    );
    assert_eq!(
        Command::parse("ADD circle red wide 0 0 1.1.2020"),
        Err(ParseError::InvalidNumber("wide".to_string()))
    );
    assert_eq!(
        Command::parse("ADD circle red 5 0 0 yesterday"),
        Err(ParseError::InvalidDate("yesterday".to_string()))
    );
    assert_eq!(
        Command::parse("ADD circle red 5 0 0"),
        Err(ParseError::MissingField("a creation date"))
    );
}

#[test]
fn ignores_extra_whitespace_and_trailing_fields() {
    let cmd = Command::parse("  ADD   circle  red  5  0  0  1.1.2020  extra").unwrap();
    assert!(matches!(cmd, Command::Add(ref s) if s.year() == 2020));
}
