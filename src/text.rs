//! 点・方位の文字列表現。
//!
//! 点は `[x,y]` / `[x,y,z]` と書く (括弧は省略可)。方位は表示名で書く。

use std::fmt;
use std::str::FromStr;

use logos::{Lexer, Logos};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::point2::Point2;
use crate::point3::Point3;

#[derive(Debug, Logos)]
enum Token {
    #[regex(r"\[")]
    BracketOpen,

    #[regex(r"\]")]
    BracketClose,

    #[regex(r",")]
    Comma,

    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i32>())]
    Number(i32),

    #[error]
    #[regex(r"[[:space:]]+", logos::skip)]
    Error,
}

fn parse_error(input: &str, msg: String) -> Error {
    tracing::debug!(input, %msg, "parse failed");
    Error::Parse {
        input: input.to_owned(),
        msg,
    }
}

/// 成分をちょうど `N` 個読む。
fn parse_components<const N: usize>(input: &str) -> Result<[i32; N]> {
    let mut lex = Token::lexer(input);
    let lex = &mut lex;

    let mut next = lex.next();
    let bracket = matches!(next, Some(Token::BracketOpen));
    if bracket {
        next = lex.next();
    }

    let mut components = [0; N];
    for (i, component) in components.iter_mut().enumerate() {
        if i > 0 {
            expect_comma(input, lex, next)?;
            next = lex.next();
        }
        *component = expect_number(input, lex, next)?;
        next = lex.next();
    }

    if bracket {
        if !matches!(next, Some(Token::BracketClose)) {
            return Err(parse_error(
                input,
                format!("expected ']', but got: {}", lex.slice()),
            ));
        }
        next = lex.next();
    }

    if next.is_some() {
        return Err(parse_error(
            input,
            format!("expected end, but got: {}", lex.slice()),
        ));
    }

    Ok(components)
}

fn expect_number(input: &str, lex: &Lexer<Token>, token: Option<Token>) -> Result<i32> {
    if let Some(Token::Number(n)) = token {
        Ok(n)
    } else {
        Err(parse_error(
            input,
            format!("expected number, but got: {}", lex.slice()),
        ))
    }
}

fn expect_comma(input: &str, lex: &Lexer<Token>, token: Option<Token>) -> Result<()> {
    if let Some(Token::Comma) = token {
        Ok(())
    } else {
        Err(parse_error(
            input,
            format!("expected comma, but got: {}", lex.slice()),
        ))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.x, self.y, self.z)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name().unwrap_or("Invalid"))
    }
}

impl FromStr for Point2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = parse_components::<2>(s)?;
        Ok(Self::new(x, y))
    }
}

impl FromStr for Point3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z] = parse_components::<3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match Self::of_name(s.trim()) {
            Self::Invalid => Err(parse_error(s, "unknown direction".to_owned())),
            dir => Ok(dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(3, -4).to_string(), "[3,-4]");
        assert_eq!(Point3::new(0, 1, -2).to_string(), "[0,1,-2]");
        assert_eq!(Direction::NorthEast.to_string(), "NorthEast");
        assert_eq!(Direction::Invalid.to_string(), "Invalid");
    }

    #[test]
    fn test_parse_point() {
        assert_eq!("[3,-4]".parse::<Point2>().unwrap(), Point2::new(3, -4));
        assert_eq!(" [ 3 , -4 ] ".parse::<Point2>().unwrap(), Point2::new(3, -4));
        assert_eq!("10,+20".parse::<Point2>().unwrap(), Point2::new(10, 20));
        assert_eq!(
            "[1,2,-3]".parse::<Point3>().unwrap(),
            Point3::new(1, 2, -3)
        );

        assert!("[1,2".parse::<Point2>().is_err());
        assert!("1,2]".parse::<Point2>().is_err());
        assert!("[1,2,3]".parse::<Point2>().is_err());
        assert!("[1,2]".parse::<Point3>().is_err());
        assert!("[a,2]".parse::<Point2>().is_err());
        assert!("".parse::<Point2>().is_err());
        assert!("[99999999999,0]".parse::<Point2>().is_err());
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("SouthWest".parse::<Direction>().unwrap(), Direction::SouthWest);
        assert!(matches!(
            "Up".parse::<Direction>(),
            Err(Error::Parse { .. })
        ));
        assert!("Invalid".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_parse() {
        for p in Point2::ZERO.neighbors().map(|(_, p)| p * 13) {
            assert_eq!(p.to_string().parse::<Point2>().unwrap(), p);
        }
    }
}
