use phf::{Map, phf_map};
use std::f64::consts::PI;
use thiserror::Error;

const ANGSTROM: f64 = 1.0 / 0.52917721092;
const JOULE: f64 = 1.0 / 4.35974434e-18;
const AVOGADRO: f64 = 6.02214129e23;
const KJMOL: f64 = 1.0e3 * JOULE / AVOGADRO;
const ELECTRON_MASS_KG: f64 = 9.10938291e-31;

/// Named units expressed in atomic units (bohr, hartree, elementary charge, electron mass).
static UNITS: Map<&'static str, f64> = phf_map! {
    "au" => 1.0,
    "bohr" => 1.0,
    "hartree" => 1.0,
    "e" => 1.0,
    "rad" => 1.0,
    "angstrom" => ANGSTROM,
    "nanometer" => 10.0 * ANGSTROM,
    "picometer" => 0.01 * ANGSTROM,
    "meter" => 1.0e10 * ANGSTROM,
    "joule" => JOULE,
    "electronvolt" => 1.0 / 27.21138505,
    "kjmol" => KJMOL,
    "kcalmol" => 4.184 * KJMOL,
    "kelvin" => 1.3806488e-23 * JOULE,
    "deg" => PI / 180.0,
    "coulomb" => 1.0 / 1.602176565e-19,
    "amu" => 1.660538921e-27 / ELECTRON_MASS_KG,
};

#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot resolve unit expression '{expr}': {reason}")]
pub struct UnitError {
    pub expr: String,
    pub reason: String,
}

/// Resolves a unit expression such as `kjmol/angstrom**2` into a multiplier that
/// converts a value given in that unit into atomic units.
///
/// Expressions combine named units and plain numbers with `*`, `/`, `**` and
/// parentheses. Exponents may be signed and fractional.
pub fn parse_unit(expr: &str) -> Result<f64, UnitError> {
    let tokens = tokenize(expr).map_err(|reason| UnitError {
        expr: expr.to_string(),
        reason,
    })?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression().and_then(|v| {
        if parser.pos == parser.tokens.len() {
            Ok(v)
        } else {
            Err(format!("unexpected trailing token {:?}", parser.tokens[parser.pos]))
        }
    });
    value.map_err(|reason| UnitError {
        expr: expr.to_string(),
        reason,
    })
}

/// Returns the names of all units known to [`parse_unit`].
pub fn known_units() -> impl Iterator<Item = &'static str> {
    UNITS.keys().copied()
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Number(f64),
    Mul,
    Div,
    Pow,
    Minus,
    Plus,
    Open,
    Close,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => i += 1,
            '*' if chars.get(i + 1) == Some(&'*') => {
                tokens.push(Token::Pow);
                i += 2;
            }
            '*' => {
                tokens.push(Token::Mul);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Div);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Scientific notation, e.g. 1e-3. A bare trailing `e` stays a unit name.
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '-' || chars[j] == '+') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| format!("invalid number '{}'", text))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Name(chars[start..i].iter().collect()));
            }
            other => return Err(format!("unexpected character '{}'", other)),
        }
    }
    if tokens.is_empty() {
        return Err("empty expression".to_string());
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn expression(&mut self) -> Result<f64, String> {
        let mut value = self.power()?;
        loop {
            match self.peek() {
                Some(Token::Mul) => {
                    self.pos += 1;
                    value *= self.power()?;
                }
                Some(Token::Div) => {
                    self.pos += 1;
                    value /= self.power()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn power(&mut self) -> Result<f64, String> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Pow) {
            self.pos += 1;
            let sign = match self.peek() {
                Some(Token::Minus) => {
                    self.pos += 1;
                    -1.0
                }
                Some(Token::Plus) => {
                    self.pos += 1;
                    1.0
                }
                _ => 1.0,
            };
            let exponent = self.primary()?;
            return Ok(base.powf(sign * exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, String> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Name(name)) => UNITS
                .get(name.as_str())
                .copied()
                .ok_or_else(|| format!("unknown unit '{}'", name)),
            Some(Token::Open) => {
                let value = self.expression()?;
                match self.next() {
                    Some(Token::Close) => Ok(value),
                    _ => Err("unbalanced parenthesis".to_string()),
                }
            }
            Some(other) => Err(format!("unexpected token {:?}", other)),
            None => Err("unexpected end of expression".to_string()),
        }
    }
}
