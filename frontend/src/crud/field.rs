use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Failure to apply a form value to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{field}` expects a number, got `{value}`")]
    ExpectedNumber { field: String, value: String },
    #[error("field `{field}` expects text")]
    ExpectedText { field: String },
    #[error("field `{field}` expects a list of selected options")]
    ExpectedSelection { field: String },
    #[error("field `{field}` expects a yes/no flag")]
    ExpectedFlag { field: String },
    #[error("`{value}` is not a valid option for `{field}`")]
    UnknownOption { field: String, value: String },
}

/// A value coming out of a form control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Selection(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Selection(value)
    }
}

impl FieldValue {
    fn describe(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Selection(items) => items.join(","),
        }
    }

    pub fn into_text(self, field: &impl Display) -> Result<String, FieldError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            _ => Err(FieldError::ExpectedText {
                field: field.to_string(),
            }),
        }
    }

    /// Numeric inputs arrive as text; an empty input counts as zero.
    pub fn into_number(self, field: &impl Display) -> Result<f64, FieldError> {
        let parsed = match &self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) if text.trim().is_empty() => Some(0.0),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed
            .filter(|n| n.is_finite())
            .ok_or_else(|| FieldError::ExpectedNumber {
                field: field.to_string(),
                value: self.describe(),
            })
    }

    pub fn into_count(self, field: &impl Display) -> Result<u32, FieldError> {
        let description = self.describe();
        let n = self.into_number(field)?;
        if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return Err(FieldError::ExpectedNumber {
                field: field.to_string(),
                value: description,
            });
        }
        Ok(n as u32)
    }

    pub fn into_year(self, field: &impl Display) -> Result<i32, FieldError> {
        let description = self.describe();
        let n = self.into_number(field)?;
        if n.fract() != 0.0 || n.abs() > f64::from(i32::MAX) {
            return Err(FieldError::ExpectedNumber {
                field: field.to_string(),
                value: description,
            });
        }
        Ok(n as i32)
    }

    pub fn into_flag(self, field: &impl Display) -> Result<bool, FieldError> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Text(text) if text == "true" || text == "on" => Ok(true),
            FieldValue::Text(text) if text == "false" || text.is_empty() => Ok(false),
            _ => Err(FieldError::ExpectedFlag {
                field: field.to_string(),
            }),
        }
    }

    /// Multi-select controls always hand over the complete selected set.
    pub fn into_selection(self, field: &impl Display) -> Result<Vec<String>, FieldError> {
        match self {
            FieldValue::Selection(items) => Ok(items),
            _ => Err(FieldError::ExpectedSelection {
                field: field.to_string(),
            }),
        }
    }

    pub fn into_option<T: FromStr>(self, field: &impl Display) -> Result<T, FieldError> {
        let text = self.into_text(field)?;
        text.parse::<T>().map_err(|_| FieldError::UnknownOption {
            field: field.to_string(),
            value: text,
        })
    }
}

/// Typed address of one leaf in a record, parsed from a dotted form name
/// such as `"name"` or `"address.city"`.
pub trait FieldPath: Clone + Display + FromStr<Err = FieldError> + 'static {}

impl<T> FieldPath for T where T: Clone + Display + FromStr<Err = FieldError> + 'static {}

/// Record (or nested record) that can take a value at one of its paths.
pub trait Assign {
    type Field: FieldPath;

    fn assign(&mut self, field: &Self::Field, value: FieldValue) -> Result<(), FieldError>;
}

/// Splits the first segment off a dotted path.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Parses the remainder of a nested path, reporting the full path on failure.
pub fn parse_nested<F: FieldPath>(full_path: &str, rest: &str) -> Result<F, FieldError> {
    rest.parse::<F>()
        .map_err(|_| FieldError::UnknownField(full_path.to_string()))
}

/// Declares a flat field enum together with its path names.
macro_rules! leaf_fields {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $path:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $path),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::crud::FieldError;

            fn from_str(path: &str) -> Result<Self, Self::Err> {
                match path {
                    $($path => Ok($name::$variant),)+
                    _ => Err($crate::crud::FieldError::UnknownField(path.to_string())),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use leaf_fields;

#[cfg(test)]
mod tests {
    use super::*;

    leaf_fields! {
        enum SampleField {
            Name => "name",
            Amount => "amount",
        }
    }

    #[test]
    fn leaf_fields_round_trip_through_display() {
        for field in SampleField::ALL {
            assert_eq!(field.to_string().parse::<SampleField>(), Ok(*field));
        }
        assert_eq!(
            "missing".parse::<SampleField>(),
            Err(FieldError::UnknownField("missing".into()))
        );
    }

    #[test]
    fn numeric_text_is_parsed_and_empty_is_zero() {
        let field = SampleField::Amount;
        assert_eq!(FieldValue::from("12.5").into_number(&field), Ok(12.5));
        assert_eq!(FieldValue::from(" 3 ").into_count(&field), Ok(3));
        assert_eq!(FieldValue::from("").into_count(&field), Ok(0));
        assert_eq!(FieldValue::from(2024.0).into_year(&field), Ok(2024));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let field = SampleField::Amount;
        assert!(matches!(
            FieldValue::from("abc").into_number(&field),
            Err(FieldError::ExpectedNumber { .. })
        ));
        assert!(FieldValue::from("-1").into_count(&field).is_err());
        assert!(FieldValue::from("2.5").into_count(&field).is_err());
        assert!(FieldValue::Number(f64::NAN).into_number(&field).is_err());
    }

    #[test]
    fn kind_mismatches_name_the_field() {
        let err = FieldValue::Flag(true)
            .into_text(&SampleField::Name)
            .unwrap_err();
        assert_eq!(err.to_string(), "field `name` expects text");
        assert!(FieldValue::from("x")
            .into_selection(&SampleField::Name)
            .is_err());
        assert_eq!(FieldValue::from("on").into_flag(&SampleField::Name), Ok(true));
    }

    #[test]
    fn split_path_separates_first_segment() {
        assert_eq!(split_path("name"), ("name", None));
        assert_eq!(split_path("address.city"), ("address", Some("city")));
        assert_eq!(split_path("a.b.c"), ("a", Some("b.c")));
    }
}
