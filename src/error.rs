//! Descriptive misuse errors.
//!
//! Plain values describing a nil argument, a nil target, a nil property or an
//! integer overflow. They only carry data and render a fixed diagnostic
//! message.
use std::fmt;

/// A required parameter of a method or function was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NilArgError {
    /// The name of the parameter. Omitted from the message when empty.
    pub parameter: String,

    /// The type owning the method, if the callee is a method.
    pub type_name: Option<&'static str>,

    /// The name of the method or function.
    pub method: String,
}

impl NilArgError {
    #[must_use]
    pub fn new(
        parameter: impl Into<String>,
        type_name: Option<&'static str>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            type_name,
            method: method.into(),
        }
    }
}

impl fmt::Display for NilArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter")?;

        if !self.parameter.is_empty() {
            write!(f, " '{}'", self.parameter)?;
        }

        match self.type_name {
            Some(_) if self.method.is_empty() => write!(f, " to method")?,
            Some(type_name) => write!(f, " to method {type_name}.{}", self.method)?,
            None => {
                write!(f, " to function")?;

                if !self.method.is_empty() {
                    write!(f, " {}", self.method)?;
                }
            }
        }

        write!(f, " must not be nil, but was")
    }
}

impl std::error::Error for NilArgError {}

/// A method was invoked on an absent (uninitialized) target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NilTargetError {
    /// The type the method belongs to.
    pub type_name: Option<&'static str>,

    /// The name of the method. Omitted from the message when empty.
    pub method: String,
}

impl NilTargetError {
    #[must_use]
    pub fn new(type_name: Option<&'static str>, method: impl Into<String>) -> Self {
        Self {
            type_name,
            method: method.into(),
        }
    }
}

impl fmt::Display for NilTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target for method")?;

        if let Some(type_name) = self.type_name {
            if self.method.is_empty() {
                write!(f, " of {type_name}")?;
            } else {
                write!(f, " {type_name} {}", self.method)?;
            }
        }

        write!(f, " must not be nil, but was")
    }
}

impl std::error::Error for NilTargetError {}

/// A required property of a value was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NilPropError {
    /// The name of the property. Omitted from the message when empty.
    pub property: String,

    /// The type owning the property.
    pub type_name: Option<&'static str>,
}

impl NilPropError {
    #[must_use]
    pub fn new(property: impl Into<String>, type_name: Option<&'static str>) -> Self {
        Self {
            property: property.into(),
            type_name,
        }
    }
}

impl fmt::Display for NilPropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_property(f, &self.property, self.type_name)?;

        write!(f, " must not be nil, but was")
    }
}

impl std::error::Error for NilPropError {}

/// An integer addition or subtraction left the representable range.
///
/// The rendered arithmetic is diagnostic text: the sum shown is computed with
/// wrapping arithmetic and may itself be meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowsIntError {
    /// What was being computed. When absent the message says `Addition` or
    /// `Subtraction`, depending on the sign of `delta`.
    pub meaning: Option<String>,

    /// The value before the operation.
    pub old: i128,

    /// The amount added to `old`.
    pub delta: i128,
}

impl OverflowsIntError {
    #[must_use]
    pub fn new(meaning: Option<String>, old: i128, delta: i128) -> Self {
        Self {
            meaning,
            old,
            delta,
        }
    }

    /// Overflow of an integer property, for example a byte counter.
    ///
    /// The meaning reads `Property '<property>' of <type>`.
    #[must_use]
    pub fn for_property(
        property: &str,
        type_name: Option<&'static str>,
        old: i128,
        delta: i128,
    ) -> Self {
        let meaning = PropertyLabel {
            property,
            type_name,
        }
        .to_string();

        Self::new(Some(meaning), old, delta)
    }
}

impl fmt::Display for OverflowsIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.meaning {
            Some(meaning) if !meaning.is_empty() => write!(f, "{meaning}")?,
            _ if self.delta < 0 => write!(f, "Subtraction")?,
            _ => write!(f, "Addition")?,
        }

        if self.delta < 0 {
            write!(f, " underflows")?;
        } else {
            write!(f, " overflows")?;
        }

        write!(
            f,
            " int: {} + {} == {}",
            self.old,
            self.delta,
            self.old.wrapping_add(self.delta)
        )
    }
}

impl std::error::Error for OverflowsIntError {}

struct PropertyLabel<'a> {
    property: &'a str,
    type_name: Option<&'static str>,
}

impl fmt::Display for PropertyLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_property(f, self.property, self.type_name)
    }
}

fn write_property(
    f: &mut fmt::Formatter<'_>,
    property: &str,
    type_name: Option<&'static str>,
) -> fmt::Result {
    write!(f, "Property")?;

    if !property.is_empty() {
        write!(f, " '{property}'")?;
    }

    if let Some(type_name) = type_name {
        write!(f, " of {type_name}")?;
    }

    Ok(())
}
