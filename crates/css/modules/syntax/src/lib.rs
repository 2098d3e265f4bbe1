//! CSS Syntax Module Level 3 — Rule and declaration model, serialization.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
//! Serialization: <https://www.w3.org/TR/cssom-1/#serializing-css-values>

use core::fmt::{self, Write};
use cssparser::ToCss;

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Serialized value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
            important: false,
        }
    }

    /// Build a declaration from any value that knows how to serialize itself.
    pub fn from_value<T: ToCss>(name: impl Into<String>, value: &T) -> Self {
        Self::new(name, value.to_css_string())
    }
}

impl ToCss for Declaration {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(&self.name)?;
        dest.write_str(": ")?;
        dest.write_str(&self.value)?;
        if self.important {
            dest.write_str(" !important")?;
        }
        dest.write_char(';')
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(formatter)
    }
}

/// A single style rule with a raw prelude and ordered declarations.
///
/// Declaration order is preserved on output; when a property repeats, the
/// later declaration wins in the consumer's cascade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations within the rule block.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(prelude: impl Into<String>) -> Self {
        Self {
            prelude: prelude.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declarations(
        prelude: impl Into<String>,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Self {
        Self {
            prelude: prelude.into(),
            declarations: declarations.into_iter().collect(),
        }
    }

    /// All values declared for `name`, in source order.
    pub fn values_of<'rule>(&'rule self, name: &'rule str) -> impl Iterator<Item = &'rule str> {
        self.declarations
            .iter()
            .filter(move |decl| decl.name == name)
            .map(|decl| decl.value.as_str())
    }
}

impl ToCss for StyleRule {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(&self.prelude)?;
        dest.write_str(" {\n")?;
        for decl in &self.declarations {
            dest.write_str("  ")?;
            decl.to_css(dest)?;
            dest.write_char('\n')?;
        }
        dest.write_char('}')
    }
}

/// A stylesheet consisting of style rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level style rules in source order.
    pub rules: Vec<StyleRule>,
}

impl FromIterator<StyleRule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = StyleRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl ToCss for Stylesheet {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                dest.write_str("\n\n")?;
            }
            rule.to_css(dest)?;
        }
        if !self.rules.is_empty() {
            dest.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if declarations do not serialize as `name: value;`.
    fn declaration_serialization() {
        assert_eq!(Declaration::new("Float", "left").to_string(), "float: left;");
        let important = Declaration {
            important: true,
            ..Declaration::new("clear", "both")
        };
        assert_eq!(important.to_css_string(), "clear: both !important;");
    }

    #[test]
    /// # Panics
    /// Panics if repeated properties lose their order.
    fn repeated_properties_keep_order() {
        let rule = StyleRule::with_declarations(
            ".cell",
            [
                Declaration::new("width", "49%"),
                Declaration::new("width", "calc(50% - 1rem)"),
            ],
        );
        let widths: Vec<&str> = rule.values_of("width").collect();
        assert_eq!(widths, ["49%", "calc(50% - 1rem)"]);
        assert_eq!(
            rule.to_css_string(),
            ".cell {\n  width: 49%;\n  width: calc(50% - 1rem);\n}"
        );
    }

    #[test]
    /// # Panics
    /// Panics if rules are not separated by a blank line.
    fn stylesheet_separates_rules() {
        let sheet: Stylesheet = [
            StyleRule::with_declarations("a", [Declaration::new("float", "left")]),
            StyleRule::new("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(sheet.to_css_string(), "a {\n  float: left;\n}\n\nb {\n}\n");
        assert_eq!(Stylesheet::default().to_css_string(), "");
    }
}
