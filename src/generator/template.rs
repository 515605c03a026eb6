//! Template mini-language: literal text with `$low^high$` placeholders which are replaced with
//! uniformly sampled values.
//!
//! Delimiters are matched strictly left to right, nearest pair first, so nesting is not possible.
//! If any bound of a placeholder contains a decimal point the placeholder samples a real value
//! rounded to 3 decimal digits, otherwise it samples an integer from the inclusive range.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::{GeneratorError, TemplateErrorKind};

const DELIMITER: char = '$';
const RANGE_SEPARATOR: char = '^';
const REAL_PRECISION: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
    Int { low: i64, high: i64 },
    Real { low: f64, high: f64 },
}

impl Range {
    /// Parses placeholder body, i.e. the text between two delimiters.
    fn parse(body: &str, template: &str) -> Result<Self, GeneratorError> {
        if body.matches(RANGE_SEPARATOR).count() != 1 {
            return Err(GeneratorError::malformed_template(
                TemplateErrorKind::BadRangeSyntax,
                template,
            ));
        }
        let Some((low, high)) = body.split_once(RANGE_SEPARATOR) else {
            return Err(GeneratorError::malformed_template(
                TemplateErrorKind::BadRangeSyntax,
                template,
            ));
        };
        let bad_literal =
            || GeneratorError::malformed_template(TemplateErrorKind::BadNumericLiteral, template);
        let invalid_range = || GeneratorError::InvalidRange {
            placeholder: format!("{DELIMITER}{body}{DELIMITER}"),
        };

        if low.contains('.') || high.contains('.') {
            let low: f64 = low.parse().map_err(|_| bad_literal())?;
            let high: f64 = high.parse().map_err(|_| bad_literal())?;
            if !low.is_finite() || !high.is_finite() {
                return Err(bad_literal());
            }
            // Same overflow condition as `Uniform::new_inclusive`, which scales the span by
            // 1 / (1 - EPSILON).
            if low > high || !((high - low) / (1.0 - f64::EPSILON)).is_finite() {
                return Err(invalid_range());
            }
            Ok(Range::Real { low, high })
        } else {
            let low: i64 = low.parse().map_err(|_| bad_literal())?;
            let high: i64 = high.parse().map_err(|_| bad_literal())?;
            if low > high {
                return Err(invalid_range());
            }
            Ok(Range::Int { low, high })
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> String {
        match *self {
            Range::Int { low, high } => rng.gen_range(low..=high).to_string(),
            Range::Real { low, high } => format_real(rng.gen_range(low..=high)),
        }
    }
}

/// Rounds value to 3 decimal digits and prints it in the shortest form which always keeps
/// a fractional part, e.g. `2.0`, `0.5`, `13.125`.
pub fn format_real(value: f64) -> String {
    let scaled = value * REAL_PRECISION;
    // Values this large have no fractional digits to round.
    let rounded = if scaled.is_finite() {
        scaled.round() / REAL_PRECISION
    } else {
        value
    };
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        rounded.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder(Range),
}

/// Template compiled once and rendered any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, GeneratorError> {
        if template.matches(DELIMITER).count() % 2 != 0 {
            return Err(GeneratorError::malformed_template(
                TemplateErrorKind::UnbalancedDelimiter,
                template,
            ));
        }

        let mut segments = vec![];
        let mut rest = template;
        while let Some(first) = rest.find(DELIMITER) {
            let after_first = &rest[first + DELIMITER.len_utf8()..];
            let Some(second) = after_first.find(DELIMITER) else {
                return Err(GeneratorError::malformed_template(
                    TemplateErrorKind::UnbalancedDelimiter,
                    template,
                ));
            };
            if first > 0 {
                segments.push(Segment::Literal(rest[..first].to_string()));
            }
            segments.push(Segment::Placeholder(Range::parse(
                &after_first[..second],
                template,
            )?));
            rest = &after_first[second + DELIMITER.len_utf8()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder(_)))
            .count()
    }

    /// Every placeholder draws its own sample.
    pub fn render<R: Rng>(&self, rng: &mut R) -> String {
        let mut rendered = String::with_capacity(self.source.len());
        for segment in self.segments.iter() {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(range) => rendered.push_str(&range.sample(rng)),
            }
        }
        rendered
    }
}

/// Expands templates using an owned random source.
///
/// Use [`TemplateExpander::seeded`] for reproducible traces and
/// [`TemplateExpander::from_entropy`] when no seed is configured.
pub struct TemplateExpander<R: Rng = Pcg64> {
    rng: R,
}

impl TemplateExpander<Pcg64> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Pcg64::from_entropy())
    }
}

impl<R: Rng> TemplateExpander<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn expand(&mut self, template: &str) -> Result<String, GeneratorError> {
        let template = Template::parse(template)?;
        Ok(self.expand_parsed(&template))
    }

    pub fn expand_parsed(&mut self, template: &Template) -> String {
        template.render(&mut self.rng)
    }
}
