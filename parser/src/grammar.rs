//! Grammar primitives and the combinators that compose them.
//!
//! Every consumer receives the offset of `input` within the original string (for error reporting),
//! the remaining input, and the version builder it reports components to.
//! On success it returns the input that it did not consume.

use crate::{
    error::{ErrorSpan, ErrorType, Part, Segment, Span},
    VersionBuilder,
};

pub(crate) type Step<'input> = Result<&'input str, ErrorSpan>;

pub(crate) trait Consumer<'input, V> {
    fn consume(&self, pos: usize, input: &'input str, version: &mut V) -> Step<'input>;
}

/// A single separator character.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Literal(char);

pub(crate) const DOT: Literal = Literal('.');
pub(crate) const HYPHEN: Literal = Literal('-');
pub(crate) const PLUS: Literal = Literal('+');

impl<'input, V> Consumer<'input, V> for Literal {
    fn consume(&self, pos: usize, input: &'input str, _: &mut V) -> Step<'input> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c == self.0 => Ok(chars.as_str()),
            Some(_) => Err(ErrorSpan::new(
                ErrorType::UnexpectedChar { expected: self.0 },
                Span::next_char(pos, input),
            )),
            None => Err(ErrorSpan::new(
                ErrorType::UnexpectedEnd { expected: self.0 },
                Span::new(pos, pos),
            )),
        }
    }
}

/// A non-negative integer without leading zeros for one of the core parts.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Number(Part);

pub(crate) const MAJOR: Number = Number(Part::Major);
pub(crate) const MINOR: Number = Number(Part::Minor);
pub(crate) const PATCH: Number = Number(Part::Patch);

impl<'input, V: VersionBuilder<'input>> Consumer<'input, V> for Number {
    fn consume(&self, pos: usize, input: &'input str, version: &mut V) -> Step<'input> {
        let len = input.bytes().take_while(|b| b.is_ascii_digit()).count();
        if len == 0 {
            return Err(ErrorSpan::new(
                ErrorType::NotANumber(self.0),
                Span::next_char(pos, input),
            ));
        }
        let (digits, remain) = input.split_at(len);
        if len > 1 && digits.starts_with('0') {
            return Err(ErrorSpan::new(
                ErrorType::LeadingZero(Segment::Part(self.0)),
                Span::new(pos, pos + len),
            ));
        }
        match self.0 {
            Part::Major => version.set_major(digits),
            Part::Minor => version.set_minor(digits),
            Part::Patch => version.set_patch(digits),
        }
        Ok(remain)
    }
}

/// A single dot separated identifier of the pre-release or build section.
///
/// The identifier runs until the next `.` or `+`, or until the end of input.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Identifier(Segment);

pub(crate) const PRE_RELEASE: Identifier = Identifier(Segment::PreRelease);
pub(crate) const BUILD: Identifier = Identifier(Segment::Build);

impl<'input, V: VersionBuilder<'input>> Consumer<'input, V> for Identifier {
    fn consume(&self, pos: usize, input: &'input str, version: &mut V) -> Step<'input> {
        let segment = self.0;
        let len = input
            .bytes()
            .position(|b| b == b'.' || b == b'+')
            .unwrap_or_else(|| input.len());
        let (identifier, remain) = input.split_at(len);

        if identifier.is_empty() {
            return Err(ErrorSpan::new(
                ErrorType::EmptyIdentifier(segment),
                Span::next_char(pos, input),
            ));
        }
        if let Some(invalid) = identifier.bytes().position(|b| !is_identifier_byte(b)) {
            // everything before `invalid` is ascii, so it is a char boundary
            return Err(ErrorSpan::new(
                ErrorType::InvalidCharacter(segment),
                Span::next_char(pos + invalid, &identifier[invalid..]),
            ));
        }
        if segment == Segment::PreRelease
            && len > 1
            && identifier.starts_with('0')
            && identifier.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ErrorSpan::new(
                ErrorType::LeadingZero(segment),
                Span::new(pos, pos + len),
            ));
        }

        if segment == Segment::PreRelease {
            version.add_pre_release(identifier);
        } else {
            version.add_build(identifier);
        }
        Ok(remain)
    }
}

#[inline]
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Succeeds only if there is no input left.
#[derive(Debug, Copy, Clone)]
pub(crate) struct End;

impl<'input, V> Consumer<'input, V> for End {
    fn consume(&self, pos: usize, input: &'input str, _: &mut V) -> Step<'input> {
        if input.is_empty() {
            Ok(input)
        } else {
            Err(ErrorSpan::new(
                ErrorType::TrailingData,
                Span::new(pos, pos + input.len()),
            ))
        }
    }
}

/// Runs all consumers in order, every one of them must succeed.
///
/// A failure does not hand back any remaining input, callers keep the input they passed in.
/// The version may have been partially populated though.
pub(crate) struct Sequence<'c, 'input, V>(pub(crate) &'c [&'c dyn Consumer<'input, V>]);

impl<'c, 'input, V> Consumer<'input, V> for Sequence<'c, 'input, V> {
    fn consume(&self, mut pos: usize, input: &'input str, version: &mut V) -> Step<'input> {
        let mut remain = input;
        for consumer in self.0 {
            let next = consumer.consume(pos, remain, version)?;
            pos += remain.len() - next.len();
            remain = next;
        }
        Ok(remain)
    }
}

/// Zero or one occurrence of a section.
///
/// If `probe` fails, the section is absent and nothing is consumed.
/// Once `probe` succeeded, the section has started and all of `rest` must succeed.
pub(crate) struct Optional<'c, 'input, V> {
    pub(crate) probe: &'c dyn Consumer<'input, V>,
    pub(crate) rest: Sequence<'c, 'input, V>,
}

impl<'c, 'input, V> Consumer<'input, V> for Optional<'c, 'input, V> {
    fn consume(&self, pos: usize, input: &'input str, version: &mut V) -> Step<'input> {
        let remain = match self.probe.consume(pos, input, version) {
            Ok(remain) => remain,
            Err(_) => return Ok(input),
        };
        self.rest
            .consume(pos + input.len() - remain.len(), remain, version)
    }
}

/// Zero or more repetitions of a group of consumers.
///
/// The repetition stops if the first consumer of a cycle fails.
/// Any later failure within a started cycle is an error.
pub(crate) struct Repeat<'c, 'input, V>(pub(crate) &'c [&'c dyn Consumer<'input, V>]);

impl<'c, 'input, V> Consumer<'input, V> for Repeat<'c, 'input, V> {
    fn consume(&self, mut pos: usize, input: &'input str, version: &mut V) -> Step<'input> {
        let mut remain = input;
        if self.0.is_empty() {
            return Ok(remain);
        }
        for (index, consumer) in self.0.iter().cycle().enumerate() {
            let next = match consumer.consume(pos, remain, version) {
                Ok(next) => next,
                Err(_) if index % self.0.len() == 0 => break,
                Err(error) => return Err(error),
            };
            pos += remain.len() - next.len();
            remain = next;
        }
        Ok(remain)
    }
}

/// `major.minor.patch[-pre-release][+build]`
pub(crate) fn version<'input, V: VersionBuilder<'input>>(
    input: &'input str,
    version: &mut V,
) -> Result<(), ErrorSpan> {
    let pre_release_tail: [&dyn Consumer<'input, V>; 2] = [&DOT, &PRE_RELEASE];
    let pre_release_tail = Repeat(&pre_release_tail);
    let pre_release: [&dyn Consumer<'input, V>; 2] = [&PRE_RELEASE, &pre_release_tail];
    let pre_release = Optional {
        probe: &HYPHEN,
        rest: Sequence(&pre_release),
    };

    let build_tail: [&dyn Consumer<'input, V>; 2] = [&DOT, &BUILD];
    let build_tail = Repeat(&build_tail);
    let build: [&dyn Consumer<'input, V>; 2] = [&BUILD, &build_tail];
    let build = Optional {
        probe: &PLUS,
        rest: Sequence(&build),
    };

    let grammar: [&dyn Consumer<'input, V>; 8] = [
        &MAJOR,
        &DOT,
        &MINOR,
        &DOT,
        &PATCH,
        &pre_release,
        &build,
        &End,
    ];
    Sequence(&grammar).consume(0, input, version).map(drop)
}

/// `major.minor.patch`
pub(crate) fn core<'input, V: VersionBuilder<'input>>(
    input: &'input str,
    version: &mut V,
) -> Result<(), ErrorSpan> {
    let grammar: [&dyn Consumer<'input, V>; 6] = [&MAJOR, &DOT, &MINOR, &DOT, &PATCH, &End];
    Sequence(&grammar).consume(0, input, version).map(drop)
}

/// `identifier(.identifier)*` for either the pre-release or the build section.
pub(crate) fn identifiers<'input, V: VersionBuilder<'input>>(
    identifier: Identifier,
    input: &'input str,
    version: &mut V,
) -> Result<(), ErrorSpan> {
    let tail: [&dyn Consumer<'input, V>; 2] = [&DOT, &identifier];
    let tail = Repeat(&tail);
    let grammar: [&dyn Consumer<'input, V>; 3] = [&identifier, &tail, &End];
    Sequence(&grammar).consume(0, input, version).map(drop)
}
