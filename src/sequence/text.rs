//! String utilities: splitting a string into a sequence and joining a
//! sequence back into a string.

use std::fmt::Display;
use std::iter::FusedIterator;

/// The sequence returned by the function built by [`split`].
///
/// Segments borrow from the input string.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    remaining: Option<&'a str>,
    separator: String,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining?;

        if self.separator.is_empty() {
            let Some(character) = remaining.chars().next() else {
                self.remaining = None;
                return None;
            };
            let (segment, rest) = remaining.split_at(character.len_utf8());
            self.remaining = Some(rest);
            return Some(segment);
        }

        if let Some(end) = remaining.find(self.separator.as_str()) {
            self.remaining = Some(&remaining[end + self.separator.len()..]);
            Some(&remaining[..end])
        } else {
            self.remaining = None;
            Some(remaining)
        }
    }
}

impl FusedIterator for Split<'_> {}

/// Returns a function that splits a string at each occurrence of `separator`.
///
/// With a non-empty separator the segments between successive occurrences
/// are yielded, including a leading or trailing empty segment when the
/// string starts or ends with the separator; an empty string yields one
/// empty segment. With an empty separator each character is yielded as a
/// one-character `&str`, and an empty string yields nothing.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::split;
///
/// let fields: Vec<&str> = split(",")("a,b,,c,").collect();
/// assert_eq!(fields, vec!["a", "b", "", "c", ""]);
///
/// let characters: Vec<&str> = split("")("añb").collect();
/// assert_eq!(characters, vec!["a", "ñ", "b"]);
/// ```
#[inline]
pub fn split<'a>(separator: &str) -> impl Fn(&'a str) -> Split<'a> + Clone + use<'a> {
    let separator = separator.to_owned();
    move |input| Split {
        remaining: Some(input),
        separator: separator.clone(),
    }
}

/// Returns a function that concatenates the elements of a sequence with `separator` between them.
///
/// Elements are written through their [`Display`] implementation, one at a
/// time; the sequence is not collected first.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::join;
///
/// assert_eq!(join(", ")(vec![1, 2, 3]), "1, 2, 3");
/// assert_eq!(join("")(vec!['a', 'b']), "ab");
/// assert_eq!(join("-")(Vec::<u8>::new()), "");
/// ```
#[inline]
pub fn join<I>(separator: &str) -> impl Fn(I) -> String + Clone + use<I>
where
    I: IntoIterator,
    I::Item: Display,
{
    let separator = separator.to_owned();
    move |sequence| {
        let mut elements = sequence.into_iter();
        let Some(head) = elements.next() else {
            return String::new();
        };
        elements.fold(head.to_string(), |mut joined, element| {
            joined.push_str(&separator);
            joined.push_str(&element.to_string());
            joined
        })
    }
}
