use crate::math::Pos;

/// A cursor over a stream of characters.
/// Keeps track of the byte position in the source string.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<I> {
    input: I,
    pos: Pos,
}

impl<I> Cursor<I> {
    pub(crate) fn new(input: I) -> Self {
        Self {
            input,
            pos: Pos::default(),
        }
    }

    pub(crate) fn pos(&self) -> Pos {
        self.pos
    }
}

impl<I> Cursor<I>
where
    I: Iterator<Item = char> + Clone,
{
    /// Peek the next character without consuming it
    pub(crate) fn first(&self) -> Option<char> {
        self.input.clone().next()
    }

    /// Consume characters while `pred` holds
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool, out: &mut String) {
        while let Some(c) = self.first() {
            if !pred(c) {
                break;
            }
            self.next();
            out.push(c);
        }
    }
}

impl<I> Iterator for Cursor<I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.input.next();
        if let Some(c) = next {
            self.pos += c.len_utf8();
        }
        next
    }
}

impl<I> std::iter::FusedIterator for Cursor<I> where I: std::iter::FusedIterator<Item = char> {}
