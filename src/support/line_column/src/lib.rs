mod location;

pub use location::Location;
use std::iter::Fuse;

/// Iterator adapter that tags each character with the location it was read from.
pub struct LineColumn<I: Iterator<Item = char>> {
    iterator: Fuse<I>,
    next_line: u32,
    next_column: u32,
}

impl<I> Iterator for LineColumn<I>
where
    I: Iterator<Item = char>,
{
    type Item = (char, Location);

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.iterator.next()?;

        let location = Location {
            line: self.next_line,
            column: self.next_column,
        };

        match character {
            '\n' => {
                self.next_line += 1;
                self.next_column = 1;
            }
            _ => self.next_column += 1,
        }

        Some((character, location))
    }
}

impl<I> LineColumn<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(iterator: I) -> Self {
        Self {
            iterator: iterator.fuse(),
            next_line: 1,
            next_column: 1,
        }
    }

    /// Location of the character that will be returned next
    pub fn here(&self) -> Location {
        Location {
            line: self.next_line,
            column: self.next_column,
        }
    }
}
