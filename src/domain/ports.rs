use crate::utils::error::Result;

/// A destination that receives whole lines of text.
///
/// Each call to `write_line` is one write of `line` followed by a line
/// terminator chosen by the implementation.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
