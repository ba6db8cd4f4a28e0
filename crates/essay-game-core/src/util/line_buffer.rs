use std::{io, sync::{Arc, Mutex}};

///
/// Shared line-oriented writer, used to capture game output.
/// 
/// Clones share the same buffer, so one clone can be handed to a game
/// while another is kept to inspect what was written.
/// 
#[derive(Clone, Default)]
pub struct LineBuffer(Arc<Mutex<Inner>>);

#[derive(Default)]
struct Inner {
    lines: Vec<String>,
    partial: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl AsRef<str>) {
        self.0.lock().unwrap().lines.push(value.as_ref().to_string());
    }

    pub fn lines(&mut self) -> Vec<String> {
        self.0.lock().unwrap().lines.drain(..).collect()
    }

    pub fn take(&mut self) -> String {
        self.lines().join(", ")
    }
}

impl io::Write for LineBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.0.lock().unwrap();

        for byte in buf {
            if *byte == b'\n' {
                let line = String::from_utf8_lossy(&inner.partial).into_owned();
                inner.partial.clear();
                inner.lines.push(line);
            } else {
                inner.partial.push(*byte);
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::LineBuffer;

    #[test]
    fn splits_lines() {
        let mut buf = LineBuffer::new();

        write!(buf, "a").unwrap();
        writeln!(buf, "b").unwrap();
        writeln!(buf, "c").unwrap();
        write!(buf, "pending").unwrap();

        assert_eq!(buf.take(), "ab, c");
        assert_eq!(buf.take(), "");
    }

    #[test]
    fn clones_share_lines() {
        let mut buf = LineBuffer::new();
        let mut ptr = buf.clone();

        ptr.push("start");
        writeln!(ptr, "tick").unwrap();

        assert_eq!(buf.take(), "start, tick");
    }
}
