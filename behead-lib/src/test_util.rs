use core::time::Duration;
use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose contents stay readable after it has been moved into a task.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock poisoned")).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader that hands out one byte per call and sleeps before each one.
#[derive(Debug)]
pub struct SlowReader {
    data: Cursor<Vec<u8>>,
    delay: Duration,
}

impl SlowReader {
    pub fn new(data: &[u8], delay: Duration) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            delay,
        }
    }
}

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        std::thread::sleep(self.delay);
        let len = buf.len().min(1);
        self.data.read(&mut buf[..len])
    }
}
