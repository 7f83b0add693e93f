//! Line transport: reads sensor lines from stdin or a device/file path on a
//! background thread and publishes each valid sample into the shared slot.

use anyhow::Context;
use rose_core::{decode_line, SampleSlot};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::thread;

pub type LineSource = Box<dyn BufRead + Send>;

/// `-` selects stdin; anything else is opened as a file (a serial tty works).
pub fn open(path: &str) -> anyhow::Result<LineSource> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("opening input `{path}`"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Read until EOF or a read error. Returns the number of accepted lines.
pub fn pump(mut source: impl BufRead, slot: &SampleSlot) -> usize {
    let mut accepted = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match source.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                // serial noise can carry invalid bytes; they just fail to decode
                let line = String::from_utf8_lossy(&buf);
                match decode_line(&line) {
                    Ok(sample) => {
                        slot.publish(sample);
                        accepted += 1;
                    }
                    Err(e) => log::debug!("[input] dropped {:?}: {}", line.trim_end(), e),
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("[input] read error: {e}");
                break;
            }
        }
    }
    accepted
}

pub fn spawn_reader(source: LineSource, slot: SampleSlot) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("sample-reader".into())
        .spawn(move || {
            let accepted = pump(source, &slot);
            log::info!("[input] source closed after {accepted} samples; holding last state");
        })
}
